use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 16;
pub const OTP_LEN: usize = 5;

/// Validation result for passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    TooLong,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => {
                Some("Password must be at least 8 characters")
            }
            Self::TooLong => Some("Password must be at most 16 characters"),
        }
    }
}

/// Validate a password against the backend's length rules so forms can
/// reject obviously bad input before a round trip.
pub fn validate_password(password: &str) -> PasswordValidation {
    if password.len() < PASSWORD_MIN_LEN {
        return PasswordValidation::TooShort;
    }
    if password.len() > PASSWORD_MAX_LEN {
        return PasswordValidation::TooLong;
    }
    PasswordValidation::Valid
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Register {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtp {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPassword {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassword {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Body for both recording a borrowal and returning one; the book is
/// named in the URL path.
#[derive(Debug, Serialize, Deserialize)]
pub struct BorrowBook {
    pub email: String,
}

/// Sent as a multipart form; the avatar travels as a file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddNewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<AvatarUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

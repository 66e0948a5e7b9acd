use serde::{Deserialize, Serialize};

use crate::{Book, BorrowRecord, User};

/// The `{ "message": ... }` body most endpoints answer with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

/// Login, OTP verification, and password reset authenticate the caller
/// and return the user alongside the status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authenticated {
    pub message: String,
    pub user: User,
}

/// `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: User,
}

/// `GET /book/all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Books {
    pub books: Vec<Book>,
}

/// `GET /borrow/my-borrowed-books` and
/// `GET /borrow/borrowed-books-by-users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBooks {
    pub borrowed_books: Vec<BorrowRecord>,
}

/// `GET /user/all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

/// Shape of error bodies. Anything that fails to parse into this is
/// treated as message-less.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

pub mod books;
pub mod borrowals;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod users;
pub mod verify_otp;

pub use books::BooksPage;
pub use borrowals::BorrowalsPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use users::UsersPage;
pub use verify_otp::VerifyOtpPage;

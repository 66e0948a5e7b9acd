pub mod add_admin_popup;
pub mod add_book_popup;
pub mod banner;
pub mod modal;
pub mod navbar;
pub mod record_borrow_popup;
pub mod return_borrow_popup;
pub mod settings_popup;
pub mod stat_card;
pub mod toast_container;

pub use add_admin_popup::AddAdminPopup;
pub use add_book_popup::AddBookPopup;
pub use banner::{Banner, BannerKind};
pub use modal::Modal;
pub use navbar::Navbar;
pub use record_borrow_popup::RecordBorrowPopup;
pub use return_borrow_popup::ReturnBorrowPopup;
pub use settings_popup::SettingsPopup;
pub use stat_card::StatCard;
pub use toast_container::ToastContainer;

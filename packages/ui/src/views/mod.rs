mod app_shell;
pub use app_shell::AppShell;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod receipt_upload;
pub use receipt_upload::ReceiptUpload;

mod receipt_list;
pub use receipt_list::ReceiptList;

mod ustva_status;
pub use ustva_status::UstvaStatus;

mod open_items;
pub use open_items::OpenItems;

pub mod file_storage;
pub mod html_print;

pub use file_storage::FileStorage;
pub use html_print::HtmlPrintAdapter;

//! Request handlers.

pub mod language;
pub mod page;
pub mod page_data;

pub use language::set_language;
pub use page::render_page;
pub use page_data::page_data;

pub mod categories;
pub mod errors;
pub mod pagination;
pub mod repositories;
pub mod shelves;
pub mod year_window;

// Re-exports
pub use categories::{Category, InvalidCategory};
pub use errors::ShelfError;
pub use shelves::{ShelfEntry, ShelfItem, ShelfPage, ShelfType};
pub use year_window::{InvalidYear, YearWindow, parse_year};

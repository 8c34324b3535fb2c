pub mod document;
pub mod fetch;
pub mod input;
pub mod progress;
pub mod workbook;

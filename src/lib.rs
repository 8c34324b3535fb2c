pub mod batch;
pub mod cache;
pub mod error;
pub mod formula;
pub mod grid;
pub mod io;
pub mod render;
pub mod resolve;
pub mod slice;
pub mod source;
pub mod topology;
pub mod types;

pub mod entry;
pub mod error;
pub mod invoker;
pub mod parser;
pub mod picker;
pub mod preprocess;
pub mod state;

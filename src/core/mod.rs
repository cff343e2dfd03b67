pub mod engine;
pub mod scanner;
pub mod table;
pub mod types;

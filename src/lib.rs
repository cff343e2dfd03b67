// src/lib.rs

pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub use crate::core::engine::{Config, Engine, Outcome};
pub use crate::error::WordCountError;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};

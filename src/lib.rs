// Library crate exposing modules for the binary and integration tests

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod logger;
pub mod progress;
pub mod report;
pub mod scan;
pub mod util;

pub use error::{Error, Result};

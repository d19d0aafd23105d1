pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{CaterError, Result};
pub use models::{Event, IndentResult, MenuItem};

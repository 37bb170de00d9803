//! Resume and portfolio extraction into a portfolio site's content document

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod processing;

pub use config::Config;
pub use error::{FolioError, Result};
pub use pipeline::{Pipeline, RunOptions, RunReport};

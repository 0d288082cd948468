pub mod bump;
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
mod error;
pub mod generator;
pub mod manifest;
pub mod prompt;
pub mod session;

pub use error::{ChangelogError, Result};

#[cfg(test)]
pub mod test_helpers;

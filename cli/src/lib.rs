//! Library half of `ink-cli`, split out so integration tests can reach the
//! loader and formatters.

pub mod cli;
pub mod commands;
pub mod content;
pub mod output;
pub mod utils;

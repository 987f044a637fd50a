#![deny(clippy::print_stdout)]

pub mod command_line;
pub mod error;
pub mod fingerprint;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod supplier;

//! vitalrisk-cli library root.
//!
//! Exposes config handling and the text renderers so integration tests can
//! exercise them without going through the command-line parser.

pub mod aws;
pub mod config;
pub mod render;

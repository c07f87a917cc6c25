//! vitalrisk-bedrock
//!
//! Clinical insight generation via the Bedrock Converse API, plus the
//! prompt construction and structured-output parsing around it.

pub mod client;
pub mod error;
pub mod insight;
pub mod parse;
pub mod prompt;
pub mod tokens;

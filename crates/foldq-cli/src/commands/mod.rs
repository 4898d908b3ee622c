//! CLI command implementations.

pub mod circuit;
pub mod common;
pub mod interactive;
pub mod operator;
pub mod simulate;
pub mod version;

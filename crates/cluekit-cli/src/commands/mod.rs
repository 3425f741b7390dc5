//! CLI command implementations.

pub mod decide;
pub mod generate;
pub mod qa;
pub mod sample;
pub mod status;
pub mod validate;

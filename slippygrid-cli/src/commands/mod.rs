//! CLI command implementations.

pub mod common;
pub mod config;
pub mod grid;
pub mod svg;
pub mod tile;

// logtally - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or touch the filesystem directly.

pub mod counter;
pub mod filter;
pub mod model;
pub mod parser;
pub mod report;

// logtally - app/mod.rs
//
// Application layer: loading and run orchestration.
// Dependencies: core and platform layers.

pub mod analysis;
pub mod loader;

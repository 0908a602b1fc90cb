// logtally - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binary in `main.rs` is a thin CLI wrapper around `app::analysis`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

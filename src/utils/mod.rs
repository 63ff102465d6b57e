// src/utils/mod.rs
pub mod log_utils;
#[allow(clippy::module_inception)]
pub mod utils;

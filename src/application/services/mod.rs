//! Application services — one module per use-case.

pub mod cleanup;
pub mod depends;
pub mod install;
pub mod remove;
pub mod status;
pub mod supervise;

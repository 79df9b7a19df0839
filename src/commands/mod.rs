//! Command implementations

pub mod depends;
pub mod install;
pub mod remove;
pub mod status;

//! Domain layer — pure types, validation, and the lifecycle state machine.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` (except path inspection in
//! `Layout`), `std::process`, or `std::net`. All functions are synchronous
//! and take data in, returning data out.

pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod settings;

pub use error::{DependsError, InstallError, RemoveError, StatusError};
pub use layout::Layout;
pub use lifecycle::LifecycleState;
pub use settings::Settings;

//! Infrastructure layer — production implementations of the application ports.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod process;

pub use config::IniConfigTranslator;
pub use fetch::HttpPackageFetcher;
pub use process::SysinfoLocator;

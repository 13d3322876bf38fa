pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{ClientConfig, DEFAULT_BASE_URL};
pub use crate::core::{
    client::RxNormClient,
    command::{execute, LookupCommand},
};
pub use crate::domain::{
    model::{PropertyRecord, Rxcui},
    ports::DrugInfoSource,
};
pub use crate::utils::error::{ErrorCategory, Result, RxNormError};

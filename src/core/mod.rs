pub mod client;
pub mod command;

pub use crate::domain::model::{PropertyRecord, Rxcui};
pub use crate::domain::ports::DrugInfoSource;
pub use crate::utils::error::Result;

pub mod ehsani;
pub mod electrophoresis;
pub mod engine;
pub mod igk;
pub mod iron;
pub mod screening;

pub use crate::domain::model::{CalculationResult, Classification};
pub use crate::domain::ports::{RecordSink, SettingsProvider};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod registration;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalRecordStore;
pub use config::CalculatorConfig;
pub use crate::core::{
    ehsani::{compute_ehsani, EhsaniForm},
    electrophoresis::{classify_electrophoresis, evaluate_electrophoresis},
    engine::{DiagnosticEngine, Evaluation},
    igk::{compute_igk, IgkForm},
    iron::classify_iron,
};
pub use domain::model::{CountingPrinciple, OrdinalFlag, ScreeningLabel};
pub use registration::cpf::is_valid_cpf;
pub use utils::error::{CalcError, Result};

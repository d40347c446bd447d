#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::CalculatorConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "anemia-calc")]
#[command(about = "Anemia screening calculators: Ehsani, IGK, iron metabolism, electrophoresis")]
pub struct CliConfig {
    /// TOML file with calculator settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory for saved result records (overrides the config file)
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML settings (or defaults) and applies command-line overrides.
    pub fn load_settings(&self) -> crate::utils::error::Result<CalculatorConfig> {
        let mut settings = match &self.config {
            Some(path) => CalculatorConfig::from_file(path)?,
            None => CalculatorConfig::default(),
        };
        if let Some(output_path) = &self.output_path {
            settings.records.output_path = output_path.clone();
        }
        Ok(settings)
    }
}

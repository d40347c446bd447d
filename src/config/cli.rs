use clap::{Args, Subcommand};

use crate::domain::model::{CountingPrinciple, OrdinalFlag};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Iron metabolism: classify serum iron and ferritin flags
    Iron {
        /// Serum iron: low/normal/high (or ↓/N/↑)
        #[arg(long)]
        iron: OrdinalFlag,
        /// Ferritin: low/normal/high (or ↓/N/↑)
        #[arg(long)]
        ferritin: OrdinalFlag,
        #[command(flatten)]
        save: SaveArgs,
    },

    /// Hemoglobin electrophoresis / HPLC: classify the HbA2 fraction
    Electrophoresis {
        /// HbA2 in percent, e.g. 4,2
        #[arg(long)]
        hba2: String,
        #[command(flatten)]
        save: SaveArgs,
    },

    /// Ehsani index (mcv - 10 * rbc)
    Ehsani {
        /// Red blood cell count (millions/mm³)
        #[arg(long)]
        rbc: String,
        /// Mean corpuscular volume (fL)
        #[arg(long)]
        mcv: String,
        /// Cutoff; defaults to the configured value
        #[arg(long)]
        cutoff: Option<String>,
        #[command(flatten)]
        save: SaveArgs,
    },

    /// IGK index (mcv² * rdw / (100 * hb))
    Igk {
        /// Hemoglobin (g/dL)
        #[arg(long)]
        hb: String,
        /// Red cell distribution width (%)
        #[arg(long)]
        rdw: String,
        /// Red blood cell count (millions/mm³)
        #[arg(long)]
        rbc: String,
        /// Mean corpuscular volume (fL)
        #[arg(long)]
        mcv: String,
        /// Analyzer counting principle: impedance or laser
        #[arg(long)]
        principle: Option<CountingPrinciple>,
        #[command(flatten)]
        save: SaveArgs,
    },

    /// Validate and format a CPF
    Cpf { value: String },

    /// Pick the first screening calculator from a birth date (DD/MM/YYYY)
    Screening {
        #[arg(long)]
        birth_date: String,
    },

    /// Validate a patient registration and print the patient document
    Patient(PatientArgs),

    /// Validate a professional sign-up and print the profile
    Professional(ProfessionalArgs),

    /// List stored results for a patient, newest first
    History {
        #[arg(long)]
        patient_id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Patient the result belongs to; required with --save
    #[arg(long)]
    pub patient_id: Option<String>,

    /// Append the result to the local records file
    #[arg(long, requires = "patient_id")]
    pub save: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PatientArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub birth_date: String,
    /// Height in meters, e.g. 1,70
    #[arg(long)]
    pub height: String,
    /// Weight in kilograms, e.g. 65,50
    #[arg(long)]
    pub weight: String,
    /// feminino, masculino or outro
    #[arg(long)]
    pub gender: String,
}

#[derive(Debug, Clone, Args)]
pub struct ProfessionalArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub profession: String,
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long)]
    pub workplace: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, env = "ANEMIA_CALC_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, env = "ANEMIA_CALC_PASSWORD_CONFIRMATION", hide_env_values = true)]
    pub password_confirmation: String,
}

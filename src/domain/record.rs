//! Result documents as the remote store expects them.
//!
//! Field names follow the existing collection (`patientId`, `interpretacao`,
//! `data`, `tipo`), so they are renamed on the way out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::{CountingPrinciple, OrdinalFlag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(flatten)]
    pub values: RecordValues,
    #[serde(rename = "interpretacao")]
    pub interpretation: String,
    #[serde(rename = "data")]
    pub recorded_at: DateTime<Utc>,
}

/// Inputs and score of one calculation; `tipo` is the discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum RecordValues {
    #[serde(rename = "Ehsani")]
    Ehsani {
        rbc: f64,
        vcm: f64,
        #[serde(rename = "cutOff")]
        cutoff: f64,
        ehsani: f64,
    },
    #[serde(rename = "IGK")]
    Igk {
        hb: f64,
        rdw: f64,
        rbc: f64,
        vcm: f64,
        #[serde(rename = "principioContagem")]
        principle: CountingPrinciple,
        igk: f64,
    },
    #[serde(rename = "Eletroforese")]
    Electrophoresis {
        #[serde(rename = "hbA2")]
        hb_a2: f64,
    },
    #[serde(rename = "MetabolismoFerro")]
    IronMetabolism {
        #[serde(rename = "ferro")]
        iron: OrdinalFlag,
        #[serde(rename = "ferritina")]
        ferritin: OrdinalFlag,
    },
}

impl RecordValues {
    pub fn kind(&self) -> &'static str {
        match self {
            RecordValues::Ehsani { .. } => "Ehsani",
            RecordValues::Igk { .. } => "IGK",
            RecordValues::Electrophoresis { .. } => "Eletroforese",
            RecordValues::IronMetabolism { .. } => "MetabolismoFerro",
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            RecordValues::Ehsani { ehsani, .. } => Some(*ehsani),
            RecordValues::Igk { igk, .. } => Some(*igk),
            RecordValues::Electrophoresis { .. } | RecordValues::IronMetabolism { .. } => None,
        }
    }
}

impl ResultRecord {
    pub fn new(
        patient_id: impl Into<String>,
        values: RecordValues,
        interpretation: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            values,
            interpretation: interpretation.into(),
            recorded_at,
        }
    }
}

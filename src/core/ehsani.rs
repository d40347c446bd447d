use serde::{Deserialize, Serialize};

use crate::domain::model::{CalculationResult, ScreeningLabel};
use crate::utils::error::{CalcError, Result};
use crate::utils::number::{parse_decimal, parse_measurement};

pub const DEFAULT_EHSANI_CUTOFF: f64 = 15.0;

/// RBC value (millions/mm³) that splits the two suggestive branches.
pub const RBC_SPLIT: f64 = 5.0;

/// Raw text as typed into the Ehsani form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EhsaniForm {
    pub rbc: String,
    pub mcv: String,
    pub cutoff: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EhsaniInput {
    pub rbc: f64,
    pub mcv: f64,
    pub cutoff: f64,
}

impl EhsaniForm {
    pub fn parse(&self) -> Result<EhsaniInput> {
        Ok(EhsaniInput {
            rbc: parse_measurement("rbc", &self.rbc)?,
            mcv: parse_measurement("mcv", &self.mcv)?,
            cutoff: parse_decimal("cutoff", &self.cutoff)?,
        })
    }
}

/// `score = mcv - 10 * rbc`, rejected when it overflows.
pub fn ehsani_score(rbc: f64, mcv: f64) -> Result<f64> {
    let score = mcv - 10.0 * rbc;
    if !score.is_finite() {
        return Err(CalcError::Domain {
            message: format!("Ehsani index is not a finite number ({})", score),
        });
    }
    Ok(score)
}

/// `score == cutoff` and `rbc == 5` match neither branch and are inconclusive.
pub fn classify_ehsani(score: f64, rbc: f64, cutoff: f64) -> ScreeningLabel {
    if score > cutoff && rbc < RBC_SPLIT {
        ScreeningLabel::IronDeficiency
    } else if score < cutoff && rbc > RBC_SPLIT {
        ScreeningLabel::Thalassemia
    } else {
        ScreeningLabel::Inconclusive
    }
}

pub fn compute_ehsani(rbc: f64, mcv: f64, cutoff: f64) -> Result<CalculationResult<ScreeningLabel>> {
    let score = ehsani_score(rbc, mcv)?;
    let label = classify_ehsani(score, rbc, cutoff);

    tracing::debug!(rbc, mcv, cutoff, score, ?label, "ehsani index computed");
    Ok(CalculationResult::scored(score, label))
}

impl EhsaniInput {
    pub fn compute(&self) -> Result<CalculationResult<ScreeningLabel>> {
        compute_ehsani(self.rbc, self.mcv, self.cutoff)
    }
}

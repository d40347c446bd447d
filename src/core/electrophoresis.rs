use crate::domain::model::ElectrophoresisLabel;
use crate::utils::error::{CalcError, Result};
use crate::utils::number::parse_measurement;

pub const HBA2_LOWER: f64 = 1.5;
pub const HBA2_UPPER: f64 = 3.5;

/// Classifies the HbA2 fraction (%). The normal interval is closed.
pub fn classify_electrophoresis(hba2_percent: f64) -> ElectrophoresisLabel {
    if hba2_percent < HBA2_LOWER {
        ElectrophoresisLabel::AlphaThalassemiaMinorOrAtypicalBeta
    } else if hba2_percent <= HBA2_UPPER {
        ElectrophoresisLabel::WithinNormalRange
    } else {
        ElectrophoresisLabel::BetaThalassemiaMinor
    }
}

/// Parses the typed HbA2 value and classifies it.
///
/// Unparseable text comes back as `CalcError::Parse`, never as a label.
pub fn evaluate_electrophoresis(text: &str) -> Result<(f64, ElectrophoresisLabel)> {
    let value = parse_measurement("hba2", text).map_err(|e| match e {
        CalcError::MissingField { .. } => CalcError::parse("hba2", text),
        other => other,
    })?;
    let label = classify_electrophoresis(value);
    tracing::debug!(hba2 = value, ?label, "electrophoresis classified");
    Ok((value, label))
}

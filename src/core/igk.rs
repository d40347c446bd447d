use serde::{Deserialize, Serialize};

use crate::core::ehsani::RBC_SPLIT;
use crate::domain::model::{CalculationResult, CountingPrinciple, ScreeningLabel};
use crate::utils::error::{CalcError, Result};
use crate::utils::number::parse_measurement;

pub const IMPEDANCE_CUTOFF: f64 = 65.0;
pub const LASER_CUTOFF: f64 = 70.0;

pub fn default_cutoff(principle: CountingPrinciple) -> f64 {
    match principle {
        CountingPrinciple::Impedance => IMPEDANCE_CUTOFF,
        CountingPrinciple::Laser => LASER_CUTOFF,
    }
}

/// Raw text as typed into the IGK form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgkForm {
    pub hb: String,
    pub rdw: String,
    pub rbc: String,
    pub mcv: String,
    pub principle: CountingPrinciple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IgkInput {
    pub hb: f64,
    pub rdw: f64,
    pub rbc: f64,
    pub mcv: f64,
    pub principle: CountingPrinciple,
}

impl IgkForm {
    pub fn parse(&self) -> Result<IgkInput> {
        Ok(IgkInput {
            hb: parse_measurement("hb", &self.hb)?,
            rdw: parse_measurement("rdw", &self.rdw)?,
            rbc: parse_measurement("rbc", &self.rbc)?,
            mcv: parse_measurement("mcv", &self.mcv)?,
            principle: self.principle,
        })
    }
}

/// `score = mcv² * rdw / (100 * hb)` using the standard cutoff for `principle`.
pub fn compute_igk(
    hb: f64,
    rdw: f64,
    rbc: f64,
    mcv: f64,
    principle: CountingPrinciple,
) -> Result<CalculationResult<ScreeningLabel>> {
    compute_igk_with_cutoff(hb, rdw, rbc, mcv, default_cutoff(principle))
}

/// `mcv² * rdw / (100 * hb)`; zero hemoglobin or overflow is a domain error.
pub fn igk_score(hb: f64, rdw: f64, mcv: f64) -> Result<f64> {
    if hb == 0.0 {
        return Err(CalcError::Domain {
            message: "hemoglobin must be non-zero for the IGK index".to_string(),
        });
    }

    let score = (mcv * mcv * rdw) / (100.0 * hb);
    if !score.is_finite() {
        return Err(CalcError::Domain {
            message: format!("IGK index is not a finite number ({})", score),
        });
    }
    Ok(score)
}

/// Unlike Ehsani, the thalassemia branch takes `score <= cutoff` while the rbc
/// test stays strict, so `score == cutoff` with `rbc > 5` is thalassemia.
pub fn classify_igk(score: f64, rbc: f64, cutoff: f64) -> ScreeningLabel {
    if score > cutoff && rbc < RBC_SPLIT {
        ScreeningLabel::IronDeficiency
    } else if score <= cutoff && rbc > RBC_SPLIT {
        ScreeningLabel::Thalassemia
    } else {
        ScreeningLabel::Inconclusive
    }
}

/// Same as [`compute_igk`] with an explicit cutoff.
pub fn compute_igk_with_cutoff(
    hb: f64,
    rdw: f64,
    rbc: f64,
    mcv: f64,
    cutoff: f64,
) -> Result<CalculationResult<ScreeningLabel>> {
    let score = igk_score(hb, rdw, mcv)?;
    let label = classify_igk(score, rbc, cutoff);

    tracing::debug!(hb, rdw, rbc, mcv, cutoff, score, ?label, "igk index computed");
    Ok(CalculationResult::scored(score, label))
}

impl IgkInput {
    pub fn compute(&self) -> Result<CalculationResult<ScreeningLabel>> {
        compute_igk(self.hb, self.rdw, self.rbc, self.mcv, self.principle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_impedance() {
        let result = compute_igk(12.5, 14.0, 4.5, 80.0, CountingPrinciple::Impedance).unwrap();
        // 80² * 14 / (100 * 12.5)
        let score = result.score.unwrap();
        assert!((score - 71.68).abs() < 1e-9);
        assert_eq!(result.label, ScreeningLabel::IronDeficiency);
    }

    #[test]
    fn test_thalassemia_branch() {
        // 60² * 12 / (100 * 12) = 36
        let result = compute_igk(12.0, 12.0, 5.8, 60.0, CountingPrinciple::Laser).unwrap();
        assert_eq!(result.score, Some(36.0));
        assert_eq!(result.label, ScreeningLabel::Thalassemia);
    }

    #[test]
    fn test_score_equal_to_cutoff() {
        // 50² * 13 / (100 * 5) = 65
        let thal = compute_igk(5.0, 13.0, 5.5, 50.0, CountingPrinciple::Impedance).unwrap();
        assert_eq!(thal.score, Some(65.0));
        assert_eq!(thal.label, ScreeningLabel::Thalassemia);

        let low_rbc = compute_igk(5.0, 13.0, 4.5, 50.0, CountingPrinciple::Impedance).unwrap();
        assert_eq!(low_rbc.label, ScreeningLabel::Inconclusive);

        let split_rbc = compute_igk(5.0, 13.0, 5.0, 50.0, CountingPrinciple::Impedance).unwrap();
        assert_eq!(split_rbc.label, ScreeningLabel::Inconclusive);
    }

    #[test]
    fn test_principle_changes_cutoff() {
        // 52² * 10 / (100 * 4) = 67.6, between the two cutoffs
        let impedance = compute_igk(4.0, 10.0, 4.0, 52.0, CountingPrinciple::Impedance).unwrap();
        assert_eq!(impedance.label, ScreeningLabel::IronDeficiency);

        let laser = compute_igk(4.0, 10.0, 4.0, 52.0, CountingPrinciple::Laser).unwrap();
        assert_eq!(laser.label, ScreeningLabel::Inconclusive);
    }

    #[test]
    fn test_zero_hemoglobin_is_domain_error() {
        let err = compute_igk(0.0, 14.0, 4.5, 80.0, CountingPrinciple::Impedance).unwrap_err();
        assert!(matches!(err, CalcError::Domain { .. }));
    }

    #[test]
    fn test_overflowing_score_is_domain_error() {
        let err = igk_score(1e-300, 14.0, 1e200).unwrap_err();
        assert!(matches!(err, CalcError::Domain { .. }));
    }

    #[test]
    fn test_form_parse() {
        let form = IgkForm {
            hb: "12,5".into(),
            rdw: "14".into(),
            rbc: "4,5".into(),
            mcv: "80".into(),
            principle: CountingPrinciple::Impedance,
        };
        let input = form.parse().unwrap();
        assert_eq!(input.hb, 12.5);
        assert_eq!(input.compute().unwrap().label, ScreeningLabel::IronDeficiency);

        let missing = IgkForm {
            hb: "".into(),
            ..form
        };
        assert!(matches!(missing.parse(), Err(CalcError::MissingField { .. })));
    }
}

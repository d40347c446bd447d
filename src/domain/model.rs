use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::CalcError;

/// Qualitative level reported by the lab for serum iron and ferritin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalFlag {
    Low,
    Normal,
    High,
}

impl OrdinalFlag {
    pub const ALL: [OrdinalFlag; 3] = [OrdinalFlag::Low, OrdinalFlag::Normal, OrdinalFlag::High];
}

impl FromStr for OrdinalFlag {
    type Err = CalcError;

    /// Accepts the words and the arrow/letter notation used on lab sheets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baixo" | "↓" | "l" => Ok(OrdinalFlag::Low),
            "normal" | "n" => Ok(OrdinalFlag::Normal),
            "high" | "alto" | "↑" | "h" => Ok(OrdinalFlag::High),
            _ => Err(CalcError::parse("flag", s)),
        }
    }
}

impl fmt::Display for OrdinalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrdinalFlag::Low => write!(f, "↓"),
            OrdinalFlag::Normal => write!(f, "N"),
            OrdinalFlag::High => write!(f, "↑"),
        }
    }
}

/// How the hematology analyzer counts cells. Selects the IGK cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountingPrinciple {
    #[default]
    #[serde(rename = "impedancia", alias = "impedance")]
    Impedance,
    #[serde(rename = "laser")]
    Laser,
}

impl FromStr for CountingPrinciple {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "impedance" | "impedancia" | "impedância" => Ok(CountingPrinciple::Impedance),
            "laser" | "optical" | "otica" | "ótica" => Ok(CountingPrinciple::Laser),
            _ => Err(CalcError::parse("principle", s)),
        }
    }
}

impl fmt::Display for CountingPrinciple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingPrinciple::Impedance => write!(f, "impedancia"),
            CountingPrinciple::Laser => write!(f, "laser"),
        }
    }
}

/// Calculator that should be run after a screening result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStep {
    IronMetabolism,
    Electrophoresis,
}

impl fmt::Display for NextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextStep::IronMetabolism => write!(f, "iron metabolism"),
            NextStep::Electrophoresis => write!(f, "hemoglobin electrophoresis"),
        }
    }
}

/// A classification label produced by one of the calculators.
pub trait Classification: Copy + fmt::Debug {
    /// Short label.
    fn label(&self) -> &'static str;

    /// Narrative shown to the professional and stored with the result.
    fn interpretation(&self) -> &'static str {
        self.label()
    }

    fn next_step(&self) -> Option<NextStep> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IronLabel {
    IronDeficiencyAnemia,
    PossibleIronDeficiency,
    PossibleChronicDiseaseAnemia,
    ChronicDiseaseOrSideroblastic,
    DoesNotFitAlgorithm,
    Unidentified,
}

impl Classification for IronLabel {
    fn label(&self) -> &'static str {
        match self {
            IronLabel::IronDeficiencyAnemia => "Iron-deficiency anemia",
            IronLabel::PossibleIronDeficiency => "Possible iron deficiency",
            IronLabel::PossibleChronicDiseaseAnemia => "Possible chronic-disease anemia",
            IronLabel::ChronicDiseaseOrSideroblastic => "Chronic-disease / sideroblastic anemia",
            IronLabel::DoesNotFitAlgorithm => "Does not fit the applied algorithm",
            IronLabel::Unidentified => "Unidentified result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectrophoresisLabel {
    AlphaThalassemiaMinorOrAtypicalBeta,
    WithinNormalRange,
    BetaThalassemiaMinor,
}

impl Classification for ElectrophoresisLabel {
    fn label(&self) -> &'static str {
        match self {
            ElectrophoresisLabel::AlphaThalassemiaMinorOrAtypicalBeta => {
                "Alpha thalassemia minor / atypical beta"
            }
            ElectrophoresisLabel::WithinNormalRange => "Within normal range",
            ElectrophoresisLabel::BetaThalassemiaMinor => "Beta thalassemia minor",
        }
    }
}

/// Outcome shared by the Ehsani and IGK discriminant indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningLabel {
    IronDeficiency,
    Thalassemia,
    Inconclusive,
}

impl Classification for ScreeningLabel {
    fn label(&self) -> &'static str {
        match self {
            ScreeningLabel::IronDeficiency => "Suggestive of iron-deficiency anemia",
            ScreeningLabel::Thalassemia => "Suggestive of minor thalassemia",
            ScreeningLabel::Inconclusive => "Inconclusive result",
        }
    }

    fn interpretation(&self) -> &'static str {
        match self {
            ScreeningLabel::IronDeficiency => {
                "Suggestive of iron-deficiency anemia\n→ Order iron metabolism tests"
            }
            ScreeningLabel::Thalassemia => {
                "Suggestive of minor thalassemia\n→ Order hemoglobin electrophoresis"
            }
            ScreeningLabel::Inconclusive => "Inconclusive result. Evaluate with further tests.",
        }
    }

    fn next_step(&self) -> Option<NextStep> {
        match self {
            ScreeningLabel::IronDeficiency => Some(NextStep::IronMetabolism),
            ScreeningLabel::Thalassemia => Some(NextStep::Electrophoresis),
            ScreeningLabel::Inconclusive => None,
        }
    }
}

/// Score (when the calculator has one) plus its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult<L: Classification> {
    pub score: Option<f64>,
    pub label: L,
}

impl<L: Classification> CalculationResult<L> {
    pub fn scored(score: f64, label: L) -> Self {
        Self {
            score: Some(score),
            label,
        }
    }

    pub fn unscored(label: L) -> Self {
        Self { score: None, label }
    }

    pub fn interpretation(&self) -> &'static str {
        self.label.interpretation()
    }

    pub fn next_step(&self) -> Option<NextStep> {
        self.label.next_step()
    }
}

/// Which discriminant index to run first, chosen from the patient's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningCalculator {
    Ehsani,
    Igk,
}

impl fmt::Display for ScreeningCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreeningCalculator::Ehsani => write!(f, "Ehsani"),
            ScreeningCalculator::Igk => write!(f, "IGK"),
        }
    }
}

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::ehsani::{classify_ehsani, ehsani_score, EhsaniForm};
use crate::core::electrophoresis::evaluate_electrophoresis;
use crate::core::igk::{classify_igk, igk_score, IgkForm};
use crate::core::iron::classify_iron;
use crate::core::screening::screening_for_age;
use crate::domain::model::{
    CalculationResult, Classification, ElectrophoresisLabel, IronLabel, OrdinalFlag,
    ScreeningCalculator, ScreeningLabel,
};
use crate::domain::ports::SettingsProvider;
use crate::domain::record::{RecordValues, ResultRecord};
use crate::registration::age::{age_on, parse_birth_date};
use crate::utils::error::{CalcError, Result};

/// A finished calculation together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<L: Classification> {
    pub result: CalculationResult<L>,
    pub values: RecordValues,
}

impl<L: Classification> Evaluation<L> {
    pub fn interpretation(&self) -> &'static str {
        self.result.interpretation()
    }

    pub fn to_record(&self, patient_id: &str, recorded_at: DateTime<Utc>) -> ResultRecord {
        ResultRecord::new(
            patient_id,
            self.values.clone(),
            self.interpretation(),
            recorded_at,
        )
    }
}

/// Entry point used by the front end: parses form text, runs the calculator
/// and hands back something that can be shown or stored.
pub struct DiagnosticEngine<S: SettingsProvider> {
    settings: S,
}

impl<S: SettingsProvider> DiagnosticEngine<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Blank Ehsani form with the configured cutoff filled in.
    pub fn ehsani_form(&self) -> EhsaniForm {
        EhsaniForm {
            cutoff: self.settings.ehsani_cutoff().to_string(),
            ..EhsaniForm::default()
        }
    }

    /// Blank IGK form with the configured counting principle selected.
    pub fn igk_form(&self) -> IgkForm {
        IgkForm {
            principle: self.settings.default_principle(),
            ..IgkForm::default()
        }
    }

    pub fn iron(&self, iron: OrdinalFlag, ferritin: OrdinalFlag) -> Evaluation<IronLabel> {
        Evaluation {
            result: CalculationResult::unscored(classify_iron(iron, ferritin)),
            values: RecordValues::IronMetabolism { iron, ferritin },
        }
    }

    pub fn electrophoresis(&self, hba2_text: &str) -> Result<Evaluation<ElectrophoresisLabel>> {
        let (hb_a2, label) = evaluate_electrophoresis(hba2_text)?;
        Ok(Evaluation {
            result: CalculationResult::unscored(label),
            values: RecordValues::Electrophoresis { hb_a2 },
        })
    }

    pub fn ehsani(&self, form: &EhsaniForm) -> Result<Evaluation<ScreeningLabel>> {
        let input = form.parse()?;
        let score = ehsani_score(input.rbc, input.mcv)?;
        let label = classify_ehsani(score, input.rbc, input.cutoff);
        tracing::debug!(?input, score, ?label, "ehsani evaluated");

        Ok(Evaluation {
            result: CalculationResult::scored(score, label),
            values: RecordValues::Ehsani {
                rbc: input.rbc,
                vcm: input.mcv,
                cutoff: input.cutoff,
                ehsani: score,
            },
        })
    }

    pub fn igk(&self, form: &IgkForm) -> Result<Evaluation<ScreeningLabel>> {
        let input = form.parse()?;
        let cutoff = self.settings.igk_cutoff(input.principle);
        let score = igk_score(input.hb, input.rdw, input.mcv)?;
        let label = classify_igk(score, input.rbc, cutoff);
        tracing::debug!(?input, cutoff, score, ?label, "igk evaluated");

        Ok(Evaluation {
            result: CalculationResult::scored(score, label),
            values: RecordValues::Igk {
                hb: input.hb,
                rdw: input.rdw,
                rbc: input.rbc,
                vcm: input.mcv,
                principle: input.principle,
                igk: score,
            },
        })
    }

    /// Age and first calculator for a `DD/MM/YYYY` birth date.
    pub fn screening_for_birth_date(
        &self,
        birth_date: &str,
        today: NaiveDate,
    ) -> Result<(u32, ScreeningCalculator)> {
        let birth = parse_birth_date(birth_date)?;
        let age = age_on(birth, today).ok_or_else(|| {
            CalcError::validation("birth_date", "Birth date cannot be in the future")
        })?;
        Ok((age, screening_for_age(age, self.settings.pediatric_age_limit())))
    }
}

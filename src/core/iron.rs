use crate::domain::model::{IronLabel, OrdinalFlag};

/// Classifies serum iron and ferritin flags. The first matching row wins.
pub fn classify_iron(iron: OrdinalFlag, ferritin: OrdinalFlag) -> IronLabel {
    use OrdinalFlag::*;

    let label = match (iron, ferritin) {
        (Low, Low) => IronLabel::IronDeficiencyAnemia,
        (Normal, Low) => IronLabel::PossibleIronDeficiency,
        (Low, Normal | High) => IronLabel::PossibleChronicDiseaseAnemia,
        (Normal, Normal) => IronLabel::PossibleChronicDiseaseAnemia,
        (Normal, High) => IronLabel::ChronicDiseaseOrSideroblastic,
        (High, _) => IronLabel::DoesNotFitAlgorithm,
        #[allow(unreachable_patterns)]
        _ => IronLabel::Unidentified,
    };

    tracing::debug!(%iron, %ferritin, ?label, "iron metabolism classified");
    label
}

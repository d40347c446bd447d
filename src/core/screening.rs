use crate::domain::model::ScreeningCalculator;

pub const DEFAULT_PEDIATRIC_AGE_LIMIT: u32 = 14;

/// Children up to `pediatric_limit` years are screened with Ehsani, everyone
/// older with IGK.
pub fn screening_for_age(age: u32, pediatric_limit: u32) -> ScreeningCalculator {
    if age <= pediatric_limit {
        ScreeningCalculator::Ehsani
    } else {
        ScreeningCalculator::Igk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_split() {
        assert_eq!(screening_for_age(0, 14), ScreeningCalculator::Ehsani);
        assert_eq!(screening_for_age(14, 14), ScreeningCalculator::Ehsani);
        assert_eq!(screening_for_age(15, 14), ScreeningCalculator::Igk);
        assert_eq!(screening_for_age(15, 18), ScreeningCalculator::Ehsani);
    }
}

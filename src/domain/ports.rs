use crate::domain::model::CountingPrinciple;
use crate::domain::record::ResultRecord;
use crate::utils::error::Result;

/// Destination for calculator results. The production app writes to a remote
/// document store; this crate only ships a local adapter.
pub trait RecordSink {
    fn append(&mut self, record: &ResultRecord) -> Result<()>;
}

/// Tunable constants the calculators and registration rules read.
pub trait SettingsProvider {
    fn ehsani_cutoff(&self) -> f64;
    fn igk_cutoff(&self, principle: CountingPrinciple) -> f64;
    fn default_principle(&self) -> CountingPrinciple;
    fn pediatric_age_limit(&self) -> u32;
    fn max_height_m(&self) -> f64;
    fn max_weight_kg(&self) -> f64;
}

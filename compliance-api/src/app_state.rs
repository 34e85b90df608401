use rest_compliance::RestPolicy;

use crate::config::ComplianceSettings;

#[derive(Clone, Debug)]
pub struct AppState {
    pub rest_policy: RestPolicy,
    pub lookback_years: u32,
}

impl AppState {
    pub fn new(settings: &ComplianceSettings) -> Self {
        Self {
            rest_policy: settings.rest_policy(),
            lookback_years: settings.lookback_years,
        }
    }
}

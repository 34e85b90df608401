use std::str::FromStr;

use rest_compliance::RestPolicy;
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub compliance: ComplianceSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ComplianceSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub working_day_rest_hours: i64,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub day_off_rest_hours: i64,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub lookback_years: u32,
}

// A year of rest is already far past any real rule.
const MAX_REST_HOURS: i64 = 24 * 365;

impl ComplianceSettings {
    pub fn rest_policy(&self) -> RestPolicy {
        RestPolicy::new(self.working_day_rest_hours, self.day_off_rest_hours)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        for (name, hours) in [
            ("working_day_rest_hours", self.working_day_rest_hours),
            ("day_off_rest_hours", self.day_off_rest_hours),
        ] {
            if !(1..=MAX_REST_HOURS).contains(&hours) {
                return Err(config::ConfigError::Message(format!(
                    "compliance.{name} must be between 1 and {MAX_REST_HOURS}, got {hours}"
                )));
            }
        }
        Ok(())
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no current directory: {e}")))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("invalid APP_ENVIRONMENT: {e}")))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("COMPLIANCE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.compliance.validate()?;

    Ok(settings)
}

#[derive(Display, Debug, EnumString, PartialEq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

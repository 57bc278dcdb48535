//! Configuration for the calculator module.
//!
//! The host hands over the calculator's raw JSON section; this crate performs
//! no file I/O.

use calculator_sdk::Number;
use serde::{Deserialize, Serialize};

/// Calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Value a new calculator starts from.
    pub initial: Number,
}

/// The calculator's configuration section could not be deserialized.
#[derive(thiserror::Error, Debug)]
#[error("invalid calculator config: {0}")]
pub struct InvalidConfig(#[from] serde_json::Error);

impl CalculatorConfig {
    /// Parse the calculator's configuration section.
    ///
    /// A missing or `null` section yields the defaults, and fields left out
    /// of a present section keep their default values.
    ///
    /// # Errors
    /// Returns [`InvalidConfig`] if the section has unknown fields or an
    /// `initial` value that is not a number.
    pub fn from_section(section: Option<&serde_json::Value>) -> Result<Self, InvalidConfig> {
        match section {
            None | Some(serde_json::Value::Null) => {
                tracing::debug!("no calculator config section, using defaults");
                Ok(Self::default())
            }
            Some(section) => Ok(Self::deserialize(section)?),
        }
    }
}

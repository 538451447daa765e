//! Optional YAML configuration for the demo tables and calculator output.
//!
//! ```yaml
//! table:
//!   widths: [8, 8, 12]
//!   float_format: .5g
//! value_digits: 4
//! uncertainty_digits: 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use unc_table::TableStyle;

use crate::error::{CliError, CliResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub table: TableStyle,
    /// Decimal digits for the value in scientific output.
    pub value_digits: usize,
    /// Decimal digits for the uncertainty in scientific output.
    pub uncertainty_digits: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            table: TableStyle {
                widths: Some(vec![8, 8, 12]),
                ..TableStyle::default()
            },
            value_digits: 4,
            uncertainty_digits: 2,
        }
    }
}

impl CliConfig {
    pub fn from_yaml(content: &str) -> CliResult<Self> {
        let config: CliConfig = serde_yaml::from_str(content)?;
        // Surface a bad float_format at load time, not mid-render.
        config.table.number_format()?;
        Ok(config)
    }

    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

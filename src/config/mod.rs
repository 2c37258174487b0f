#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Effective settings after flags and the optional config file are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSettings {
    pub api_endpoint: String,
    pub template_path: Option<String>,
    pub output_path: Option<String>,
    pub json: bool,
    pub seed: Option<u64>,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            template_path: None,
            output_path: None,
            json: false,
            seed: None,
        }
    }
}

impl CardSettings {
    /// HTML mode is on as soon as a template or an output file is named.
    pub fn renders_html(&self) -> bool {
        self.template_path.is_some() || self.output_path.is_some()
    }
}

impl ConfigProvider for CardSettings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn template_path(&self) -> Option<&str> {
        self.template_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CardSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_optional_path("template", self.template_path.as_deref())?;
        validation::validate_optional_path("output", self.output_path.as_deref())?;
        Ok(())
    }
}

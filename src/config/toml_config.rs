use crate::utils::error::{CardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
    pub random: Option<RandomConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub template: Option<String>,
    pub path: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CARD_API_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.source.as_ref()?.endpoint.as_deref()
    }

    pub fn template(&self) -> Option<&str> {
        self.output.as_ref()?.template.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref()?.path.as_deref()
    }

    pub fn json(&self) -> Option<bool> {
        self.output.as_ref()?.json
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref()?.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = self.endpoint() {
            validation::validate_url("source.endpoint", endpoint)?;
        }
        validation::validate_optional_path("output.template", self.template())?;
        validation::validate_optional_path("output.path", self.output_path())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "http://127.0.0.1:9000/api/"

[output]
template = "page.html"
path = "out/card.html"
json = true

[random]
seed = 42
"#,
        )
        .unwrap();

        assert_eq!(config.endpoint(), Some("http://127.0.0.1:9000/api/"));
        assert_eq!(config.template(), Some("page.html"));
        assert_eq!(config.output_path(), Some("out/card.html"));
        assert_eq!(config.json(), Some(true));
        assert_eq!(config.seed(), Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STUDENT_CARD_TEST_ENDPOINT", "https://example.com/api/");
        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "${STUDENT_CARD_TEST_ENDPOINT}"
"#,
        )
        .unwrap();

        assert_eq!(config.endpoint(), Some("https://example.com/api/"));
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "ftp://example.com"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, CardError::InvalidConfigValueError { ref field, .. } if field == "source.endpoint"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[source\nendpoint = ").unwrap_err();
        assert!(matches!(err, CardError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("card.toml");
        std::fs::write(&path, "[random]\nseed = 7\n").unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.seed(), Some(7));
    }
}

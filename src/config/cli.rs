use crate::config::toml_config::TomlConfig;
use crate::config::CardSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "student-card")]
#[command(about = "Render a student card from a random user profile")]
pub struct CliConfig {
    #[arg(long, help = "User API endpoint [default: https://randomuser.me/api/]")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "HTML page holding the nombre, programa and codigoEstudiante elements")]
    pub template: Option<String>,

    #[arg(long, help = "Write the rendered HTML page to this file")]
    pub output: Option<String>,

    #[arg(long, help = "Print the card as JSON")]
    pub json: bool,

    #[arg(long, help = "Seed for reproducible program and code selection")]
    pub seed: Option<u64>,

    #[arg(long, help = "TOML config file; flags take precedence")]
    pub config: Option<String>,

    #[arg(long, help = "Emit log records as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags over the config file over the defaults.
    pub fn resolve(&self) -> Result<CardSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let defaults = CardSettings::default();
        let settings = CardSettings {
            api_endpoint: self
                .api_endpoint
                .clone()
                .or_else(|| file.endpoint().map(str::to_string))
                .unwrap_or(defaults.api_endpoint),
            template_path: self
                .template
                .clone()
                .or_else(|| file.template().map(str::to_string)),
            output_path: self
                .output
                .clone()
                .or_else(|| file.output_path().map(str::to_string)),
            json: self.json || file.json().unwrap_or(false),
            seed: self.seed.or(file.seed()),
        };

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "student-card",
            "--api-endpoint",
            "http://127.0.0.1:8080/api/",
            "--seed",
            "9",
            "--json",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.api_endpoint, "http://127.0.0.1:8080/api/");
        assert_eq!(settings.seed, Some(9));
        assert!(settings.json);
        assert!(!settings.renders_html());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("card.toml");
        std::fs::write(
            &path,
            r#"
[source]
endpoint = "http://file.example/api/"

[output]
path = "from-file.html"

[random]
seed = 1
"#,
        )
        .unwrap();

        let cli = CliConfig {
            config: Some(path.to_string_lossy().into_owned()),
            seed: Some(5),
            ..CliConfig::default()
        };

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.api_endpoint, "http://file.example/api/");
        assert_eq!(settings.output_path.as_deref(), Some("from-file.html"));
        assert_eq!(settings.seed, Some(5));
    }

    #[test]
    fn test_invalid_flag_value() {
        let cli = CliConfig {
            api_endpoint: Some("not a url".to_string()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}

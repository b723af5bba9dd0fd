pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_PROMPT: &str = ">>";

/// Effective settings: defaults, then the TOML file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prompt: String,
    pub show_banner: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(prompt) = file.prompt() {
            self.prompt = prompt.to_string();
        }
        if let Some(banner) = file.banner() {
            self.show_banner = banner;
        }
        if let Some(verbose) = file.verbose() {
            self.verbose = verbose;
        }
        self
    }

    pub fn with_overrides(mut self, prompt: Option<&str>, no_banner: bool, verbose: bool) -> Self {
        if let Some(prompt) = prompt {
            self.prompt = prompt.to_string();
        }
        if no_banner {
            self.show_banner = false;
        }
        if verbose {
            self.verbose = true;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn show_banner(&self) -> bool {
        self.show_banner
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("repl.prompt", &self.prompt)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "binary-calc")]
#[command(about = "Interactive calculator for binary strings")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Prompt shown before each command
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(long, help = "Do not print the welcome banner")]
    pub no_banner: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
            settings = settings.merge_file(&TomlConfig::from_file(path)?);
        }
        let settings = settings.with_overrides(self.prompt.as_deref(), self.no_banner, self.verbose);
        settings.validate()?;
        Ok(settings)
    }
}

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::error::{CreatorError, Result};
use crate::renderer::format_date;

/// Layout of an apps directory and the text the creator puts into it.
///
/// Every field has a default, so an empty YAML document (or no file at all)
/// yields the stock mooncake layout.
#[derive(Debug, Deserialize, Clone)]
pub struct CreatorConfig {
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
    #[serde(default = "default_template_stem")]
    pub template_stem: String,
    #[serde(default = "default_source_ext")]
    pub source_ext: String,
    #[serde(default = "default_header_ext")]
    pub header_ext: String,
    #[serde(default = "default_installer_file")]
    pub installer_file: String,
    #[serde(default = "default_app_prefix")]
    pub app_prefix: String,
    /// `strftime` format of the date stamp. Checked by `validate`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub tokens: TokenConfig,

    #[serde(default)]
    pub markers: MarkerConfig,

    #[serde(default)]
    pub lines: LineConfig,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            template_stem: default_template_stem(),
            source_ext: default_source_ext(),
            header_ext: default_header_ext(),
            installer_file: default_installer_file(),
            app_prefix: default_app_prefix(),
            date_format: default_date_format(),
            tokens: TokenConfig::default(),
            markers: MarkerConfig::default(),
            lines: LineConfig::default(),
        }
    }
}

fn default_template_dir() -> String {
    "app_template".to_string()
}

fn default_template_stem() -> String {
    "app_template".to_string()
}

fn default_source_ext() -> String {
    "cpp".to_string()
}

fn default_header_ext() -> String {
    "h".to_string()
}

fn default_installer_file() -> String {
    "app_installer.h".to_string()
}

fn default_app_prefix() -> String {
    "App".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Placeholders found literally in the template pair.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    #[serde(default = "default_class_token")]
    pub class_name: String,
    #[serde(default = "default_file_token")]
    pub file_name: String,
    #[serde(default = "default_date_token")]
    pub date: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_token(),
            file_name: default_file_token(),
            date: default_date_token(),
        }
    }
}

fn default_class_token() -> String {
    "AppTemplate".to_string()
}

fn default_file_token() -> String {
    "app_template".to_string()
}

fn default_date_token() -> String {
    "<date></date>".to_string()
}

/// Locator comments in the installer. New lines go right before them.
#[derive(Debug, Deserialize, Clone)]
pub struct MarkerConfig {
    #[serde(default = "default_include_marker")]
    pub include: String,
    #[serde(default = "default_install_marker")]
    pub install: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            include: default_include_marker(),
            install: default_install_marker(),
        }
    }
}

fn default_include_marker() -> String {
    "/* Header files locator (Don't remove) */".to_string()
}

fn default_install_marker() -> String {
    "/* Install app locator (Don't remove) */".to_string()
}

/// `minijinja` templates for the two installer lines. `app.pascal`,
/// `app.snake` and `header_ext` are in scope.
#[derive(Debug, Deserialize, Clone)]
pub struct LineConfig {
    #[serde(default = "default_include_line")]
    pub include: String,
    #[serde(default = "default_install_line")]
    pub install: String,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            include: default_include_line(),
            install: default_install_line(),
        }
    }
}

fn default_include_line() -> String {
    "#include \"{{ app.snake }}/{{ app.snake }}.{{ header_ext }}\"\n".to_string()
}

fn default_install_line() -> String {
    "mooncake::GetMooncake().installApp(std::make_unique<{{ app.pascal }}>());\n    ".to_string()
}

impl CreatorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CreatorError::io(path, e))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CreatorConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CreatorError::InvalidConfig(format!(
                "bad date_format {:?}",
                self.date_format
            )));
        }
        format_date(NaiveDate::MIN, &self.date_format)?;
        if self.markers.include.is_empty() || self.markers.install.is_empty() {
            return Err(CreatorError::InvalidConfig(
                "installer markers must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("template_stem", &self.template_stem),
            ("source_ext", &self.source_ext),
            ("header_ext", &self.header_ext),
            ("installer_file", &self.installer_file),
        ] {
            if value.is_empty() {
                return Err(CreatorError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    pub fn source_file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.source_ext)
    }

    pub fn header_file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.header_ext)
    }
}

use minijinja::{context, Environment, UndefinedBehavior};

use crate::config::{CreatorConfig, LineConfig};
use crate::error::{CreatorError, Result};
use crate::naming::AppName;

/// Renders the installer lines (include directive and registration call)
/// from the configured `minijinja` templates.
pub struct LineTemplates {
    env: Environment<'static>,
    lines: LineConfig,
    header_ext: String,
}

/// The two lines spliced into the installer for one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerLines {
    pub include: String,
    pub install: String,
}

impl LineTemplates {
    pub fn new(config: &CreatorConfig) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // installer lines must keep their trailing "\n    " indentation
        env.set_keep_trailing_newline(true);
        Self {
            env,
            lines: config.lines.clone(),
            header_ext: config.header_ext.clone(),
        }
    }

    pub fn render(&self, name: &AppName) -> Result<InstallerLines> {
        Ok(InstallerLines {
            include: self.render_string(&self.lines.include, name)?,
            install: self.render_string(&self.lines.install, name)?,
        })
    }

    fn render_string(&self, template_str: &str, name: &AppName) -> Result<String> {
        let template = self
            .env
            .template_from_str(template_str)
            .map_err(|e| CreatorError::Template(e.to_string()))?;
        template
            .render(context! { app => name, header_ext => &self.header_ext })
            .map_err(|e| {
                if let Some(line) = e.line() {
                    let error_line = template_str.lines().nth(line - 1).unwrap_or("");
                    CreatorError::Template(format!("{}\n{}", e, error_line))
                } else {
                    CreatorError::Template(e.to_string())
                }
            })
    }
}

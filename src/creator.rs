use chrono::{Local, NaiveDate};
use log::{debug, error, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CreatorConfig;
use crate::error::{CreatorError, Result};
use crate::installer::InstallerPatcher;
use crate::naming::AppName;
use crate::renderer::{render, Substitutions};
use crate::scaffold::{AppFilePaths, FileScaffolder};
use crate::validation::validate_name;

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedApp {
    pub raw_name: String,
    pub name: AppName,
    pub paths: AppFilePaths,
    pub installer: PathBuf,
    pub dry_run: bool,
}

/// Rendered contents of a new app's source and header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedApp {
    pub source: String,
    pub header: String,
}

/// Runs the whole pipeline against one apps directory: validate, derive the
/// name, render the template pair, write the files, patch the installer.
/// Each stage either succeeds or ends the run.
pub struct AppCreator {
    apps_dir: PathBuf,
    config: CreatorConfig,
    dry_run: bool,
    date: Option<NaiveDate>,
}

impl AppCreator {
    pub fn new(apps_dir: impl Into<PathBuf>, config: CreatorConfig, dry_run: bool) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            config,
            dry_run,
            date: None,
        }
    }

    /// Pins the date stamp instead of using today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn derive_name(&self, raw: &str) -> Result<AppName> {
        validate_name(raw)?;
        let name = AppName::derive(raw, &self.config.app_prefix);
        debug!("{:?} -> {:?}", raw, name);
        Ok(name)
    }

    pub fn file_paths(&self, name: &AppName) -> AppFilePaths {
        AppFilePaths::new(&self.apps_dir, name, &self.config)
    }

    pub fn installer_path(&self) -> PathBuf {
        self.apps_dir.join(&self.config.installer_file)
    }

    pub fn template_paths(&self) -> (PathBuf, PathBuf) {
        let dir = self.apps_dir.join(&self.config.template_dir);
        let stem = &self.config.template_stem;
        (
            dir.join(self.config.source_file_name(stem)),
            dir.join(self.config.header_file_name(stem)),
        )
    }

    /// Loads the template pair and substitutes the app's names and the date.
    pub fn render_app(&self, name: &AppName) -> Result<RenderedApp> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let subs =
            Substitutions::for_app(&self.config.tokens, name, date, &self.config.date_format)?;
        let (source_template, header_template) = self.template_paths();
        Ok(RenderedApp {
            source: render(&Self::read_template(&source_template)?, &subs),
            header: render(&Self::read_template(&header_template)?, &subs),
        })
    }

    fn read_template(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            error!("Failed to read template file: {:?}", path);
            CreatorError::io(path, e)
        })
    }

    /// Renders the templates and writes the app's folder and files.
    pub fn create_app_files(&self, name: &AppName, paths: &AppFilePaths) -> Result<()> {
        let rendered = self.render_app(name)?;
        FileScaffolder::new(self.dry_run).scaffold(paths, &rendered.source, &rendered.header)
    }

    /// Registers the app in the installer header.
    pub fn install_app(&self, name: &AppName) -> Result<PathBuf> {
        let installer = self.installer_path();
        InstallerPatcher::new(&self.config, self.dry_run).patch(&installer, name)?;
        Ok(installer)
    }

    /// Runs every stage for `raw`.
    pub fn create(&self, raw: &str) -> Result<CreatedApp> {
        let name = self.derive_name(raw)?;
        let paths = self.file_paths(&name);
        self.create_app_files(&name, &paths)?;
        info!("Created {} in {:?}", name.pascal, paths.folder);
        let installer = self.install_app(&name)?;
        info!("Installed {} into {:?}", name.pascal, installer);
        Ok(CreatedApp {
            raw_name: raw.to_string(),
            name,
            paths,
            installer,
            dry_run: self.dry_run,
        })
    }
}

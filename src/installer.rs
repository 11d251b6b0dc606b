use log::{debug, error, info};
use std::fs;
use std::path::Path;

use crate::config::{CreatorConfig, MarkerConfig};
use crate::engine::{InstallerLines, LineTemplates};
use crate::error::{CreatorError, Result};
use crate::naming::AppName;

/// Registers apps in the installer header by splicing lines in front of the
/// locator comments. The locators stay, so every run appends after the
/// previous one.
pub struct InstallerPatcher {
    markers: MarkerConfig,
    lines: LineTemplates,
    dry_run: bool,
}

impl InstallerPatcher {
    pub fn new(config: &CreatorConfig, dry_run: bool) -> Self {
        Self {
            markers: config.markers.clone(),
            lines: LineTemplates::new(config),
            dry_run,
        }
    }

    /// Rewrites `document_path` with the include and install lines for
    /// `name` inserted.
    ///
    /// Fails with `NotFound` before writing anything if either locator is
    /// missing. There is no duplicate check: patching the same app twice
    /// registers it twice.
    pub fn patch(&self, document_path: &Path, name: &AppName) -> Result<()> {
        let lines = self.lines.render(name)?;
        let content = fs::read_to_string(document_path).map_err(|e| {
            error!("Failed to read installer: {:?}", document_path);
            CreatorError::io(document_path, e)
        })?;

        let patched = self.patch_text(&content, &lines).map_err(|e| {
            error!("Failed to patch installer: {:?}", document_path);
            e
        })?;

        if self.dry_run {
            info!("[DRY RUN] Would patch: {:?}", document_path);
            debug!("{}", patched);
            return Ok(());
        }

        fs::write(document_path, patched).map_err(|e| {
            error!("Failed to write installer: {:?}", document_path);
            CreatorError::io(document_path, e)
        })?;
        info!("{:?}", document_path);
        Ok(())
    }

    /// Returns `content` with the include line spliced before the include
    /// locator and the install line before the install locator.
    pub fn patch_text(&self, content: &str, lines: &InstallerLines) -> Result<String> {
        let include_at = self.find_marker(content, &self.markers.include)?;
        let install_at = self.find_marker(content, &self.markers.install)?;

        let mut modifications = vec![
            (include_at, lines.include.as_str()),
            (install_at, lines.install.as_str()),
        ];
        modifications.sort_by_key(|x| x.0);

        let mut patched =
            String::with_capacity(content.len() + lines.include.len() + lines.install.len());
        let mut last_pos = 0;
        for (insert_at, insertion) in modifications {
            patched.push_str(&content[last_pos..insert_at]);
            patched.push_str(insertion);
            last_pos = insert_at;
        }
        patched.push_str(&content[last_pos..]);
        Ok(patched)
    }

    fn find_marker(&self, content: &str, marker: &str) -> Result<usize> {
        if marker.is_empty() {
            return Err(CreatorError::NotFound("empty installer locator".to_string()));
        }
        content
            .find(marker)
            .ok_or_else(|| CreatorError::NotFound(format!("installer locator {:?}", marker)))
    }
}

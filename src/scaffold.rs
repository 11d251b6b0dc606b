use log::{error, info, warn};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::CreatorConfig;
use crate::error::{CreatorError, Result};
use crate::naming::AppName;

/// Where a new app's files go. Both files always sit directly in `folder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppFilePaths {
    pub folder: PathBuf,
    pub source_file: PathBuf,
    pub header_file: PathBuf,
}

impl AppFilePaths {
    pub fn new(apps_dir: &Path, name: &AppName, config: &CreatorConfig) -> Self {
        let folder = apps_dir.join(&name.snake);
        let source_file = folder.join(config.source_file_name(&name.snake));
        let header_file = folder.join(config.header_file_name(&name.snake));
        Self {
            folder,
            source_file,
            header_file,
        }
    }
}

/// Writes a rendered source/header pair into a fresh folder.
pub struct FileScaffolder {
    dry_run: bool,
}

impl FileScaffolder {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Creates `paths.folder` and both files in it.
    ///
    /// Fails with `AlreadyExists` if the folder is already there; nothing in
    /// it is touched. If anything fails after the folder was created, the
    /// folder is removed again.
    pub fn scaffold(&self, paths: &AppFilePaths, source: &str, header: &str) -> Result<()> {
        if self.dry_run {
            if paths.folder.exists() {
                return Err(CreatorError::AlreadyExists(paths.folder.clone()));
            }
            info!("[DRY RUN] Would create: {:?}", paths.folder);
            info!("[DRY RUN] Would write: {:?}", paths.source_file);
            info!("[DRY RUN] Would write: {:?}", paths.header_file);
            return Ok(());
        }

        fs::create_dir(&paths.folder).map_err(|e| {
            error!("Failed to create folder: {:?}", paths.folder);
            CreatorError::io(&paths.folder, e)
        })?;

        let written = Self::write_new(&paths.source_file, source)
            .and_then(|_| Self::write_new(&paths.header_file, header));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_dir_all(&paths.folder) {
                warn!(
                    "Failed to remove partially created folder {:?}: {}",
                    paths.folder, cleanup
                );
            }
            return Err(e);
        }
        Ok(())
    }

    /// Creates `path` exclusively and writes `content` into it.
    fn write_new(path: &Path, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                error!("Failed to create file: {:?}", path);
                CreatorError::io(path, e)
            })?;
        file.write_all(content.as_bytes()).map_err(|e| {
            error!("Failed to write file: {:?}", path);
            CreatorError::io(path, e)
        })?;
        info!("{:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn foo_paths(dir: &Path) -> AppFilePaths {
        let name = AppName::derive("foo", "App");
        AppFilePaths::new(dir, &name, &CreatorConfig::default())
    }

    #[test]
    fn test_file_paths() {
        let paths = foo_paths(Path::new("/apps"));
        assert_eq!(paths.folder, Path::new("/apps/app_foo"));
        assert_eq!(paths.source_file, Path::new("/apps/app_foo/app_foo.cpp"));
        assert_eq!(paths.header_file, Path::new("/apps/app_foo/app_foo.h"));
        assert_eq!(paths.source_file.parent(), Some(paths.folder.as_path()));
        assert_eq!(paths.header_file.parent(), Some(paths.folder.as_path()));
    }

    #[test]
    fn test_scaffold() {
        let dir = tempdir().unwrap();
        let paths = foo_paths(dir.path());

        FileScaffolder::new(false)
            .scaffold(&paths, "// source", "// header")
            .unwrap();

        assert_eq!(fs::read_to_string(&paths.source_file).unwrap(), "// source");
        assert_eq!(fs::read_to_string(&paths.header_file).unwrap(), "// header");
    }

    #[test]
    fn test_scaffold_existing_folder() {
        let dir = tempdir().unwrap();
        let paths = foo_paths(dir.path());
        fs::create_dir(&paths.folder).unwrap();
        fs::write(&paths.source_file, "keep me").unwrap();

        let result = FileScaffolder::new(false).scaffold(&paths, "new", "new");

        assert!(matches!(result, Err(CreatorError::AlreadyExists(ref p)) if p == &paths.folder));
        assert_eq!(fs::read_to_string(&paths.source_file).unwrap(), "keep me");
        assert!(!paths.header_file.exists());
    }

    #[test]
    fn test_scaffold_removes_folder_on_failure() {
        let dir = tempdir().unwrap();
        let mut paths = foo_paths(dir.path());
        // header and source collide, so the second exclusive create fails
        paths.header_file = paths.source_file.clone();

        let result = FileScaffolder::new(false).scaffold(&paths, "a", "b");

        assert!(matches!(result, Err(CreatorError::AlreadyExists(_))));
        assert!(!paths.folder.exists());
    }

    #[test]
    fn test_scaffold_dry_run() {
        let dir = tempdir().unwrap();
        let paths = foo_paths(dir.path());

        FileScaffolder::new(true)
            .scaffold(&paths, "a", "b")
            .unwrap();

        assert!(!paths.folder.exists());
    }

    #[test]
    fn test_scaffold_dry_run_existing_folder() {
        let dir = tempdir().unwrap();
        let paths = foo_paths(dir.path());
        fs::create_dir(&paths.folder).unwrap();

        let result = FileScaffolder::new(true).scaffold(&paths, "a", "b");
        assert!(matches!(result, Err(CreatorError::AlreadyExists(_))));
    }
}

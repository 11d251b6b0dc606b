use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::creator::CreatedApp;
use crate::naming::AppName;
use crate::scaffold::AppFilePaths;

/// Prints run progress for a person at a terminal, or a single JSON
/// document for scripts.
pub struct Reporter<W> {
    out: W,
    color: bool,
    json: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(color: bool, json: bool) -> Self {
        Self::new(io::stdout(), color, json)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool, json: bool) -> Self {
        Self { out, color, json }
    }

    fn highlight(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "app generator")
    }

    pub fn got_input(&mut self, raw: &str) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "get input: {}\n", raw)
    }

    pub fn app_name(&mut self, name: &AppName) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        let pascal = self.highlight(&name.pascal);
        writeln!(self.out, "> new app's name: {}", pascal)
    }

    pub fn file_paths(&mut self, paths: &AppFilePaths) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "> new app's file paths:")?;
        for path in [&paths.folder, &paths.source_file, &paths.header_file] {
            let shown = self.highlight(&path.display().to_string());
            writeln!(self.out, " - {}", shown)?;
        }
        writeln!(self.out)
    }

    pub fn installing(&mut self, name: &AppName) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "> install app {} into mooncake", name.pascal)
    }

    pub fn done(&mut self, created: &CreatedApp) -> io::Result<()> {
        if self.json {
            let doc = serde_json::to_string_pretty(created).map_err(io::Error::other)?;
            return writeln!(self.out, "{}", doc);
        }
        if created.dry_run {
            writeln!(self.out, "\ndone (dry run, nothing written)")
        } else {
            writeln!(self.out, "\ndone")
        }
    }
}

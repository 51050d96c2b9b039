use crate::error::Result;
use crate::utils::constants::{TEMP_MARKUP_PREFIX, TEMP_SCREENSHOT_PREFIX};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};

/// Intermediate files for one rasterization.
///
/// Every handle returned here deletes its file when dropped, so an early
/// return or a failed browser run still leaves the directory clean.
pub struct ScratchFiles {
    dir: PathBuf,
}

impl ScratchFiles {
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write_markup(&self, markup: &str) -> Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_MARKUP_PREFIX)
            .suffix(".html")
            .tempfile_in(&self.dir)?;
        file.write_all(markup.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    /// An empty file the browser will overwrite with its screenshot
    pub fn reserve_screenshot(&self) -> Result<TempPath> {
        let file = tempfile::Builder::new()
            .prefix(TEMP_SCREENSHOT_PREFIX)
            .suffix(".png")
            .tempfile_in(&self.dir)?;
        Ok(file.into_temp_path())
    }

    /// Leftover intermediate files; empty after every completed call
    pub fn leftovers(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_scratch = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(TEMP_MARKUP_PREFIX) || n.starts_with(TEMP_SCREENSHOT_PREFIX))
                .unwrap_or(false);
            if is_scratch {
                found.push(path);
            }
        }
        Ok(found)
    }
}

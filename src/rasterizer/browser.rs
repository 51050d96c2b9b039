use crate::error::{ProcessingError, Result};
use crate::rasterizer::{Rasterizer, ScratchFiles};
use crate::settings::RenderSettings;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Screenshots markup with a headless Chrome/Chromium binary.
///
/// Each call writes the markup to a scratch file, runs one browser process
/// against it and reads the screenshot back. The virtual time budget stands
/// in for a settle delay so tiles have time to load before capture.
pub struct HeadlessBrowser {
    binary: String,
    extra_args: Vec<String>,
    settle_delay: Duration,
    timeout: Duration,
    scratch: ScratchFiles,
}

impl HeadlessBrowser {
    pub fn new(binary: impl Into<String>, scratch_dir: &Path) -> Result<Self> {
        let defaults = RenderSettings::default();
        Ok(Self {
            binary: binary.into(),
            extra_args: Vec::new(),
            settle_delay: defaults.settle_delay(),
            timeout: defaults.browser_timeout(),
            scratch: ScratchFiles::new(scratch_dir)?,
        })
    }

    pub fn from_settings(settings: &RenderSettings) -> Result<Self> {
        Ok(Self::new(settings.browser_binary.clone(), settings.scratch_dir())?
            .with_args(settings.browser_args.clone())
            .with_settle_delay(settings.settle_delay())
            .with_timeout(settings.browser_timeout()))
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn scratch(&self) -> &ScratchFiles {
        &self.scratch
    }

    fn command(&self, page_url: &str, screenshot: &Path, width: u32, height: u32) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--hide-scrollbars")
            .arg("--force-device-scale-factor=1")
            .arg(format!("--window-size={},{}", width, height))
            .arg(format!(
                "--virtual-time-budget={}",
                self.settle_delay.as_millis()
            ))
            .arg(format!("--screenshot={}", screenshot.display()))
            .args(&self.extra_args)
            .arg(page_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl Rasterizer for HeadlessBrowser {
    async fn render_to_image(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>> {
        // Both handles delete their files on drop, whichever way this returns
        let markup_file = self.scratch.write_markup(markup)?;
        let screenshot = self.scratch.reserve_screenshot()?;

        let page_url = file_url(markup_file.path())?;
        let mut command = self.command(&page_url, &screenshot, width, height);
        debug!(binary = %self.binary, url = %page_url, width, height, "launching browser");

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| ProcessingError::BrowserLaunch {
                binary: self.binary.clone(),
                source,
            })?,
            Err(_) => {
                return Err(ProcessingError::BrowserTimeout {
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            return Err(ProcessingError::BrowserFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let bytes = tokio::fs::read(&screenshot).await?;
        if bytes.is_empty() {
            return Err(ProcessingError::Screenshot(format!(
                "browser produced no screenshot for {}",
                page_url
            )));
        }

        debug!(bytes = bytes.len(), "captured screenshot");
        Ok(bytes)
    }
}

fn file_url(path: &Path) -> Result<String> {
    let absolute = path.canonicalize()?;
    let url = Url::from_file_path(&absolute).map_err(|_| {
        ProcessingError::Screenshot(format!(
            "cannot express {} as a file URL",
            absolute.display()
        ))
    })?;
    Ok(url.into())
}

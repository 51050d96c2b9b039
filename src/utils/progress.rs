use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Per-centroid progress output.
///
/// With the bar enabled, lines are printed above the bar; disabled, they go
/// straight to stdout. A quiet reporter prints nothing at all.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(total: u64, message: &str, show_bar: bool) -> Self {
        if !show_bar {
            return Self::plain();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
            quiet: false,
        }
    }

    pub fn new_spinner(message: &str, show_bar: bool) -> Self {
        if !show_bar {
            return Self::plain();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
            quiet: false,
        }
    }

    /// Lines only, no bar
    pub fn plain() -> Self {
        Self {
            progress_bar: None,
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            progress_bar: None,
            quiet: true,
        }
    }

    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        match self.progress_bar {
            Some(ref pb) => pb.finish_with_message(message.to_string()),
            None if !self.quiet => println!("{}", message),
            None => {}
        }
    }

    pub fn println(&self, message: &str) {
        if self.quiet {
            return;
        }
        match self.progress_bar {
            Some(ref pb) => pb.println(message),
            None => println!("{}", message),
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish();
            }
        }
    }
}

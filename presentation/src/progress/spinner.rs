//! Spinner standing in for the page's busy indicator

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// A spinner that can be shown and hidden repeatedly
///
/// When disabled (quiet mode or no terminal), `show` and `hide` do nothing
/// and `suspend` simply runs its closure.
pub struct BusySpinner {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl BusySpinner {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Show the spinner with `message`, replacing any visible one
    pub fn show(&self, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.lock().replace(pb) {
            previous.finish_and_clear();
        }
    }

    pub fn hide(&self) {
        if let Some(pb) = self.lock().take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.lock().is_some()
    }

    /// Run `f` with the spinner temporarily cleared so output stays readable
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        match self.lock().as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for BusySpinner {
    fn drop(&mut self) {
        self.hide();
    }
}

use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::SPINNER_FRAMES;
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Terminal status output for a single run.
///
/// Bars are ticked from the pipeline itself rather than a background ticker.
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    /// A reporter only when stderr is an interactive terminal and output
    /// is not silenced
    pub fn for_stderr(quiet: bool) -> Option<Self> {
        if quiet || !Term::stderr().is_term() {
            None
        } else {
            Some(Self::new())
        }
    }

    fn create_progress_bar(&self, len: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(len);
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            let mut frames = SPINNER_FRAMES.to_vec();
            frames.push("✓");
            pb.set_style(spinner_style.tick_strings(&frames));
        }
        pb.set_message(message.to_string());
        pb
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering Maven modules...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning for pom.xml files...");
        self.current_bar = Some(spinner);
    }

    pub fn parsing_descriptor(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Parsing: {}...", path.display()));
            pb.tick();
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No pom.xml files found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("module", count)
            );
        }
    }

    pub fn start_graph_building(&mut self, total_modules: usize) {
        let pb = self.create_progress_bar(total_modules as u64, "Building dependency graph");
        self.current_bar = Some(pb);
    }

    pub fn update_graph_progress(&self, module_label: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Linking module: {module_label}"));
            pb.inc(1);
        }
    }

    pub fn finish_graph_building(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_descriptor_updates_spinner() {
        let mut reporter = ProgressReporter::new();
        reporter.start_discovery();
        reporter.parsing_descriptor(Path::new("a/pom.xml"));

        let spinner = reporter.current_bar.as_ref().unwrap();
        assert_eq!(spinner.message(), "Parsing: a/pom.xml...");

        reporter.finish_discovery(1);
        assert!(reporter.current_bar.is_none());
    }

    #[test]
    fn test_parsing_descriptor_without_spinner_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.parsing_descriptor(Path::new("a/pom.xml"));

        assert!(reporter.current_bar.is_none());
    }

    #[test]
    fn test_graph_progress_counts_modules() {
        let mut reporter = ProgressReporter::new();
        reporter.start_graph_building(3);
        reporter.update_graph_progress("g:a");
        reporter.update_graph_progress("g:b");

        let bar = reporter.current_bar.as_ref().unwrap();
        assert_eq!(bar.position(), 2);
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.message(), "Linking module: g:b");

        reporter.finish_graph_building();
        assert!(reporter.current_bar.is_none());
    }
}

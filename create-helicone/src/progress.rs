//! Terminal spinners for pipeline steps.

use std::time::Duration;

use colored::Colorize;
use helicone_messages::MESSAGES;
use helicone_scaffold::{Step, StepReporter};
use indicatif::{ProgressBar, ProgressStyle};

struct StepMessages {
    pending: &'static str,
    success: &'static str,
    failed: &'static str,
}

fn messages_for(step: Step) -> StepMessages {
    match step {
        Step::Validate => StepMessages {
            pending: MESSAGES.step_validate_pending,
            success: MESSAGES.step_validate_success,
            failed: MESSAGES.step_validate_failed,
        },
        Step::Fetch => StepMessages {
            pending: MESSAGES.step_fetch_pending,
            success: MESSAGES.step_fetch_success,
            failed: MESSAGES.step_fetch_failed,
        },
        Step::VersionControl => StepMessages {
            pending: MESSAGES.step_git_pending,
            success: MESSAGES.step_git_success,
            failed: MESSAGES.step_git_failed,
        },
        Step::Install => StepMessages {
            pending: MESSAGES.step_install_pending,
            success: MESSAGES.step_install_success,
            failed: MESSAGES.step_install_failed,
        },
    }
}

/// One spinner per step, replaced by a ✔/✖ line when the step ends.
pub struct SpinnerReporter {
    spinner_style: ProgressStyle,
    done_style: ProgressStyle,
    current: Option<ProgressBar>,
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinnerReporter {
    pub fn new() -> Self {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let done_style = ProgressStyle::default_spinner()
            .template("{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        Self {
            spinner_style,
            done_style,
            current: None,
        }
    }

    fn finish(&mut self, line: String) {
        if let Some(pb) = self.current.take() {
            pb.set_style(self.done_style.clone());
            pb.finish_with_message(line);
        }
    }
}

impl StepReporter for SpinnerReporter {
    fn started(&mut self, step: Step) {
        self.finish(String::new());

        let pb = ProgressBar::new_spinner();
        pb.set_style(self.spinner_style.clone());
        pb.set_message(messages_for(step).pending);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.current = Some(pb);
    }

    fn succeeded(&mut self, step: Step) {
        let line = format!("{} {}", "✔".green(), messages_for(step).success);
        self.finish(line);
    }

    fn failed(&mut self, step: Step, _message: &str) {
        let line = format!("{} {}", "✖".red(), messages_for(step).failed);
        self.finish(line);
    }
}

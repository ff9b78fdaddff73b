// Standard library imports
use std::path::Path;

// External crate imports
use anyhow::Context;
use colored::Colorize;
use helicone_core::command_stream::DuctRunner;
use helicone_core::{hc_println, hc_warning};
use helicone_messages::{msg, MESSAGES};
use helicone_scaffold::{CreationRequest, Installer, Scaffolder, StepWarning};
use helicone_templates::{catalog, GithubTarballFetcher};
use tracing::warn;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::progress::SpinnerReporter;

/// Handles project creation once the request is known.
pub fn handle_create(request: &CreationRequest, config: &AppConfig) -> Result<(), AppError> {
    print_banner(&request.project_name, config.version);

    if catalog::find(&request.template).is_none() {
        warn!(template = %request.template, "Template is not listed in the catalog");
    }

    let fetcher = GithubTarballFetcher::with_base_url(&config.codeload_url)
        .context("Failed to prepare template download")?;
    let runner = DuctRunner;
    let scaffolder = Scaffolder::new(&config.scaffold, &fetcher, &runner);

    let mut reporter = SpinnerReporter::new();
    let report = scaffolder.create(request, &mut reporter)?;

    for warning in report.warnings() {
        hc_warning!("{}", warning_line(warning));
    }

    print_next_steps(&request.project_name, &request.template, &report.target);
    Ok(())
}

fn warning_line(warning: &StepWarning) -> String {
    match warning {
        StepWarning::VersionControl { cause } => msg!(MESSAGES.warning_git, error = cause),
        StepWarning::DependencyInstall { cause } => msg!(MESSAGES.warning_install, error = cause),
    }
}

fn print_banner(project_name: &str, version: &str) {
    hc_println!();
    hc_println!("{} v{}", MESSAGES.banner_title.bold().cyan(), version);
    hc_println!("{} {}", MESSAGES.banner_creating.bold(), project_name.green());
    hc_println!();
}

/// Lines of the "Next steps" block, in order.
pub fn next_steps(project_name: &str, template: &str) -> Vec<String> {
    let installer = Installer::for_template(template);
    vec![
        format!("cd {project_name}"),
        format!("cp {} .env # add your API keys", installer.env_example()),
        installer.command_line(),
        installer.run_command().to_string(),
    ]
}

fn print_next_steps(project_name: &str, template: &str, target: &Path) {
    tracing::debug!(path = %target.display(), "Printing next steps");

    hc_println!();
    hc_println!(
        "{} {}",
        "Success!".green(),
        msg!(MESSAGES.create_success, dir = project_name)
    );
    hc_println!();
    hc_println!("{}", MESSAGES.next_steps_header.bold());
    for (index, command) in next_steps(project_name, template).iter().enumerate() {
        hc_println!(
            "{}",
            msg!(
                MESSAGES.next_step,
                index = (index + 1).to_string(),
                command = command.cyan().to_string()
            )
        );
    }
    hc_println!();
    hc_println!("{}", MESSAGES.docs_header.bold());
    hc_println!("  {}", msg!(MESSAGES.docs_url, template = template).cyan());
    hc_println!();
}

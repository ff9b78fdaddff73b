// Command dispatch for create-helicone

use helicone_scaffold::CreationRequest;
use tracing::debug;

use crate::cli::Args;
use crate::config::AppConfig;
use crate::error::AppError;

pub mod create;
pub mod list;
pub mod prompt;

/// Runs the single command described by `args`.
pub fn execute_command(args: Args, config: &AppConfig) -> Result<(), AppError> {
    if args.list {
        list::handle_list();
        return Ok(());
    }

    let request = match args.project_directory.as_deref().map(str::trim) {
        Some(dir) if !dir.is_empty() => CreationRequest {
            project_name: dir.to_string(),
            template: args.template,
            install_dependencies: args.install,
            initialize_version_control: args.git,
        },
        _ if config.interactive => {
            debug!("No project directory given, prompting");
            let questions = prompt::creation_questions(&args.template, args.git, args.install);
            let mut prompter = prompt::TerminalPrompter::new();
            match prompt::collect_answers(&questions, &mut prompter)? {
                prompt::PromptOutcome::Answered(request) => request,
                prompt::PromptOutcome::Cancelled => return Err(AppError::Cancelled),
            }
        }
        _ => return Err(AppError::MissingProjectDirectory),
    };

    create::handle_create(&request, config)
}

//! Central registry for all user-facing message templates.
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder` (usually through `msg!`).

pub struct Messages {
    // ============================================================================
    // Banner
    // ============================================================================
    pub banner_title: &'static str,
    pub banner_creating: &'static str,

    // ============================================================================
    // Template catalog (--list)
    // ============================================================================
    pub list_header: &'static str,
    pub list_entry: &'static str,

    // ============================================================================
    // Pipeline steps (pending / succeeded / failed)
    // ============================================================================
    pub step_validate_pending: &'static str,
    pub step_validate_success: &'static str,
    pub step_validate_failed: &'static str,
    pub step_fetch_pending: &'static str,
    pub step_fetch_success: &'static str,
    pub step_fetch_failed: &'static str,
    pub step_git_pending: &'static str,
    pub step_git_success: &'static str,
    pub step_git_failed: &'static str,
    pub step_install_pending: &'static str,
    pub step_install_success: &'static str,
    pub step_install_failed: &'static str,

    // ============================================================================
    // Warnings from best-effort steps
    // ============================================================================
    pub warning_git: &'static str,
    pub warning_install: &'static str,

    // ============================================================================
    // Completion
    // ============================================================================
    pub create_success: &'static str,
    pub next_steps_header: &'static str,
    pub next_step: &'static str,
    pub docs_header: &'static str,
    pub docs_url: &'static str,

    // ============================================================================
    // Interactive prompts
    // ============================================================================
    pub prompt_project_name: &'static str,
    pub prompt_project_name_default: &'static str,
    pub prompt_template: &'static str,
    pub prompt_template_item: &'static str,
    pub prompt_git: &'static str,
    pub prompt_install: &'static str,

    // ============================================================================
    // Errors
    // ============================================================================
    pub error_generic: &'static str,
    pub error_missing_directory: &'static str,
    pub error_missing_directory_usage: &'static str,
    pub error_cancelled: &'static str,
    pub error_target_not_empty_hint: &'static str,
    pub error_fetch_hint: &'static str,
}

pub const MESSAGES: Messages = Messages {
    // Banner
    banner_title: "Create Helicone",
    banner_creating: "✨ Creating a new Helicone project in",

    // Template catalog
    list_header: "Available templates:",
    list_entry: "  {name} - {description}",

    // Pipeline steps
    step_validate_pending: "Checking target directory...",
    step_validate_success: "Target directory is available",
    step_validate_failed: "Target directory cannot be used",
    step_fetch_pending: "Downloading template...",
    step_fetch_success: "Template downloaded successfully",
    step_fetch_failed: "Failed to download template",
    step_git_pending: "Initializing git repository...",
    step_git_success: "Git repository initialized",
    step_git_failed: "Failed to initialize git repository",
    step_install_pending: "Installing dependencies...",
    step_install_success: "Dependencies installed",
    step_install_failed: "Failed to install dependencies",

    // Warnings
    warning_git: "Warning: Git initialization failed: {error}",
    warning_install: "Warning: Dependency installation failed: {error}",

    // Completion
    create_success: "Created {dir}",
    next_steps_header: "Next steps:",
    next_step: "  {index}. {command}",
    docs_header: "Documentation:",
    docs_url: "https://docs.helicone.ai/templates/{template}",

    // Interactive prompts
    prompt_project_name: "Project name",
    prompt_project_name_default: "my-helicone-app",
    prompt_template: "Which template would you like to use?",
    prompt_template_item: "{name} - {description}",
    prompt_git: "Initialize a git repository?",
    prompt_install: "Install dependencies?",

    // Errors
    error_generic: "Error: {error}",
    error_missing_directory: "Please specify a project directory:",
    error_missing_directory_usage: "  {command} {example}",
    error_cancelled: "Operation cancelled",
    error_target_not_empty_hint: "Choose a different project name or empty the directory first",
    error_fetch_hint: "Check your network connection and run with --list to see available templates",
};

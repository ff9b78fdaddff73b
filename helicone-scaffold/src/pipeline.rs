// Standard library
use std::path::{Path, PathBuf};

// External crates
use helicone_core::command_stream::CommandRunner;
use helicone_core::file_system::{probe_target, TargetState};
use helicone_templates::{FetchOptions, FetchSummary, TemplateFetcher, TemplateSource};
use tracing::{info, info_span, warn};

// Internal imports
use crate::error::{ScaffoldError, StepWarning};
use crate::installer::Installer;
use crate::reporter::{Step, StepReporter};
use crate::request::CreationRequest;

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-helicone";

/// Settings shared by every run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory relative project names are resolved against.
    pub cwd: PathBuf,
    /// `owner/repo` of the template registry.
    pub registry: String,
    /// Git ref of the registry to fetch.
    pub reference: String,
}

/// Outcome of a run that got past the fatal steps.
#[derive(Debug)]
pub struct CreationReport {
    pub target: PathBuf,
    pub fetch: FetchSummary,
    /// `None` when git initialization was not requested.
    pub version_control: Option<Result<(), StepWarning>>,
    /// `None` when dependency installation was not requested.
    pub dependencies: Option<Result<(), StepWarning>>,
}

impl CreationReport {
    pub fn warnings(&self) -> impl Iterator<Item = &StepWarning> + '_ {
        [&self.version_control, &self.dependencies]
            .into_iter()
            .flatten()
            .filter_map(|outcome| outcome.as_ref().err())
    }

    pub fn is_clean(&self) -> bool {
        self.warnings().next().is_none()
    }
}

pub struct Scaffolder<'a, F: ?Sized, R: ?Sized> {
    config: &'a ScaffoldConfig,
    fetcher: &'a F,
    runner: &'a R,
}

impl<'a, F, R> Scaffolder<'a, F, R>
where
    F: TemplateFetcher + ?Sized,
    R: CommandRunner + ?Sized,
{
    pub fn new(config: &'a ScaffoldConfig, fetcher: &'a F, runner: &'a R) -> Self {
        Self {
            config,
            fetcher,
            runner,
        }
    }

    /// Runs the whole pipeline for one request.
    pub fn create(
        &self,
        request: &CreationRequest,
        reporter: &mut dyn StepReporter,
    ) -> Result<CreationReport, ScaffoldError> {
        let span = info_span!(
            "create_project",
            project = %request.project_name,
            template = %request.template
        );
        let _enter = span.enter();

        let target = self.validate_target(request, reporter)?;
        let fetch = self.acquire_template(request, &target, reporter)?;

        let version_control = if request.initialize_version_control {
            Some(self.init_version_control(&target, reporter))
        } else {
            None
        };

        let dependencies = if request.install_dependencies {
            Some(self.install_dependencies(&request.template, &target, reporter))
        } else {
            None
        };

        info!(path = %target.display(), "Project created");
        Ok(CreationReport {
            target,
            fetch,
            version_control,
            dependencies,
        })
    }

    fn validate_target(
        &self,
        request: &CreationRequest,
        reporter: &mut dyn StepReporter,
    ) -> Result<PathBuf, ScaffoldError> {
        reporter.started(Step::Validate);
        let target = request.target_dir(&self.config.cwd);

        let result = match probe_target(&target) {
            Ok(TargetState::Missing) | Ok(TargetState::Empty) => Ok(target),
            Ok(TargetState::NotEmpty) => Err(ScaffoldError::TargetNotEmpty { path: target }),
            Err(source) => Err(ScaffoldError::Filesystem {
                path: target,
                source,
            }),
        };

        match &result {
            Ok(_) => reporter.succeeded(Step::Validate),
            Err(e) => reporter.failed(Step::Validate, &e.to_string()),
        }
        result
    }

    fn acquire_template(
        &self,
        request: &CreationRequest,
        target: &Path,
        reporter: &mut dyn StepReporter,
    ) -> Result<FetchSummary, ScaffoldError> {
        reporter.started(Step::Fetch);

        let result = TemplateSource::for_template(
            &self.config.registry,
            &self.config.reference,
            &request.template,
        )
        .and_then(|source| {
            info!(source = %source, "Fetching template");
            self.fetcher
                .fetch(&source, target, FetchOptions { overwrite: true })
        })
        .map_err(|cause| ScaffoldError::TemplateFetchFailed {
            template: request.template.clone(),
            cause,
        });

        match &result {
            Ok(summary) => {
                info!(files = summary.files_written, "Template fetched");
                reporter.succeeded(Step::Fetch);
            }
            Err(e) => reporter.failed(Step::Fetch, &e.to_string()),
        }
        result
    }

    fn init_version_control(
        &self,
        target: &Path,
        reporter: &mut dyn StepReporter,
    ) -> Result<(), StepWarning> {
        reporter.started(Step::VersionControl);

        let steps: [&[&str]; 3] = [
            &["init"],
            &["add", "."],
            &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        ];
        let result = steps
            .iter()
            .try_for_each(|args| self.runner.run("git", args, target))
            .map_err(|e| StepWarning::VersionControl {
                cause: e.to_string(),
            });

        self.finish_best_effort(Step::VersionControl, &result, reporter);
        result
    }

    fn install_dependencies(
        &self,
        template: &str,
        target: &Path,
        reporter: &mut dyn StepReporter,
    ) -> Result<(), StepWarning> {
        reporter.started(Step::Install);

        let installer = Installer::for_template(template);
        info!(installer = %installer, "Installing dependencies");
        let result = self
            .runner
            .run(installer.program(), installer.args(), target)
            .map_err(|e| StepWarning::DependencyInstall {
                cause: e.to_string(),
            });

        self.finish_best_effort(Step::Install, &result, reporter);
        result
    }

    fn finish_best_effort(
        &self,
        step: Step,
        result: &Result<(), StepWarning>,
        reporter: &mut dyn StepReporter,
    ) {
        match result {
            Ok(()) => reporter.succeeded(step),
            Err(warning) => {
                warn!(step = %step, cause = %warning.cause(), "Best-effort step failed");
                reporter.failed(step, warning.cause());
            }
        }
    }
}

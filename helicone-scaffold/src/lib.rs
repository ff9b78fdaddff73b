//! The project creation pipeline.
//!
//! `validate target -> fetch template -> (git init) -> (install dependencies)`
//!
//! The first two steps are fatal on failure and surface as [`ScaffoldError`].
//! The last two are best-effort: their failures are recorded as
//! [`StepWarning`]s in the [`CreationReport`] and never fail the run.

pub mod error;
pub mod installer;
pub mod pipeline;
pub mod reporter;
pub mod request;

pub use error::{ScaffoldError, StepWarning};
pub use installer::Installer;
pub use pipeline::{CreationReport, ScaffoldConfig, Scaffolder, INITIAL_COMMIT_MESSAGE};
pub use reporter::{SilentReporter, Step, StepReporter};
pub use request::CreationRequest;

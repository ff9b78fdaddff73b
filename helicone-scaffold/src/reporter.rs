use std::fmt;

/// A phase of the creation pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Validate,
    Fetch,
    VersionControl,
    Install,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::Validate => write!(f, "validate"),
            Step::Fetch => write!(f, "fetch"),
            Step::VersionControl => write!(f, "git"),
            Step::Install => write!(f, "install"),
        }
    }
}

/// Observes step transitions (pending -> succeeded/failed).
///
/// Purely observational: nothing a reporter does can change the outcome
/// of the pipeline.
pub trait StepReporter {
    fn started(&mut self, step: Step);
    fn succeeded(&mut self, step: Step);
    fn failed(&mut self, step: Step, message: &str);
}

/// Discards every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl StepReporter for SilentReporter {
    fn started(&mut self, _step: Step) {}
    fn succeeded(&mut self, _step: Step) {}
    fn failed(&mut self, _step: Step, _message: &str) {}
}

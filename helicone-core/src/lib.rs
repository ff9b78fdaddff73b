pub mod command_stream;
pub mod error;
pub mod file_system;
pub mod output_macros;

pub use command_stream::{CommandRunner, DuctRunner};
pub use file_system::{probe_target, TargetState};

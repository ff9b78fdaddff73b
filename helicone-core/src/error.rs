use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    Command(String),
    Dependency(String),
    Internal(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CoreError::Command(s) => write!(f, "Command failed: {}", s),
            CoreError::Dependency(s) => write!(f, "Dependency not found: {}", s),
            CoreError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

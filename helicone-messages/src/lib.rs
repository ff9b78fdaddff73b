//! helicone-messages
//!
//! Centralized messaging for the create-helicone CLI.
//! Provides the message templates and a small builder that fills
//! `{variable}` placeholders at runtime.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;

//! Core support for oxidized-pad
//!
//! Application configuration, the error taxonomy, logging bootstrap, and the
//! section-oriented profile store shared by the rest of the workspace.

pub mod config;
pub mod error;
pub mod logging;
pub mod profile;

pub use config::Config;
pub use error::{CoreError, Result};
pub use profile::{Profile, ProfileSection};

//! Build verification handlers.

mod verify_build;

pub use verify_build::{VerificationError, VerifyBuildCommand, VerifyBuildHandler};

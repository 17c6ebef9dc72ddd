//! Shared plumbing for the bizscout workspace.
//!
//! Currently this is just [`observability`]: every binary and integration
//! test initialises `tracing` through the same helper so diagnostics land in
//! one rolling file sink regardless of entry point. The crate is kept
//! dependency-light so the rest of the workspace can pull it in freely.

pub mod observability;

//! Runtime plumbing shared by the workflows.

pub mod progress;

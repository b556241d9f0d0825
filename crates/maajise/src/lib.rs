//! maajise: project scaffolding.
//!
//! Creates a project directory, initializes git and Beads, writes a
//! language template's boilerplate, commits it and optionally registers a
//! remote. The remaining commands maintain projects created this way.

pub mod beads;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod fsutil;
pub mod git;
pub mod prompt;
pub mod templates;
pub mod tool;
pub mod validate;

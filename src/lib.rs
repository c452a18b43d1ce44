//! devopsctl: DevOps automation CLI
//!
//! Shells out to `terraform`, `bash`, and `git`, and renders built-in CI/CD
//! pipeline templates into GitHub Actions workflow files.
//!
//! Layering (no layer reaches upward):
//! - `domain`: templates, catalog, renderer — pure logic, no I/O
//! - `application`: services orchestrating domain logic over I/O traits
//! - `infrastructure`: boundary traits, real implementations, DI container
//! - `cli`: argument parsing, dispatch, top-level error/exit-code mapping

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

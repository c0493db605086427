//! # skill-census
//!
//! Counts and validates skill definitions laid out as
//! `skills/<category>/<skill>/SKILL.md`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use skill_census::{config::Config, report};
//!
//! let config = Config::load(None)?;
//! let outcome = report::validate_skills(&config.skills_path())?;
//!
//! print!("{}", outcome.output);
//! std::process::exit(outcome.exit_code);
//! # Ok::<(), skill_census::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`frontmatter`]** parses the `---` header block into a flat map.
//! 2. **[`validator`]** checks one skill folder and returns its [`defect::Defect`]s.
//! 3. **[`tree`]** lists categories and skill folders.
//! 4. **[`report`]** builds the `count` and `validate` reports.
//! 5. **[`output`]** renders them as fixed-width console tables.
//!
//! ## Rules
//!
//! A skill is valid when its folder contains `SKILL.md`, the file opens with
//! a header block, the block has both `name` and `description`, and `name`
//! equals the folder name exactly.

pub mod config;
pub mod defect;
pub mod error;
pub mod frontmatter;
pub mod output;
pub mod report;
pub mod tree;
pub mod validator;

pub use error::{Error, Result};

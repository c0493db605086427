//! The `count` and `validate` reports.
//!
//! Each report is built from the skills directory in two steps: a collect
//! step that walks the tree into a plain data structure, and a render step
//! (see [`output`](crate::output)) that turns it into console text. The
//! [`count_skills`] and [`validate_skills`] entry points combine both and
//! return an [`Outcome`] so callers decide where the text goes.

use crate::defect::{CategoryStats, SkillResult};
use crate::error::Result;
use crate::output;
use crate::tree;
use crate::validator::{self, has_skill_file};
use std::path::Path;

/// Rendered report text plus the process exit code it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

impl Outcome {
    fn skills_dir_not_found(skills_dir: &Path) -> Self {
        Outcome {
            output: output::not_found(skills_dir),
            exit_code: 1,
        }
    }
}

/// Per-category skill counts produced by the `count` command.
#[derive(Debug, Clone, Default)]
pub struct CountReport {
    /// `(category, skills with a SKILL.md)` in name order.
    pub categories: Vec<(String, usize)>,
}

impl CountReport {
    pub fn collect(skills_dir: &Path) -> Result<Self> {
        let mut categories = Vec::new();

        for category in tree::categories(skills_dir)? {
            let count = tree::skill_dirs(&category.path)?
                .iter()
                .filter(|dir| has_skill_file(dir))
                .count();
            tracing::debug!(category = %category.name, count, "counted");
            categories.push((category.name, count));
        }

        Ok(CountReport { categories })
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, n)| n).sum()
    }
}

/// Per-skill verdicts and per-category tallies from the `validate` command.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub categories: Vec<CategoryStats>,
    /// Only skills with at least one defect, in discovery order.
    pub failures: Vec<SkillResult>,
}

impl ValidationReport {
    pub fn collect(skills_dir: &Path) -> Result<Self> {
        let mut report = ValidationReport::default();

        for category in tree::categories(skills_dir)? {
            let mut stats = CategoryStats::new(&category.name);

            for skill_dir in tree::skill_dirs(&category.path)? {
                let result = SkillResult {
                    category: category.name.clone(),
                    skill: validator::folder_name(&skill_dir),
                    defects: validator::validate_skill(&skill_dir)?,
                };
                stats.record(&result);
                if !result.is_valid() {
                    report.failures.push(result);
                }
            }

            report.categories.push(stats);
        }

        Ok(report)
    }

    pub fn total_valid(&self) -> usize {
        self.categories.iter().map(|c| c.valid).sum()
    }

    pub fn total_invalid(&self) -> usize {
        self.categories.iter().map(|c| c.invalid).sum()
    }

    pub fn passed(&self) -> bool {
        self.total_invalid() == 0
    }
}

/// Counts skills per category under `skills_dir`.
///
/// Exit code is 0 whenever the directory exists, whatever the counts, and 1
/// when it does not.
///
/// # Errors
///
/// Propagates directory listing failures inside the tree.
pub fn count_skills(skills_dir: &Path) -> Result<Outcome> {
    if !skills_dir.is_dir() {
        return Ok(Outcome::skills_dir_not_found(skills_dir));
    }

    let report = CountReport::collect(skills_dir)?;
    Ok(Outcome {
        output: output::render_count(&report),
        exit_code: 0,
    })
}

/// Validates every skill under `skills_dir`.
///
/// Exit code is 0 only if no skill has a defect; a missing directory or any
/// invalid skill gives 1.
///
/// # Errors
///
/// Propagates directory listing failures and unreadable `SKILL.md` files.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_census::report::validate_skills;
///
/// let outcome = validate_skills(Path::new("skills"))?;
/// print!("{}", outcome.output);
/// std::process::exit(outcome.exit_code);
/// # Ok::<(), skill_census::Error>(())
/// ```
pub fn validate_skills(skills_dir: &Path) -> Result<Outcome> {
    if !skills_dir.is_dir() {
        return Ok(Outcome::skills_dir_not_found(skills_dir));
    }

    let report = ValidationReport::collect(skills_dir)?;
    Ok(Outcome {
        output: output::render_validation(&report),
        exit_code: if report.passed() { 0 } else { 1 },
    })
}

//! Structural checks for a single skill folder.
//!
//! | Check | Defect | Stops further checks |
//! |-------|--------|----------------------|
//! | `SKILL.md` exists | [`Defect::MissingSkillMd`] | yes |
//! | header block parses to at least one key | [`Defect::MissingFrontmatter`] | yes |
//! | `name` key present | [`Defect::MissingName`] | no |
//! | `description` key present | [`Defect::MissingDescription`] | no |
//! | `name` equals the folder name | [`Defect::NameMismatch`] | no |

use crate::defect::Defect;
use crate::error::{Error, Result};
use crate::frontmatter;
use std::path::Path;

/// File every skill folder must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Returns `true` if `skill_dir` directly contains a regular `SKILL.md` file.
pub fn has_skill_file(skill_dir: &Path) -> bool {
    skill_dir.join(SKILL_FILE).is_file()
}

/// Validates one skill folder and returns its defects (empty means valid).
///
/// A missing `SKILL.md` or a missing header block short-circuits the
/// remaining checks. The name check is case-sensitive and compares against
/// the folder's own name.
///
/// # Errors
///
/// Returns [`Error::Read`] when `SKILL.md` exists but cannot be read. Such
/// faults say nothing about the skill itself, so they are never reported as
/// defects.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_census::validator::validate_skill;
///
/// let defects = validate_skill(Path::new("skills/docs/pdf-extractor"))?;
/// for d in &defects {
///     println!("- {d}");
/// }
/// # Ok::<(), skill_census::Error>(())
/// ```
pub fn validate_skill(skill_dir: &Path) -> Result<Vec<Defect>> {
    let skill_md = skill_dir.join(SKILL_FILE);
    let mut defects = Vec::new();

    if !has_skill_file(skill_dir) {
        defects.push(Defect::MissingSkillMd);
        return Ok(defects);
    }

    let content = std::fs::read_to_string(&skill_md).map_err(|source| Error::Read {
        path: skill_md.clone(),
        source,
    })?;

    let fm = frontmatter::parse(&content);
    if fm.is_empty() {
        defects.push(Defect::MissingFrontmatter);
        return Ok(defects);
    }

    if !fm.contains_key("name") {
        defects.push(Defect::MissingName);
    }
    if !fm.contains_key("description") {
        defects.push(Defect::MissingDescription);
    }

    if let Some(actual) = fm.get("name") {
        let expected = folder_name(skill_dir);
        if *actual != expected {
            defects.push(Defect::NameMismatch {
                actual: actual.clone(),
                expected,
            });
        }
    }

    tracing::debug!(skill = %skill_dir.display(), defects = defects.len(), "validated");
    Ok(defects)
}

/// Last path component, or an empty string for paths like `/`.
///
/// Non-UTF-8 names are converted lossily (U+FFFD), and the name check
/// compares against that converted form.
pub(crate) fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

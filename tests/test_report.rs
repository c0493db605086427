use std::path::{Path, PathBuf};

use skill_census::report::{count_skills, validate_skills, CountReport, ValidationReport};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn plain() {
    colored::control::set_override(false);
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name).join("skills")
}

fn add_skill(skills: &Path, category: &str, skill: &str, content: Option<&str>) {
    let dir = skills.join(category).join(skill);
    std::fs::create_dir_all(&dir).unwrap();
    if let Some(content) = content {
        std::fs::write(dir.join("SKILL.md"), content).unwrap();
    }
}

fn valid_md(name: &str) -> String {
    format!("---\nname: {name}\ndescription: test skill\n---\n")
}

// ---------------------------------------------------------------------------
// count
// ---------------------------------------------------------------------------

#[test]
fn count_rows_per_category_and_total() {
    plain();
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    add_skill(&skills, "a", "one", Some(&valid_md("one")));
    add_skill(&skills, "a", "two", Some("no header at all"));
    std::fs::create_dir_all(skills.join("b")).unwrap();

    let outcome = count_skills(&skills).unwrap();
    let lines: Vec<&str> = outcome.output.lines().collect();

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(lines[2], format!("{:<20} {:>6}", "a", 2));
    assert_eq!(lines[3], format!("{:<20} {:>6}", "b", 0));
    assert_eq!(lines[5], format!("{:<20} {:>6}", "Total", 2));
}

#[test]
fn count_ignores_folders_without_skill_md_and_loose_files() {
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    add_skill(&skills, "a", "one", Some(&valid_md("one")));
    add_skill(&skills, "a", "draft", None);
    std::fs::write(skills.join("a").join("SKILL.md"), "stray").unwrap();
    std::fs::write(skills.join("notes.txt"), "not a category").unwrap();

    let report = CountReport::collect(&skills).unwrap();
    assert_eq!(report.categories, vec![("a".to_string(), 1)]);
    assert_eq!(report.total(), 1);
}

#[test]
fn count_sorts_categories_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    for category in ["writing", "coding", "media"] {
        std::fs::create_dir_all(skills.join(category)).unwrap();
    }

    let report = CountReport::collect(&skills).unwrap();
    let names: Vec<&str> = report.categories.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["coding", "media", "writing"]);
}

#[cfg(unix)]
#[test]
fn count_includes_linked_skill_dirs() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    add_skill(&skills, "a", "local", Some(&valid_md("local")));

    let shared = dir.path().join("shared").join("linked");
    std::fs::create_dir_all(&shared).unwrap();
    std::fs::write(shared.join("SKILL.md"), valid_md("linked")).unwrap();
    symlink(&shared, skills.join("a").join("linked")).unwrap();

    let report = CountReport::collect(&skills).unwrap();
    assert_eq!(report.categories, vec![("a".to_string(), 2)]);
    assert_eq!(count_skills(&skills).unwrap().exit_code, 0);
}

#[test]
fn count_fixture_tree() {
    let report = CountReport::collect(&fixture("dirty-tree")).unwrap();
    assert_eq!(
        report.categories,
        vec![("coding".to_string(), 3), ("documents".to_string(), 1)]
    );
}

#[test]
fn count_missing_directory_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = count_skills(&dir.path().join("skills")).unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.output.contains("Skills directory not found"));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_all_valid_tree_passes() {
    let outcome = validate_skills(&fixture("clean-tree")).unwrap();

    assert_eq!(outcome.exit_code, 0);
    assert!(!outcome.output.contains("Validation errors"));
}

#[test]
fn validate_one_invalid_skill_fails() {
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    add_skill(&skills, "a", "good", Some(&valid_md("good")));
    add_skill(&skills, "a", "bad", Some(&valid_md("other")));

    let outcome = validate_skills(&skills).unwrap();
    assert_eq!(outcome.exit_code, 1);
}

#[test]
fn validate_empty_root_passes() {
    plain();
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("skills");
    std::fs::create_dir_all(&skills).unwrap();

    let outcome = validate_skills(&skills).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert!(outcome
        .output
        .contains(&format!("{:<20} {:>8} {:>8} {:>8}", "Total", 0, 0, 0)));
}

#[test]
fn validate_missing_directory_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = validate_skills(&dir.path().join("skills")).unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.output.contains("Skills directory not found"));
}

#[test]
fn validate_fixture_tallies_per_category() {
    let report = ValidationReport::collect(&fixture("dirty-tree")).unwrap();

    let tallies: Vec<(&str, usize, usize)> = report
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.valid, c.invalid))
        .collect();
    assert_eq!(tallies, [("coding", 1, 2), ("documents", 1, 1)]);
    assert_eq!(report.total_valid(), 2);
    assert_eq!(report.total_invalid(), 3);
    assert!(!report.passed());
}

#[test]
fn validate_failures_in_discovery_order() {
    let report = ValidationReport::collect(&fixture("dirty-tree")).unwrap();

    let paths: Vec<String> = report.failures.iter().map(|f| f.path()).collect();
    assert_eq!(
        paths,
        [
            "coding/no-frontmatter",
            "coding/wrong-name",
            "documents/no-skill-file",
        ]
    );

    let wrong_name: Vec<String> = report.failures[1]
        .defects
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        wrong_name,
        [
            "Missing 'description' field",
            "Name mismatch: 'right-name' != folder 'wrong-name'",
        ]
    );
}

#[test]
fn validate_output_puts_defects_before_table() {
    plain();
    let outcome = validate_skills(&fixture("dirty-tree")).unwrap();
    let text = &outcome.output;

    assert_eq!(outcome.exit_code, 1);
    assert!(text.starts_with("Validation errors:\n\n"));
    assert!(text.contains("  coding/wrong-name:\n    - Missing 'description' field\n"));
    assert!(text.contains("  documents/no-skill-file:\n    - Missing SKILL.md\n"));

    let defects_at = text.find("coding/no-frontmatter").unwrap();
    let table_at = text.find("Category ").unwrap();
    assert!(defects_at < table_at);

    assert!(text.contains(&format!("{:<20} {:>8} {:>8} {:>8}", "coding", 1, 2, 3)));
    assert!(text.contains(&format!("{:<20} {:>8} {:>8} {:>8}", "Total", 2, 3, 5)));
}

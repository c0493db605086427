use std::fmt;

/// A single structural rule violation found in a skill folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    MissingSkillMd,
    MissingFrontmatter,
    MissingName,
    MissingDescription,
    /// The `name` field does not match the folder it lives in.
    NameMismatch { actual: String, expected: String },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::MissingSkillMd => write!(f, "Missing SKILL.md"),
            Defect::MissingFrontmatter => write!(f, "Missing or invalid frontmatter (---)"),
            Defect::MissingName => write!(f, "Missing 'name' field"),
            Defect::MissingDescription => write!(f, "Missing 'description' field"),
            Defect::NameMismatch { actual, expected } => {
                write!(f, "Name mismatch: '{actual}' != folder '{expected}'")
            }
        }
    }
}

/// Outcome of validating one skill folder.
#[derive(Debug, Clone)]
pub struct SkillResult {
    pub category: String,
    pub skill: String,
    pub defects: Vec<Defect>,
}

impl SkillResult {
    pub fn is_valid(&self) -> bool {
        self.defects.is_empty()
    }

    /// `<category>/<skill>`, as shown in the defects section.
    pub fn path(&self) -> String {
        format!("{}/{}", self.category, self.skill)
    }
}

/// Valid and invalid skill counts for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub name: String,
    pub valid: usize,
    pub invalid: usize,
}

impl CategoryStats {
    pub fn new(name: &str) -> Self {
        CategoryStats {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, result: &SkillResult) {
        if result.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

//! `SKILL.md` header block parser.
//!
//! The header is a flat `key: value` block fenced by two `---` lines at the
//! very top of the file:
//!
//! ```text
//! ---
//! name: pdf-extractor
//! description: Pulls text out of PDF files
//! ---
//! # Body is ignored
//! ```
//!
//! This is deliberately not YAML. There is no nesting, quoting or type
//! coercion; every value is the trimmed text after the first `:`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Header keys mapped to their trimmed values.
pub type Frontmatter = BTreeMap<String, String>;

/// Opening fence at offset 0, lazy interior, first closing fence line wins.
static RE_BLOCK: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Extracts the header block from `content`.
///
/// Returns an empty map when the content does not start with a `---` fence
/// or the fence is never closed. Lines without a `:` are skipped, and a
/// repeated key keeps its last value.
///
/// # Examples
///
/// ```
/// use skill_census::frontmatter::parse;
///
/// let fm = parse("---\nname: foo\ndescription: bar\n---\nbody");
/// assert_eq!(fm.get("name").map(String::as_str), Some("foo"));
/// assert_eq!(fm.len(), 2);
///
/// assert!(parse("no header here").is_empty());
/// ```
pub fn parse(content: &str) -> Frontmatter {
    let Some(block) = RE_BLOCK.captures(content).and_then(|c| c.get(1)) else {
        return Frontmatter::new();
    };

    block.as_str().lines().filter_map(split_pair).collect()
}

/// Splits a header line on its first `:`.
fn split_pair(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

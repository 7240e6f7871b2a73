//! Key extraction for `.strings` resource files.
//!
//! A resource file is a sequence of `"key" = "value";` entries with optional
//! `//` line comments and `/* */` block comments. Only the quoted token that
//! is followed by `=` matters; values, semicolons and anything else that
//! does not match are ignored.

use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use super::ParityError;

/// Line comments run to the end of the line, block comments to the nearest `*/`.
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)//.*?$|/\*.*?\*/").unwrap());

/// A double-quoted string (backslash escapes the next char) followed by `=`.
static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:\\.|[^"\\])*)"\s*="#).unwrap());

/// Keys declared in one resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Every declared key in file order, repeats included.
    pub keys: Vec<String>,
    /// Keys declared more than once, in the order their second declaration
    /// appears. Each key is listed once no matter how often it repeats.
    pub duplicates: Vec<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Remove `//` line comments and `/* */` block comments from `text`.
///
/// Block comments are matched non-greedily, so two separate comments never
/// swallow the text between them. The scan is purely lexical: a `//` inside
/// a quoted value also starts a comment.
pub fn strip_comments(text: &str) -> String {
    COMMENT_REGEX.replace_all(text, "").into_owned()
}

/// Extract declared keys from resource file text.
///
/// Escape sequences inside keys are kept literally, `"say \"hi\""` yields
/// the key `say \"hi\"`. Malformed fragments are skipped.
///
/// # Examples
///
/// ```
/// use lproj_parity::core::extract_keys;
///
/// let result = extract_keys("/* greeting */\n\"hello\" = \"Hi\";\n\"hello\" = \"Hey\";");
/// assert_eq!(result.keys, vec!["hello", "hello"]);
/// assert_eq!(result.duplicates, vec!["hello"]);
/// ```
pub fn extract_keys(text: &str) -> ExtractionResult {
    let stripped = strip_comments(text);

    let keys: Vec<String> = KEY_REGEX
        .captures_iter(&stripped)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for key in &keys {
        let count = seen.entry(key.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(key.clone());
        }
    }

    ExtractionResult { keys, duplicates }
}

/// Read a resource file and extract its keys.
pub fn extract_keys_from_file(path: &Path) -> Result<ExtractionResult, ParityError> {
    let content = fs::read_to_string(path).map_err(|source| ParityError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_keys(&content))
}

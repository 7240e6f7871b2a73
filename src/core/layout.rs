//! The `<root>/<lang>.lproj/<resource>` directory convention.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ParityError, check::Target};

/// Directory suffix of a language folder.
pub const LPROJ_EXTENSION: &str = "lproj";

/// Extension of resource files picked up by discovery.
pub const STRINGS_EXTENSION: &str = "strings";

/// Resolves resource paths under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    pub root: PathBuf,
    pub base_language: String,
}

impl ResourceLayout {
    pub fn new(root: impl Into<PathBuf>, base_language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_language: base_language.into(),
        }
    }

    /// `<root>/<language>.lproj`
    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.root.join(format!("{}.{}", language, LPROJ_EXTENSION))
    }

    pub fn base_path(&self, resource: &str) -> PathBuf {
        self.language_dir(&self.base_language).join(resource)
    }

    pub fn target_path(&self, language: &str, resource: &str) -> PathBuf {
        self.language_dir(language).join(resource)
    }

    /// Targets for `resource`, in `languages` order.
    pub fn targets<S: AsRef<str>>(&self, languages: &[S], resource: &str) -> Vec<Target> {
        languages
            .iter()
            .map(|language| {
                let language = language.as_ref();
                Target::new(language, self.target_path(language, resource))
            })
            .collect()
    }

    /// Every `<lang>.lproj` directory directly under the root except the base, sorted.
    pub fn discover_languages(&self) -> Result<Vec<String>, ParityError> {
        let mut languages: Vec<String> = list_dir(&self.root)?
            .into_iter()
            .filter(|path| path.is_dir())
            .filter_map(|path| stem_with_extension(&path, LPROJ_EXTENSION))
            .filter(|language| *language != self.base_language)
            .collect();
        languages.sort();
        Ok(languages)
    }

    /// Every `*.strings` file in the base language directory, sorted.
    pub fn discover_resources(&self) -> Result<Vec<String>, ParityError> {
        let base_dir = self.language_dir(&self.base_language);
        let mut resources: Vec<String> = list_dir(&base_dir)?
            .into_iter()
            .filter(|path| path.is_file())
            .filter(|path| has_extension(path, STRINGS_EXTENSION))
            .filter_map(|path| Some(path.file_name()?.to_str()?.to_string()))
            .collect();
        resources.sort();
        Ok(resources)
    }
}

/// Direct children of `dir`. A missing directory has no children.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ParityError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| match entry {
            Ok(entry) => Ok(entry.into_path()),
            Err(e) => Err(ParityError::Unreadable {
                path: e.path().unwrap_or(dir).to_path_buf(),
                source: e.into(),
            }),
        })
        .collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn stem_with_extension(path: &Path, extension: &str) -> Option<String> {
    if !has_extension(path, extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| stem.to_string())
}

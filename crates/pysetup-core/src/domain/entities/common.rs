use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::DomainError;

/// A filesystem path that stays inside whatever root it is joined to.
///
/// Invariant: never absolute and no `..` components. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Resolve against an output directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute() {
        let absolute = std::env::temp_dir().join("pyproject.toml");
        assert!(matches!(
            RelativePath::try_new(absolute),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_components() {
        assert!(matches!(
            RelativePath::try_new("../pyproject.toml"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::try_new(".github/../../publish.yml"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn joins_under_root() {
        let rel = RelativePath::try_new(".github/workflows/publish.yml").unwrap();
        let full = rel.under(Path::new("out"));
        assert_eq!(full, Path::new("out").join(".github/workflows/publish.yml"));
    }
}

use crate::domain::{DomainError, Preset};

/// Resolved project fields for one invocation.
///
/// Every string field is non-empty once built through [`ProjectInput::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    pub version: String,
    pub python_version: String,
    pub package_path: String,
    pub workflow: bool,
    pub style_config: bool,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub author: Option<Author>,
    pub extra_dependencies: Vec<String>,
    pub extra_dev_dependencies: Vec<String>,
}

impl ProjectSpec {
    pub fn builder() -> ProjectInput {
        ProjectInput::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Raw, partially filled project fields as collected from the user.
///
/// `None` means "not given" and falls back to the preset default, then the
/// global default. A given-but-blank value for a field without a meaningful
/// blank (python version, package path, version) is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub python_version: Option<String>,
    pub package_path: Option<String>,
    pub workflow: Option<bool>,
    pub style_config: Option<bool>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl ProjectInput {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn python_version(mut self, constraint: impl Into<String>) -> Self {
        self.python_version = Some(constraint.into());
        self
    }

    pub fn package_path(mut self, path: impl Into<String>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    pub fn workflow(mut self, enabled: bool) -> Self {
        self.workflow = Some(enabled);
        self
    }

    pub fn style_config(mut self, enabled: bool) -> Self {
        self.style_config = Some(enabled);
        self
    }

    pub fn homepage(mut self, url: impl Into<String>) -> Self {
        self.homepage = Some(url.into());
        self
    }

    pub fn repository(mut self, url: impl Into<String>) -> Self {
        self.repository = Some(url.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_email = Some(email.into());
        self
    }

    pub fn dependency(mut self, requirement: impl Into<String>) -> Self {
        self.dependencies.push(requirement.into());
        self
    }

    pub fn dev_dependency(mut self, requirement: impl Into<String>) -> Self {
        self.dev_dependencies.push(requirement.into());
        self
    }

    /// Resolve against a preset's defaults.
    pub fn build(self, preset: &Preset) -> Result<ProjectSpec, DomainError> {
        let name = non_blank(self.name).ok_or_else(|| DomainError::InvalidField {
            field: "name",
            reason: "a project name is required".into(),
        })?;

        let description = non_blank(self.description)
            .unwrap_or_else(|| preset.default_description().to_string());

        let version = required("version", self.version, preset.version())?;
        let python_version =
            required("python_version", self.python_version, preset.python_version())?;

        let package_path = required("package_path", self.package_path, preset.package_path())?
            .trim_end_matches('/')
            .to_string();
        if package_path.is_empty() {
            return Err(DomainError::InvalidField {
                field: "package_path",
                reason: "must name a directory".into(),
            });
        }

        let author = match (non_blank(self.author_name), non_blank(self.author_email)) {
            (Some(name), Some(email)) => Some(Author { name, email }),
            _ => None,
        };

        Ok(ProjectSpec {
            name,
            description,
            version,
            python_version,
            package_path,
            workflow: self.workflow.unwrap_or(true),
            style_config: self.style_config.unwrap_or(false),
            homepage: non_blank(self.homepage),
            repository: non_blank(self.repository).map(|r| r.trim_end_matches('/').to_string()),
            author,
            extra_dependencies: clean_list(self.dependencies),
            extra_dev_dependencies: clean_list(self.dev_dependencies),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(
    field: &'static str,
    value: Option<String>,
    fallback: &str,
) -> Result<String, DomainError> {
    match value {
        None => Ok(fallback.to_string()),
        Some(v) if v.trim().is_empty() => Err(DomainError::InvalidField {
            field,
            reason: "must not be empty".into(),
        }),
        Some(v) => Ok(v.trim().to_string()),
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

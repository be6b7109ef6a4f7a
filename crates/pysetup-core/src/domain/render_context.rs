use std::collections::BTreeMap;

use crate::domain::ProjectSpec;

/// Python minor version used when the constraint has no usable lower bound.
pub const FALLBACK_PYTHON_FLOOR: &str = "3.12";

/// Context for placeholder substitution.
///
/// A **Value Object** holding the variables substituted into preset template
/// strings. Immutable after creation; `with_variable` returns a new instance.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "mylib" | Resolved spec |
/// | `PACKAGE_PATH` | "src/mylib" | Resolved spec |
/// | `PACKAGE_MODULE` | "src.mylib" | Package path, `/` → `.` |
/// | `PYTHON_VERSION` | "3.12" | Lower bound of requires-python |
/// | `PYTHON_TARGET` | "py312" | Same bound, ruff style |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive every built-in variable from a resolved spec.
    pub fn for_spec(spec: &ProjectSpec) -> Self {
        let floor = minimum_python(&spec.python_version)
            .unwrap_or_else(|| FALLBACK_PYTHON_FLOOR.to_string());
        let target = format!("py{}", floor.replace('.', ""));

        Self::new()
            .with_variable("PROJECT_NAME", spec.name.as_str())
            .with_variable("PACKAGE_PATH", spec.package_path.as_str())
            .with_variable("PACKAGE_MODULE", spec.package_path.replace('/', "."))
            .with_variable("PYTHON_VERSION", floor)
            .with_variable("PYTHON_TARGET", target)
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` is left as-is
    /// - substituted values are copied verbatim and never scanned again
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let value = after
                .find("}}")
                .and_then(|end| self.get(&after[..end]).map(|value| (value, end)));
            match value {
                Some((value, end)) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Lower bound `X.Y` of a requires-python constraint.
///
/// Looks at the first `>=`, `~=` or `==` clause. Returns `None` when no clause
/// carries a major and minor version.
pub fn minimum_python(constraint: &str) -> Option<String> {
    constraint.split(',').map(str::trim).find_map(|clause| {
        let version = [">=", "~=", "=="]
            .iter()
            .find_map(|op| clause.strip_prefix(*op))?
            .trim();
        let mut parts = version.split('.');
        let major = parts.next().filter(|p| is_numeric(p))?;
        let minor = parts.next().filter(|p| is_numeric(p))?;
        Some(format!("{major}.{minor}"))
    })
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_and_keeps_unknown() {
        let ctx = RenderContext::new().with_variable("PROJECT_NAME", "demo");
        assert_eq!(
            ctx.render("https://pypi.org/p/{{PROJECT_NAME}} {{OTHER}}"),
            "https://pypi.org/p/demo {{OTHER}}"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("PACKAGE_PATH", "pkg{{PYTHON_VERSION}}")
            .with_variable("PYTHON_VERSION", "3.12");
        assert_eq!(
            ctx.render("{{PACKAGE_PATH}} on {{PYTHON_VERSION}}"),
            "pkg{{PYTHON_VERSION}} on 3.12"
        );
    }

    #[test]
    fn unterminated_and_nested_braces() {
        let ctx = RenderContext::new().with_variable("PROJECT_NAME", "demo");
        assert_eq!(ctx.render("{{ {{PROJECT_NAME}}"), "{{ demo");
        assert_eq!(ctx.render("tail {{PROJECT_NAME"), "tail {{PROJECT_NAME");
        assert_eq!(ctx.render("no braces"), "no braces");
    }

    #[test]
    fn minimum_python_reads_lower_bound() {
        assert_eq!(minimum_python(">=3.12").as_deref(), Some("3.12"));
        assert_eq!(minimum_python(">=3.11,<4").as_deref(), Some("3.11"));
        assert_eq!(minimum_python("<4, >= 3.10").as_deref(), Some("3.10"));
        assert_eq!(minimum_python("~=3.9.1").as_deref(), Some("3.9"));
        assert_eq!(minimum_python("==3.13.*").as_deref(), Some("3.13"));
    }

    #[test]
    fn minimum_python_without_bound() {
        assert_eq!(minimum_python("<4"), None);
        assert_eq!(minimum_python(">=3"), None);
        assert_eq!(minimum_python("anything"), None);
    }
}

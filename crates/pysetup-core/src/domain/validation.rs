use crate::domain::{DomainError, ProjectSpec};

/// Centralized domain validation.
///
/// `ProjectInput::build` already enforces these; specs assembled by hand are
/// checked again here before rendering.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_spec(spec: &ProjectSpec) -> Result<(), DomainError> {
        let required = [
            ("name", &spec.name),
            ("description", &spec.description),
            ("version", &spec.version),
            ("python_version", &spec.python_version),
            ("package_path", &spec.package_path),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidField {
                    field,
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry;

    #[test]
    fn hand_built_spec_with_blank_name_fails() {
        let preset = registry::lookup("library").unwrap();
        let mut spec = ProjectSpec::builder().name("ok").build(preset).unwrap();
        assert!(DomainValidator::validate_spec(&spec).is_ok());

        spec.name.clear();
        assert_eq!(
            DomainValidator::validate_spec(&spec),
            Err(DomainError::InvalidField {
                field: "name",
                reason: "must not be empty".into()
            })
        );
    }
}

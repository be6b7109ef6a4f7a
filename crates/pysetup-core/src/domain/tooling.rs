//! `[tool.*]` blocks carried by the presets.
//!
//! Strings use `{{PACKAGE_PATH}}`, `{{PACKAGE_MODULE}}`, `{{PYTHON_VERSION}}`
//! and `{{PYTHON_TARGET}}`; they are resolved from the spec before merging.

use crate::domain::value::{ConfigTable, ConfigValue, deep_merge, strings, table};

fn tbl<const N: usize>(entries: [(&str, ConfigValue); N]) -> ConfigValue {
    ConfigValue::Table(table(entries))
}

fn s(value: &str) -> ConfigValue {
    ConfigValue::from(value)
}

fn int(value: i64) -> ConfigValue {
    ConfigValue::Integer(value)
}

/// Blocks shared by every preset.
pub fn shared_tools() -> ConfigTable {
    table([
        ("hatch", hatch()),
        ("ruff", ruff()),
        ("mypy", mypy()),
        ("pylint", pylint()),
        ("pytest", pytest()),
        ("coverage", coverage()),
        ("ty", ty()),
    ])
}

/// Shared blocks plus the pydantic, asyncio and alembic-aware settings.
pub fn fastapi_tools() -> ConfigTable {
    deep_merge(&shared_tools(), &fastapi_extras())
}

fn hatch() -> ConfigValue {
    tbl([(
        "build",
        tbl([(
            "targets",
            tbl([("wheel", tbl([("packages", strings(&["{{PACKAGE_PATH}}"]))]))]),
        )]),
    )])
}

fn ruff() -> ConfigValue {
    tbl([
        ("target-version", s("{{PYTHON_TARGET}}")),
        ("line-length", int(88)),
        ("src", strings(&["{{PACKAGE_PATH}}"])),
        (
            "lint",
            tbl([
                (
                    "select",
                    strings(&[
                        "E", "W", "F", "B", "C4", "UP", "ARG", "SIM", "PTH", "RUF", "ASYNC", "S",
                        "N",
                    ]),
                ),
                (
                    "ignore",
                    strings(&[
                        "E501", "B008", "S101", "S104", "S105", "ARG001", "E712", "N999", "N818",
                        "UP046", "RUF005",
                    ]),
                ),
                (
                    "per-file-ignores",
                    tbl([
                        ("tests/**/*.py", strings(&["S101", "ARG001"])),
                        ("conftest.py", strings(&["S107"])),
                    ]),
                ),
            ]),
        ),
    ])
}

fn mypy() -> ConfigValue {
    tbl([
        ("python_version", s("{{PYTHON_VERSION}}")),
        ("strict", true.into()),
        ("warn_return_any", true.into()),
        ("warn_unused_ignores", true.into()),
        ("disallow_untyped_defs", true.into()),
        ("disallow_incomplete_defs", true.into()),
        (
            "overrides",
            ConfigValue::Array(vec![tbl([
                ("module", strings(&["tests.*", "conftest"])),
                ("ignore_errors", true.into()),
            ])]),
        ),
    ])
}

fn pylint() -> ConfigValue {
    tbl([
        (
            "main",
            tbl([
                ("py-version", s("{{PYTHON_VERSION}}")),
                ("jobs", int(4)),
                ("persistent", true.into()),
                ("suggestion-mode", true.into()),
                (
                    "ignore",
                    strings(&[
                        "venv",
                        ".venv",
                        "__pycache__",
                        "build",
                        "dist",
                        ".git",
                        ".pytest_cache",
                        ".mypy_cache",
                        ".ruff_cache",
                    ]),
                ),
                (
                    "ignore-paths",
                    strings(&["^venv/.*", "^.venv/.*", "^build/.*", "^dist/.*"]),
                ),
            ]),
        ),
        (
            "messages_control",
            tbl([(
                "disable",
                strings(&[
                    "C0103", "C0116", "C0121", "C0301", "C0302", "C0303", "C0304", "C0305",
                    "C0411", "E0401", "E1102", "E1136", "R0801", "R0901", "R0903", "R0917",
                    "W0611", "W0612", "W0613", "W0621", "W0622", "W0718",
                ]),
            )]),
        ),
        ("format", tbl([("max-line-length", int(95))])),
        (
            "design",
            tbl([
                ("max-args", int(12)),
                ("max-attributes", int(10)),
                ("max-branches", int(15)),
                ("max-locals", int(20)),
                ("max-statements", int(55)),
            ]),
        ),
    ])
}

fn pytest() -> ConfigValue {
    tbl([(
        "ini_options",
        tbl([
            ("testpaths", strings(&["tests"])),
            ("addopts", s("-ra -q")),
            ("filterwarnings", strings(&["ignore::DeprecationWarning"])),
        ]),
    )])
}

fn coverage() -> ConfigValue {
    tbl([
        (
            "run",
            tbl([
                ("branch", true.into()),
                ("source", strings(&["{{PACKAGE_PATH}}"])),
            ]),
        ),
        (
            "report",
            tbl([(
                "exclude_lines",
                strings(&[
                    "pragma: no cover",
                    "if TYPE_CHECKING:",
                    "raise NotImplementedError",
                ]),
            )]),
        ),
    ])
}

fn ty() -> ConfigValue {
    tbl([
        (
            "src",
            tbl([
                ("include", strings(&["{{PACKAGE_PATH}}", "tests"])),
                ("exclude", strings(&[".venv/**"])),
                ("respect-ignore-files", true.into()),
            ]),
        ),
        (
            "environment",
            tbl([
                ("python-version", s("{{PYTHON_VERSION}}")),
                ("root", strings(&["./{{PACKAGE_PATH}}"])),
                ("python", s("./.venv")),
            ]),
        ),
        (
            "rules",
            tbl([
                ("possibly-missing-attribute", s("error")),
                ("possibly-missing-import", s("error")),
                ("unused-ignore-comment", s("warn")),
                ("redundant-cast", s("warn")),
                ("undefined-reveal", s("warn")),
            ]),
        ),
        (
            "overrides",
            ConfigValue::Array(vec![tbl([
                ("include", strings(&["tests/**"])),
                (
                    "rules",
                    tbl([
                        ("unresolved-reference", s("warn")),
                        ("invalid-argument-type", s("warn")),
                    ]),
                ),
            ])]),
        ),
        (
            "terminal",
            tbl([
                ("error-on-warning", false.into()),
                ("output-format", s("full")),
            ]),
        ),
    ])
}

/// Settings that only make sense for the FastAPI layout.
///
/// The pydantic mypy plugin and `pylint_pydantic` stay here because only
/// `fastapi-backend` depends on pydantic; other presets would fail to load them.
fn fastapi_extras() -> ConfigTable {
    table([
        (
            "ruff",
            tbl([
                ("exclude", strings(&["alembic"])),
                (
                    "lint",
                    tbl([(
                        "per-file-ignores",
                        tbl([
                            ("{{PACKAGE_PATH}}/core/rate_limit.py", strings(&["S110"])),
                            ("{{PACKAGE_PATH}}/config.py", strings(&["F401"])),
                            ("{{PACKAGE_PATH}}/schemas/**/*.py", strings(&["RUF012"])),
                        ]),
                    )]),
                ),
            ]),
        ),
        (
            "mypy",
            tbl([
                ("plugins", strings(&["pydantic.mypy"])),
                ("exclude", strings(&["alembic"])),
                (
                    "overrides",
                    ConfigValue::Array(vec![
                        tbl([
                            ("module", strings(&["{{PACKAGE_MODULE}}.core.logging"])),
                            ("disable_error_code", strings(&["no-any-return"])),
                        ]),
                        tbl([
                            (
                                "module",
                                strings(&[
                                    "uuid6",
                                    "structlog",
                                    "structlog.*",
                                    "pwdlib",
                                    "slowapi",
                                    "slowapi.*",
                                ]),
                            ),
                            ("ignore_missing_imports", true.into()),
                        ]),
                        tbl([
                            ("module", strings(&["{{PACKAGE_MODULE}}.config"])),
                            ("implicit_reexport", true.into()),
                        ]),
                        tbl([
                            (
                                "module",
                                strings(&[
                                    "{{PACKAGE_MODULE}}.core.enums",
                                    "{{PACKAGE_MODULE}}.core.security",
                                ]),
                            ),
                            (
                                "disable_error_code",
                                strings(&["return-value", "no-any-return"]),
                            ),
                        ]),
                        tbl([
                            ("module", strings(&["{{PACKAGE_MODULE}}.repositories.*"])),
                            (
                                "disable_error_code",
                                strings(&["return-value", "no-any-return", "attr-defined"]),
                            ),
                        ]),
                        tbl([
                            ("module", strings(&["{{PACKAGE_MODULE}}.factory"])),
                            ("disable_error_code", strings(&["arg-type"])),
                        ]),
                    ]),
                ),
            ]),
        ),
        (
            "pydantic-mypy",
            tbl([
                ("init_forbid_extra", true.into()),
                ("init_typed", true.into()),
                ("warn_required_dynamic_aliases", true.into()),
            ]),
        ),
        (
            "pylint",
            tbl([
                (
                    "main",
                    tbl([
                        (
                            "load-plugins",
                            strings(&["pylint_pydantic", "pylint_per_file_ignores"]),
                        ),
                        ("ignore", strings(&["alembic"])),
                        ("ignore-paths", strings(&["^alembic/.*"])),
                    ]),
                ),
                (
                    "pylint-per-file-ignores",
                    tbl([
                        ("alembic/env.py", s("no-member")),
                        ("conftest.py", s("import-outside-toplevel")),
                    ]),
                ),
            ]),
        ),
        (
            "pytest",
            tbl([(
                "ini_options",
                tbl([
                    ("asyncio_mode", s("auto")),
                    ("asyncio_default_fixture_loop_scope", s("function")),
                ]),
            )]),
        ),
        (
            "ty",
            tbl([
                ("src", tbl([("exclude", strings(&["alembic/versions/**"]))])),
                (
                    "overrides",
                    ConfigValue::Array(vec![tbl([
                        (
                            "include",
                            strings(&[
                                "{{PACKAGE_PATH}}/repositories/**",
                                "{{PACKAGE_PATH}}/services/**",
                            ]),
                        ),
                        ("rules", tbl([("unresolved-attribute", s("warn"))])),
                    ])]),
                ),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::get_path;

    #[test]
    fn shared_tools_have_no_pydantic_settings() {
        let tools = shared_tools();
        assert!(tools.get("pydantic-mypy").is_none());
        assert!(get_path(&tools, &["mypy", "plugins"]).is_none());
        assert!(get_path(&tools, &["pylint", "main", "load-plugins"]).is_none());
    }

    #[test]
    fn fastapi_adds_pydantic_and_asyncio() {
        let tools = fastapi_tools();
        assert!(tools.contains_key("pydantic-mypy"));
        assert_eq!(
            get_path(&tools, &["mypy", "plugins"]),
            Some(&strings(&["pydantic.mypy"]))
        );
        assert_eq!(
            get_path(&tools, &["pytest", "ini_options", "asyncio_mode"]),
            Some(&s("auto"))
        );
        // shared settings survive the merge
        assert_eq!(
            get_path(&tools, &["pytest", "ini_options", "testpaths"]),
            Some(&strings(&["tests"]))
        );
    }

    #[test]
    fn fastapi_mypy_overrides_extend_shared_ones() {
        let tools = fastapi_tools();
        let overrides = get_path(&tools, &["mypy", "overrides"])
            .and_then(ConfigValue::as_array)
            .unwrap();
        assert_eq!(overrides.len(), 7);
        assert_eq!(
            overrides[0].as_table().and_then(|t| t.get("module")),
            Some(&strings(&["tests.*", "conftest"]))
        );
    }

    #[test]
    fn pylint_ignore_lists_are_unioned() {
        let tools = fastapi_tools();
        let ignore = get_path(&tools, &["pylint", "main", "ignore"])
            .and_then(ConfigValue::as_array)
            .unwrap();
        assert_eq!(ignore.first(), Some(&s("venv")));
        assert_eq!(ignore.last(), Some(&s("alembic")));
    }
}

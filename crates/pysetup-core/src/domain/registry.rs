//! The fixed preset table.
//!
//! Adding a preset is a compile-time change to [`PRESET_REGISTRY`]; there is no
//! runtime registration.

use crate::domain::{
    DomainError, Preset, PresetDefaults,
    tooling::{fastapi_tools, shared_tools},
};

const FASTAPI_DEPS: &[&str] = &[
    "fastapi-cli>=0.0.16,<0.1.0",
    "pydantic>=2.12.5,<3.0.0",
    "pydantic-settings>=2.12.0,<3.0.0",
    "psycopg2-binary>=2.9.11,<3.0.0",
    "sqlalchemy>=2.0.32,<3.0.0",
    "alembic>=1.17.2,<2.0.0",
    "asyncpg>=0.31.0,<1.0.0",
    "python-multipart>=0.0.20,<0.1.0",
    "pyjwt>=2.10.1,<3.0.0",
    "pwdlib[argon2]>=0.3.0,<0.4.0",
    "uuid6>=2025.0.1,<2026.0.0",
    "slowapi>=0.1.9,<0.2.0",
    "redis>=7.1.0,<8.0.0",
    "structlog>=25.5.0,<26.0.0",
    "gunicorn>=23.0.0,<24.0.0",
    "uvicorn[standard]>=0.38.0,<0.39.0",
];

const FASTAPI_DEV_DEPS: &[&str] = &[
    "pytest>=9.0.2,<10.0.0",
    "pytest-asyncio>=1.3.0,<2.0.0",
    "pytest-cov>=7.0.0,<8.0.0",
    "httpx>=0.28.1,<0.29.0",
    "aiosqlite>=0.21.0,<0.22.0",
    "asgi-lifespan>=2.1.0,<3.0.0",
    "mypy>=1.19.0,<2.0.0",
    "types-redis>=4.6.0.20241004,<5.0.0",
    "ruff>=0.14.8,<0.15.0",
    "ty>=0.0.1a32,<0.1.0",
    "pre-commit>=4.5.0,<5.0.0",
    "pylint>=4.0.4,<5.0.0",
    "pylint-pydantic>=0.4.1,<0.5.0",
    "pylint-per-file-ignores>=3.2.0,<4.0.0",
];

const LIBRARY_DEV_DEPS: &[&str] = &[
    "pytest>=9.0.2,<10.0.0",
    "pytest-cov>=7.0.0,<8.0.0",
    "httpx>=0.28.1,<0.29.0",
    "mypy>=1.19.0,<2.0.0",
    "ruff>=0.14.8,<0.15.0",
    "ty>=0.0.1a32,<0.1.0",
    "pre-commit>=4.5.0,<5.0.0",
    "pylint>=4.0.4,<5.0.0",
];

const CLI_DEPS: &[&str] = &["typer>=0.20.0,<0.21.0", "rich>=14.2.0,<15.0.0"];

const CLI_DEV_DEPS: &[&str] = &[
    "pytest>=9.0.2,<10.0.0",
    "pytest-cov>=7.0.0,<8.0.0",
    "mypy>=1.19.0,<2.0.0",
    "ruff>=0.14.8,<0.15.0",
    "ty>=0.0.1a32,<0.1.0",
    "pre-commit>=4.5.0,<5.0.0",
    "pylint>=4.0.4,<5.0.0",
];

const MODERN_PYTHON: PresetDefaults = PresetDefaults {
    python_version: Some(">=3.12"),
    ..PresetDefaults::none()
};

/// Every preset, in listing order.
pub static PRESET_REGISTRY: &[Preset] = &[
    Preset {
        name: "fastapi-backend",
        description: "FastAPI async backend with SQLAlchemy + JWT",
        defaults: MODERN_PYTHON,
        dependencies: FASTAPI_DEPS,
        dev_dependencies: FASTAPI_DEV_DEPS,
        entry_point: None,
        tools: fastapi_tools,
    },
    Preset {
        name: "library",
        description: "Python library (no runtime deps)",
        defaults: MODERN_PYTHON,
        dependencies: &[],
        dev_dependencies: LIBRARY_DEV_DEPS,
        entry_point: None,
        tools: shared_tools,
    },
    Preset {
        name: "cli-tool",
        description: "CLI tool with Typer + Rich",
        defaults: MODERN_PYTHON,
        dependencies: CLI_DEPS,
        dev_dependencies: CLI_DEV_DEPS,
        entry_point: Some("main:app"),
        tools: shared_tools,
    },
];

/// Find a preset by name (case-insensitive, surrounding whitespace ignored).
pub fn lookup(name: &str) -> Result<&'static Preset, DomainError> {
    let wanted = name.trim();
    PRESET_REGISTRY
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DomainError::PresetNotFound {
            name: wanted.to_string(),
            available: list_names(),
        })
}

/// Preset names in registry order.
pub fn list_names() -> Vec<&'static str> {
    PRESET_REGISTRY.iter().map(|preset| preset.name).collect()
}

/// First registry entry; the fallback when no preset is chosen.
pub fn default_preset() -> &'static Preset {
    &PRESET_REGISTRY[0]
}

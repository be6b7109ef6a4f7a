//! GitHub Actions publish workflow and the yapf style file.

use crate::domain::{Preset, RenderContext, entities::preset::requirement_name};

const PUBLISH_WORKFLOW: &str = r#"name: Publish to PyPI

on:
  push:
    branches:
      - main

permissions:
  contents: read

jobs:
  pypi-publish:
    name: Upload release to PyPI
    runs-on: ubuntu-latest
    environment:
      name: pypi
      url: https://pypi.org/p/{{PROJECT_NAME}}
    permissions:
      id-token: write
    steps:
      - name: Checkout code
        uses: actions/checkout@v4

      - name: Set up Python
        uses: actions/setup-python@v5
        with:
          python-version: "{{PYTHON_VERSION}}"

      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          {{INSTALL_COMMAND}}

{{TEST_STEP}}      - name: Build package
        run: |
          pip install build
          python -m build

      - name: Publish to PyPI
        uses: pypa/gh-action-pypi-publish@release/v1
"#;

const TEST_STEP: &str = "      - name: Run tests
        run: pytest

";

/// yapf configuration written as `.style.yapf`.
pub const STYLE_YAPF: &str = "[style]
based_on_style = pep8
column_limit = 75
indent_width = 4
continuation_indent_width = 4
indent_closing_brackets = false
dedent_closing_brackets = true
indent_blank_lines = false
spaces_before_comment = 2
spaces_around_power_operator = false
spaces_around_default_or_named_assign = true
space_between_ending_comma_and_closing_bracket = false
space_inside_brackets = false
spaces_around_subscript_colon = true
blank_line_before_nested_class_or_def = false
blank_line_before_class_docstring = false
blank_lines_around_top_level_definition = 2
blank_lines_between_top_level_imports_and_variables = 2
blank_line_before_module_docstring = false
split_before_logical_operator = true
split_before_first_argument = true
split_before_named_assigns = true
split_complex_comprehension = true
split_before_expression_after_opening_paren = false
split_before_closing_bracket = true
split_all_comma_separated_values = true
split_all_top_level_comma_separated_values = false
coalesce_brackets = false
each_dict_entry_on_separate_line = true
allow_multiline_lambdas = false
allow_multiline_dictionary_keys = false
split_penalty_import_names = 0
join_multiple_lines = false
align_closing_bracket_with_visual_indent = true
arithmetic_precedence_indication = false
split_penalty_for_added_line_split = 275
use_tabs = false
split_before_dot = false
split_arguments_when_comma_terminated = true
i18n_function_call = ['_', 'N_', 'gettext', 'ngettext']
i18n_comment = ['# Translators:', '# i18n:']
split_penalty_comprehension = 80
split_penalty_after_opening_bracket = 280
split_penalty_before_if_expr = 0
split_penalty_bitwise_operator = 290
split_penalty_logical_operator = 0
";

/// The install command the workflow runs for a preset.
pub fn install_command(preset: &Preset, has_dev_dependencies: bool) -> &'static str {
    if has_dev_dependencies || !preset.dev_dependencies.is_empty() {
        r#"pip install -e ".[dev]""#
    } else {
        "pip install -e ."
    }
}

/// Render the publish workflow for a preset.
///
/// `ctx` must carry `PROJECT_NAME` and `PYTHON_VERSION`.
pub fn publish_workflow(preset: &Preset, extra_dev: &[String], ctx: &RenderContext) -> String {
    let runs_tests = preset.has_dev_dependency("pytest")
        || extra_dev
            .iter()
            .any(|dep| requirement_name(dep).eq_ignore_ascii_case("pytest"));

    let ctx = ctx
        .clone()
        .with_variable("INSTALL_COMMAND", install_command(preset, !extra_dev.is_empty()))
        .with_variable("TEST_STEP", if runs_tests { TEST_STEP } else { "" });

    ctx.render(PUBLISH_WORKFLOW)
}

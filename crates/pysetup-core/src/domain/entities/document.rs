/// Manifest location, relative to the output directory.
pub const MANIFEST_PATH: &str = "pyproject.toml";
/// Publish workflow location, relative to the output directory.
pub const WORKFLOW_PATH: &str = ".github/workflows/publish.yml";
/// yapf style file location, relative to the output directory.
pub const STYLE_CONFIG_PATH: &str = ".style.yapf";

/// Final text produced by one render.
///
/// Optional parts are `None` when disabled; there is never an empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub manifest: String,
    pub workflow: Option<String>,
    pub style_config: Option<String>,
}

/// One file of a [`RenderedDocument`], paired with its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFile<'a> {
    pub path: &'static str,
    pub content: &'a str,
}

impl RenderedDocument {
    /// Files to write, manifest first.
    pub fn files(&self) -> Vec<OutputFile<'_>> {
        let mut files = vec![OutputFile {
            path: MANIFEST_PATH,
            content: &self.manifest,
        }];
        if let Some(workflow) = &self.workflow {
            files.push(OutputFile {
                path: WORKFLOW_PATH,
                content: workflow,
            });
        }
        if let Some(style) = &self.style_config {
            files.push(OutputFile {
                path: STYLE_CONFIG_PATH,
                content: style,
            });
        }
        files
    }
}

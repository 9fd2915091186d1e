use serde::{Deserialize, Serialize};

/// Output path that routes the document to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl OutputConfig {
    pub fn is_stdout(&self) -> bool {
        self.path == STDOUT_PATH
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "dns_hierarchy.md".to_string()
}

use serde::{Deserialize, Serialize};

use crate::record_filter::{DEFAULT_EXCLUDED_NAME_TOKENS, DEFAULT_EXCLUDED_TYPES};
use crate::RecordFilter;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Drop TXT and verification records before building the hierarchy
    #[serde(default)]
    pub exclude_txt: bool,

    #[serde(default = "default_excluded_types")]
    pub excluded_types: Vec<String>,

    #[serde(default = "default_excluded_name_tokens")]
    pub excluded_name_tokens: Vec<String>,
}

impl FilterConfig {
    /// The filter to apply, if enabled.
    pub fn record_filter(&self) -> Option<RecordFilter> {
        self.exclude_txt
            .then(|| RecordFilter::new(&self.excluded_types, &self.excluded_name_tokens))
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_txt: false,
            excluded_types: default_excluded_types(),
            excluded_name_tokens: default_excluded_name_tokens(),
        }
    }
}

fn default_excluded_types() -> Vec<String> {
    DEFAULT_EXCLUDED_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_name_tokens() -> Vec<String> {
    DEFAULT_EXCLUDED_NAME_TOKENS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

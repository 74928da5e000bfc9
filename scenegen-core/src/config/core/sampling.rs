use serde::{Deserialize, Serialize};

/// How lines are drawn from each corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// One contiguous window around a single random anchor
    #[default]
    Window,
    /// Several smaller windows, each around its own anchor
    Chunked,
}

/// Corpus sampling configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SamplingConfig {
    #[serde(default)]
    pub mode: SamplingMode,
}

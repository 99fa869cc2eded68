// build options
use serde::Deserialize;

/// What to do when two records share a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateLabelPolicy {
    /// Abort the build with `GraphError::DuplicateLabel`.
    #[default]
    Reject,
    /// Keep the first node, drop the later one and emit a diagnostic.
    KeepFirst,
}

/// Options for `GraphBuilder`. Every field has a default so the struct can be embedded in a
/// larger configuration file and partially specified.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub duplicate_labels: DuplicateLabelPolicy,
    /// Emit a diagnostic for every reference to a label outside the graph. The link is skipped
    /// either way.
    pub report_dangling_references: bool,
}

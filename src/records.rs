// raw tabular records -> node specs -> graph
//
// Rows arrive already parsed by whatever reader the caller uses (csv, spreadsheet, json...).
// This module only normalizes them: rows without label or full_text are dropped, label lists
// are split, category and stance strings are mapped to their enums.
use serde::Deserialize;
use tracing::debug;

use crate::core::builder::GraphBuilder;
use crate::core::config::BuildConfig;
use crate::core::graph::{ArgumentGraph, GraphError};
use crate::core::node::NodeSpec;
use crate::core::types::{Category, Partition, Stance};

/// Conventional name (without extension) of the samples table.
pub const SAMPLES_FILE_STEM: &str = "samples_collection";

/// One row of a node table. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub label: Option<String>,
    pub full_text: Option<String>,
    pub category: Option<String>,
    pub stance: Option<String>,
    pub parents: Option<String>,
    pub similars: Option<String>,
    pub label_name: Option<String>,
    pub paraphrase: Option<String>,
    pub summary: Option<String>,
    pub groups: Option<String>,
    pub rating: Option<i64>,
    pub reaction_to_argument: Option<i64>,
}

impl RawRecord {
    /// `None` if `label` or `full_text` is missing or blank.
    pub fn into_spec(self) -> Option<NodeSpec> {
        let label = non_blank(self.label)?;
        let full_text = non_blank(self.full_text)?;

        let mut spec = NodeSpec::new(label, full_text);
        if let Some(category) = self.category {
            spec.category = Category::from_name(&category);
        }
        if let Some(stance) = self.stance {
            spec.stance = Stance::from_name(&stance);
        }
        spec.parents = owned_labels(self.parents.as_deref());
        spec.groups = owned_labels(self.groups.as_deref());
        spec.similars = owned_labels(self.similars.as_deref());
        spec.label_name = self.label_name.unwrap_or_default();
        spec.paraphrase = self.paraphrase.unwrap_or_default();
        spec.summary = self.summary.unwrap_or_default();
        spec.rating = self.rating.unwrap_or(-1);
        spec.reaction_to_argument = self.reaction_to_argument.unwrap_or(-1);
        Some(spec)
    }
}

/// One row of the samples table: an example utterance for the node `label`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleRecord {
    pub label: String,
    pub text: String,
}

/// Splits a label list cell: labels are separated by commas and/or whitespace.
pub fn split_labels(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

fn owned_labels(cell: Option<&str>) -> Vec<String> {
    cell.map(|text| split_labels(text).map(str::to_string).collect())
        .unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The six node tables plus the optional samples table.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub introductions: Vec<RawRecord>,
    pub transitions: Vec<RawRecord>,
    pub z_arguments: Vec<RawRecord>,
    pub groups: Vec<RawRecord>,
    pub nz_arguments: Vec<RawRecord>,
    pub faq: Vec<RawRecord>,
    pub samples: Option<Vec<SampleRecord>>,
}

impl RecordSet {
    pub fn records(&self, partition: Partition) -> &[RawRecord] {
        match partition {
            Partition::Introduction => &self.introductions,
            Partition::Transition => &self.transitions,
            Partition::ZArgument => &self.z_arguments,
            Partition::Group => &self.groups,
            Partition::NzArgument => &self.nz_arguments,
            Partition::Faq => &self.faq,
        }
    }

    pub fn records_mut(&mut self, partition: Partition) -> &mut Vec<RawRecord> {
        match partition {
            Partition::Introduction => &mut self.introductions,
            Partition::Transition => &mut self.transitions,
            Partition::ZArgument => &mut self.z_arguments,
            Partition::Group => &mut self.groups,
            Partition::NzArgument => &mut self.nz_arguments,
            Partition::Faq => &mut self.faq,
        }
    }
}

impl ArgumentGraph {
    pub fn from_records(records: RecordSet) -> Result<ArgumentGraph, GraphError> {
        Self::from_records_with_config(records, BuildConfig::default())
    }

    /// Converts every table, feeds the builder partition by partition and builds.
    pub fn from_records_with_config(
        mut records: RecordSet,
        config: BuildConfig,
    ) -> Result<ArgumentGraph, GraphError> {
        let mut builder = GraphBuilder::with_config(config);

        for partition in Partition::ALL {
            let rows = std::mem::take(records.records_mut(partition));
            let total = rows.len();
            let specs: Vec<NodeSpec> = rows.into_iter().filter_map(RawRecord::into_spec).collect();
            if specs.len() < total {
                debug!(
                    partition = %partition,
                    dropped = total - specs.len(),
                    "records without label or full_text dropped"
                );
            }
            builder.add_nodes(partition, specs)?;
        }

        if let Some(samples) = records.samples.take() {
            builder.add_samples(samples.into_iter().map(|s| (s.label, s.text)));
        }

        builder.build()
    }
}

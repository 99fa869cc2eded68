pub mod core;
pub mod records;

pub use crate::core::builder::GraphBuilder;
pub use crate::core::config::{BuildConfig, DuplicateLabelPolicy};
pub use crate::core::diagnostics::Diagnostic;
pub use crate::core::graph::{ArgumentGraph, GraphError};
pub use crate::core::links::LinkSet;
pub use crate::core::node::{Node, NodeRef, NodeSpec};
pub use crate::core::types::{Category, NodeId, Partition, RelationKind, Stance};
pub use crate::records::{RawRecord, RecordSet, SampleRecord};

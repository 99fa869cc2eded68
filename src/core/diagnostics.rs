// non-fatal findings collected while building the graph
use std::fmt;

use tracing::warn;

use crate::core::types::{Partition, RelationKind};

/// A tolerated input problem. Never stops construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The node named itself in one of its reference lists; the entry was removed.
    SelfReference { label: String, relation: RelationKind },
    /// A later node reused an existing label and was dropped (`keep_first` policy only).
    DuplicateLabel { label: String, partition: Partition },
    /// A referenced label is not part of the graph (only reported when enabled).
    DanglingReference { label: String, relation: RelationKind, target: String },
    /// FAQ answer whose declared questions all failed to resolve; no pair is produced.
    FaqAnswerWithoutQuestion { label: String },
    /// FAQ answer resolving to several questions; paired with the first one.
    FaqAnswerWithMultipleQuestions { label: String, questions: Vec<String> },
}

impl Diagnostic {
    /// Label of the node the diagnostic is about.
    pub fn label(&self) -> &str {
        match self {
            Diagnostic::SelfReference { label, .. }
            | Diagnostic::DuplicateLabel { label, .. }
            | Diagnostic::DanglingReference { label, .. }
            | Diagnostic::FaqAnswerWithoutQuestion { label }
            | Diagnostic::FaqAnswerWithMultipleQuestions { label, .. } => label,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SelfReference { label, relation } => {
                write!(f, "{relation} labels of node {label} must not contain the node itself")
            }
            Diagnostic::DuplicateLabel { label, partition } => {
                write!(f, "duplicate label {label} in {partition} partition, keeping the first node")
            }
            Diagnostic::DanglingReference { label, relation, target } => {
                write!(f, "node {label} references unknown {relation} label {target}")
            }
            Diagnostic::FaqAnswerWithoutQuestion { label } => {
                write!(f, "found FAQ answer node without question: {label}")
            }
            Diagnostic::FaqAnswerWithMultipleQuestions { label, questions } => {
                write!(
                    f,
                    "found FAQ answer node {label} for multiple questions: {}",
                    questions.join(", ")
                )
            }
        }
    }
}

/// Collects diagnostics and logs each one as it arrives.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        warn!(label = diagnostic.label(), "{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

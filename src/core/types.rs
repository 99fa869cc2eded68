// shared identifiers and tags
use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside the graph arena. Assigned in insertion order.
pub type NodeId = u32;

/// The six disjoint node partitions. A node belongs to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Introduction,
    Transition,
    ZArgument,
    Group,
    NzArgument,
    Faq,
}

impl Partition {
    /// Iteration order of `all_nodes`.
    pub const ALL: [Partition; 6] = [
        Partition::Introduction,
        Partition::Transition,
        Partition::ZArgument,
        Partition::Group,
        Partition::NzArgument,
        Partition::Faq,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Partition::Introduction => 0,
            Partition::Transition => 1,
            Partition::ZArgument => 2,
            Partition::Group => 3,
            Partition::NzArgument => 4,
            Partition::Faq => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Introduction => "introduction",
            Partition::Transition => "transition",
            Partition::ZArgument => "z_argument",
            Partition::Group => "group",
            Partition::NzArgument => "nz_argument",
            Partition::Faq => "faq",
        }
    }

    /// Conventional name (without extension) of the table holding this partition's records.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Partition::Introduction => "nodes_introductions",
            Partition::Transition => "nodes_transitions",
            Partition::ZArgument => "nodes_zargs",
            Partition::Group => "nodes_groups",
            Partition::NzArgument => "nodes_nzargs",
            Partition::Faq => "nodes_faq",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content category, orthogonal to the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Z,
    Nz,
    Faq,
    #[default]
    Other,
}

impl Category {
    /// Case-insensitive; anything unrecognized is `Other`.
    pub fn from_name(name: &str) -> Category {
        match name.trim().to_lowercase().as_str() {
            "z" => Category::Z,
            "nz" => Category::Nz,
            "faq" => Category::Faq,
            _ => Category::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Pro,
    Con,
    #[default]
    Other,
}

impl Stance {
    pub fn from_name(name: &str) -> Stance {
        match name.trim().to_lowercase().as_str() {
            "pro" => Stance::Pro,
            "con" => Stance::Con,
            _ => Stance::Other,
        }
    }

    pub fn from_agreement_value(agreement: f64) -> Stance {
        if agreement > 0.5 { Stance::Pro } else { Stance::Con }
    }

    /// Guess the stance from label conventions: a `P` (pro) or `K` (contra) marker whose
    /// polarity flips with every `-` in the label.
    #[deprecated(note = "inferring the stance from label text is unreliable; use the stance column")]
    pub fn from_label(label: &str) -> Stance {
        let even = label.matches('-').count() % 2 == 0;
        let pro_marker = label.contains('P');
        let con_marker = label.contains('K');

        if (pro_marker && even) || (con_marker && !even) {
            Stance::Pro
        } else if (con_marker && even) || (pro_marker && !even) {
            Stance::Con
        } else {
            Stance::Other
        }
    }
}

/// The three relation families the resolver links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// parents -> parent_nodes / child_nodes
    Parent,
    /// groups -> group_nodes / group_member_nodes
    Group,
    /// similars -> similar_nodes (symmetric)
    Similar,
}

impl RelationKind {
    pub const ALL: [RelationKind; 3] = [RelationKind::Parent, RelationKind::Group, RelationKind::Similar];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Parent => "parent",
            RelationKind::Group => "group",
            RelationKind::Similar => "similar",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

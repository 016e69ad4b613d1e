//! Flattened, visible explorer rows.

use synapse_entity::NodeKind;

use super::node::TreeNode;
use crate::badge::StatusBadge;
use crate::locale::Locale;
use crate::navigation::NavigationState;

/// Horizontal indent per depth level, in layout units.
pub const INDENT_UNITS: u16 = 16;

/// Expansion marker of a container row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Collapsed,
    Expanded,
}

impl Chevron {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Collapsed => "▸",
            Self::Expanded => "▾",
        }
    }
}

/// Kind icon of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Project,
    Section,
    Folder,
    Document,
}

impl Icon {
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Project => Self::Project,
            NodeKind::Section => Self::Section,
            NodeKind::Folder => Self::Folder,
            NodeKind::Document => Self::Document,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Project => "🗂",
            Self::Section => "📦",
            Self::Folder => "📁",
            Self::Document => "📄",
        }
    }
}

/// One visible line of the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: String,
    pub kind: NodeKind,
    pub depth: usize,
    /// `depth * INDENT_UNITS`.
    pub indent: u16,
    /// Present only on containers that have children.
    pub chevron: Option<Chevron>,
    pub icon: Icon,
    /// Hidden in rail mode.
    pub label: Option<String>,
    /// Folder document count; hidden in rail mode.
    pub document_count: Option<usize>,
    /// Document status badge; hidden in rail mode.
    pub badge: Option<StatusBadge>,
    pub selected: bool,
}

/// Flatten the tree into the rows currently visible.
///
/// Children are emitted only under expanded parents. In rail mode only the
/// root row is produced, with its label suppressed.
pub fn visible_rows(
    root: &TreeNode,
    nav: &NavigationState,
    locale: &Locale,
    rail: bool,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(root, 0, nav, locale, rail, &mut rows);
    rows
}

fn push_rows(
    node: &TreeNode,
    depth: usize,
    nav: &NavigationState,
    locale: &Locale,
    rail: bool,
    rows: &mut Vec<TreeRow>,
) {
    let expanded = nav.is_node_expanded(&node.id);
    let chevron = node.is_expandable().then_some(if expanded {
        Chevron::Expanded
    } else {
        Chevron::Collapsed
    });

    rows.push(TreeRow {
        id: node.id.clone(),
        kind: node.kind,
        depth,
        indent: u16::try_from(depth).unwrap_or(u16::MAX).saturating_mul(INDENT_UNITS),
        chevron,
        icon: Icon::for_kind(node.kind),
        label: (!rail).then(|| {
            if node.localized {
                locale.t(&node.label).to_string()
            } else {
                node.label.clone()
            }
        }),
        document_count: if rail { None } else { node.document_count },
        badge: if rail {
            None
        } else {
            node.status.map(|s| StatusBadge::new(s, locale))
        },
        selected: nav.is_selected(&node.id),
    });

    if !rail && node.is_expandable() && expanded {
        for child in &node.children {
            push_rows(child, depth + 1, nav, locale, rail, rows);
        }
    }
}

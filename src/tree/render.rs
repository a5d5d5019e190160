//! Tree rendering
//!
//! Turns a resolved tree into display rows in pre-order. Every node gets a
//! box-drawing prefix: `├─` for a child with later siblings, `└─` for the last
//! child. Above a node, an ancestor column shows `│ ` while that ancestor still
//! has siblings below it, and blank space once its subtree is closed.

use chrono::{DateTime, Utc};

use crate::tree::age::format_age;
use crate::tree::models::{RequestNode, TreeNode};

pub const FIRST_ELEM_PREFIX: &str = "├─";
pub const LAST_ELEM_PREFIX: &str = "└─";
pub const PIPE: &str = "│ ";

/// Rendering settings, passed explicitly to every render
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Reference point for ages
    pub now: DateTime<Utc>,
    /// Emit ANSI styling in table output
    pub color: bool,
}

impl RenderConfig {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

/// One rendered node
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub namespace: String,
    /// Display prefix, already collapsed
    pub prefix: String,
    pub kind: String,
    pub name: String,
    pub status: String,
    pub age: String,
}

impl DisplayRow {
    /// `prefix` + `kind/name`
    pub fn label(&self) -> String {
        format!("{}{}/{}", self.prefix, self.kind, self.name)
    }
}

/// Render a tree, root first
pub fn render(root: &TreeNode, config: &RenderConfig) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    walk(root, String::new(), config, &mut rows);
    rows
}

/// Render a resolved request
pub fn render_request(request: &RequestNode, config: &RenderConfig) -> Vec<DisplayRow> {
    render(&TreeNode::from(request), config)
}

fn walk(node: &TreeNode, raw_prefix: String, config: &RenderConfig, rows: &mut Vec<DisplayRow>) {
    rows.push(DisplayRow {
        namespace: node.reference.namespace.clone(),
        prefix: display_prefix(&raw_prefix),
        kind: node.kind.clone(),
        name: node.reference.name.clone(),
        status: node.status.clone(),
        age: format_age(node.created, config.now),
    });

    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let connector = if i == last {
            LAST_ELEM_PREFIX
        } else {
            FIRST_ELEM_PREFIX
        };
        walk(child, format!("{}{}", raw_prefix, connector), config, rows);
    }
}

/// Collapse a chain of connectors into the prefix shown for a node
///
/// The raw prefix holds one connector per ancestor level plus the node's own.
/// Only the final connector is drawn as is. Earlier `├─` become `│ ` and
/// earlier `└─` become two spaces.
pub fn display_prefix(raw: &str) -> String {
    let blank = " ".repeat(LAST_ELEM_PREFIX.chars().count());

    let first_count = raw.matches(FIRST_ELEM_PREFIX).count();
    let p = if raw.ends_with(FIRST_ELEM_PREFIX) {
        raw.replacen(FIRST_ELEM_PREFIX, PIPE, first_count.saturating_sub(1))
    } else {
        raw.replace(FIRST_ELEM_PREFIX, PIPE)
    };

    let last_count = p.matches(LAST_ELEM_PREFIX).count();
    if p.ends_with(LAST_ELEM_PREFIX) {
        p.replacen(LAST_ELEM_PREFIX, &blank, last_count.saturating_sub(1))
    } else {
        p.replace(LAST_ELEM_PREFIX, &blank)
    }
}

//! Byte-range edits recorded against the source of one rewrite pass.
//!
//! Tree-sitter trees are immutable, so replacing a node means remembering
//! which byte range gets which text and splicing everything in at the end.
//! Edits never overlap: a new edit that encloses existing ones supersedes them.

use std::collections::BTreeMap;

use serde::Serialize;
use tree_sitter::Node;

use super::value::JsValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditKind {
    Substitution { path: String },
    Fold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edit {
    pub start_byte: usize,
    pub end_byte: usize,
    /// 1-based.
    pub line: usize,
    /// 1-based, in bytes.
    pub column: usize,
    pub original: String,
    pub replacement: String,
    #[serde(flatten)]
    pub kind: EditKind,
    /// Primitive value of the replacement, when it has one.
    #[serde(skip)]
    pub value: Option<JsValue>,
}

impl Edit {
    pub fn for_node(
        node: &Node,
        original: String,
        replacement: String,
        kind: EditKind,
        value: Option<JsValue>,
    ) -> Self {
        let position = node.start_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            line: position.row + 1,
            column: position.column + 1,
            original,
            replacement,
            kind,
            value,
        }
    }

    pub fn is_fold(&self) -> bool {
        matches!(self.kind, EditKind::Fold)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditSet {
    edits: BTreeMap<usize, Edit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Whether `[start, end)` lies inside a recorded edit.
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.edits
            .range(..=start)
            .next_back()
            .is_some_and(|(_, edit)| edit.end_byte >= end && edit.end_byte > start)
    }

    /// The edit replacing exactly `[start, end)`.
    pub fn exact(&self, start: usize, end: usize) -> Option<&Edit> {
        self.edits.get(&start).filter(|edit| edit.end_byte == end)
    }

    pub fn insert(&mut self, edit: Edit) {
        let enclosed: Vec<usize> = self
            .edits
            .range(edit.start_byte..edit.end_byte)
            .filter(|(_, existing)| existing.end_byte <= edit.end_byte)
            .map(|(start, _)| *start)
            .collect();
        for start in enclosed {
            self.edits.remove(&start);
        }
        self.edits.insert(edit.start_byte, edit);
    }

    /// Splices every edit into `source`.
    pub fn apply(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;
        for edit in self.edits.values() {
            out.push_str(&source[cursor..edit.start_byte]);
            out.push_str(&edit.replacement);
            cursor = edit.end_byte;
        }
        out.push_str(&source[cursor..]);
        out
    }

    pub fn into_vec(self) -> Vec<Edit> {
        self.edits.into_values().collect()
    }
}

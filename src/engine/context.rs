/// Per-pass rewrite context.
///
/// Gives strategies access to:
/// - The source being rewritten, its path and language
/// - The define table of the pass
/// - The edits recorded so far
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tree_sitter::Node;

use super::edit::{Edit, EditSet};
use super::language::Language;
use super::resolver::DefineTable;

pub struct Context<'a> {
    source_code: &'a [u8],

    file_path: PathBuf,

    language: Language,

    table: &'a DefineTable,

    /// Pending substitutions and folds, keyed by start byte
    edits: RefCell<EditSet>,
}

impl<'a> Context<'a> {
    pub fn new(
        source_code: &'a [u8],
        file_path: impl Into<PathBuf>,
        language: Language,
        table: &'a DefineTable,
    ) -> Self {
        Self {
            source_code,
            file_path: file_path.into(),
            language,
            table,
            edits: RefCell::new(EditSet::new()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn table(&self) -> &DefineTable {
        self.table
    }

    /// Get the source code text for a node
    /// Uses lossy UTF-8 conversion to handle invalid sequences gracefully
    pub fn get_node_text(&self, node: &Node) -> String {
        let start = node.start_byte();
        let end = node.end_byte();
        String::from_utf8_lossy(&self.source_code[start..end]).to_string()
    }

    /// Whether the node lies inside a range that is already being replaced.
    pub fn is_edited(&self, node: &Node) -> bool {
        self.edits
            .borrow()
            .covers(node.start_byte(), node.end_byte())
    }

    /// The pending edit replacing exactly this node, if any.
    pub fn substituted(&self, node: &Node) -> Option<Edit> {
        self.edits
            .borrow()
            .exact(node.start_byte(), node.end_byte())
            .cloned()
    }

    pub fn record_edit(&self, edit: Edit) {
        self.edits.borrow_mut().insert(edit);
    }

    pub fn take_edits(&self) -> EditSet {
        self.edits.take()
    }
}

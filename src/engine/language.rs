use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::error::ParserError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Language {
    pub const EXTENSIONS: &'static [&'static str] =
        &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "typescript" | "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(Self::parse)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Parses `source`, failing on any syntax error in the tree.
pub fn parse_source(source: &str, language: Language, path: &Path) -> Result<Tree, ParserError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.tree_sitter_language())
        .map_err(|_| ParserError::language_setup_failed(language.name()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParserError::parse_failed(path))?;

    let root = tree.root_node();
    if root.has_error() {
        let error = first_error_node(root).unwrap_or(root);
        let position = error.start_position();
        let message = if error.is_missing() {
            format!("missing `{}`", error.kind())
        } else {
            let text = source
                .get(error.start_byte()..error.end_byte())
                .unwrap_or_default();
            let snippet: String = text.chars().take(40).collect();
            format!("unexpected `{snippet}`")
        };
        return Err(ParserError::syntax_error(
            path,
            position.row + 1,
            position.column + 1,
            message,
        ));
    }

    Ok(tree)
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    loop {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        if !current.has_error() {
            return None;
        }
        let mut cursor = current.walk();
        let next = current
            .children(&mut cursor)
            .find(|child| child.is_error() || child.is_missing() || child.has_error());
        current = next?;
    }
}

//! Flattening of nested configuration into dotted match targets.
//!
//! Every reachable location below the root yields one path, intermediate
//! mappings included, in pre-order. Enumeration is generic over
//! [`Traversable`] so shared or self-referencing structures can be walked
//! too: a container already on the current ancestry is listed but not
//! entered again.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
    dotted: String,
}

impl ConfigPath {
    pub fn new(segments: Vec<String>) -> Self {
        let dotted = segments.join(".");
        Self { segments, dotted }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with `.`; the form comparators match against.
    pub fn dotted(&self) -> &str {
        &self.dotted
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

/// Which of several paths is offered to comparators first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathOrdering {
    /// Stable sort by descending dotted length; ties keep enumeration order.
    #[default]
    LongestFirst,
    /// Plain pre-order enumeration.
    Enumeration,
}

pub trait Traversable {
    /// Identity of a container node; `None` for leaves.
    fn container_id(&self) -> Option<usize>;

    fn for_each_child(&self, visit: &mut dyn FnMut(&str, &Self));
}

impl Traversable for serde_json::Value {
    fn container_id(&self) -> Option<usize> {
        match self {
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                Some(self as *const serde_json::Value as usize)
            }
            _ => None,
        }
    }

    fn for_each_child(&self, visit: &mut dyn FnMut(&str, &Self)) {
        match self {
            serde_json::Value::Object(map) => {
                for (key, value) in map {
                    visit(key, value);
                }
            }
            serde_json::Value::Array(items) => {
                for (index, value) in items.iter().enumerate() {
                    visit(&index.to_string(), value);
                }
            }
            _ => {}
        }
    }
}

/// All non-root paths of `root`, longest first.
pub fn enumerate_paths<T: Traversable>(root: &T) -> Vec<ConfigPath> {
    enumerate_paths_with(root, PathOrdering::default())
}

pub fn enumerate_paths_with<T: Traversable>(root: &T, ordering: PathOrdering) -> Vec<ConfigPath> {
    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    let mut ancestors = Vec::new();
    collect(root, &mut prefix, &mut ancestors, &mut paths);

    if ordering == PathOrdering::LongestFirst {
        paths.sort_by(|a, b| b.dotted().len().cmp(&a.dotted().len()));
    }
    paths
}

fn collect<T: Traversable>(
    node: &T,
    prefix: &mut Vec<String>,
    ancestors: &mut Vec<usize>,
    out: &mut Vec<ConfigPath>,
) {
    let Some(id) = node.container_id() else {
        return;
    };
    if ancestors.contains(&id) {
        return;
    }

    ancestors.push(id);
    node.for_each_child(&mut |key, child| {
        prefix.push(key.to_string());
        out.push(ConfigPath::new(prefix.clone()));
        collect(child, prefix, ancestors, out);
        prefix.pop();
    });
    ancestors.pop();
}

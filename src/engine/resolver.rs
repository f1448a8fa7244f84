use serde_json::Value;
use tracing::trace;

use super::comparator::{Candidate, Comparator};
use super::paths::{enumerate_paths_with, ConfigPath, PathOrdering};
use super::value::is_falsy;
use crate::config::Defines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub ordering: PathOrdering,
    /// Substitute `false`, `0`, `""` and `null` instead of treating them as
    /// "no replacement".
    pub allow_falsy: bool,
}

/// The configured value selected for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub path: ConfigPath,
    pub value: Value,
}

/// Paths of one configuration, enumerated once and reused for every node.
#[derive(Debug, Clone)]
pub struct PathIndex {
    paths: Vec<ConfigPath>,
}

impl PathIndex {
    pub fn build(config: &Value, ordering: PathOrdering) -> Self {
        Self {
            paths: enumerate_paths_with(config, ordering),
        }
    }

    pub fn paths(&self) -> &[ConfigPath] {
        &self.paths
    }

    pub fn resolve(
        &self,
        config: &Value,
        comparator: Comparator,
        candidate: &Candidate,
        allow_falsy: bool,
    ) -> Option<Replacement> {
        let path = self
            .paths
            .iter()
            .find(|path| comparator.matches(candidate, path.dotted()))?;

        let value = lookup(config, path)?;
        if !allow_falsy && is_falsy(value) {
            trace!(path = %path, "matched a falsy value, leaving node as is");
            return None;
        }

        Some(Replacement {
            path: path.clone(),
            value: value.clone(),
        })
    }
}

/// Finds the replacement for `candidate` in `config`.
pub fn resolve_replacement(
    config: &Value,
    comparator: Comparator,
    candidate: &Candidate,
    options: ResolveOptions,
) -> Option<Replacement> {
    PathIndex::build(config, options.ordering).resolve(
        config,
        comparator,
        candidate,
        options.allow_falsy,
    )
}

/// Walks `path` segment by segment from `root`.
pub fn lookup<'v>(root: &'v Value, path: &ConfigPath) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// A configuration together with its path index and resolution options.
#[derive(Debug, Clone)]
pub struct DefineTable {
    defines: Defines,
    index: PathIndex,
    options: ResolveOptions,
}

impl DefineTable {
    pub fn new(defines: Defines, options: ResolveOptions) -> Self {
        let index = PathIndex::build(defines.as_value(), options.ordering);
        Self {
            defines,
            index,
            options,
        }
    }

    pub fn defines(&self) -> &Defines {
        &self.defines
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    pub fn path_count(&self) -> usize {
        self.index.paths().len()
    }

    pub fn resolve(&self, comparator: Comparator, candidate: &Candidate) -> Option<Replacement> {
        self.index.resolve(
            self.defines.as_value(),
            comparator,
            candidate,
            self.options.allow_falsy,
        )
    }
}

use std::collections::{HashMap, HashSet};

use crate::error::{GitLatestError, Result};
use crate::source::{Tag, TagSource};

/// Mock tag source for testing the resolver without a real repository
pub struct MockSource {
    head: String,
    tags: Vec<Tag<String>>,
    ancestors_of_head: HashSet<String>,
    broken_targets: HashMap<String, String>,
}

impl MockSource {
    /// Create a mock source whose HEAD resolves to `head`
    pub fn new(head: impl Into<String>) -> Self {
        MockSource {
            head: head.into(),
            tags: Vec::new(),
            ancestors_of_head: HashSet::new(),
            broken_targets: HashMap::new(),
        }
    }

    /// Add a dereferenced tag pointing at `target`
    pub fn add_tag(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.tags.push(Tag {
            name: name.into(),
            target: target.into(),
        });
    }

    /// Mark a commit id as an ancestor of HEAD
    pub fn mark_ancestor(&mut self, id: impl Into<String>) {
        self.ancestors_of_head.insert(id.into());
    }

    /// Make ancestry checks against `id` fail with `detail`
    pub fn mark_broken(&mut self, id: impl Into<String>, detail: impl Into<String>) {
        self.broken_targets.insert(id.into(), detail.into());
    }
}

impl TagSource for MockSource {
    type Id = String;

    fn resolve_head(&self) -> Result<String> {
        Ok(self.head.clone())
    }

    fn dereferenced_tags(&self) -> Result<Vec<Tag<String>>> {
        Ok(self.tags.clone())
    }

    fn is_ancestor(&self, commit: &String, head: &String) -> Result<bool> {
        if let Some(detail) = self.broken_targets.get(commit) {
            return Err(GitLatestError::ancestry(detail.clone()));
        }

        Ok(commit == head || self.ancestors_of_head.contains(commit))
    }
}

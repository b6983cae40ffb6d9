use std::path::Path;

use git2::{Oid, Repository};

use crate::error::{GitLatestError, Result};
use crate::source::Tag;

/// Tag source backed by the `git2` crate; no external process is spawned.
pub struct Git2Source {
    repo: Repository,
}

impl Git2Source {
    /// Open the repository at `path`.
    ///
    /// Uses `open` rather than `discover` so that both backends judge the
    /// same path the same way: the process-backed source is likewise pinned
    /// to the given directory.
    ///
    /// # Returns
    /// * `Ok(Git2Source)` - the path is a git repository
    /// * `Err(RepositoryOpen)` - it is not
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path)
            .map_err(|e| GitLatestError::open(e.message().to_string()))?;

        Ok(Git2Source { repo })
    }
}

impl super::TagSource for Git2Source {
    type Id = Oid;

    fn resolve_head(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| GitLatestError::head(format!("Cannot read HEAD ref: {}", e.message())))?;

        let commit = head.peel_to_commit().map_err(|e| {
            GitLatestError::head(format!("HEAD does not point at a commit: {}", e.message()))
        })?;

        Ok(commit.id())
    }

    fn dereferenced_tags(&self) -> Result<Vec<Tag<Oid>>> {
        let names = self
            .repo
            .tag_names(None)
            .map_err(|e| GitLatestError::tags(e.message().to_string()))?;

        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .map_err(|e| {
                    GitLatestError::tags(format!("Cannot resolve tag '{}': {}", name, e.message()))
                })?;

            // Lightweight tags have no tag object to dereference; only
            // annotated tags participate, mirroring `show-ref --dereference`
            let tag_obj = match reference.peel_to_tag() {
                Ok(tag_obj) => tag_obj,
                Err(_) => continue,
            };

            tags.push(Tag {
                name: name.to_string(),
                target: tag_obj.target_id(),
            });
        }

        Ok(tags)
    }

    fn is_ancestor(&self, commit: &Oid, head: &Oid) -> Result<bool> {
        // graph_descendant_of is strict; a tag on HEAD itself still counts
        if commit == head {
            return Ok(true);
        }

        // the tag target must be a commit to take part in ancestry
        self.repo
            .find_commit(*commit)
            .map_err(|e| GitLatestError::ancestry(e.message().to_string()))?;

        self.repo
            .graph_descendant_of(*head, *commit)
            .map_err(|e| GitLatestError::ancestry(e.message().to_string()))
    }
}

//! Repository tag-source abstraction layer
//!
//! This module provides a trait-based abstraction over the three repository
//! primitives that latest-tag resolution needs: resolving HEAD, enumerating
//! dereferenced tags, and checking commit ancestry.
//!
//! The concrete implementations include:
//!
//! - [cli::GitCliSource]: invokes the `git` executable as a subprocess
//! - [libgit2::Git2Source]: uses the `git2` crate in-process
//! - [mock::MockSource]: an in-memory implementation for testing
//!
//! The reduction algorithm in [crate::resolver] is written once against the
//! [TagSource] trait, so both backends share it and stay observationally
//! equivalent.

pub mod cli;
pub mod libgit2;
pub mod mock;

pub use cli::GitCliSource;
pub use libgit2::Git2Source;
pub use mock::MockSource;

use crate::error::Result;

/// A tag together with the commit it dereferences to.
///
/// For annotated tags the target is the commit the tag object ultimately
/// points at, not the tag object itself, so ancestry checks run against the
/// commit graph. Constructed per invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<Id> {
    /// Short tag name with the `refs/tags/` prefix stripped
    pub name: String,
    /// Commit the tag dereferences to
    pub target: Id,
}

/// Repository primitives required for latest-tag resolution.
///
/// The commit identifier is an associated type because the backends use
/// different representations (hex strings from git output, `git2::Oid`
/// in-process); the resolver only needs equality on it.
///
/// ## Error handling
///
/// `resolve_head` and `dereferenced_tags` failures are fatal to the
/// resolution. An `is_ancestor` failure only removes that tag from
/// consideration; the resolver treats it as a per-tag skip.
pub trait TagSource {
    type Id: PartialEq;

    /// Resolve HEAD of the repository to a commit identifier
    fn resolve_head(&self) -> Result<Self::Id>;

    /// Enumerate all tags dereferenced to the commits they point at
    fn dereferenced_tags(&self) -> Result<Vec<Tag<Self::Id>>>;

    /// Check whether `commit` is an ancestor of `head`.
    ///
    /// A commit counts as an ancestor of itself, matching
    /// `git merge-base --is-ancestor`.
    fn is_ancestor(&self, commit: &Self::Id, head: &Self::Id) -> Result<bool>;
}

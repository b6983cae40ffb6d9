use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use regex::Regex;

use crate::error::{GitLatestError, Result};
use crate::source::Tag;

/// Tag source backed by the `git` executable.
///
/// Every repository query spawns a subprocess with the repository directory
/// as its working directory; exit code and combined output are the only
/// contract surface consumed. Nothing is written to the repository.
pub struct GitCliSource {
    git: PathBuf,
    workdir: PathBuf,
}

impl GitCliSource {
    /// Locate the `git` executable on the search path and bind the source to
    /// a repository directory.
    ///
    /// # Returns
    /// * `Ok(GitCliSource)` - git was found on PATH
    /// * `Err(ToolNotFound)` - no usable git executable
    pub fn locate<P: AsRef<Path>>(path: P) -> Result<Self> {
        let git = which::which("git").map_err(|e| GitLatestError::ToolNotFound(e.to_string()))?;

        Ok(GitCliSource {
            git,
            workdir: path.as_ref().to_path_buf(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        let output = Command::new(&self.git)
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        Ok(output)
    }

    /// Combined stdout + stderr, the diagnostic surface git exposes
    fn combined(stdout: &[u8], stderr: &[u8]) -> String {
        let mut text = String::from_utf8_lossy(stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(stderr));
        text.trim().to_string()
    }
}

impl super::TagSource for GitCliSource {
    type Id = String;

    fn resolve_head(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "HEAD"])?;

        if !output.status.success() {
            return Err(GitLatestError::head(Self::combined(
                &output.stdout,
                &output.stderr,
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn dereferenced_tags(&self) -> Result<Vec<Tag<String>>> {
        let output = self.run(&["show-ref", "--tags", "--dereference"])?;

        if !output.status.success() {
            // show-ref exits 1 with no output when the repository has no
            // tag refs at all; that is an empty enumeration, not a failure
            let diagnostic = Self::combined(&output.stdout, &output.stderr);
            if diagnostic.is_empty() {
                return Ok(Vec::new());
            }
            return Err(GitLatestError::tags(diagnostic));
        }

        // Only `<oid> refs/tags/<name>^{}` lines carry a tag fully resolved
        // to the commit it points at; everything else is ignored
        let deref_line = Regex::new(r"^([0-9a-f]+) refs/tags/(.+)\^\{\}$")
            .map_err(|e| GitLatestError::tags(format!("Invalid ref pattern: {}", e)))?;

        let text = String::from_utf8_lossy(&output.stdout);
        let mut tags = Vec::new();

        for line in text.lines() {
            if let Some(caps) = deref_line.captures(line) {
                tags.push(Tag {
                    name: caps[2].to_string(),
                    target: caps[1].to_string(),
                });
            }
        }

        Ok(tags)
    }

    fn is_ancestor(&self, commit: &String, head: &String) -> Result<bool> {
        let output = self.run(&["merge-base", "--is-ancestor", commit, head])?;

        if output.status.success() {
            return Ok(true);
        }

        // exit 1 means "not an ancestor"; anything else is a real failure
        // (e.g. the id does not name a commit)
        match output.status.code() {
            Some(1) => Ok(false),
            _ => Err(GitLatestError::ancestry(Self::combined(
                &output.stdout,
                &output.stderr,
            ))),
        }
    }
}

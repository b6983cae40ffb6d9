use std::fmt;

/// Reasons a tag was dropped from consideration during resolution.
/// These are non-fatal and are only surfaced through the optional
/// diagnostic sink; they never abort the resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum TagSkip {
    /// Tag name does not parse as a semantic version
    NotSemver { tag: String },
    /// Tag target is not an ancestor of HEAD
    NotAncestor { tag: String },
    /// Ancestry could not be determined (e.g. tag points at a non-commit object)
    AncestryUnknown { tag: String, detail: String },
}

impl TagSkip {
    /// Name of the tag this skip refers to
    pub fn tag(&self) -> &str {
        match self {
            TagSkip::NotSemver { tag }
            | TagSkip::NotAncestor { tag }
            | TagSkip::AncestryUnknown { tag, .. } => tag,
        }
    }
}

impl fmt::Display for TagSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSkip::NotSemver { tag } => {
                write!(f, "Tag '{}' is not a semantic version", tag)
            }
            TagSkip::NotAncestor { tag } => {
                write!(f, "Tag '{}' is not an ancestor of HEAD", tag)
            }
            TagSkip::AncestryUnknown { tag, detail } => {
                write!(f, "Cannot check ancestry of tag '{}': {}", tag, detail)
            }
        }
    }
}

//! Origin classification of template records
//!
//! The upstream collection keeps canonical templates at the top level, with
//! two reserved directories for everything else: `/community/` for
//! community-maintained templates and `/Global/` for editor and OS templates.
//! Classification is a pure function of a record's path and name; it never
//! fails and falls back to the root category when no prefix matches.

use crate::record::{TemplateRecord, COMMUNITY_DIR_PREFIX, GLOBAL_DIR_PREFIX};

/// Label suffix for community templates
pub const COMMUNITY_SUFFIX: &str = " (community)";

/// Label suffix for global templates
pub const GLOBAL_SUFFIX: &str = " (global)";

/// Derived category flags and the user-facing label of a record.
///
/// The two flags are independent; neither takes precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_community: bool,
    pub is_global: bool,
    pub label: String,
}

impl Classification {
    /// True when neither reserved prefix matched.
    pub fn is_root(&self) -> bool {
        !self.is_community && !self.is_global
    }
}

/// Whether `path` lies under the community directory.
pub fn is_community(path: &str) -> bool {
    path.starts_with(COMMUNITY_DIR_PREFIX)
}

/// Whether `path` lies under the global directory.
pub fn is_global(path: &str) -> bool {
    path.starts_with(GLOBAL_DIR_PREFIX)
}

/// Classify a record by its path.
pub fn classify(record: &TemplateRecord) -> Classification {
    let is_community = is_community(&record.path);
    let is_global = is_global(&record.path);

    let mut label = record.name.clone();
    if is_community {
        label.push_str(COMMUNITY_SUFFIX);
    }
    if is_global {
        label.push_str(GLOBAL_SUFFIX);
    }

    Classification {
        is_community,
        is_global,
        label,
    }
}

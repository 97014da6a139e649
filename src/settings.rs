//! The settings record a front end hands to the pipeline

use std::path::PathBuf;

use crate::defaults::DEFAULT_OUTPUT_FILENAME;
use crate::selection::{CategoryFilter, SelectionPolicy};
use crate::writer::WriteMode;

/// Choices gathered from flags or prompts.
///
/// The pipeline treats these as plain data: the two `include_*` flags decide
/// which candidates are offered, `templates` lists the chosen labels in render
/// order, and `append` decides how the destination is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub include_community: bool,
    pub include_global: bool,
    pub templates: Vec<String>,
    pub destination: PathBuf,
    pub append: bool,
    /// Fail instead of skipping labels that match no candidate
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_community: false,
            include_global: false,
            templates: Vec::new(),
            destination: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            append: false,
            strict: false,
        }
    }
}

impl Settings {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.include_community, self.include_global)
    }

    pub fn policy(&self) -> SelectionPolicy {
        if self.strict {
            SelectionPolicy::Strict
        } else {
            SelectionPolicy::SkipUnmatched
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        }
    }
}

//! Candidate filtering and label selection
//!
//! After discovery, every record is classified once and held in a
//! [`Catalog`]. The catalog offers the labels of the records a caller wants to
//! see (community and global templates are opt-in), and resolves the labels
//! the caller picked back to records.
//!
//! ## Matching rules
//!
//! - Requested labels are resolved in the order they were requested.
//! - A label resolves to the *first* offered candidate carrying it. Names are
//!   not unique upstream, so two records may share a label; only the first is
//!   reachable.
//! - A label requested twice is resolved twice, and the record is included
//!   twice. Rendering does not deduplicate.
//! - A label that matches nothing is skipped with a warning, or rejected with
//!   [`Error::SelectionLabelMismatch`] under [`SelectionPolicy::Strict`].
//!
//! The labels themselves come from a [`Selector`]: an interactive prompt in
//! the CLI, or a [`FixedSelector`] holding labels given up front.

use std::collections::HashMap;

use log::warn;

use crate::classify::{classify, Classification};
use crate::error::{Error, Result};
use crate::record::TemplateRecord;

/// Which origin categories are offered for selection.
///
/// Root templates are always offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub include_community: bool,
    pub include_global: bool,
}

impl CategoryFilter {
    pub fn new(include_community: bool, include_global: bool) -> Self {
        Self {
            include_community,
            include_global,
        }
    }

    /// Offer every category
    pub fn all() -> Self {
        Self::new(true, true)
    }

    /// Whether a record with this classification is offered
    pub fn allows(&self, classification: &Classification) -> bool {
        if classification.is_community && !self.include_community {
            return false;
        }
        if classification.is_global && !self.include_global {
            return false;
        }
        true
    }
}

/// What to do with requested labels that match no candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Skip them and log a warning
    #[default]
    SkipUnmatched,
    /// Fail the selection
    Strict,
}

/// A record offered for selection, with its classification
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub record: &'a TemplateRecord,
    pub classification: &'a Classification,
}

impl Candidate<'_> {
    pub fn label(&self) -> &str {
        &self.classification.label
    }
}

/// The records resolved from a list of requested labels
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    /// Selected records in request order
    pub records: Vec<&'a TemplateRecord>,
    /// Requested labels that matched no candidate, in request order
    pub unmatched: Vec<String>,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Discovered records, each classified once
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<TemplateRecord>,
    classifications: Vec<Classification>,
}

impl Catalog {
    /// Build a catalog, keeping discovery order
    pub fn new(records: Vec<TemplateRecord>) -> Self {
        let classifications = records.iter().map(classify).collect();
        Self {
            records,
            classifications,
        }
    }

    /// All records, regardless of category
    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records offered under `filter`, in discovery order
    pub fn candidates(&self, filter: CategoryFilter) -> Vec<Candidate<'_>> {
        self.records
            .iter()
            .zip(&self.classifications)
            .filter(|(_, classification)| filter.allows(classification))
            .map(|(record, classification)| Candidate {
                record,
                classification,
            })
            .collect()
    }

    /// Labels offered under `filter`, in discovery order
    pub fn labels(&self, filter: CategoryFilter) -> Vec<String> {
        self.candidates(filter)
            .iter()
            .map(|c| c.label().to_string())
            .collect()
    }

    /// Resolve `requested` labels against the candidates offered under `filter`.
    pub fn select<S: AsRef<str>>(
        &self,
        filter: CategoryFilter,
        requested: &[S],
        policy: SelectionPolicy,
    ) -> Result<Selection<'_>> {
        let mut by_label: HashMap<&str, &TemplateRecord> = HashMap::new();
        for candidate in self.candidates(filter) {
            by_label
                .entry(candidate.classification.label.as_str())
                .or_insert(candidate.record);
        }

        let mut selection = Selection::default();
        for label in requested {
            let label = label.as_ref();
            match by_label.get(label).copied() {
                Some(record) => selection.records.push(record),
                None => selection.unmatched.push(label.to_string()),
            }
        }

        if !selection.unmatched.is_empty() {
            if policy == SelectionPolicy::Strict {
                return Err(Error::SelectionLabelMismatch {
                    labels: selection.unmatched,
                });
            }
            for label in &selection.unmatched {
                warn!("No template matches '{}', skipping", label);
            }
        }

        Ok(selection)
    }
}

/// Chooses labels from the offered list.
pub trait Selector {
    /// Return the chosen labels, in the order they should be rendered.
    fn choose(&self, offered: &[String]) -> Result<Vec<String>>;
}

/// A selector whose answer was fixed in advance, e.g. by `--templates`.
///
/// The labels are returned as given, even if some are not offered; matching
/// happens in [`Catalog::select`].
#[derive(Debug, Clone, Default)]
pub struct FixedSelector {
    labels: Vec<String>,
}

impl FixedSelector {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl Selector for FixedSelector {
    fn choose(&self, _offered: &[String]) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }
}

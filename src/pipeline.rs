//! Orchestration of a generation run
//!
//! A run moves through the stages in a fixed order:
//!
//! 1. **Discovery**: walk the snapshot and collect template records.
//! 2. **Classification**: label every record once ([`Catalog`]).
//! 3. **Selection**: resolve the requested labels against the offered
//!    candidates.
//! 4. **Rendering**: assemble the selected records into one document.
//! 5. **Writing**: append to or replace the destination.
//!
//! Front ends that need to ask the user between stages 2 and 3 call
//! [`load_catalog`] and [`generate`] separately; [`execute`] runs everything
//! for a settings record that is already complete.

use std::path::PathBuf;

use log::{debug, log_enabled, Level};

use crate::discovery::discover;
use crate::error::Result;
use crate::record::TemplateRecord;
use crate::render::Renderer;
use crate::selection::Catalog;
use crate::settings::Settings;
use crate::snapshot::{Snapshot, ROOT};
use crate::writer;

/// The result of rendering a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub rendered: String,
    /// Selected records, in render order
    pub selected: Vec<TemplateRecord>,
    /// Requested labels that were skipped
    pub unmatched: Vec<String>,
}

/// Discover and classify every template in `snapshot`.
pub fn load_catalog<S>(snapshot: &S) -> Result<Catalog>
where
    S: Snapshot + ?Sized,
{
    Ok(Catalog::new(discover(snapshot, ROOT)?))
}

/// Select and render the templates named in `settings`.
pub fn generate(catalog: &Catalog, settings: &Settings, renderer: &Renderer) -> Result<Generated> {
    let selection = catalog.select(settings.filter(), &settings.templates, settings.policy())?;
    if log_enabled!(Level::Debug) {
        debug!(
            "Selected templates: {}",
            serde_json::to_string_pretty(&selection.records)?
        );
    }

    let rendered = renderer.render(selection.records.iter().copied())?;
    Ok(Generated {
        rendered,
        selected: selection.records.into_iter().cloned().collect(),
        unmatched: selection.unmatched,
    })
}

/// Run a whole generation and write the result.
///
/// The destination is resolved before any other work and written last, so
/// any failure leaves existing content untouched. Returns the resolved
/// destination with the rendered output.
pub fn execute<S>(
    snapshot: &S,
    settings: &Settings,
    renderer: &Renderer,
) -> Result<(PathBuf, Generated)>
where
    S: Snapshot + ?Sized,
{
    let destination = writer::resolve_destination(&settings.destination)?;
    let catalog = load_catalog(snapshot)?;
    let generated = generate(&catalog, settings, renderer)?;
    writer::write(&destination, &generated.rendered, settings.write_mode())?;
    Ok((destination, generated))
}

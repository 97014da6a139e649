//! Rendering selected templates into one `.gitignore` document
//!
//! Output is produced from a fixed minijinja template: a two-line header
//! naming the tool and the upstream collection, then one block per record in
//! the order given:
//!
//! ```text
//! # gitignore generated by mkignore
//! # using templates from: https://github.com/github/gitignore
//!
//!
//! # Template: Node
//! node_modules/
//!
//!
//! ```
//!
//! Records are inserted verbatim, without escaping, reordering or
//! deduplication. Rendering holds no state between calls, so the same ordered
//! input always yields byte-identical output.

use minijinja::{context, Environment};

use crate::defaults::{DEFAULT_SOURCE_URL, TOOL_NAME};
use crate::error::{Error, Result};
use crate::record::TemplateRecord;

const TEMPLATE_NAME: &str = "gitignore";

const IGNORE_TEMPLATE: &str = "# gitignore generated by {{ tool }}
# using templates from: {{ source }}

{% for record in records %}
# Template: {{ record.name }}
{{ record.content }}

{% endfor %}";

/// Renders record selections with the built-in template
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    source_url: String,
}

impl Renderer {
    /// Create a renderer crediting the default upstream collection.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateDefinition` if the built-in template does not
    /// parse. This cannot happen in a correct build.
    pub fn new() -> Result<Self> {
        Self::with_source_url(DEFAULT_SOURCE_URL)
    }

    /// Create a renderer crediting `source_url` in the header.
    pub fn with_source_url(source_url: impl Into<String>) -> Result<Self> {
        Self::with_template(IGNORE_TEMPLATE, source_url.into())
    }

    fn with_template(template: &'static str, source_url: String) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, template)
            .map_err(|e| Error::TemplateDefinition {
                message: e.to_string(),
            })?;
        Ok(Self { env, source_url })
    }

    /// The source URL named in the header
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Render `records` in the given order.
    ///
    /// An empty selection renders the header alone.
    pub fn render<'a, I>(&self, records: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a TemplateRecord>,
    {
        let records: Vec<&TemplateRecord> = records.into_iter().collect();
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| Error::TemplateDefinition {
                message: e.to_string(),
            })?;

        template
            .render(context! {
                tool => TOOL_NAME,
                source => self.source_url,
                records => records,
            })
            .map_err(|e| Error::Render {
                message: e.to_string(),
            })
    }
}

//! Validated module identifiers and their derived naming forms.

use std::{fmt, str::FromStr};

use atlasgen_core::{to_resource_name, to_symbol_name};
use atlasgen_templates::RenderContext;

use crate::error::{Error, Result};

/// Every module identifier must carry this prefix.
pub const MODULE_PREFIX: &str = "feature-";

/// A validated module identifier such as `feature-login`.
///
/// Constructed once per invocation and never mutated. The derived forms
/// are pure functions of the identifier:
///
/// - `slug`: the identifier with the prefix stripped (`login`)
/// - `symbol_name`: capitalized, hyphen-free (`Login`)
/// - `resource_name`: hyphen-to-underscore, for resource names (`login`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdentifier {
    raw: String,
    slug: String,
    symbol: String,
}

impl ModuleIdentifier {
    /// Validate a raw module-name string.
    ///
    /// Fails with [`Error::InvalidIdentifier`] when the `feature-` prefix
    /// is missing or nothing follows it.
    pub fn parse(name: &str) -> Result<Self> {
        let slug = name
            .strip_prefix(MODULE_PREFIX)
            .ok_or_else(|| Error::InvalidIdentifier {
                name: name.to_string(),
            })?;

        if slug.is_empty() {
            return Err(Error::InvalidIdentifier {
                name: name.to_string(),
            });
        }

        Ok(Self {
            raw: name.to_string(),
            symbol: to_symbol_name(slug),
            slug: slug.to_string(),
        })
    }

    /// The full identifier, prefix included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The identifier with the prefix stripped.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The capitalized, hyphen-free name used inside generated sources.
    pub fn symbol_name(&self) -> &str {
        &self.symbol
    }

    /// The underscore form used for Android resource names.
    pub fn resource_name(&self) -> String {
        to_resource_name(&self.slug)
    }

    /// The render context shared by every template of this module.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with("slug", self.slug())
            .with("symbol", self.symbol_name())
            .with("resource", self.resource_name())
    }
}

impl FromStr for ModuleIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

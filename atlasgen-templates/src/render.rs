//! Placeholder substitution over the registered templates.

use thiserror::Error;

use crate::{context::RenderContext, sources};

/// Result type for template rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    #[error("template '{template}' references undefined context key '{key}'")]
    MissingContextKey { template: String, key: String },

    #[error("template '{template}' has an unclosed '{{{{' placeholder")]
    UnclosedPlaceholder { template: String },
}

/// All registered template ids and their sources, in generation order.
const REGISTRY: &[(&str, &str)] = &[
    ("build-gradle", sources::BUILD_GRADLE),
    ("android-manifest", sources::ANDROID_MANIFEST),
    ("proguard-rules", sources::PROGUARD_RULES),
    ("consumer-rules", sources::CONSUMER_RULES),
    ("api-interface", sources::API_INTERFACE),
    ("response-model", sources::RESPONSE_MODEL),
    ("repository", sources::REPOSITORY),
    ("view-model", sources::VIEW_MODEL),
    ("activity", sources::ACTIVITY),
    ("layout", sources::LAYOUT),
    ("strings", sources::STRINGS),
    ("view-model-test", sources::VIEW_MODEL_TEST),
];

/// Look up the raw source of a registered template.
pub fn source(id: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, src)| *src)
}

/// Iterate over all registered template ids.
pub fn template_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

/// Render the template `id` against `ctx`.
///
/// Every `{{key}}` placeholder is replaced with the context value for
/// `key`. Rendering is pure: identical inputs yield byte-identical output.
pub fn render(id: &str, ctx: &RenderContext) -> Result<String> {
    let src = source(id).ok_or_else(|| Error::UnknownTemplate { id: id.to_string() })?;
    substitute(id, src, ctx)
}

fn substitute(id: &str, src: &str, ctx: &RenderContext) -> Result<String> {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let end = after
            .find("}}")
            .ok_or_else(|| Error::UnclosedPlaceholder {
                template: id.to_string(),
            })?;

        let key = &after[..end];
        let value = ctx.get(key).ok_or_else(|| Error::MissingContextKey {
            template: id.to_string(),
            key: key.to_string(),
        })?;

        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

//! Named file templates and the placeholder renderer.
//!
//! Templates are versioned text blueprints with `{{key}}` placeholders.
//! Rendering resolves every placeholder against a [`RenderContext`];
//! an unresolved placeholder or an unregistered template id is a hard
//! error, never a silent blank.

mod context;
mod render;
mod sources;

pub use context::RenderContext;
pub use render::{Error, Result, render, source, template_ids};

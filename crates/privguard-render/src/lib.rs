//! Rendering utilities for human-readable surfaces (Markdown, console).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableObservation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};

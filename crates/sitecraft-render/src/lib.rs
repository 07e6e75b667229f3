//! Section renderer registry for sitecraft.
//!
//! One pure renderer per section kind: `(content) -> HTML fragment`. The
//! renderers are total, never panic, and resolve every missing field to a
//! documented fallback. All interpolation goes through the context-keyed
//! escapers in [`escape`].

pub mod escape;
pub mod registry;
pub mod sections;

pub use registry::{RenderCtx, RenderFn, RendererRegistry};

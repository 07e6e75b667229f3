//! Static site compiler for sitecraft.
//!
//! Composes styles, assembles complete HTML documents from templates or
//! free-form sites, packages the result into a downloadable archive, and
//! publishes generated sites to a server-side directory tree.

pub mod assemble;
pub mod package;
pub mod publish;
pub mod styles;

pub use assemble::{Assembler, AssembleError};
pub use package::{package_archive, site_name, Asset, AssetKind, PackageError, PackageReport};
pub use publish::{GeneratedSite, PublishConfig, PublishError, SitePublisher};
pub use styles::{ComposeOptions, StyleComposer};

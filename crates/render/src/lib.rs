//! Self-contained HTML viewers for lecture catalogs.
//!
//! A [`Generator`] turns a [`Catalog`](lectern_catalog::Catalog) into a single
//! [`Document`]: markup, styles, the client runtime and the catalog data all
//! live in one file, which needs no network to show its navigator.
//!
//! ```no_run
//! # fn main() -> lectern_render::error::Result<()> {
//! use lectern_catalog::{Catalog, SourceRewriter};
//! use lectern_render::{Generator, Requester, Variant};
//!
//! let listing = lectern_parse::parse_listing("(Physics)Lect-1 Mechanics:https://a.example/m.mp4");
//! let catalog = Catalog::from_listing(listing, &SourceRewriter::default());
//! let generator = Generator::from_config(&Default::default())?;
//! let variant = Variant::Protected(Requester::new("Asha", "42"));
//! generator.generate(&catalog, &variant)?.persist("physics.html")?;
//! # Ok(())
//! # }
//! ```

mod assets;
mod document;
mod embed;
pub mod error;
pub mod guard;
mod output;
#[cfg(test)]
mod page;
pub mod session;

pub use crate::document::{Document, Generator, Variant};
pub use crate::guard::{KeyGuard, Requester, Watermark};
pub use crate::session::BootPlan;

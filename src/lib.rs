//! Scaled sewing-pattern generation.
//!
//! cupro turns one reference cup outline (a closed curve of anchor points
//! with optional Bezier control handles) into a family of SVG pattern
//! drawings, one per garment size, plus a static catalog page listing every
//! size with its measurement range.
//!
//! The pipeline, per size:
//!
//! ```text
//! measurement table -> scale factor -> scaled outline
//!                   -> draw commands -> SVG document -> atomic write
//! ```
//!
//! The [`sizes`] table derives each size's scale factor from a linear
//! reference-length formula; [`outline`] holds the immutable reference
//! geometry and its pure scaling transform; [`path`] walks the anchor cycle
//! into draw commands; [`render`] wraps them into a sized, centred SVG
//! document; and [`site`] persists one artifact per size plus the catalog
//! page.
//!
//! ```no_run
//! use cupro::outline::PatternOutline;
//! use cupro::sizes::MeasurementTable;
//!
//! # fn main() -> miette::Result<()> {
//! let table = MeasurementTable::builtin();
//! let outline = PatternOutline::reference_cup();
//! let summary = cupro::site::generate(&table, &outline, "_site".as_ref())?;
//! println!("wrote {} patterns", summary.artifacts);
//! # Ok(())
//! # }
//! ```

pub mod defaults;
pub mod errors;
pub mod log;
pub mod outline;
pub mod path;
pub mod render;
pub mod site;
pub mod sizes;
pub mod types;

pub use errors::{EmitError, GeometryError, TableError};
pub use outline::{AnchorPoint, PatternOutline};
pub use path::{PathCommand, trace_outline};
pub use sizes::{MeasurementTable, SizeRecord};
pub use types::ScaleFactor;

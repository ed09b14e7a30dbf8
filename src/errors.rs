//! Error types with rich diagnostics using miette.
//!
//! Every failure in the pipeline is deterministic (bad configuration, bad
//! data, or an I/O fault), so none of these are retried; the orchestration
//! layer attaches the size number and stage before surfacing them.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors validating a measurement table.
#[derive(Error, Diagnostic, Debug)]
pub enum TableError {
    #[error("measurement table has no size records")]
    #[diagnostic(code(cupro::table::empty))]
    Empty,

    #[error("reference size index {index} out of range for {count} sizes")]
    #[diagnostic(
        code(cupro::table::reference_out_of_range),
        help("the designated reference size must be one of the table's records")
    )]
    ReferenceOutOfRange { index: usize, count: usize },

    #[error("size numbers must be strictly increasing: {current} follows {previous}")]
    #[diagnostic(code(cupro::table::unordered_sizes))]
    UnorderedSizes { previous: u32, current: u32 },

    #[error("size numbers start at 1")]
    #[diagnostic(code(cupro::table::zero_size_number))]
    ZeroSizeNumber,

    #[error("length base and step must be positive, got base {base} and step {step}")]
    #[diagnostic(
        code(cupro::table::non_positive_length),
        help("every size's reference length derives from base + (size - 1) * step")
    )]
    NonPositiveLength { base: f64, step: f64 },
}

/// Errors from outline scaling and path construction.
#[derive(Error, Diagnostic, Debug)]
pub enum GeometryError {
    #[error("invalid scale factor: {value}")]
    #[diagnostic(code(cupro::geometry::invalid_scale))]
    InvalidScale { value: f64 },

    #[error("outline has {count} anchor points, a closed boundary needs at least 3")]
    #[diagnostic(code(cupro::geometry::degenerate_outline))]
    DegenerateOutline { count: usize },
}

/// Errors producing output artifacts.
#[derive(Error, Diagnostic, Debug)]
pub enum EmitError {
    #[error("failed to create output directory {}", .path.display())]
    #[diagnostic(code(cupro::emit::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(cupro::emit::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render the catalog template")]
    #[diagnostic(code(cupro::emit::template))]
    Template(#[from] minijinja::Error),
}

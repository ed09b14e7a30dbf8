//! Output-side glue: directory layout, atomic artifact writes, and the
//! rendered catalog page.
//!
//! Each size's pipeline (scale, trace, render, write) is independent; a
//! failure aborts the run with the size number attached, and artifacts
//! already written stay valid because every write is atomic.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use miette::{Report, WrapErr};
use minijinja::{Environment, context};
use tempfile::NamedTempFile;

use crate::defaults;
use crate::errors::EmitError;
use crate::log;
use crate::outline::PatternOutline;
use crate::path::trace_outline;
use crate::render::pattern_document;
use crate::sizes::MeasurementTable;

/// Embedded catalog page template.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// What a completed run produced.
#[derive(Debug)]
pub struct Summary {
    /// Number of per-size pattern drawings written.
    pub artifacts: usize,
    /// Path of the rendered catalog page.
    pub index: PathBuf,
}

/// File name for one size's artifact, keyed by its size number.
pub fn artifact_name(size_no: u32) -> String {
    format!("{}_{}.svg", defaults::ARTIFACT_STEM, size_no)
}

/// Write contents fully or not at all: a temp file in the target's
/// directory, flushed, then renamed into place.
fn write_atomic(path: &Path, contents: &str) -> Result<(), EmitError> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let failed = |source: std::io::Error| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut staged = NamedTempFile::new_in(parent).map_err(failed)?;
    staged.write_all(contents.as_bytes()).map_err(failed)?;
    staged.persist(path).map_err(|e| failed(e.error))?;
    Ok(())
}

/// Run the full pipeline: one scaled SVG pattern per size in table order,
/// then the catalog page listing every size.
pub fn generate(
    table: &MeasurementTable,
    outline: &PatternOutline,
    out_dir: &Path,
) -> Result<Summary, Report> {
    let assets = out_dir.join(defaults::ASSETS_DIR);
    fs::create_dir_all(&assets).map_err(|source| EmitError::CreateDir {
        path: assets.clone(),
        source,
    })?;

    for size in table.sizes() {
        let factor = table.scale_factor(size);
        let scaled = outline.scaled(factor);
        let commands = trace_outline(&scaled)
            .wrap_err_with(|| format!("building the path for size {}", size.size_no))?;
        let document = pattern_document(
            &commands,
            defaults::BASE_WIDTH_MM * factor.raw(),
            defaults::BASE_HEIGHT_MM * factor.raw(),
        );

        let artifact = assets.join(artifact_name(size.size_no));
        write_atomic(&artifact, &document)
            .wrap_err_with(|| format!("writing the pattern for size {}", size.size_no))?;
        log::debug!(
            size = size.size_no,
            factor = factor.raw(),
            path = %artifact.display(),
            "wrote pattern"
        );
    }

    let index = out_dir.join("index.html");
    let html = render_index(table).wrap_err("rendering the catalog page")?;
    write_atomic(&index, &html).wrap_err("writing the catalog page")?;

    Ok(Summary {
        artifacts: table.sizes().len(),
        index,
    })
}

/// Render the catalog page for the table's sizes. The page consumes size
/// metadata only, never the geometry.
fn render_index(table: &MeasurementTable) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.add_template("index", INDEX_TEMPLATE)?;
    let html = env
        .get_template("index")?
        .render(context! { sizes => table.sizes() })?;
    Ok(html)
}

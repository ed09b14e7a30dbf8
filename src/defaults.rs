//! Compiled-in defaults for the generated site.

/// Canvas width for the reference size, A4 in millimetres.
pub const BASE_WIDTH_MM: f64 = 210.0;

/// Canvas height for the reference size, A4 in millimetres.
pub const BASE_HEIGHT_MM: f64 = 297.0;

/// Stroke colour for pattern outlines.
pub const STROKE: &str = "black";

/// Output directory when the binary is run without arguments.
pub const OUTPUT_DIR: &str = "_site";

/// Subdirectory of the output root holding the per-size SVG artifacts.
pub const ASSETS_DIR: &str = "assets";

/// File-name stem for per-size artifacts (`cup_size_<N>.svg`).
pub const ARTIFACT_STEM: &str = "cup_size";

//! SVG document assembly.
//!
//! Pure functions from draw commands to a serialized document; persistence
//! lives in the site module. Dimensions are millimetres and the viewBox
//! uses the same numeric units, so one user unit is one millimetre.

use std::fmt::Write as _;

use svg::Document;
use svg::node::element::{Group, Path};

use crate::defaults;
use crate::path::PathCommand;

/// Serialize draw commands into SVG path data.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => {
                let _ = write!(data, "M {},{}", fmt_num(p.x), fmt_num(p.y));
            }
            PathCommand::LineTo(p) => {
                let _ = write!(data, "L {},{}", fmt_num(p.x), fmt_num(p.y));
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    data,
                    "C {},{} {},{} {},{}",
                    fmt_num(ctrl1.x),
                    fmt_num(ctrl1.y),
                    fmt_num(ctrl2.x),
                    fmt_num(ctrl2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                );
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

/// Wrap draw commands into a sized, centred pattern document.
///
/// The outline is defined around a (0,0)-centred origin, so the path sits
/// in a group translated to the canvas centre rather than the top-left
/// corner. The path is drawn unfilled with a visible stroke.
pub fn pattern_document(commands: &[PathCommand], width: f64, height: f64) -> String {
    let path = Path::new()
        .set("d", path_data(commands))
        .set("fill", "none")
        .set("stroke", defaults::STROKE);

    let centred = Group::new()
        .set(
            "transform",
            format!(
                "translate({},{})",
                fmt_num(width / 2.0),
                fmt_num(height / 2.0)
            ),
        )
        .add(path);

    Document::new()
        .set("width", format!("{}mm", fmt_num(width)))
        .set("height", format!("{}mm", fmt_num(height)))
        .set(
            "viewBox",
            format!("0 0 {} {}", fmt_num(width), fmt_num(height)),
        )
        .add(centred)
        .to_string()
}

const SIG_FIGS: i32 = 6;

/// Format a number matching C's %g format (6 significant figures, trailing
/// zeros trimmed), keeping path data and attribute values compact.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

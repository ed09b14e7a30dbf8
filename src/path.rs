//! Path construction for closed outlines.
//!
//! Walks the anchor cycle and emits one draw command per consecutive pair,
//! choosing curve or line per segment from handle availability.
//!
//! # Segment rule
//!
//! A segment `(current, next)` becomes a cubic Bezier only when BOTH of the
//! relevant handles are present: `current.handle_out` (steering the curve as
//! it leaves `current`) and `next.handle_in` (steering it into `next`). A
//! single missing handle degrades that entire segment to a straight line;
//! there is no partial interpolation.
//!
//! The wrap-around pair `(last, first)` is a segment like any other, and a
//! closing command is appended after it even though that segment already
//! lands on the start anchor.

use glam::DVec2;

use crate::errors::GeometryError;
use crate::outline::PatternOutline;

/// A single draw instruction, in outline traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Pen-up move to the outline's first anchor; always the opening command.
    MoveTo(DVec2),
    /// Straight segment to the next anchor.
    LineTo(DVec2),
    /// Cubic Bezier segment to the next anchor. The segment's start point is
    /// implicit: wherever the previous command ended.
    CurveTo {
        ctrl1: DVec2,
        ctrl2: DVec2,
        to: DVec2,
    },
    /// Close the boundary back to the start anchor.
    Close,
}

/// Trace a closed outline into draw commands.
///
/// Fails with [`GeometryError::DegenerateOutline`] when the outline has
/// fewer than three anchors; two points cannot close a shape and are a
/// caller error, not a malformed drawing.
pub fn trace_outline(outline: &PatternOutline) -> Result<Vec<PathCommand>, GeometryError> {
    let points = outline.points();
    if points.len() < 3 {
        return Err(GeometryError::DegenerateOutline {
            count: points.len(),
        });
    }

    let mut commands = Vec::with_capacity(points.len() + 2);
    commands.push(PathCommand::MoveTo(points[0].origin));

    for (index, current) in points.iter().enumerate() {
        let next = &points[(index + 1) % points.len()];
        match (current.handle_out, next.handle_in) {
            (Some(ctrl1), Some(ctrl2)) => commands.push(PathCommand::CurveTo {
                ctrl1,
                ctrl2,
                to: next.origin,
            }),
            _ => commands.push(PathCommand::LineTo(next.origin)),
        }
    }

    commands.push(PathCommand::Close);
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::AnchorPoint;
    use glam::dvec2;

    fn corners(count: usize) -> Vec<DVec2> {
        (0..count)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / count as f64;
                dvec2(angle.cos() * 10.0, angle.sin() * 10.0)
            })
            .collect()
    }

    fn outline_with_all_handles(count: usize) -> PatternOutline {
        PatternOutline::new(
            corners(count)
                .into_iter()
                .map(|origin| {
                    AnchorPoint::with_handles(
                        origin,
                        Some(origin + dvec2(-1.0, 0.0)),
                        Some(origin + dvec2(1.0, 0.0)),
                    )
                })
                .collect(),
        )
    }

    fn outline_without_handles(count: usize) -> PatternOutline {
        PatternOutline::new(corners(count).into_iter().map(AnchorPoint::new).collect())
    }

    #[test]
    fn opens_with_a_move_to_the_first_anchor() {
        let outline = outline_without_handles(3);
        let first = outline.points()[0].origin;
        let commands = trace_outline(&outline).unwrap();
        assert_eq!(commands[0], PathCommand::MoveTo(first));
    }

    #[test]
    fn fully_handled_outline_is_all_curves() {
        let commands = trace_outline(&outline_with_all_handles(5)).unwrap();
        let curves = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count();
        assert_eq!(curves, 5);
        assert_eq!(lines, 0);
        assert_eq!(commands.len(), 7); // move + 5 curves + close
        assert_eq!(*commands.last().unwrap(), PathCommand::Close);
    }

    #[test]
    fn handleless_outline_is_all_lines() {
        let commands = trace_outline(&outline_without_handles(4)).unwrap();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count();
        assert_eq!(lines, 4);
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, PathCommand::CurveTo { .. }))
        );
        assert_eq!(commands.len(), 6); // move + 4 lines + close
    }

    #[test]
    fn one_missing_handle_degrades_only_its_segment() {
        // Drop the outgoing handle on anchor 1: segment 1->2 must become a
        // line while every other segment stays a curve.
        let mut points: Vec<_> = outline_with_all_handles(4).points().to_vec();
        points[1].handle_out = None;
        let commands = trace_outline(&PatternOutline::new(points)).unwrap();

        assert!(matches!(commands[1], PathCommand::CurveTo { .. }));
        assert!(matches!(commands[2], PathCommand::LineTo(_)));
        assert!(matches!(commands[3], PathCommand::CurveTo { .. }));
        assert!(matches!(commands[4], PathCommand::CurveTo { .. }));
    }

    #[test]
    fn wraparound_segment_connects_last_to_first() {
        let outline = outline_with_all_handles(3);
        let commands = trace_outline(&outline).unwrap();
        // Second-to-last command is the (last, first) segment.
        match commands[commands.len() - 2] {
            PathCommand::CurveTo { to, .. } => assert_eq!(to, outline.points()[0].origin),
            ref other => panic!("expected wrap-around curve, got {:?}", other),
        }
    }

    #[test]
    fn curve_uses_outgoing_then_incoming_handle() {
        let outline = outline_with_all_handles(3);
        let points = outline.points().to_vec();
        let commands = trace_outline(&outline).unwrap();
        match commands[1] {
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                assert_eq!(ctrl1, points[0].handle_out.unwrap());
                assert_eq!(ctrl2, points[1].handle_in.unwrap());
                assert_eq!(to, points[1].origin);
            }
            ref other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn rejects_outlines_too_small_to_close() {
        for count in [0, 1, 2] {
            let result = trace_outline(&outline_without_handles(count));
            assert!(
                matches!(result, Err(GeometryError::DegenerateOutline { count: c }) if c == count),
                "expected degenerate outline error for {} points",
                count
            );
        }
    }

    #[test]
    fn reference_cup_has_six_curves_and_one_line() {
        // The built-in outline's bottom edge misses one handle, so exactly
        // one of its seven segments is straight.
        let commands = trace_outline(&PatternOutline::reference_cup()).unwrap();
        let curves = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count();
        assert_eq!((curves, lines), (6, 1));
    }
}

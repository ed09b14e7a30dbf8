//! The pattern outline: anchor points with optional Bezier handles, and
//! uniform scaling.
//!
//! The outline is shared read-only reference geometry. Scaling produces a
//! fresh outline per size and never mutates the original, so one reference
//! outline can feed every size's pipeline.

use glam::{DVec2, dvec2};

use crate::types::ScaleFactor;

/// A vertex on the closed pattern boundary.
///
/// `handle_out` steers the curve leaving this anchor toward the next one in
/// traversal order; `handle_in` steers the curve arriving from the previous
/// anchor. An anchor with neither handle produces straight segments on both
/// adjacent edges, and each handle only affects its own side's segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub origin: DVec2,
    pub handle_in: Option<DVec2>,
    pub handle_out: Option<DVec2>,
}

impl AnchorPoint {
    /// A handle-less anchor: both adjacent segments stay straight.
    pub fn new(origin: DVec2) -> Self {
        Self {
            origin,
            handle_in: None,
            handle_out: None,
        }
    }

    pub fn with_handles(
        origin: DVec2,
        handle_in: Option<DVec2>,
        handle_out: Option<DVec2>,
    ) -> Self {
        Self {
            origin,
            handle_in,
            handle_out,
        }
    }

    /// Scale every present coordinate componentwise, returning a new anchor.
    /// Absent handles stay absent.
    pub fn scaled(&self, factor: ScaleFactor) -> AnchorPoint {
        AnchorPoint {
            origin: factor * self.origin,
            handle_in: self.handle_in.map(|handle| factor * handle),
            handle_out: self.handle_out.map(|handle| factor * handle),
        }
    }
}

/// An ordered cyclic sequence of anchors tracing a closed boundary.
/// The ordering is semantic: it is the traversal order of the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternOutline {
    points: Vec<AnchorPoint>,
}

impl PatternOutline {
    pub fn new(points: Vec<AnchorPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Uniformly scaled copy; the receiver is untouched.
    pub fn scaled(&self, factor: ScaleFactor) -> PatternOutline {
        PatternOutline {
            points: self.points.iter().map(|point| point.scaled(factor)).collect(),
        }
    }

    /// Validate a raw factor and scale. Table-derived factors are always
    /// valid, so this path exists for callers holding an unchecked `f64`.
    pub fn scaled_by(&self, factor: f64) -> Result<PatternOutline, crate::errors::GeometryError> {
        Ok(self.scaled(ScaleFactor::try_new(factor)?))
    }

    /// The built-in reference cup outline: seven anchors around a
    /// (0,0)-centred origin, in millimetres at the reference size.
    pub fn reference_cup() -> PatternOutline {
        let h = |x: f64, y: f64| Some(dvec2(x, y));
        PatternOutline::new(vec![
            AnchorPoint::with_handles(
                dvec2(0.0, 0.0),
                h(14.0407, 25.0918),
                h(-14.5372, 22.8171),
            ),
            AnchorPoint::with_handles(
                dvec2(-65.0, 57.7614),
                h(-40.1933, 43.6463),
                h(-83.4987, 37.6504),
            ),
            AnchorPoint::with_handles(
                dvec2(-97.7787, -29.8535),
                h(-106.1128, 11.0309),
                h(-96.0463, -38.3517),
            ),
            AnchorPoint::with_handles(
                dvec2(-88.9743, -54.2035),
                h(-92.8233, -46.481),
                h(-67.1478, -60.2205),
            ),
            // The bottom edge is straight on its outgoing side.
            AnchorPoint::with_handles(dvec2(-41.9367, -107.5931), h(-57.6472, -75.3583), None),
            AnchorPoint::with_handles(dvec2(78.7962, -46.7356), None, h(100.4121, -14.4459)),
            AnchorPoint::with_handles(
                dvec2(62.7811, 59.2765),
                h(87.6192, 32.6349),
                h(39.5943, 43.9509),
            ),
        ])
    }
}

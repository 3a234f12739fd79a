// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface projection: one captured surface to placed plan primitives.
//!
//! Capture space is right-handed with Y up. The plan looks down on it: capture
//! X is mirrored into plan X and capture Z becomes plan Y. Every surface is
//! then turned about the plan origin by the negated reference orientation so
//! that the reference wall comes out horizontal.
//!
//! Primitives are produced in the surface's local frame, where the surface
//! runs along the X axis from `A = (-h, 0)` to `B = (h, 0)`.

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Affine, Cap, Join, Point};

use crate::primitive::{DrawPrimitive, StrokeStyle};
use crate::record::{SurfaceCategory, SurfaceRecord, Transform3};
use crate::scene::Placement;
use crate::style::PlanStyle;
use crate::units::FeetInches;

/// A projected surface: its placement plus its local primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedSurface {
    /// Where the surface's local frame sits in the plan.
    pub placement: Placement,
    /// Primitives in the surface's local frame, in emission order.
    pub primitives: Vec<DrawPrimitive>,
}

/// Flatten a capture-space position into the plan, before any orientation
/// correction.
#[inline]
pub fn plan_position(transform: &Transform3, scale: f64) -> Point {
    Point::new(
        -transform.position.x * scale,
        transform.position.z * scale,
    )
}

/// Placement of a surface corrected by the scene's reference orientation.
///
/// The position is turned about the plan origin by `-reference`. The rotation
/// drops the surface's own heading and re-expresses what remains relative to
/// the reference: `-(rz - ry + reference)`.
pub fn surface_placement(transform: &Transform3, reference: f64, scale: f64) -> Placement {
    let position = Affine::rotate(-reference) * plan_position(transform, scale);
    Placement::new(position, -(transform.relative_roll() + reference))
}

/// Half the projected width of a surface.
#[inline]
pub fn half_length(surface: &SurfaceRecord, scale: f64) -> f64 {
    surface.width() * scale / 2.0
}

/// The local end points `A` and `B` of a surface with the given half length.
#[inline]
pub fn anchor_points(half_length: f64) -> (Point, Point) {
    (Point::new(-half_length, 0.0), Point::new(half_length, 0.0))
}

/// Projects surfaces for one scene.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceProjector<'a> {
    style: &'a PlanStyle,
    reference: f64,
}

impl<'a> SurfaceProjector<'a> {
    /// Create a projector for a scene with the given reference orientation.
    pub fn new(style: &'a PlanStyle, reference: f64) -> Self {
        Self { style, reference }
    }

    /// Reference orientation this projector corrects by.
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Project one surface.
    ///
    /// Floors produce no primitives. Unknown surfaces draw as walls.
    pub fn project(&self, surface: &SurfaceRecord) -> ProjectedSurface {
        let placement = surface_placement(&surface.transform, self.reference, self.style.scale);
        let (a, b) = anchor_points(half_length(surface, self.style.scale));

        let mut primitives = Vec::new();
        match surface.category {
            SurfaceCategory::Wall | SurfaceCategory::Unknown => {
                self.wall(surface, a, b, &mut primitives);
            }
            SurfaceCategory::Door => {
                primitives.push(self.erasure(a, b));
                self.door(a, b, &mut primitives);
            }
            SurfaceCategory::Window => {
                primitives.push(self.erasure(a, b));
                primitives.push(DrawPrimitive::LineSegment {
                    from: a,
                    to: b,
                    stroke: stroke(self.style.window_width, Cap::Butt),
                    color: self.style.foreground,
                    z_order: self.style.layers.window,
                });
            }
            SurfaceCategory::Opening => primitives.push(self.erasure(a, b)),
            SurfaceCategory::Floor => {}
        }

        tracing::trace!(
            category = %surface.category,
            x = placement.position.x,
            y = placement.position.y,
            rotation = placement.rotation,
            primitives = primitives.len(),
            "projected surface"
        );

        ProjectedSurface {
            placement,
            primitives,
        }
    }

    fn wall(&self, surface: &SurfaceRecord, a: Point, b: Point, out: &mut Vec<DrawPrimitive>) {
        let style = self.style;
        let offset = style.dimension_offset;

        out.push(DrawPrimitive::LineSegment {
            from: a,
            to: b,
            stroke: stroke(style.wall_width, Cap::Square),
            color: style.foreground,
            z_order: style.layers.wall,
        });
        out.push(DrawPrimitive::Dimension {
            from: Point::new(a.x, -offset),
            to: Point::new(b.x, -offset),
            tick_half_length: style.dimension_tick,
            label_gap: style.dimension_label_gap,
            stroke: stroke(style.dimension_width, Cap::Round),
            color: style.foreground,
            z_order: style.layers.dimension,
        });
        out.push(DrawPrimitive::Label {
            text: FeetInches::from_meters(surface.width()).to_string(),
            position: Point::new(0.0, -offset - style.label_font_size / 2.0),
            font_size: style.label_font_size,
            font_family: style.label_font,
            color: style.foreground,
            z_order: style.layers.dimension,
        });
    }

    fn door(&self, a: Point, b: Point, out: &mut Vec<DrawPrimitive>) {
        let style = self.style;
        let leaf_end = Affine::rotate_about(style.door_swing, a) * b;

        out.push(DrawPrimitive::LineSegment {
            from: a,
            to: leaf_end,
            stroke: stroke(style.wall_width, Cap::Square),
            color: style.foreground,
            z_order: style.layers.door,
        });
        out.push(DrawPrimitive::Arc {
            center: a,
            radius: b.x - a.x,
            start_angle: style.door_swing,
            end_angle: 0.0,
            clockwise: true,
            stroke: stroke(style.door_arc_width, Cap::Butt)
                .with_dashes(style.door_arc_dash_offset, style.door_arc_dashes),
            color: style.foreground,
            z_order: style.layers.door_arc,
        });
    }

    /// Background-coloured stroke hiding the wall under an opening.
    fn erasure(&self, a: Point, b: Point) -> DrawPrimitive {
        DrawPrimitive::LineSegment {
            from: a,
            to: b,
            stroke: stroke(self.style.erase_width, Cap::Butt),
            color: self.style.background,
            z_order: self.style.layers.erasure,
        }
    }
}

/// Project one surface with the given style and reference orientation.
pub fn project_surface(
    surface: &SurfaceRecord,
    reference: f64,
    style: &PlanStyle,
) -> ProjectedSurface {
    SurfaceProjector::new(style, reference).project(surface)
}

fn stroke(width: f64, cap: Cap) -> StrokeStyle {
    StrokeStyle::new(width).with_caps(cap).with_join(Join::Miter)
}

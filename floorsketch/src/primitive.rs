// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic draw primitives.

use alloc::string::String;
use core::f64::consts::TAU;

use kurbo::{Cap, Line, Point, Rect, Shape, Size, Vec2};
use peniko::Color;

/// Stroke style used by stroked primitives.
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps and dashes.
pub type StrokeStyle = kurbo::Stroke;

/// Advance of one label glyph, as a fraction of the font size.
const LABEL_ADVANCE: f64 = 0.6;

/// One drawable element of a plan, in the local frame of its owner.
///
/// All coordinates are Y-up plan units. Every variant carries an explicit
/// z-order; see [`Scene`](crate::Scene) for how paint order is derived.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// A straight stroked segment.
    LineSegment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Width, caps and optional dashes.
        stroke: StrokeStyle,
        /// Stroke colour.
        color: Color,
        /// Paint layer.
        z_order: i32,
    },
    /// A stroked circular arc.
    Arc {
        /// Centre of the circle.
        center: Point,
        /// Radius of the circle.
        radius: f64,
        /// Angle of the first point, radians counter-clockwise from +X.
        start_angle: f64,
        /// Angle of the last point.
        end_angle: f64,
        /// Direction of travel from `start_angle` to `end_angle`.
        clockwise: bool,
        /// Width, caps and optional dashes.
        stroke: StrokeStyle,
        /// Stroke colour.
        color: Color,
        /// Paint layer.
        z_order: i32,
    },
    /// An axis-aligned rectangle, optionally filled and outlined.
    Rectangle {
        /// Minimum corner.
        origin: Point,
        /// Extent along X and Y.
        size: Size,
        /// Fill colour, if filled.
        fill: Option<Color>,
        /// Outline colour, if outlined.
        outline: Option<Color>,
        /// Outline style. Ignored without an outline colour.
        stroke: StrokeStyle,
        /// Paint layer.
        z_order: i32,
    },
    /// A line of text, horizontally centred on `position` with its baseline
    /// at `position.y`.
    Label {
        /// Text to show.
        text: String,
        /// Anchor point.
        position: Point,
        /// Font size in plan units.
        font_size: f64,
        /// Font family name.
        font_family: &'static str,
        /// Text colour.
        color: Color,
        /// Paint layer.
        z_order: i32,
    },
    /// A dimension line between `from` and `to`, with perpendicular end
    /// ticks and a gap in the middle left for its label.
    Dimension {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Half length of each end tick.
        tick_half_length: f64,
        /// Length of the central gap.
        label_gap: f64,
        /// Width and caps.
        stroke: StrokeStyle,
        /// Stroke colour.
        color: Color,
        /// Paint layer.
        z_order: i32,
    },
}

impl DrawPrimitive {
    /// Paint layer of the primitive.
    pub fn z_order(&self) -> i32 {
        match self {
            Self::LineSegment { z_order, .. }
            | Self::Arc { z_order, .. }
            | Self::Rectangle { z_order, .. }
            | Self::Label { z_order, .. }
            | Self::Dimension { z_order, .. } => *z_order,
        }
    }

    /// The arc as a [`kurbo::Arc`], for `Arc` primitives.
    pub fn to_kurbo_arc(&self) -> Option<kurbo::Arc> {
        match *self {
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
                ..
            } => Some(kurbo::Arc {
                center,
                radii: Vec2::new(radius, radius),
                start_angle,
                sweep_angle: arc_sweep(start_angle, end_angle, clockwise),
                x_rotation: 0.0,
            }),
            _ => None,
        }
    }

    /// The four strokes of a `Dimension` primitive.
    pub fn dimension_lines(&self) -> Option<[Line; 4]> {
        match *self {
            Self::Dimension {
                from,
                to,
                tick_half_length,
                label_gap,
                ..
            } => Some(dimension_lines(from, to, tick_half_length, label_gap)),
            _ => None,
        }
    }

    /// Local bounds of the primitive, including stroke width.
    ///
    /// Label bounds are estimated from the character count.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::LineSegment {
                from, to, stroke, ..
            } => {
                let reach = line_stroke_reach(*from, *to, stroke);
                Rect::from_points(*from, *to).inflate(reach, reach)
            }
            Self::Arc { stroke, .. } => self
                .to_kurbo_arc()
                .map_or(Rect::ZERO, |arc| arc.bounding_box())
                .inflate(stroke.width / 2.0, stroke.width / 2.0),
            Self::Rectangle {
                origin,
                size,
                outline,
                stroke,
                ..
            } => {
                let rect = Rect::from_origin_size(*origin, *size).abs();
                if outline.is_some() {
                    rect.inflate(stroke.width / 2.0, stroke.width / 2.0)
                } else {
                    rect
                }
            }
            Self::Label {
                text,
                position,
                font_size,
                ..
            } => {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "label lengths are tiny"
                )]
                let width = text.chars().count() as f64 * font_size * LABEL_ADVANCE;
                Rect::new(
                    position.x - width / 2.0,
                    position.y,
                    position.x + width / 2.0,
                    position.y + font_size,
                )
            }
            Self::Dimension { stroke, .. } => {
                let lines = self
                    .dimension_lines()
                    .unwrap_or([Line::new(Point::ZERO, Point::ZERO); 4]);
                lines
                    .iter()
                    .map(|line| Rect::from_points(line.p0, line.p1))
                    .reduce(|a, b| a.union(b))
                    .unwrap_or(Rect::ZERO)
                    .inflate(stroke.width / 2.0, stroke.width / 2.0)
            }
        }
    }
}

/// How far a stroked segment reaches past its end points along either axis.
///
/// Square caps extend half the width along the segment as well as across it,
/// so a diagonal segment's cap corners stick out further than a round cap.
fn line_stroke_reach(from: Point, to: Point, stroke: &StrokeStyle) -> f64 {
    let half = stroke.width / 2.0;
    if stroke.start_cap != Cap::Square && stroke.end_cap != Cap::Square {
        return half;
    }
    let along = to - from;
    let length = along.hypot();
    if length > 0.0 {
        half * (along.x.abs() + along.y.abs()) / length
    } else {
        half
    }
}

/// Signed sweep from `start` to `end`, negative when travelling clockwise.
///
/// The magnitude is always below a full turn.
pub fn arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let sweep = (end - start) % TAU;
    if clockwise {
        if sweep > 0.0 { sweep - TAU } else { sweep }
    } else if sweep < 0.0 {
        sweep + TAU
    } else {
        sweep
    }
}

/// Expand a dimension line into its strokes.
///
/// Returns the two end ticks followed by the two halves of the main line,
/// each half running from an end point towards the centre gap.
pub fn dimension_lines(from: Point, to: Point, tick_half_length: f64, label_gap: f64) -> [Line; 4] {
    let along = to - from;
    let length = along.hypot();
    let dir = if length > 0.0 {
        along / length
    } else {
        Vec2::new(1.0, 0.0)
    };
    let tick = Vec2::new(-dir.y, dir.x) * tick_half_length;
    let mid = from.midpoint(to);
    let half_gap = dir * (label_gap / 2.0);
    [
        Line::new(from - tick, from + tick),
        Line::new(to - tick, to + tick),
        Line::new(from, mid - half_gap),
        Line::new(to, mid + half_gap),
    ]
}

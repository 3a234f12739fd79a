// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing parameters for floor plans.

use kurbo::Size;
use peniko::Color;

/// Paint layers, lowest first.
///
/// Primitives on a higher layer paint over lower ones. The wall line sits
/// below the erasure layer so that doors, windows and openings cut it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZLayers {
    /// Wall centre lines.
    pub wall: i32,
    /// Background-coloured strokes that hide the wall under an opening.
    pub erasure: i32,
    /// Window panes.
    pub window: i32,
    /// Door leaves.
    pub door: i32,
    /// Dashed door swing arcs.
    pub door_arc: i32,
    /// Dimension lines and their labels.
    pub dimension: i32,
    /// Object footprints.
    pub object: i32,
}

impl Default for ZLayers {
    fn default() -> Self {
        Self {
            wall: 0,
            erasure: 1,
            window: 10,
            door: 20,
            door_arc: 21,
            dimension: 25,
            object: 30,
        }
    }
}

/// Everything that controls how a capture becomes a plan.
///
/// Lengths other than [`scale`](Self::scale) are in plan units, i.e. they do
/// not grow with the scale factor.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanStyle {
    /// Plan units per capture metre.
    pub scale: f64,
    /// Colour of the plan background, also used to erase walls.
    pub background: Color,
    /// Colour of every drawn surface, annotation and object.
    pub foreground: Color,
    /// Stroke width of wall lines and door leaves.
    pub wall_width: f64,
    /// Stroke width of the erasure under doors, windows and openings.
    pub erase_width: f64,
    /// Stroke width of window panes.
    pub window_width: f64,
    /// Stroke width of door swing arcs.
    pub door_arc_width: f64,
    /// Dash pattern of door swing arcs.
    pub door_arc_dashes: [f64; 2],
    /// Dash phase of door swing arcs.
    pub door_arc_dash_offset: f64,
    /// Swing angle of door leaves, in radians.
    pub door_swing: f64,
    /// Fill alpha of object footprints.
    pub object_fill_alpha: f32,
    /// Outline width of object footprints.
    pub object_outline_width: f64,
    /// Perpendicular distance between a wall and its dimension line.
    pub dimension_offset: f64,
    /// Half length of the ticks at the dimension line ends.
    pub dimension_tick: f64,
    /// Gap left in the middle of the dimension line for its label.
    pub dimension_label_gap: f64,
    /// Stroke width of dimension lines.
    pub dimension_width: f64,
    /// Font size of dimension labels.
    pub label_font_size: f64,
    /// Font family of dimension labels.
    pub label_font: &'static str,
    /// Declared canvas size.
    pub canvas: Size,
    /// Paint layers.
    pub layers: ZLayers,
}

impl PlanStyle {
    /// Default plan units per metre.
    pub const DEFAULT_SCALE: f64 = 200.0;

    /// The default style at a different scale.
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Fill colour of object footprints.
    pub fn object_fill(&self) -> Color {
        self.foreground.with_alpha(self.object_fill_alpha)
    }
}

impl Default for PlanStyle {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            background: Color::WHITE,
            foreground: Color::from_rgb8(0, 122, 255),
            wall_width: 22.0,
            erase_width: 24.0,
            window_width: 8.0,
            door_arc_width: 8.0,
            door_arc_dashes: [24.0, 8.0],
            door_arc_dash_offset: 1.0,
            door_swing: core::f64::consts::FRAC_PI_4,
            object_fill_alpha: 0.3,
            object_outline_width: 8.0,
            dimension_offset: 100.0,
            dimension_tick: 10.0,
            dimension_label_gap: 50.0,
            dimension_width: 2.0,
            label_font_size: 50.0,
            label_font: "Arial",
            canvas: Size::new(1500.0, 1500.0),
            layers: ZLayers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layers_follow_paint_contract() {
        let z = ZLayers::default();
        assert!(z.wall < z.erasure);
        assert!(z.erasure < z.window);
        assert!(z.window < z.door);
        assert!(z.door < z.door_arc);
        assert!(z.door_arc < z.dimension);
        assert!(z.dimension < z.object);
    }

    #[test]
    fn with_scale_keeps_other_parameters() {
        let style = PlanStyle::with_scale(50.0);
        assert_eq!(style.scale, 50.0);
        assert_eq!(style.wall_width, PlanStyle::default().wall_width);
    }

    #[test]
    fn object_fill_is_translucent_foreground() {
        let style = PlanStyle::default();
        let fill = style.object_fill().to_rgba8();
        let fg = style.foreground.to_rgba8();
        assert_eq!((fill.r, fill.g, fill.b), (fg.r, fg.g, fg.b));
        assert!(fill.a < 255);
    }
}

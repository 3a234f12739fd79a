// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for Floorsketch plans.
//!
//! [`SvgBackend`] implements [`PlanBackend`]: it records the nodes a
//! [`Scene`] replays into it and exports them as a standalone SVG document.
//!
//! Plans are Y-up while SVG is Y-down. Each node is written as a `<g>` whose
//! transform flips Y and applies the node's placement, so geometry keeps its
//! plan coordinates. Labels are flipped back so their text stays upright.
//!
//! ```rust
//! use floorsketch::{SurfaceCategory, SurfaceRecord, Transform3, Vec3, build_scene};
//! use floorsketch_svg::{SvgOptions, render_scene};
//!
//! let wall = SurfaceRecord::new(
//!     SurfaceCategory::Wall,
//!     Transform3::IDENTITY,
//!     Vec3::new(1.0, 2.4, 0.1),
//! );
//! let svg = render_scene(&build_scene(&[wall], &[], 200.0), &SvgOptions::default());
//!
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("3' 3''"));
//! ```
//!
//! This is intended for inspection and tests, not pixel-perfect output: label
//! extents are estimated and fonts are left to the viewer.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use floorsketch::{Canvas, DrawPrimitive, PlanBackend, Scene, SceneNode, StrokeStyle};
use kurbo::{Affine, BezPath, Cap, Join, PathEl, Point, Rect, Shape};
use peniko::Color;

/// Flattening tolerance for arcs, in plan units.
const ARC_TOLERANCE: f64 = 0.1;

/// Export options.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Size the document to the content bounds instead of the declared canvas.
    pub fit_content: bool,
    /// Padding around the content when fitting, in plan units.
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fit_content: false,
            margin: 50.0,
        }
    }
}

/// A recording SVG backend.
#[derive(Clone, Debug, Default)]
pub struct SvgBackend {
    canvas: Option<Canvas>,
    nodes: Vec<SceneNode>,
    finished: bool,
}

impl SvgBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes recorded since the last [`begin`](PlanBackend::begin).
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Canvas of the last replayed scene.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Returns `true` once a replay has completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Plan-space rectangle the document shows.
    pub fn view_rect(&self, options: &SvgOptions) -> Rect {
        let declared = self.canvas.map_or(Rect::ZERO, |canvas| canvas.rect());
        if !options.fit_content {
            return declared;
        }
        self.nodes
            .iter()
            .map(SceneNode::bounds)
            .reduce(|a, b| a.union(b))
            .map_or(declared, |bounds| {
                bounds.inflate(options.margin, options.margin)
            })
    }

    /// Export the recorded nodes as an SVG document.
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        let view = self.view_rect(options);
        // Plan Y-up rectangle to SVG Y-down viewBox.
        let (x, y) = (view.x0, -view.y1);
        let (width, height) = (view.width(), view.height());

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
            fmt_num(width),
            fmt_num(height),
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
        );
        for node in &self.nodes {
            write_node(&mut svg, node);
        }
        svg.push_str("</svg>");
        svg
    }
}

impl PlanBackend for SvgBackend {
    fn begin(&mut self, canvas: &Canvas) {
        self.canvas = Some(*canvas);
        self.nodes.clear();
        self.finished = false;
    }

    fn draw(&mut self, node: &SceneNode) {
        self.nodes.push(node.clone());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Replay `scene` into a fresh [`SvgBackend`] and export it.
pub fn render_scene(scene: &Scene, options: &SvgOptions) -> String {
    let mut backend = SvgBackend::new();
    scene.replay(&mut backend);
    backend.to_svg(options)
}

fn write_node(out: &mut String, node: &SceneNode) {
    let transform = Affine::FLIP_Y * node.placement.transform();
    let _ = write!(out, "<g transform=\"{}\">", affine_to_svg_matrix(transform));
    match &node.primitive {
        DrawPrimitive::LineSegment {
            from,
            to,
            stroke,
            color,
            ..
        } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" fill=\"none\"{}/>",
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                stroke_attrs(stroke, *color),
            );
        }
        DrawPrimitive::Arc { stroke, color, .. } => {
            let path = node
                .primitive
                .to_kurbo_arc()
                .map(|arc| arc.to_path(ARC_TOLERANCE))
                .unwrap_or_default();
            let _ = write!(
                out,
                "<path d=\"{}\" fill=\"none\"{}/>",
                bez_path_to_svg_d(&path),
                stroke_attrs(stroke, *color),
            );
        }
        DrawPrimitive::Dimension { stroke, color, .. } => {
            let mut path = BezPath::new();
            for line in node.primitive.dimension_lines().into_iter().flatten() {
                path.move_to(line.p0);
                path.line_to(line.p1);
            }
            let _ = write!(
                out,
                "<path d=\"{}\" fill=\"none\"{}/>",
                bez_path_to_svg_d(&path),
                stroke_attrs(stroke, *color),
            );
        }
        DrawPrimitive::Rectangle {
            origin,
            size,
            fill,
            outline,
            stroke,
            ..
        } => {
            let rect = Rect::from_origin_size(*origin, *size).abs();
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                fmt_num(rect.x0),
                fmt_num(rect.y0),
                fmt_num(rect.width()),
                fmt_num(rect.height()),
            );
            match fill {
                Some(color) => out.push_str(&paint_attrs("fill", *color)),
                None => out.push_str(" fill=\"none\""),
            }
            match outline {
                Some(color) => out.push_str(&stroke_attrs(stroke, *color)),
                None => out.push_str(" stroke=\"none\""),
            }
            out.push_str("/>");
        }
        DrawPrimitive::Label {
            text,
            position,
            font_size,
            font_family,
            color,
            ..
        } => {
            // Undo the group's Y flip about the anchor.
            let upright = Affine::translate(position.to_vec2()) * Affine::FLIP_Y;
            let _ = write!(
                out,
                "<text x=\"0\" y=\"0\" transform=\"{}\" font-family=\"{}\" font-size=\"{}\" text-anchor=\"middle\"{}>{}</text>",
                affine_to_svg_matrix(upright),
                escape_text(font_family),
                fmt_num(*font_size),
                paint_attrs("fill", *color),
                escape_text(text),
            );
        }
    }
    out.push_str("</g>");
}

/// Colour attributes for `fill` or `stroke`, with opacity when translucent.
fn paint_attrs(kind: &str, color: Color) -> String {
    let (rgb, a) = color_to_svg(color);
    let mut out = format!(" {kind}=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " {kind}-opacity=\"{}\"", fmt_num(f64::from(a)));
    }
    out
}

fn stroke_attrs(stroke: &StrokeStyle, color: Color) -> String {
    let mut out = paint_attrs("stroke", color);
    let _ = write!(out, " stroke-width=\"{}\"", fmt_num(stroke.width));
    // SVG has a single linecap; kurbo has one per end. Use the start cap.
    let _ = write!(
        out,
        " stroke-linecap=\"{}\"",
        stroke_cap_svg(stroke.start_cap)
    );
    let _ = write!(out, " stroke-linejoin=\"{}\"", stroke_join_svg(stroke.join));
    if !stroke.dash_pattern.is_empty() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(|v| fmt_num(*v)).collect();
        let _ = write!(out, " stroke-dasharray=\"{}\"", dashes.join(","));
        if stroke.dash_offset != 0.0 {
            let _ = write!(out, " stroke-dashoffset=\"{}\"", fmt_num(stroke.dash_offset));
        }
    }
    out
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn stroke_join_svg(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // [a b c d e f] is the SVG column-major order as well.
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(c[0]),
        fmt_num(c[1]),
        fmt_num(c[2]),
        fmt_num(c[3]),
        fmt_num(c[4]),
        fmt_num(c[5]),
    )
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    fn point(d: &mut String, cmd: char, pts: &[Point]) {
        d.push(cmd);
        for (i, p) in pts.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{} {}", fmt_num(p.x), fmt_num(p.y));
        }
    }

    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => point(&mut d, 'M', &[p]),
            PathEl::LineTo(p) => point(&mut d, 'L', &[p]),
            PathEl::QuadTo(p1, p2) => point(&mut d, 'Q', &[p1, p2]),
            PathEl::CurveTo(p1, p2, p3) => point(&mut d, 'C', &[p1, p2, p3]),
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Compact, stable number formatting: integers without a fraction, others
/// with at most three decimals.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorsketch::{
        ObjectRecord, Placement, SceneComposer, SurfaceCategory, SurfaceRecord, Transform3, Vec3,
        build_scene,
    };

    fn surface(category: SurfaceCategory, width: f64) -> SurfaceRecord {
        SurfaceRecord::new(category, Transform3::IDENTITY, Vec3::new(width, 2.4, 0.1))
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(24.0), "24");
        assert_eq!(fmt_num(-125.0), "-125");
        assert_eq!(fmt_num(0.30196), "0.302");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(1.5), "1.5");
    }

    #[test]
    fn view_box_is_the_centred_canvas() {
        let svg = render_scene(
            &build_scene(&[surface(SurfaceCategory::Wall, 1.0)], &[], 200.0),
            &SvgOptions::default(),
        );
        assert!(svg.contains("width=\"1500\" height=\"1500\" viewBox=\"-750 -750 1500 1500\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn wall_exports_line_dimension_and_upright_label() {
        let svg = render_scene(
            &build_scene(&[surface(SurfaceCategory::Wall, 1.0)], &[], 200.0),
            &SvgOptions::default(),
        );
        assert!(svg.contains("<line x1=\"-100\" y1=\"0\" x2=\"100\" y2=\"0\""));
        assert!(svg.contains("stroke=\"#007aff\" stroke-width=\"22\" stroke-linecap=\"square\""));
        assert!(svg.contains("<path d=\"M-100 -110L-100 -90M100 -110L100 -90"));
        assert!(svg.contains("transform=\"matrix(1 0 0 -1 0 -125)\""));
        assert!(svg.contains("font-family=\"Arial\" font-size=\"50\" text-anchor=\"middle\""));
        assert!(svg.contains(">3' 3''</text>"));
    }

    #[test]
    fn door_arc_is_dashed() {
        let svg = render_scene(
            &build_scene(&[surface(SurfaceCategory::Door, 0.5)], &[], 200.0),
            &SvgOptions::default(),
        );
        assert!(svg.contains("stroke-dasharray=\"24,8\" stroke-dashoffset=\"1\""));
        // The erasure is drawn in the background colour.
        assert!(svg.contains("stroke=\"#ffffff\" stroke-width=\"24\""));
    }

    #[test]
    fn groups_flip_y_after_placement() {
        let mut backend = SvgBackend::new();
        let scene = build_scene(&[surface(SurfaceCategory::Opening, 1.0)], &[], 200.0);
        let mut nodes = scene.into_nodes();
        nodes[0].placement = Placement::new(Point::new(10.0, 20.0), 0.0);
        backend.begin(&Canvas::centered(kurbo::Size::new(100.0, 100.0)));
        backend.draw(&nodes[0]);
        backend.finish();
        assert!(backend.is_finished());
        let svg = backend.to_svg(&SvgOptions::default());
        assert!(svg.contains("<g transform=\"matrix(1 0 0 -1 10 -20)\">"));
    }

    #[test]
    fn objects_export_translucent_rects() {
        let table = ObjectRecord::new(
            "table",
            Transform3::IDENTITY,
            Vec3::new(1.0, 0.8, 0.5),
        );
        let scene = SceneComposer::default().compose(&[], &[table]);
        let svg = render_scene(&scene, &SvgOptions::default());
        assert!(svg.contains("<rect x=\"-100\" y=\"-50\" width=\"200\" height=\"100\""));
        assert!(svg.contains("fill-opacity=\""));
        assert!(svg.contains("stroke-width=\"8\""));
    }

    #[test]
    fn fit_content_wraps_content_with_margin() {
        let scene = build_scene(&[surface(SurfaceCategory::Window, 20.0)], &[], 200.0);
        let mut backend = SvgBackend::new();
        scene.replay(&mut backend);

        let declared = backend.view_rect(&SvgOptions::default());
        let fitted = backend.view_rect(&SvgOptions {
            fit_content: true,
            margin: 10.0,
        });
        assert_eq!(declared, Rect::new(-750.0, -750.0, 750.0, 750.0));
        // 4000 units of window plus half the erase width, plus margin.
        assert!((fitted.x0 + 2022.0).abs() < 1e-9);
        assert!((fitted.x1 - 2022.0).abs() < 1e-9);
        assert!((fitted.y1 - 22.0).abs() < 1e-9);
    }

    #[test]
    fn empty_scene_falls_back_to_canvas() {
        let scene = build_scene(&[], &[], 200.0);
        let mut backend = SvgBackend::new();
        scene.replay(&mut backend);
        let fitted = backend.view_rect(&SvgOptions {
            fit_content: true,
            ..SvgOptions::default()
        });
        assert_eq!(fitted, Canvas::centered(kurbo::Size::new(1500.0, 1500.0)).rect());
        assert!(backend.nodes().is_empty());
    }

    #[test]
    fn label_text_is_escaped() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_text("3' 3''"), "3' 3''");
    }

    #[test]
    fn replay_resets_previous_recording() {
        let mut backend = SvgBackend::new();
        build_scene(&[surface(SurfaceCategory::Wall, 1.0)], &[], 200.0).replay(&mut backend);
        build_scene(&[surface(SurfaceCategory::Opening, 1.0)], &[], 200.0).replay(&mut backend);
        assert_eq!(backend.nodes().len(), 1);
        assert!(backend.canvas().is_some());
    }
}

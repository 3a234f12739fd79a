// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed plans.

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};

use crate::backend::PlanBackend;
use crate::primitive::DrawPrimitive;

/// Where a surface or object sits in the plan.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Plan position of the owner's local origin.
    pub position: Point,
    /// Counter-clockwise rotation of the owner's local frame, in radians.
    pub rotation: f64,
}

impl Placement {
    /// Create a placement.
    #[inline]
    pub const fn new(position: Point, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Local-to-plan transform: rotate first, then translate.
    #[inline]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation)
    }
}

/// A primitive together with the placement of the element that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Placement of the producing surface or object.
    pub placement: Placement,
    /// The primitive, in the owner's local frame.
    pub primitive: DrawPrimitive,
}

impl SceneNode {
    /// Paint layer of the primitive.
    #[inline]
    pub fn z_order(&self) -> i32 {
        self.primitive.z_order()
    }

    /// Bounds of the primitive in plan space.
    pub fn bounds(&self) -> Rect {
        self.placement
            .transform()
            .transform_rect_bbox(self.primitive.bounding_box())
    }
}

/// Declared drawing surface of a scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Declared size in plan units.
    pub size: Size,
    /// Where the plan origin sits within the canvas, as a fraction of its
    /// size. Always `(0.5, 0.5)` for composed scenes.
    pub anchor: Point,
}

impl Canvas {
    /// A canvas of the given size with the plan origin at its centre.
    #[inline]
    pub const fn centered(size: Size) -> Self {
        Self {
            size,
            anchor: Point::new(0.5, 0.5),
        }
    }

    /// The canvas rectangle in plan space.
    pub fn rect(&self) -> Rect {
        let origin = Point::new(
            -self.size.width * self.anchor.x,
            -self.size.height * self.anchor.y,
        );
        Rect::from_origin_size(origin, self.size)
    }
}

/// A finished plan: placed primitives in paint order plus canvas metadata.
///
/// Nodes are sorted by ascending z-order; nodes on the same layer keep the
/// order in which they were produced. Content is allowed to extend past the
/// declared canvas; fitting it into a view is up to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    canvas: Canvas,
    reference_orientation: f64,
}

impl Scene {
    /// Create a scene, sorting `nodes` into paint order.
    pub fn new(mut nodes: Vec<SceneNode>, canvas: Canvas, reference_orientation: f64) -> Self {
        // Stable, so ties keep insertion order.
        nodes.sort_by_key(SceneNode::z_order);
        Self {
            nodes,
            canvas,
            reference_orientation,
        }
    }

    /// Nodes in paint order.
    #[inline]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Declared canvas.
    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rotation every surface was corrected by.
    #[inline]
    pub fn reference_orientation(&self) -> f64 {
        self.reference_orientation
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene has nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Union of the plan-space bounds of every node, or `None` when empty.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.nodes
            .iter()
            .map(SceneNode::bounds)
            .reduce(|a, b| a.union(b))
    }

    /// Hand every node to `backend` in paint order.
    pub fn replay<B: PlanBackend + ?Sized>(&self, backend: &mut B) {
        backend.begin(&self.canvas);
        for node in &self.nodes {
            backend.draw(node);
        }
        backend.finish();
    }

    /// Consume the scene, returning its nodes in paint order.
    pub fn into_nodes(self) -> Vec<SceneNode> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::StrokeStyle;
    use alloc::vec;
    use core::f64::consts::FRAC_PI_2;
    use peniko::Color;

    fn line(z_order: i32, to_x: f64) -> SceneNode {
        SceneNode {
            placement: Placement::default(),
            primitive: DrawPrimitive::LineSegment {
                from: Point::ZERO,
                to: Point::new(to_x, 0.0),
                stroke: StrokeStyle::new(2.0),
                color: Color::BLACK,
                z_order,
            },
        }
    }

    #[test]
    fn nodes_sort_stably_by_z_order() {
        let scene = Scene::new(
            vec![line(5, 1.0), line(0, 2.0), line(5, 3.0), line(0, 4.0)],
            Canvas::centered(Size::new(100.0, 100.0)),
            0.0,
        );
        let order: Vec<_> = scene
            .nodes()
            .iter()
            .map(|node| node.primitive.bounding_box().x1)
            .collect();
        assert_eq!(order, vec![3.0, 5.0, 2.0, 4.0]);
    }

    #[test]
    fn placement_rotates_before_translating() {
        let placement = Placement::new(Point::new(10.0, 0.0), FRAC_PI_2);
        let p = placement.transform() * Point::new(1.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centered_canvas_rect_straddles_origin() {
        let canvas = Canvas::centered(Size::new(1500.0, 1500.0));
        assert_eq!(canvas.rect(), Rect::new(-750.0, -750.0, 750.0, 750.0));
    }

    #[test]
    fn content_bounds_follow_placement() {
        let mut node = line(0, 10.0);
        node.placement = Placement::new(Point::new(100.0, 50.0), 0.0);
        let scene = Scene::new(vec![node], Canvas::centered(Size::new(10.0, 10.0)), 0.0);
        let bounds = scene.content_bounds().unwrap();
        assert!((bounds.x0 - 99.0).abs() < 1e-9);
        assert!((bounds.x1 - 111.0).abs() < 1e-9);
        assert!((bounds.y0 - 49.0).abs() < 1e-9);
        assert!((bounds.y1 - 51.0).abs() < 1e-9);
    }

    #[test]
    fn empty_scene_has_no_bounds() {
        let scene = Scene::new(Vec::new(), Canvas::centered(Size::ZERO), 0.0);
        assert!(scene.is_empty());
        assert!(scene.content_bounds().is_none());
    }
}

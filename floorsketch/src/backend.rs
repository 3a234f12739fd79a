// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering backend contract.

use crate::scene::{Canvas, SceneNode};

/// Consumer of composed plans.
///
/// Backends are dumb: they receive placed primitives in paint order and draw
/// them. Fitting the plan into a view, panning and zooming stay with the
/// host. See [`Scene::replay`](crate::Scene::replay).
pub trait PlanBackend {
    /// Called once before any node, with the scene's declared canvas.
    fn begin(&mut self, canvas: &Canvas);

    /// Draw one node. Later nodes paint over earlier ones.
    fn draw(&mut self, node: &SceneNode);

    /// Called once after the last node.
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{DrawPrimitive, StrokeStyle};
    use crate::scene::{Placement, Scene};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Size};
    use peniko::Color;

    /// Trivial backend that records what it was given.
    #[derive(Default)]
    struct RecordingBackend {
        canvas: Option<Canvas>,
        z_orders: Vec<i32>,
        finished: bool,
    }

    impl PlanBackend for RecordingBackend {
        fn begin(&mut self, canvas: &Canvas) {
            self.canvas = Some(*canvas);
        }

        fn draw(&mut self, node: &SceneNode) {
            self.z_orders.push(node.z_order());
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn node(z_order: i32) -> SceneNode {
        SceneNode {
            placement: Placement::default(),
            primitive: DrawPrimitive::LineSegment {
                from: Point::ZERO,
                to: Point::new(1.0, 0.0),
                stroke: StrokeStyle::new(1.0),
                color: Color::BLACK,
                z_order,
            },
        }
    }

    #[test]
    fn replay_feeds_nodes_in_paint_order() {
        let canvas = Canvas::centered(Size::new(20.0, 20.0));
        let scene = Scene::new(vec![node(3), node(1), node(2)], canvas, 0.0);
        let mut backend = RecordingBackend::default();
        scene.replay(&mut backend);

        assert_eq!(backend.canvas, Some(canvas));
        assert_eq!(backend.z_orders, vec![1, 2, 3]);
        assert!(backend.finished);
    }

    #[test]
    fn replay_works_through_trait_objects() {
        let scene = Scene::new(vec![node(0)], Canvas::centered(Size::ZERO), 0.0);
        let mut backend = RecordingBackend::default();
        let dyn_backend: &mut dyn PlanBackend = &mut backend;
        scene.replay(dyn_backend);
        assert_eq!(backend.z_orders.len(), 1);
    }
}

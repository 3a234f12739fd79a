// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene composition: a whole capture to one [`Scene`].

use alloc::vec::Vec;

use kurbo::{Cap, Join, Point, Size};

use crate::primitive::{DrawPrimitive, StrokeStyle};
use crate::projector::{SurfaceProjector, plan_position};
use crate::record::{CapturedRoom, ObjectRecord, SurfaceRecord};
use crate::scene::{Canvas, Placement, Scene, SceneNode};
use crate::style::PlanStyle;

/// Yaw of the widest record in `walls`.
///
/// Ties go to the first record in input order. Returns `0.0` for an empty
/// slice. Every record given is considered, whatever its category.
pub fn reference_orientation(walls: &[SurfaceRecord]) -> f64 {
    reference_wall(walls.iter()).map_or(0.0, |wall| wall.transform.yaw())
}

fn reference_wall<'a>(
    walls: impl Iterator<Item = &'a SurfaceRecord>,
) -> Option<&'a SurfaceRecord> {
    let mut widest: Option<&'a SurfaceRecord> = None;
    for wall in walls {
        if widest.is_none_or(|current| wall.width() > current.width()) {
            widest = Some(wall);
        }
    }
    widest
}

/// Compose a scene with the default style at `scale` plan units per metre.
///
/// ```
/// use floorsketch::{SurfaceCategory, SurfaceRecord, Transform3, Vec3, build_scene};
///
/// let wall = SurfaceRecord::new(
///     SurfaceCategory::Wall,
///     Transform3::IDENTITY,
///     Vec3::new(1.0, 2.4, 0.0),
/// );
/// let scene = build_scene(&[wall], &[], 200.0);
///
/// // Wall line, dimension line and label.
/// assert_eq!(scene.len(), 3);
/// ```
pub fn build_scene(surfaces: &[SurfaceRecord], objects: &[ObjectRecord], scale: f64) -> Scene {
    SceneComposer::new(PlanStyle::with_scale(scale)).compose(surfaces, objects)
}

/// Composes captures into scenes with a fixed style.
///
/// Composition is a pure function of its input: the same records always give
/// the same scene, and a composer may be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct SceneComposer {
    style: PlanStyle,
}

impl SceneComposer {
    /// Create a composer with the given style.
    pub fn new(style: PlanStyle) -> Self {
        Self { style }
    }

    /// Style this composer draws with.
    pub fn style(&self) -> &PlanStyle {
        &self.style
    }

    /// Compose a scene from surfaces and objects.
    ///
    /// The reference orientation is taken from the wall-category surfaces
    /// only. Surfaces are corrected by it; objects are not.
    pub fn compose(&self, surfaces: &[SurfaceRecord], objects: &[ObjectRecord]) -> Scene {
        self.compose_iter(surfaces.iter(), objects)
    }

    /// Compose a scene from a finished capture.
    pub fn compose_room(&self, room: &CapturedRoom) -> Scene {
        self.compose_iter(room.surfaces(), &room.objects)
    }

    fn compose_iter<'a>(
        &self,
        surfaces: impl Iterator<Item = &'a SurfaceRecord> + Clone,
        objects: &[ObjectRecord],
    ) -> Scene {
        let reference = reference_wall(surfaces.clone().filter(|s| s.is_wall()))
            .map_or(0.0, |wall| wall.transform.yaw());
        tracing::debug!(reference, "reference orientation");

        let projector = SurfaceProjector::new(&self.style, reference);
        let mut nodes = Vec::new();
        let mut surface_count = 0_usize;
        for surface in surfaces {
            surface_count += 1;
            let projected = projector.project(surface);
            nodes.extend(projected.primitives.into_iter().map(|primitive| SceneNode {
                placement: projected.placement,
                primitive,
            }));
        }
        nodes.extend(objects.iter().map(|object| self.object_node(object)));

        tracing::debug!(
            surfaces = surface_count,
            objects = objects.len(),
            nodes = nodes.len(),
            "composed scene"
        );
        Scene::new(nodes, Canvas::centered(self.style.canvas), reference)
    }

    /// Footprint of one object.
    ///
    /// Objects keep their own heading and are not corrected by the scene's
    /// reference orientation.
    pub fn object_node(&self, object: &ObjectRecord) -> SceneNode {
        let style = &self.style;
        let size = Size::new(
            object.dimensions.x * style.scale,
            object.dimensions.z * style.scale,
        );
        SceneNode {
            placement: object_placement(object, style.scale),
            primitive: DrawPrimitive::Rectangle {
                origin: Point::new(-size.width / 2.0, -size.height / 2.0),
                size,
                fill: Some(style.object_fill()),
                outline: Some(style.foreground),
                stroke: StrokeStyle::new(style.object_outline_width)
                    .with_caps(Cap::Butt)
                    .with_join(Join::Miter),
                z_order: style.layers.object,
            },
        }
    }
}

/// Placement of an object footprint: flattened position, rotation
/// `-(rz - ry)`.
pub fn object_placement(object: &ObjectRecord, scale: f64) -> Placement {
    Placement::new(
        plan_position(&object.transform, scale),
        -object.transform.relative_roll(),
    )
}

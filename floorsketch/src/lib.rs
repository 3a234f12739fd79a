// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorsketch: top-down floor plans from captured rooms.
//!
//! A room scan produces a set of oriented boxes: walls, doors, windows,
//! openings, floors, and furnishings. This crate flattens them into a 2D plan
//! made of renderer-agnostic draw primitives.
//!
//! - [`CapturedRoom`], [`SurfaceRecord`] and [`ObjectRecord`] hold the
//!   finished capture.
//! - [`SceneComposer`] (or the [`build_scene`] shorthand) picks a reference
//!   orientation from the widest wall, projects every surface through a
//!   [`SurfaceProjector`], adds object footprints and returns a [`Scene`].
//! - A [`Scene`] holds placed [`DrawPrimitive`]s in paint order and replays
//!   them into any [`PlanBackend`].
//! - [`CaptureSession`] drives one [`CaptureSource`] from start to finished
//!   room.
//!
//! It does **not** rasterize, lay out text, or own a view. Renderers such as
//! `floorsketch_svg` consume the primitives; fitting the plan into a window
//! is left to the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorsketch::{
//!     CapturedRoom, SceneComposer, SurfaceCategory, SurfaceRecord, Transform3, Vec3,
//! };
//!
//! let wall = SurfaceRecord::new(
//!     SurfaceCategory::Wall,
//!     Transform3::new(Vec3::new(0.0, 1.2, 0.0), Vec3::new(0.0, 0.3, 0.0)),
//!     Vec3::new(4.0, 2.4, 0.2),
//! );
//! let door = SurfaceRecord::new(
//!     SurfaceCategory::Door,
//!     Transform3::new(Vec3::new(0.5, 1.0, 0.0), Vec3::new(0.0, 0.3, 0.0)),
//!     Vec3::new(0.9, 2.0, 0.0),
//! );
//! let room = CapturedRoom {
//!     walls: vec![wall],
//!     doors: vec![door],
//!     ..CapturedRoom::default()
//! };
//!
//! let scene = SceneComposer::default().compose_room(&room);
//!
//! // Wall: line, dimension, label. Door: erasure, leaf, swing arc.
//! assert_eq!(scene.len(), 6);
//! assert!((scene.reference_orientation() - 0.3).abs() < 1e-12);
//!
//! // Paint order never decreases.
//! let z: Vec<i32> = scene.nodes().iter().map(|node| node.z_order()).collect();
//! assert!(z.windows(2).all(|pair| pair[0] <= pair[1]));
//! ```
//!
//! ## Coordinates
//!
//! Capture space is metres, right-handed, Y up. Plans are Y-up plan units:
//! capture X is mirrored into plan X, capture Z becomes plan Y, and lengths
//! are multiplied by [`PlanStyle::scale`]. Every surface is turned about the
//! plan origin so that the reference wall comes out horizontal. Objects keep
//! their own heading.
//!
//! ## Features
//!
//! - `std` (default): use the standard library.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for the capture records.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
mod composer;
mod primitive;
mod projector;
mod record;
mod scene;
mod session;
mod style;
mod units;

pub use backend::PlanBackend;
pub use composer::{SceneComposer, build_scene, object_placement, reference_orientation};
pub use primitive::{DrawPrimitive, StrokeStyle, arc_sweep, dimension_lines};
pub use projector::{
    ProjectedSurface, SurfaceProjector, anchor_points, half_length, plan_position,
    project_surface, surface_placement,
};
pub use record::{CapturedRoom, ObjectRecord, SurfaceCategory, SurfaceRecord, Transform3, Vec3};
pub use scene::{Canvas, Placement, Scene, SceneNode};
pub use session::{
    CaptureSession, CaptureSource, ReplayError, ReplaySource, SessionError, SessionState,
};
pub use style::{PlanStyle, ZLayers};
pub use units::{FeetInches, METERS_TO_INCHES};

pub use kurbo;
pub use peniko;

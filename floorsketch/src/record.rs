// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture records: the finished, flattened output of a room scan.
//!
//! These are plain values handed over by a capture adapter. They are never
//! validated; a negative width simply produces mirrored geometry downstream.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A plain 3D vector in capture space (metres, right-handed, Y up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component (up).
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Position plus Euler rotation of a captured element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3 {
    /// Centre of the element in capture space.
    pub position: Vec3,
    /// Euler angles `(rx, ry, rz)` in radians.
    pub euler: Vec3,
}

impl Transform3 {
    /// No translation, no rotation.
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Vec3::ZERO);

    /// Create a transform from a position and Euler angles.
    #[inline]
    pub const fn new(position: Vec3, euler: Vec3) -> Self {
        Self { position, euler }
    }

    /// Rotation about the vertical axis.
    #[inline]
    pub const fn yaw(&self) -> f64 {
        self.euler.y
    }

    /// In-plane angle of the element relative to its own heading, `rz - ry`.
    #[inline]
    pub fn relative_roll(&self) -> f64 {
        self.euler.z - self.euler.y
    }
}

/// Kind of a captured planar surface.
///
/// Anything a capture adapter cannot name maps to [`SurfaceCategory::Unknown`],
/// which renders like a wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum SurfaceCategory {
    /// A wall segment.
    Wall,
    /// A door in a wall.
    Door,
    /// A window in a wall.
    Window,
    /// A doorless opening in a wall.
    Opening,
    /// The floor polygon. Not drawn.
    Floor,
    /// Any category the capture layer reported that is not listed above.
    #[default]
    Unknown,
}

impl SurfaceCategory {
    /// Look up a category by its lowercase name, ignoring ASCII case.
    ///
    /// Unrecognised names give [`SurfaceCategory::Unknown`].
    pub fn from_name(name: &str) -> Self {
        let named = [
            Self::Wall,
            Self::Door,
            Self::Window,
            Self::Opening,
            Self::Floor,
        ];
        named
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unknown)
    }

    /// Lowercase name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Opening => "opening",
            Self::Floor => "floor",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SurfaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for SurfaceCategory {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<SurfaceCategory> for String {
    fn from(category: SurfaceCategory) -> Self {
        Self::from(category.name())
    }
}

/// One captured planar element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceRecord {
    /// What kind of surface this is.
    pub category: SurfaceCategory,
    /// Placement in capture space.
    pub transform: Transform3,
    /// `(width, height, depth)` in metres. Only the width is projected.
    pub dimensions: Vec3,
}

impl SurfaceRecord {
    /// Create a new surface record.
    #[inline]
    pub const fn new(category: SurfaceCategory, transform: Transform3, dimensions: Vec3) -> Self {
        Self {
            category,
            transform,
            dimensions,
        }
    }

    /// Width of the surface in metres.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Whether this record takes part in reference-orientation selection.
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.category == SurfaceCategory::Wall
    }
}

/// One captured furnishing or object.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectRecord {
    /// Free-form descriptive tag, for example `"table"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Placement in capture space.
    pub transform: Transform3,
    /// `(width, height, depth)` in metres.
    pub dimensions: Vec3,
}

impl ObjectRecord {
    /// Create a new object record.
    pub fn new(category: impl Into<String>, transform: Transform3, dimensions: Vec3) -> Self {
        Self {
            category: category.into(),
            transform,
            dimensions,
        }
    }
}

/// Everything one finished capture produced, grouped by category.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CapturedRoom {
    /// Wall surfaces, plus any surface of unknown category.
    pub walls: Vec<SurfaceRecord>,
    /// Door surfaces.
    pub doors: Vec<SurfaceRecord>,
    /// Window surfaces.
    pub windows: Vec<SurfaceRecord>,
    /// Opening surfaces.
    pub openings: Vec<SurfaceRecord>,
    /// Floor surfaces.
    pub floors: Vec<SurfaceRecord>,
    /// Furnishings.
    pub objects: Vec<ObjectRecord>,
}

impl CapturedRoom {
    /// Group a flat list of surfaces by category.
    ///
    /// Relative order within each category is kept. Unknown surfaces are
    /// grouped with the walls, but keep their own category.
    pub fn from_surfaces(
        surfaces: impl IntoIterator<Item = SurfaceRecord>,
        objects: impl IntoIterator<Item = ObjectRecord>,
    ) -> Self {
        let mut room = Self {
            objects: objects.into_iter().collect(),
            ..Self::default()
        };
        for surface in surfaces {
            let bucket = match surface.category {
                SurfaceCategory::Wall | SurfaceCategory::Unknown => &mut room.walls,
                SurfaceCategory::Door => &mut room.doors,
                SurfaceCategory::Window => &mut room.windows,
                SurfaceCategory::Opening => &mut room.openings,
                SurfaceCategory::Floor => &mut room.floors,
            };
            bucket.push(surface);
        }
        room
    }

    /// All surfaces: doors, openings, walls, windows, then floors.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceRecord> + Clone + '_ {
        self.doors
            .iter()
            .chain(&self.openings)
            .chain(&self.walls)
            .chain(&self.windows)
            .chain(&self.floors)
    }

    /// Total number of surface records.
    pub fn surface_count(&self) -> usize {
        self.doors.len()
            + self.openings.len()
            + self.walls.len()
            + self.windows.len()
            + self.floors.len()
    }

    /// Returns `true` if the capture produced neither surfaces nor objects.
    pub fn is_empty(&self) -> bool {
        self.surface_count() == 0 && self.objects.is_empty()
    }
}

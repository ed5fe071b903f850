//! Core types for isosurface extraction.
//!
//! Provides the vector type shared across the pipeline, grid dimensions,
//! and the per-axis affine index→world map.

use core::ops::{Add, Div, Mul, Sub};

/// A 3D point with named fields for clarity.
///
/// Provides the arithmetic needed by interpolation, normal computation,
/// and surface statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new Point3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Point3 with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another point (treating both as vectors).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another point (treating both as vectors).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Normalize the vector to unit length.
    /// Returns a zero vector if the length is zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::splat(0.0)
        } else {
            self / len
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
            z: if self.z < other.z { self.z } else { other.z },
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
            z: if self.z > other.z { self.z } else { other.z },
        }
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

/// Dimensions of a regular sample lattice.
///
/// Samples are stored row-major with x fastest:
/// `index = x + nx * (y + ny * z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Sample count along x.
    pub nx: usize,
    /// Sample count along y.
    pub ny: usize,
    /// Sample count along z.
    pub nz: usize,
}

impl GridDims {
    /// Create new grid dimensions.
    #[inline]
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of samples (`nx * ny * nz`).
    #[inline]
    pub const fn sample_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of cells, `(nx-1)(ny-1)(nz-1)` when every axis has at
    /// least 2 samples, zero otherwise.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        if self.nx < 2 || self.ny < 2 || self.nz < 2 {
            0
        } else {
            (self.nx - 1) * (self.ny - 1) * (self.nz - 1)
        }
    }

    /// Flat sample index for `(x, y, z)`.
    #[inline]
    pub const fn sample_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.nx * (y + self.ny * z)
    }

    /// Flat-index deltas from a cell's base sample to its 8 corners,
    /// in corner order (bit0 → +x, bit1 → +y, bit2 → +z).
    #[inline]
    pub const fn corner_deltas(&self) -> [usize; 8] {
        let dx = 1;
        let dy = self.nx;
        let dz = self.nx * self.ny;
        [0, dx, dy, dx + dy, dz, dx + dz, dy + dz, dx + dy + dz]
    }
}

/// Affine map from fractional sample index to world coordinate along
/// one axis: `world(i) = origin + step * i`.
///
/// Driving vertex interpolation through this map (rather than through
/// resampled neighbor positions) is what makes shared-edge vertices
/// bit-reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMap {
    /// World coordinate of sample index 0.
    pub origin: f32,
    /// World distance between consecutive samples.
    pub step: f32,
}

impl AxisMap {
    /// Create a new axis map.
    #[inline]
    pub const fn new(origin: f32, step: f32) -> Self {
        Self { origin, step }
    }

    /// Map a (possibly fractional) sample index to a world coordinate.
    #[inline]
    pub fn world(&self, index: f32) -> f32 {
        self.origin + self.step * index
    }
}

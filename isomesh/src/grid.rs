//! Regular scalar sample grid.
//!
//! [`ScalarGrid`] is the immutable input to extraction: a dense lattice of
//! f32 samples (NaN marks missing data), per-axis affine index→world maps,
//! and optional byte attribute channels interpolated alongside geometry.

use isomesh_core::{AxisMap, GridDims, Point3};

use crate::error::{IsoError, Result};

/// An immutable regular 3-D scalar grid.
///
/// Samples are stored row-major with x fastest. Every axis must carry at
/// least 2 samples so the grid contains at least one cell; this is
/// enforced at construction, so an extraction call never sees a
/// degenerate lattice.
///
/// # Example
///
/// ```
/// use isomesh::ScalarGrid;
/// use isomesh_core::GridDims;
///
/// let grid = ScalarGrid::from_fn(
///     GridDims::new(16, 16, 16),
///     [-1.0, -1.0, -1.0],
///     [0.125, 0.125, 0.125],
///     |p| p.length() - 0.8,
/// )
/// .unwrap();
/// assert_eq!(grid.samples().len(), 16 * 16 * 16);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarGrid {
    dims: GridDims,
    maps: [AxisMap; 3],
    samples: Vec<f32>,
    attributes: Vec<Vec<u8>>,
}

impl ScalarGrid {
    /// Create a grid from raw samples.
    ///
    /// # Arguments
    /// * `dims` - Sample counts per axis, each at least 2
    /// * `origin` - World coordinate of sample (0, 0, 0)
    /// * `step` - World distance between samples, per axis
    /// * `samples` - `nx * ny * nz` values, x fastest; NaN marks missing
    ///
    /// # Errors
    /// `DimensionTooSmall` when an axis has fewer than 2 samples,
    /// `SampleCountMismatch` when the sample array has the wrong length.
    pub fn new(
        dims: GridDims,
        origin: [f32; 3],
        step: [f32; 3],
        samples: Vec<f32>,
    ) -> Result<Self> {
        for (axis, &len) in [dims.nx, dims.ny, dims.nz].iter().enumerate() {
            if len < 2 {
                return Err(IsoError::DimensionTooSmall { axis, len });
            }
        }
        let expected = dims.sample_count();
        if samples.len() != expected {
            return Err(IsoError::SampleCountMismatch {
                expected,
                got: samples.len(),
            });
        }
        Ok(Self {
            dims,
            maps: [
                AxisMap::new(origin[0], step[0]),
                AxisMap::new(origin[1], step[1]),
                AxisMap::new(origin[2], step[2]),
            ],
            samples,
            attributes: Vec::new(),
        })
    }

    /// Create a grid by sampling a function at every lattice point.
    ///
    /// The function receives the world-space position of each sample.
    pub fn from_fn<F>(dims: GridDims, origin: [f32; 3], step: [f32; 3], f: F) -> Result<Self>
    where
        F: Fn(Point3) -> f32,
    {
        let maps = [
            AxisMap::new(origin[0], step[0]),
            AxisMap::new(origin[1], step[1]),
            AxisMap::new(origin[2], step[2]),
        ];
        let mut samples = Vec::with_capacity(dims.sample_count());
        for z in 0..dims.nz {
            for y in 0..dims.ny {
                for x in 0..dims.nx {
                    let p = Point3::new(
                        maps[0].world(x as f32),
                        maps[1].world(y as f32),
                        maps[2].world(z as f32),
                    );
                    samples.push(f(p));
                }
            }
        }
        Self::new(dims, origin, step, samples)
    }

    /// Attach a byte attribute channel, consuming and returning the grid.
    ///
    /// The channel must have one value per sample; it is interpolated at
    /// every extracted vertex.
    ///
    /// # Errors
    /// `AttributeLengthMismatch` when the channel length is wrong.
    pub fn with_attribute(mut self, values: Vec<u8>) -> Result<Self> {
        let expected = self.dims.sample_count();
        if values.len() != expected {
            return Err(IsoError::AttributeLengthMismatch {
                channel: self.attributes.len(),
                expected,
                got: values.len(),
            });
        }
        self.attributes.push(values);
        Ok(self)
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The per-axis affine index→world maps.
    #[inline]
    pub fn axis_maps(&self) -> &[AxisMap; 3] {
        &self.maps
    }

    /// The raw sample array.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// The attached attribute channels.
    #[inline]
    pub fn attributes(&self) -> &[Vec<u8>] {
        &self.attributes
    }

    /// Sample value at lattice coordinates.
    #[inline]
    pub fn sample(&self, x: usize, y: usize, z: usize) -> f32 {
        self.samples[self.dims.sample_index(x, y, z)]
    }

    /// Minimum and maximum over all numerically valid samples.
    ///
    /// A pure, allocation-free reduction; callers that want to skip
    /// extraction for an out-of-range isovalue can consult this. Returns
    /// `None` when every sample is NaN.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for &v in &self.samples {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let dims = GridDims::new(2, 3, 4);
        let grid = ScalarGrid::new(dims, [0.0; 3], [1.0; 3], vec![0.0; 24]).unwrap();
        assert_eq!(grid.dims(), dims);
        assert_eq!(grid.samples().len(), 24);
    }

    #[test]
    fn test_grid_rejects_thin_axis() {
        let result = ScalarGrid::new(GridDims::new(2, 1, 2), [0.0; 3], [1.0; 3], vec![0.0; 4]);
        assert_eq!(
            result.unwrap_err(),
            IsoError::DimensionTooSmall { axis: 1, len: 1 }
        );
    }

    #[test]
    fn test_grid_rejects_wrong_sample_count() {
        let result = ScalarGrid::new(GridDims::new(2, 2, 2), [0.0; 3], [1.0; 3], vec![0.0; 7]);
        assert_eq!(
            result.unwrap_err(),
            IsoError::SampleCountMismatch { expected: 8, got: 7 }
        );
    }

    #[test]
    fn test_grid_rejects_wrong_attribute_length() {
        let grid = ScalarGrid::new(GridDims::new(2, 2, 2), [0.0; 3], [1.0; 3], vec![0.0; 8]).unwrap();
        let result = grid.with_attribute(vec![0u8; 9]);
        assert_eq!(
            result.unwrap_err(),
            IsoError::AttributeLengthMismatch {
                channel: 0,
                expected: 8,
                got: 9
            }
        );
    }

    #[test]
    fn test_grid_from_fn_positions() {
        let grid = ScalarGrid::from_fn(
            GridDims::new(3, 2, 2),
            [1.0, 10.0, 100.0],
            [0.5, 1.0, 2.0],
            |p| p.x + p.y + p.z,
        )
        .unwrap();
        // Sample (2, 1, 1) sits at world (2.0, 11.0, 102.0)
        assert_eq!(grid.sample(2, 1, 1), 2.0 + 11.0 + 102.0);
    }

    #[test]
    fn test_value_range_skips_nan() {
        let samples = vec![1.0, f32::NAN, -3.0, 2.0, 0.0, f32::NAN, 5.0, 4.0];
        let grid = ScalarGrid::new(GridDims::new(2, 2, 2), [0.0; 3], [1.0; 3], samples).unwrap();
        assert_eq!(grid.value_range(), Some((-3.0, 5.0)));
    }

    #[test]
    fn test_value_range_all_nan() {
        let grid =
            ScalarGrid::new(GridDims::new(2, 2, 2), [0.0; 3], [1.0; 3], vec![f32::NAN; 8]).unwrap();
        assert_eq!(grid.value_range(), None);
    }
}

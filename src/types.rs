use crate::error::BBoxError;
use nalgebra as na;
use std::borrow::Borrow;

/// The 8 corners of an object's bounding box in its own local frame.
///
/// Corners keep the host's order: x varies slowest, and within each x the
/// corners walk `(y0, z0), (y0, z1), (y1, z1), (y1, z0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalBoundingBox {
    corners: [na::Point3<f64>; 8],
}

impl LocalBoundingBox {
    pub fn new(corners: [na::Point3<f64>; 8]) -> Result<Self, BBoxError> {
        if let Some(index) = corners
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(BBoxError::NonFiniteCoordinate { index });
        }
        Ok(Self { corners })
    }

    /// Collect corners from an arbitrary sequence, rejecting anything that is
    /// not exactly 8 points.
    pub fn try_from_points(
        points: impl IntoIterator<Item = impl Borrow<na::Point3<f64>>>,
    ) -> Result<Self, BBoxError> {
        let points: Vec<na::Point3<f64>> = points.into_iter().map(|p| *p.borrow()).collect();
        let found = points.len();
        let corners: [na::Point3<f64>; 8] = points
            .try_into()
            .map_err(|_| BBoxError::CornerCount { found })?;
        Self::new(corners)
    }

    /// Expand a min/max pair into the 8 box corners.
    pub fn from_min_max(
        min: na::Point3<f64>,
        max: na::Point3<f64>,
    ) -> Result<Self, BBoxError> {
        let xs = [min.x, max.x];
        let yz = [(min.y, min.z), (min.y, max.z), (max.y, max.z), (max.y, min.z)];
        let mut corners = [na::Point3::origin(); 8];
        for (i, &x) in xs.iter().enumerate() {
            for (j, &(y, z)) in yz.iter().enumerate() {
                corners[i * 4 + j] = na::Point3::new(x, y, z);
            }
        }
        Self::new(corners)
    }

    pub fn corners(&self) -> &[na::Point3<f64>; 8] {
        &self.corners
    }

    pub fn iter(&self) -> impl Iterator<Item = &na::Point3<f64>> {
        self.corners.iter()
    }
}

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBBox {
    pub min_corner: na::Point3<f64>,
    pub max_corner: na::Point3<f64>,
}

impl WorldBBox {
    pub fn extents(&self) -> na::Vector3<f64> {
        self.max_corner - self.min_corner
    }

    pub fn center(&self) -> na::Point3<f64> {
        na::center(&self.min_corner, &self.max_corner)
    }

    /// Points on the boundary count as inside.
    pub fn contains_point(&self, point: &na::Point3<f64>) -> bool {
        (0..3).all(|axis| {
            self.min_corner[axis] <= point[axis] && point[axis] <= self.max_corner[axis]
        })
    }

    /// True when the box has zero extent along at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.extents().iter().any(|&e| e == 0.0)
    }
}

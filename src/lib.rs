mod error;
pub mod report;
pub mod scene;
mod transform;
mod types;

pub use crate::error::BBoxError;
pub use crate::transform::AffineTransform;
pub use crate::types::{LocalBoundingBox, WorldBBox};

use itertools::{Itertools, MinMaxResult};
use nalgebra as na;
use noisy_float::prelude::*;
use std::borrow::Borrow;
use tracing::debug;

/// Compute the world-space axis-aligned box of an object.
///
/// All 8 local corners are moved into world space before reducing, since a
/// rotated box is generally wider than the transformed local min/max pair.
/// Fails if a transformed corner overflows to a non-finite coordinate.
pub fn compute_world_bbox(
    corners: &LocalBoundingBox,
    transform: &AffineTransform,
) -> Result<WorldBBox, BBoxError> {
    let world_corners = corners.corners().map(|corner| transform.transform_point(&corner));

    let (min_x, max_x) = axis_minmax(&world_corners, 0)?;
    let (min_y, max_y) = axis_minmax(&world_corners, 1)?;
    let (min_z, max_z) = axis_minmax(&world_corners, 2)?;

    let bbox = WorldBBox {
        min_corner: na::Point3::new(min_x, min_y, min_z),
        max_corner: na::Point3::new(max_x, max_y, max_z),
    };
    debug!(min = ?bbox.min_corner, max = ?bbox.max_corner, "computed world bbox");
    Ok(bbox)
}

/// Same as [`compute_world_bbox`], for corners that have not been validated.
pub fn compute_world_bbox_from_points(
    points: impl IntoIterator<Item = impl Borrow<na::Point3<f64>>>,
    transform: &AffineTransform,
) -> Result<WorldBBox, BBoxError> {
    let corners = LocalBoundingBox::try_from_points(points)?;
    compute_world_bbox(&corners, transform)
}

fn axis_minmax(points: &[na::Point3<f64>; 8], axis: usize) -> Result<(f64, f64), BBoxError> {
    let values: Vec<R64> = points
        .iter()
        .map(|p| Some(p[axis]).filter(|v| v.is_finite()).and_then(R64::try_new))
        .collect::<Option<_>>()
        .ok_or(BBoxError::NonFiniteWorldCoordinate { axis })?;

    match values.into_iter().minmax() {
        MinMaxResult::MinMax(min, max) => Ok((min.raw(), max.raw())),
        MinMaxResult::OneElement(v) => Ok((v.raw(), v.raw())),
        MinMaxResult::NoElements => unreachable!("a bounding box always has 8 corners"),
    }
}

use crate::error::BBoxError;
use approx::AbsDiffEq;
use nalgebra as na;

/// A 4x4 affine matrix mapping local homogeneous coordinates to world space.
///
/// The bottom row is always `[0, 0, 0, 1]`, so applying it to a point never
/// needs a perspective divide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: na::Matrix4<f64>,
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            matrix: na::Matrix4::identity(),
        }
    }

    pub fn try_from_matrix(matrix: na::Matrix4<f64>) -> Result<Self, BBoxError> {
        if !matrix.iter().all(|v| v.is_finite()) {
            return Err(BBoxError::NonFiniteTransform);
        }

        let row = [matrix[(3, 0)], matrix[(3, 1)], matrix[(3, 2)], matrix[(3, 3)]];
        let affine = row
            .iter()
            .zip([0.0, 0.0, 0.0, 1.0])
            .all(|(v, expected)| v.abs_diff_eq(&expected, f64::default_epsilon()));
        if !affine {
            return Err(BBoxError::NonAffineTransform { row });
        }

        Ok(Self { matrix })
    }

    /// Build from row-major rows, the layout hosts usually print matrices in.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Result<Self, BBoxError> {
        let matrix = na::Matrix4::from_fn(|r, c| rows[r][c]);
        Self::try_from_matrix(matrix)
    }

    pub fn from_translation(offset: na::Vector3<f64>) -> Self {
        Self {
            matrix: na::Matrix4::new_translation(&offset),
        }
    }

    /// Compose `translation * rotation * scale`, with the rotation given as XYZ
    /// Euler angles in radians (x applied first).
    pub fn from_trs(
        location: na::Vector3<f64>,
        rotation_euler: na::Vector3<f64>,
        scale: na::Vector3<f64>,
    ) -> Result<Self, BBoxError> {
        let rotation =
            na::UnitQuaternion::from_euler_angles(rotation_euler.x, rotation_euler.y, rotation_euler.z);
        let matrix = na::Matrix4::new_translation(&location)
            * rotation.to_homogeneous()
            * na::Matrix4::new_nonuniform_scaling(&scale);
        Self::try_from_matrix(matrix)
    }

    pub fn matrix(&self) -> &na::Matrix4<f64> {
        &self.matrix
    }

    /// Map a point into world space. The point is promoted to `w = 1`, so the
    /// translation column is applied along with rotation, scale and shear.
    pub fn transform_point(&self, point: &na::Point3<f64>) -> na::Point3<f64> {
        let world = self.matrix * point.to_homogeneous();
        na::Point3::new(world.x, world.y, world.z)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

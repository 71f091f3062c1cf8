//! Human-readable report of a computed box.

use crate::types::WorldBBox;
use nalgebra as na;
use std::fmt;

/// Formats a point as `<Vector (x, y, z)>` with four decimals per component.
pub struct VectorDisplay<'a>(pub &'a na::Point3<f64>);

impl fmt::Display for VectorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(f, "<Vector ({:.4}, {:.4}, {:.4})>", p.x, p.y, p.z)
    }
}

impl fmt::Display for WorldBBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min corner: {}", VectorDisplay(&self.min_corner))?;
        write!(f, "Max corner: {}", VectorDisplay(&self.max_corner))
    }
}

pub fn render(bbox: &WorldBBox) -> String {
    bbox.to_string()
}

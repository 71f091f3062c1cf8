//! Host selection context: a set of objects and which one is active.
//!
//! The host passes this in explicitly instead of the computation reading a
//! global "active object".

use crate::{compute_world_bbox, AffineTransform, BBoxError, LocalBoundingBox, WorldBBox};
use nalgebra as na;
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};
use tracing::{debug, info};

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub active_object: Option<String>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

/// One object of the scene.
///
/// The world transform is either a full `matrix_world` (row-major 4x4) or the
/// `location` / `rotation_euler` / `scale` it is built from, never both.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub bound_box: Vec<[f64; 3]>,
    #[serde(default)]
    pub matrix_world: Option<[[f64; 4]; 4]>,
    #[serde(default)]
    pub location: Option<[f64; 3]>,
    /// XYZ Euler angles in radians.
    #[serde(default)]
    pub rotation_euler: Option<[f64; 3]>,
    #[serde(default)]
    pub scale: Option<[f64; 3]>,
}

impl Scene {
    pub fn from_reader(reader: impl Read) -> Result<Self, BBoxError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BBoxError> {
        let path = path.as_ref();
        let span = tracing::span!(tracing::Level::INFO, "load_scene");
        let _enter = span.enter();

        let file = File::open(path)?;
        debug!("Reading scene from {}", path.display());
        let scene = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} object(s)", scene.objects.len());
        Ok(scene)
    }

    pub fn active(&self) -> Result<&SceneObject, BBoxError> {
        let name = self
            .active_object
            .as_deref()
            .ok_or(BBoxError::NoActiveObject)?;
        self.objects
            .iter()
            .find(|obj| obj.name == name)
            .ok_or_else(|| BBoxError::ObjectNotFound(name.to_owned()))
    }
}

impl SceneObject {
    pub fn local_bbox(&self) -> Result<LocalBoundingBox, BBoxError> {
        LocalBoundingBox::try_from_points(
            self.bound_box
                .iter()
                .map(|&[x, y, z]| na::Point3::new(x, y, z)),
        )
    }

    pub fn world_transform(&self) -> Result<AffineTransform, BBoxError> {
        let has_components =
            self.location.is_some() || self.rotation_euler.is_some() || self.scale.is_some();
        match self.matrix_world {
            Some(_) if has_components => Err(BBoxError::ConflictingTransform(self.name.clone())),
            Some(rows) => AffineTransform::from_rows(rows),
            None => AffineTransform::from_trs(
                na::Vector3::from(self.location.unwrap_or([0.0; 3])),
                na::Vector3::from(self.rotation_euler.unwrap_or([0.0; 3])),
                na::Vector3::from(self.scale.unwrap_or([1.0; 3])),
            ),
        }
    }

    pub fn world_bbox(&self) -> Result<WorldBBox, BBoxError> {
        let corners = self.local_bbox()?;
        let transform = self.world_transform()?;
        debug!(object = %self.name, "computing world bbox");
        compute_world_bbox(&corners, &transform)
    }
}

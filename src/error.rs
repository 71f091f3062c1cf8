use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BBoxError {
    #[error("expected 8 bounding box corners, found {found}")]
    CornerCount { found: usize },
    #[error("corner {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("transformed corner has a non-finite coordinate on axis {axis}")]
    NonFiniteWorldCoordinate { axis: usize },
    #[error("world transform is not affine: bottom row is {row:?}")]
    NonAffineTransform { row: [f64; 4] },
    #[error("world transform has a non-finite entry")]
    NonFiniteTransform,
    #[error("object {0} has both matrix_world and location/rotation/scale")]
    ConflictingTransform(String),
    #[error("no active object in scene")]
    NoActiveObject,
    #[error("object not found: {0}")]
    ObjectNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Unit quad carrying an embedded image

use crate::GlbError;
use crate::image::MimeType;

/// Corners in order bottom-left, bottom-right, top-right, top-left
pub const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

pub const QUAD_NORMALS: [[f32; 3]; 4] = [[0.0, 0.0, 1.0]; 4];

/// Image rows run top-down, so the bottom edge samples V = 1
pub const QUAD_TEXCOORDS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Two counter-clockwise triangles seen from +Z
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Image bytes to be shown on the quad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneDescription {
    image_bytes: Vec<u8>,
    mime_type: MimeType,
}

impl PlaneDescription {
    /// Wrap already-encoded image bytes. The bytes are never decoded.
    pub fn new(image_bytes: Vec<u8>, mime_type: MimeType) -> Result<Self, GlbError> {
        if image_bytes.is_empty() {
            return Err(GlbError::InvalidInput("image payload is empty".to_string()));
        }
        Ok(Self {
            image_bytes,
            mime_type,
        })
    }

    pub fn image_bytes(&self) -> &[u8] {
        &self.image_bytes
    }

    pub fn mime_type(&self) -> MimeType {
        self.mime_type
    }
}

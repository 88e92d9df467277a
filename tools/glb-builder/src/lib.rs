//! GLB container encoder for the AR Fruits placeholder models
//!
//! Builder-pattern APIs for constructing GLB files:
//! - BufferBuilder: Pack binary data with automatic alignment
//! - MeshBuilder: High-level mesh construction
//! - GltfBuilder: Top-level GLTF document construction
//! - MeshDescription / PlaneDescription: the two model kinds, fed to `encode`
//!
//! # Example
//!
//! ```no_run
//! use glb_builder::*;
//!
//! let apple = MeshDescription::sphere(0.5, 16, 12, [0.8, 0.1, 0.1])?;
//! let glb_bytes = encode(&ModelDescription::Sphere(apple))?;
//! std::fs::write("apple.glb", glb_bytes).unwrap();
//! # Ok::<(), GlbError>(())
//! ```

pub mod buffer;
pub mod document;
pub mod encode;
pub mod error;
pub mod image;
pub mod material;
pub mod mesh;
pub mod plane;
pub mod sphere;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use encode::{ModelDescription, encode, encode_plane, encode_sphere};
pub use error::GlbError;
pub use image::{MimeType, SUPPORTED_IMAGE_EXTENSIONS, extension_to_mime};
pub use mesh::{IndexPlacement, MeshAccessors, MeshBuilder};
pub use plane::PlaneDescription;
pub use sphere::MeshDescription;
pub use utils::{align_buffer, assemble_glb, compute_bounds};

// Re-export commonly used gltf-json types
pub use gltf_json as json;

//! Encoding model descriptions into GLB bytes

use crate::material::{embedded_image, linear_clamp_sampler, solid_material, textured_material};
use crate::mesh::IndexPlacement;
use crate::plane::{QUAD_INDICES, QUAD_NORMALS, QUAD_POSITIONS, QUAD_TEXCOORDS};
use crate::{
    BufferBuilder, GlbError, GltfBuilder, MeshBuilder, MeshDescription, PlaneDescription,
    assemble_glb,
};
use tracing::debug;

/// `asset.generator` of sphere models
pub const SPHERE_GENERATOR: &str = "AR Fruits Generator";
/// `asset.generator` of image plane models
pub const PLANE_GENERATOR: &str = "AR Image Viewer";

const SPHERE_METALLIC: f32 = 0.0;
const SPHERE_ROUGHNESS: f32 = 0.7;
const PLANE_METALLIC: f32 = 0.0;
const PLANE_ROUGHNESS: f32 = 1.0;

/// Anything the encoder can turn into a GLB
#[derive(Debug, Clone, PartialEq)]
pub enum ModelDescription {
    Sphere(MeshDescription),
    Plane(PlaneDescription),
}

impl From<MeshDescription> for ModelDescription {
    fn from(mesh: MeshDescription) -> Self {
        ModelDescription::Sphere(mesh)
    }
}

impl From<PlaneDescription> for ModelDescription {
    fn from(plane: PlaneDescription) -> Self {
        ModelDescription::Plane(plane)
    }
}

/// Serialize a description into a self-contained GLB.
///
/// Output is a pure function of the input: encoding the same description
/// twice gives identical bytes.
pub fn encode(description: &ModelDescription) -> Result<Vec<u8>, GlbError> {
    match description {
        ModelDescription::Sphere(mesh) => encode_sphere(mesh),
        ModelDescription::Plane(plane) => encode_plane(plane),
    }
}

/// Sphere layout: indices (padded), positions, normals
pub fn encode_sphere(mesh: &MeshDescription) -> Result<Vec<u8>, GlbError> {
    let mut buffer = BufferBuilder::new();
    let accessors = MeshBuilder::new()
        .positions(mesh.positions())
        .normals(mesh.normals())
        .indices(mesh.indices())
        .index_placement(IndexPlacement::Leading)
        .build(&mut buffer);

    let gltf = GltfBuilder::new()
        .buffer_byte_length(buffer.data().len() as u64)
        .add_material(solid_material(
            "FruitMaterial",
            mesh.base_color(),
            SPHERE_METALLIC,
            SPHERE_ROUGHNESS,
        ));
    let material = gltf.last_material_index();
    let gltf = gltf.add_mesh_from_accessors("FruitSphere", &accessors, material);
    let mesh_index = gltf.last_mesh_index().ok_or_else(missing_mesh)?;
    let root = gltf
        .add_mesh_node("Fruit", mesh_index)
        .add_scene("Scene", &[0])
        .build(buffer.views(), buffer.accessors(), SPHERE_GENERATOR);

    debug!(
        vertices = mesh.positions().len(),
        indices = mesh.indices().len(),
        bin_bytes = buffer.data().len(),
        "encoded sphere"
    );
    assemble_glb(&root, buffer.data())
}

/// Plane layout: positions, normals, texcoords, indices, image bytes
pub fn encode_plane(plane: &PlaneDescription) -> Result<Vec<u8>, GlbError> {
    let mut buffer = BufferBuilder::new();
    let accessors = MeshBuilder::new()
        .positions(&QUAD_POSITIONS)
        .normals(&QUAD_NORMALS)
        .uvs(&QUAD_TEXCOORDS)
        .indices(&QUAD_INDICES)
        .index_placement(IndexPlacement::Trailing)
        .build(&mut buffer);
    let image_view = buffer.pack_bytes(plane.image_bytes());

    let gltf = GltfBuilder::new()
        .buffer_byte_length(buffer.data().len() as u64)
        .add_texture(
            embedded_image(image_view, plane.mime_type()),
            linear_clamp_sampler(),
        );
    let texture = gltf.last_texture_index().ok_or_else(missing_texture)?;
    let gltf = gltf.add_material(textured_material(
        "ImageMaterial",
        texture,
        PLANE_METALLIC,
        PLANE_ROUGHNESS,
        true,
    ));
    let material = gltf.last_material_index();
    let gltf = gltf.add_mesh_from_accessors("Plane", &accessors, material);
    let mesh_index = gltf.last_mesh_index().ok_or_else(missing_mesh)?;
    let root = gltf
        .add_mesh_node("ImagePlane", mesh_index)
        .add_scene("Scene", &[0])
        .build(buffer.views(), buffer.accessors(), PLANE_GENERATOR);

    debug!(
        image_bytes = plane.image_bytes().len(),
        mime = %plane.mime_type(),
        "encoded image plane"
    );
    assemble_glb(&root, buffer.data())
}

fn missing_mesh() -> GlbError {
    GlbError::InvalidInput("document has no mesh".to_string())
}

fn missing_texture() -> GlbError {
    GlbError::InvalidInput("document has no texture".to_string())
}

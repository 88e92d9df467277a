//! GLTF document construction

use crate::MeshAccessors;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Builder for complete GLTF documents
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    materials: Vec<json::Material>,
    images: Vec<json::Image>,
    samplers: Vec<json::texture::Sampler>,
    textures: Vec<json::Texture>,
    scenes: Vec<json::Scene>,
    buffer_byte_length: u64,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
            images: Vec::new(),
            samplers: Vec::new(),
            textures: Vec::new(),
            scenes: Vec::new(),
            buffer_byte_length: 0,
        }
    }

    /// Set buffer byte length (required before building)
    pub fn buffer_byte_length(mut self, length: u64) -> Self {
        self.buffer_byte_length = length;
        self
    }

    /// Add a named node that instances `mesh`
    pub fn add_mesh_node(mut self, name: &str, mesh: json::Index<json::Mesh>) -> Self {
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(mesh),
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation: None,
            weights: None,
        });
        self
    }

    /// Add a material
    pub fn add_material(mut self, material: json::Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Get the index of the last added material
    pub fn last_material_index(&self) -> Option<json::Index<json::Material>> {
        last_index(&self.materials)
    }

    /// Add an image, the sampler it is read through and the texture tying them together
    pub fn add_texture(mut self, image: json::Image, sampler: json::texture::Sampler) -> Self {
        self.images.push(image);
        self.samplers.push(sampler);
        self.textures.push(json::Texture {
            name: None,
            sampler: Some(json::Index::new(self.samplers.len() as u32 - 1)),
            source: json::Index::new(self.images.len() as u32 - 1),
            extensions: Default::default(),
            extras: Default::default(),
        });
        self
    }

    /// Get the index of the last added texture
    pub fn last_texture_index(&self) -> Option<json::Index<json::Texture>> {
        last_index(&self.textures)
    }

    /// Add a mesh with one triangle-list primitive
    pub fn add_mesh_from_accessors(
        mut self,
        name: &str,
        accessors: &MeshAccessors,
        material: Option<json::Index<json::Material>>,
    ) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            accessors.positions.as_json_index(),
        );

        if let Some(normals) = accessors.normals {
            attributes.insert(
                Valid(json::mesh::Semantic::Normals),
                normals.as_json_index(),
            );
        }

        if let Some(uvs) = accessors.uvs {
            attributes.insert(
                Valid(json::mesh::Semantic::TexCoords(0)),
                uvs.as_json_index(),
            );
        }

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: accessors.indices.map(|i| i.as_json_index()),
            material,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });

        self
    }

    /// Get the index of the last added mesh
    pub fn last_mesh_index(&self) -> Option<json::Index<json::Mesh>> {
        last_index(&self.meshes)
    }

    /// Add a scene
    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Build final GLTF Root (requires buffer views and accessors from BufferBuilder)
    pub fn build(
        self,
        buffer_views: &[json::buffer::View],
        accessors: &[json::Accessor],
        generator: &str,
    ) -> json::Root {
        let buffers = vec![json::Buffer {
            byte_length: self.buffer_byte_length.into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }];

        json::Root {
            accessors: accessors.to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer_views.to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: self.images,
            materials: self.materials,
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: self.samplers,
            scene: if self.scenes.is_empty() {
                None
            } else {
                Some(json::Index::new(0))
            },
            scenes: self.scenes,
            skins: Vec::new(),
            textures: self.textures,
        }
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn last_index<T>(items: &[T]) -> Option<json::Index<T>> {
    if items.is_empty() {
        None
    } else {
        Some(json::Index::new(items.len() as u32 - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{embedded_image, linear_clamp_sampler, solid_material};
    use crate::{BufferBuilder, MeshBuilder, MimeType};

    #[test]
    fn test_gltf_builder_basic() {
        let mut buffer = BufferBuilder::new();
        let mesh = MeshBuilder::new()
            .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
            .indices(&[0, 1, 2])
            .build(&mut buffer);

        let gltf = GltfBuilder::new()
            .buffer_byte_length(buffer.data().len() as u64)
            .add_material(solid_material("Red", [1.0, 0.0, 0.0], 0.0, 0.5));
        let material = gltf.last_material_index();
        let gltf = gltf.add_mesh_from_accessors("Triangle", &mesh, material);
        let mesh_index = gltf.last_mesh_index().unwrap();
        let gltf = gltf
            .add_mesh_node("Triangle", mesh_index)
            .add_scene("Scene", &[0]);

        let root = gltf.build(buffer.views(), buffer.accessors(), "test");

        assert_eq!(root.meshes.len(), 1);
        assert_eq!(root.nodes.len(), 1);
        assert_eq!(root.materials.len(), 1);
        assert_eq!(root.scenes.len(), 1);
        assert_eq!(root.scene.map(|s| s.value()), Some(0));
        assert_eq!(root.asset.version, "2.0");
        assert_eq!(root.meshes[0].primitives[0].material.map(|m| m.value()), Some(0));
    }

    #[test]
    fn test_texture_links_image_and_sampler() {
        let mut buffer = BufferBuilder::new();
        let view = buffer.pack_bytes(&[1, 2, 3, 4]);
        let gltf = GltfBuilder::new()
            .add_texture(embedded_image(view, MimeType::Png), linear_clamp_sampler());

        assert_eq!(gltf.last_texture_index().map(|t| t.value()), Some(0));
        let root = gltf.build(buffer.views(), buffer.accessors(), "test");
        assert_eq!(root.images.len(), 1);
        assert_eq!(root.samplers.len(), 1);
        assert_eq!(root.textures[0].source.value(), 0);
        assert_eq!(root.textures[0].sampler.map(|s| s.value()), Some(0));
    }
}

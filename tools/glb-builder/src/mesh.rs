//! High-level mesh construction

use crate::buffer::{AccessorIndex, BufferBuilder};

/// Accessor indices for a mesh
#[derive(Debug, Clone)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub normals: Option<AccessorIndex>,
    pub uvs: Option<AccessorIndex>,
    pub indices: Option<AccessorIndex>,
}

/// Where the index buffer sits relative to the vertex attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPlacement {
    /// Indices, padding, then positions/normals/uvs
    Leading,
    /// Positions/normals/uvs, then indices
    #[default]
    Trailing,
}

/// Builder for mesh data
pub struct MeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    uvs: Option<Vec<[f32; 2]>>,
    indices: Option<Vec<u16>>,
    placement: IndexPlacement,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: None,
            uvs: None,
            indices: None,
            placement: IndexPlacement::default(),
        }
    }

    /// Set positions (required)
    pub fn positions(mut self, positions: &[[f32; 3]]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Set normals (optional)
    pub fn normals(mut self, normals: &[[f32; 3]]) -> Self {
        self.normals = Some(normals.to_vec());
        self
    }

    /// Set UVs (optional)
    pub fn uvs(mut self, uvs: &[[f32; 2]]) -> Self {
        self.uvs = Some(uvs.to_vec());
        self
    }

    /// Set indices (optional)
    pub fn indices(mut self, indices: &[u16]) -> Self {
        self.indices = Some(indices.to_vec());
        self
    }

    /// Choose whether indices are packed before or after the attributes
    pub fn index_placement(mut self, placement: IndexPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Build and pack into buffer
    pub fn build(self, buffer: &mut BufferBuilder) -> MeshAccessors {
        let mut indices = None;
        if self.placement == IndexPlacement::Leading {
            indices = self.non_empty_indices().map(|i| buffer.pack_indices_u16(i));
        }

        let positions = buffer.pack_positions(&self.positions);
        let normals = self.normals.as_ref().map(|n| buffer.pack_vec3(n));
        let uvs = self.uvs.as_ref().map(|uv| buffer.pack_vec2(uv));

        if self.placement == IndexPlacement::Trailing {
            indices = self.non_empty_indices().map(|i| buffer.pack_indices_u16(i));
        }

        MeshAccessors {
            positions,
            normals,
            uvs,
            indices,
        }
    }
}

impl MeshBuilder {
    /// An empty index list is dropped: glTF requires a non-zero accessor count
    fn non_empty_indices(&self) -> Option<&[u16]> {
        self.indices.as_deref().filter(|i| !i.is_empty())
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];

    #[test]
    fn test_mesh_builder_trailing_indices() {
        let mut buffer = BufferBuilder::new();
        let mesh = MeshBuilder::new()
            .positions(&TRIANGLE)
            .normals(&[[0.0, 0.0, 1.0]; 3])
            .indices(&[0, 1, 2])
            .build(&mut buffer);

        assert_eq!(mesh.positions, AccessorIndex(0));
        assert_eq!(mesh.normals, Some(AccessorIndex(1)));
        assert_eq!(mesh.indices, Some(AccessorIndex(2)));
        assert!(mesh.uvs.is_none());
    }

    #[test]
    fn test_mesh_builder_leading_indices() {
        let mut buffer = BufferBuilder::new();
        let mesh = MeshBuilder::new()
            .positions(&TRIANGLE)
            .normals(&[[0.0, 0.0, 1.0]; 3])
            .indices(&[0, 1, 2])
            .index_placement(IndexPlacement::Leading)
            .build(&mut buffer);

        assert_eq!(mesh.indices, Some(AccessorIndex(0)));
        assert_eq!(mesh.positions, AccessorIndex(1));
        assert_eq!(mesh.normals, Some(AccessorIndex(2)));
        // 6 index bytes + 2 padding, then 36 + 36 attribute bytes
        assert_eq!(buffer.data().len(), 8 + 36 + 36);
    }

    #[test]
    fn test_empty_indices_are_skipped() {
        for placement in [IndexPlacement::Leading, IndexPlacement::Trailing] {
            let mut buffer = BufferBuilder::new();
            let mesh = MeshBuilder::new()
                .positions(&TRIANGLE)
                .indices(&[])
                .index_placement(placement)
                .build(&mut buffer);

            assert!(mesh.indices.is_none());
            assert_eq!(mesh.positions, AccessorIndex(0));
            assert_eq!(buffer.views().len(), 1);
            assert_eq!(buffer.accessor_count(), 1);
        }
    }
}

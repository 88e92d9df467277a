//! Low-level buffer packing with automatic alignment and accessor creation

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Builder for the single binary buffer of a GLB.
///
/// Every pack call appends data, records a buffer view whose offset is
/// relative to the start of the buffer, and pads the buffer to a 4-byte
/// boundary before returning.
///
/// Byte order is always little-endian (`to_le_bytes`), whatever the host.
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Get the current accessor count
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack Vec3 positions with bounds calculation
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_floats(
            positions.iter().flatten(),
            Some(json::buffer::Target::ArrayBuffer),
        );
        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some((min, max)),
        )
    }

    /// Pack Vec3 data (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_floats(data.iter().flatten(), Some(json::buffer::Target::ArrayBuffer));
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            None,
        )
    }

    /// Pack Vec2 data (texture coordinates)
    pub fn pack_vec2(&mut self, data: &[[f32; 2]]) -> AccessorIndex {
        let view = self.push_floats(data.iter().flatten(), Some(json::buffer::Target::ArrayBuffer));
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec2,
            None,
        )
    }

    /// Pack u16 indices
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }
        let view = self.push_view(
            offset,
            Some(json::buffer::Target::ElementArrayBuffer),
        );
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            None,
        )
    }

    /// Append opaque bytes (an embedded image) and return their buffer view.
    ///
    /// The bytes are copied verbatim; no accessor is created.
    pub fn pack_bytes(&mut self, bytes: &[u8]) -> json::Index<json::buffer::View> {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytes);
        self.push_view(offset, None)
    }

    fn push_floats<'a>(
        &mut self,
        values: impl Iterator<Item = &'a f32>,
        target: Option<json::buffer::Target>,
    ) -> json::Index<json::buffer::View> {
        let offset = self.buffer.len();
        for value in values {
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
        self.push_view(offset, target)
    }

    /// Record a view spanning `offset..len`, then pad for the next view
    fn push_view(
        &mut self,
        offset: usize,
        target: Option<json::buffer::Target>,
    ) -> json::Index<json::buffer::View> {
        let length = self.buffer.len() - offset;
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: length.into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: target.map(Valid),
        });

        align_buffer(&mut self.buffer);
        json::Index::new(self.views.len() as u32 - 1)
    }

    fn push_accessor(
        &mut self,
        view: json::Index<json::buffer::View>,
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        bounds: Option<(Vec<f32>, Vec<f32>)>,
    ) -> AccessorIndex {
        let (min, max) = match bounds {
            Some((min, max)) => (
                Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            ),
            None => (None, None),
        };

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });
        AccessorIndex(accessor_idx)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_range(builder: &BufferBuilder, view: usize) -> (u64, u64) {
        let view = &builder.views()[view];
        (view.byte_offset.unwrap().0, view.byte_length.0)
    }

    #[test]
    fn test_buffer_builder_positions() {
        let mut builder = BufferBuilder::new();
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];
        let idx = builder.pack_positions(&positions);

        assert_eq!(idx, AccessorIndex(0));
        assert_eq!(builder.accessor_count(), 1);
        assert_eq!(builder.views().len(), 1);
        // 3 positions * 12 bytes = 36 bytes, already aligned
        assert_eq!(builder.data().len(), 36);
        assert!(builder.accessors()[0].min.is_some());
    }

    #[test]
    fn test_indices_are_padded_before_next_view() {
        let mut builder = BufferBuilder::new();
        builder.pack_indices_u16(&[0, 1, 2]);
        builder.pack_vec3(&[[0.0, 0.0, 1.0]]);

        // 3 indices * 2 bytes = 6 bytes, padded to 8
        assert_eq!(view_range(&builder, 0), (0, 6));
        assert_eq!(view_range(&builder, 1), (8, 12));
        assert_eq!(&builder.data()[..8], &[0, 0, 1, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_floats_are_little_endian() {
        let mut builder = BufferBuilder::new();
        builder.pack_vec2(&[[1.0, -2.0]]);
        assert_eq!(&builder.data()[..4], &1.0f32.to_le_bytes());
        assert_eq!(&builder.data()[4..8], &(-2.0f32).to_le_bytes());
    }

    #[test]
    fn test_pack_bytes_keeps_payload_verbatim() {
        let mut builder = BufferBuilder::new();
        builder.pack_indices_u16(&[0, 1, 2, 0, 2, 3]);
        let view = builder.pack_bytes(&[9, 8, 7, 6, 5]);

        assert_eq!(view.value(), 1);
        assert_eq!(builder.accessor_count(), 1);
        assert!(builder.views()[1].target.is_none());
        assert_eq!(view_range(&builder, 1), (12, 5));
        assert_eq!(&builder.data()[12..17], &[9, 8, 7, 6, 5]);
        assert_eq!(builder.data().len(), 20);
    }
}

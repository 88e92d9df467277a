//! Utility functions for GLB construction

use crate::GlbError;
use gltf_json as json;

/// `glTF` read as a little-endian u32
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// Container version written into the header
pub const GLB_VERSION: u32 = 2;
/// Chunk type of the structural (JSON) chunk
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// Chunk type of the binary buffer chunk
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Size of the file header (magic, version, length)
pub const HEADER_LEN: usize = 12;
/// Size of each chunk header (length, type)
pub const CHUNK_HEADER_LEN: usize = 8;

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Number of bytes needed to bring `len` up to a multiple of 4
pub fn padding_for(len: usize) -> usize {
    (4 - (len % 4)) % 4
}

/// Align buffer to 4-byte boundary with zero bytes
pub fn align_buffer(buffer: &mut Vec<u8>) {
    buffer.resize(buffer.len() + padding_for(buffer.len()), 0);
}

/// Assemble GLB binary from a glTF document and its buffer data.
///
/// The JSON chunk is padded with spaces and the BIN chunk with zeros, both to
/// a multiple of 4 bytes. The header length covers the whole file.
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>, GlbError> {
    let json_string = json::serialize::to_string(root)?;
    let json_bytes = json_string.as_bytes();

    let json_padding = padding_for(json_bytes.len());
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = padding_for(buffer_data.len());
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length =
        HEADER_LEN + CHUNK_HEADER_LEN + json_chunk_length + CHUNK_HEADER_LEN + buffer_chunk_length;
    let total_u32 = u32::try_from(total_length).map_err(|_| GlbError::TooLarge(total_length))?;

    let mut glb = Vec::with_capacity(total_length);

    // Header
    glb.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_u32.to_le_bytes());

    // JSON chunk
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.extend(std::iter::repeat_n(0x20u8, json_padding));

    // BIN chunk
    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.extend(std::iter::repeat_n(0u8, buffer_padding));

    debug_assert_eq!(glb.len(), total_length);
    Ok(glb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_root() -> json::Root {
        json::Root {
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some("test".to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_bounds_simple() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]];
        let (min, max) = compute_bounds(&positions);
        assert_eq!(min, vec![-1.0, -2.0, -3.0]);
        assert_eq!(max, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_align_buffer() {
        let mut buffer = vec![1, 2, 3];
        align_buffer(&mut buffer);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut buffer2 = vec![1, 2, 3, 4];
        align_buffer(&mut buffer2);
        assert_eq!(buffer2.len(), 4);
    }

    #[test]
    fn test_magic_spells_gltf() {
        assert_eq!(&GLB_MAGIC.to_le_bytes(), b"glTF");
        assert_eq!(&CHUNK_JSON.to_le_bytes(), b"JSON");
        assert_eq!(&CHUNK_BIN.to_le_bytes(), b"BIN\0");
    }

    #[test]
    fn test_assemble_pads_both_chunks() {
        let glb = assemble_glb(&empty_root(), &[1, 2, 3, 4, 5]).unwrap();

        let total = u32::from_le_bytes(glb[8..12].try_into().unwrap()) as usize;
        assert_eq!(total, glb.len());

        let json_len = u32::from_le_bytes(glb[12..16].try_into().unwrap()) as usize;
        assert_eq!(json_len % 4, 0);
        let json_end = 20 + json_len;
        assert!(glb[20..json_end].ends_with(b"}") || glb[json_end - 1] == b' ');

        let bin_len = u32::from_le_bytes(glb[json_end..json_end + 4].try_into().unwrap()) as usize;
        assert_eq!(bin_len, 8);
        assert_eq!(&glb[json_end + 8..], &[1, 2, 3, 4, 5, 0, 0, 0]);
    }
}

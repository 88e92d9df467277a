//! Material, texture and sampler records

use crate::image::MimeType;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Untextured PBR material with a constant base colour
pub fn solid_material(name: &str, rgb: [f32; 3], metallic: f32, roughness: f32) -> json::Material {
    json::Material {
        name: Some(name.to_string()),
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor([rgb[0], rgb[1], rgb[2], 1.0]),
            metallic_factor: json::material::StrengthFactor(metallic),
            roughness_factor: json::material::StrengthFactor(roughness),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// PBR material sampling its base colour from `texture`
pub fn textured_material(
    name: &str,
    texture: json::Index<json::Texture>,
    metallic: f32,
    roughness: f32,
    double_sided: bool,
) -> json::Material {
    json::Material {
        name: Some(name.to_string()),
        double_sided,
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_texture: Some(json::texture::Info {
                index: texture,
                tex_coord: 0,
                extensions: Default::default(),
                extras: Default::default(),
            }),
            metallic_factor: json::material::StrengthFactor(metallic),
            roughness_factor: json::material::StrengthFactor(roughness),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Image stored inside the BIN chunk at `view`
pub fn embedded_image(view: json::Index<json::buffer::View>, mime_type: MimeType) -> json::Image {
    json::Image {
        buffer_view: Some(view),
        mime_type: Some(json::image::MimeType(mime_type.as_str().to_string())),
        name: None,
        uri: None,
        extensions: Default::default(),
        extras: Default::default(),
    }
}

/// Bilinear (trilinear when mipmapped) sampler clamped at the edges
pub fn linear_clamp_sampler() -> json::texture::Sampler {
    json::texture::Sampler {
        mag_filter: Some(Valid(json::texture::MagFilter::Linear)),
        min_filter: Some(Valid(json::texture::MinFilter::LinearMipmapLinear)),
        name: None,
        wrap_s: Valid(json::texture::WrappingMode::ClampToEdge),
        wrap_t: Valid(json::texture::WrappingMode::ClampToEdge),
        extensions: Default::default(),
        extras: Default::default(),
    }
}

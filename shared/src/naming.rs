//! Helpers for turning asset file names into ids and display names.

use std::path::Path;

/// File name without its final extension.
///
/// Dotfiles keep their leading dot: `".hidden"` stays `".hidden"`.
pub fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

/// Lower-cased final extension without the dot, if any.
pub fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Stable manifest id for a model file.
///
/// Rules:
/// - Extension is dropped
/// - Lower-cased
/// - `-` and whitespace become `_`
pub fn model_id(file_name: &str) -> String {
    file_stem(file_name)
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Human-readable name for a model file.
///
/// `"delicious_shawarma.glb"` becomes `"Delicious Shawarma"`: separators turn
/// into spaces and the first letter of every word is upper-cased. Letters that
/// are already upper-case elsewhere are left alone.
pub fn format_display_name(file_name: &str) -> String {
    let mut out = String::with_capacity(file_name.len());
    let mut at_word_start = true;

    for c in file_stem(file_name).chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

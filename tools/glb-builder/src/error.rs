//! Error type shared by every encoder entry point

/// Reasons an encode can fail.
///
/// IO is not represented here: the encoder never touches storage, callers
/// report their own read/write failures.
#[derive(Debug, thiserror::Error)]
pub enum GlbError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported asset kind: {0}")]
    UnsupportedAssetKind(String),

    #[error("failed to serialize glTF JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("container of {0} bytes exceeds the 32-bit GLB length field")]
    TooLarge(usize),
}

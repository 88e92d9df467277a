//! Shared types for the AR Fruits tools: the fruit catalog, per-session
//! selection, device detection and the model manifest format.

pub mod catalog;
pub mod device;
pub mod manifest;
pub mod naming;
pub mod session;

pub use catalog::{FRUITS, Fruit};
pub use device::DeviceProfile;
pub use manifest::{
    CARD_PALETTE, DirEntryInfo, ImageEntry, MODEL_EXTENSIONS, ManifestEntry, ManifestError,
    render_manifest_js, scan,
};
pub use naming::{format_display_name, model_id};
pub use session::{FRUIT_SESSION_KEY, FruitSession, MemoryStorage, SessionError, SessionStorage};

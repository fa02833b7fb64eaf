//! libgphoto2 FFI surface: struct mirrors and runtime library access

pub mod library;
pub mod types;

pub use library::library_version;
pub use types::{CameraAbilities, CameraFilePath, CameraText};

//! `#[repr(C)]` mirrors of the libgphoto2 structures the probe measures
//!
//! Layouts follow the libgphoto2 2.5 headers. Enum typedefs are C `int`
//! sized, so they are kept as `c_int` aliases. Whether these mirrors match
//! the installed headers is what `gphoto2-sizes check` answers.

use libc::{c_char, c_int};

/// Longest summary/manual/about text a driver may return
pub const CAMERA_TEXT_LEN: usize = 32 * 1024;

/// Length of the model, name and similar short string fields
pub const SHORT_STRING_LEN: usize = 128;

/// Length of folder, library and id path fields
pub const PATH_STRING_LEN: usize = 1024;

/// Number of entries in `CameraAbilities::speed`
pub const SPEED_SLOTS: usize = 64;

pub type CameraDriverStatus = c_int;
pub type GPPortType = c_int;
pub type CameraOperation = c_int;
pub type CameraFileOperation = c_int;
pub type CameraFolderOperation = c_int;
pub type GphotoDeviceType = c_int;

pub type GPVersionVerbosity = c_int;
pub const GP_VERSION_SHORT: GPVersionVerbosity = 0;

/// Static description of what a camera driver supports
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CameraAbilities {
    pub model: [c_char; SHORT_STRING_LEN],
    pub status: CameraDriverStatus,

    pub port: GPPortType,
    pub speed: [c_int; SPEED_SLOTS],

    pub operations: CameraOperation,
    pub file_operations: CameraFileOperation,
    pub folder_operations: CameraFolderOperation,

    pub usb_vendor: c_int,
    pub usb_product: c_int,
    pub usb_class: c_int,
    pub usb_subclass: c_int,
    pub usb_protocol: c_int,

    pub library: [c_char; PATH_STRING_LEN],
    pub id: [c_char; PATH_STRING_LEN],

    pub device_type: GphotoDeviceType,

    pub reserved2: c_int,
    pub reserved3: c_int,
    pub reserved4: c_int,
    pub reserved5: c_int,
    pub reserved6: c_int,
    pub reserved7: c_int,
    pub reserved8: c_int,
}

/// Free-form text returned by summary, manual and about calls
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CameraText {
    pub text: [c_char; CAMERA_TEXT_LEN],
}

/// Location of a file on the camera, as returned by capture
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CameraFilePath {
    pub name: [c_char; SHORT_STRING_LEN],
    pub folder: [c_char; PATH_STRING_LEN],
}

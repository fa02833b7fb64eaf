//! Runtime access to the installed libgphoto2, used to name the native
//! version a layout check ran against.

use std::ffi::CStr;

use libc::c_char;
use libloading::{Library, Symbol};

use super::types::{GPVersionVerbosity, GP_VERSION_SHORT};
use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};

pub type GpLibraryVersionFn = unsafe extern "C" fn(GPVersionVerbosity) -> *const *const c_char;

const VERSION_SYMBOL: &str = "gp_library_version";

/// Version strings reported by `gp_library_version(GP_VERSION_SHORT)`.
/// The first entry is the library version, the rest are build options.
pub fn library_version(config: &ProbeConfig) -> ProbeResult<Vec<String>> {
    let library = unsafe {
        Library::new(&config.library).map_err(|e| ProbeError::LibraryUnavailable {
            library: config.library.clone(),
            reason: e.to_string(),
        })?
    };

    let version_fn: Symbol<GpLibraryVersionFn> = unsafe {
        library.get(b"gp_library_version\0").map_err(|e| ProbeError::SymbolMissing {
            symbol: VERSION_SYMBOL,
            reason: e.to_string(),
        })?
    };

    // SAFETY: the symbol has the `gp_library_version` signature from
    // gphoto2-version.h, and `library` outlives the call
    let table = unsafe { version_fn(GP_VERSION_SHORT) };
    // SAFETY: libgphoto2 returns a static NULL-terminated array of C strings
    let strings = unsafe { collect_strings(table) };

    log::debug!("[library] {} reports {:?}", config.library, strings);
    Ok(strings)
}

/// Collect a NULL-terminated `const char **` into owned strings.
///
/// # Safety
/// `table` must be null or point to a NULL-terminated array of valid
/// NUL-terminated strings that outlive this call.
unsafe fn collect_strings(table: *const *const c_char) -> Vec<String> {
    let mut strings = Vec::new();
    if table.is_null() {
        return strings;
    }

    let mut cursor = table;
    while !(*cursor).is_null() {
        strings.push(CStr::from_ptr(*cursor).to_string_lossy().into_owned());
        cursor = cursor.add(1);
    }
    strings
}

//! The C ABI surface of the library.
//!
//! A foreign runtime loads the `cdylib`, looks up `system_access` by name and
//! calls it with a C string. See `include/ffi_system_access.h`.

#![allow(unsafe_code)]

use crate::system::executor;
use std::ffi::{c_char, c_int};

/// Executes `command` in the host's command interpreter and returns the
/// interpreter's raw status.
///
/// The string is not checked or changed in any way. The call blocks until the
/// interpreter exits; there is no timeout.
///
/// # Safety
/// `command` must be null or point to a NUL-terminated byte sequence owned by
/// the caller and valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn system_access(command: *const c_char) -> c_int {
    // SAFETY: forwarded under the same contract.
    unsafe { executor::execute_raw(command) }
}

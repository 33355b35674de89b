// src/system/executor.rs

//! Hands command strings to the platform's synchronous command facility.

use crate::system::status::ShellStatus;
use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use thiserror::Error;

/// Errors raised on the Rust side before a command reaches the shell.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command contains a NUL byte.
    #[error("Command '{command}' contains a NUL byte at position {position} and cannot be passed to the shell.")]
    InteriorNul {
        /// The rejected command.
        command: String,
        /// Byte offset of the first NUL.
        position: usize,
    },
}

/// Hands `command` to the platform's command facility exactly as given and
/// returns whatever it returns.
///
/// Nothing is inspected on the way: no null check, no length limit, no
/// filtering. A null pointer gets the facility's own null semantics, which on
/// every supported platform is "report whether a shell exists".
///
/// # Safety
/// `command` must be null or point to a NUL-terminated byte sequence that stays
/// valid until this call returns.
#[allow(unsafe_code)]
pub unsafe fn execute_raw(command: *const c_char) -> c_int {
    // SAFETY: the caller upholds the pointer contract above.
    let raw = unsafe { libc::system(command) };
    let status = ShellStatus::from_raw(raw);
    if status.launch_failed() {
        log::warn!("The system command facility could not start an interpreter.");
    } else {
        log::debug!("System shell returned: {}", status);
    }
    raw
}

/// Runs `command` in the system shell and blocks until it finishes.
#[allow(unsafe_code)]
pub fn execute(command: &CStr) -> ShellStatus {
    log::debug!("Handing command to the system shell: {:?}", command);
    // SAFETY: a `CStr` is NUL-terminated and borrowed for the whole call.
    ShellStatus::from_raw(unsafe { execute_raw(command.as_ptr()) })
}

/// Like [`execute`], for Rust strings.
///
/// # Errors
/// Returns [`CommandError::InteriorNul`] if `command` contains a NUL byte,
/// which a C string cannot carry. Nothing is executed in that case.
pub fn execute_str(command: &str) -> Result<ShellStatus, CommandError> {
    let c_command = CString::new(command).map_err(|e| CommandError::InteriorNul {
        command: command.to_string(),
        position: e.nul_position(),
    })?;
    Ok(execute(&c_command))
}

/// Asks the platform whether a command interpreter is available.
#[allow(unsafe_code)]
pub fn shell_available() -> bool {
    log::debug!("Asking the system whether a command interpreter exists.");
    // SAFETY: a null command is the documented availability query.
    unsafe { execute_raw(ptr::null()) != 0 }
}

// src/constants.rs

//! Fixed names shared by the library, the binary and the C header.

/// The name under which the executor is exported from the dynamic library.
/// Must match `ffi::system_access` and `include/ffi_system_access.h`.
pub const EXPORTED_SYMBOL: &str = "system_access";

/// Commands run by the demonstration binary when none are given.
/// They hide the terminal cursor and turn off input echo.
pub const DEMO_COMMANDS: &[&str] = &["tput civis", "stty -echo"];

/// The status the platform facility reports when it could not start an interpreter.
pub const LAUNCH_FAILURE_STATUS: i32 = -1;

//! # ffi_system_access
//!
//! A native shim that exposes one C-ABI function, [`ffi::system_access`], which
//! hands a command string to the host's command interpreter and returns the
//! interpreter's raw status.
//!
//! The command is not validated, filtered, or escaped. Whatever the calling
//! process may do, the command may do.
//!
//! ## Modules
//!
//! - **`ffi`**: the exported symbol, loadable by name from a foreign runtime.
//! - **`system`**: the pass-through to the platform facility, a safe Rust API
//!   over it, and status decoding.
//! - **`constants`**: fixed names shared by the library, the binary and the header.

pub mod constants;
pub mod ffi;
pub mod system;

pub use system::executor::{CommandError, execute, execute_str, shell_available};
pub use system::status::{ShellStatus, Termination};

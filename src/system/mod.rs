//! # System Interaction Layer
//!
//! The boundary between this crate and the operating system's command interpreter.
//!
//! ## Modules
//!
//! - **`executor`**: forwards a command string, byte for byte, to the platform's
//!   synchronous command facility (`system(3)` on POSIX, the CRT `system` on
//!   Windows) and blocks until the interpreter exits.
//! - **`status`**: wraps the interpreter's raw status and decodes it without
//!   changing it.

pub mod executor;
pub mod status;

// src/system/status.rs

//! The interpreter's raw status and its platform decoding.

use crate::constants::LAUNCH_FAILURE_STATUS;
use std::ffi::c_int;
use std::fmt;

/// How the command interpreter ended, as far as the platform status tells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The interpreter exited normally with this code.
    Exited(i32),
    /// The interpreter was killed by this signal (Unix only).
    Signaled(i32),
    /// The status encodes neither, e.g. the facility could not start a shell.
    Unknown(c_int),
}

/// The raw status returned by the platform's command facility.
///
/// The wrapped value is exactly what the facility returned. On POSIX it is a
/// wait status (`exit 7` gives `7 << 8`); on Windows it is the exit code.
/// The accessors below only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellStatus(c_int);

impl ShellStatus {
    /// Wraps a raw platform status.
    pub const fn from_raw(raw: c_int) -> Self {
        Self(raw)
    }

    /// The platform status, unchanged.
    pub const fn raw(self) -> c_int {
        self.0
    }

    /// True when the facility itself reported that no interpreter could be started.
    pub const fn launch_failed(self) -> bool {
        self.0 == LAUNCH_FAILURE_STATUS
    }

    /// True when the interpreter exited with code 0.
    pub fn success(self) -> bool {
        self.termination() == Termination::Exited(0)
    }

    /// Decodes the status the way the host platform defines it.
    pub fn termination(self) -> Termination {
        if self.launch_failed() {
            return Termination::Unknown(self.0);
        }
        decode(self.0)
    }
}

#[cfg(unix)]
fn decode(raw: c_int) -> Termination {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    let status = ExitStatus::from_raw(raw);
    match (status.code(), status.signal()) {
        (Some(code), _) => Termination::Exited(code),
        (None, Some(signal)) => Termination::Signaled(signal),
        (None, None) => Termination::Unknown(raw),
    }
}

#[cfg(not(unix))]
fn decode(raw: c_int) -> Termination {
    Termination::Exited(raw)
}

impl From<ShellStatus> for c_int {
    fn from(status: ShellStatus) -> Self {
        status.raw()
    }
}

impl fmt::Display for ShellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.termination() {
            Termination::Exited(code) => write!(f, "exited with code {}", code),
            Termination::Signaled(signal) => write!(f, "terminated by signal {}", signal),
            Termination::Unknown(raw) if self.launch_failed() => {
                write!(f, "could not start a command interpreter (status {})", raw)
            }
            Termination::Unknown(raw) => write!(f, "unrecognized status {}", raw),
        }
    }
}

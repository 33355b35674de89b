#![allow(unsafe_code)]

//! Drives the library through its exported C entry point, the way a foreign
//! runtime would after resolving the symbol.

use ffi_system_access::{constants::EXPORTED_SYMBOL, ffi::system_access, execute_str};
use std::ffi::{CString, c_char, c_int};
use std::path::PathBuf;
use std::thread;

type SystemAccessFn = unsafe extern "C" fn(*const c_char) -> c_int;

fn call(command: &str) -> i32 {
    let command = CString::new(command).unwrap();
    unsafe { system_access(command.as_ptr()) }
}

#[test]
fn test_symbol_name_matches_header() {
    let header = include_str!("../include/ffi_system_access.h");
    assert!(header.contains(&format!("int {}(const char *command);", EXPORTED_SYMBOL)));
}

/// Locates the shared library Cargo built next to this test binary.
fn cdylib_path() -> PathBuf {
    let file_name = format!(
        "{}ffi_system_access{}",
        std::env::consts::DLL_PREFIX,
        std::env::consts::DLL_SUFFIX
    );
    let exe = std::env::current_exe().unwrap();
    let deps_dir = exe.parent().unwrap();
    [deps_dir.to_path_buf(), deps_dir.parent().unwrap().to_path_buf()]
        .into_iter()
        .map(|dir| dir.join(&file_name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| panic!("{} was not built", file_name))
}

#[test]
fn test_cdylib_exports_symbol_by_name() {
    let library = unsafe { libloading::Library::new(cdylib_path()) }.unwrap();
    let system_access_dyn: libloading::Symbol<'_, SystemAccessFn> =
        unsafe { library.get(EXPORTED_SYMBOL.as_bytes()) }.unwrap();

    assert_eq!(unsafe { system_access_dyn(c"exit 0".as_ptr()) }, 0);
    #[cfg(unix)]
    assert_eq!(unsafe { system_access_dyn(c"exit 7".as_ptr()) }, 7 << 8);
}

#[test]
fn test_exit_zero() {
    assert_eq!(call("exit 0"), 0);
}

#[test]
fn test_empty_string() {
    assert_eq!(call(""), 0);
}

#[test]
fn test_ffi_and_rust_api_agree() {
    for command in ["exit 0", "exit 3", ""] {
        assert_eq!(call(command), execute_str(command).unwrap().raw());
    }
}

#[cfg(unix)]
#[test]
fn test_exit_seven_is_platform_encoded() {
    assert_eq!(call("exit 7"), 7 << 8);
}

#[cfg(unix)]
#[test]
fn test_echo_writes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("stdout.txt");

    let status = call(&format!("echo hello > '{}'", out.display()));

    assert_eq!(status, 0);
    assert_eq!(std::fs::read_to_string(out).unwrap(), "hello\n");
}

#[cfg(unix)]
#[test]
fn test_missing_program_is_nonzero() {
    let status = call("no-such-program-for-system-access-tests");
    assert_ne!(status, 0);
    assert_eq!(status, 127 << 8);
}

#[cfg(unix)]
#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|code| thread::spawn(move || (code, call(&format!("exit {}", code)))))
        .collect();

    for handle in handles {
        let (code, status) = handle.join().unwrap();
        assert_eq!(status, code << 8);
    }
}

//! The process-wide syslog connection.
//!
//! POSIX keeps one syslog connection per process, configured by `openlog`
//! and torn down by `closelog`. This module owns that shared state: a single
//! mutex serializes the three native calls, and the ident string most
//! recently handed to `openlog` is kept alive in connection-owned storage
//! until it is replaced or the connection is closed. Several libc
//! implementations retain the `openlog` ident pointer for the lifetime of
//! the connection rather than copying the string, so freeing it early would
//! be undefined behavior.

use crate::{ErrorKind, Facility, Options, Result};
use once_cell::sync::Lazy;
use std::ffi::{CStr, CString};
use std::os::raw::c_int;
use std::sync::{Mutex, MutexGuard};

#[cfg(not(test))]
use libc::{closelog, openlog, syslog};
#[cfg(test)]
use crate::mock::{closelog, openlog, syslog};

struct Shared {
    /// Owned copy of the ident most recently passed to `openlog`. Must not
    /// be dropped while the connection is open.
    ident: Option<Box<CStr>>,
    open: bool,
}

static SHARED: Lazy<Mutex<Shared>> = Lazy::new(|| {
    Mutex::new(Shared {
        ident: None,
        open: false,
    })
});

/// Opens (or re-opens) the process-wide connection.
///
/// The ident is copied into storage owned by the connection, so the caller's
/// string may be dropped freely afterwards. Calling `open` while a
/// connection is already open is allowed: the new ident, options, and
/// facility replace the previous ones, exactly as `openlog` itself behaves.
///
/// # Errors
///
/// Fails with `ErrorKind::Invalid` if `ident` is empty or contains NUL
/// bytes. The native call itself reports nothing.
pub fn open(ident: &str, options: Options, facility: Facility) -> Result<()> {
    track_assert!(
        !ident.is_empty(),
        ErrorKind::Invalid,
        "syslog ident must not be empty"
    );
    let ident = track!(CString::new(ident).map_err(crate::Error::from))?;
    open_raw(&ident, options, facility);
    Ok(())
}

pub(crate) fn open_raw(ident: &CStr, options: Options, facility: Facility) {
    let owned: Box<CStr> = ident.to_owned().into_boxed_c_str();

    let mut shared = lock();
    // The new ident must be registered with `openlog` before the previous
    // owned string is freed, since the OS may still hold a pointer to it.
    unsafe {
        openlog(owned.as_ptr(), options.bits(), facility.to_native());
    }
    shared.ident = Some(owned);
    shared.open = true;
}

/// Submits one message to the connection.
///
/// `priority` is either a bare [`Level`] code or a [`Priority`] collapsed
/// with `into_raw`. Delivery is fire-and-forget: the OS reports no
/// per-message failure, and neither does this function.
///
/// # Errors
///
/// Fails with `ErrorKind::Invalid` if `message` contains NUL bytes, which
/// the NUL-terminated native call would silently truncate at.
///
/// [`Level`]: ../enum.Level.html
/// [`Priority`]: ../struct.Priority.html
pub fn write(priority: c_int, message: &str) -> Result<()> {
    let message = track!(CString::new(message).map_err(crate::Error::from))?;
    write_raw(priority, &message);
    Ok(())
}

/// Like [`write`], but strips NUL bytes instead of failing. Used by the
/// logging front ends, which must never fail on message content.
///
/// [`write`]: fn.write.html
pub(crate) fn write_lossy(priority: c_int, message: &str) {
    write_raw(priority, &to_cstring_lossy(message));
}

fn write_raw(priority: c_int, message: &CStr) {
    let _shared = lock();
    unsafe {
        syslog(
            priority,
            CStr::from_bytes_with_nul_unchecked(b"%s\0").as_ptr(),
            message.as_ptr(),
        );
    }
}

/// Closes the process-wide connection.
///
/// A no-op when the connection is not open; calling it any number of times
/// is fine.
pub fn close() {
    let mut shared = lock();
    if shared.open {
        unsafe {
            closelog();
        }
        shared.open = false;
        // Safe to free only now: `closelog` has released the OS's reference.
        shared.ident = None;
    }
}

/// Whether the process-wide connection is currently open.
pub fn is_open() -> bool {
    lock().open
}

fn lock() -> MutexGuard<'static, Shared> {
    // A poisoned lock would mean a panic while calling into libc; the state
    // itself is still consistent, so keep going.
    SHARED.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Converts a string to a `CString`, stripping interior NUL bytes.
fn to_cstring_lossy(s: &str) -> CString {
    let mut bytes: Vec<u8> = s.as_bytes().to_vec();
    bytes.retain(|b| *b != 0);

    // Sound: all NUL bytes were just removed, and `from_vec_unchecked`
    // appends the terminator.
    unsafe { CString::from_vec_unchecked(bytes) }
}

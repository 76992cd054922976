//! Recording stand-ins for the POSIX syslog functions.
//!
//! The mock `syslog` takes exactly three parameters where the real one is
//! variadic; the crate always calls it with a `"%s"` format and one string
//! argument, so the fixed arity matches every call site.

use libc::{c_char, c_int};
use once_cell::sync::Lazy;
use std::ffi::CStr;
use std::mem;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    OpenLog {
        ident: String,
        options: c_int,
        facility: c_int,
    },
    SysLog {
        priority: c_int,
        message: String,
    },
    CloseLog,
}

static EVENTS: Lazy<Mutex<Vec<Event>>> = Lazy::new(|| Mutex::new(Vec::new()));
static TESTING: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Runs `f` with exclusive access to the recorded event log and returns its
/// result along with every event it produced. Connection state is global, so
/// tests that touch it must run one at a time.
pub fn testing<T>(f: impl FnOnce() -> T) -> (T, Vec<Event>) {
    let locked = TESTING.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    crate::connection::close();
    take_events();

    let result = catch_unwind(AssertUnwindSafe(f));
    let events = take_events();
    drop(locked);

    match result {
        Ok(ok) => (ok, events),
        Err(panicked) => resume_unwind(panicked),
    }
}

pub fn take_events() -> Vec<Event> {
    let mut events: MutexGuard<Vec<Event>> = EVENTS.lock().unwrap();
    mem::take(&mut *events)
}

fn push_event(event: Event) {
    let mut events: MutexGuard<Vec<Event>> = EVENTS.lock().unwrap();
    events.push(event);
}

pub unsafe extern "C" fn openlog(ident: *const c_char, logopt: c_int, facility: c_int) {
    push_event(Event::OpenLog {
        ident: string_from_ptr(ident),
        options: logopt,
        facility,
    });
}

pub unsafe extern "C" fn closelog() {
    push_event(Event::CloseLog);
}

pub unsafe extern "C" fn syslog(priority: c_int, _format: *const c_char, message: *const c_char) {
    push_event(Event::SysLog {
        priority,
        message: string_from_ptr(message),
    });
}

unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    String::from(CStr::from_ptr(ptr).to_string_lossy())
}

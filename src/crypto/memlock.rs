// src/crypto/memlock.rs

//! Heap-pinned secret storage.
//!
//! [`LockedBox`] keeps a secret at a fixed heap address for its whole life,
//! zeroizes it before the allocation is released and, with the `mlock` feature
//! on unix, asks the kernel to keep its pages out of swap. Page locking is
//! best-effort: a refused `mlock` (e.g. `RLIMIT_MEMLOCK`) is logged and ignored,
//! it never changes derived output.
//!
//! Page locks do not nest and `munlock` works on whole pages, so with `mlock`
//! every box is page-aligned and padded to whole pages. Dropping one box can
//! then never unlock a page another live box still uses. Systems with pages
//! larger than 4 KiB only get this guarantee per 4 KiB-aligned box.

use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Owns its pages exclusively when page locking is on.
#[cfg_attr(all(feature = "mlock", unix), repr(C, align(4096)))]
struct PageAligned<T>(T);

pub(crate) struct LockedBox<T: Zeroize> {
    inner: Box<PageAligned<T>>,
    locked: bool,
}

impl<T: Zeroize> LockedBox<T> {
    /// Move `value` to the heap and try to lock its pages.
    ///
    /// `value` passes through the stack on the way in, so only wrap values that
    /// are not secret yet (zeroed buffers, the initial cipher state).
    pub(crate) fn new(value: T) -> Self {
        let inner = Box::new(PageAligned(value));
        let locked = lock_pages(&*inner);
        Self { inner, locked }
    }

    /// Whether the pages backing this value are currently locked in RAM.
    #[allow(dead_code)] // only inspected by tests
    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }
}

impl<T: Zeroize> Deref for LockedBox<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner.0
    }
}

impl<T: Zeroize> DerefMut for LockedBox<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner.0
    }
}

impl<T: Zeroize> Drop for LockedBox<T> {
    fn drop(&mut self) {
        // Wipe while still locked, then release the pages.
        self.inner.0.zeroize();
        if self.locked {
            unlock_pages(&*self.inner);
        }
    }
}

#[cfg(all(feature = "mlock", unix))]
fn lock_pages<T>(value: &T) -> bool {
    let len = std::mem::size_of::<T>();
    if len == 0 {
        return false;
    }

    // SAFETY: `value` is a live, boxed allocation of exactly `len` bytes that
    // outlives the lock; mlock only changes residency, not contents.
    let rc = unsafe { libc::mlock((value as *const T).cast::<libc::c_void>(), len) };
    if rc != 0 {
        tracing::debug!(
            len,
            error = %std::io::Error::last_os_error(),
            "mlock refused; continuing without page locking"
        );
        return false;
    }
    true
}

#[cfg(all(feature = "mlock", unix))]
fn unlock_pages<T>(value: &T) {
    let len = std::mem::size_of::<T>();

    // SAFETY: same region that `lock_pages` locked.
    let rc = unsafe { libc::munlock((value as *const T).cast::<libc::c_void>(), len) };
    if rc != 0 {
        tracing::debug!(
            len,
            error = %std::io::Error::last_os_error(),
            "munlock failed"
        );
    }
}

#[cfg(not(all(feature = "mlock", unix)))]
fn lock_pages<T>(_value: &T) -> bool {
    false
}

#[cfg(not(all(feature = "mlock", unix)))]
fn unlock_pages<T>(_value: &T) {}

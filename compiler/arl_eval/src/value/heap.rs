//! Heap wrapper for enforced reference-counted allocation.
//!
//! `Heap<T>` wraps `Rc<T>` and is the ONLY way to allocate heap payloads in
//! the value system. The constructor is `pub(super)`, so external code must
//! go through `Value`'s factory methods (`Value::string`, `Value::table`).
//!
//! Sharing the payload by reference count is the store's aliasing
//! discipline: a lookup hands out a clone of the handle, never the sole
//! owner of the buffer, so every allocation is released exactly once no
//! matter how many expression results or table slots point at it.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A reference-counted heap payload.
///
/// # Thread Safety
/// `Heap<T>` is NOT thread-safe. Script execution is single-threaded (one
/// program counter, no suspension points), so `Rc` is used over `Arc`.
///
/// # Zero-Cost Abstraction
/// `#[repr(transparent)]` gives this the same layout as `Rc<T>`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated payload.
    ///
    /// `pub(super)` - only visible within the value module; external code
    /// must use `Value`'s factory methods.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Get the inner `Rc` handle.
    ///
    /// Useful for ownership assertions (`Rc::strong_count`) and for code
    /// that needs to hold the allocation beyond the wrapper.
    #[inline]
    pub fn inner(&self) -> &Rc<T> {
        &self.0
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

//! Owning wrapper for handles with a statically linked destroy function.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::error::Result;
use crate::ffi::{check_result, Handle, XrResult};

/// A destroy entry point for handle kind `H`, bound at compile time.
///
/// Implemented by zero-sized marker types, one per handle kind. See
/// [`DestroyAction`](crate::DestroyAction) and friends.
pub trait DestroyHandle<H: Handle> {
    /// Release the native resource behind `handle`.
    ///
    /// # Safety
    ///
    /// `handle` must be a live, non-null handle that no one else will
    /// destroy.
    unsafe fn destroy(handle: H) -> XrResult;
}

/// Sole owner of a handle whose destroy function is known statically.
///
/// The handle is destroyed exactly once: on [`reset`](Self::reset), when a
/// new value is acquired through [`put`](Self::put) or
/// [`assign`](Self::assign), or on drop. The wrapper can be moved but not
/// cloned:
///
/// ```compile_fail
/// let a = xr_handle::ActionHandle::new();
/// let b = a.clone();
/// ```
///
/// # Example
///
/// ```
/// use xr_handle::{DestroyHandle, Space, UniqueHandle, XrResult};
///
/// enum DestroyNothing {}
///
/// impl DestroyHandle<Space> for DestroyNothing {
///     unsafe fn destroy(_space: Space) -> XrResult {
///         XrResult::SUCCESS
///     }
/// }
///
/// let mut space = UniqueHandle::<Space, DestroyNothing>::new();
/// let slot = space.put();
/// // A native creation call writes the new handle into `slot`.
/// unsafe { *slot = Space::from_raw(1) };
/// assert_eq!(space.get(), Space::from_raw(1));
/// ```
pub struct UniqueHandle<H: Handle, D: DestroyHandle<H>> {
    handle: H,
    _destroy: PhantomData<fn() -> D>,
}

impl<H: Handle, D: DestroyHandle<H>> UniqueHandle<H, D> {
    /// Create an empty wrapper.
    pub const fn new() -> Self {
        Self {
            handle: H::NULL,
            _destroy: PhantomData,
        }
    }

    /// Take ownership of an existing handle.
    ///
    /// # Safety
    ///
    /// The handle must be null or valid, and not already owned by another
    /// wrapper.
    pub unsafe fn from_raw(handle: H) -> Self {
        Self {
            handle,
            _destroy: PhantomData,
        }
    }

    /// Run a native creation call against a fresh wrapper.
    ///
    /// `f` receives the output slot. On a failing result the slot contents
    /// are discarded without being destroyed.
    pub fn create<F>(f: F) -> Result<Self>
    where
        F: FnOnce(*mut H) -> XrResult,
    {
        let mut owned = Self::new();
        let result = f(owned.put());
        if let Err(err) = check_result(result) {
            discard_after_failure(owned.release(), result);
            return Err(err);
        }
        Ok(owned)
    }

    /// Get the underlying handle without giving up ownership.
    #[inline]
    pub fn get(&self) -> H {
        self.handle
    }

    /// Check if this wrapper is empty.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Release the current handle, then return the slot for a native
    /// creation call to fill.
    pub fn put(&mut self) -> *mut H {
        self.reset();
        &mut self.handle
    }

    /// Destroy the current handle, if any. Safe to call on an empty wrapper.
    pub fn reset(&mut self) {
        let handle = mem::replace(&mut self.handle, H::NULL);
        if !handle.is_null() {
            log_destroy(handle, unsafe { D::destroy(handle) });
        }
    }

    /// Give up ownership without destroying. The wrapper is left empty.
    #[must_use = "the returned handle is no longer destroyed automatically"]
    pub fn release(&mut self) -> H {
        mem::replace(&mut self.handle, H::NULL)
    }

    /// Move the handle out, leaving this wrapper empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move-assign `other` into this wrapper.
    ///
    /// The current handle is destroyed first, unless `other` holds the very
    /// same value, in which case nothing is released.
    pub fn assign(&mut self, mut other: Self) {
        let handle = other.release();
        if self.handle != handle {
            self.reset();
            self.handle = handle;
        }
    }
}

impl<H: Handle, D: DestroyHandle<H>> Default for UniqueHandle<H, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, D: DestroyHandle<H>> Drop for UniqueHandle<H, D> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<H: Handle, D: DestroyHandle<H>> fmt::Debug for UniqueHandle<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UniqueHandle").field(&self.handle).finish()
    }
}

pub(crate) fn log_destroy<H: Handle>(handle: H, result: XrResult) {
    if result.failed() {
        log::warn!("destroying {:?} failed with {:?}", handle, result);
    } else {
        log::trace!("destroyed {:?}", handle);
    }
}

pub(crate) fn discard_after_failure<H: Handle>(handle: H, result: XrResult) {
    if !handle.is_null() {
        log::debug!(
            "discarding {:?} left behind by a creation call that returned {:?}",
            handle,
            result
        );
    }
}

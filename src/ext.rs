//! Owning wrapper for extension handles.
//!
//! Extension entry points cannot be linked statically, so the creator passes
//! in the destroy function it looked up through `xrGetInstanceProcAddr`.

use std::fmt;
use std::mem;

use crate::error::Result;
use crate::ffi::{check_result, Handle, PfnDestroy, XrResult};
use crate::unique::{discard_after_failure, log_destroy};

/// Sole owner of a handle whose destroy function is supplied at runtime.
///
/// Same contract as [`UniqueHandle`](crate::UniqueHandle); the destroy
/// function travels with the handle on every transfer.
///
/// # Example
///
/// ```
/// use xr_handle::{SpatialAnchorMSFT, UniqueExtHandle, XrResult};
///
/// unsafe extern "system" fn destroy_anchor(_anchor: SpatialAnchorMSFT) -> XrResult {
///     XrResult::SUCCESS
/// }
///
/// let mut anchor = UniqueExtHandle::<SpatialAnchorMSFT>::new();
/// let slot = anchor.put(Some(destroy_anchor));
/// unsafe { *slot = SpatialAnchorMSFT::from_raw(7) };
/// assert!(!anchor.is_null());
/// ```
pub struct UniqueExtHandle<H: Handle> {
    handle: H,
    destroyer: Option<PfnDestroy<H>>,
}

impl<H: Handle> UniqueExtHandle<H> {
    /// Create an empty wrapper.
    pub const fn new() -> Self {
        Self {
            handle: H::NULL,
            destroyer: None,
        }
    }

    /// Take ownership of an existing handle.
    ///
    /// # Safety
    ///
    /// The handle must be null or valid, not already owned by another
    /// wrapper, and `destroyer` must be its destroy entry point.
    pub unsafe fn from_raw(handle: H, destroyer: PfnDestroy<H>) -> Self {
        Self {
            handle,
            destroyer: Some(destroyer),
        }
    }

    /// Run a native creation call against a fresh wrapper.
    ///
    /// On a failing result the slot contents are discarded without being
    /// destroyed.
    pub fn create<F>(destroyer: PfnDestroy<H>, f: F) -> Result<Self>
    where
        F: FnOnce(*mut H) -> XrResult,
    {
        let mut owned = Self::new();
        let result = f(owned.put(Some(destroyer)));
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

    /// The destroy function that will release the current handle.
    #[inline]
    pub fn destroyer(&self) -> Option<PfnDestroy<H>> {
        self.destroyer
    }

    /// Check if this wrapper is empty.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Release the current handle, then return the slot for a native
    /// creation call to fill.
    ///
    /// # Panics
    ///
    /// Panics if `destroyer` is `None`. Nothing is released in that case.
    pub fn put(&mut self, destroyer: Option<PfnDestroy<H>>) -> *mut H {
        let destroyer = destroyer.expect("UniqueExtHandle::put requires a destroy function");
        self.reset();
        self.destroyer = Some(destroyer);
        &mut self.handle
    }

    /// Destroy the current handle, if any, and forget the destroy function.
    pub fn reset(&mut self) {
        let handle = mem::replace(&mut self.handle, H::NULL);
        let destroyer = self.destroyer.take();
        if handle.is_null() {
            return;
        }
        match destroyer {
            Some(destroy) => log_destroy(handle, unsafe { destroy(handle) }),
            None => log::error!("{:?} has no destroy function and leaks", handle),
        }
    }

    /// Give up ownership without destroying. The wrapper is left empty.
    #[must_use = "the returned handle is no longer destroyed automatically"]
    pub fn release(&mut self) -> H {
        self.destroyer = None;
        mem::replace(&mut self.handle, H::NULL)
    }

    /// Move the handle and its destroy function out, leaving this wrapper
    /// empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move-assign `other` into this wrapper.
    ///
    /// Nothing is released when both wrappers hold the same value with the
    /// same destroy function. Otherwise the current handle is destroyed
    /// first.
    pub fn assign(&mut self, mut other: Self) {
        if self.handle == other.handle && self.destroyer_addr() == other.destroyer_addr() {
            let _ = other.release();
            return;
        }
        self.reset();
        self.destroyer = other.destroyer.take();
        self.handle = mem::replace(&mut other.handle, H::NULL);
    }

    fn destroyer_addr(&self) -> Option<usize> {
        self.destroyer.map(|f| f as usize)
    }
}

impl<H: Handle> Default for UniqueExtHandle<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle> Drop for UniqueExtHandle<H> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<H: Handle> fmt::Debug for UniqueExtHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueExtHandle")
            .field("handle", &self.handle)
            .field("destroyer", &self.destroyer_addr().map(|a| a as *const ()))
            .finish()
    }
}

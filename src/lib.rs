//! Scoped ownership for OpenXR handles.
//!
//! Every wrapper in this crate owns at most one native handle and calls the
//! handle's destroy function exactly once: when the wrapper is reset, when a
//! new value is acquired into it, or when it is dropped. Wrappers move but
//! never clone.
//!
//! Core handle kinds link their destroy function statically
//! ([`UniqueHandle`]). Extension handle kinds carry the destroy function
//! looked up at runtime ([`UniqueExtHandle`]).
//!
//! # Example
//!
//! ```ignore
//! use xr_handle::ffi::{self, XrInstanceCreateInfo};
//! use xr_handle::InstanceHandle;
//!
//! fn main() -> xr_handle::Result<()> {
//!     let info = XrInstanceCreateInfo::default();
//!     let instance = InstanceHandle::create(|slot| unsafe {
//!         ffi::xrCreateInstance(&info, slot)
//!     })?;
//!     println!("Instance: {:?}", instance.get());
//!
//!     // xrDestroyInstance runs here
//!     Ok(())
//! }
//! ```
//!
//! # Linking
//!
//! Enable the `linked` feature to link the system OpenXR loader. Set
//! `OPENXR_LOADER_DIR` when it is not on the default search path.

pub mod aliases;
pub mod error;
pub mod ext;
pub mod ffi;
pub mod unique;

// Re-export main types at the crate root
pub use aliases::{
    ActionHandle, ActionSetHandle, DestroyAction, DestroyActionSet, DestroyInstance,
    DestroySession, DestroySpace, DestroySwapchain, InstanceHandle, SessionHandle, SpaceHandle,
    SpatialAnchorHandle, SwapchainHandle,
};
pub use error::{Error, Result};
pub use ext::UniqueExtHandle;
pub use ffi::{
    Action, ActionSet, Handle, Instance, PfnDestroy, Session, Space, SpatialAnchorMSFT, Swapchain,
    XrResult, XR_NULL_HANDLE,
};
pub use unique::{DestroyHandle, UniqueHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{size_of, ManuallyDrop};

    #[test]
    fn test_static_handles_are_handle_sized() {
        assert_eq!(size_of::<ActionHandle>(), size_of::<u64>());
        assert_eq!(size_of::<InstanceHandle>(), size_of::<u64>());
        assert_eq!(size_of::<SwapchainHandle>(), size_of::<u64>());
    }

    #[test]
    fn test_ext_handle_carries_destroyer() {
        assert_eq!(
            size_of::<SpatialAnchorHandle>(),
            size_of::<u64>() + size_of::<usize>().max(size_of::<u64>())
        );
    }

    #[test]
    fn test_aliases_start_empty() {
        // Never dropped, so no loader symbol is needed.
        let session = ManuallyDrop::new(SessionHandle::new());
        let space = ManuallyDrop::new(SpaceHandle::default());
        assert!(session.is_null());
        assert_eq!(space.get(), Space::NULL);

        let anchor = SpatialAnchorHandle::new();
        assert!(anchor.is_null());
        assert!(anchor.destroyer().is_none());
    }
}

//! Owning handle types for the core OpenXR objects.

use crate::ext::UniqueExtHandle;
use crate::ffi::{self, Action, ActionSet, Instance, Session, Space, SpatialAnchorMSFT, Swapchain};
use crate::ffi::XrResult;
use crate::unique::{DestroyHandle, UniqueHandle};

/// Macro to bind a handle kind to its core destroy entry point.
macro_rules! define_destroyer {
    ($marker:ident, $handle:ty, $func:ident) => {
        #[doc = concat!("Destroys through `", stringify!($func), "`.")]
        pub enum $marker {}

        impl DestroyHandle<$handle> for $marker {
            #[inline]
            unsafe fn destroy(handle: $handle) -> XrResult {
                ffi::$func(handle)
            }
        }
    };
}

define_destroyer!(DestroyAction, Action, xrDestroyAction);
define_destroyer!(DestroyActionSet, ActionSet, xrDestroyActionSet);
define_destroyer!(DestroyInstance, Instance, xrDestroyInstance);
define_destroyer!(DestroySession, Session, xrDestroySession);
define_destroyer!(DestroySpace, Space, xrDestroySpace);
define_destroyer!(DestroySwapchain, Swapchain, xrDestroySwapchain);

/// Owned `XrAction`.
pub type ActionHandle = UniqueHandle<Action, DestroyAction>;
/// Owned `XrActionSet`.
pub type ActionSetHandle = UniqueHandle<ActionSet, DestroyActionSet>;
/// Owned `XrInstance`.
pub type InstanceHandle = UniqueHandle<Instance, DestroyInstance>;
/// Owned `XrSession`.
pub type SessionHandle = UniqueHandle<Session, DestroySession>;
/// Owned `XrSpace`.
pub type SpaceHandle = UniqueHandle<Space, DestroySpace>;
/// Owned `XrSwapchain`.
pub type SwapchainHandle = UniqueHandle<Swapchain, DestroySwapchain>;
/// Owned `XrSpatialAnchorMSFT`. Pass `xrDestroySpatialAnchorMSFT` to `put`.
pub type SpatialAnchorHandle = UniqueExtHandle<SpatialAnchorMSFT>;

//! Handle types for opaque references to OpenXR objects.
//!
//! Each handle type is a newtype wrapper around u64 to provide type safety.
//! OpenXR defines every handle as 64 bits wide, on all platforms.

use std::fmt;

/// The null sentinel shared by every handle kind.
pub const XR_NULL_HANDLE: u64 = 0;

/// Common behavior of the opaque handle newtypes.
///
/// A handle value is only a number; constructing one grants no ownership.
/// Ownership lives in [`UniqueHandle`](crate::UniqueHandle) and
/// [`UniqueExtHandle`](crate::UniqueExtHandle).
pub trait Handle: Copy + Eq + fmt::Debug {
    /// The null handle.
    const NULL: Self;

    /// Wrap a raw handle value.
    fn from_raw(raw: u64) -> Self;

    /// The raw handle value.
    fn into_raw(self) -> u64;

    /// Check if this handle is null.
    #[inline]
    fn is_null(self) -> bool {
        self == Self::NULL
    }
}

/// Macro to define a handle type.
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            /// The null handle.
            pub const NULL: Self = Self(XR_NULL_HANDLE);

            /// Wrap a raw handle value.
            #[inline]
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw handle value.
            #[inline]
            pub const fn into_raw(self) -> u64 {
                self.0
            }

            /// Check if this handle is null.
            #[inline]
            pub const fn is_null(self) -> bool {
                self.0 == XR_NULL_HANDLE
            }
        }

        impl Handle for $name {
            const NULL: Self = Self(XR_NULL_HANDLE);

            #[inline]
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            #[inline]
            fn into_raw(self) -> u64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NULL
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:#x})"), self.0)
            }
        }
    };
}

define_handle!(
    /// `XrInstance`.
    Instance
);
define_handle!(
    /// `XrSession`.
    Session
);
define_handle!(
    /// `XrSpace`.
    Space
);
define_handle!(
    /// `XrAction`.
    Action
);
define_handle!(
    /// `XrActionSet`.
    ActionSet
);
define_handle!(
    /// `XrSwapchain`.
    Swapchain
);
define_handle!(
    /// `XrSpatialAnchorMSFT`, from the `XR_MSFT_spatial_anchor` extension.
    SpatialAnchorMSFT
);

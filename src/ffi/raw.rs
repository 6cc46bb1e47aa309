//! Raw C function bindings for the OpenXR loader.
//!
//! This module contains the direct FFI declarations the wrappers need.
//! Users should prefer the safe Rust wrappers in the parent modules.
//!
//! The loader is linked only with the `linked` feature. Without it the
//! symbols must come from elsewhere in the final binary.

use std::fmt;
use std::os::raw::{c_char, c_void};

use super::handles::*;

/// Result code returned by OpenXR functions.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct XrResult(i32);

impl XrResult {
    pub const SUCCESS: Self = Self(0);
    pub const TIMEOUT_EXPIRED: Self = Self(1);
    pub const SESSION_LOSS_PENDING: Self = Self(3);
    pub const EVENT_UNAVAILABLE: Self = Self(4);

    pub const ERROR_VALIDATION_FAILURE: Self = Self(-1);
    pub const ERROR_RUNTIME_FAILURE: Self = Self(-2);
    pub const ERROR_OUT_OF_MEMORY: Self = Self(-3);
    pub const ERROR_API_VERSION_UNSUPPORTED: Self = Self(-4);
    pub const ERROR_INITIALIZATION_FAILED: Self = Self(-6);
    pub const ERROR_FUNCTION_UNSUPPORTED: Self = Self(-7);
    pub const ERROR_FEATURE_UNSUPPORTED: Self = Self(-8);
    pub const ERROR_EXTENSION_NOT_PRESENT: Self = Self(-9);
    pub const ERROR_LIMIT_REACHED: Self = Self(-10);
    pub const ERROR_SIZE_INSUFFICIENT: Self = Self(-11);
    pub const ERROR_HANDLE_INVALID: Self = Self(-12);
    pub const ERROR_INSTANCE_LOST: Self = Self(-13);
    pub const ERROR_SESSION_RUNNING: Self = Self(-14);
    pub const ERROR_SESSION_NOT_RUNNING: Self = Self(-16);
    pub const ERROR_SESSION_LOST: Self = Self(-17);
    pub const ERROR_RUNTIME_UNAVAILABLE: Self = Self(-51);

    /// Wrap a raw result code.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw result code.
    #[inline]
    pub const fn into_raw(self) -> i32 {
        self.0
    }

    /// `XR_SUCCEEDED`: success codes are zero or positive.
    #[inline]
    pub const fn succeeded(self) -> bool {
        self.0 >= 0
    }

    /// `XR_FAILED`.
    #[inline]
    pub const fn failed(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Debug for XrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XrResult({})", self.0)
    }
}

/// `XrStructureType`.
pub type XrStructureType = i32;

pub const XR_TYPE_INSTANCE_CREATE_INFO: XrStructureType = 3;

pub const XR_MAX_APPLICATION_NAME_SIZE: usize = 128;
pub const XR_MAX_ENGINE_NAME_SIZE: usize = 128;

/// `XR_MAKE_VERSION`.
pub const fn xr_make_version(major: u64, minor: u64, patch: u64) -> u64 {
    ((major & 0xffff) << 48) | ((minor & 0xffff) << 32) | (patch & 0xffff_ffff)
}

pub const XR_API_VERSION_1_0: u64 = xr_make_version(1, 0, 0);

/// Name of the spatial anchor extension.
pub const XR_MSFT_SPATIAL_ANCHOR_EXTENSION_NAME: &[u8] = b"XR_MSFT_spatial_anchor\0";

/// Name of the spatial anchor destroy entry point, for `xrGetInstanceProcAddr`.
pub const XR_DESTROY_SPATIAL_ANCHOR_MSFT_NAME: &[u8] = b"xrDestroySpatialAnchorMSFT\0";

/// Application info structure.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct XrApplicationInfo {
    pub application_name: [c_char; XR_MAX_APPLICATION_NAME_SIZE],
    pub application_version: u32,
    pub engine_name: [c_char; XR_MAX_ENGINE_NAME_SIZE],
    pub engine_version: u32,
    pub api_version: u64,
}

impl Default for XrApplicationInfo {
    fn default() -> Self {
        Self {
            application_name: [0; XR_MAX_APPLICATION_NAME_SIZE],
            application_version: 0,
            engine_name: [0; XR_MAX_ENGINE_NAME_SIZE],
            engine_version: 0,
            api_version: XR_API_VERSION_1_0,
        }
    }
}

/// Instance creation structure.
#[repr(C)]
pub struct XrInstanceCreateInfo {
    pub ty: XrStructureType,
    pub next: *const c_void,
    pub create_flags: u64,
    pub application_info: XrApplicationInfo,
    pub enabled_api_layer_count: u32,
    pub enabled_api_layer_names: *const *const c_char,
    pub enabled_extension_count: u32,
    pub enabled_extension_names: *const *const c_char,
}

impl Default for XrInstanceCreateInfo {
    fn default() -> Self {
        Self {
            ty: XR_TYPE_INSTANCE_CREATE_INFO,
            next: std::ptr::null(),
            create_flags: 0,
            application_info: XrApplicationInfo::default(),
            enabled_api_layer_count: 0,
            enabled_api_layer_names: std::ptr::null(),
            enabled_extension_count: 0,
            enabled_extension_names: std::ptr::null(),
        }
    }
}

/// `PFN_xrVoidFunction`.
pub type PfnVoidFunction = unsafe extern "system" fn();

/// A destroy entry point for handle kind `H`.
pub type PfnDestroy<H> = unsafe extern "system" fn(handle: H) -> XrResult;

/// `PFN_xrDestroySpatialAnchorMSFT`.
pub type PfnDestroySpatialAnchorMSFT = PfnDestroy<SpatialAnchorMSFT>;

extern "system" {
    // Instance
    pub fn xrCreateInstance(
        create_info: *const XrInstanceCreateInfo,
        instance: *mut Instance,
    ) -> XrResult;
    pub fn xrDestroyInstance(instance: Instance) -> XrResult;
    pub fn xrGetInstanceProcAddr(
        instance: Instance,
        name: *const c_char,
        function: *mut Option<PfnVoidFunction>,
    ) -> XrResult;

    // Session
    pub fn xrDestroySession(session: Session) -> XrResult;

    // Space
    pub fn xrDestroySpace(space: Space) -> XrResult;

    // Actions
    pub fn xrDestroyAction(action: Action) -> XrResult;
    pub fn xrDestroyActionSet(action_set: ActionSet) -> XrResult;

    // Swapchain
    pub fn xrDestroySwapchain(swapchain: Swapchain) -> XrResult;
}

//! Basic example demonstrating owned OpenXR handles.
//!
//! Run with: cargo run --example basic --features linked

use std::os::raw::c_char;

use xr_handle::ffi::{self, PfnDestroySpatialAnchorMSFT, PfnVoidFunction, XrInstanceCreateInfo};
use xr_handle::{Instance, InstanceHandle, SpatialAnchorHandle};

fn create_instance(extensions: &[*const c_char]) -> xr_handle::Result<InstanceHandle> {
    let mut info = XrInstanceCreateInfo::default();
    for (dst, src) in info
        .application_info
        .application_name
        .iter_mut()
        .zip(b"xr-handle basic\0")
    {
        *dst = *src as c_char;
    }
    info.enabled_extension_count = extensions.len() as u32;
    info.enabled_extension_names = extensions.as_ptr();

    InstanceHandle::create(|slot| unsafe { ffi::xrCreateInstance(&info, slot) })
}

fn load_anchor_destroyer(instance: Instance) -> xr_handle::Result<Option<PfnDestroySpatialAnchorMSFT>> {
    let mut function: Option<PfnVoidFunction> = None;
    let result = unsafe {
        ffi::xrGetInstanceProcAddr(
            instance,
            ffi::XR_DESTROY_SPATIAL_ANCHOR_MSFT_NAME.as_ptr() as *const c_char,
            &mut function,
        )
    };
    ffi::check_result(result)?;

    // SAFETY: the loader returned the entry point registered under this name.
    Ok(function.map(|f| unsafe {
        std::mem::transmute::<PfnVoidFunction, PfnDestroySpatialAnchorMSFT>(f)
    }))
}

fn main() -> xr_handle::Result<()> {
    println!("--- Creating Instance ---");
    let anchor_ext = [ffi::XR_MSFT_SPATIAL_ANCHOR_EXTENSION_NAME.as_ptr() as *const c_char];

    let (instance, has_anchors) = match create_instance(&anchor_ext) {
        Ok(instance) => (instance, true),
        Err(xr_handle::Error::ExtensionNotPresent) => {
            println!("XR_MSFT_spatial_anchor not available, continuing without it");
            (create_instance(&[])?, false)
        }
        Err(xr_handle::Error::RuntimeUnavailable) => {
            println!("No OpenXR runtime available - skipping example");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("Instance: {:?}", instance);

    if has_anchors {
        println!("\n--- Loading Extension Entry Point ---");
        let destroyer = load_anchor_destroyer(instance.get())?;
        println!("xrDestroySpatialAnchorMSFT resolved: {}", destroyer.is_some());

        // Anchors need a session and a space; this only shows where the
        // destroy function goes.
        let anchor = SpatialAnchorHandle::new();
        println!("Empty anchor: {:?}", anchor);
    }

    // Moving the instance hands over ownership; the old binding is gone.
    let mut owner = InstanceHandle::new();
    owner.assign(instance);
    println!("\nInstance now owned by: {:?}", owner);

    owner.reset();
    println!("Instance destroyed: {}", owner.is_null());

    println!("\n--- Done ---");
    Ok(())
}

//! Ownership tests for the statically bound wrapper.
//!
//! These tests do not require an OpenXR runtime: destroy calls are recorded
//! in a per-thread log instead.

use std::cell::RefCell;

use xr_handle::{DestroyHandle, Space, UniqueHandle, XrResult};

thread_local! {
    static DESTROYED: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

enum RecordDestroy {}

impl DestroyHandle<Space> for RecordDestroy {
    unsafe fn destroy(handle: Space) -> XrResult {
        DESTROYED.with(|d| d.borrow_mut().push(handle.into_raw()));
        XrResult::SUCCESS
    }
}

enum FailDestroy {}

impl DestroyHandle<Space> for FailDestroy {
    unsafe fn destroy(handle: Space) -> XrResult {
        DESTROYED.with(|d| d.borrow_mut().push(handle.into_raw()));
        XrResult::ERROR_HANDLE_INVALID
    }
}

type Owned = UniqueHandle<Space, RecordDestroy>;

fn destroyed() -> Vec<u64> {
    DESTROYED.with(|d| d.borrow().clone())
}

fn owned(raw: u64) -> Owned {
    let mut h = Owned::new();
    unsafe { *h.put() = Space::from_raw(raw) };
    h
}

#[test]
fn test_empty_drop_is_noop() {
    let h = Owned::new();
    assert!(h.is_null());
    assert_eq!(h.get(), Space::NULL);
    drop(h);

    let h = Owned::default();
    drop(h);

    assert!(destroyed().is_empty(), "empty wrappers must not destroy");
}

#[test]
fn test_reset_is_idempotent() {
    let mut h = owned(1);
    h.reset();
    assert!(h.is_null());
    h.reset();
    h.reset();
    drop(h);
    assert_eq!(destroyed(), vec![1]);
}

#[test]
fn test_put_replaces_and_releases_old_value() {
    let mut h = Owned::new();

    let slot = h.put();
    unsafe { *slot = Space::from_raw(1) };
    assert_eq!(h.get(), Space::from_raw(1));
    assert!(destroyed().is_empty());

    let slot = h.put();
    assert_eq!(destroyed(), vec![1], "put must release the old value first");
    assert!(h.is_null());
    unsafe { *slot = Space::from_raw(2) };
    assert_eq!(h.get(), Space::from_raw(2));

    drop(h);
    assert_eq!(destroyed(), vec![1, 2]);
}

#[test]
fn test_put_left_unfilled_stays_empty() {
    let mut h = owned(4);
    let _ = h.put();
    drop(h);
    assert_eq!(destroyed(), vec![4]);
}

#[test]
fn test_move_transfers_ownership() {
    let a = owned(10);
    let b = a;
    assert_eq!(b.get(), Space::from_raw(10));
    assert!(destroyed().is_empty());
    drop(b);
    assert_eq!(destroyed(), vec![10]);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut a = owned(11);
    let b = a.take();

    assert!(a.is_null(), "moved-from wrapper must be null");
    assert_eq!(b.get(), Space::from_raw(11));

    drop(a);
    assert!(destroyed().is_empty(), "moved-from wrapper must not destroy");

    drop(b);
    assert_eq!(destroyed(), vec![11]);
}

#[test]
fn test_assign_releases_previous_value() {
    let mut a = owned(20);
    let b = owned(21);

    a.assign(b);
    assert_eq!(destroyed(), vec![20]);
    assert_eq!(a.get(), Space::from_raw(21));

    drop(a);
    assert_eq!(destroyed(), vec![20, 21]);
}

#[test]
fn test_assign_into_empty() {
    let mut a = Owned::new();
    a.assign(owned(22));
    assert!(destroyed().is_empty());
    assert_eq!(a.get(), Space::from_raw(22));
}

#[test]
fn test_assign_same_value_is_noop() {
    let mut a = owned(30);
    // A second owner of the same value, as a self move-assignment produces.
    let alias = unsafe { Owned::from_raw(a.get()) };

    a.assign(alias);
    assert!(destroyed().is_empty(), "same-value assignment must not release");
    assert_eq!(a.get(), Space::from_raw(30));

    drop(a);
    assert_eq!(destroyed(), vec![30], "value must be destroyed exactly once");
}

#[test]
fn test_assign_empty_over_empty() {
    let mut a = Owned::new();
    a.assign(Owned::new());
    assert!(a.is_null());
    drop(a);
    assert!(destroyed().is_empty());
}

#[test]
fn test_assign_empty_releases_current() {
    let mut a = owned(31);
    a.assign(Owned::new());
    assert!(a.is_null());
    assert_eq!(destroyed(), vec![31]);
}

#[test]
fn test_swap_exchanges_ownership() {
    let mut a = owned(40);
    let mut b = owned(41);
    std::mem::swap(&mut a, &mut b);
    assert_eq!(a.get(), Space::from_raw(41));
    assert_eq!(b.get(), Space::from_raw(40));
    drop(a);
    drop(b);
    assert_eq!(destroyed(), vec![41, 40]);
}

#[test]
fn test_failed_destroy_is_not_surfaced() {
    let mut h = UniqueHandle::<Space, FailDestroy>::new();
    unsafe { *h.put() = Space::from_raw(50) };
    h.reset();
    assert!(h.is_null(), "wrapper must be empty even when destroy fails");
    h.reset();
    assert_eq!(destroyed(), vec![50]);
}

#[test]
fn test_each_value_destroyed_once_across_operations() {
    let mut a = owned(1);
    let mut b = a.take();
    unsafe { *a.put() = Space::from_raw(2) };
    b.assign(a.take());
    unsafe { *a.put() = Space::from_raw(3) };
    unsafe { *a.put() = Space::from_raw(4) };
    let c = b.take();
    b.reset();
    drop(a);
    drop(b);
    drop(c);

    let mut log = destroyed();
    log.sort_unstable();
    assert_eq!(log, vec![1, 2, 3, 4]);
}

#[test]
fn test_create_returns_error_and_owns_nothing() {
    let result = Owned::create(|slot| {
        unsafe { *slot = Space::from_raw(60) };
        XrResult::ERROR_SESSION_LOST
    });
    let err = result.unwrap_err();
    assert!(err.is_lost());
    assert!(destroyed().is_empty());
}

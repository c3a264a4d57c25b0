#![cfg(feature = "strict-dynamic")]

use std::sync::atomic::{AtomicUsize, Ordering};

use not_null::{report, ContractViolation, NonNullRef, Operation};

static CONSTRUCTS: AtomicUsize = AtomicUsize::new(0);
static ASSIGNS: AtomicUsize = AtomicUsize::new(0);

fn count(violation: &ContractViolation) {
    match violation.operation() {
        Operation::Construct => CONSTRUCTS.fetch_add(1, Ordering::SeqCst),
        Operation::Assign => ASSIGNS.fetch_add(1, Ordering::SeqCst),
    };
}

fn ignore(_violation: &ContractViolation) {}

// Single test: the reporter is process-wide state.
#[test]
fn test_reporter_sees_every_violation() {
    assert!(report::set_reporter(count).is_none());

    let value = 42;
    let mut wrapper = NonNullRef::new(Some(&value)).unwrap();
    assert_eq!(CONSTRUCTS.load(Ordering::SeqCst), 0);

    assert!(NonNullRef::new(None::<&u32>).is_err());
    assert!(NonNullRef::new(std::ptr::null::<u32>()).is_err());
    assert!(wrapper.assign(None).is_err());

    assert_eq!(CONSTRUCTS.load(Ordering::SeqCst), 2);
    assert_eq!(ASSIGNS.load(Ordering::SeqCst), 1);

    assert!(report::set_reporter(ignore).is_some());

    assert!(NonNullRef::new(None::<&u32>).is_err());
    assert_eq!(CONSTRUCTS.load(Ordering::SeqCst), 2);

    assert!(report::take_reporter().is_some());
    assert!(report::take_reporter().is_none());

    assert!(NonNullRef::new(None::<&u32>).is_err());
    assert_eq!(CONSTRUCTS.load(Ordering::SeqCst), 2);
}

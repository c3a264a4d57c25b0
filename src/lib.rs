#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A handle that is never null.
//!
//! [`NonNullRef`] wraps a raw pointer or pointer-like handle and rejects the
//! null sentinel: at build time when the null is a constant, and at run time
//! otherwise. A function that takes a `NonNullRef` needs no null check of its
//! own.
//!
//! # Example
//! ```
//! use not_null::{non_null, NonNullRef};
//!
//! struct App {
//!     name: String,
//! }
//!
//! fn run_app(app: NonNullRef<*mut App>) -> String {
//!     // The pointer is non-null; liveness is still ours to ensure.
//!     unsafe { app.as_ref() }.name.clone()
//! }
//!
//! let app = Box::into_raw(Box::new(App { name: "Poker".into() }));
//! let wrapper = NonNullRef::new(app).unwrap();
//! assert_eq!(run_app(wrapper), "Poker");
//! drop(unsafe { Box::from_raw(app) });
//!
//! const ANSWER: NonNullRef<*const u32> = non_null!(&42u32);
//! assert_eq!(unsafe { *ANSWER.as_ref() }, 42);
//! ```
//!
//! # Modes
//!
//! A null handle reaching [`NonNullRef::new`] or [`NonNullRef::assign`] at run
//! time is a [`ContractViolation`]. What happens next is chosen for the whole
//! build:
//!
//! * with the `strict-dynamic` feature, the violation is returned as `Err` for
//!   the caller to handle and report;
//! * otherwise it is reported and the process is aborted.
//!
//! In both modes the violation is first passed to the reporter installed with
//! [`report::set_reporter`].

mod contract;
mod mutex;
mod non_null;
mod nullable;
pub mod report;

pub use contract::{mode, ContractViolation, Mode, Operation};
pub use non_null::NonNullRef;
pub use nullable::Nullable;

/// Builds a [`NonNullRef`] from a constant pointer, failing the build if it is null.
///
/// `non_null!(ptr)` takes a `*const T`, `non_null!(mut ptr)` a `*mut T`. The
/// expression is evaluated at compile time, so it must be a constant.
///
/// ```
/// use not_null::non_null;
///
/// let value = non_null!(core::ptr::NonNull::<u8>::dangling().as_ptr() as *const u8);
/// assert!(!value.get().is_null());
/// ```
///
/// ```compile_fail
/// use not_null::non_null;
///
/// let value = non_null!(core::ptr::null::<u8>());
/// ```
///
/// ```compile_fail
/// use not_null::non_null;
///
/// let value = non_null!(mut core::ptr::null_mut::<u8>());
/// ```
///
/// A pointer only known at run time cannot be passed in; use
/// [`NonNullRef::new`], which applies the configured [`Mode`].
///
/// ```compile_fail
/// use not_null::non_null;
///
/// let value = 42u32;
/// let ptr = core::hint::black_box(&value as *const u32);
/// let handle = non_null!(ptr);
/// ```
#[macro_export]
macro_rules! non_null {
    (mut $ptr:expr) => {
        const { $crate::NonNullRef::__from_const_mut($ptr) }
    };
    ($ptr:expr) => {
        const { $crate::NonNullRef::__from_const($ptr) }
    };
}

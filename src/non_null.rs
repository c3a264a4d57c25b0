use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::contract::{self, ContractViolation, Operation};
use crate::nullable::Nullable;

/// A handle that is never null.
///
/// `NonNullRef<P>` wraps a reference-like handle `P` (a raw pointer, an
/// `Option<&T>`, ...) and refuses to hold its empty sentinel. Null constants
/// are rejected while building; null values discovered at run time are
/// rejected by the checked constructors according to the crate's
/// [`Mode`](crate::Mode).
///
/// A function taking a `NonNullRef` states its precondition in its signature,
/// and its body need not check for null:
///
/// ```
/// use not_null::NonNullRef;
///
/// struct App {
///     name: &'static str,
/// }
///
/// fn run_app(app: NonNullRef<Option<&App>>) -> &'static str {
///     app.name
/// }
///
/// let poker = App { name: "Poker" };
/// assert_eq!(run_app(NonNullRef::from(&poker)), "Poker");
/// ```
///
/// Passing null where a `NonNullRef` is expected does not compile:
///
/// ```compile_fail
/// use not_null::NonNullRef;
///
/// fn run_app(app: NonNullRef<*mut u32>) {}
///
/// run_app(core::ptr::null_mut());
/// ```
///
/// ```compile_fail
/// use not_null::NonNullRef;
///
/// let app: NonNullRef<Option<&u32>> = None.into();
/// ```
///
/// and there is no empty default to fall back on:
///
/// ```compile_fail
/// use not_null::NonNullRef;
///
/// let app: NonNullRef<*const u32> = Default::default();
/// ```
///
/// The wrapper does not own its referent and does not keep it alive. A raw
/// pointer handle stays non-null after the referent is freed elsewhere: it is
/// then dangling, which this type does not detect.
#[repr(transparent)]
pub struct NonNullRef<P: Nullable> {
    value: P,
}

impl<P: Nullable> NonNullRef<P> {
    /// Wraps `value`, refusing the empty sentinel.
    ///
    /// # Errors
    ///
    /// If `value` is null, the violation is reported and then either returned
    /// ([`Mode::StrictDynamic`](crate::Mode::StrictDynamic)) or the process
    /// is terminated ([`Mode::TerminateOnViolation`](crate::Mode::TerminateOnViolation)).
    #[track_caller]
    pub fn new(value: P) -> Result<Self, ContractViolation> {
        if value.is_null() {
            return Err(contract::violation(Operation::Construct));
        }
        Ok(Self { value })
    }

    /// Wraps `value` without checking it.
    ///
    /// # Safety
    ///
    /// `value` must not be null. Code receiving the wrapper relies on it.
    pub const unsafe fn new_unchecked(value: P) -> Self {
        Self { value }
    }

    /// Replaces the held handle with `value`, refusing the empty sentinel.
    ///
    /// On failure the previously held handle is kept.
    ///
    /// # Errors
    ///
    /// As for [`NonNullRef::new`].
    #[track_caller]
    pub fn assign(&mut self, value: P) -> Result<(), ContractViolation> {
        if value.is_null() {
            return Err(contract::violation(Operation::Assign));
        }
        self.value = value;
        Ok(())
    }

    /// Returns a reference to the held handle.
    pub fn as_inner(&self) -> &P {
        &self.value
    }

    /// Unwraps the held handle.
    pub fn into_inner(self) -> P {
        self.value
    }
}

impl<P: Nullable + Copy> NonNullRef<P> {
    /// Returns the held handle.
    pub fn get(&self) -> P {
        self.value
    }
}

impl<T: ?Sized> NonNullRef<*const T> {
    // Only reached through `non_null!`, which evaluates it in a `const` block.
    #[doc(hidden)]
    pub const fn __from_const(ptr: *const T) -> Self {
        if ptr.is_null() {
            panic!("non_null! received a null pointer");
        }
        Self { value: ptr }
    }

    /// Returns the held pointer as a [`NonNull`].
    pub fn as_non_null(&self) -> NonNull<T> {
        // SAFETY: the held pointer is never null.
        unsafe { NonNull::new_unchecked(self.value as *mut T) }
    }

    /// Borrows the referent.
    ///
    /// # Safety
    ///
    /// A non-null handle may still dangle. The referent must be alive and
    /// not mutably borrowed for `'a`.
    pub unsafe fn as_ref<'a>(&self) -> &'a T {
        &*self.value
    }
}

impl<T: ?Sized> NonNullRef<*mut T> {
    #[doc(hidden)]
    pub const fn __from_const_mut(ptr: *mut T) -> Self {
        if ptr.is_null() {
            panic!("non_null!(mut ..) received a null pointer");
        }
        Self { value: ptr }
    }

    /// Returns the held pointer as a [`NonNull`].
    pub fn as_non_null(&self) -> NonNull<T> {
        // SAFETY: the held pointer is never null.
        unsafe { NonNull::new_unchecked(self.value) }
    }

    /// Borrows the referent.
    ///
    /// # Safety
    ///
    /// The wrapper only rules out null. If the referent was freed through
    /// another handle, this reads freed memory, so it must outlive `'a`.
    pub unsafe fn as_ref<'a>(&self) -> &'a T {
        &*self.value
    }

    /// Returns a unique reference to the value.
    ///
    /// # Safety
    ///
    /// As for [`as_ref`](Self::as_ref), and no other reference to the value may be live.
    pub unsafe fn as_mut<'a>(&mut self) -> &'a mut T {
        &mut *self.value
    }
}

impl<T: ?Sized> NonNullRef<Option<NonNull<T>>> {
    /// Returns the held pointer.
    pub fn as_non_null(&self) -> NonNull<T> {
        match self.value {
            Some(ptr) => ptr,
            None => unreachable!("NonNullRef holds a null handle"),
        }
    }
}

impl<'a, T: ?Sized> Deref for NonNullRef<Option<&'a T>> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.value {
            Some(reference) => reference,
            None => unreachable!("NonNullRef holds a null handle"),
        }
    }
}

impl<'a, T: ?Sized> Deref for NonNullRef<Option<&'a mut T>> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(reference) => &**reference,
            None => unreachable!("NonNullRef holds a null handle"),
        }
    }
}

impl<'a, T: ?Sized> DerefMut for NonNullRef<Option<&'a mut T>> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(reference) => &mut **reference,
            None => unreachable!("NonNullRef holds a null handle"),
        }
    }
}

impl<'a, T: ?Sized> From<&'a T> for NonNullRef<Option<&'a T>> {
    fn from(reference: &'a T) -> Self {
        Self {
            value: Some(reference),
        }
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for NonNullRef<Option<&'a mut T>> {
    fn from(reference: &'a mut T) -> Self {
        Self {
            value: Some(reference),
        }
    }
}

impl<T: ?Sized> From<&T> for NonNullRef<*const T> {
    fn from(reference: &T) -> Self {
        Self { value: reference }
    }
}

impl<T: ?Sized> From<&mut T> for NonNullRef<*mut T> {
    fn from(reference: &mut T) -> Self {
        Self { value: reference }
    }
}

impl<T: ?Sized> From<NonNull<T>> for NonNullRef<*mut T> {
    fn from(ptr: NonNull<T>) -> Self {
        Self {
            value: ptr.as_ptr(),
        }
    }
}

impl<T: ?Sized> From<NonNull<T>> for NonNullRef<Option<NonNull<T>>> {
    fn from(ptr: NonNull<T>) -> Self {
        Self { value: Some(ptr) }
    }
}

impl<P: Nullable + Clone> Clone for NonNullRef<P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<P: Nullable + Copy> Copy for NonNullRef<P> {}

impl<P: Nullable + fmt::Debug> fmt::Debug for NonNullRef<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NonNullRef").field(&self.value).finish()
    }
}

impl<P: Nullable + PartialEq> PartialEq for NonNullRef<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: Nullable + Eq> Eq for NonNullRef<P> {}

impl<P: Nullable + Hash> Hash for NonNullRef<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<P: Nullable + fmt::Pointer> fmt::Pointer for NonNullRef<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.value, f)
    }
}

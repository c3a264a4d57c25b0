use core::ptr::NonNull;

/// A handle type whose domain contains an empty sentinel.
///
/// [`NonNullRef`](crate::NonNullRef) relies on `is_null` to decide whether a
/// handle may be stored, so it must return `true` for exactly the value(s)
/// that mean "no referent".
pub trait Nullable {
    /// Returns true if this handle is the empty sentinel.
    fn is_null(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for Option<&T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for Option<&mut T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for Option<NonNull<T>> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::Nullable;
    use core::ptr::{self, NonNull};

    #[test]
    fn test_raw_pointers() {
        let value = 42;

        assert!(Nullable::is_null(&ptr::null::<i32>()));
        assert!(Nullable::is_null(&ptr::null_mut::<i32>()));

        assert!(!Nullable::is_null(&(&value as *const i32)));
        assert!(!Nullable::is_null(&(&value as *const i32 as *mut i32)));
    }

    #[test]
    fn test_unsized_raw_pointers() {
        let values = [1, 2, 3];
        let slice: *const [i32] = &values[..];

        assert!(!Nullable::is_null(&slice));
        assert!(Nullable::is_null(&ptr::slice_from_raw_parts(
            ptr::null::<i32>(),
            3
        )));
    }

    #[test]
    fn test_options() {
        let mut value = 42;

        assert!(Nullable::is_null(&None::<&i32>));
        assert!(!Nullable::is_null(&Some(&value)));

        assert!(!Nullable::is_null(&Some(&mut value)));
        assert!(Nullable::is_null(&None::<&mut i32>));

        assert!(!Nullable::is_null(&Some(NonNull::from(&value))));
        assert!(Nullable::is_null(&None::<NonNull<i32>>));
    }

    #[test]
    fn test_dangling_is_not_null() {
        // Dangling is distinct from null
        assert!(!Nullable::is_null(&NonNull::<u64>::dangling().as_ptr()));
    }
}

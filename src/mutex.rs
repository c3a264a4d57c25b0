use core::cell::Cell;

use critical_section::CriticalSection;

/// A slot of process-wide state, shared across threads and interrupt contexts.
#[repr(transparent)]
pub struct Mutex<T>(critical_section::Mutex<Cell<T>>);

impl<T> Mutex<T> {
    /// Creates a new Mutex containing the given value.
    pub const fn new(value: T) -> Self {
        Self(critical_section::Mutex::new(Cell::new(value)))
    }

    /// Replaces the contained value, returning the old one.
    pub fn replace(&self, cs: CriticalSection, value: T) -> T {
        self.0.borrow(cs).replace(value)
    }
}

impl<T: Copy> Mutex<T> {
    /// Returns a copy of the contained value.
    pub fn get(&self, cs: CriticalSection) -> T {
        self.0.borrow(cs).get()
    }
}

impl<T: Default> Mutex<T> {
    /// Takes the value of the mutex, leaving Default::default() in its place.
    pub fn take(&self, cs: CriticalSection) -> T {
        self.0.borrow(cs).take()
    }
}

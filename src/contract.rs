//! The runtime half of the non-null guarantee.
//!
//! Every checked constructor and assignment of [`NonNullRef`](crate::NonNullRef)
//! funnels a null handle through [`violation`], which reports it and then
//! takes the failure path selected at build time by the `strict-dynamic`
//! feature.

use core::fmt;
use core::panic::Location;

use thiserror::Error;

/// The operation that received a null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Building a new [`NonNullRef`](crate::NonNullRef).
    Construct,
    /// Reassigning an existing [`NonNullRef`](crate::NonNullRef).
    Assign,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Construct => f.write_str("construct"),
            Operation::Assign => f.write_str("assign"),
        }
    }
}

/// A null handle reached a slot that must never hold one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contract violation: null handle passed to {operation} at {location}")]
pub struct ContractViolation {
    operation: Operation,
    location: &'static Location<'static>,
}

impl ContractViolation {
    #[track_caller]
    pub(crate) fn new(operation: Operation) -> Self {
        Self {
            operation,
            location: Location::caller(),
        }
    }

    /// The operation that was refused.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Where the null handle was supplied.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// How a runtime violation is handled, fixed for the whole build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Violations are returned to the caller as [`ContractViolation`].
    StrictDynamic,
    /// Violations are reported and then end the process.
    TerminateOnViolation,
}

/// Returns the mode this crate was built with.
pub const fn mode() -> Mode {
    if cfg!(feature = "strict-dynamic") {
        Mode::StrictDynamic
    } else {
        Mode::TerminateOnViolation
    }
}

/// Reports a violation and applies the configured mode.
///
/// Only returns in [`Mode::StrictDynamic`].
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violation(operation: Operation) -> ContractViolation {
    let violation = ContractViolation::new(operation);
    crate::report::report(&violation);
    escalate(violation)
}

#[cfg(feature = "strict-dynamic")]
fn escalate(violation: ContractViolation) -> ContractViolation {
    violation
}

#[cfg(not(feature = "strict-dynamic"))]
fn escalate(violation: ContractViolation) -> ContractViolation {
    terminate(&violation)
}

#[cfg(all(not(feature = "strict-dynamic"), feature = "std"))]
fn terminate(_violation: &ContractViolation) -> ! {
    std::process::abort()
}

// Without std there is no process to abort; the final binary's panic strategy decides.
#[cfg(all(not(feature = "strict-dynamic"), not(feature = "std")))]
fn terminate(violation: &ContractViolation) -> ! {
    panic!("{}", violation)
}

#[cfg(test)]
mod tests {
    use super::{mode, ContractViolation, Mode, Operation};

    #[test]
    fn test_display() {
        let violation = ContractViolation::new(Operation::Assign);
        let line = line!() - 1;

        let message = violation.to_string();

        assert!(message.starts_with("contract violation: null handle passed to assign at "));
        assert!(message.contains(&format!("{}:{}:", file!(), line)));
    }

    #[test]
    fn test_location_is_caller() {
        let violation = ContractViolation::new(Operation::Construct);

        assert_eq!(violation.operation(), Operation::Construct);
        assert_eq!(violation.location().file(), file!());
        assert_eq!(violation.location().line(), line!() - 4);
    }

    #[test]
    fn test_mode_matches_features() {
        if cfg!(feature = "strict-dynamic") {
            assert_eq!(mode(), Mode::StrictDynamic);
        } else {
            assert_eq!(mode(), Mode::TerminateOnViolation);
        }
    }

    #[cfg(feature = "strict-dynamic")]
    #[test]
    fn test_violation_returns_in_strict_mode() {
        let violation = super::violation(Operation::Construct);

        assert_eq!(violation.operation(), Operation::Construct);
        assert_eq!(violation.location().line(), line!() - 3);
    }
}

//! Process-wide reporting of contract violations.
//!
//! ```
//! use not_null::{report, ContractViolation};
//!
//! fn log_violation(violation: &ContractViolation) {
//!     eprintln!("null input params: {}", violation);
//! }
//!
//! let previous = report::set_reporter(log_violation);
//! assert!(previous.is_none());
//!
//! assert!(report::take_reporter().is_some());
//! ```

use crate::contract::ContractViolation;
use crate::mutex::Mutex;

/// Called with every runtime contract violation before the configured mode applies.
pub type Reporter = fn(&ContractViolation);

static REPORTER: Mutex<Option<Reporter>> = Mutex::new(None);

/// Installs `reporter`, returning the one it replaces.
pub fn set_reporter(reporter: Reporter) -> Option<Reporter> {
    critical_section::with(|cs| REPORTER.replace(cs, Some(reporter)))
}

/// Uninstalls the current reporter.
pub fn take_reporter() -> Option<Reporter> {
    critical_section::with(|cs| REPORTER.take(cs))
}

pub(crate) fn report(violation: &ContractViolation) {
    // Call outside the critical section so a reporter may itself install or take.
    match critical_section::with(|cs| REPORTER.get(cs)) {
        Some(reporter) => reporter(violation),
        None => fallback(violation),
    }
}

#[cfg(all(feature = "std", not(feature = "strict-dynamic")))]
fn fallback(violation: &ContractViolation) {
    std::eprintln!("{}", violation);
}

// Strict mode hands the violation back to the caller, who reports it.
#[cfg(not(all(feature = "std", not(feature = "strict-dynamic"))))]
fn fallback(_violation: &ContractViolation) {}

//! Rule implementations for loclint.
//!
//! ## Module Structure
//!
//! - `duplicate_locator`: String literals that duplicate an exported locator

pub mod duplicate_locator;

pub use duplicate_locator::{
    FixOutcome, LocatorTarget, MAX_FIX_PASSES, check_duplicate_locators, fix_duplicate_locators,
    resolve_target,
};

//! Auto-fix support.
//!
//! - `edit`: Text edits, merged fixes and their application
//! - `planner`: Replacement and import edits for a matched literal

pub mod edit;
pub mod planner;

pub use edit::{AppliedFixes, Fix, FixError, TextEdit, apply_fixes};
pub use planner::{plan_fix, plan_import_edits, plan_replacement};

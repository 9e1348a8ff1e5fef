//! Rendering of verification results and leak reports.
//!
//! Only the core-facing half of the presentation layer lives here: turning a
//! [`Verification`](crate::Verification) and a
//! [`LeakEstimate`](crate::LeakEstimate) into text. Input surfaces, menus,
//! and hardware drivers are the caller's concern.

pub mod json;
pub mod terminal;

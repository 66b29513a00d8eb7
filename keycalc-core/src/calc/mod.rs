//! Calculator state machine
//!
//! Two operands and at most one pending operator. The entry state is an
//! explicit tagged value; each logical keypress produces the next state and
//! an [`Action`] describing what happened, which in turn says how the
//! display must change.

pub mod action;
pub mod machine;

pub use action::{Action, Output, Text, TEXT_CAPACITY};
pub use machine::{Calculator, Entry};

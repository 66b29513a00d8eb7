//! Keypress outcomes and the display updates they require

use core::fmt::Write;

use heapless::String;

use crate::key::Operator;

/// Capacity of a rendered display text
pub const TEXT_CAPACITY: usize = 16;

/// Text sent to the display in one update
pub type Text = String<TEXT_CAPACITY>;

/// What a logical keypress did to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A digit was accumulated; carries the operand being entered
    Digit { operand: i32 },
    /// Operator recorded, second operand entry begins
    Operator(Operator),
    /// Operator pressed while one was already pending; first one wins
    OperatorIgnored(Operator),
    /// `=` evaluated the expression
    Result(i32),
    /// `C` reset everything
    Cleared,
}

/// Display update for an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Write after whatever is already shown
    Append(Text),
    /// Clear the display, then write
    Replace(Text),
    /// Clear the display only
    Clear,
}

impl Action {
    /// Display update this action requires, if any
    ///
    /// Digits and operators append, so the screen accumulates the expression.
    /// Only a result or a clear wipes it.
    pub fn output(&self) -> Option<Output> {
        match *self {
            Action::Digit { operand } => Some(Output::Append(number(operand))),
            Action::Operator(op) => {
                let mut text = Text::new();
                let _ = text.push(op.as_char());
                Some(Output::Append(text))
            }
            Action::OperatorIgnored(_) => None,
            Action::Result(value) => Some(Output::Replace(number(value))),
            Action::Cleared => Some(Output::Clear),
        }
    }
}

/// Format an integer in decimal
///
/// `i32::MIN` is 11 characters, well inside [`TEXT_CAPACITY`].
pub fn number(value: i32) -> Text {
    let mut text = Text::new();
    let _ = write!(text, "{}", value);
    text
}

//! State machine definition
//!
//! The machine is either entering the first operand or, once an operator has
//! been pressed, the second. Everything the display shows is a function of the
//! current state and the key.

use crate::arith;
use crate::key::{Key, Operator};

use super::action::Action;

/// Operand entry state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entry {
    /// No operator pending; digits go to the first operand
    FirstOperand { value: i32 },
    /// Operator pending; digits go to the second operand
    SecondOperand { first: i32, op: Operator, value: i32 },
}

impl Default for Entry {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Entry {
    /// Power-on and post-clear state
    pub const ZERO: Entry = Entry::FirstOperand { value: 0 };

    /// First operand (the running result after `=`)
    pub fn operand1(&self) -> i32 {
        match *self {
            Entry::FirstOperand { value } => value,
            Entry::SecondOperand { first, .. } => first,
        }
    }

    /// Second operand; zero while no operator is pending
    pub fn operand2(&self) -> i32 {
        match *self {
            Entry::FirstOperand { .. } => 0,
            Entry::SecondOperand { value, .. } => value,
        }
    }

    /// Operator waiting for its second operand
    pub fn pending_operator(&self) -> Option<Operator> {
        match *self {
            Entry::FirstOperand { .. } => None,
            Entry::SecondOperand { op, .. } => Some(op),
        }
    }

    /// Process a key and return the next state
    ///
    /// This is the complete transition table; every (state, key) pair has a
    /// defined outcome.
    pub fn transition(self, key: Key) -> (Self, Action) {
        use Entry::*;

        match (self, key) {
            (_, Key::Clear) => (Self::ZERO, Action::Cleared),

            (entry, Key::Equals) => {
                let result = arith::evaluate_pending(
                    entry.operand1(),
                    entry.operand2(),
                    entry.pending_operator(),
                );
                (FirstOperand { value: result }, Action::Result(result))
            }

            (FirstOperand { value }, Key::Digit(d)) => {
                let value = push_digit(value, d);
                (FirstOperand { value }, Action::Digit { operand: value })
            }
            (FirstOperand { value }, Key::Op(op)) => (
                SecondOperand {
                    first: value,
                    op,
                    value: 0,
                },
                Action::Operator(op),
            ),

            (SecondOperand { first, op, value }, Key::Digit(d)) => {
                let value = push_digit(value, d);
                (
                    SecondOperand { first, op, value },
                    Action::Digit { operand: value },
                )
            }
            // First operator wins
            (SecondOperand { .. }, Key::Op(ignored)) => (self, Action::OperatorIgnored(ignored)),
        }
    }
}

/// Shift a decimal digit into an operand, wrapping at the integer width
fn push_digit(value: i32, digit: u8) -> i32 {
    value.wrapping_mul(10).wrapping_add(i32::from(digit))
}

/// The calculator: owns the entry state and applies keypresses to it
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    entry: Entry,
}

impl Calculator {
    /// Create a calculator in the zero state
    pub const fn new() -> Self {
        Self { entry: Entry::ZERO }
    }

    /// Apply one logical keypress
    pub fn press(&mut self, key: Key) -> Action {
        let (next, action) = self.entry.transition(key);
        self.entry = next;
        action
    }

    /// Current entry state
    pub fn entry(&self) -> Entry {
        self.entry
    }

    pub fn operand1(&self) -> i32 {
        self.entry.operand1()
    }

    pub fn operand2(&self) -> i32 {
        self.entry.operand2()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.entry.pending_operator()
    }
}

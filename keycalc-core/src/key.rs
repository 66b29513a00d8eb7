//! Key symbols and keypad layout

/// The four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Character shown on the display for this operator
    pub const fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Parse an operator character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// A symbol on the keypad
///
/// "No key" is expressed as `Option<Key>::None` wherever a scan can come back
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Decimal digit, always 0-9
    Digit(u8),
    /// Arithmetic operator
    Op(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
}

/// Row x column symbol table of the keypad
///
/// ```text
/// row0: 7 8 9 /
/// row1: 4 5 6 *
/// row2: 1 2 3 -
/// row3: C 0 = +
/// ```
pub const LAYOUT: [[Key; 4]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Op(Operator::Div)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Op(Operator::Mul)],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Op(Operator::Sub)],
    [Key::Clear, Key::Digit(0), Key::Equals, Key::Op(Operator::Add)],
];

impl Key {
    /// Symbol at a matrix position, `None` outside the 4x4 grid
    pub fn at(row: usize, col: usize) -> Option<Self> {
        LAYOUT.get(row)?.get(col).copied()
    }

    /// Parse a display character into a key
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '=' => Some(Key::Equals),
            'C' => Some(Key::Clear),
            _ => Operator::from_char(c).map(Key::Op),
        }
    }

    /// Character printed on the key
    pub const fn as_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d) as char,
            Key::Op(op) => op.as_char(),
            Key::Equals => '=',
            Key::Clear => 'C',
        }
    }
}

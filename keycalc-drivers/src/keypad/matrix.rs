//! 4x4 matrix keypad scanner
//!
//! Rows are pulled up. Columns are selected one at a time by driving them low;
//! a key that is down connects its row to the selected column and the row
//! reads low.
//!
//! Columns are scanned 0 to 3 and, within a column, rows 0 to 3. The first
//! low row wins, so ghost contacts resolve to the upper row instead of an
//! error. Every column is back high when a scan returns.

use embedded_hal::delay::DelayNs;
use keycalc_core::traits::Keypad;
use keycalc_core::Key;
use keycalc_hal::{InputPin, KeypadLines, OutputPin};

/// Wait after selecting a column before sampling rows (µs)
pub const COLUMN_SETTLE_US: u32 = 5;

/// Matrix keypad over named keypad lines
pub struct MatrixKeypad<C, R, D> {
    lines: KeypadLines<C, R>,
    delay: D,
}

impl<C: OutputPin, R: InputPin, D: DelayNs> MatrixKeypad<C, R, D> {
    /// Take ownership of the keypad lines
    pub fn new(lines: KeypadLines<C, R>, delay: D) -> Self {
        Self { lines, delay }
    }

    /// Sample the rows with `col` selected
    fn sense_column(&mut self, col: usize) -> Option<usize> {
        self.lines.columns[col].set_low();
        self.delay.delay_us(COLUMN_SETTLE_US);

        let hit = self.lines.rows.iter_mut().position(|row| row.is_low());

        self.lines.columns[col].set_high();
        hit
    }

    /// Give the lines back
    pub fn release(self) -> (KeypadLines<C, R>, D) {
        (self.lines, self.delay)
    }
}

impl<C: OutputPin, R: InputPin, D: DelayNs> Keypad for MatrixKeypad<C, R, D> {
    fn scan(&mut self) -> Option<Key> {
        for col in 0..self.lines.columns.len() {
            if let Some(row) = self.sense_column(col) {
                return Key::at(row, col);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc_core::{Operator, LAYOUT};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared matrix: which keys are down and which columns are driven low
    #[derive(Default)]
    struct Matrix {
        pressed: [[bool; 4]; 4],
        column_low: [bool; 4],
    }

    type Shared = Rc<RefCell<Matrix>>;

    struct ColumnPin {
        matrix: Shared,
        col: usize,
    }

    impl OutputPin for ColumnPin {
        fn set_high(&mut self) {
            self.matrix.borrow_mut().column_low[self.col] = false;
        }

        fn set_low(&mut self) {
            self.matrix.borrow_mut().column_low[self.col] = true;
        }
    }

    struct RowPin {
        matrix: Shared,
        row: usize,
    }

    impl InputPin for RowPin {
        fn is_high(&mut self) -> bool {
            let m = self.matrix.borrow();
            !(0..4).any(|c| m.column_low[c] && m.pressed[self.row][c])
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn keypad() -> (Shared, MatrixKeypad<ColumnPin, RowPin, NoDelay>) {
        let matrix: Shared = Rc::new(RefCell::new(Matrix::default()));
        let columns = core::array::from_fn(|col| ColumnPin {
            matrix: matrix.clone(),
            col,
        });
        let rows = core::array::from_fn(|row| RowPin {
            matrix: matrix.clone(),
            row,
        });
        let lines = KeypadLines::new(columns, rows);
        (matrix, MatrixKeypad::new(lines, NoDelay))
    }

    #[test]
    fn test_no_key() {
        let (_, mut kp) = keypad();
        assert_eq!(kp.scan(), None);
    }

    #[test]
    fn test_every_position() {
        let (matrix, mut kp) = keypad();
        for row in 0..4 {
            for col in 0..4 {
                matrix.borrow_mut().pressed = [[false; 4]; 4];
                matrix.borrow_mut().pressed[row][col] = true;
                assert_eq!(kp.scan(), Key::at(row, col), "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_specific_symbols() {
        let (matrix, mut kp) = keypad();

        matrix.borrow_mut().pressed[3][0] = true;
        assert_eq!(kp.scan(), Some(Key::Clear));

        matrix.borrow_mut().pressed[3][0] = false;
        matrix.borrow_mut().pressed[0][3] = true;
        assert_eq!(kp.scan(), Some(Key::Op(Operator::Div)));
    }

    #[test]
    fn test_ghost_press_upper_row_wins() {
        let (matrix, mut kp) = keypad();

        // Rows 1 and 2 of column 1 both closed: "5" beats "2"
        matrix.borrow_mut().pressed[1][1] = true;
        matrix.borrow_mut().pressed[2][1] = true;
        assert_eq!(kp.scan(), Some(Key::Digit(5)));

        // Row 0 joins: "8" wins
        matrix.borrow_mut().pressed[0][1] = true;
        assert_eq!(kp.scan(), Some(Key::Digit(8)));
    }

    #[test]
    fn test_lower_column_scanned_first() {
        let (matrix, mut kp) = keypad();

        // "+" (row 3, col 3) and "4" (row 1, col 0): column 0 is scanned first
        matrix.borrow_mut().pressed[3][3] = true;
        matrix.borrow_mut().pressed[1][0] = true;
        assert_eq!(kp.scan(), Some(Key::Digit(4)));
    }

    #[test]
    fn test_columns_released_after_scan() {
        let (matrix, mut kp) = keypad();

        matrix.borrow_mut().pressed[2][2] = true;
        assert_eq!(kp.scan(), Some(Key::Digit(3)));
        assert_eq!(matrix.borrow().column_low, [false; 4]);

        matrix.borrow_mut().pressed[2][2] = false;
        assert_eq!(kp.scan(), None);
        assert_eq!(matrix.borrow().column_low, [false; 4]);
    }

    #[test]
    fn test_release_returns_lines() {
        let (matrix, kp) = keypad();
        let (lines, _) = kp.release();
        assert_eq!(lines.columns.len(), 4);
        assert_eq!(matrix.borrow().column_low, [false; 4]);
    }

    proptest! {
        #[test]
        fn prop_single_press_scans_to_layout(row in 0usize..4, col in 0usize..4) {
            let (matrix, mut kp) = keypad();
            matrix.borrow_mut().pressed[row][col] = true;

            prop_assert_eq!(kp.scan(), Some(LAYOUT[row][col]));
            prop_assert_eq!(matrix.borrow().column_low, [false; 4]);
        }

        #[test]
        fn prop_any_chord_is_first_hit_in_scan_order(pressed in prop::array::uniform4(prop::array::uniform4(any::<bool>()))) {
            let (matrix, mut kp) = keypad();
            matrix.borrow_mut().pressed = pressed;

            let expected = (0..4)
                .flat_map(|col| (0..4).map(move |row| (row, col)))
                .find(|&(row, col)| pressed[row][col])
                .map(|(row, col)| LAYOUT[row][col]);
            prop_assert_eq!(kp.scan(), expected);
            prop_assert_eq!(matrix.borrow().column_low, [false; 4]);
        }
    }
}

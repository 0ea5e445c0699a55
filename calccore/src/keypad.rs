//! Keyboard and button grid mappings
//!
//! Both input paths end up as the same [`Action`], so a click on `+` and a
//! typed `+` go through identical transitions.

use crate::evaluator::Operator;
use crate::machine::Action;

/// Label of the backspace button.
pub const BACKSPACE_LABEL: &str = "◀";

/// Button labels, row by row. The empty cell is covered by `0`, which spans
/// two columns.
pub const BUTTON_GRID: [[&str; 4]; 5] = [
    ["C", BACKSPACE_LABEL, "^", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["", "0", ".", "="],
];

/// A key press, already stripped of toolkit details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Backspace,
    Delete,
    Escape,
    /// A printable character.
    Char(char),
}

pub fn action_for_key(key: KeyPress) -> Option<Action> {
    match key {
        KeyPress::Enter => Some(Action::Equal),
        KeyPress::Backspace | KeyPress::Delete => Some(Action::Backspace),
        KeyPress::Escape => Some(Action::Clear),
        KeyPress::Char('=') => Some(Action::Equal),
        KeyPress::Char('p' | 'P') => Some(Action::Operator(Operator::Pow)),
        KeyPress::Char(c) => {
            if let Some(op) = Operator::from_symbol(c) {
                Some(Action::Operator(op))
            } else if c.is_ascii_digit() || c == '.' {
                Some(Action::Digit(c))
            } else {
                None
            }
        }
    }
}

pub fn action_for_label(label: &str) -> Option<Action> {
    match label {
        "C" => Some(Action::Clear),
        BACKSPACE_LABEL => Some(Action::Backspace),
        "=" => Some(Action::Equal),
        _ => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match Operator::from_symbol(c) {
                    Some(op) => Some(Action::Operator(op)),
                    None if c.is_ascii_digit() || c == '.' => Some(Action::Digit(c)),
                    None => None,
                },
                _ => None,
            }
        }
    }
}

/// How many columns the button at (`row`, `col`) covers. Zero for the cell
/// hidden under a spanning button.
pub fn column_span(row: usize, col: usize) -> usize {
    match BUTTON_GRID.get(row).and_then(|r| r.get(col)) {
        Some(&"") => 0,
        Some(&"0") => 2,
        Some(_) => 1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_keys() {
        assert_eq!(action_for_key(KeyPress::Enter), Some(Action::Equal));
        assert_eq!(action_for_key(KeyPress::Char('=')), Some(Action::Equal));
        assert_eq!(action_for_key(KeyPress::Backspace), Some(Action::Backspace));
        assert_eq!(action_for_key(KeyPress::Delete), Some(Action::Backspace));
        assert_eq!(action_for_key(KeyPress::Escape), Some(Action::Clear));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(action_for_key(KeyPress::Char('+')), Some(Action::Operator(Operator::Add)));
        assert_eq!(action_for_key(KeyPress::Char('-')), Some(Action::Operator(Operator::Sub)));
        assert_eq!(action_for_key(KeyPress::Char('*')), Some(Action::Operator(Operator::Mul)));
        assert_eq!(action_for_key(KeyPress::Char('/')), Some(Action::Operator(Operator::Div)));
        assert_eq!(action_for_key(KeyPress::Char('^')), Some(Action::Operator(Operator::Pow)));
        assert_eq!(action_for_key(KeyPress::Char('p')), Some(Action::Operator(Operator::Pow)));
        assert_eq!(action_for_key(KeyPress::Char('P')), Some(Action::Operator(Operator::Pow)));
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(action_for_key(KeyPress::Char('7')), Some(Action::Digit('7')));
        assert_eq!(action_for_key(KeyPress::Char('.')), Some(Action::Digit('.')));
    }

    #[test]
    fn test_other_keys_ignored() {
        for c in ['a', 'x', ' ', ',', '(', 'C'] {
            assert_eq!(action_for_key(KeyPress::Char(c)), None, "{c}");
        }
    }

    #[test]
    fn test_every_label_maps() {
        for (row, labels) in BUTTON_GRID.iter().enumerate() {
            for (col, label) in labels.iter().enumerate() {
                if column_span(row, col) == 0 {
                    assert_eq!(action_for_label(label), None);
                } else {
                    assert!(action_for_label(label).is_some(), "{label}");
                }
            }
        }
    }

    #[test]
    fn test_labels_match_keys() {
        assert_eq!(action_for_label("C"), action_for_key(KeyPress::Escape));
        assert_eq!(action_for_label(BACKSPACE_LABEL), action_for_key(KeyPress::Backspace));
        assert_eq!(action_for_label("="), action_for_key(KeyPress::Enter));
        for label in ["+", "-", "*", "/", "^", "0", "5", "."] {
            let c = label.chars().next().unwrap();
            assert_eq!(action_for_label(label), action_for_key(KeyPress::Char(c)), "{label}");
        }
    }

    #[test]
    fn test_spans() {
        assert_eq!(column_span(4, 0), 0);
        assert_eq!(column_span(4, 1), 2);
        assert_eq!(column_span(4, 3), 1);
        assert_eq!(column_span(0, 0), 1);
        assert_eq!(column_span(9, 9), 0);
    }
}

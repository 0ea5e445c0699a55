//! Equation state machine
//!
//! `Calculator` holds the left operand, the pending operator and the text
//! being typed. Every keypad event is an [`Action`] passed to
//! [`Calculator::apply`], which returns an [`ActionOutcome`] for the UI to
//! render.
//!
//! Operators chain: `3 + 4 +` evaluates `3 + 4` before starting the next
//! operation, and after `=` the result becomes the new left operand while the
//! operator is kept, so `3 + 4 =` followed by `2 =` gives `7 + 2 = 9`.

use tracing::{debug, warn};

use crate::config::CalcConfig;
use crate::display::DisplayBuffer;
use crate::error::CalcError;
use crate::evaluator::{evaluate, Operator};
use crate::number::{format_result_with, to_number, Number, DEFAULT_PRECISION};
use crate::token::{is_digit_or_dot, is_empty, is_valid_number};

/// Equation text shown before anything has been entered.
pub const DEFAULT_PLACEHOLDER: &str = "Sua conta";

/// Stands in for the result on the info line when an evaluation fails.
pub const FAILED_RESULT: &str = "error";

/// A single keypad event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Operator(Operator),
    Equal,
    Clear,
    Backspace,
}

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// The display or equation changed.
    Updated,
    /// The input was discarded and nothing changed.
    Ignored,
    /// An evaluation ran. Holds the result as displayed.
    Evaluated(Number),
    /// The transition was aborted. The UI should show the message.
    Failed(CalcError),
}

impl ActionOutcome {
    pub fn error(&self) -> Option<CalcError> {
        match self {
            ActionOutcome::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No left operand.
    Empty,
    /// A left operand with no operator waiting for its right side. After `=`
    /// the last operator is remembered but the machine is back here.
    LeftEntered,
    /// Left operand and operator set, waiting for the right operand.
    OperatorSet,
}

pub struct Calculator {
    display: DisplayBuffer,
    left: Option<Number>,
    op: Option<Operator>,
    /// Only set while an evaluation is running.
    right: Option<Number>,
    /// True right after `=` succeeded.
    evaluated: bool,
    equation: String,
    info: String,
    placeholder: String,
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_PLACEHOLDER, DEFAULT_PRECISION)
    }

    pub fn with_config(config: &CalcConfig) -> Self {
        Self::with_settings(&config.placeholder, config.precision)
    }

    fn with_settings(placeholder: &str, precision: u32) -> Self {
        Self {
            display: DisplayBuffer::new(),
            left: None,
            op: None,
            right: None,
            evaluated: false,
            equation: placeholder.to_string(),
            info: placeholder.to_string(),
            placeholder: placeholder.to_string(),
            precision,
        }
    }

    /// The text being typed.
    pub fn display(&self) -> &str {
        self.display.text()
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// The line above the display: the equation, or the last evaluation
    /// with its result.
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn left(&self) -> Option<Number> {
        self.left
    }

    pub fn operator(&self) -> Option<Operator> {
        self.op
    }

    pub fn right(&self) -> Option<Number> {
        self.right
    }

    pub fn phase(&self) -> Phase {
        match (self.left, self.op) {
            (None, _) => Phase::Empty,
            (Some(_), None) => Phase::LeftEntered,
            (Some(_), Some(_)) if self.evaluated => Phase::LeftEntered,
            (Some(_), Some(_)) => Phase::OperatorSet,
        }
    }

    /// Dispatch one keypad event.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        debug!(?action, display = self.display(), "apply");
        let outcome = match action {
            Action::Digit(c) => {
                if self.input(c) {
                    Ok(ActionOutcome::Updated)
                } else {
                    Ok(ActionOutcome::Ignored)
                }
            }
            Action::Operator(op) => self.press_operator(op).map(|evaluated| match evaluated {
                Some(result) => ActionOutcome::Evaluated(result),
                None => ActionOutcome::Updated,
            }),
            Action::Equal => self.press_equal().map(ActionOutcome::Evaluated),
            Action::Clear => {
                self.clear();
                Ok(ActionOutcome::Updated)
            }
            Action::Backspace => {
                self.backspace();
                Ok(ActionOutcome::Updated)
            }
        };
        outcome.unwrap_or_else(|err| {
            warn!(?action, %err, "action rejected");
            ActionOutcome::Failed(err)
        })
    }

    /// Append a digit or `.` to the display.
    ///
    /// Returns false, leaving the display alone, if `c` is not a digit or dot
    /// or if the result would not be a number (a second `.`, for instance)
    /// or would be too large for an `f64`.
    pub fn input(&mut self, c: char) -> bool {
        let mut buf = [0; 4];
        let c = c.encode_utf8(&mut buf);
        if !is_digit_or_dot(c) {
            return false;
        }
        let candidate = format!("{}{}", self.display.text(), c);
        if !is_valid_number(&candidate) {
            return false;
        }
        if !to_number(&candidate).is_some_and(Number::is_finite) {
            debug!(len = candidate.len(), "display would overflow");
            return false;
        }
        self.display.insert(c);
        true
    }

    /// Select an operator, taking the display as an operand.
    ///
    /// Evaluates the pending operation first when there is one and the
    /// display holds a number; returns that result if so. The display is
    /// cleared even when the press is rejected.
    pub fn press_operator(&mut self, op: Operator) -> Result<Option<Number>, CalcError> {
        let text = self.display.take();
        let mut evaluated = None;

        let left = match self.left {
            None => match to_number(&text) {
                Some(n) => n,
                // a leading minus starts from zero
                None if op == Operator::Sub && is_empty(&text) => Number::Int(0),
                None => return Err(CalcError::EmptyOperand),
            },
            Some(left) => match (self.op, to_number(&text)) {
                (Some(prev), Some(right)) => {
                    let result = self.calculate(left, prev, right)?;
                    evaluated = Some(self.shown(result));
                    result
                }
                _ => left,
            },
        };

        self.left = Some(left);
        self.op = Some(op);
        self.evaluated = false;
        self.set_equation(format!("{} {}", left, op));
        Ok(evaluated)
    }

    /// Evaluate `left op display`. Returns the result as displayed.
    pub fn press_equal(&mut self) -> Result<Number, CalcError> {
        let (left, op, right) = match (self.left, self.op, to_number(self.display.text())) {
            (Some(left), Some(op), Some(right)) => (left, op, right),
            _ => return Err(CalcError::IncompleteEquation),
        };

        let result = self.calculate(left, op, right);
        self.display.clear();
        let result = result?;
        self.evaluated = true;
        Ok(self.shown(result))
    }

    pub fn clear(&mut self) {
        self.reset();
        self.set_equation(self.placeholder.clone());
        self.display.clear();
    }

    pub fn backspace(&mut self) {
        self.display.backspace();
    }

    fn calculate(&mut self, left: Number, op: Operator, right: Number) -> Result<Number, CalcError> {
        self.right = Some(right);
        self.set_equation(format!("{} {} {}", left, op, right));

        let outcome = evaluate(left, op, right);
        self.right = None;
        match outcome {
            Ok(result) => {
                debug!(equation = %self.equation, %result, "evaluated");
                self.left = Some(result);
                self.info = format!("{} = {}", self.equation, self.shown(result));
                Ok(result)
            }
            Err(err) => {
                warn!(equation = %self.equation, %err, "evaluation failed");
                self.info = format!("{} = {}", self.equation, FAILED_RESULT);
                self.reset();
                Err(err.into())
            }
        }
    }

    fn reset(&mut self) {
        self.left = None;
        self.op = None;
        self.right = None;
        self.evaluated = false;
    }

    fn set_equation(&mut self, equation: String) {
        self.info = equation.clone();
        self.equation = equation;
    }

    fn shown(&self, n: Number) -> Number {
        format_result_with(n, self.precision)
    }
}

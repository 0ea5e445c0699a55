//! calccore — the logic behind the calculadora keypad
//!
//! No GUI code lives here. A front end turns its input events into
//! [`Action`]s (see [`keypad`]), feeds them to [`Calculator::apply`] and
//! renders [`Calculator::display`] and [`Calculator::info`].

pub mod config;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod keypad;
pub mod machine;
pub mod number;
pub mod token;

pub use config::{CalcConfig, ConfigError};
pub use error::CalcError;
pub use evaluator::{evaluate, ArithmeticError, Operator};
pub use keypad::{action_for_key, action_for_label, KeyPress, BUTTON_GRID};
pub use machine::{Action, ActionOutcome, Calculator, Phase};
pub use number::{format_result, to_number, Number};

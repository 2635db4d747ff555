//! Calculator engine
//!
//! A small state machine fed one keypad action at a time. After every
//! [`Calculator::apply`] the screen reads two strings back: the large
//! display (operand being typed, or the last result) and the small
//! expression trace above it (`"12 +"`, then `"12 + 7"`).
//!
//! Actions that make no sense in the current state are ignored rather than
//! reported. The only visible failure is the `"Error"` display after a
//! division by zero. Overflow shows `"Inf"` or `"-Inf"`. The next digit or
//! `Clear` recovers from either.

use tracing::{debug, trace};

use crate::arith::Operator;
use crate::format::{format_number, parse_display, Precision};

/// Longest display that digit entry may grow to.
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 15;
/// Display text shown after an undefined result.
pub const ERROR_DISPLAY: &str = "Error";

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Digit 0–9. Larger values are ignored.
    Digit(u8),
    Decimal,
    Operation(Operator),
    Calculate,
    Clear,
    ToggleSign,
    Percent,
}

impl Action {
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }
}

/// Where the engine is between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator chosen; entry goes to the first operand.
    Idle,
    /// Operator chosen; entry goes to the second operand.
    OperatorPending,
    /// A result is showing; the next digit starts over.
    JustCalculated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub max_display_len: usize,
    pub precision: Precision,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            precision: Precision::Shortest,
        }
    }
}

/// Both readouts, owned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readout {
    pub display: String,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    expression: String,
    first: Option<f64>,
    second: Option<f64>,
    operation: Option<Operator>,
    just_calculated: bool,
    /// An operator was just chosen and nothing has been entered since.
    awaiting_operand: bool,
    settings: EngineSettings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_settings(EngineSettings::default())
    }
}

/// Pure form of [`Calculator::apply`].
pub fn reduce(mut state: Calculator, action: Action) -> Calculator {
    state.apply(action);
    state
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            first: None,
            second: None,
            operation: None,
            just_calculated: false,
            awaiting_operand: false,
            settings,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn first(&self) -> Option<f64> {
        self.first
    }

    pub fn second(&self) -> Option<f64> {
        self.second
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Takes effect from the next action; the current display is kept.
    pub fn set_settings(&mut self, settings: EngineSettings) {
        self.settings = settings;
    }

    pub fn snapshot(&self) -> Readout {
        Readout {
            display: self.display.clone(),
            expression: self.expression.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.just_calculated {
            Phase::JustCalculated
        } else if self.operation.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    pub fn apply(&mut self, action: Action) {
        let changed = match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::Decimal => self.enter_decimal(),
            Action::Operation(op) => self.enter_operation(op),
            Action::Calculate => self.calculate(),
            Action::Clear => {
                self.clear();
                true
            }
            Action::ToggleSign => self.map_display(|v| -v),
            Action::Percent => self.map_display(|v| v / 100.0),
        };

        if changed {
            debug!(?action, display = %self.display, expression = %self.expression, "applied");
        } else {
            trace!(?action, phase = ?self.phase(), "ignored");
        }
    }

    fn enter_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        if self.just_calculated || self.display_value().is_none() {
            self.clear();
        }

        let c = char::from(b'0' + digit);
        // Exponent-form results can't be extended digit by digit.
        if self.display == "0" || self.display.contains('e') {
            self.display = c.to_string();
        } else if self.display.len() < self.settings.max_display_len {
            self.display.push(c);
        } else {
            return false;
        }

        self.awaiting_operand = false;
        self.set_active_operand(self.display_value());
        true
    }

    fn enter_decimal(&mut self) -> bool {
        if self.display.contains('.')
            || self.display.contains('e')
            || self.display.len() >= self.settings.max_display_len
            || self.display_value().is_none()
        {
            return false;
        }
        self.display.push('.');
        self.just_calculated = false;
        self.awaiting_operand = false;
        true
    }

    fn enter_operation(&mut self, op: Operator) -> bool {
        let chained = self.first.is_some() && self.second.is_some();
        if chained {
            self.calculate();
            if self.first.is_none() {
                // The pending operation had no defined result.
                return true;
            }
        }

        let Some(value) = self.display_value() else {
            return chained;
        };

        self.operation = Some(op);
        self.first = Some(value);
        self.second = None;
        self.expression = format!("{} {}", self.fmt(value), op.symbol());
        self.display = "0".to_string();
        self.awaiting_operand = true;
        self.just_calculated = false;
        true
    }

    fn calculate(&mut self) -> bool {
        let (Some(first), Some(op)) = (self.first, self.operation) else {
            return false;
        };
        let second = if self.awaiting_operand {
            Some(first)
        } else {
            self.display_value().or(self.second)
        };
        let Some(second) = second else {
            return false;
        };

        self.expression = format!("{} {} {}", self.fmt(first), op.symbol(), self.fmt(second));
        match op.apply(first, second) {
            Ok(result) => {
                self.display = self.fmt(result);
                self.first = Some(result);
            }
            Err(err) => {
                debug!(%err, first, second, "undefined result");
                self.display = ERROR_DISPLAY.to_string();
                self.first = None;
            }
        }
        self.second = None;
        self.operation = None;
        self.awaiting_operand = false;
        self.just_calculated = true;
        true
    }

    fn clear(&mut self) {
        *self = Self::with_settings(self.settings);
    }

    fn map_display(&mut self, f: impl FnOnce(f64) -> f64) -> bool {
        let Some(value) = self.display_value() else {
            return false;
        };
        self.display = self.fmt(f(value));
        self.set_active_operand(self.display_value());
        self.just_calculated = false;
        self.awaiting_operand = false;
        true
    }

    fn set_active_operand(&mut self, value: Option<f64>) {
        if self.operation.is_none() {
            self.first = value;
        } else {
            self.second = value;
        }
    }

    fn display_value(&self) -> Option<f64> {
        parse_display(&self.display)
    }

    fn fmt(&self, value: f64) -> String {
        format_number(value, self.settings.precision)
    }
}

//! Keypad layout and keyboard bindings

use crate::arith::Operator;
use crate::engine::Action;

/// Decides how a key is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Function,
    Digit,
    Operator,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub action: Action,
    pub role: KeyRole,
    /// Columns this key occupies.
    pub span: u8,
}

const fn key(label: &'static str, action: Action, role: KeyRole) -> Key {
    Key { label, action, role, span: 1 }
}

const fn digit(label: &'static str, d: u8) -> Key {
    key(label, Action::Digit(d), KeyRole::Digit)
}

const fn op(op: Operator) -> Key {
    key(op.symbol(), Action::Operation(op), KeyRole::Operator)
}

pub const COLUMNS: u8 = 4;

pub const ROWS: [&[Key]; 5] = [
    &[
        key("AC", Action::Clear, KeyRole::Function),
        key("+/-", Action::ToggleSign, KeyRole::Function),
        key("%", Action::Percent, KeyRole::Function),
        op(Operator::Divide),
    ],
    &[digit("7", 7), digit("8", 8), digit("9", 9), op(Operator::Multiply)],
    &[digit("4", 4), digit("5", 5), digit("6", 6), op(Operator::Subtract)],
    &[digit("1", 1), digit("2", 2), digit("3", 3), op(Operator::Add)],
    &[
        Key { span: 2, ..digit("0", 0) },
        key(".", Action::Decimal, KeyRole::Digit),
        key("=", Action::Calculate, KeyRole::Equals),
    ],
];

pub fn action_for_char(c: char) -> Option<Action> {
    let action = match c {
        '0'..='9' => Action::Digit(c as u8 - b'0'),
        '.' | ',' => Action::Decimal,
        '+' => Action::Operation(Operator::Add),
        '-' => Action::Operation(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => Action::Operation(Operator::Multiply),
        '/' | '÷' => Action::Operation(Operator::Divide),
        '%' => Action::Percent,
        '=' => Action::Calculate,
        'c' | 'C' => Action::Clear,
        'n' | 'N' => Action::ToggleSign,
        _ => return None,
    };
    Some(action)
}

/// Keys that produce no text event.
pub fn action_for_key(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::Enter => Some(Action::Calculate),
        egui::Key::Escape | egui::Key::Backspace | egui::Key::Delete => Some(Action::Clear),
        _ => None,
    }
}

/// Translate one frame's input events into engine actions, in order.
pub fn actions_from_events(events: &[egui::Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => actions.extend(text.chars().filter_map(action_for_char)),
            egui::Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                actions.extend(action_for_key(*key));
            }
            _ => {}
        }
    }
    actions
}

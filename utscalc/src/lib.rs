//! utscalc — a button-driven calculator
//!
//! The engine is a plain state machine with no GUI dependencies; the egui
//! screen in [`app`] forwards keypad and keyboard presses to it and paints
//! the two readouts back.

pub mod app;
pub mod arith;
pub mod engine;
pub mod format;
pub mod keypad;
pub mod settings;

pub use arith::{ArithmeticError, Operator};
pub use engine::{reduce, Action, Calculator, EngineSettings, Phase, Readout};
pub use settings::CalcSettings;

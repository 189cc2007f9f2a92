pub mod calculator;

pub use calculator::{Calculator, CalculatorPatch, TapeEntry};

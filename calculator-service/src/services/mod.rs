pub mod engine;

pub use engine::CalculatorEngine;

//! Calculator state and the commit semantics.
//!
//! The serialized shape is part of the HTTP contract: exactly
//! `{display, register, operation, tape}`.

use serde::{Deserialize, Deserializer, Serialize};

/// Operation tags the commit step recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
        }
    }

    /// Parses a pending tag. An unrecognized tag is not an error; it just
    /// commits nothing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "addition" => Some(Operation::Addition),
            _ => None,
        }
    }
}

/// One committed operation, recorded with the pre-operation operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    pub display: f64,
    pub register: f64,
    pub operation: String,
    pub result: f64,
}

/// The single accumulator instance behind `/calculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    /// Accumulator shown to the caller.
    pub display: f64,
    /// Operand held pending the next commit.
    pub register: f64,
    /// Pending operation tag. Stored as a free-form string so an
    /// unrecognized tag survives a read-back unchanged.
    pub operation: Option<String>,
    /// Append-only log of committed operations.
    pub tape: Vec<TapeEntry>,
}

/// Partial overwrite payload for PUT `/calculator`.
///
/// `operation` is doubly optional: an explicit JSON `null` clears the pending
/// tag, while leaving the key out leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorPatch {
    pub display: Option<f64>,
    pub register: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub operation: Option<Option<String>>,
    pub tape: Option<Vec<TapeEntry>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Calculator {
    /// Merge-overwrite: set only the fields the patch carries.
    pub fn apply(&mut self, patch: CalculatorPatch) {
        if let Some(display) = patch.display {
            self.display = display;
        }
        if let Some(register) = patch.register {
            self.register = register;
        }
        if let Some(operation) = patch.operation {
            self.operation = operation;
        }
        if let Some(tape) = patch.tape {
            self.tape = tape;
        }
    }

    /// Applies the pending operation if its tag is recognized, appending the
    /// pre-operation operands and the result to the tape. Unrecognized or
    /// absent tags commit nothing. The tag is cleared either way.
    pub fn commit(&mut self) {
        if let Some(op) = self.operation.as_deref().and_then(Operation::from_tag) {
            match op {
                Operation::Addition => {
                    let result = self.register + self.display;
                    self.tape.push(TapeEntry {
                        display: self.display,
                        register: self.register,
                        operation: op.as_str().to_string(),
                        result,
                    });
                    self.display = result;
                    self.register = 0.0;
                }
            }
        }
        self.operation = None;
    }
}

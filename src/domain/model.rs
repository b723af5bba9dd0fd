use crate::utils::error::{CalcError, Result};
use crate::utils::validation::is_valid_binary;
use std::fmt;
use std::str::FromStr;

/// A non-empty string of `0`/`1` characters, most significant bit first.
///
/// Only constructible through validation, so every value handed to the
/// engine is a well-formed literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryString(String);

impl BinaryString {
    pub fn parse(literal: &str) -> Result<Self> {
        if is_valid_binary(literal) {
            Ok(Self(literal.to_string()))
        } else {
            Err(CalcError::InvalidOperand)
        }
    }

    /// Minimal representation of `value`: no leading zeros, `"0"` for zero.
    pub fn from_u128(value: u128) -> Self {
        Self(format!("{:b}", value))
    }

    pub fn to_u128(&self) -> Result<u128> {
        u128::from_str_radix(&self.0, 2).map_err(|_| CalcError::Overflow)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    pub(crate) fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self(bits.into_iter().map(|bit| if bit { '1' } else { '0' }).collect())
    }

    pub fn minimal(&self) -> Self {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }
}

impl FromStr for BinaryString {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The evaluating verbs. Case-insensitive on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    And,
    Or,
    Xor,
    Mul,
    Div,
    Calc,
}

impl Operation {
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.to_lowercase().as_str() {
            "and" => Some(Operation::And),
            "or" => Some(Operation::Or),
            "xor" => Some(Operation::Xor),
            "mul" => Some(Operation::Mul),
            "div" => Some(Operation::Div),
            "calc" => Some(Operation::Calc),
            _ => None,
        }
    }

    /// Number of operands following the verb.
    pub fn arity(self) -> usize {
        match self {
            Operation::Calc => 4,
            _ => 2,
        }
    }

    pub fn is_bitwise(self) -> bool {
        matches!(self, Operation::And | Operation::Or | Operation::Xor)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Xor => "xor",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Calc => "calc",
        }
    }
}

/// One input line, resolved once into what the loop has to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Clear,
    Evaluate {
        operation: Operation,
        operands: Vec<String>,
    },
    Unknown(String),
    Empty,
}

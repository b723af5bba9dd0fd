use crate::domain::model::{BinaryString, Command, Operation};
use crate::utils::error::{CalcError, Result};

/// Resolves a raw input line into a [`Command`].
///
/// `exit`, `help` and `clear` must match the whole trimmed line exactly.
/// Evaluating verbs are case-insensitive.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "exit" => return Command::Exit,
        "help" => return Command::Help,
        "clear" => return Command::Clear,
        _ => {}
    }

    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Command::Empty;
    };

    match Operation::from_verb(verb) {
        Some(operation) => Command::Evaluate {
            operation,
            operands: tokens.map(str::to_string).collect(),
        },
        None => Command::Unknown(verb.to_string()),
    }
}

/// Checks arity, literal validity and, for bitwise verbs, equal widths.
pub fn validate_operands(operation: Operation, operands: &[String]) -> Result<Vec<BinaryString>> {
    if operands.len() != operation.arity() {
        return Err(CalcError::Usage);
    }

    let parsed = operands
        .iter()
        .map(|operand| BinaryString::parse(operand))
        .collect::<Result<Vec<_>>>()?;

    if operation.is_bitwise() && parsed.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
        return Err(CalcError::LengthMismatch);
    }

    Ok(parsed)
}

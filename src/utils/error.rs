use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Entrées invalides : uniquement des 0 et 1")]
    InvalidOperand,

    #[error("Les deux binaires doivent avoir la même longueur")]
    LengthMismatch,

    #[error("Erreur : division par zéro")]
    DivisionByZero,

    #[error("Erreur : division par zéro dans le calcul")]
    DivisionByZeroInExpression,

    #[error("Erreur : dépassement de capacité (128 bits maximum)")]
    Overflow,

    #[error("Commande inconnue : {verb}")]
    UnknownCommand { verb: String },

    #[error("Utilisation : <operation> <binaire1> <binaire2> [<binaire3> <binaire4>]")]
    Usage,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad user input; reported inside the loop.
    Low,
    /// Broken environment or configuration; ends the process.
    High,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidOperand
            | CalcError::LengthMismatch
            | CalcError::DivisionByZero
            | CalcError::DivisionByZeroInExpression
            | CalcError::Overflow
            | CalcError::UnknownCommand { .. }
            | CalcError::Usage => ErrorSeverity::Low,
            CalcError::IoError(_)
            | CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValue { .. } => ErrorSeverity::High,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidOperand => "Use only the characters 0 and 1 in operands",
            CalcError::LengthMismatch => "Pad the shorter operand with leading zeros",
            CalcError::DivisionByZero | CalcError::DivisionByZeroInExpression => {
                "Use a divisor that contains at least one 1"
            }
            CalcError::Overflow => "Keep operands and intermediate results within 128 bits",
            CalcError::UnknownCommand { .. } | CalcError::Usage => "Type 'help' to list commands",
            CalcError::IoError(_) => "Check that the terminal or input stream is still open",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValue { .. } => {
                "Check the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

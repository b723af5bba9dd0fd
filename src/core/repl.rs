use crate::core::command::{parse_command, validate_operands};
use crate::core::engine;
use crate::domain::model::{Command, Operation};
use crate::domain::ports::{ConfigProvider, LineSource};
use crate::utils::error::{CalcError, Result};
use std::io::Write;

const BANNER: &str = "\
--------------------------------------------------------
                 CALCULATRICE BINAIRE CLI
--------------------------------------------------------

Bienvenue dans la calculatrice binaire CLI !
Vous pouvez effectuer des opérations binaires :
  - and, or, xor : opérations logiques (binaires de même longueur)
  - mul, div     : multiplication et division entière
  - calc         : ((a + b) * c) / d

Commandes : and, or, xor, mul, div, calc, help, clear, exit
";

const HELP: &str = "
Commandes :
and <bin1> <bin2>                : Exécute un ET logique
or <bin1> <bin2>                 : Exécute un OU logique
xor <bin1> <bin2>                : Exécute un XOR logique
mul <bin1> <bin2>                : Multiplie deux binaires
div <bin1> <bin2>                : Division entière de deux binaires
calc <bin1> <bin2> <bin3> <bin4> : Calcule ((a + b) * c) / d
help                             : Affiche ce message
clear                            : Efface l'écran
exit                             : Quitte le programme
";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Read-dispatch-write loop over a [`LineSource`], writing to any sink.
pub struct Repl<'a, C: ConfigProvider, W: Write> {
    config: &'a C,
    output: W,
    state: LoopState,
}

impl<'a, C: ConfigProvider, W: Write> Repl<'a, C, W> {
    pub fn new(config: &'a C, output: W) -> Self {
        Self {
            config,
            output,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` or end of input. Only sink or source I/O failures
    /// are returned as errors.
    pub fn run<S: LineSource>(&mut self, source: &mut S) -> Result<()> {
        if self.config.show_banner() {
            write!(self.output, "{}", BANNER)?;
        }

        while self.state == LoopState::Running {
            match source.read_line(self.config.prompt())? {
                Some(line) => {
                    self.handle_line(&line)?;
                }
                None => {
                    tracing::debug!("End of input reached");
                    self.terminate()?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Processes one line and returns the resulting loop state.
    pub fn handle_line(&mut self, line: &str) -> Result<LoopState> {
        match parse_command(line) {
            Command::Exit => self.terminate()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Clear => {
                write!(self.output, "{}", CLEAR_SCREEN)?;
                self.output.flush()?;
            }
            Command::Evaluate {
                operation,
                operands,
            } => {
                let outcome = Self::evaluate(operation, &operands);
                self.report(outcome)?;
            }
            Command::Unknown(verb) => self.report(Err(CalcError::UnknownCommand { verb }))?,
            Command::Empty => self.report(Err(CalcError::Usage))?,
        }
        Ok(self.state)
    }

    fn evaluate(operation: Operation, operands: &[String]) -> Result<String> {
        tracing::debug!(operation = operation.name(), ?operands, "Evaluating command");
        let operands = validate_operands(operation, operands)?;
        let result = engine::evaluate(operation, &operands)?;
        Ok(result.to_string())
    }

    fn report(&mut self, outcome: Result<String>) -> Result<()> {
        match outcome {
            Ok(result) => writeln!(self.output, "Résultat : {}", result)?,
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Command rejected: {:?}", e);
                writeln!(self.output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn terminate(&mut self) -> Result<()> {
        writeln!(self.output, "Fermeture...")?;
        self.state = LoopState::Terminated;
        Ok(())
    }
}

use binary_calc::core::LineSource;
use binary_calc::{LoopState, Repl, Result, Settings};
use std::collections::VecDeque;

/// Feeds pre-recorded lines and records every prompt it was asked to show.
struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| format!("{}\n", l)).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

fn quiet_settings() -> Settings {
    Settings {
        show_banner: false,
        ..Settings::default()
    }
}

fn run_session(lines: &[&str]) -> (Vec<String>, ScriptedInput) {
    let settings = quiet_settings();
    let mut input = ScriptedInput::new(lines);
    let mut repl = Repl::new(&settings, Vec::new());

    repl.run(&mut input).unwrap();
    assert_eq!(repl.state(), LoopState::Terminated);

    let output = String::from_utf8(repl.into_output()).unwrap();
    (output.lines().map(str::to_string).collect(), input)
}

fn single_result(command: &str) -> String {
    let (lines, _) = run_session(&[command, "exit"]);
    assert_eq!(lines.len(), 2, "unexpected output: {:?}", lines);
    assert_eq!(lines[1], "Fermeture...");
    lines[0].clone()
}

#[test]
fn test_and_operation() {
    assert_eq!(single_result("and 1101 1011"), "Résultat : 1001");
    assert_eq!(single_result("and 1100 1010"), "Résultat : 1000");
}

#[test]
fn test_or_operation() {
    assert_eq!(single_result("or 1100 1010"), "Résultat : 1110");
}

#[test]
fn test_xor_operation() {
    assert_eq!(single_result("xor 1100 1010"), "Résultat : 0110");
}

#[test]
fn test_multiply_operation() {
    assert_eq!(single_result("mul 011 101"), "Résultat : 1111");
}

#[test]
fn test_divide_operation() {
    assert_eq!(single_result("div 1100 0011"), "Résultat : 100");
}

#[test]
fn test_compound_operation() {
    assert_eq!(single_result("calc 10 01 100 10"), "Résultat : 110");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(single_result("div 1010 0000"), "Erreur : division par zéro");
    assert_eq!(
        single_result("calc 10 01 100 0000"),
        "Erreur : division par zéro dans le calcul"
    );
}

#[test]
fn test_invalid_binary() {
    assert_eq!(
        single_result("and 11002 1010"),
        "Entrées invalides : uniquement des 0 et 1"
    );
    assert_eq!(
        single_result("calc 10 01 1x0 10"),
        "Entrées invalides : uniquement des 0 et 1"
    );
}

#[test]
fn test_mismatched_length() {
    assert_eq!(
        single_result("or 110 1010"),
        "Les deux binaires doivent avoir la même longueur"
    );
}

#[test]
fn test_arithmetic_accepts_different_lengths() {
    assert_eq!(single_result("mul 1 1010"), "Résultat : 1010");
}

#[test]
fn test_unknown_command() {
    assert_eq!(single_result("add 1100 1010"), "Commande inconnue : add");
    assert_eq!(single_result("nope"), "Commande inconnue : nope");
}

#[test]
fn test_wrong_arity_prints_usage() {
    let usage = "Utilisation : <operation> <binaire1> <binaire2> [<binaire3> <binaire4>]";
    assert_eq!(single_result("and 1100"), usage);
    assert_eq!(single_result("div 1 1 1"), usage);
    assert_eq!(single_result("calc 1 1 1"), usage);
    assert_eq!(single_result(""), usage);
}

#[test]
fn test_verbs_are_case_insensitive() {
    assert_eq!(single_result("XOR 1100 1010"), "Résultat : 0110");
    assert_eq!(single_result("Mul 10 10"), "Résultat : 100");
}

#[test]
fn test_overflow_is_reported() {
    let wide = "1".repeat(100);
    let command = format!("mul {} {}", wide, wide);
    assert_eq!(
        single_result(&command),
        "Erreur : dépassement de capacité (128 bits maximum)"
    );
}

#[test]
fn test_exit_terminates() {
    let (lines, input) = run_session(&["exit", "and 1 1"]);
    assert_eq!(lines, vec!["Fermeture..."]);
    // The line after exit is never read.
    assert_eq!(input.lines.len(), 1);
}

#[test]
fn test_end_of_input_behaves_like_exit() {
    let (lines, _) = run_session(&["or 01 10"]);
    assert_eq!(lines, vec!["Résultat : 11", "Fermeture..."]);
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let (lines, input) = run_session(&[
        "div 1 0",
        "bogus",
        "and 1 12",
        "help",
        "clear",
        "xor 1 1",
        "exit",
    ]);

    assert_eq!(lines.first().map(String::as_str), Some("Erreur : division par zéro"));
    assert!(lines.contains(&"Commande inconnue : bogus".to_string()));
    assert!(lines.contains(&"Commandes :".to_string()));
    assert!(lines.iter().any(|l| l.ends_with("Résultat : 0")));
    assert_eq!(lines.last().map(String::as_str), Some("Fermeture..."));
    assert_eq!(input.prompts.len(), 7);
    assert!(input.prompts.iter().all(|p| p == ">>"));
}

#[test]
fn test_banner_and_custom_prompt() {
    let settings = Settings::default().with_overrides(Some("bin>"), false, false);
    let mut input = ScriptedInput::new(&["exit"]);
    let mut repl = Repl::new(&settings, Vec::new());

    repl.run(&mut input).unwrap();

    let output = String::from_utf8(repl.into_output()).unwrap();
    assert!(output.contains("CALCULATRICE BINAIRE CLI"));
    assert!(output.ends_with("Fermeture...\n"));
    assert_eq!(input.prompts, vec!["bin>"]);
}

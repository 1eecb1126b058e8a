use std::{fs, path::Path};

use tally::{
    Error,
    error::{EvalError, ParseError},
    run_with_output,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "tl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(path);

        count += 1;
        match output_of(&source) {
            Ok(output) => assert_eq!(output, expected, "program {path:?} printed the wrong lines"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn expected_output(program: &Path) -> String {
    let path = program.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn output_of(src: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run_with_output(src, &mut output)?;
    Ok(String::from_utf8(output).expect("output is not UTF-8"))
}

fn assert_output(src: &str, lines: &[&str]) {
    match output_of(src) {
        Ok(output) => assert_eq!(output.lines().collect::<Vec<_>>(), lines, "for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

/// Runs `src`, expecting it to fail, and returns the error with whatever was
/// printed before the failure.
fn failure_of(src: &str) -> (Error, String) {
    let mut output = Vec::new();
    let error = match run_with_output(src, &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src:?}"),
        Err(e) => e,
    };
    (error, String::from_utf8(output).expect("output is not UTF-8"))
}

#[test]
fn reference_program_prints_in_order() {
    assert_output("code := 5 - 9; LOG code; sum := 0 - 6; LOG sum; LOG sum - (5 + 3);",
                  &["-4", "-6", "-14"]);
}

#[test]
fn assignment_is_rebindable() {
    assert_output("x := 5; x := x - 2; LOG x;", &["3"]);
    assert_output("x := 1; x := 2; x := 3; LOG x;", &["3"]);
}

#[test]
fn arithmetic_is_left_associative() {
    assert_output("LOG 10 - 3 - 2;", &["5"]);
    assert_output("LOG 1 - 1 + 1;", &["1"]);
}

#[test]
fn parentheses_override_associativity() {
    assert_output("LOG 10 - (3 - 2);", &["9"]);
    assert_output("LOG (((7)));", &["7"]);
}

#[test]
fn one_line_per_print_statement() {
    assert_output("LOG 1; a := 2; LOG a; LOG a + a; b := a;", &["1", "2", "4"]);
    assert_output("a := 2;", &[]);
    assert_output("", &[]);
}

#[test]
fn zero_valued_variable_is_defined() {
    assert_output("z := 0; LOG z;", &["0"]);
    assert_output("z := 5 - 5; LOG z + 1;", &["1"]);
}

#[test]
fn keywords_have_ascii_and_cyrillic_spellings() {
    assert_output("x РАВНО 1 ПЛЮС 2; КОНСОЛЬ x МИНУС 1;", &["2"]);
    assert_output("икс := 4; LOG икс;", &["4"]);
}

#[test]
fn comments_and_line_breaks_are_ignored() {
    assert_output("// setup\nx := 1; // one\n\n\tLOG x\n+ 1;", &["2"]);
}

#[test]
fn final_scope_is_returned() {
    let scope = run_with_output("a := 1; b := a + 1; a := 7;", Vec::new()).unwrap();

    assert_eq!(scope.len(), 2);
    assert_eq!(scope.get("a"), Some(7));
    assert_eq!(scope.get("b"), Some(2));
    assert!(!scope.contains("c"));

    let mut bindings = scope.iter().collect::<Vec<_>>();
    bindings.sort_unstable();
    assert_eq!(bindings, [("a", 7), ("b", 2)]);
}

#[test]
fn unknown_variable_is_error() {
    let (error, output) = failure_of("LOG 1; LOG foo; LOG 2;");

    assert!(matches!(error,
                     Error::Eval(EvalError::UndefinedVariable { ref name, line: 1 }) if name == "foo"));
    assert_eq!(output, "1\n");
}

#[test]
fn failing_statement_stops_the_run() {
    let (error, output) = failure_of("a := 1;\nLOG a;\nb := a + c;\nLOG 99;");

    assert!(matches!(error, Error::Eval(EvalError::UndefinedVariable { line: 3, .. })));
    assert_eq!(output, "1\n");
}

#[test]
fn assignment_to_number_is_eval_error() {
    let (error, output) = failure_of("LOG 1; 5 := 3;");

    assert!(matches!(error, Error::Eval(EvalError::InvalidAssignmentTarget { ref target, .. }) if target == "5"));
    assert_eq!(output, "1\n");
}

#[test]
fn missing_terminator_is_parse_error() {
    let (error, output) = failure_of("LOG 1; LOG 2");

    assert!(matches!(error, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert_eq!(output, "", "nothing runs when parsing fails");

    let (error, _) = failure_of("x := 1 LOG x;");
    assert!(matches!(error, Error::Parse(ParseError::Expected { .. })));
}

#[test]
fn unmatched_parenthesis_is_parse_error() {
    let (error, _) = failure_of("LOG (1 + 2;");
    assert!(matches!(error, Error::Parse(ParseError::Expected { ref found, .. }) if found == ";"));

    let (error, _) = failure_of("LOG 1 + 2);");
    assert!(matches!(error, Error::Parse(ParseError::Expected { ref found, .. }) if found == ")"));
}

#[test]
fn bare_variable_statement_is_parse_error() {
    let (error, _) = failure_of("x := 1; x;");
    assert!(matches!(error, Error::Parse(ParseError::Expected { position: 5, .. })));
}

#[test]
fn unknown_character_is_lex_error() {
    let (error, output) = failure_of("LOG 1;\nLOG 2 * 3;");

    assert!(matches!(error, Error::Lex(_)));
    assert_eq!(output, "");
    assert_eq!(error.to_string(), "Error on line 2: Unexpected character '*' at offset 13.");
}

#[test]
fn overflow_is_error() {
    let (error, _) = failure_of("big := 9223372036854775807; LOG big + 1;");
    assert!(matches!(error, Error::Eval(EvalError::Overflow { .. })));

    let (error, _) = failure_of("LOG 0 - 9223372036854775807 - 2;");
    assert!(matches!(error, Error::Eval(EvalError::Overflow { .. })));
}

#[test]
fn oversized_literal_is_error() {
    let (error, _) = failure_of("LOG 99999999999999999999;");
    assert!(matches!(error, Error::Eval(EvalError::InvalidNumber { ref text, .. }) if text == "99999999999999999999"));
}

#[test]
fn error_messages_name_the_problem() {
    let (error, _) = failure_of("LOG nope;");
    assert_eq!(error.to_string(), "Error on line 1: Undefined variable 'nope'.");

    let (error, _) = failure_of("x 1;");
    assert_eq!(error.to_string(),
               "Error on line 1: Expected ':=' but found '1' (token 1).");

    let (error, _) = failure_of("LOG ;");
    assert_eq!(error.to_string(),
               "Error on line 1: Expected '(', number or variable but found ';' (token 1).");
}

use assert_cmd::Command;
use predicates::prelude::*;

fn tinycc() -> Command {
    Command::cargo_bin("tinycc").unwrap()
}

#[test]
fn missing_source_argument_is_a_fatal_error_not_claps_own_exit_code() {
    tinycc().assert().failure().code(1);
}

#[test]
fn extra_positional_argument_is_a_fatal_error() {
    tinycc()
        .arg("main() { return 0; }")
        .arg("unexpected")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn compiles_a_constant_return() {
    tinycc()
        .arg("main() { return 42; }")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(".intel_syntax noprefix\n"))
        .stdout(predicate::str::contains(".global main"))
        .stdout(predicate::str::contains("  ret\n"));
}

#[test]
fn compiles_arithmetic_with_variables() {
    tinycc()
        .arg("main() { a = 1; b = 2; return a + b * 3; }")
        .assert()
        .success()
        .stdout(predicate::str::contains("  sub rsp, 16\n"))
        .stdout(predicate::str::contains("  imul rax, rdi\n"));
}

#[test]
fn compiles_control_flow() {
    tinycc()
        .arg("main() { i = 0; while (i < 5) { i = i + 1; } return i; }")
        .assert()
        .success()
        .stdout(predicate::str::contains(".Lbegin0:"))
        .stdout(predicate::str::contains(".Lend0:"));
}

#[test]
fn compiles_multiple_functions_and_calls() {
    tinycc()
        .arg("add(a, b) { return a + b; } main() { return add(1, 2); }")
        .assert()
        .success()
        .stdout(predicate::str::contains(".global add"))
        .stdout(predicate::str::contains(".global main"))
        .stdout(predicate::str::contains("  call add\n"));
}

#[test]
fn missing_main_is_a_fatal_error() {
    tinycc()
        .arg("f() { return 1; }")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no function named 'main'"));
}

#[test]
fn lexical_error_points_a_caret_at_the_offending_character() {
    tinycc()
        .arg("main() { return 1 & 2; }")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("main() { return 1 & 2; }"))
        .stderr(predicate::str::contains("^"))
        .stderr(predicate::str::contains("invalid token"));
}

#[test]
fn assigning_to_a_non_variable_is_a_fatal_error() {
    tinycc()
        .arg("main() { 1 = 2; }")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("left value must be a variable"));
}

#[test]
fn break_outside_a_loop_is_a_fatal_error() {
    tinycc()
        .arg("main() { break; }")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("break statement not within a loop"));
}

#[test]
fn syntax_error_is_reported_with_a_caret() {
    tinycc()
        .arg("main() { return 1 }")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("^"));
}

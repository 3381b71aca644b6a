use assert_cmd::Command;
use predicates::prelude::*;

fn quot() -> Command {
    Command::cargo_bin("quot").unwrap()
}

#[test]
fn test_whole_quotient_keeps_decimal_point() {
    quot()
        .args(["--a", "10", "--b", "2"])
        .assert()
        .success()
        .stdout("5.0\n");
}

#[test]
fn test_integer_division() {
    quot()
        .args(["--a", "6", "--b", "3"])
        .assert()
        .success()
        .stdout("2.0\n");
}

#[test]
fn test_negative_numerator() {
    quot()
        .args(["--a", "-6", "--b", "3"])
        .assert()
        .success()
        .stdout("-2.0\n");
}

#[test]
fn test_fractional_quotient() {
    quot()
        .args(["--a", "1", "--b", "3"])
        .assert()
        .success()
        .stdout("0.3333333333333333\n");
}

#[test]
fn test_division_by_zero_exits_one() {
    quot()
        .args(["--a", "1", "--b", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: division by zero"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_self_tests_pass() {
    quot()
        .arg("--test")
        .assert()
        .success()
        .stdout(predicate::str::contains("5/5 checks passed"));
}

#[test]
fn test_self_tests_ignore_operand_flags() {
    // --test governs the exit code even with a zero denominator supplied.
    quot()
        .args(["--test", "--a", "1", "--b", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/5 checks passed"));
}

#[test]
fn test_no_flags_prints_help_with_usage_exit_code() {
    quot()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--a"))
        .stdout(predicate::str::contains("--b"));
}

#[test]
fn test_missing_denominator_is_a_usage_error() {
    quot()
        .args(["--a", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_non_numeric_flag_value_is_rejected_before_dividing() {
    quot()
        .args(["--a", "not-a-number", "--b", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-number"));
}

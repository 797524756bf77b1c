use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_slide_access"))
}

#[test]
fn shows_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("slide_access"))
        .stdout(predicate::str::contains("--visitor"));
}

#[test]
fn requires_a_visitor() {
    cmd().assert().failure().code(2);
}

#[test]
fn grants_a_child_on_the_kids_slide() {
    cmd()
        .args(["--slide", "Kids=children", "--visitor", "name=Ann,age=10,weight=30,height=100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kids   children  Ann      granted"))
        .stdout(predicate::str::contains("granted: 1 · denied: 0"))
        .stdout(predicate::str::contains("can't access").not());
}

#[test]
fn prints_type_diagnostic_for_textual_age() {
    cmd()
        .args(["--slide", "Kids=children", "--visitor", "name=Max,age=ten,weight=30,height=100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Max can't access, has an attribute with incorrect type! expected an integer for `age`, got str",
        ));
}

#[test]
fn fail_on_deny_sets_exit_code() {
    cmd()
        .args([
            "--slide",
            "Big=adult",
            "--visitor",
            "name=Tom,age=13,weight=70,height=150",
            "--fail-on-deny",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Tom can't access, doesn't meet the requirements! age must be between 14 and 60, got 13",
        ));
}

#[test]
fn json_output_keeps_stdout_parseable() {
    let assert = cmd()
        .args([
            "--format",
            "json",
            "--visitor",
            "name=Tom,age=13,weight=70,height=150",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Tom can't access"));

    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON");
    let outcomes = json.as_array().expect("array");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["slide"], "children");
    assert_eq!(outcomes[1]["slide"], "adult");
}

#[test]
fn rejects_malformed_visitor() {
    cmd()
        .args(["--visitor", "name=Ann,age=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing weight"));
}

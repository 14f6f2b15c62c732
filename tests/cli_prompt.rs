mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_prints_instruction_without_credential() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "Data Scientists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("targeting the specific community: 'Data Scientists'."))
        .stdout(predicate::str::contains("7. 10-YEAR GROWTH OUTLOOK"))
        .stdout(predicate::str::contains("16. APPENDIX."))
        .stdout(predicate::str::contains("Do NOT include markdown blocks (```html)."));
}

#[test]
fn prompt_alias_is_deterministic() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(["p", "Nursing Staff"]).output().unwrap();
    let second = ctx.cli().args(["prompt", "Nursing Staff"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn prompt_rejects_blank_audience() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please specify a target community."));
}

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("prompt"))
        .stdout(predicate::str::contains("session"));
}

mod support;

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp_card(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp card");
    file.write_all(contents.as_bytes()).expect("write temp card");
    file
}

fn luckybet() -> Command {
    let mut cmd = Command::cargo_bin("luckybet").expect("binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn settle_prints_every_slip() {
    let card = write_temp_card(support::REFERENCE_CARD);

    luckybet()
        .args(["settle", "--config"])
        .arg(card.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Martin: £15.00 -> "))
        .stdout(predicate::str::contains("£4.60"))
        .stdout(predicate::str::contains("£2.00"))
        .stdout(predicate::str::contains("£14.60"))
        .stdout(predicate::str::contains("Lucky 15"));
}

#[test]
fn settle_one_bettor_as_json() {
    let card = write_temp_card(support::REFERENCE_CARD);

    luckybet()
        .args(["--json", "settle", "--bettor", "Paul", "--config"])
        .arg(card.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"settlement""#))
        .stdout(predicate::str::contains(r#""payout":"14.60""#))
        .stdout(predicate::str::contains(r#""payout_exact":"73/5""#))
        .stdout(predicate::str::contains("Martin").not());
}

#[test]
fn quiet_settle_prints_results_only() {
    let card = write_temp_card(support::REFERENCE_CARD);

    luckybet()
        .args(["--quiet", "settle", "--bettor", "Mark", "--config"])
        .arg(card.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mark: £30.00 -> "))
        .stdout(predicate::str::contains("Selection").not());
}

#[test]
fn settle_fails_on_missing_place() {
    let card = write_temp_card(
        r#"
[[slips]]
bettor = "Martin"
stake = 10

[[slips.selections]]
name = "Etalon"
odds = "10:1"
"#,
    );

    luckybet()
        .args(["settle", "--config"])
        .arg(card.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no finishing place recorded for 'Etalon'"));
}

#[test]
fn unknown_bettor_fails() {
    let card = write_temp_card(support::REFERENCE_CARD);

    luckybet()
        .args(["settle", "--bettor", "Nobody", "--config"])
        .arg(card.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nobody"));
}

#[test]
fn check_reports_unplaced_selections() {
    let card = write_temp_card(
        r#"
[places]
"Givega" = 9

[[slips]]
bettor = "Martin"
stake = 10

[[slips.selections]]
name = "Etalon"
odds = "10:1"

[[slips.selections]]
name = "Givega"
odds = "7:1"
"#,
    );

    luckybet()
        .args(["check", "--config"])
        .arg(card.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Card is valid"))
        .stdout(predicate::str::contains("no finishing place for Etalon"));
}

#[test]
fn invalid_card_exits_nonzero() {
    let card = write_temp_card(
        r#"
[[slips]]
bettor = "Martin"
stake = -3
"#,
    );

    luckybet()
        .args(["check", "--config"])
        .arg(card.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for stake"));
}

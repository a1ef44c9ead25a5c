//! End-to-end tests of the fincalc binary
//!
//! Every invocation points FINCALC_CONFIG_DIR at a fresh temp directory so
//! the default settings apply regardless of the host environment.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fincalc(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.env("FINCALC_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn loan_table_shows_payment_and_totals() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["loan", "100000", "36", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment: 5.904,74"))
        .stdout(predicate::str::contains("Period"));
}

#[test]
fn loan_json_output_has_totals() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["loan", "100000", "36", "24", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_interest"))
        .stdout(predicate::str::contains("rows"));
}

#[test]
fn loan_lenient_substitutes_zero_with_warning() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["loan", "not-a-number", "0", "12"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: could not read principal"));
}

#[test]
fn loan_strict_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["--strict", "loan", "not-a-number", "36", "24"])
        .assert()
        .failure();
}

#[test]
fn loan_writes_csv_with_fixed_header() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("schedule.csv");
    fincalc(&dir)
        .args(["loan", "12000", "0", "12", "-o"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Donem,Taksit,Faiz,Anapara,Bakiye"));
    assert!(csv.contains("\"1.000,00\""));
}

#[test]
fn vat_uses_configured_default_rate() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["vat", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VAT: 200,00"))
        .stdout(predicate::str::contains("Gross (incl. VAT): 1.200,00"));
}

#[test]
fn vat_inclusive_extracts_net() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["vat", "1200", "--inclusive", "--rate", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net: 1.000,00"));
}

#[test]
fn inventory_fifo_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("txns.txt");
    std::fs::write(&input, "ALIS;100;10\nALIS;50;12\nSATIS;120;0\n").unwrap();

    fincalc(&dir)
        .args(["inventory", "-p", "fifo", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost of goods sold (COGS): 1.240,00"))
        .stdout(predicate::str::contains("30,00 units @ 12,00"));
}

#[test]
fn inventory_lifo_from_stdin() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["inventory", "-p", "lifo"])
        .write_stdin("ALIS;100;10\nALIS;50;12\nSATIS;120;0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost of goods sold (COGS): 1.300,00"))
        .stdout(predicate::str::contains("30,00 units @ 10,00"));
}

#[test]
fn inventory_strict_fails_on_malformed_line() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["--strict", "inventory"])
        .write_stdin("ALIS;100;10\nbogus line\n")
        .assert()
        .failure();
}

#[test]
fn depreciation_csv_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("depr.csv");
    fincalc(&dir)
        .args(["depreciation", "12000", "0", "3", "-o"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Yil,Amortisman,Birikmis,NetDefterDegeri"));
    assert!(csv.contains("\"4.000,00\""));
}

#[test]
fn breakeven_reports_units() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["breakeven", "50", "30", "20000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Break-even units: 1.000,00"));
}

#[test]
fn payroll_default_rates() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["payroll", "30000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net: 21.702,30"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fraction digits:  2"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

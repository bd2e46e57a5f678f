//! End-to-end tests of the `order-ledger` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const HEADER: &str = "order_id,item,quantity,price_per_item\n";

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_order-ledger"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn dash_reads_orders_from_stdin() {
    let output = run_with_stdin(
        &["process", "-"],
        &format!("{HEADER}O1,Pen,3,2.50\nO2,Mug,x,5.00\n"),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        concat!(
            "Order ID: O1\nItem: Pen\nQuantity: 3\nTotal Cost: $7.50\n",
            "------------------------------\n",
            "Invalid order data: invalid non-negative integer 'x' for field 'quantity' (row 3)\n",
        )
    );
}

#[test]
fn stdin_summary_names_stdin_source() {
    let output = run_with_stdin(
        &["--color", "never", "process", "-", "--summary", "json"],
        &format!("{HEADER}O1,Pen,3,2.50\n"),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"source\": \"<stdin>\""));
    assert!(stdout.contains("\"accepted\": 1"));
}

#[test]
fn fail_on_invalid_sets_exit_status() {
    let input = format!("{HEADER}O1,Pen,,2.50\n");

    let lenient = run_with_stdin(&["process", "-"], &input);
    let strict = run_with_stdin(&["process", "-", "--fail-on-invalid"], &input);

    assert_eq!(lenient.status.code(), Some(0));
    assert_eq!(strict.status.code(), Some(1));
    assert_eq!(lenient.stdout, strict.stdout);
}

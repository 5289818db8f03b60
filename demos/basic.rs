//! Your first ini_codec experience: parse a document and read typed values.
//!
//! Run with: cargo run --example basic

use ini_codec::from_str;

fn main() {
    let text = "\
[Server]
host = localhost
port = 8080          # stripped as an inline comment
secure = true

[Limits]
timeout = 2.5
retries = 3
";

    let document = from_str(text).expect("valid INI text");

    println!("Sections:");
    for (name, section) in document.iter() {
        println!("  [{}] with {} field(s)", name, section.len());
    }

    // Strings come back verbatim; numbers and booleans convert on demand.
    let server = &document["Server"];
    println!("host    = {}", server["host"].as_str());
    println!("port    = {}", server["port"].as_int().expect("port is an integer"));
    println!("secure  = {}", server["secure"].as_bool().expect("secure is a boolean"));

    let limits = &document["Limits"];
    println!("timeout = {}", limits["timeout"].as_float().expect("timeout is a float"));

    // Typed access validates: "localhost" is not a number.
    assert!(server["host"].as_int().is_err());
}

//! Customizing the syntax: separators and comment-prefix sets.
//!
//! Run with: cargo run --example custom_syntax

use ini_codec::{from_str_with_options, IniOptions};

fn main() {
    // Colon-separated fields, DOS-style and C-style comments side by side.
    let text = "\
[Paths]
REM legacy batch comment
// modern comment
data: /var/lib/app
cache: /tmp/app       // cleared on reboot

[Misc]
motto: escape \\// keeps the marker
";

    let options = IniOptions::new()
        .with_separator(':')
        .with_comment_prefixes(["REM", "//"]);

    let document = from_str_with_options(text, options).expect("valid INI text");

    println!("data  = {}", document["Paths"]["data"].as_str());
    println!("cache = {}", document["Paths"]["cache"].as_str());
    println!("motto = {}", document["Misc"]["motto"].as_str());

    // Encoding uses the same separator the document was configured with.
    println!("--- re-encoded ---");
    print!("{}", document.encode());
}

//! Building a document from scratch and writing it out.
//!
//! Run with: cargo run --example write_config

use ini_codec::{ini, to_writer};
use std::io;

fn main() {
    // The ini! macro builds a document literally...
    let mut document = ini! {
        "Window" => {
            "width" => 1280,
            "height" => 720,
            "fullscreen" => false,
        },
    };

    // ...and index assignment extends it: new sections and fields are
    // created on write access.
    document["Render"]["gamma"].set(2.2);
    document["Render"]["backend"].set("vulkan");

    // Typed assignments store canonical text: booleans are lowercase,
    // floats keep their shortest round-trippable form.
    assert_eq!(document["Window"]["fullscreen"].as_str(), "false");
    assert_eq!(document["Render"]["gamma"].as_str(), "2.2");

    // Write to any io::Write target; to_file does the same for a path.
    to_writer(io::stdout(), &document).expect("stdout is writable");
}

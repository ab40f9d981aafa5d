//! Build script to embed the default lexicon
//!
//! Reads `data/lexicon.txt` (one `word tier` pair per line) and generates a
//! Rust const table in `OUT_DIR`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    generate_lexicon_table(
        "data/lexicon.txt",
        &Path::new(&out_dir).join("default_lexicon.rs"),
    );

    // Rebuild when the data file changes
    println!("cargo:rerun-if-changed=data/lexicon.txt");
}

fn generate_lexicon_table(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries: Vec<(String, u8)> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (word, tier_text) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or_else(|| panic!("Malformed line '{trimmed}' in {input_path}"));
        let tier: u8 = tier_text
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("Bad tier on line '{trimmed}' in {input_path}: {e}"));
        entries.push((word.to_string(), tier));
    }

    let count = entries.len();
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// Default word/tier table, generated from {input_path}").unwrap();
    writeln!(output, "///").unwrap();
    writeln!(output, "/// Tiers run from 1 (rare) to 6 (common).").unwrap();
    writeln!(output, "pub const DEFAULT_LEXICON: &[(&str, u8)] = &[").unwrap();
    for (word, tier) in &entries {
        writeln!(output, "    (\"{word}\", {tier}),").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in `DEFAULT_LEXICON`").unwrap();
    writeln!(output, "pub const DEFAULT_LEXICON_COUNT: usize = {count};").unwrap();
}

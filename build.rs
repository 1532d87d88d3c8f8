//! Build script to generate embedded word lists
//!
//! Reads the per-language word list files and the Irish meaning table and
//! generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/english.txt",
        &Path::new(&out_dir).join("english.rs"),
        "ENGLISH",
        "English five-letter words (targets and accepted guesses)",
    );

    generate_word_list(
        "data/irish.txt",
        &Path::new(&out_dir).join("irish.rs"),
        "IRISH",
        "Irish five-letter words (targets and accepted guesses)",
    );

    generate_meanings(
        "data/irish_meanings.tsv",
        &Path::new(&out_dir).join("irish_meanings.rs"),
        "IRISH_MEANINGS",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/english.txt");
    println!("cargo:rerun-if-changed=data/irish.txt");
    println!("cargo:rerun-if-changed=data/irish_meanings.tsv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {:?},", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_meanings(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated meaning table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Irish word to English meaning").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (word, meaning) = line.split_once('\t').unwrap_or_else(|| {
            panic!("{input_path}:{}: expected 'word<TAB>meaning'", number + 1)
        });
        writeln!(
            output,
            "    ({:?}, {:?}),",
            word.trim().to_lowercase(),
            meaning.trim()
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
}

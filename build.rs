// Build-time validation of every regex pattern the analyzer relies on
use regex::Regex;
use std::fs::File;
use std::io::Write;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // (pattern, name) pairs; the order defines the generated index constants
    let patterns = &[
        // Line grammar: shape of the four bracketed fields with the closed level set
        (
            r"^\[([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})\] \[(INFO|WARNING|ERROR|DEBUG)\] \[([^\]]+)\] (.+)$",
            "log_line_shape",
        ),
        // Field extraction: any bracket-delimited triple plus the trailing message
        (
            r"^\[([^\]]+)\] \[([^\]]+)\] \[([^\]]+)\] (.+)$",
            "log_line_fields",
        ),
        // Email candidates, checked structurally after matching
        (
            r"\b[A-Za-z0-9](?:[A-Za-z0-9_.%+-]*[A-Za-z0-9])?@[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?\.[A-Za-z]{2,}\b",
            "email_candidate",
        ),
        // IPv4 candidates, each octet shaped to 0-255 (leading zeros admitted)
        (
            r"\b(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[01]?[0-9][0-9]?)\b",
            "ipv4_candidate",
        ),
    ];

    let mut valid_patterns = Vec::new();
    let mut invalid_patterns = Vec::new();

    for &(pattern, name) in patterns {
        match Regex::new(pattern) {
            Ok(_) => valid_patterns.push((pattern, name)),
            Err(e) => {
                println!("cargo:warning=Invalid regex pattern '{name}': {e}");
                invalid_patterns.push((pattern, name, e));
            }
        }
    }

    if !invalid_patterns.is_empty() {
        let mut error_msg = String::from("Build failed due to invalid regex patterns:\n");
        for (pattern, name, error) in &invalid_patterns {
            error_msg.push_str(&format!("  - '{name}': {error} (pattern: {pattern})\n"));
        }
        panic!("{}", error_msg);
    }

    if let Err(e) = generate_validated_regexes(&valid_patterns) {
        panic!("Failed to generate regex patterns: {e}");
    }
}

fn generate_validated_regexes(patterns: &[(&str, &str)]) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let dest_path = std::path::Path::new(&out_dir).join("validated_regexes.rs");
    let mut file = File::create(dest_path)?;

    writeln!(file, "// Auto-generated regex patterns (validated by build.rs)")?;
    writeln!(file, "use crate::parser::regex_patterns::StaticRegexSet;")?;
    writeln!(file)?;
    writeln!(file, "/// All validated regex patterns used by the analyzer")?;
    writeln!(file, "pub static VALIDATED_PATTERNS: StaticRegexSet = StaticRegexSet::new(&[")?;
    for (pattern, name) in patterns {
        writeln!(file, "    (r#\"{pattern}\"#, \"{name}\"),")?;
    }
    writeln!(file, "]);")?;
    writeln!(file)?;

    writeln!(file, "/// Pattern indices for type-safe access")?;
    writeln!(file, "pub mod pattern_index {{")?;
    for (i, (_, name)) in patterns.iter().enumerate() {
        writeln!(file, "    pub const {}: usize = {};", name.to_uppercase(), i)?;
    }
    writeln!(file, "}}")?;
    writeln!(file)?;

    writeln!(file, "/// Pattern name lookup")?;
    writeln!(file, "pub fn get_pattern_name(index: usize) -> Option<&'static str> {{")?;
    writeln!(file, "    match index {{")?;
    for (i, (_, name)) in patterns.iter().enumerate() {
        writeln!(file, "        {i} => Some(\"{name}\"),")?;
    }
    writeln!(file, "        _ => None,")?;
    writeln!(file, "    }}")?;
    writeln!(file, "}}")?;

    Ok(())
}

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use rulegen_core::generate;
use rulegen_model::GenerateResponse;

use crate::cli::GenerateArgs;
use crate::summary::{print_palette, print_stats};

/// Maximum accepted input size (16 MiB).
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResponse> {
    let input = &args.input;
    let file_name = input.file_name().and_then(|name| name.to_str()).unwrap_or("");
    if file_name.is_empty() {
        bail!("no input file given");
    }
    if !is_csv_filename(file_name) {
        bail!("input must be a .csv file, got: {file_name}");
    }
    let metadata = fs::metadata(input).with_context(|| format!("stat {}", input.display()))?;
    if metadata.len() > MAX_INPUT_BYTES {
        bail!(
            "{file_name} exceeds the {} MiB input limit",
            MAX_INPUT_BYTES / (1024 * 1024)
        );
    }
    let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    let start = Instant::now();
    let response = generate(&bytes);
    debug!(
        input = %input.display(),
        input_bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "generate complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&response).context("serialize response")?;
        println!("{json}");
        return Ok(response);
    }
    if let Some(code) = response.code.as_deref() {
        match &args.output {
            Some(path) => {
                fs::write(path, code).with_context(|| format!("write {}", path.display()))?;
                info!(output = %path.display(), "wrote pattern map");
            }
            None => println!("{code}"),
        }
        print_stats(&response);
    }
    Ok(response)
}

pub fn run_palette() {
    print_palette();
}

/// The collaborator only accepts files with a `.csv` suffix, matched
/// case-insensitively.
fn is_csv_filename(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, extension)) => !stem.is_empty() && extension.eq_ignore_ascii_case("csv"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_suffix_case_insensitively() {
        assert!(is_csv_filename("rules.csv"));
        assert!(is_csv_filename("RULES.CSV"));
        assert!(is_csv_filename("a.b.Csv"));
    }

    #[test]
    fn rejects_other_names() {
        assert!(!is_csv_filename("rules.txt"));
        assert!(!is_csv_filename("csv"));
        assert!(!is_csv_filename(".csv"));
        assert!(!is_csv_filename("rules"));
        assert!(!is_csv_filename(""));
    }
}

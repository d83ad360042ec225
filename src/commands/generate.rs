use anyhow::{Context, Result};
use icsgen_core::{CalendarDocument, GeneratorOptions, IcsGenerator};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;

/// Read a JSON event list, generate the calendar and write it to `output`.
pub fn run(input: Option<&Path>, output: &Path, options: GeneratorOptions) -> Result<()> {
    let json = read_input(input)?;
    let document: CalendarDocument =
        serde_json::from_str(&json).context("Failed to parse JSON input")?;

    let ics = IcsGenerator::new(options).generate(&document)?;

    // Written as-is: the content already uses CRLF line endings
    std::fs::write(output, ics.as_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("wrote {} bytes to {}", ics.len(), output.display());

    let count = document.events.len();
    println!(
        "{}",
        format!(
            "Generated {} ({} {})",
            output.display(),
            count,
            pluralize("event", count)
        )
        .green()
    );

    Ok(())
}

/// Read the input file, or stdin when no path (or `-`) is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read JSON from stdin")?;
            Ok(json)
        }
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

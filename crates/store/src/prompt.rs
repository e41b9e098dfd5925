//! Terminal chooser for stored specifications

use crate::ApiSpec;
use colored::*;
use kongen_common::Result;
use std::io::{self, BufRead, Write};
use tracing::{trace, warn};

/// Non-interactive selection policy
///
/// A sole entry is chosen automatically; zero or several entries refuse,
/// since an automated environment cannot disambiguate.
pub(crate) fn auto_select(entries: &[ApiSpec]) -> Option<ApiSpec> {
    match entries {
        [only] => {
            trace!(name = %only.name, "auto-selecting the only stored specification");
            Some(only.clone())
        }
        [] => {
            warn!("specification store is empty; nothing to select");
            None
        }
        _ => {
            warn!(
                count = entries.len(),
                "multiple stored specifications; pass an identifier to disambiguate"
            );
            None
        }
    }
}

/// Interactive selection: list entries and read a 1-based index from stdin
///
/// Blocks until the operator answers. An empty or out-of-range answer
/// selects nothing.
pub(crate) fn choose(entries: &[ApiSpec]) -> Result<Option<ApiSpec>> {
    if entries.is_empty() {
        warn!("specification store is empty; nothing to select");
        return Ok(None);
    }

    println!("Select a specification:");
    for (index, spec) in entries.iter().enumerate() {
        println!("  {}. {}", (index + 1).to_string().cyan(), spec.name);
    }
    print!("{} ", ">".cyan());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(parse_selection(&line, entries.len()).map(|index| entries[index].clone()))
}

/// Parse a 1-based selection into a vector index
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}

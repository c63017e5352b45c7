//! Output formatting for human-readable and JSON modes.
//!
//! Results go to stdout. Warnings and errors go to stderr; only those
//! are colored, so stdout stays byte-stable for scripts.

use colored::Colorize;
use serde::Serialize;
use timeslug_types::{BlocklistStatus, DerivedSlug};

/// JSON shape of a generated window.
#[derive(Serialize)]
struct WindowOutput<'a> {
    id: &'a str,
    slugs: &'a [DerivedSlug],
}

/// Prints one derivation.
pub fn print_slug(slug: &DerivedSlug, json_mode: bool) {
    if json_mode {
        print_value(slug);
    } else {
        print_block(slug);
        warn_residual(slug);
    }
}

/// Prints every slug of a window, one block per period.
pub fn print_window(id: &str, slugs: &[DerivedSlug], json_mode: bool) {
    if json_mode {
        print_value(&WindowOutput { id, slugs });
        return;
    }

    for (i, slug) in slugs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_block(slug);
        warn_residual(slug);
    }
}

/// Prints an error message.
pub fn print_error(msg: &str, json_mode: bool) {
    if json_mode {
        let obj = serde_json::json!({ "error": msg });
        eprintln!("{obj}");
    } else {
        eprintln!("{} {}", "error:".red().bold(), msg);
    }
}

fn print_block(slug: &DerivedSlug) {
    println!("Mode:   {}", slug.mode);
    println!("Period: {}", slug.period);
    println!("Slug:   {}", slug.value);
    println!("Hash:   {}", slug.hash);
}

fn warn_residual(slug: &DerivedSlug) {
    if let BlocklistStatus::Residual { pattern } = &slug.blocklist {
        eprintln!(
            "{} slug for {} still contains blocked substring '{}'",
            "warning:".yellow().bold(),
            slug.period,
            pattern
        );
    }
}

fn print_value<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("{{\"error\":\"json serialization failed: {e}\"}}"),
    }
}

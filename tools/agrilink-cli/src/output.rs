//! Output formatting for the CLI.

use agrilink_market::catalog::Availability;
use console::{measure_text_width, pad_str, style, Alignment, StyledObject};

/// Output handler for CLI messages.
///
/// In JSON mode only [`Output::json`] and errors print anything.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn line(&self, marker: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    /// Warnings go to stderr so piped tables stay clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print rows under a header, each column as wide as its widest cell.
    ///
    /// Widths ignore ANSI styling, so badges line up.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let render = |cells: Vec<String>| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
                .collect();
            println!("  {}", padded.join("  ").trim_end());
        };

        render(
            headers
                .iter()
                .map(|h| style(h).bold().to_string())
                .collect(),
        );
        for row in rows {
            render(row.clone());
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored availability label.
pub fn availability_badge(availability: Availability) -> String {
    let label = availability.as_str();
    match availability {
        Availability::InStock => style(label).green().to_string(),
        Availability::Seasonal => style(label).yellow().to_string(),
        Availability::OutOfStock => style(label).red().to_string(),
    }
}

/// Verified marker for farmer listings.
pub fn verified_badge(verified: bool) -> String {
    if verified {
        style("✓ verified").green().to_string()
    } else {
        style("unverified").dim().to_string()
    }
}

/// Star rating with one decimal, e.g. "★ 4.8".
pub fn format_rating(rating: f64) -> String {
    format!("★ {:.1}", rating)
}

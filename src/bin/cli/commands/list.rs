use anyhow::Result;
use chrono::Utc;

use kotoba_lib::vocab::WordKind;

use crate::app::App;
use crate::render::terminal::word_line;
use crate::OutputFormat;

pub fn run(
    app: &App,
    kind: Option<WordKind>,
    tag: Option<&str>,
    due_only: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let now = Utc::now();
    let mut words = app.store.list()?;

    if let Some(kind) = kind {
        words.retain(|w| w.kind == kind);
    }
    if let Some(tag) = tag {
        words.retain(|w| w.tags.iter().any(|t| t == tag));
    }
    if due_only {
        words.retain(|w| w.is_due(now));
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("(no words)");
                return Ok(());
            }
            for word in &words {
                println!("{}", word_line(word, now, use_color));
            }
            println!();
            println!("{} word(s)", words.len());
        }
    }

    Ok(())
}

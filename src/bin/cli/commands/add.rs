use anyhow::Result;
use chrono::Utc;

use kotoba_lib::vocab::{CreateWordRequest, WordKind};

use crate::app::App;
use crate::render::terminal::{ruby, Color};
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    app: &App,
    term: String,
    reading: String,
    meaning: String,
    kind: WordKind,
    tags: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let tags = tags
        .map(|t| {
            t.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let now = Utc::now();
    let word = app.store.add(
        CreateWordRequest {
            term,
            reading,
            meaning,
            kind,
            tags,
        },
        now,
    )?;

    // Adding can already unlock the first milestones
    let unlocks = app.check_achievements(now)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&word)?);
        }
        OutputFormat::Plain => {
            println!("Added {} ({}): {}", ruby(&word), word.kind.label(), word.meaning);
            for unlock in unlocks {
                if use_color {
                    println!(
                        "{}Achievement unlocked:{} {}",
                        Color::MAGENTA,
                        Color::RESET,
                        unlock.kind.name()
                    );
                } else {
                    println!("Achievement unlocked: {}", unlock.kind.name());
                }
            }
        }
    }

    Ok(())
}

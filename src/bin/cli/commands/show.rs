use anyhow::Result;
use chrono::Utc;

use kotoba_lib::srs::algorithm::{self, Rating};

use crate::app::App;
use crate::render::terminal::{due_in, heading, ruby};
use crate::OutputFormat;

pub fn run(app: &App, term: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let word = app.find_word(term)?;
    let now = Utc::now();

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&word)?);
        return Ok(());
    }

    println!("{}", heading(&ruby(&word), use_color));
    println!("  reading:  {}", word.reading);
    println!("  meaning:  {}", word.meaning);
    println!("  kind:     {}", word.kind.label());
    if !word.tags.is_empty() {
        println!("  tags:     {}", word.tags.join(", "));
    }
    println!("  level:    {}", word.srs_level);
    println!("  schedule: {}", due_in(&word, now));
    println!(
        "  reviews:  {} correct, {} incorrect",
        word.correct_count, word.incorrect_count
    );

    // What each rating would schedule next
    let previews = algorithm::preview_intervals(word.srs_level, now);
    let labels = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];
    let parts: Vec<String> = labels
        .iter()
        .zip(previews.iter())
        .map(|(rating, interval)| {
            format!("{} {}", rating.label(), algorithm::format_interval(*interval))
        })
        .collect();
    println!("  next:     {}", parts.join(" / "));

    Ok(())
}

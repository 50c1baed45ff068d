use anyhow::Result;
use chrono::Local;

use crate::app::App;
use crate::render::terminal::heading;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.store.stats(Local::now());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("{}", heading("Collection", use_color));
            println!("  words:        {}", stats.total_words);
            println!("  due today:    {}", stats.words_due_today);
            let levels: Vec<String> = stats
                .level_counts
                .iter()
                .enumerate()
                .map(|(level, count)| format!("L{} {}", level, count))
                .collect();
            println!("  by level:     {}", levels.join("  "));

            println!("{}", heading("Study", use_color));
            println!("  success rate: {}%", stats.success_rate);
            println!("  streak:       {} day(s)", stats.streak_days);
            println!("  total XP:     {}", stats.total_xp);
            match stats.last_studied_on {
                Some(date) => println!("  last studied: {}", date),
                None => println!("  last studied: never"),
            }
        }
    }

    Ok(())
}

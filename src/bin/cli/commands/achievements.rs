use anyhow::Result;

use kotoba_lib::achievements::AchievementKind;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let unlocks = app.achievements.list_unlocks()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&unlocks)?);
        }
        OutputFormat::Plain => {
            for kind in AchievementKind::ALL {
                let unlock = unlocks.iter().find(|u| u.kind == kind);
                let marker = if unlock.is_some() { "[x]" } else { "[ ]" };
                let line = match unlock {
                    Some(unlock) => format!(
                        "{} {}: {} (unlocked {})",
                        marker,
                        kind.name(),
                        kind.description(),
                        unlock.unlocked_at.format("%Y-%m-%d")
                    ),
                    None => format!("{} {}: {}", marker, kind.name(), kind.description()),
                };

                if use_color && unlock.is_some() {
                    println!("{}{}{}", Color::GREEN, line, Color::RESET);
                } else {
                    println!("{}", line);
                }
            }
            println!();
            println!(
                "{} of {} unlocked",
                unlocks.len(),
                AchievementKind::ALL.len()
            );
        }
    }

    Ok(())
}

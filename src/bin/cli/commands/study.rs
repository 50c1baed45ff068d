use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, Utc};

use kotoba_lib::srs::algorithm::Rating;
use kotoba_lib::srs::StudySession;

use crate::app::App;
use crate::render::terminal::{heading, ruby, Color};

pub fn run(
    app: &App,
    limit: Option<usize>,
    new_limit: Option<usize>,
    no_shuffle: bool,
    use_color: bool,
) -> Result<()> {
    let now = Utc::now();
    let limits = app.queue_limits(limit, new_limit);
    let shuffle = app.config.shuffle_queue && !no_shuffle;

    let queue = app.store.study_queue(now, limits, shuffle)?;
    if queue.is_empty() {
        println!("Nothing to study: no words are due.");
        return Ok(());
    }

    println!(
        "{} word(s) to study. Enter reveals, 1-4 rates (1 again / 2 hard / 3 good / 4 easy), q quits.",
        queue.len()
    );
    println!();

    let mut session = StudySession::new(queue, now);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'session: while let Some(word) = session.current().cloned() {
        let summary = session.summary();
        println!(
            "[{}/{}] {}",
            summary.answered + 1,
            summary.total,
            heading(&word.term, use_color)
        );

        print!("  ... ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if line?.trim() == "q" {
                    break 'session;
                }
            }
            None => break 'session,
        }

        println!("  {}", ruby(&word));
        println!("  {}", word.meaning);

        let rating = loop {
            print!("  rate (1-4, q quits): ");
            io::stdout().flush()?;
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    let input = line.trim();
                    if input == "q" {
                        break 'session;
                    }
                    if let Some(rating) = Rating::parse(input) {
                        break rating;
                    }
                }
                None => break 'session,
            }
        };

        let review_time = Utc::now();
        app.store.review_rated(word.id, rating, review_time)?;
        session.record(rating);
        println!();
    }

    let summary = session.summary();
    if summary.answered == 0 {
        println!("Session ended before any answers.");
        return Ok(());
    }

    // Flush session results into the profile
    app.store.add_xp(summary.xp_earned)?;
    let profile = app.store.mark_studied(Local::now().date_naive())?;

    println!();
    println!("{}", heading("Session complete", use_color));
    println!(
        "  {} answered: {} correct, {} incorrect",
        summary.answered, summary.correct, summary.incorrect
    );
    println!("  {} XP earned, {} day streak", summary.xp_earned, profile.streak_days);

    for unlock in app.check_achievements(Utc::now())? {
        if use_color {
            println!(
                "  {}Achievement unlocked:{} {}: {}",
                Color::MAGENTA,
                Color::RESET,
                unlock.kind.name(),
                unlock.kind.description()
            );
        } else {
            println!(
                "  Achievement unlocked: {}: {}",
                unlock.kind.name(),
                unlock.kind.description()
            );
        }
    }

    Ok(())
}

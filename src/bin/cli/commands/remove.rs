use anyhow::{bail, Result};

use crate::app::App;
use crate::render::terminal::ruby;

pub fn run(app: &App, term: &str, _use_color: bool) -> Result<()> {
    let word = app.find_word(term)?;

    if !app.store.delete(word.id)? {
        bail!("Word '{}' disappeared before it could be removed", word.term);
    }

    println!("Removed {}: {}", ruby(&word), word.meaning);
    Ok(())
}

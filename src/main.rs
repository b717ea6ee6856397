use anyhow::{Context, Result};
use bubbletea_rs::Program;
use tomatea::app::Model;
use tomatea::banner;

#[tokio::main]
async fn main() -> Result<()> {
    // The banner art is a startup precondition, checked before the
    // terminal enters the alternate screen.
    let art = banner::load(banner::DEFAULT_PATH)
        .with_context(|| format!("failed to load banner art from {}", banner::DEFAULT_PATH))?;
    banner::install(art);

    let program = Program::<Model>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}

use std::fs;

use agecalc::config::{Cli, OutputFormat};
use agecalc::render::{render_json, render_text};
use agecalc::{logging, session, svg};
use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let clock = cli.clock()?;

    let (form, interactive) = cli.initial_form(clock.today());
    let form = if interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        session::run(stdin, tokio::io::stdout(), clock.as_ref(), form)
            .await
            .context("interactive session failed")?
    } else {
        form
    };

    match cli.format {
        OutputFormat::Json => println!("{}", render_json(&form)?),
        // the session has already rendered every step
        OutputFormat::Text if interactive => {}
        OutputFormat::Text => print!("{}", render_text(&form)),
    }

    if let Some(path) = &cli.svg {
        let card = svg::generate_svg(&form, cli.theme);
        fs::write(path, card).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote SVG card");
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use vectorshop::config::Config;
use vectorshop::input::CanvasState;
use vectorshop::session;

#[derive(Parser, Debug)]
#[command(name = "vectorshop")]
#[command(version, about = "Polyline sketching tool with db command-stream export")]
struct Cli {
    /// Command script to replay (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Write the exported data here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let mut canvas = CanvasState::with_colors(config.stroke_index(), config.background_index())
        .context("config resolved to an invalid palette index")?;

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session::run_script(BufReader::new(file), &mut canvas)
                .with_context(|| format!("failed to replay script {}", path.display()))?;
        }
        None => {
            let stdin = io::stdin();
            session::run_script(stdin.lock(), &mut canvas)
                .context("failed to replay script from stdin")?;
        }
    }

    let data = canvas.export();
    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            writeln!(file, "{data}")
                .with_context(|| format!("failed to write output file {}", path.display()))?;
            log::info!("wrote export to {}", path.display());
        }
        None => println!("{data}"),
    }

    Ok(())
}

//! shotframe CLI
//!
//! Subcommands:
//!   mockups  Draw the synthetic app screens
//!   frame    Frame raw captures onto gradients with headlines
//!   all      Both of the above (also the default with no subcommand)
//!   inspect  Print size and histogram statistics of PNG files
//!   scenes   Print the effective scene set as RON
//!
//! Example:
//!   cargo run -- --out-dir build/store --input-dir captures all

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use shotframe::{inspect::inspect_file, pipeline, FontBook, SceneSet, ShotConfig};

const DEFAULT_CONFIG: &str = "shotframe.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Storefront screenshot compositor", long_about = None)]
struct Cli {
    /// RON config layer; repeat to layer several, later files win. Defaults to ./shotframe.ron if present.
    #[arg(long = "config", global = true)]
    configs: Vec<PathBuf>,
    /// RON scene set replacing the built-in scenes
    #[arg(long, global = true)]
    scenes: Option<PathBuf>,
    /// Write to <DIR>/mockups and <DIR>/marketing
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    /// Directory holding the raw captures
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,
    /// Skip font discovery and draw with the built-in bitmap font
    #[arg(long, global = true)]
    builtin_font: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw the synthetic app-screen mockups
    Mockups,
    /// Frame raw captures into marketing shots
    Frame,
    /// Run both pipelines
    All,
    /// Summary statistics for existing PNGs
    Inspect {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the effective scene set as RON
    Scenes,
}

fn load_config(cli: &Cli) -> ShotConfig {
    let layers: Vec<PathBuf> = if cli.configs.is_empty() {
        let default = Path::new(DEFAULT_CONFIG);
        if default.exists() { vec![default.to_path_buf()] } else { Vec::new() }
    } else {
        cli.configs.clone()
    };
    let (mut cfg, used, errors) = ShotConfig::load_layered(&layers);
    for e in &errors {
        warn!(target: "config", "{e}");
    }
    if !used.is_empty() {
        info!(target: "config", "loaded layers: {}", used.join(", "));
    }
    if let Some(dir) = &cli.out_dir {
        cfg.output.mockup_dir = dir.join("mockups");
        cfg.output.marketing_dir = dir.join("marketing");
    }
    if let Some(dir) = &cli.input_dir {
        cfg.input.raw_dir = dir.clone();
    }
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
    cfg
}

fn load_scenes(cli: &Cli) -> Result<SceneSet> {
    match &cli.scenes {
        Some(path) => SceneSet::load_from_file(path),
        None => Ok(SceneSet::builtin()),
    }
}

fn load_fonts(cli: &Cli, cfg: &ShotConfig) -> FontBook {
    if cli.builtin_font { FontBook::builtin() } else { FontBook::load(&cfg.fonts) }
}

fn cmd_generate(cli: &Cli, mockups: bool, frames: bool) -> Result<()> {
    let cfg = load_config(cli);
    let scenes = load_scenes(cli)?;
    let fonts = load_fonts(cli, &cfg);
    if mockups {
        println!("Generating mockups for {}x{}...\n", cfg.canvas.width, cfg.canvas.height);
        let written = pipeline::generate_mockups(&cfg, &scenes, &fonts)?;
        println!("\n✅ {} mockup(s) in {}", written.len(), cfg.output.mockup_dir.display());
    }
    if frames {
        let written = pipeline::frame_captures(&cfg, &scenes, &fonts)?;
        println!("\n✅ Done! {} marketing screenshot(s) in {}", written.len(), cfg.output.marketing_dir.display());
    }
    Ok(())
}

fn cmd_inspect(paths: &[PathBuf]) -> Result<()> {
    let mut failed = 0;
    for path in paths {
        match inspect_file(path) {
            Ok(stats) => println!("{}: {stats}", path.display()),
            Err(e) => {
                eprintln!("{e:#}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} file(s) could not be inspected", paths.len());
    }
    Ok(())
}

fn cmd_scenes(cli: &Cli) -> Result<()> {
    println!("{}", load_scenes(cli)?.to_ron()?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Mockups) => cmd_generate(&cli, true, false),
        Some(Commands::Frame) => cmd_generate(&cli, false, true),
        Some(Commands::All) | None => cmd_generate(&cli, true, true),
        Some(Commands::Inspect { paths }) => cmd_inspect(paths),
        Some(Commands::Scenes) => cmd_scenes(&cli),
    }
}

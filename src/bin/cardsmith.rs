use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cardsmith::{
    CardError, CardRenderer, Category, ContentRecord, RawContentRecord, RenderConfig, TypeLabel,
    style::registry::{category_for, palette, texture_pattern},
};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card PNG from a content record and a photo.
    Render(RenderArgs),
    /// Validate a content record without rendering.
    Check(CheckArgs),
    /// Print the type label, category, and texture table.
    Styles,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Content record JSON.
    #[arg(long)]
    record: PathBuf,

    /// Source photo (any common raster format).
    #[arg(long)]
    photo: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Fixed texture seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Font directory to search; repeatable. Replaces the configured directories.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Renderer config JSON. Environment overrides apply on top.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Content record JSON.
    #[arg(long)]
    record: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
        Command::Styles => {
            cmd_styles();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_record(path: &Path) -> Result<ContentRecord, CardError> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read record '{}'", path.display()))?;
    let raw = RawContentRecord::from_json(&json)?;
    ContentRecord::from_raw(raw)
}

fn load_config(args: &RenderArgs) -> Result<RenderConfig, CardError> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };
    config = config.with_overrides(|key| std::env::var(key).ok())?;
    if !args.font_dirs.is_empty() {
        config = config.with_font_dirs(args.font_dirs.clone());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> Result<(), CardError> {
    let record = read_record(&args.record)?;
    let config = load_config(&args)?;
    let renderer = CardRenderer::new(config)?;
    let report = renderer.render_file(&record, &args.photo, &args.out)?;
    tracing::info!(
        out = %args.out.display(),
        category = %report.category,
        seed = report.texture_seed,
        truncated = report.ability_truncated,
        "card saved"
    );
    println!("{}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> Result<(), CardError> {
    let record = read_record(&args.record)?;
    println!(
        "ok: '{}' type={} category={}",
        record.name(),
        record.type_label(),
        category_for(record.type_label())
    );
    Ok(())
}

fn cmd_styles() {
    for label in TypeLabel::ALL {
        let category: Category = category_for(label);
        let bg = palette(category).background;
        println!(
            "{:<10} {:<10} {:<10} #{:02x}{:02x}{:02x}",
            label.as_str(),
            category.as_str(),
            format!("{:?}", texture_pattern(category)),
            bg.r,
            bg.g,
            bg.b
        );
    }
}

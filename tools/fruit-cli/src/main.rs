//! ar-fruits - AR Fruits asset tool
//!
//! # Commands
//!
//! - `ar-fruits models` - Generate one placeholder sphere GLB per fruit
//! - `ar-fruits images` - Wrap every image in a textured plane GLB
//! - `ar-fruits scan` - Rebuild the model manifest from the models directory

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use fruit_cli::{Config, ImagesOutcome, generate_image_models, generate_models, scan_models};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ar-fruits")]
#[command(about = "AR Fruits asset tool")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ar-fruits.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate placeholder sphere models for every fruit
    Models {
        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate image-plane models and the image manifest
    Images {
        /// Directory of source images (overrides config)
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Output directory for models (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manifest file to write (overrides config)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Scan the models directory and write the model manifest
    Scan {
        /// Models directory (overrides config)
        #[arg(long)]
        models: Option<PathBuf>,

        /// Manifest file to write (overrides config)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Seed for card colour selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Models { output } => {
            let output = output.unwrap_or(config.paths.models.clone());
            let report = generate_models(&config.fruit_models(), &config.sphere, &output)?;
            if report.all_failed() {
                anyhow::bail!("All {} fruit models failed", report.failed);
            }
            tracing::info!("Generated {} fruit models", report.written.len());
        }

        Commands::Images {
            images,
            output,
            manifest,
        } => {
            let images = images.unwrap_or(config.paths.images);
            let output = output.unwrap_or(config.paths.models);
            let manifest = manifest.unwrap_or(config.paths.manifest);

            match generate_image_models(&images, &output, &manifest, Utc::now())? {
                ImagesOutcome::CreatedImageDir => {}
                ImagesOutcome::Generated(report) => {
                    if report.all_failed() {
                        anyhow::bail!("All {} images failed", report.failed);
                    }
                }
            }
        }

        Commands::Scan {
            models,
            manifest,
            seed,
        } => {
            let models = models.unwrap_or(config.paths.models);
            let manifest = manifest.unwrap_or(config.paths.manifest);
            let mut rng = match seed {
                Some(seed) => Pcg64::seed_from_u64(seed),
                None => Pcg64::from_rng(&mut rand::rng()),
            };

            scan_models(&models, &manifest, &mut rng, Utc::now())?;
        }
    }

    tracing::info!("Done!");
    Ok(())
}

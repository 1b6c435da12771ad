//! Miniturbo CLI - binary entry point.
//!
//! Each generation subcommand forwards to [`OmniModalMiniturbo`] and exits
//! non-zero with the engine's error. Meta-logic subcommands print their
//! result to stdout.
//!
//! Options left off the command line fall back to `[generation]` in the
//! config file, then to the built-in defaults (512 px, 60 fps).

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use miniturbo_config::MiniturboConfig;
use miniturbo_core::{
    GenerationDefaults, GenerationRequest, ImageOptions, OmniModalMiniturbo, Prompt, VideoOptions,
};

#[derive(Parser, Debug)]
#[command(name = "miniturbo", version)]
#[command(about = "Omni-modal (audio, image, volume, video) generation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Generate 1D audio from a prompt
    Audio {
        prompt: String,
    },
    /// Generate a 2D image from a prompt
    Image {
        prompt: String,
        /// Image edge length in pixels
        #[arg(long, allow_negative_numbers = true)]
        resolution: Option<i64>,
    },
    /// Generate a 3D volumetric scene from a prompt
    Volume {
        prompt: String,
    },
    /// Generate 4D video from a prompt
    Video {
        prompt: String,
        /// Frames per second
        #[arg(long, allow_negative_numbers = true)]
        fps: Option<i64>,
    },
    /// Lambda-reduce an expression
    Reduce {
        expr: String,
    },
    /// Apply one deduction step to a premise
    Deduce {
        premise: String,
    },
    /// Check a proof of a statement
    Prove {
        statement: String,
    },
    /// List modalities and whether they are implemented
    Capabilities,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, keep stdout clean for command output.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.miniturbo/logs/miniturbo.log
    if let Some(config_path) = MiniturboConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("miniturbo.log"));
    }

    // Fallback: ./.miniturbo/logs/miniturbo.log
    candidates.push(PathBuf::from(".miniturbo").join("logs").join("miniturbo.log"));

    candidates
}

fn load_defaults() -> GenerationDefaults {
    match MiniturboConfig::load() {
        Ok(Some(config)) => config.generation_defaults(),
        Ok(None) => GenerationDefaults::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            GenerationDefaults::default()
        }
    }
}

/// Translate a generation subcommand into a request, or `None` for the
/// non-generation commands.
fn generation_request(
    command: &Commands,
    defaults: GenerationDefaults,
) -> Option<GenerationRequest> {
    let request = match command {
        Commands::Audio { prompt } => GenerationRequest::Audio {
            prompt: Prompt::from(prompt),
        },
        Commands::Image { prompt, resolution } => GenerationRequest::Image {
            prompt: Prompt::from(prompt),
            options: resolution.map_or(defaults.image, ImageOptions::new),
        },
        Commands::Volume { prompt } => GenerationRequest::Volume {
            prompt: Prompt::from(prompt),
        },
        Commands::Video { prompt, fps } => GenerationRequest::Video {
            prompt: Prompt::from(prompt),
            options: fps.map_or(defaults.video, VideoOptions::new),
        },
        Commands::Reduce { .. }
        | Commands::Deduce { .. }
        | Commands::Prove { .. }
        | Commands::Capabilities => return None,
    };
    Some(request)
}

fn run(engine: &OmniModalMiniturbo, command: Commands) -> Result<()> {
    if let Some(request) = generation_request(&command, engine.defaults()) {
        let modality = request.modality();
        if let Err(err) = engine.generate(request) {
            tracing::info!(%modality, "Generation unavailable: {err}");
            return Err(err.into());
        }
        // Unreachable while every modality is a placeholder.
        println!("{modality} generation finished");
        return Ok(());
    }

    match command {
        Commands::Reduce { expr } => println!("{}", engine.meta_logic().lambda_reduce(expr)),
        Commands::Deduce { premise } => println!("{}", engine.meta_logic().deduce(premise)),
        Commands::Prove { statement } => {
            println!("{}", engine.meta_logic().prove(statement.as_str()));
        }
        Commands::Capabilities => {
            for status in engine.capabilities() {
                let state = if status.implemented {
                    "implemented"
                } else {
                    "not implemented"
                };
                println!(
                    "{:<8}{}D  {}",
                    status.modality.as_str(),
                    status.modality.dimensions(),
                    state
                );
            }
        }
        Commands::Audio { .. }
        | Commands::Image { .. }
        | Commands::Volume { .. }
        | Commands::Video { .. } => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let engine = OmniModalMiniturbo::with_defaults(load_defaults());
    run(&engine, cli.command)
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use polysketch::{Config, InputState, Tool, script};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polysketch")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POLYSKETCH_GIT_HASH"), ")"),
    about = "Click-to-draw polygon sketcher"
)]
struct Cli {
    /// Use this config file instead of ~/.config/polysketch/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON event script and print the resulting polygons as JSON
    Replay {
        /// Event script to replay
        script: PathBuf,

        /// Also render the final scene to this PNG file
        #[arg(long, value_name = "PATH")]
        png: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the toolbar tools
    Tools,
    /// Write a documented default config file
    InitConfig,
    /// Print the config file JSON schema
    Schema,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script: script_path,
            png,
            pretty,
        } => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };

            let events = script::load(&script_path)
                .with_context(|| format!("Failed to load script {}", script_path.display()))?;
            log::info!(
                "Replaying {} events from {}",
                events.len(),
                script_path.display()
            );

            let mut state = InputState::new(config.input_settings());
            let summary = script::replay(&mut state, &events);
            if summary.dropped_clicks > 0 {
                log::warn!(
                    "{} click(s) were dropped (inactive tool or no surface layout)",
                    summary.dropped_clicks
                );
            }

            let report = serde_json::json!({
                "polygons": state.drawing().frame(),
                "current_polygon": state.current_polygon(),
                "active_tool": state.active_tool(),
                "viewport": state.viewport(),
            });
            let output = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{output}");

            if let Some(png_path) = png {
                state
                    .export_png(&png_path, &config.render_style())
                    .with_context(|| format!("Failed to render {}", png_path.display()))?;
            }
        }
        Command::Tools => {
            for tool in Tool::ALL {
                let marker = if tool == Tool::default() {
                    " (default)"
                } else {
                    ""
                };
                println!("{tool}{marker}");
            }
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Wrote {}", path.display());
        }
        Command::Schema => {
            let schema = Config::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

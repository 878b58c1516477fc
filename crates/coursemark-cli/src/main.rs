use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use coursemark_config::Config;
use coursemark_engine::{
    Cmd, ContentBlock, Document, RoundTrip, check_round_trip, normalize_youtube_url,
    parse_document,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

#[derive(Parser)]
#[command(name = "coursemark")]
#[command(version, about = "Convert course material documents to and from content blocks")]
struct Cli {
    /// Config file to use instead of ~/.config/coursemark/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the content blocks of a document as JSON
    Decode {
        /// Document to read (stdin when omitted)
        input: Option<PathBuf>,

        /// Single-line JSON regardless of config
        #[arg(long)]
        compact: bool,
    },
    /// Turn a JSON array of content blocks back into a document
    Encode {
        /// JSON file to read (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Verify a document survives loading and saving unchanged
    Check {
        /// Document to read (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Print the embed form of a YouTube link
    NormalizeUrl { url: String },
    /// Apply a JSON array of editing commands to a document
    Apply {
        /// Document to edit
        input: PathBuf,

        /// JSON file holding the commands
        commands: PathBuf,

        /// Write the result back to the document instead of stdout
        #[arg(short, long)]
        in_place: bool,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with default settings
    Init {
        /// Directory relative document paths are resolved against
        #[arg(long, value_name = "DIR")]
        materials_path: Option<PathBuf>,

        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let default_filter = config.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("Config path: {}", config_path.display());

    match cli.command {
        Command::Decode { input, compact } => {
            let text = read_input(&config, input.as_deref())?;
            let blocks = parse_document(&text);
            let json = if config.pretty_json && !compact {
                serde_json::to_string_pretty(&blocks)?
            } else {
                serde_json::to_string(&blocks)?
            };
            println!("{json}");
        }
        Command::Encode { input } => {
            let json = read_input(&config, input.as_deref())?;
            let blocks: Vec<ContentBlock> =
                serde_json::from_str(&json).context("Input is not a JSON array of content blocks")?;
            write_stdout(&Document::from_blocks(blocks).to_text())?;
        }
        Command::Check { input } => {
            let text = read_input(&config, input.as_deref())?;
            match check_round_trip(&text) {
                RoundTrip::Stable => println!("stable"),
                RoundTrip::Unstable {
                    line,
                    original,
                    rendered,
                } => {
                    eprintln!("Document changes on save at line {line}");
                    eprintln!("  stored: {}", original.as_deref().unwrap_or("<none>"));
                    eprintln!("  saved:  {}", rendered.as_deref().unwrap_or("<none>"));
                    process::exit(1);
                }
            }
        }
        Command::NormalizeUrl { url } => {
            println!("{}", normalize_youtube_url(&url));
        }
        Command::Apply {
            input,
            commands,
            in_place,
        } => {
            let input = config.resolve_material_path(&input);
            let text = read_file(&input)?;
            let cmds: Vec<Cmd> = serde_json::from_str(&read_file(&commands)?)
                .with_context(|| format!("Invalid commands in {}", commands.display()))?;

            let mut doc = Document::from_text(&text);
            for cmd in cmds {
                let describe = format!("{cmd:?}");
                if !doc.apply(cmd).changed {
                    log::warn!("Command had no effect: {describe}");
                }
            }

            let output = doc.to_text();
            if in_place {
                fs::write(&input, output)
                    .with_context(|| format!("Failed to write {}", input.display()))?;
                log::info!("Saved {} (version {})", input.display(), doc.version());
            } else {
                write_stdout(&output)?;
            }
        }
        Command::Config {
            action:
                ConfigAction::Init {
                    materials_path,
                    force,
                },
        } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to replace it)",
                    config_path.display()
                );
            }
            let fresh = Config {
                materials_path,
                ..Config::default()
            };
            match cli.config {
                Some(_) => fresh.save_to_path(&config_path)?,
                None => fresh.save()?,
            }
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

fn read_input(config: &Config, input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => read_file(&config.resolve_material_path(path)),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

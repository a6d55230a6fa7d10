use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_config::RenderConfig;
use folio_engine::{Document, render};
use std::io::Read;
use std::path::{Path, PathBuf};

mod styling;
mod viewer;

#[derive(Parser)]
#[command(name = "folio", version, about = "Render Folio lesson and journal markup")]
struct Cli {
    /// Render config (defaults to ~/.config/folio/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a rendered document to stdout
    Print {
        /// Input file; `-` or omitted reads stdin
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Browse a document in the terminal
    View {
        /// Input file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Text with inline markers consumed
    Plain,
    /// HTML fragment
    Html,
    /// The block model, for inspecting classification
    Debug,
    /// The normalized pseudo-Markdown fed to the classifier
    Normalized,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let normalizer = config.normalizer();

    match cli.command {
        Command::Print { file, format } => {
            let text = read_input(file.as_deref())?;
            let output = match format {
                Format::Plain => {
                    render::to_plain_text(&folio_engine::render_document_with(&normalizer, &text))
                }
                Format::Html => {
                    render::to_html(&folio_engine::render_document_with(&normalizer, &text))
                }
                Format::Debug => format!(
                    "{:#?}",
                    folio_engine::render_document_with(&normalizer, &text).blocks
                ),
                Format::Normalized => normalizer.normalize(&text),
            };
            println!("{output}");
        }
        Command::View { file } => {
            let text = read_input(Some(&file))?;
            let document: Document = folio_engine::render_document_with(&normalizer, &text);
            log::info!("viewing {} ({} blocks)", file.display(), document.len());
            let title = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            viewer::run(title, &document)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let loaded = match path {
        Some(path) => Some(
            RenderConfig::load_from_path(path)?
                .with_context(|| format!("Config file {} does not exist", path.display()))?,
        ),
        None => RenderConfig::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lumen::config::{self, ConfigHandle};
use lumen::logger;
use lumen::theme::ThemeContext;
use lumen::theme::appearance::SystemHost;
use lumen::theme::fonts::FontStyle;
use lumen::theme::icons::IconName;
use lumen::theme::resolver::ColorSource;
use lumen::theme::types::ColorName;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "lumen", version, about = "Resolve themed colors, icons and fonts")]
struct Cli {
    /// Configuration file (defaults to config.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the appearance mode (Light, Dark or Auto)
    #[arg(long)]
    appearance: Option<String>,

    /// Override the theme file, relative to the themes directory
    #[arg(long)]
    theme: Option<String>,

    /// Print machine readable JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List theme files in the themes directory
    Themes,
    /// Print the effective light/dark variant
    Variant,
    /// Resolve one semantic color
    Color { name: String },
    /// Resolve every semantic color
    Colors,
    /// Resolve one icon
    Icon { name: String },
    /// Resolve the font for a style
    Font {
        #[arg(value_parser = ["normal", "bold"])]
        style: String,
    },
}

fn source_label(source: ColorSource) -> &'static str {
    match source {
        ColorSource::Custom => "theme",
        ColorSource::Default => "default",
        ColorSource::Baseline => "baseline",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = config::load_config(cli.config.as_deref())?;
    logger::setup_logger(app_config.logging()).context("failed to initialize logger")?;

    if let Some(appearance) = cli.appearance {
        app_config.appearance_mut().appearance = appearance;
    }
    if let Some(theme) = cli.theme {
        app_config.appearance_mut().theme_file = theme;
    }
    if let Err(errors) = app_config.validate() {
        for error in errors {
            log::warn!("{error}");
        }
    }

    let handle = ConfigHandle::new(app_config.appearance().clone());
    let context = ThemeContext::new(handle, app_config.themes_dir(), Arc::new(SystemHost::new()));

    match cli.command {
        Command::Themes => {
            let themes = context.list_themes();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&themes)?);
            } else {
                for (file, name) in themes {
                    println!("{file}\t{name}");
                }
            }
        }
        Command::Variant => println!("{}", context.variant()),
        Command::Color { name } => {
            let name: ColorName = name.parse().map_err(anyhow::Error::msg)?;
            let resolved = context.resolve_color(name);
            println!("{}\t{}", resolved.color, source_label(resolved.source));
        }
        Command::Colors => {
            let palette = context.palette();
            if cli.json {
                let palette: BTreeMap<&str, String> = palette
                    .iter()
                    .map(|(name, resolved)| (name.as_str(), resolved.color.to_hex()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for (name, resolved) in palette {
                    println!("{name}\t{}\t{}", resolved.color, source_label(resolved.source));
                }
            }
        }
        Command::Icon { name } => {
            let id: IconName = name.parse().map_err(anyhow::Error::msg)?;
            let icon = context.icon(id);
            println!("{}\t{} bytes", icon.name(), icon.content().len());
        }
        Command::Font { style } => {
            let style = if style == "bold" {
                FontStyle::Bold
            } else {
                FontStyle::Normal
            };
            let font = context.font(style);
            println!("{}\t{} bytes", font.name(), font.content().len());
        }
    }

    Ok(())
}

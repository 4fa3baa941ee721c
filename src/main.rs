//! Runs the plugin's font search on this machine and prints what it found.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use font_fallback::{
    FallbackPlugin, FontAsset, FontKitAsset, FontKitBackend, PluginConfig, TextSettings,
};

#[derive(Parser, Debug)]
#[command(name = "font-fallback", about = "Locate a Thai-capable fallback font")]
struct Args {
    /// Folder searched for bundled font files. Defaults to the executable's folder.
    #[arg(long)]
    plugin_dir: Option<PathBuf>,

    /// Font file to look for in the plugin folder; repeat to set the order.
    #[arg(long = "font-file")]
    font_files: Vec<String>,

    /// System font name to try; repeat to set the order.
    #[arg(long = "system-font")]
    system_fonts: Vec<String>,

    #[arg(long, default_value_t = font_fallback::DEFAULT_ATLAS_PADDING)]
    atlas_padding: u32,

    /// Only accept fonts with a glyph for this character, e.g. `ก`.
    #[arg(long)]
    require_char: Option<char>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let plugin_dir = match args.plugin_dir {
        Some(dir) => dir,
        None => std::env::current_exe()
            .context("locating the executable")?
            .parent()
            .map(PathBuf::from)
            .context("executable has no parent folder")?,
    };

    let mut config = PluginConfig::new(plugin_dir);
    if !args.font_files.is_empty() {
        config.font_files = args.font_files;
    }
    if !args.system_fonts.is_empty() {
        config.system_fonts = args.system_fonts;
    }
    config.resolver.atlas_padding = args.atlas_padding;
    config.resolver.required_char = args.require_char;

    let plugin = FallbackPlugin::new(FontKitBackend::new(), config);
    let mut settings: TextSettings<FontKitAsset> = TextSettings::new();
    let report = plugin.load(Some(&mut settings));

    match report.font {
        Some(font) => {
            println!("{}", font.asset.name());
            println!("  source: {}", font.source);
            println!("  family: {}", font.asset.font().family_name());
            println!("  padding: {}", font.asset.atlas_padding());
            Ok(())
        }
        None => anyhow::bail!("no Thai-capable font found"),
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fixed_hybrid::assets::decode::load_image;
use fixed_hybrid::hybrid::fixture::classic_client;
use fixed_hybrid::{
    Bitmap, ColumnOverlay, HostEvent, HybridConfig, HybridPlugin, OverlayAssets, RasterSurface,
    Size,
};

#[derive(Parser, Debug)]
#[command(name = "fixed-hybrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the side column for a simulated client as a PNG.
    Column(ColumnArgs),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ColumnArgs {
    /// Configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Client width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Client height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Stone background tile.
    #[arg(long)]
    tile: Option<PathBuf>,

    /// Gap border decal.
    #[arg(long)]
    border: Option<PathBuf>,

    /// Inventory warning decal.
    #[arg(long)]
    warning: Option<PathBuf>,

    /// Custom background tile; overrides `customBackgroundPath` from the config.
    #[arg(long)]
    custom_tile: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Column(args) => cmd_column(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<HybridConfig> {
    match path {
        Some(path) => HybridConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(HybridConfig::default()),
    }
}

fn load_asset(path: Option<&Path>, what: &str) -> anyhow::Result<Option<Bitmap>> {
    path.map(|p| load_image(p).with_context(|| format!("load {what} '{}'", p.display())))
        .transpose()
}

fn cmd_column(args: ColumnArgs) -> anyhow::Result<()> {
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("width and height must be > 0");
    }
    let mut config = read_config(args.config.as_deref())?;
    if let Some(path) = &args.custom_tile {
        config.custom_background_path = Some(path.clone());
    }

    let mut assets = OverlayAssets::new();
    if let Some(tile) = load_asset(args.tile.as_deref(), "tile")? {
        assets = assets.with_stone_tile(tile);
    }
    if let Some(border) = load_asset(args.border.as_deref(), "border")? {
        assets = assets.with_gap_border(border);
    }
    if let Some(warning) = load_asset(args.warning.as_deref(), "warning")? {
        assets = assets.with_warning(warning);
    }
    let mut overlay = ColumnOverlay::new(assets);
    if let Some(path) = &config.custom_background_path
        && !overlay.reload_custom_tile(path)
    {
        eprintln!("custom tile '{}' unusable, using the stone tile", path.display());
    }

    let size = Size::new(f64::from(args.width), f64::from(args.height));
    let mut client = classic_client(size);
    let mut plugin = HybridPlugin::new(config.clone());
    plugin.handle(&mut client, HostEvent::Startup);
    plugin.handle(&mut client, HostEvent::ClientTick);
    if !plugin.overlay_visible() {
        anyhow::bail!("simulated client did not reach the resizable classic layout");
    }

    let mut frame = Bitmap::new(args.width, args.height);
    let column = {
        let mut surface = RasterSurface::new(&mut frame);
        overlay.render(&mut surface, &client, size, &config)
    };
    frame.write_png(&args.out)?;

    println!(
        "wrote {} ({}x{} column)",
        args.out.display(),
        column.width,
        column.height
    );
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use interior_styler::{
    config::Config,
    error::StylerError,
    recommend::{swatch, BudgetRange, Recommendation, RoomDimensions, PALETTE_SWATCH, SUGGESTION_SWATCH},
    styles::StyleId,
    DesignPipeline,
};

#[derive(Parser)]
#[command(
    name = "interior-styler",
    version,
    about = "Restyle a room photo and mark where furniture could go",
    long_about = "Interior-Styler applies one of six interior-design color grades to a room photo and draws translucent, labeled placeholders for suggested furniture on top."
)]
struct Cli {
    /// Room photo (PNG or JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path
    #[arg(short, long, required_unless_present = "all_styles")]
    output: Option<PathBuf>,

    /// Design style (modern, traditional, industrial, scandinavian, bohemian, minimalist)
    #[arg(short, long, default_value = "modern")]
    style: String,

    /// Furniture label to place (repeatable, at most three are drawn)
    #[arg(long = "item")]
    items: Vec<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render every style into this directory instead of a single output
    #[arg(long, value_name = "DIR")]
    all_styles: Option<PathBuf>,

    /// Write furniture and palette swatch images into this directory
    #[arg(long, value_name = "DIR")]
    swatches: Option<PathBuf>,

    /// Room length in feet
    #[arg(long, default_value_t = 12)]
    length: u32,

    /// Room width in feet
    #[arg(long, default_value_t = 10)]
    width: u32,

    /// Minimum budget in dollars
    #[arg(long, default_value_t = 1000)]
    budget_min: u32,

    /// Maximum budget in dollars
    #[arg(long, default_value_t = 5000)]
    budget_max: u32,

    /// Free-text description of the room you want
    #[arg(short, long, default_value = "")]
    description: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Starting Interior-Styler v{}", env!("CARGO_PKG_VERSION"));

    run(cli).map_err(|e| match e.downcast::<StylerError>() {
        Ok(styler) => anyhow::anyhow!(styler.user_message()),
        Err(other) => other,
    })
}

fn run(cli: Cli) -> Result<()> {
    let style: StyleId = cli.style.parse().map_err(StylerError::from)?;
    let room = RoomDimensions::new(cli.length, cli.width)?;
    let budget = BudgetRange::new(cli.budget_min, cli.budget_max)?;

    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    let pipeline = DesignPipeline::new(config)?;

    info!("Input: {:?}", cli.input);
    let photo = image::open(&cli.input)
        .with_context(|| format!("Failed to open {:?}", cli.input))?
        .to_rgb8();

    if let Some(dir) = &cli.all_styles {
        render_all_styles(&pipeline, &photo, dir)?;
    }

    if let Some(output) = &cli.output {
        let design = if cli.items.is_empty() {
            pipeline.render_default(&photo, style)
        } else {
            pipeline.render(&photo, style, &cli.items)
        };
        design
            .image
            .save(output)
            .with_context(|| format!("Failed to write {:?}", output))?;
        info!("Design saved to {:?}", output);
    }

    let sheet = pipeline.recommend(style, room, budget, &cli.description);
    print_recommendation(&sheet);

    if let Some(dir) = &cli.swatches {
        write_swatches(&sheet, dir)?;
    }
    Ok(())
}

fn render_all_styles(pipeline: &DesignPipeline, photo: &image::RgbImage, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    for design in pipeline.render_all(photo) {
        let path = dir.join(format!("{}.png", design.style.key()));
        design
            .image
            .save(&path)
            .with_context(|| format!("Failed to write {:?}", path))?;
        info!("   {} -> {:?}", design.style, path);
    }
    Ok(())
}

fn write_swatches(sheet: &Recommendation, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let style = sheet.style.key();

    let suggestion_tiles = sheet
        .suggestions
        .iter()
        .map(|s| &s.color)
        .enumerate()
        .map(|(i, color)| (format!("{}_suggestion_{}.png", style, i + 1), color, SUGGESTION_SWATCH));
    let palette_tiles = sheet
        .palette
        .iter()
        .enumerate()
        .map(|(i, color)| (format!("{}_palette_{}.png", style, i + 1), color, PALETTE_SWATCH));

    for (name, color, side) in suggestion_tiles.chain(palette_tiles) {
        let path = dir.join(name);
        swatch(color, side)
            .save(&path)
            .with_context(|| format!("Failed to write {:?}", path))?;
    }
    info!("Swatches written to {:?}", dir);
    Ok(())
}

fn print_recommendation(sheet: &Recommendation) {
    println!("\n🏠 {} style recommendations", sheet.style);

    if let Some(vision) = &sheet.vision {
        println!("\n{}", vision);
    }

    println!("\n🪑 Furniture suggestions");
    for suggestion in &sheet.suggestions {
        println!("   {}  ({} {})", suggestion.label, suggestion.color.name, suggestion.color.hex);
    }

    println!("\n🎨 Color palette");
    for color in &sheet.palette {
        println!("   {} {}", color.hex, color.name);
    }

    println!("\n📐 Space planning");
    for tip in &sheet.tips {
        println!("   • {}", tip);
    }
}

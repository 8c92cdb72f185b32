use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use starfill::{Argb, CpuSurface, Rect, StarConfig, StarRating, paint::color::parse_hex};

#[derive(Parser, Debug)]
#[command(name = "starfill", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the widget at a rating as a single PNG.
    Frame(FrameArgs),
    /// Tap a star and render the resulting animation as a numbered PNG sequence.
    Tap(TapArgs),
    /// Print the resolved paint plans as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct WidgetArgs {
    /// Widget config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rating to show, overriding the config.
    #[arg(long)]
    rating: Option<f64>,

    /// Make taps change the rating, overriding the config.
    #[arg(long)]
    selectable: bool,

    /// Output width in pixels (defaults to the preferred width).
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels (defaults to the preferred height).
    #[arg(long)]
    height: Option<u32>,

    /// Background as `#RRGGBB` or `#AARRGGBB` (transparent when omitted).
    #[arg(long, value_parser = parse_hex)]
    background: Option<Argb>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    widget: WidgetArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TapArgs {
    #[command(flatten)]
    widget: WidgetArgs,

    /// Index of the tapped star (0-based).
    #[arg(long)]
    index: usize,

    /// Frames per second used to step the animation.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Directory receiving `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    widget: WidgetArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Tap(args) => cmd_tap(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

struct Prepared {
    widget: StarRating,
    width: u32,
    height: u32,
    background: Option<Argb>,
}

fn prepare(args: &WidgetArgs) -> anyhow::Result<Prepared> {
    let mut cfg = match &args.config {
        Some(path) => StarConfig::from_json_path(path)?,
        None => StarConfig::default(),
    };
    if let Some(rating) = args.rating {
        cfg.rating = rating;
    }
    if args.selectable {
        cfg.selectable = true;
    }

    let mut widget = StarRating::new(&cfg);
    let preferred = widget.preferred_size();
    let width = args.width.unwrap_or(preferred.width.ceil() as u32);
    let height = args.height.unwrap_or(preferred.height.ceil() as u32);
    widget.layout(Rect::new(0.0, 0.0, f64::from(width), f64::from(height)));

    Ok(Prepared {
        widget,
        width,
        height,
        background: args.background,
    })
}

fn render_png(p: &Prepared, out: &Path) -> anyhow::Result<()> {
    let mut surface = CpuSurface::new(p.width, p.height, p.background)?;
    p.widget.draw(&mut surface);
    let frame = surface.finish();

    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let prepared = prepare(&args.widget)?;
    create_parent_dir(&args.out)?;
    render_png(&prepared, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_tap(args: TapArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let mut prepared = prepare(&args.widget)?;
    let count = prepared.widget.star_count();
    if args.index >= count {
        anyhow::bail!("--index {} out of range for {count} stars", args.index);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    prepared.widget.select(args.index);
    let dt = Duration::from_secs(1) / args.fps;

    let mut frames = 0usize;
    loop {
        let path = args.out_dir.join(format!("frame_{frames:04}.png"));
        render_png(&prepared, &path)?;
        frames += 1;
        if !prepared.widget.is_animating() {
            break;
        }
        prepared.widget.tick(dt);
    }

    eprintln!(
        "wrote {frames} frames to {} (rating {})",
        args.out_dir.display(),
        prepared.widget.rating()
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let prepared = prepare(&args.widget)?;
    let plans = prepared.widget.paint_plans();
    let json = serde_json::to_string_pretty(&plans).context("serialize paint plans")?;
    println!("{json}");
    Ok(())
}

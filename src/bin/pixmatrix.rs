use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pixmatrix::{Image, MaskClass, Matrix, OpList};

#[derive(Parser, Debug)]
#[command(name = "pixmatrix", version)]
struct Cli {
    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON op list over an image and write a PNG.
    Apply(ApplyArgs),
    /// Print size and centroid of the visible pixels.
    Info(InfoArgs),
    /// Classify pixels into mask codes and write them as a gray PNG.
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Op list JSON: `{"ops": [{"op": "rotate90"}, ...]}`.
    #[arg(long)]
    ops: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path (clear = 0, boundary = 127, soft = 255).
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Info(args) => cmd_info(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.ops)
        .with_context(|| format!("read op list '{}'", args.ops.display()))?;
    let list = OpList::from_json_str(&json)
        .with_context(|| format!("parse op list '{}'", args.ops.display()))?;
    let img = pixmatrix::load_rgba8(&args.in_path)?;
    let out = list.apply(img)?;
    pixmatrix::save_png_rgba8(&args.out, &out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let img = pixmatrix::load_rgba8(&args.in_path)?;
    let c = pixmatrix::centroid(&img);
    let visible = img.as_slice().iter().filter(|p| p.a != 0).count();
    println!("size:     {}x{}", img.width(), img.height());
    println!("visible:  {visible}");
    println!("centroid: {:.2},{:.2}", c.x, c.y);
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let img = pixmatrix::load_rgba8(&args.in_path)?;
    let mut mask = Image::new(img.width(), img.height(), 0u8)?;
    pixmatrix::encode_mask(&img, &mut mask)?;
    for v in mask.as_mut_slice() {
        *v = match MaskClass::from_code(*v) {
            Some(MaskClass::Boundary) => 127,
            Some(MaskClass::Soft) => 255,
            Some(MaskClass::Clear) | None => 0,
        };
    }
    let png = pixmatrix::encode_png_gray8(&mask)?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Engine configuration JSON. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize one screen texture as a PNG.
    Texture(TextureArgs),
    /// Load a hero asset manifest and print the assembled scene as JSON.
    Scene(SceneArgs),
    /// Report the active nav section for a page layout and scroll offset.
    Nav(NavArgs),
}

#[derive(Parser, Debug)]
struct TextureArgs {
    /// Content kind. Ignored when `--screen` is given.
    #[arg(long, value_enum, default_value_t = KindChoice::Label)]
    kind: KindChoice,

    /// Descriptor param as `key=value`; repeatable. Use `\n` for line breaks.
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Render one of the configured hero screens instead.
    #[arg(long, value_enum)]
    screen: Option<ScreenChoice>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Directory asset ids are resolved against.
    #[arg(long)]
    assets: PathBuf,

    /// Asset id; defaults to `hero.asset_id` from the configuration.
    #[arg(long)]
    asset_id: Option<String>,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct NavArgs {
    /// Layout JSON mapping element ids to `[top, bottom]` in document px.
    #[arg(long)]
    layout: PathBuf,

    /// Scroll offset in px.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Simulate a click on this anchor after scrolling.
    #[arg(long)]
    click: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Code,
    Profile,
    Label,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScreenChoice {
    Left,
    Right,
    Tablet,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => folio::FolioConfig::load(path)?,
        None => folio::FolioConfig::default(),
    };
    match cli.cmd {
        Command::Texture(args) => cmd_texture(&cfg, args),
        Command::Scene(args) => cmd_scene(&cfg, args),
        Command::Nav(args) => cmd_nav(&cfg, args),
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got \"{s}\""))?;
    Ok((k.to_string(), v.replace("\\n", "\n")))
}

fn cmd_texture(cfg: &folio::FolioConfig, args: TextureArgs) -> anyhow::Result<()> {
    let descriptor = match args.screen {
        Some(ScreenChoice::Left) => cfg.hero.screens.left_monitor.clone(),
        Some(ScreenChoice::Right) => cfg.hero.screens.right_monitor.clone(),
        Some(ScreenChoice::Tablet) => cfg.hero.screens.tablet.clone(),
        None => {
            let kind = match args.kind {
                KindChoice::Code => folio::ContentKind::Code,
                KindChoice::Profile => folio::ContentKind::Profile,
                KindChoice::Label => folio::ContentKind::Label,
            };
            args.params
                .into_iter()
                .fold(folio::ContentDescriptor::new(kind), |d, (k, v)| d.with(k, v))
        }
    };

    let mut synth = folio::TextureSynthesizer::from_config(&cfg.texture)?;
    let bitmap = synth
        .synthesize(&descriptor)
        .with_context(|| format!("synthesize {} texture", descriptor.kind.as_str()))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let img = bitmap.to_rgba_image();
    image::save_buffer_with_format(
        &args.out,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} {}x{}, descriptor {})",
        args.out.display(),
        descriptor.kind.as_str(),
        bitmap.width(),
        bitmap.height(),
        descriptor.fingerprint()
    );
    Ok(())
}

fn cmd_scene(cfg: &folio::FolioConfig, args: SceneArgs) -> anyhow::Result<()> {
    let loader = folio::ManifestLoader::new(&args.assets);
    let asset_id = args.asset_id.as_deref().unwrap_or(&cfg.hero.asset_id);

    let synth = folio::TextureSynthesizer::from_config(&cfg.texture)?;
    let mut cache = folio::TextureCache::from_config(synth, &cfg.texture);
    let hero = folio::HeroScene::mount(
        &loader,
        asset_id,
        folio::workspace_layout(),
        cfg.hero.screens.clone(),
        &mut cache,
        folio::InMemoryMaterials::new(),
    )
    .with_context(|| format!("mount hero scene '{asset_id}'"))?;

    let json = serde_json::to_string_pretty(&**hero.scene())
        .with_context(|| "serialize scene description")?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("write scene JSON '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn read_layout(path: &Path) -> anyhow::Result<BTreeMap<String, [f64; 2]>> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| "parse layout JSON")
}

fn cmd_nav(cfg: &folio::FolioConfig, args: NavArgs) -> anyhow::Result<()> {
    let mut viewport = cfg.motion.viewport();
    for (id, [top, bottom]) in read_layout(&args.layout)? {
        let rect = folio::Rect::new(0.0, top, cfg.motion.viewport_width, bottom);
        viewport.set_element(id, rect);
    }

    let mut nav = folio::ScrollNavController::new(&cfg.nav)?;
    viewport.set_scroll(args.scroll);
    nav.on_scroll();
    nav.on_animation_frame(&viewport);
    println!("active: {}", nav.active());

    if let Some(anchor) = &args.click {
        let now = folio::TimeMs(0);
        let outcome = nav.click(anchor, &mut viewport, now)?;
        println!(
            "click: {} -> scroll to {:.0}",
            nav.active(),
            outcome.target_offset
        );
        viewport.advance(now.after(cfg.motion.smooth_scroll_ms));
        nav.on_scroll();
        nav.on_animation_frame(&viewport);
        println!("active: {}", nav.active());
    }
    Ok(())
}

use std::{
    cell::Cell,
    fs::File,
    io::{self, BufWriter, Write as _},
    path::PathBuf,
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use schemio_events::{
    AnimationRegistry, EventBus, ExecCtx, FrameCtx, FunctionArgs, FunctionRef, FunctionRegistry,
    ItemId, SchemeContainer, ServerConfig, ShapeRegistry,
};

#[derive(Parser, Debug)]
#[command(name = "schemio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the configuration loaded from the environment.
    Config,
    /// Print every registered event function with its argument schema.
    Functions,
    /// Run an event function against a scheme and print the resulting scheme.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input scheme JSON.
    #[arg(long)]
    scheme: PathBuf,

    /// Target item id.
    #[arg(long)]
    item: Option<String>,

    /// Function category.
    #[arg(long, default_value = "main")]
    category: String,

    /// Function name.
    #[arg(long)]
    function: String,

    /// Function arguments as a JSON object.
    #[arg(long, default_value = "{}")]
    args: String,

    /// Extra shape schemas (JSON) merged over the built-in shapes.
    #[arg(long)]
    shapes: Option<PathBuf>,

    /// Simulated frame rate used to step animations.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Upper bound on simulated frames.
    #[arg(long, default_value_t = 100_000)]
    max_frames: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Config => cmd_config(),
        Command::Functions => cmd_functions(),
        Command::Run(args) => cmd_run(args),
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    print_json(&ServerConfig::load())
}

fn cmd_functions() -> anyhow::Result<()> {
    print_json(&FunctionRegistry::catalog()?)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");

    let function = FunctionRef::resolve(&args.category, &args.function)?;
    let fn_args = serde_json::from_str(&args.args).context("parse --args JSON")?;
    let fn_args = FunctionArgs::from_value(fn_args)?;

    let mut container = SchemeContainer::from_path(&args.scheme)?;
    let mut shapes = ShapeRegistry::builtin();
    if let Some(path) = &args.shapes {
        let f = File::open(path)
            .with_context(|| format!("open shape schema '{}'", path.display()))?;
        shapes.extend_from_reader(io::BufReader::new(f))?;
    }
    let mut events = EventBus::new();
    let mut animations = AnimationRegistry::new();

    let item = args.item.map(ItemId::new);
    let completed = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&completed);

    let mut ctx = ExecCtx {
        container: &mut container,
        events: &mut events,
        animations: &mut animations,
        shapes: &shapes,
    };
    function.execute(
        item.as_ref(),
        &fn_args,
        &mut ctx,
        Box::new(move || counter.set(counter.get() + 1)),
    );

    let dt_millis = 1000.0 / f64::from(args.fps);
    let mut frames = 0u64;
    while !animations.is_idle() && frames < args.max_frames {
        let mut frame = FrameCtx {
            container: &mut container,
            events: &mut events,
        };
        animations.tick(dt_millis, &mut frame);
        frames += 1;
    }
    if !animations.is_idle() {
        tracing::warn!(
            remaining = animations.len(),
            "frame limit reached, stopping animations"
        );
        let mut frame = FrameCtx {
            container: &mut container,
            events: &mut events,
        };
        animations.stop_all(&mut frame);
    }

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            container.to_writer(&mut w)?;
            writeln!(w)?;
            w.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            container.to_writer(&mut out)?;
            writeln!(out)?;
        }
    }

    eprintln!(
        "{function}: {frames} frame(s), {} change event(s), completed {} time(s)",
        events.total_changes(),
        completed.get()
    );
    Ok(())
}

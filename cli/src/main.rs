use std::io::{self, Write as _};
use std::path::PathBuf;

use algoscope_core::{
    generate, AlgorithmKind, Dataset, NodeId, PlaybackPhase, Session, SessionConfig, TickScheduler,
    TokioScheduler, TraceParams, Variant,
};
use algoscope_visualization::{map_step_to_draw_commands, JsonRenderer, Renderer, TextRenderer};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "algoscope", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available algorithms.
    List,
    /// Generate a trace and print it.
    Trace(TraceArgs),
    /// Animate a trace in the terminal.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Algorithm variant (bubble, quick, merge, insertion, selection, binary, linear, bfs, dfs).
    #[arg(long)]
    algorithm: Variant,

    /// Search target (searching only).
    #[arg(long)]
    target: Option<i64>,

    /// Start node (graph only).
    #[arg(long)]
    start: Option<usize>,

    /// Treat edge pairs as directed (graph only).
    #[arg(long, default_value_t = false)]
    directed: bool,
}

impl InputArgs {
    fn kind(&self) -> AlgorithmKind {
        self.algorithm.kind()
    }

    fn params(&self) -> TraceParams {
        TraceParams {
            target: self.target,
            start: self.start.map(NodeId),
        }
    }

    fn dataset(&self, text: &str) -> Dataset {
        match self.kind() {
            AlgorithmKind::Graph => Dataset::parse_edges(text, self.directed),
            kind => Dataset::parse(kind, text),
        }
    }
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    input_args: InputArgs,

    /// Dataset text: comma separated integers, or edge pairs like `1-2,2-3`.
    #[arg(long)]
    input: String,

    /// Print the trace as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    input_args: InputArgs,

    /// Dataset text; a random dataset is generated when omitted.
    #[arg(long, conflicts_with = "random")]
    input: Option<String>,

    /// Generate a random dataset.
    #[arg(long, default_value_t = false)]
    random: bool,

    /// Playback speed, 1 (slowest) to 10 (fastest).
    #[arg(long)]
    speed: Option<u8>,

    /// Seed for the random dataset.
    #[arg(long)]
    seed: Option<u64>,

    /// Session configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit frames as JSON lines instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Read playback commands from stdin and keep running after completion.
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Trace(args) => cmd_trace(args),
        Command::Play(args) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("start tokio runtime")?;
            runtime.block_on(cmd_play(args))
        }
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for kind in AlgorithmKind::ALL {
        writeln!(out, "{}", kind)?;
        for variant in kind.variants() {
            let info = variant.info();
            writeln!(out, "  {:<10} {:<22} {}", variant.key(), info.title, info.complexity)?;
        }
    }
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let kind = args.input_args.kind();
    let dataset = args.input_args.dataset(&args.input);
    let trace = generate(kind, args.input_args.algorithm, &dataset, &args.input_args.params());
    info!("generated {} steps", trace.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", trace.to_json().context("encode trace")?)?;
        return Ok(());
    }

    for (index, step) in trace.iter().enumerate() {
        let message = step.message.as_deref().unwrap_or("");
        writeln!(out, "{:>4}  {}", index, message)?;
    }
    Ok(())
}

async fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.default_speed = speed;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.directed |= args.input_args.directed;

    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut session = Session::new(config, scheduler);
    session.select(args.input_args.kind(), args.input_args.algorithm);
    session.set_params(args.input_args.params());

    match &args.input {
        Some(text) if !args.random => session.load_input(text),
        _ => {
            let mut rng = match session.config().seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            session.randomize(&mut rng);
        }
    }

    let stdout = io::stdout();
    let mut renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer::new(stdout.lock()))
    } else {
        Box::new(TextRenderer::new(stdout.lock()))
    };
    render(&session, renderer.as_mut())?;

    session.play();
    let mut commands = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = args.interactive;

    loop {
        if !args.interactive && session.phase() != PlaybackPhase::Running {
            break;
        }

        tokio::select! {
            Some(id) = ticks.recv() => {
                if session.on_tick(id) {
                    render(&session, renderer.as_mut())?;
                }
            }
            line = commands.next_line(), if stdin_open => {
                match line.context("read command")? {
                    Some(line) => {
                        if !apply_command(&mut session, line.trim()) {
                            break;
                        }
                        render(&session, renderer.as_mut())?;
                    }
                    None => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }

        if args.interactive && !stdin_open && session.phase() != PlaybackPhase::Running {
            break;
        }
    }

    debug!(
        "playback finished at step {} of {}",
        session.current_index(),
        session.trace_len()
    );
    Ok(())
}

/// Applies one interactive command; returns `false` to quit
fn apply_command<S: TickScheduler>(session: &mut Session<S>, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("p") | Some("play") => session.play(),
        Some("pause") => session.pause(),
        Some("n") | Some("next") => session.step_forward(),
        Some("b") | Some("back") => session.step_back(),
        Some("r") | Some("reset") => session.reset(),
        Some("s") | Some("speed") => {
            if let Some(speed) = parts.next().and_then(|s| s.parse().ok()) {
                session.set_speed(speed);
            }
        }
        Some("q") | Some("quit") => return false,
        _ => {}
    }
    true
}

fn render<S: TickScheduler>(session: &Session<S>, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
    let commands = map_step_to_draw_commands(
        session.kind(),
        session.dataset(),
        session.current_step(),
        &session.config().canvas,
    );
    renderer.render(&commands).context("render frame")?;
    Ok(())
}

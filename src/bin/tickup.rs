use anyhow::Context as _;
use clap::Parser;
use tickup::host::{ManualScheduler, ManualVisibility, MemoryText};
use tickup::{Config, DecimalMode, Orchestrator, TargetId};

/// Simulates the counting-up animation offline: every given text becomes a
/// target, all targets enter the viewport at t=0, and frames are pumped on a
/// fixed-fps timeline until the animation settles.
#[derive(Parser, Debug)]
#[command(name = "tickup", version)]
struct Cli {
    /// Decorated source text of one target (repeatable).
    #[arg(long = "text", required = true)]
    texts: Vec<String>,

    /// Animation duration in milliseconds.
    #[arg(long, default_value_t = 2_000)]
    duration: u64,

    /// Easing curve name (unknown names fall back to easeOutExpo).
    #[arg(long, default_value = "easeOutExpo")]
    easing: String,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Decimal places: an integer, or "auto" to detect from the source text.
    #[arg(long, default_value = "auto")]
    decimals: String,

    /// Thousands-grouping string.
    #[arg(long, default_value = ",")]
    separator: String,

    #[arg(long, default_value = "")]
    prefix: String,

    #[arg(long, default_value = "")]
    suffix: String,

    /// Print every intermediate frame instead of only the final values.
    #[arg(long)]
    show_frames: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let decimals = match cli.decimals.as_str() {
        "auto" => DecimalMode::Auto,
        n => DecimalMode::Fixed(
            n.parse()
                .with_context(|| format!("--decimals must be an integer or \"auto\", got '{n}'"))?,
        ),
    };
    let config = Config {
        duration_ms: cli.duration,
        easing: cli.easing,
        decimals,
        separator: cli.separator,
        prefix: cli.prefix,
        suffix: cli.suffix,
        ..Config::default()
    };

    let ids: Vec<TargetId> = (0..cli.texts.len() as u64).map(TargetId).collect();
    let surface = MemoryText::with_texts(ids.iter().copied().zip(cli.texts.iter().cloned()));

    let mut orch = Orchestrator::new(
        ids.clone(),
        config,
        ManualVisibility::default(),
        ManualScheduler::default(),
        surface,
    )?;

    for &id in &ids {
        orch.handle_visibility(id, true);
    }

    let step_ms = 1_000.0 / f64::from(cli.fps);
    let mut now_ms = 0.0;
    while !orch.scheduler().is_idle() {
        for (id, token) in orch.scheduler_mut().take_due() {
            orch.handle_frame(id, token, now_ms);
        }
        if cli.show_frames {
            print_row(&orch, &ids, now_ms);
        }
        now_ms += step_ms;
    }

    println!("settled after {:.0} ms:", (now_ms - step_ms).max(0.0));
    for &id in &ids {
        let text = orch.surface().read_text(id).unwrap_or_default();
        println!("  target {}: {text}", id.0);
    }
    Ok(())
}

fn print_row(
    orch: &Orchestrator<ManualVisibility, ManualScheduler, MemoryText>,
    ids: &[TargetId],
    now_ms: f64,
) {
    let row: Vec<String> = ids
        .iter()
        .map(|&id| orch.surface().read_text(id).unwrap_or_default())
        .collect();
    println!("{now_ms:>8.1} ms  {}", row.join("  |  "));
}

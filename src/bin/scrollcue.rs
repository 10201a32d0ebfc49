use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollcue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a recorded scroll trace against a page and print every frame as JSON.
    Frames(FramesArgs),
    /// Send one contact message through an HTTP mail relay.
    Contact(ContactArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Page description JSON.
    #[arg(long)]
    page: PathBuf,

    /// Scroll trace JSON.
    #[arg(long)]
    trace: PathBuf,

    /// Frames per second to sample the trace at.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ContactArgs {
    /// Relay URL receiving the JSON POST.
    #[arg(long)]
    endpoint: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    subject: String,

    #[arg(long)]
    message: String,

    /// Request timeout in seconds.
    #[arg(long = "timeout", default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Contact(args) => cmd_contact(args),
    }
}

fn read_to_string(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let page_spec = scrollcue::PageSpec::from_json_str(&read_to_string(&args.page, "page")?)
        .with_context(|| format!("load page '{}'", args.page.display()))?;
    let trace = scrollcue::ScrollTrace::from_json_str(&read_to_string(&args.trace, "trace")?)
        .with_context(|| format!("load trace '{}'", args.trace.display()))?;
    let fps = scrollcue::Fps::new(args.fps, 1)?;

    let mut page = scrollcue::Page::from_spec(&page_spec, trace.start_time())?;
    let frames = trace.replay(&mut page, fps)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &frames).context("write frames JSON")?;
            w.flush()?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &frames).context("write frames JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_contact(args: ContactArgs) -> anyhow::Result<()> {
    let mut config = scrollcue::RelayConfig::new(args.endpoint);
    config.timeout_secs = args.timeout_secs;
    let relay = scrollcue::HttpMailRelay::new(&config)?;

    let mut form = scrollcue::ContactForm::new();
    form.set_field(scrollcue::Field::Name, args.name);
    form.set_field(scrollcue::Field::Email, args.email);
    form.set_field(scrollcue::Field::Subject, args.subject);
    form.set_field(scrollcue::Field::Message, args.message);

    match form.submit(&relay, 0.0)? {
        scrollcue::SubmitOutcome::Sent { .. } => {
            println!("message sent");
            Ok(())
        }
        scrollcue::SubmitOutcome::Rejected { status } => {
            anyhow::bail!("{} (relay status {status})", scrollcue::REJECTED_NOTICE)
        }
        scrollcue::SubmitOutcome::TransportFailed => {
            anyhow::bail!("{}", scrollcue::TRANSPORT_NOTICE)
        }
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gittag::cli::{run_tag_workflow, TagRequest};
use gittag::config;
use gittag::domain::Segment;
use gittag::git::Git2Repository;
use gittag::ui::{self, TerminalInteraction};

#[derive(clap::Parser)]
#[command(
    name = "gittag",
    version,
    about = "Semantic versioning tagging tool"
)]
struct Args {
    #[arg(short, long, value_enum, help = "The segment to increment")]
    segment: Option<Segment>,

    #[arg(long, value_name = "CHANNEL", help = "The prerelease channel to increment")]
    pre: Option<String>,

    #[arg(long, help = "The git remote [default: origin]")]
    remote: Option<String>,

    #[arg(long, default_value = ".", help = "The git repository")]
    repo: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Enable debug mode")]
    debug: bool,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,

    #[arg(long, help = "Preview the next tag without creating it")]
    dry_run: bool,

    #[arg(help = "The tag to create")]
    tag: Option<String>,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let config = config::load_config(args.config.as_deref())?;
    let remote = args.remote.unwrap_or(config.remote);

    let repo = Git2Repository::open(&args.repo, remote.as_str())
        .with_context(|| format!("failed to open repository at '{}'", args.repo))?;
    let interaction = TerminalInteraction::new(config.display);

    let request = TagRequest {
        segment: args.segment,
        channel: args.pre,
        tag: args.tag,
        debug: args.debug,
        include_stale_channels: config.channels.include_stale,
        assume_yes: args.yes,
        dry_run: args.dry_run,
    };

    match run_tag_workflow(&repo, &interaction, &request) {
        Ok(result) if !result.created && !request.dry_run => {
            println!("Tag {} not created.", result.tag);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) if e.is_cancellation() => {
            println!("Operation cancelled by user.");
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

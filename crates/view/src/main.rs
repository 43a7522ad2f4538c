use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use micro_inspect::docs::DocsCatalogue;
use micro_inspect::present::Expansion;
use micro_inspect_view::{render_exchange, Exchange, ViewError, ViewOptions};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

/// Show the headers of a captured HTTP exchange.
#[derive(Parser, Debug)]
#[command(name = "header-view", version, about)]
struct Args {
    /// Exchange JSON file: { "httpVersion": 2, "url": "...", "headers": [[name, value], ...] }
    exchange: PathBuf,

    /// Show the descriptions reserved for paid accounts
    #[arg(long)]
    paid: bool,

    /// Expand every header, showing full values and descriptions
    #[arg(long)]
    expand_all: bool,

    /// Open the pseudo-header section
    #[arg(long)]
    show_pseudo: bool,

    /// Extra header docs, merged over the built-in catalogue
    #[arg(long, value_name = "FILE")]
    docs: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(cause = %e, path = %args.exchange.display(), "failed to render exchange");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, ViewError> {
    let exchange = Exchange::from_path(&args.exchange)?;

    let expansion = if args.expand_all {
        Expansion::expand_all()
    } else {
        Expansion::collapsed().with_pseudo_headers_open(args.show_pseudo)
    };
    let mut options = ViewOptions::new().paid_user(args.paid).expansion(expansion);

    if let Some(path) = &args.docs {
        options = options.extra_docs(DocsCatalogue::from_json_file(path)?);
    }

    render_exchange(&exchange, options)
}

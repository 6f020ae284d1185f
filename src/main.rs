use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use exam_runner::{build_app, plain, run_tui, ExamConfig, Exit, ParseMode, ScrambleChoice, StdConsole};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Take multiple-choice exams in the terminal", long_about = None)]
struct Args {
    /// Exam file to take; skips the picker
    exam: Option<PathBuf>,

    /// Directory to look for .exam files in
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Shuffle the questions without asking
    #[arg(long, conflicts_with = "no_scramble")]
    scramble: bool,

    /// Keep file order without asking
    #[arg(long)]
    no_scramble: bool,

    /// Seed for a reproducible shuffle (implies --scramble)
    #[arg(long, conflicts_with = "no_scramble")]
    seed: Option<u64>,

    /// Reject letter answers that name no option
    #[arg(long)]
    strict: bool,

    /// Use a plain line console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> ExamConfig {
        let scramble = if self.no_scramble {
            ScrambleChoice::Never
        } else if self.scramble || self.seed.is_some() {
            ScrambleChoice::Always { seed: self.seed }
        } else {
            ScrambleChoice::Ask
        };

        ExamConfig {
            exam: self.exam.clone(),
            dir: self.dir.clone(),
            parse_mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            scramble,
        }
    }
}

fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("exam_runner=warn"));

    match (&args.log_file, args.plain) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        // The full-screen UI owns the terminal; without a log file stay quiet.
        (None, false) => {}
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_tracing(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
    let config = args.config();

    if args.plain {
        let mut console = StdConsole::stdio();
        if let Err(e) = plain::run_plain(&config, &mut console) {
            eprintln!("Error: {}", e);
            println!("Exiting...");
            process::exit(1);
        }
        return;
    }

    let app = match build_app(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match run_tui(app) {
        Ok(Exit::Quit) => println!("Goodbye!"),
        Ok(Exit::Failed(message)) => {
            eprintln!("{}", message);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error running exam: {}", e);
            process::exit(1);
        }
    }
}

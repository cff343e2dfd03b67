use anyhow::Result;
use clap::{ArgAction, Parser};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use env_logger::Env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wc_core::core::types::Mode;
use wc_core::input::Input;
use wc_core::render::write_usage;
use wc_core::{Config, Engine};

#[derive(Parser, Debug)]
#[command(name = "words", disable_help_flag = true, args_override_self = true)]
struct Args {
    /// Count the total amount of words (default)
    #[arg(short, long, overrides_with = "frequency")]
    count: bool,

    /// Count the frequency of each word
    #[arg(short, long, overrides_with = "count")]
    frequency: bool,

    /// Display the help message
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,

    /// Input file; standard input when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        let mode = if self.frequency { Mode::Frequency } else { Mode::Count };
        Config { mode, input: Input::from_arg(self.file) }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if args.help {
        write_usage(&mut stdout)?;
        return Ok(());
    }

    let engine = Engine::new(args.into_config());
    engine.run(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    let mut stderr = io::stderr();
    let label = if stderr.is_tty() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    let _ = writeln!(stderr, "{} {}", label, err);
}

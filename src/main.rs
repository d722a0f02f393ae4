use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use twitch_avail::check::{Client, check_name};
use twitch_avail::names;
use twitch_avail::report::Report;
use twitch_avail::style::Palette;

#[derive(Parser)]
#[command(
    name = "twitch-avail",
    version,
    about = "Check whether usernames are still available on Twitch",
    after_help = "Each name costs one HEAD request against the Twitch passport \
                  endpoint. A 403 answer means the endpoint is rate limiting; the \
                  probe is repeated until a definitive status arrives, which can \
                  take a while under sustained throttling.\n\n\
                  A relative FILE is looked up next to the twitch-avail binary, \
                  not in the current directory."
)]
struct Cli {
    /// Check usernames listed in FILE, one per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "usernames.txt"
    )]
    list: Option<PathBuf>,

    /// Generate and check every candidate name of the given length
    #[arg(
        short,
        long,
        value_name = "LENGTH",
        num_args = 0..=1,
        default_missing_value = "4",
        value_parser = clap::value_parser!(u8).range(1..=36),
        conflicts_with = "list"
    )]
    auto: Option<u8>,

    /// With --auto, also generate names that repeat a character (36^L names)
    #[arg(long, requires = "auto")]
    repeats: bool,

    /// Print the report as JSON instead of colored text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    install_interrupt_handler();

    let cli = Cli::parse();
    let palette = Palette::new();

    let candidates: Box<dyn Iterator<Item = String>> = if let Some(file) = cli.list.as_deref() {
        banner(&palette, "batch mode!", cli.json);
        let path = names::resolve_list_path(file);
        match names::read_list(&path) {
            Ok(list) => Box::new(list.into_iter()),
            Err(e) => {
                eprintln!("error: cannot read {}: {e}", path.display());
                return ExitCode::from(1);
            }
        }
    } else if let Some(length) = cli.auto {
        banner(&palette, "auto mode!", cli.json);
        let length = usize::from(length);
        if cli.repeats {
            Box::new(names::cartesian_power(length))
        } else {
            Box::new(names::permutations(length))
        }
    } else {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        return ExitCode::from(1);
    };

    let client = Client::new();
    let mut report = Report::new();

    for username in candidates {
        let result = match check_name(&client, &username) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(1);
            }
        };
        if !cli.json {
            if result.is_available() {
                let line = format!("{username} is available!");
                println!("{}", palette.ok.apply_to(line));
            } else {
                let line = format!("{username} is not available.");
                println!("{}", palette.err.apply_to(line));
            }
        }
        report.record(result);
    }

    if cli.json {
        return print_json(&report);
    }

    println!();
    let summary = format!(
        "Check complete, {}/{} names are available.",
        report.available_count(),
        report.total()
    );
    println!("{}", palette.info.apply_to(summary));
    for name in report.available() {
        println!("{}", palette.ok.apply_to(name));
    }

    ExitCode::SUCCESS
}

fn banner(palette: &Palette, mode: &str, json: bool) {
    if json {
        return;
    }
    println!(
        "{}{}",
        palette.info.apply_to("Running in "),
        palette.header.apply_to(mode)
    );
}

fn print_json(report: &Report) -> ExitCode {
    let payload = serde_json::json!({
        "total": report.total(),
        "available_count": report.available_count(),
        "available": report.available().collect::<Vec<_>>(),
        "results": report.results(),
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: serializing report: {e}");
            ExitCode::from(1)
        }
    }
}

/// Exit with status 1 on Ctrl-C, dropping whatever was accumulated.
#[cfg(unix)]
fn install_interrupt_handler() {
    extern "C" fn on_interrupt(_signum: libc::c_int) {
        // only async-signal-safe calls are allowed here
        unsafe { libc::_exit(1) }
    }
    let handler = on_interrupt as extern "C" fn(libc::c_int);
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
fn install_interrupt_handler() {}

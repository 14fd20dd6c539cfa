mod report;

use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;
use typoguess::{Guesser, Options, supported_locales};

const LOG_ENV: &str = "TYPOGUESS_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(Command::Guess(config)) => config,
        Ok(Command::ListLocales) => {
            for (code, name) in supported_locales() {
                println!("{code}  {name}");
            }
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let guesser = Guesser::new(&config.options);
    if config.trace {
        let report = guesser.guess_verbose(&config.input);
        report::print_report(&report, config.color);
    } else {
        println!("{}", guesser.guess(&config.input));
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

enum Command {
    Guess(CliConfig),
    ListLocales,
}

struct CliConfig {
    input: String,
    options: Options,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<Command, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("typoguess {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--list-locales" => return Ok(Command::ListLocales),
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "--markup" | "-m" => options.preserve_markup = true,
            "--locale" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                options.locale = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--locale=") => {
                options.locale = Some(arg.trim_start_matches("--locale=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(Command::Guess(CliConfig { input, options, trace, color }))
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    // Keep inner newlines, drop the one the shell or editor appended.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "typoguess {version}

Guess typographic punctuation for ASCII text.

Usage:
  typoguess [OPTIONS] [--] <input...>
  typoguess [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args
                             or stdin when no args are provided.
  -l, --locale <code>        ISO 639-1 language code for quote styles.
  -m, --markup               Keep '''bold''', ''italic'', [link|label] targets
                             and URLs untouched.
  --trace                    Print a per-rule report instead of the plain result.
  --list-locales             List languages with a locale profile.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}               Log filter (tracing EnvFilter syntax), e.g. debug.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}

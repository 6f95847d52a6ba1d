//! Render a grip JSON file the way the debugger UI would show it.
//!
//! Usage: `rep_print [--mode=tiny|short|long] [--json|--markup] <file|->`

use anyhow::{Context as _, Result, anyhow};
use env_logger::{Builder, Env};
use log::{error, info};
use reps::{Grip, Hooks, Mode, Renderer, RepRegistry, RepsConfig};
use std::env;
use std::fs;
use std::io::{self, Read as _, Write as _};
use std::process::exit;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Output {
    Text,
    Json,
    Markup,
}

struct Args {
    mode: Mode,
    output: Output,
    input: String,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args();
    let _prog_name: Option<String> = args.next();
    let mut mode = Mode::Unset;
    let mut output = Output::Text;
    let mut input = None;
    for arg in args {
        if let Some(rest) = arg.strip_prefix("--mode=") {
            mode = rest.parse()?;
        } else if arg == "--json" {
            output = Output::Json;
        } else if arg == "--markup" {
            output = Output::Markup;
        } else if input.is_none() {
            input = Some(arg);
        } else {
            return Err(anyhow!("unexpected argument: {arg}"));
        }
    }
    let input = input.ok_or_else(|| anyhow!("missing input file (use - for stdin)"))?;
    Ok(Args {
        mode,
        output,
        input,
    })
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading grip from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading grip from {path}"))
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let grip = Grip::from_json_str(&read_input(&args.input)?).context("parsing grip JSON")?;
    let registry = RepRegistry::with_default_reps();
    let renderer = Renderer::new(&registry, RepsConfig::from_env());
    info!("rendering {} in {} mode", grip.type_label(), args.mode);
    let tree = renderer.render(&grip, args.mode, &Hooks::new());

    let rendered = match args.output {
        Output::Text => tree.text(),
        Output::Json => tree.to_json_string(),
        Output::Markup => format!("{tree:?}"),
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .try_init();
    if let Err(err) = run() {
        error!("error: {err:#}");
        exit(1);
    }
}

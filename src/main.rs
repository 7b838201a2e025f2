// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::config::{Direction, Position};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toast - toast notification playground

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --config-dir DIR      Directory containing settings.toml
  --duration-ms N       Countdown length for pushed toasts
  --stacked             Newest on top, oldest counts down first
  --queue               Newest at the bottom and counting down
  --no-turn             In queue mode, count every toast down at once
  --direction rtl|ltr   Card reading direction
  --position POS        top, bottom, left, right, top-left, top-right,
                        bottom-left or bottom-right
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let stacked = if args.contains("--stacked") {
        Some(true)
    } else if args.contains("--queue") {
        Some(false)
    } else {
        None
    };
    let turn = args.contains("--no-turn").then_some(false);

    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        stacked,
        turn,
        direction: args.opt_value_from_fn("--direction", str::parse::<Direction>)?,
        position: args.opt_value_from_fn("--position", str::parse::<Position>)?,
    })
}

// SPDX-License-Identifier: MPL-2.0
use iced_sheet::app::{self, Flags};
use iced_sheet::config::ResizeMode;
use iced_sheet::domain::sheet::Platform;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
sheet-demo

USAGE:
  sheet-demo [OPTIONS]

OPTIONS:
  --resize <incremental|decremental>   Background resize type
  --platform <ios|android|web|desktop> Platform policy to emulate
  --config-dir <DIR>                   Directory holding sheet.toml
  --scrollable                         Use scrollable sheet content
  -h, --help                           Print this help
";

fn parse_resize(value: &str) -> Result<ResizeMode, String> {
    match value {
        "incremental" => Ok(ResizeMode::Incremental),
        "decremental" => Ok(ResizeMode::Decremental),
        other => Err(format!("unknown resize type '{other}'")),
    }
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    match value {
        "ios" => Ok(Platform::Ios),
        "android" => Ok(Platform::Android),
        "web" => Ok(Platform::Web),
        "desktop" => Ok(Platform::Desktop),
        other => Err(format!("unknown platform '{other}'")),
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        resize: args.opt_value_from_fn("--resize", parse_resize)?,
        platform: args.opt_value_from_fn("--platform", parse_platform)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        scrollable: args.contains("--scrollable"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use iced_toaster::ui::notifications::Position;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toaster - toast notification demo

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --position <POS>     Default toast position: top-left, top-center, top-right,
                       bottom-left, bottom-center or bottom-right
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  ICED_TOASTER_CONFIG_DIR   Config directory when --config-dir is not given
  RUST_LOG                  Log filter (default: iced_toaster=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_toaster=info")),
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
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        position: args.opt_value_from_str::<_, Position>("--position")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

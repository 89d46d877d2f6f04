// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
iced_folio - portfolio gallery

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --category <SLUG>      Category to open: branding, logo-design,
                         social-media, poster-flyers
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  RUST_LOG                          Log filter (default: info)
  ICED_FOLIO_CONFIG_DIR             Config directory
  ICED_FOLIO_APPWRITE_ENDPOINT      Appwrite API root
  ICED_FOLIO_APPWRITE_PROJECT       Appwrite project id
  ICED_FOLIO_APPWRITE_DATABASE      Appwrite database id
  ICED_FOLIO_APPWRITE_COLLECTION    Appwrite collection id
";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        category: args.opt_value_from_str("--category")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_folio");

    app::run(flags)
}

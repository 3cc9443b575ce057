mod argsets;
mod command;

use anyhow::{anyhow, Result};
use betasdk::constants::{defaults, envvars};
use betasdk::helpers::load_dotenv;
use env_logger::Env;

const CMD_DECODE: &str = "decode";
const CMD_SITE_PAGES: &str = "site-pages";

fn main() -> Result<()> {
    let dotenv_path = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_DECODE) => command::decode(argsets::DecodeArgs {
            path: args.free_from_str()?,
        }),
        Some(CMD_SITE_PAGES) => {
            let site_id = args.free_from_str()?;
            let page_ids = args
                .finish()
                .into_iter()
                .map(|id| {
                    id.into_string()
                        .map_err(|id| anyhow!("Page ID is not valid UTF-8: {id:?}"))
                })
                .collect::<Result<_>>()?;
            command::site_pages(argsets::SitePagesArgs { site_id, page_ids })
        }
        _ => Err(anyhow!("Subcommand must be one of 'decode', 'site-pages'")),
    }
}

use anyhow::{Context, anyhow};
use clap::Parser;
use memorama_core::{Coord, GameConfig};
use wasm_bindgen::prelude::*;

mod game;
mod scheduler;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial board side length
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,
}

/// Parses `#--size=6&-vv` style location hashes as if they were a command line.
fn parse_args() -> anyhow::Result<Args> {
    use gloo::utils::window;

    let location_hash = window()
        .location()
        .hash()
        .map_err(|err| anyhow!("could not read location hash: {:?}", err))?;

    Args::try_parse_from(location_hash.split(['#', '&'])).context("could not parse args")
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::document;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let (args, parse_error) = match parse_args() {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    let log_level = match parse_error {
        Some(_) => Some(log::Level::Warn),
        None => args.verbose.log_level(),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("{:#}, using defaults", err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        size: args.size,
        seed: args.seed,
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

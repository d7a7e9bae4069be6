use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use wasm_bindgen::prelude::*;
use yew::AttrValue;

mod app;
mod decoration;
mod game;
mod player_form;
mod scoreboard;
mod utils;

pub use utils::LocalStore;

/// Service answering `GET` with `{"url": "<image>"}`.
pub const DEFAULT_IMAGE_API: &str = "https://api.waifu.pics/sfw/waifu";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to fetch cell decorations from
    #[arg(long, default_value = DEFAULT_IMAGE_API)]
    image_api: String,
}

impl Args {
    /// Options come from the location hash, e.g. `#-vv&--seed=42`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, bad_args) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = bad_args {
        log::error!("ignoring options in location hash: {}", err);
    }

    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}", seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = app::AppProps {
        seed,
        image_api: AttrValue::from(args.image_api),
    };

    log::debug!("App started");
    yew::Renderer::<app::AppView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.image_api, DEFAULT_IMAGE_API);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Warn));
    }

    #[test]
    fn hash_options_are_split_on_ampersand() {
        let args = Args::from_hash("#-vv&--seed=42&--image-api=http://localhost/img").unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.image_api, "http://localhost/img");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(Args::from_hash("#--difficulty=expert").is_err());
    }
}

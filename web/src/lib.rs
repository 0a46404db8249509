use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod provider;
mod settings;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Parses `#-v&--length=6` style location hashes.
    ///
    /// A hash that is not an argument list (a plain anchor, a bad value) falls
    /// back to the defaults and hands the parse error back for logging.
    fn from_location_hash(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::try_parse_from(hash.split(['#', '&'])) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
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

    let (args, parse_error) = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_arguments_are_parsed() {
        let (args, err) = Args::from_location_hash("#-vv&--length=6");

        assert!(err.is_none());
        assert_eq!(args.game.length(), Some(6));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let (args, err) = Args::from_location_hash("");

        assert!(err.is_none());
        assert_eq!(args.game.length(), None);
    }

    #[test]
    fn unparsable_hash_falls_back_to_defaults() {
        for hash in ["#top", "#--length=9", "#--no-such-flag"] {
            let (args, err) = Args::from_location_hash(hash);

            assert!(err.is_some(), "{hash} should not parse");
            assert_eq!(args.game.length(), None);
            assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
        }
    }
}

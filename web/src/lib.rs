use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod theme;
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

/// Arguments come from the location hash, e.g. `#-vvv&--seed=42`.
fn parse_hash_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

/// Element the game is mounted on.
const ROOT_ID: &str = "game";

fn js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let hash = gloo::utils::window().location().hash()?;
    let args = parse_hash_args(&hash).map_err(js_error)?;
    if let Some(level) = args.verbose.log_level() {
        console_log::init_with_level(level).map_err(js_error)?;
    }

    theme::Theme::init();

    let root = gloo::utils::document()
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| js_error(format!("no #{} element to mount on", ROOT_ID)))?;
    log::debug!("mounting on #{}", ROOT_ID);
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
    Ok(())
}

use clap::{Parser, ValueEnum};
use splitflap_core as flap;
use wasm_bindgen::prelude::*;

mod board;
mod fullscreen;
mod schedule;
mod status;
mod theme;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Align {
    Left,
    Center,
}

impl From<Align> for flap::Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => flap::Alignment::Left,
            Align::Center => flap::Alignment::Center,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Where the board status is fetched from
    #[arg(long, default_value = flap::STATUS_PATH)]
    status_url: String,

    /// Milliseconds between status polls
    #[arg(long, default_value_t = flap::POLL_INTERVAL_MS)]
    poll_ms: u32,

    /// Duration of one flip, unless the status sets a speed
    #[arg(long, default_value_t = flap::FlipTiming::DEFAULT_FLIP_MS)]
    flip_ms: u32,

    /// Pause between two consecutive flips of a cell
    #[arg(long, default_value_t = flap::FlipTiming::DEFAULT_STEP_DELAY_MS)]
    step_delay_ms: u32,

    /// Placement of messages shorter than the board
    #[arg(long, value_enum, default_value_t = Align::Left)]
    align: Align,
}

impl Args {
    /// Parses arguments out of a location hash like `#-v&--poll-ms=500`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash
            .trim_start_matches('#')
            .split('&')
            .filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("splitflap").chain(args))
    }

    fn board_config(&self) -> board::BoardConfig {
        board::BoardConfig {
            status_url: self.status_url.clone(),
            poll_ms: self.poll_ms,
            timing: flap::FlipTiming::new(self.flip_ms, self.step_delay_ms),
            alignment: self.align.into(),
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

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("board")
        .expect("Could not find id=\"board\" element");

    log::info!("Split-flap board started");
    yew::Renderer::<board::BoardView>::with_root_and_props(
        root,
        board::BoardProps {
            config: args.board_config(),
        },
    )
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();
        let config = args.board_config();

        assert_eq!(config.status_url, "/api/status");
        assert_eq!(config.poll_ms, 2000);
        assert_eq!(config.timing, flap::FlipTiming::new(300, 30));
        assert_eq!(config.alignment, flap::Alignment::Left);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_arguments_override_defaults() {
        let args =
            Args::from_hash("#-vv&--poll-ms=500&--flip-ms=200&--align=center&--status-url=/s")
                .unwrap();
        let config = args.board_config();

        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(config.poll_ms, 500);
        assert_eq!(config.timing.flip_ms, 200);
        assert_eq!(config.timing.step_delay_ms, 30);
        assert_eq!(config.alignment, flap::Alignment::Center);
        assert_eq!(config.status_url, "/s");
    }

    #[test]
    fn quiet_disables_logging() {
        let args = Args::from_hash("#-q&").unwrap();

        assert_eq!(args.verbose.log_level(), None);
    }

    #[test]
    fn unknown_hash_argument_is_rejected() {
        assert!(Args::from_hash("#--speed=9").is_err());
        assert!(Args::from_hash("#--poll-ms=soon").is_err());
    }
}

use crate::fullscreen;
use crate::schedule::TimeoutScheduler;
use crate::status::{self, FetchError};
use crate::theme;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use splitflap_core as flap;
use yew::prelude::*;

/// Runtime settings of the board, parsed from the page location.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardConfig {
    pub status_url: String,
    pub poll_ms: u32,
    pub timing: flap::FlipTiming,
    pub alignment: flap::Alignment,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub config: BoardConfig,
}

pub(crate) enum Msg {
    Poll,
    Snapshot(Result<flap::BoardSnapshot, FetchError>),
    Wake(flap::Wake),
}

#[derive(Properties, Clone, PartialEq)]
struct FlapProps {
    faces: flap::Faces,
}

#[function_component(FlapView)]
fn flap_view(props: &FlapProps) -> Html {
    let flap::Faces {
        top,
        bottom,
        next_top,
        next_bottom,
        flipping,
    } = props.faces;

    html! {
        <div class={classes!("split-flap", flipping.then_some("flipping"))}>
            <div class="top"><span>{top.to_string()}</span></div>
            <div class="bottom"><span>{bottom.to_string()}</span></div>
            <div class="next-top"><span>{next_top.to_string()}</span></div>
            <div class="next-bottom"><span>{next_bottom.to_string()}</span></div>
        </div>
    }
}

pub(crate) struct BoardView {
    board: flap::Board,
    scheduler: TimeoutScheduler,
    _poll_interval: Interval,
    _click_listener: EventListener,
}

impl BoardView {
    fn create_poller(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(ctx.props().config.poll_ms, move || {
            link.send_message(Msg::Poll)
        })
    }

    fn apply_snapshot(&mut self, snapshot: &flap::BoardSnapshot) -> bool {
        match self.board.sync(snapshot, &mut self.scheduler) {
            Ok(outcome) => {
                if let Some(swap) = &outcome.theme {
                    theme::apply(swap);
                }
                outcome.has_update()
            }
            Err(err) => {
                log::error!("ignoring status snapshot: {}", err);
                false
            }
        }
    }

    fn grid_style(&self) -> String {
        let cols = self.board.layout().map_or(0, |layout| layout.cols());
        format!(
            "grid-template-columns: repeat({}, 1fr); --flip-duration: {}ms;",
            cols,
            self.board.timing().flip_ms
        )
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        // the first fetch doubles as initialization, the grid starts empty
        ctx.link().send_message(Msg::Poll);
        Self {
            board: flap::Board::new(config.timing, config.alignment),
            scheduler: TimeoutScheduler::new(ctx.link().callback(Msg::Wake)),
            _poll_interval: BoardView::create_poller(ctx),
            _click_listener: fullscreen::install(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Poll => {
                let url = ctx.props().config.status_url.clone();
                log::trace!("polling {}", url);
                ctx.link()
                    .send_future(async move { Snapshot(status::fetch_snapshot(&url).await) });
                false
            }
            Snapshot(Ok(snapshot)) => self.apply_snapshot(&snapshot),
            Snapshot(Err(err)) => {
                // the board keeps what it shows, the next poll tries again
                log::error!("{}", err);
                false
            }
            Wake(wake) => {
                self.scheduler.fired(wake);
                self.board.wake(wake, &mut self.scheduler)
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div id="board-container" class="board" style={self.grid_style()}>
                {
                    for self.board.cells().iter().map(|cell| html! {
                        <FlapView faces={cell.faces()}/>
                    })
                }
            </div>
        }
    }
}

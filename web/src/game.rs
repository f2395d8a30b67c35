use crate::settings::SettingsView;
use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use gloo::timers::callback::Interval;
use serde::{Deserialize, Serialize};
use web_sys::HtmlButtonElement;
use web_time::Instant;
use whack_core as game;
use yew::prelude::*;

/// How often the component catches the game clock up with wall-clock time.
const POLL_INTERVAL_MS: u32 = 50;

const REPOSITORY_URL: &str = "https://github.com/aare-mikael/whack-a-mole";
const AUTHOR_URL: &str = "https://www.linkedin.com/in/mikaelaare/";

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Poll,
    Whack(game::CellIndex),
    ChangeDifficulty(String),
    Start,
    End,
    Reset,
    ToggleSettings,
}

fn points_text(score: u32) -> String {
    format!("Points: {}", score)
}

fn time_text(time_left: game::Seconds) -> String {
    format!("Time: {} seconds left", time_left)
}

fn whack_window_text(difficulty: game::Difficulty) -> String {
    format!(
        "{}: {:.1} seconds to whack",
        difficulty.label(),
        difficulty.visible_ms() as f64 / 1000.0
    )
}

#[derive(Properties, Clone, PartialEq)]
struct MoleProps {
    index: game::CellIndex,
    visible: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(MoleView)]
fn mole_component(props: &MoleProps) -> Html {
    let MoleProps {
        index,
        visible,
        callback,
    } = props.clone();

    let class = classes!("cell", if visible { "mole" } else { "hole" });
    let (row, col) = game::row_col(index);
    let label = format!("row {} column {}", row + 1, col + 1);

    let onpointerdown = Callback::from(move |e: PointerEvent| {
        let buttons = MouseButtons::from_bits_truncate(e.buttons());
        log::trace!("{} pointer down ({:?})", index, buttons);
        if buttons.contains(MouseButtons::LEFT) {
            callback.emit(index);
        }
    });

    html! {
        <td {class} aria-label={label} {onpointerdown}/>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    clock: game::GameClock,
    started_at: Instant,
    settings_open: bool,
    _poll_interval: Interval,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(POLL_INTERVAL_MS, move || link.send_message(Msg::Poll))
    }

    fn elapsed_ms(&self) -> game::Millis {
        self.started_at
            .elapsed()
            .as_millis()
            .try_into()
            .unwrap_or(game::Millis::MAX)
    }

    fn log_summary(summary: Option<game::RoundSummary>) {
        let Some(summary) = summary else {
            return;
        };
        match serde_json::to_string(&summary) {
            Ok(summary) => log::info!("round summary: {}", summary),
            Err(err) => log::error!("could not encode round summary: {:?}", err),
        }
    }

    fn whack(&mut self, index: game::CellIndex) -> bool {
        match self.clock.controller_mut().whack_mole(index) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::error!("whack at {}: {}", index, err);
                false
            }
        }
    }

    fn view_setup(&self, ctx: &Context<Self>) -> Html {
        let selected = self.clock.controller().difficulty();
        let onclick = ctx.link().batch_callback(|e: MouseEvent| {
            e.target_dyn_into::<HtmlButtonElement>()
                .map(|button| Msg::ChangeDifficulty(button.value()))
        });

        html! {
            <section class="setup">
                <div class="welcome">
                    <p>{"Welcome to Whack-a-Mole!"}</p>
                    <p>{format!("You have {} seconds to whack as many moles as you can!", game::ROUND_SECONDS)}</p>
                    <ul>
                        { for game::Difficulty::ALL.into_iter().map(|difficulty| html! {
                            <li>{whack_window_text(difficulty)}</li>
                        }) }
                    </ul>
                    <p>{"Click start when you're ready!"}</p>
                </div>
                <div class="difficulty">
                    { for game::Difficulty::ALL.into_iter().map(|difficulty| html! {
                        <button
                            class={classes!((difficulty == selected).then_some("selected"))}
                            value={difficulty.name()}
                            onclick={onclick.clone()}
                        >
                            {difficulty.label()}
                        </button>
                    }) }
                </div>
            </section>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let cells: Vec<_> = self.clock.controller().grid().iter().collect();
        let callback = ctx.link().callback(Msg::Whack);

        html! {
            <table class="board">
                {
                    for cells.chunks(game::GRID_COLUMNS).map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|&(index, visible)| html! {
                                    <MoleView {index} {visible} callback={callback.clone()}/>
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        Self {
            clock: game::GameClock::new(seed),
            started_at: Instant::now(),
            settings_open: false,
            _poll_interval: GameView::create_timer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Poll => {
                let outcome = self.clock.advance_to(self.elapsed_ms());
                if outcome.is_round_over() {
                    Self::log_summary(Some(self.clock.controller().summary()));
                }
                outcome.has_update()
            }
            Whack(index) => self.whack(index),
            ChangeDifficulty(level) => self
                .clock
                .controller_mut()
                .change_difficulty(&level)
                .has_update(),
            Start => {
                Self::log_summary(self.clock.controller_mut().start_game());
                true
            }
            End => {
                Self::log_summary(self.clock.controller_mut().end_game());
                true
            }
            Reset => {
                Self::log_summary(self.clock.controller_mut().reset_game());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let controller = self.clock.controller();
        let link = ctx.link();

        html! {
            <div class="whack">
                <small onclick={link.callback(|_| ToggleSettings)}>{"···"}</small>
                <header>
                    <h1>{"Whack-a-mole"}</h1>
                </header>
                <nav>
                    <p>{points_text(controller.score())}</p>
                    <p>{time_text(controller.time_left())}</p>
                </nav>
                {
                    if controller.is_active() {
                        self.view_board(ctx)
                    } else {
                        self.view_setup(ctx)
                    }
                }
                <menu>
                    <button onclick={link.callback(|_| Start)}>{"Start"}</button>
                    <button onclick={link.callback(|_| End)}>{"End"}</button>
                    <button onclick={link.callback(|_| Reset)}>{"Reset"}</button>
                </menu>
                <footer>
                    <p><a href={REPOSITORY_URL} target="_blank" rel="noopener noreferrer">{"Project repository"}</a></p>
                    <p>{"Thanks for playing!"}</p>
                    <p><a href={AUTHOR_URL} target="_blank" rel="noopener noreferrer">{"Author profile"}</a></p>
                </footer>
                <SettingsView open={self.settings_open} on_close={link.callback(|_: ()| ToggleSettings)}/>
            </div>
        }
    }
}

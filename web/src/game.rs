use crate::settings::SettingsView;
use crate::theme::Theme;
use clap::Args;
use trinca_core as game;
use game::{GameStatus, GridPos, Square, GRID_SIDE};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Pick(Square),
    JumpTo(usize),
    SetAscending(bool),
    ToggleSettings,
    ApplyTheme(Option<Theme>),
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::PlayOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::PlayOutcome| outcome.has_update())
    }
}

impl<E> HasUpdate for Result<game::JumpOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::JumpOutcome| outcome.has_update())
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: Square,
    mark: game::Cell,
    #[prop_or_default]
    winning: bool,
    callback: Callback<Square>,
}

/// One square of the grid. Dumb on purpose: every click is forwarded with
/// the square's index and legality is left to the engine.
#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        mark,
        winning,
        callback,
    } = props.clone();

    let class = classes!("square", winning.then_some("winning"));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>
            { mark.map(|player| player.to_string()).unwrap_or_default() }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Start with the move list sorted newest first
    #[arg(long)]
    #[prop_or_default]
    pub descending: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::MatchEngine,
    ascending: bool,
    settings_open: bool,
}

impl GameView {
    fn winning_line(&self) -> Option<[Square; 3]> {
        self.engine.board().winner().map(|win| win.line)
    }

    fn view_square(
        &self,
        ctx: &Context<Self>,
        index: Square,
        winning_line: Option<[Square; 3]>,
    ) -> Html {
        let mark = self.engine.board().cell_at(index);
        let winning = winning_line.is_some_and(|line| line.contains(&index));
        let callback = ctx.link().callback(Msg::Pick);

        html! {
            <SquareView {index} {mark} {winning} {callback}/>
        }
    }

    fn view_move_button(&self, ctx: &Context<Self>, step: usize) -> Html {
        let label = move_label(step, self.engine.history()[step].last_move());
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::JumpTo(step));
        let text = if step == self.engine.active_index() {
            html! { <b>{ label }</b> }
        } else {
            html! { { label } }
        };

        html! {
            <li key={step.to_string()}>
                <button {onclick}>{ text }</button>
            </li>
        }
    }

    fn move_items(&self, ctx: &Context<Self>) -> Vec<Html> {
        display_order(self.engine.history().len(), self.ascending)
            .into_iter()
            .map(|step| self.view_move_button(ctx, step))
            .collect()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::MatchEngine::new(),
            ascending: !ctx.props().descending,
            settings_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Pick(square) => {
                log::debug!("pick square: {}", square);
                self.engine.play(square).has_update()
            }
            JumpTo(step) => {
                log::debug!("jump to move: {}", step);
                self.engine.jump_to(step).has_update()
            }
            SetAscending(ascending) => {
                if self.ascending != ascending {
                    self.ascending = ascending;
                    true
                } else {
                    false
                }
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            ApplyTheme(theme) => {
                Theme::apply(theme);
                self.settings_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let status = status_line(self.engine.status());
        let winning_line = self.winning_line();
        let ascending = self.ascending;

        let cb_sort = ctx.link().callback(move |_| SetAscending(!ascending));
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="trinca">
                <small onclick={cb_show_settings}>{"···"}</small>
                <div class="board">
                    <table>
                        {
                            for (0..GRID_SIDE).map(|row| html! {
                                <tr>
                                    {
                                        for (0..GRID_SIDE).map(|col| {
                                            self.view_square(ctx, row * GRID_SIDE + col, winning_line)
                                        })
                                    }
                                </tr>
                            })
                        }
                    </table>
                </div>
                <div class="info">
                    <p class="status">{ status }</p>
                    <button class="sort" onclick={cb_sort}>{ sort_button_label(ascending) }</button>
                    <ol class="moves">{ for self.move_items(ctx) }</ol>
                </div>
                <SettingsView open={self.settings_open} on_theme={ctx.link().callback(ApplyTheme)}/>
            </div>
        }
    }
}

fn move_label(step: usize, last_move: Option<GridPos>) -> String {
    match last_move {
        Some((col, row)) => format!("Go to move #{} ({}, {})", step, col, row),
        None => "Go to game start".to_string(),
    }
}

fn status_line(status: GameStatus) -> String {
    match status {
        GameStatus::Won(win) => format!("Winner: {}", win.player),
        GameStatus::Draw => "It's a draw".to_string(),
        GameStatus::InProgress(next) => format!("Next player: {}", next),
    }
}

const fn sort_button_label(ascending: bool) -> &'static str {
    // Labeled by the order the button switches to, not the current one.
    if ascending { "Sort descending" } else { "Sort ascending" }
}

/// History steps in the order the move list shows them.
fn display_order(count: usize, ascending: bool) -> Vec<usize> {
    let mut steps: Vec<usize> = (0..count).collect();
    if !ascending {
        steps.reverse();
    }
    steps
}

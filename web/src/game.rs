use blossom_core::{self as game, BOARD_SIDE, CellIndex, RoundEnding, Score};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ViewCellState {
    Hidden,
    Mine,
    Safe,
    Decorated(AttrValue),
}

impl ViewCellState {
    pub(crate) fn of(cell: &game::Cell) -> Self {
        match (cell.is_revealed(), cell.has_mine(), cell.decoration()) {
            (false, _, _) => Self::Hidden,
            (true, true, _) => Self::Mine,
            (true, false, None) => Self::Safe,
            (true, false, Some(url)) => Self::Decorated(AttrValue::from(url.to_string())),
        }
    }

    /// Cells of `board` in index order, or an all-hidden grid when there is no board.
    pub(crate) fn from_board(board: Option<&game::Board>) -> Vec<Self> {
        match board {
            Some(board) => board.cells().map(|(_, cell)| Self::of(cell)).collect(),
            None => vec![Self::Hidden; game::BOARD_CELLS],
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        index,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Hidden => classes!(),
            Mine => classes!("open", "mine"),
            Safe | Decorated(_) => classes!("open", "safe"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    let content = match cell_state {
        Hidden => html! {},
        Mine => html! { {"💣"} },
        Safe => html! { {"✨"} },
        Decorated(url) => html! { <img src={url} alt="kawaii"/> },
    };

    html! {
        <td {class} {onclick}>{content}</td>
    }
}

#[derive(Properties, PartialEq)]
struct NameEditorProps {
    name: AttrValue,
    on_save: Callback<String>,
}

#[function_component(NameEditor)]
fn name_editor(props: &NameEditorProps) -> Html {
    let editing = use_state(|| false);
    let edited = use_state(String::new);

    if !*editing {
        let onclick = {
            let editing = editing.clone();
            let edited = edited.clone();
            let name = props.name.clone();
            Callback::from(move |_: MouseEvent| {
                edited.set(name.to_string());
                editing.set(true);
            })
        };
        return html! { <button {onclick}>{"Edit Name"}</button> };
    }

    let oninput = {
        let edited = edited.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edited.set(input.value());
        })
    };
    let onsubmit = {
        let editing = editing.clone();
        let edited = edited.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*edited).clone());
            editing.set(false);
        })
    };
    let oncancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    html! {
        <form class="name-editor" {onsubmit}>
            <input type="text" value={(*edited).clone()} {oninput}/>
            <button type="submit">{"Save Name"}</button>
            <button type="button" onclick={oncancel}>{"Cancel"}</button>
        </form>
    }
}

pub(crate) fn ending_message(ending: RoundEnding) -> &'static str {
    match ending {
        RoundEnding::HitMine => "💥 Boom! You found a mine 💥",
        RoundEnding::Cleared => "🌟 Board cleared, every safe cell found 🌟",
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GameProps {
    pub player_name: AttrValue,
    pub score: Score,
    /// Set once the round is over.
    pub ending: Option<RoundEnding>,
    pub cells: Vec<ViewCellState>,
    pub on_reveal: Callback<CellIndex>,
    pub on_reset: Callback<()>,
    pub on_rename: Callback<String>,
    pub on_leave: Callback<()>,
}

#[function_component]
pub(crate) fn GameView(props: &GameProps) -> Html {
    let side = usize::from(BOARD_SIDE);
    let on_reset = props.on_reset.reform(|e: MouseEvent| e.stop_propagation());
    let on_leave = props.on_leave.reform(|_: MouseEvent| ());
    let round_over = props.ending.is_some();
    let ending_class = classes!(
        "ending",
        (props.ending == Some(RoundEnding::Cleared)).then_some("cleared")
    );

    html! {
        <div class="game-board">
            <h2>{format!("💖 Player: {} - Score: {} 💖", props.player_name, props.score)}</h2>
            <div>
                <NameEditor name={props.player_name.clone()} on_save={props.on_rename.clone()}/>
                <button class="leave" onclick={on_leave}>{"Change Player"}</button>
            </div>
            <table class={classes!("board", (!round_over).then_some("playable"))}>
                {
                    for props.cells.chunks(side).enumerate().map(|(y, row)| html! {
                        <tr>
                            {
                                for row.iter().enumerate().map(|(x, cell_state)| {
                                    let index = y * side + x;
                                    let cell_state = cell_state.clone();
                                    let locked =
                                        round_over || cell_state != ViewCellState::Hidden;
                                    let callback = props.on_reveal.clone();
                                    html! {
                                        <CellView {index} {cell_state} {locked} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
            if let Some(ending) = props.ending {
                <p class={ending_class}>
                    {ending_message(ending)}
                </p>
                <button class="reset" onclick={on_reset}>{"💕 Play Again 💕"}</button>
            }
        </div>
    }
}

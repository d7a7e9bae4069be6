use blossom_core::{Player, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ScoreBoardProps {
    pub players: Vec<Player>,
    pub on_remove: Callback<PlayerId>,
}

pub(crate) fn score_line(player: &Player) -> String {
    let unit = if player.score == 1 { "point" } else { "points" };
    format!("{}: {} {}", player.name, player.score, unit)
}

#[function_component]
pub(crate) fn ScoreBoard(props: &ScoreBoardProps) -> Html {
    html! {
        <div class="scoreboard">
            <h2>{"🌟 Top 3 Scores 🌟"}</h2>
            <ul>
                {
                    for props.players.iter().map(|player| {
                        let onclick = {
                            let id = player.id.clone();
                            props.on_remove.reform(move |_: MouseEvent| id.clone())
                        };
                        html! {
                            <li key={player.id.to_string()}>
                                {score_line(player)}
                                <button class="remove" title="Delete player" {onclick}>
                                    {"🗑"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}

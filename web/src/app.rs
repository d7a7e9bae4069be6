use blossom_core::{
    self as game, CellIndex, DecorationOutcome, DecorationTicket, GameError, PlayerId,
    RandomBoardGenerator, Screen, Shell,
};
use yew::prelude::*;

use crate::decoration;
use crate::game::{GameView, ViewCellState};
use crate::player_form::PlayerForm;
use crate::scoreboard::ScoreBoard;
use crate::utils::LocalStore;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub seed: u64,
    pub image_api: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NameInput(String),
    ClearName,
    SubmitName,
    Reveal(CellIndex),
    Decorated(DecorationTicket, String),
    ResetRound,
    Rename(String),
    RemovePlayer(PlayerId),
    Leave,
}

fn warn_user(err: &GameError) {
    gloo::dialogs::alert(&format!("⚠️ {}", err));
}

#[derive(Debug)]
pub(crate) struct AppView {
    shell: Shell<LocalStore, RandomBoardGenerator>,
    name_draft: String,
}

impl AppView {
    fn submit_name(&mut self) -> bool {
        match self.shell.submit_name(&self.name_draft) {
            Ok(player) => {
                log::info!("player {} joined as {:?}", player.id, player.name);
                true
            }
            Err(err @ GameError::Validation(_)) => {
                warn_user(&err);
                false
            }
            Err(err) => {
                log::error!("could not register player: {}", err);
                false
            }
        }
    }

    fn reveal(&mut self, ctx: &Context<Self>, index: CellIndex) -> bool {
        match self.shell.reveal(index) {
            Ok(outcome) => {
                log::debug!("reveal {}: {:?}", index, outcome);
                if let Some(ticket) = outcome.ticket() {
                    let on_fetched = ctx
                        .link()
                        .callback(|(ticket, url): (DecorationTicket, String)| {
                            Msg::Decorated(ticket, url)
                        });
                    decoration::spawn_fetch(ctx.props().image_api.clone(), ticket, on_fetched);
                }
                outcome.has_update()
            }
            Err(err) => {
                log::error!("reveal {} failed: {}", index, err);
                true
            }
        }
    }

    fn rename(&mut self, name: String) -> bool {
        match self.shell.rename_current(&name) {
            Ok(found) => {
                if found {
                    self.name_draft = name;
                }
                true
            }
            Err(err @ GameError::Validation(_)) => {
                warn_user(&err);
                false
            }
            Err(err) => {
                log::error!("could not rename player: {}", err);
                false
            }
        }
    }

    fn remove_player(&mut self, id: &PlayerId) -> bool {
        match self.shell.remove_player(id) {
            Ok(outcome) => {
                if outcome.was_active {
                    self.name_draft.clear();
                }
                outcome.removed
            }
            Err(err) => {
                log::error!("could not remove player {}: {}", id, err);
                false
            }
        }
    }
}

impl Component for AppView {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let generator = RandomBoardGenerator::new(ctx.props().seed);
        Self {
            shell: Shell::load(LocalStore, generator),
            name_draft: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NameInput(name) => {
                self.name_draft = name;
                true
            }
            ClearName => {
                self.name_draft.clear();
                true
            }
            SubmitName => self.submit_name(),
            Reveal(index) => self.reveal(ctx, index),
            Decorated(ticket, url) => {
                let outcome = self.shell.apply_decoration(ticket, url);
                log::trace!("decoration for cell {}: {:?}", ticket.index(), outcome);
                outcome == DecorationOutcome::Applied
            }
            ResetRound => match self.shell.reset_round() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("reset ignored: {}", err);
                    false
                }
            },
            Rename(name) => self.rename(name),
            RemovePlayer(id) => self.remove_player(&id),
            Leave => {
                self.shell.leave();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let main = match self.shell.screen() {
            Screen::NameEntry => html! {
                <PlayerForm
                    name={self.name_draft.clone()}
                    on_input={link.callback(Msg::NameInput)}
                    on_submit={link.callback(|_: ()| Msg::SubmitName)}
                    on_clear={link.callback(|_: ()| Msg::ClearName)}
                />
            },
            Screen::Playing => {
                let round = self.shell.round();
                let player_name = self
                    .shell
                    .current_player()
                    .map(|player| player.name.clone())
                    .unwrap_or_default();
                html! {
                    <GameView
                        player_name={player_name}
                        score={round.score()}
                        ending={round.ending()}
                        cells={ViewCellState::from_board(round.board())}
                        on_reveal={link.callback(Msg::Reveal)}
                        on_reset={link.callback(|_: ()| Msg::ResetRound)}
                        on_rename={link.callback(Msg::Rename)}
                        on_leave={link.callback(|_: ()| Msg::Leave)}
                    />
                }
            }
        };

        let players: Vec<game::Player> = self.shell.leaderboard().into_iter().cloned().collect();

        html! {
            <div class="app">
                <h1>{"🌸 Kawaii Minesweeper 🌸"}</h1>
                {main}
                <ScoreBoard {players} on_remove={link.callback(Msg::RemovePlayer)}/>
            </div>
        }
    }
}

use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    NameEntry,
    Playing,
}

/// Ties the roster and the round together and tracks who is playing.
///
/// This is the only mutator of both, so everything the UI does goes through here.
#[derive(Debug)]
pub struct Shell<S, G> {
    roster: Roster<S>,
    round: RoundController<G>,
    current_player: Option<PlayerId>,
    screen: Screen,
}

impl<S: KeyValueStore, G: BoardGenerator> Shell<S, G> {
    pub fn load(store: S, generator: G) -> Self {
        Self {
            roster: Roster::load(store),
            round: RoundController::new(generator),
            current_player: None,
            screen: Screen::NameEntry,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    pub fn round(&self) -> &RoundController<G> {
        &self.round
    }

    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.current_player.as_ref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player
            .as_ref()
            .and_then(|id| self.roster.find(id))
    }

    pub fn leaderboard(&self) -> Vec<&Player> {
        self.roster.leaderboard()
    }

    /// Registers a new player under `name` and starts their round.
    pub fn submit_name(&mut self, name: &str) -> Result<&Player> {
        let player = self.roster.create(name)?;
        self.round.start(player.id.clone());
        self.current_player = Some(player.id);
        self.screen = Screen::Playing;
        self.current_player().ok_or(GameError::NoCurrentPlayer)
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        self.round.apply_reveal(index, &mut self.roster)
    }

    pub fn apply_decoration(&mut self, ticket: DecorationTicket, url: String) -> DecorationOutcome {
        self.round.apply_decoration(ticket, url)
    }

    pub fn reset_round(&mut self) -> Result<()> {
        self.round.reset().map(|_| ())
    }

    /// Renames the current player, storing the score of the round in progress.
    pub fn rename_current(&mut self, name: &str) -> Result<bool> {
        let id = self.current_player.as_ref().ok_or(GameError::NoCurrentPlayer)?;
        self.roster.edit(id, name, self.round.score())
    }

    pub fn remove_player(&mut self, id: &PlayerId) -> Result<RemoveOutcome> {
        let outcome = self.roster.remove(id, self.current_player.as_ref())?;
        if outcome.was_active {
            self.leave();
        }
        Ok(outcome)
    }

    /// Back to name entry, without a current player.
    pub fn leave(&mut self) {
        self.round.abandon();
        self.current_player = None;
        self.screen = Screen::NameEntry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    struct NoMines;

    impl BoardGenerator for NoMines {
        fn generate(&mut self, generation: Generation) -> Board {
            Board::from_mine_indices(generation, &[]).unwrap()
        }
    }

    struct MineAtZero;

    impl BoardGenerator for MineAtZero {
        fn generate(&mut self, generation: Generation) -> Board {
            Board::from_mine_indices(generation, &[0]).unwrap()
        }
    }

    #[test]
    fn blank_name_stays_on_name_entry() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        assert!(shell.submit_name("  ").is_err());
        assert_eq!(shell.screen(), Screen::NameEntry);
        assert!(shell.current_player().is_none());
        assert!(shell.roster().is_empty());
        assert_eq!(shell.roster().store().raw(PLAYERS_KEY), None);
    }

    #[test]
    fn submit_name_starts_playing() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        let player = shell.submit_name("Sakura").unwrap();
        assert_eq!(player.name, "Sakura");
        assert_eq!(player.id, PlayerId::new("1"));

        assert_eq!(shell.screen(), Screen::Playing);
        assert_eq!(shell.round().state(), RoundState::InProgress);
        assert_eq!(shell.current_player_id(), Some(&PlayerId::new("1")));
    }

    #[test]
    fn losing_persists_final_score() {
        let mut shell = Shell::load(MemoryStore::new(), MineAtZero);
        shell.submit_name("a").unwrap();
        for index in 1..4 {
            shell.reveal(index).unwrap();
        }
        assert_eq!(shell.current_player().unwrap().score, 0);

        assert_eq!(shell.reveal(0).unwrap(), RevealOutcome::Mine);
        assert_eq!(shell.current_player().unwrap().score, 3);

        let reloaded = Roster::load(shell.roster().store().clone());
        assert_eq!(reloaded.players()[0].score, 3);
    }

    #[test]
    fn reset_keeps_player_and_zeroes_score() {
        let mut shell = Shell::load(MemoryStore::new(), MineAtZero);
        shell.submit_name("a").unwrap();
        shell.reveal(5).unwrap();
        shell.reveal(0).unwrap();

        shell.reset_round().unwrap();
        assert_eq!(shell.round().score(), 0);
        assert_eq!(shell.round().state(), RoundState::InProgress);
        assert_eq!(shell.screen(), Screen::Playing);
        assert_eq!(shell.current_player().unwrap().score, 1);
    }

    #[test]
    fn rename_keeps_round_score() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        shell.submit_name("a").unwrap();
        shell.reveal(1).unwrap();
        shell.reveal(2).unwrap();

        assert!(shell.rename_current("b").unwrap());
        let player = shell.current_player().unwrap();
        assert_eq!(player.name, "b");
        assert_eq!(player.score, 2);
    }

    #[test]
    fn rename_without_player_fails() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        assert!(matches!(
            shell.rename_current("b"),
            Err(GameError::NoCurrentPlayer)
        ));
    }

    #[test]
    fn removing_current_player_returns_to_name_entry() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        shell.submit_name("a").unwrap();
        let id = shell.current_player_id().unwrap().clone();

        let outcome = shell.remove_player(&id).unwrap();
        assert!(outcome.was_active);
        assert_eq!(shell.screen(), Screen::NameEntry);
        assert!(shell.current_player_id().is_none());
        assert_eq!(shell.round().state(), RoundState::NotStarted);
    }

    #[test]
    fn removing_someone_else_keeps_playing() {
        let store = MemoryStore::with_entry(
            PLAYERS_KEY,
            r#"[{"id":"1","name":"old","score":4}]"#,
        );
        let mut shell = Shell::load(store, NoMines);
        shell.submit_name("new").unwrap();

        let outcome = shell.remove_player(&PlayerId::new("1")).unwrap();
        assert!(outcome.removed);
        assert!(!outcome.was_active);
        assert_eq!(shell.screen(), Screen::Playing);
        assert_eq!(shell.current_player().unwrap().id, PlayerId::new("2"));
    }

    #[test]
    fn decoration_after_leaving_is_stale() {
        let mut shell = Shell::load(MemoryStore::new(), NoMines);
        shell.submit_name("a").unwrap();
        let ticket = shell.reveal(3).unwrap().ticket().unwrap();
        shell.leave();
        assert_eq!(
            shell.apply_decoration(ticket, "https://img".to_string()),
            DecorationOutcome::Stale
        );
    }

    #[test]
    fn leaderboard_shows_top_three() {
        let store = MemoryStore::with_entry(
            PLAYERS_KEY,
            r#"[{"id":"1","name":"a","score":1},{"id":"2","name":"b","score":9},{"id":"3","name":"c","score":5},{"id":"4","name":"d","score":3}]"#,
        );
        let shell = Shell::load(store, NoMines);
        let names: Vec<&str> = shell.leaderboard().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "d"]);
    }
}

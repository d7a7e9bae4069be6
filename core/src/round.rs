use alloc::string::String;

use crate::*;

/// Where a finished round's score goes.
pub trait ScoreSink {
    fn record_final_score(&mut self, player: &PlayerId, score: Score) -> Result<()>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RoundState {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

impl RoundState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundEnding {
    HitMine,
    /// Every safe cell was revealed.
    Cleared,
}

/// Owns the lifecycle of one board at a time: start, play, end, reset.
#[derive(Debug)]
pub struct RoundController<G> {
    generator: G,
    state: RoundState,
    engine: Option<PlayEngine>,
    player: Option<PlayerId>,
    ending: Option<RoundEnding>,
    last_generation: Generation,
}

impl<G: BoardGenerator> RoundController<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: RoundState::NotStarted,
            engine: None,
            player: None,
            ending: None,
            last_generation: Generation::default(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn ending(&self) -> Option<RoundEnding> {
        self.ending
    }

    pub fn player(&self) -> Option<&PlayerId> {
        self.player.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.engine.as_ref().map(PlayEngine::board)
    }

    pub fn score(&self) -> Score {
        self.engine.as_ref().map_or(0, PlayEngine::score)
    }

    /// Begins a fresh round for `player`, whatever state the controller was in.
    pub fn start(&mut self, player: PlayerId) -> &Board {
        log::info!("starting round for player {}", player);
        self.player = Some(player);
        self.deal()
    }

    pub fn apply_reveal(
        &mut self,
        index: CellIndex,
        sink: &mut impl ScoreSink,
    ) -> Result<RevealOutcome> {
        let (Some(engine), Some(player)) = (self.engine.as_mut(), self.player.as_ref()) else {
            return Err(GameError::NoActiveRound);
        };

        let outcome = engine.reveal(index)?;
        let ending = match outcome {
            RevealOutcome::Mine => Some(RoundEnding::HitMine),
            RevealOutcome::Safe(_) if engine.is_cleared() => {
                engine.finish();
                Some(RoundEnding::Cleared)
            }
            _ => None,
        };

        if let Some(ending) = ending {
            let score = engine.score();
            self.state = RoundState::Over;
            self.ending = Some(ending);
            log::info!("round over ({:?}), final score {}", ending, score);
            sink.record_final_score(player, score)?;
        }

        Ok(outcome)
    }

    /// Deals a new board for the same player. Only allowed once the round is over.
    pub fn reset(&mut self) -> Result<&Board> {
        if !self.state.is_over() {
            return Err(GameError::RoundNotOver);
        }
        Ok(self.deal())
    }

    /// Drops the current board and player.
    pub fn abandon(&mut self) {
        if self.engine.take().is_some() {
            log::debug!("round abandoned");
        }
        self.player = None;
        self.ending = None;
        self.state = RoundState::NotStarted;
    }

    pub fn apply_decoration(&mut self, ticket: DecorationTicket, url: String) -> DecorationOutcome {
        match self.engine.as_mut() {
            Some(engine) => engine.attach_decoration(ticket, url),
            None => DecorationOutcome::Stale,
        }
    }

    fn deal(&mut self) -> &Board {
        self.last_generation = self.last_generation.next();
        let board = self.generator.generate(self.last_generation);
        self.state = RoundState::InProgress;
        self.ending = None;
        self.engine.insert(PlayEngine::new(board)).board()
    }
}

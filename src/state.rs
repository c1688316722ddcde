//! Practice session: the per-user state machine around one round.
//!
//! This module owns:
//!   - the current settings and running scores (mirrored to `LocalData`)
//!   - the current round (puzzle, guess, Active/Revealed phase)
//!   - the random source used by the sampler
//!
//! A round starts Active with the headword as its guess. Checking the answer
//! moves it to Revealed exactly once. Advancing while still Active counts as
//! a skip. Every score or settings change is queued for persistence; store
//! failures are logged and never block the flow.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::{AppConfig, IssueTemplates};
use crate::dictionary::WordDatabase;
use crate::domain::{Puzzle, ScoreKind, Scores, Settings};
use crate::evaluate::is_correct;
use crate::protocol::{to_reveal_view, to_round_view, to_welcome_view, RoundView, WelcomeView};
use crate::sampler::sample;
use crate::store::{KeyValueStore, LocalData};
use crate::taxonomy::{selectable_slots, CaseSlot, GenderFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Active,
    Revealed { correct: bool },
}

#[derive(Clone, Debug)]
struct Round {
    id: Uuid,
    puzzle: Option<Puzzle>,
    guess: String,
    phase: Phase,
}

impl Round {
    fn empty() -> Self {
        Self { id: Uuid::new_v4(), puzzle: None, guess: String::new(), phase: Phase::Active }
    }

    fn for_puzzle(puzzle: Option<Puzzle>) -> Self {
        let guess = puzzle.as_ref().map(|p| p.word.clone()).unwrap_or_default();
        Self { id: Uuid::new_v4(), puzzle, guess, phase: Phase::Active }
    }
}

pub struct PracticeSession<S: KeyValueStore> {
    dictionary: Arc<WordDatabase>,
    local: LocalData<S>,
    settings: Settings,
    scores: Scores,
    round: Round,
    rng: StdRng,
    max_attempts: usize,
    selectable: Vec<CaseSlot>,
    issues: IssueTemplates,
}

impl<S: KeyValueStore> PracticeSession<S> {
    /// Build a session from stored settings and scores (or defaults).
    #[instrument(level = "info", skip_all, fields(words = dictionary.len()))]
    pub async fn new(dictionary: Arc<WordDatabase>, local: LocalData<S>, config: &AppConfig) -> Self {
        Self::with_rng(dictionary, local, config, StdRng::from_entropy()).await
    }

    /// Same as `new` with a caller-provided random source.
    pub async fn with_rng(
        dictionary: Arc<WordDatabase>,
        mut local: LocalData<S>,
        config: &AppConfig,
        rng: StdRng,
    ) -> Self {
        let loaded = local.read_settings_and_scores().await;
        info!(
            target: "czech_declension",
            cases = loaded.settings.selected_cases.len(),
            genders = loaded.settings.selected_genders.len(),
            answered = loaded.scores.total(),
            "Practice session ready"
        );
        Self {
            dictionary,
            local,
            settings: loaded.settings,
            scores: loaded.scores,
            round: Round::empty(),
            rng,
            max_attempts: config.max_attempts,
            selectable: selectable_slots(config.include_nominative_singular),
            issues: config.issues.clone(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.round.puzzle.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.round.phase, Phase::Revealed { .. })
    }

    pub fn guess(&self) -> &str {
        &self.round.guess
    }

    /// Ignored once the round is revealed.
    pub fn set_guess(&mut self, guess: impl Into<String>) {
        if !self.is_revealed() {
            self.round.guess = guess.into();
        }
    }

    pub fn local(&self) -> &LocalData<S> {
        &self.local
    }

    pub fn can_start(&self) -> bool {
        self.settings.can_start()
    }

    pub fn toggle_case(&mut self, slot: CaseSlot) {
        if !self.selectable.contains(&slot) {
            debug!(target: "czech_declension", slot = slot.get(), "Ignoring toggle of a non-selectable slot");
            return;
        }
        self.settings = self.settings.with_case_toggled(slot);
        self.local.write_selected_cases(&self.settings.selected_cases);
    }

    pub fn select_all_cases(&mut self) {
        self.settings = self.settings.with_cases(self.selectable.iter().copied());
        self.local.write_selected_cases(&self.settings.selected_cases);
    }

    pub fn deselect_all_cases(&mut self) {
        self.settings = self.settings.with_cases([]);
        self.local.write_selected_cases(&self.settings.selected_cases);
    }

    pub fn toggle_gender(&mut self, filter: GenderFilter) {
        self.settings = self.settings.with_gender_toggled(filter);
        self.local.write_selected_genders(&self.settings.selected_genders);
    }

    pub fn select_all_genders(&mut self) {
        self.settings = self.settings.with_genders(GenderFilter::ALL);
        self.local.write_selected_genders(&self.settings.selected_genders);
    }

    pub fn deselect_all_genders(&mut self) {
        self.settings = self.settings.with_genders([]);
        self.local.write_selected_genders(&self.settings.selected_genders);
    }

    /// First draw after the welcome screen. Never counts as a skip.
    pub fn start(&mut self) -> bool {
        self.draw()
    }

    /// Move to a fresh round. Leaving an unanswered round counts as a skip.
    #[instrument(level = "debug", skip(self), fields(round = %self.round.id))]
    pub fn next_word(&mut self) -> bool {
        if self.round.phase == Phase::Active && self.round.puzzle.is_some() {
            self.record(ScoreKind::Skipped);
        }
        self.draw()
    }

    /// Evaluate the current guess and reveal the answer.
    /// Returns `None` when there is nothing to check.
    #[instrument(level = "debug", skip(self), fields(round = %self.round.id))]
    pub fn check_answer(&mut self) -> Option<bool> {
        if self.round.phase != Phase::Active {
            return None;
        }
        let puzzle = self.round.puzzle.as_ref()?;
        let correct = is_correct(&self.round.guess, &puzzle.solutions);
        debug!(target: "puzzle", word = %puzzle.word, slot = puzzle.case_slot.get(), correct, "Answer checked");
        self.round.phase = Phase::Revealed { correct };
        self.record(if correct { ScoreKind::Correct } else { ScoreKind::Wrong });
        Some(correct)
    }

    pub fn reset_scores(&mut self) {
        info!(target: "czech_declension", previous = self.scores.total(), "Scores reset");
        self.scores = Scores::default();
        self.local.write_scores(self.scores);
    }

    /// `None` when the current round has no puzzle.
    pub fn round_view(&self) -> Option<RoundView> {
        let puzzle = self.round.puzzle.as_ref()?;
        let reveal = match self.round.phase {
            Phase::Revealed { correct } => Some(to_reveal_view(puzzle, correct, &self.issues)),
            Phase::Active => None,
        };
        Some(to_round_view(self.round.id.to_string(), puzzle, &self.round.guess, self.scores, reveal))
    }

    pub fn welcome_view(&self) -> WelcomeView {
        to_welcome_view(self.dictionary.stats(), &self.selectable, &self.settings, &self.issues)
    }

    fn draw(&mut self) -> bool {
        let puzzle = sample(
            &self.dictionary,
            &self.settings.selected_cases,
            &self.settings.selected_genders,
            self.max_attempts,
            &mut self.rng,
        );
        if puzzle.is_none() {
            warn!(target: "puzzle", "No puzzle available for the current filters");
        }
        self.round = Round::for_puzzle(puzzle);
        self.round.puzzle.is_some()
    }

    fn record(&mut self, kind: ScoreKind) {
        self.scores.record(kind);
        self.local.write_scores(self.scores);
    }
}

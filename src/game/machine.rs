//! The game state machine
//!
//! Owns the board, the selection cursor, and the overall game status, and
//! interprets classified keyboard input. The machine never touches the
//! network itself: operations that need the service return a [`Command`]
//! tagged with the current board generation, and the caller later feeds the
//! tagged result back through `pair_arrived` / `test_arrived` /
//! `hint_arrived`. Results tagged with a superseded generation are discarded,
//! so a stale reply can never corrupt a replacement board.

use crate::core::{Board, Solution, WordStatus};
use crate::game::{InputKey, PlayerSettings};
use crate::gateway::{
    GatewayError, HintReply, HintRequest, TestWordReply, TestWordRequest, WordPair,
};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the word server. Check your connection and try again.";

/// Overall status of the current puzzle instance
///
/// `Win` and `Broken` are terminal; `new_game` re-enters `Initialize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    /// The word-pair request is in flight
    #[default]
    Initialize,
    /// The player is editing and testing words
    Run,
    /// Every hop row is server-verified solved
    Win,
    /// The word-pair fetch failed; only a new game recovers
    Broken,
}

/// Selection cursor: a word row and a letter column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub word: usize,
    pub letter: usize,
}

/// Audio cues surfaced to the interactive layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Key,
    Solved,
    Rejected,
    Won,
    Broken,
}

/// Side effects the interactive layer drains after each machine call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundCue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// The user-facing message line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// A service request the caller must issue on the machine's behalf
///
/// Each command carries the generation of the board it belongs to; the
/// matching `*_arrived` call must echo it back.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchPair {
        generation: u64,
        num_letters: usize,
        num_hops: usize,
    },
    TestWord {
        generation: u64,
        request: TestWordRequest,
    },
    FetchHint {
        generation: u64,
        request: HintRequest,
    },
}

/// Board, cursor, and status for one session
pub struct GameMachine {
    settings: PlayerSettings,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
    message: Option<Message>,
    generation: u64,
    pending_tests: FxHashSet<usize>,
    pending_hint: bool,
    effects: Vec<Effect>,
    request_started: Option<Instant>,
    last_round_trip: Option<Duration>,
}

impl GameMachine {
    /// Create a machine; call [`GameMachine::new_game`] to start playing
    #[must_use]
    pub fn new(settings: PlayerSettings) -> Self {
        let board = Board::new(settings.num_letters, settings.num_hops);
        Self {
            settings,
            board,
            cursor: Cursor { word: 1, letter: 0 },
            status: GameStatus::Initialize,
            message: None,
            generation: 0,
            pending_tests: FxHashSet::default(),
            pending_hint: false,
            effects: Vec::new(),
            request_started: None,
            last_round_trip: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Duration of the most recently completed service round trip
    #[must_use]
    pub const fn last_round_trip(&self) -> Option<Duration> {
        self.last_round_trip
    }

    /// Drain the side effects accumulated since the last drain
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Discard the current puzzle and request a fresh word pair
    ///
    /// Bumps the board generation, so replies belonging to the old board are
    /// ignored when they eventually arrive.
    pub fn new_game(&mut self) -> Command {
        self.generation += 1;
        self.board = Board::new(self.settings.num_letters, self.settings.num_hops);
        for word in self.board.words_mut() {
            word.set_status(WordStatus::Loading);
        }
        self.cursor = Cursor { word: 1, letter: 0 };
        self.status = GameStatus::Initialize;
        self.message = Some(Message::info("Fetching a new word pair..."));
        self.pending_tests.clear();
        self.pending_hint = false;
        self.request_started = Some(Instant::now());

        Command::FetchPair {
            generation: self.generation,
            num_letters: self.settings.num_letters,
            num_hops: self.settings.num_hops,
        }
    }

    /// Apply the word-pair fetch result for generation `generation`
    pub fn pair_arrived(&mut self, generation: u64, result: Result<WordPair, GatewayError>) {
        if generation != self.generation || self.status != GameStatus::Initialize {
            debug!("Discarding stale word-pair reply for generation {generation}");
            return;
        }
        self.record_round_trip();

        match result {
            Ok(pair) => {
                if let Err(e) = self.board.initialize(&pair.start_word, &pair.end_word) {
                    warn!("Service sent an unusable word pair: {e}");
                    self.enter_broken();
                    return;
                }
                for word in self.board.words_mut() {
                    word.set_status(WordStatus::Initialized);
                }
                self.cursor = Cursor { word: 1, letter: 0 };
                self.status = GameStatus::Run;
                self.message = Some(Message::info(format!(
                    "Transform {} into {}, one letter at a time.",
                    pair.start_word.to_uppercase(),
                    pair.end_word.to_uppercase()
                )));
            }
            Err(e) => {
                warn!("Word-pair fetch failed: {e}");
                self.enter_broken();
            }
        }
    }

    fn enter_broken(&mut self) {
        for word in self.board.words_mut() {
            word.set_status(WordStatus::Initialized);
        }
        self.board.set_broken(true);
        self.status = GameStatus::Broken;
        self.message = Some(Message::error(CONNECTIVITY_MESSAGE));
        self.effects.push(Effect::Sound(SoundCue::Broken));
    }

    /// Interpret one classified keystroke
    ///
    /// Returns a validation command when the keystroke commits a populated
    /// word; everything else resolves locally. No-op outside `Run` and on a
    /// locked word.
    pub fn letter_entered(&mut self, key: InputKey) -> Option<Command> {
        if self.status != GameStatus::Run {
            return None;
        }
        if self.board.word(self.cursor.word).is_locked() {
            return None;
        }

        match key {
            InputKey::Char(c) => {
                if !c.is_ascii_alphabetic() {
                    return None;
                }
                let cell = self.cursor.letter;
                self.board
                    .word_mut(self.cursor.word)
                    .set_ch(cell, Some(c.to_ascii_uppercase()), true);
                self.invalidate_pending_test(self.cursor.word);
                self.message = None;
                self.effects.push(Effect::Sound(SoundCue::Key));
                // Stay on the last column so Enter is one keystroke away.
                if self.cursor.letter + 1 < self.board.num_letters() {
                    self.cursor.letter += 1;
                }
                None
            }
            InputKey::Backspace => {
                let cell = self.cursor.letter;
                self.board
                    .word_mut(self.cursor.word)
                    .set_ch(cell, None, false);
                self.invalidate_pending_test(self.cursor.word);
                self.message = None;
                self.cursor.letter = self.cursor.letter.saturating_sub(1);
                None
            }
            InputKey::Delete => {
                let cell = self.cursor.letter;
                self.board
                    .word_mut(self.cursor.word)
                    .set_ch(cell, None, false);
                self.invalidate_pending_test(self.cursor.word);
                self.message = None;
                None
            }
            InputKey::Enter => {
                if self.board.word(self.cursor.word).is_populated() {
                    Some(self.test_single_word())
                } else {
                    None
                }
            }
            InputKey::Up => {
                if self.cursor.word > 1 {
                    self.cursor.word -= 1;
                }
                None
            }
            InputKey::Down => {
                if self.cursor.word + 1 < self.board.num_hops() {
                    self.cursor.word += 1;
                }
                None
            }
            InputKey::Left => {
                self.cursor.letter = self.cursor.letter.saturating_sub(1);
                None
            }
            InputKey::Right => {
                if self.cursor.letter + 1 < self.board.num_letters() {
                    self.cursor.letter += 1;
                }
                None
            }
        }
    }

    /// Submit the word under the cursor for validation
    ///
    /// Marks the word `Testing` before the reply exists; `test_arrived`
    /// resolves the optimistic state either way.
    pub fn test_single_word(&mut self) -> Command {
        let position = self.cursor.word;
        let test_word = self.board.word(position).text_or_blank();
        self.board
            .word_mut(position)
            .set_status(WordStatus::Testing);
        self.pending_tests.insert(position);

        let blank = " ".repeat(self.board.num_letters());
        let puzzle_words = self
            .board
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == position {
                    blank.clone()
                } else {
                    word.text_or_blank()
                }
            })
            .collect();

        self.request_started = Some(Instant::now());
        Command::TestWord {
            generation: self.generation,
            request: TestWordRequest {
                puzzle_words,
                test_word,
                test_position: position,
            },
        }
    }

    /// Apply a word-validation result for generation `generation`
    ///
    /// `position` is the tested row echoed from the issued
    /// [`Command::TestWord`], so a failure resolves the row that was actually
    /// submitted even with several tests in flight. A reply for a row whose
    /// test is no longer pending (superseded by an edit, or never issued) is
    /// discarded.
    pub fn test_arrived(
        &mut self,
        generation: u64,
        position: usize,
        result: Result<TestWordReply, GatewayError>,
    ) {
        if generation != self.generation || self.status != GameStatus::Run {
            debug!("Discarding stale test reply for generation {generation}");
            return;
        }
        if !self.pending_tests.remove(&position) {
            debug!("Discarding test reply for row {position} with no test in flight");
            return;
        }
        self.record_round_trip();

        match result {
            Ok(reply) => {
                if reply.valid {
                    self.board.word_mut(position).set_status(WordStatus::Solved);
                    self.effects.push(Effect::Sound(SoundCue::Solved));
                    if self.all_hops_solved() {
                        self.enter_win();
                    } else {
                        self.advance_to_next_unsolved(position);
                    }
                } else {
                    self.board.word_mut(position).set_status(WordStatus::Wrong);
                    self.effects.push(Effect::Sound(SoundCue::Rejected));
                    let text = reply
                        .error
                        .unwrap_or_else(|| "That word does not fit here.".to_string());
                    self.message = Some(Message::error(text));
                }
            }
            Err(e) => {
                warn!("Word test failed in transport: {e}");
                self.board
                    .word_mut(position)
                    .set_status(WordStatus::Broken);
                self.effects.push(Effect::Sound(SoundCue::Broken));
                self.message = Some(Message::error(CONNECTIVITY_MESSAGE));
            }
        }
    }

    // Forget an in-flight test for `position`: once the row is edited, any
    // verdict for its previous text no longer applies.
    fn invalidate_pending_test(&mut self, position: usize) {
        if self.pending_tests.remove(&position) {
            debug!("Edit on row {position} invalidates its in-flight test");
        }
    }

    fn all_hops_solved(&self) -> bool {
        self.board
            .words()
            .iter()
            .filter(|w| !w.is_locked())
            .all(|w| w.status() == WordStatus::Solved)
    }

    fn enter_win(&mut self) {
        self.status = GameStatus::Win;
        self.effects.push(Effect::Sound(SoundCue::Won));
        self.message = Some(Message::success("You win! The ladder is complete."));
        // The player's own path becomes a displayable solution.
        match Solution::new(self.board.words().to_vec()) {
            Ok(solution) => {
                self.board.add_solution(solution);
            }
            Err(e) => debug!("Winning board not snapshot as solution: {e}"),
        }
    }

    // Move to the next unsolved editable row after `position`, stopping at
    // the boundary rather than wrapping.
    fn advance_to_next_unsolved(&mut self, position: usize) {
        let next = (position + 1..self.board.num_words()).find(|&i| {
            let word = self.board.word(i);
            !word.is_locked() && word.status() != WordStatus::Solved
        });
        if let Some(index) = next {
            self.cursor = Cursor {
                word: index,
                letter: 0,
            };
        }
    }

    /// Request a hint for the row under the cursor
    ///
    /// Returns `None` outside `Run`.
    pub fn get_hint(&mut self) -> Option<Command> {
        if self.status != GameStatus::Run {
            return None;
        }
        self.pending_hint = true;
        self.request_started = Some(Instant::now());

        let puzzle_words = self
            .board
            .words()
            .iter()
            .map(crate::core::Word::text_or_blank)
            .collect();

        Some(Command::FetchHint {
            generation: self.generation,
            request: HintRequest {
                puzzle_words,
                hint_position: self.cursor.word,
                hint_kind: self.settings.hint_type.wire(),
            },
        })
    }

    /// Apply a hint result for generation `generation`
    ///
    /// A whole-word hint fills the row and immediately returns the follow-up
    /// validation command; a letter hint is routed back through
    /// [`GameMachine::letter_entered`] so every downstream side effect fires
    /// exactly as if the player had typed it.
    pub fn hint_arrived(
        &mut self,
        generation: u64,
        result: Result<HintReply, GatewayError>,
    ) -> Option<Command> {
        if generation != self.generation || self.status != GameStatus::Run || !self.pending_hint {
            debug!("Discarding stale hint reply for generation {generation}");
            return None;
        }
        self.pending_hint = false;
        self.record_round_trip();

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Hint fetch failed in transport: {e}");
                self.message = Some(Message::error(CONNECTIVITY_MESSAGE));
                return None;
            }
        };

        if !reply.valid {
            let text = reply
                .error
                .unwrap_or_else(|| "No hint is available right now.".to_string());
            self.message = Some(Message::error(text));
            return None;
        }

        let row = reply.hint_word;
        if row >= self.board.num_words() || self.board.word(row).is_locked() {
            warn!("Hint reply names an invalid row {row}");
            return None;
        }

        if let Some(text) = reply.hint_text {
            self.cursor = Cursor {
                word: row,
                letter: 0,
            };
            self.board.word_mut(row).set_text(&text, true);
            // A server-supplied word is expected to pass, but it still goes
            // through the normal confirmation path.
            return Some(self.test_single_word());
        }

        if let (Some(letter), Some(cell)) = (reply.hint_letter, reply.letter_position) {
            if cell >= self.board.num_letters() {
                warn!("Hint reply names an invalid column {cell}");
                return None;
            }
            self.cursor = Cursor {
                word: row,
                letter: cell,
            };
            return self.letter_entered(InputKey::Char(letter));
        }

        warn!("Hint reply carried neither a letter nor a word");
        self.message = Some(Message::error("No hint is available right now."));
        None
    }

    fn record_round_trip(&mut self) {
        if let Some(started) = self.request_started.take() {
            self.last_round_trip = Some(started.elapsed());
        }
    }
}

//! Session: the optional current game plus command dispatch.

use crate::core::Game;
use crate::input::{parse_pins, Input};
use crate::reply::{Reply, SessionError};
use crate::transcript::{now_ms, ReplyRecord, Transcript, TranscriptRecord};
use crate::types::Command;

/// Prompt printed before reading a line of pin counts.
pub const PINS_PROMPT: &str = "Enter number of pins knocked down in roll: ";

/// What the command loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(Reply),
    /// Print [`PINS_PROMPT`], read a line, and pass it to [`Session::roll_line`].
    PromptPins,
    Quit(Reply),
}

#[derive(Default)]
pub struct Session {
    game: Option<Game>,
    transcript: Option<Transcript>,
    games_started: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    fn current(&self) -> Result<&Game, SessionError> {
        self.game.as_ref().ok_or(SessionError::NoGame)
    }

    /// Handle one line typed at the command prompt.
    pub fn execute(&mut self, input: &Input) -> Step {
        let (step, command, text) = match input {
            Input::Command(cmd) => (self.dispatch(*cmd), cmd.as_str(), cmd.as_str()),
            Input::Unknown(word) => (Step::Reply(Reply::Unknown(word.clone())), "unknown", word.as_str()),
            Input::Blank => (Step::Reply(Reply::Unknown(String::new())), "unknown", ""),
        };

        // Roll prompts are recorded once the pin line comes back.
        if let Step::Reply(reply) | Step::Quit(reply) = &step {
            self.record(command, text, std::slice::from_ref(reply));
        }
        step
    }

    fn dispatch(&mut self, cmd: Command) -> Step {
        if cmd.needs_game() {
            if let Err(err) = self.current() {
                return Step::Reply(Reply::Refused(err));
            }
        }

        match cmd {
            Command::New => Step::Reply(self.new_game()),
            Command::Roll => match self.begin_roll() {
                Ok(()) => Step::PromptPins,
                Err(err) => Step::Reply(Reply::Refused(err)),
            },
            Command::Score => Step::Reply(self.score()),
            Command::Status => Step::Reply(self.status()),
            Command::Card => Step::Reply(self.card()),
            Command::Help => Step::Reply(Reply::Help),
            Command::Quit => Step::Quit(Reply::Closing),
        }
    }

    /// Replace any current game with a fresh one.
    pub fn new_game(&mut self) -> Reply {
        if let Some(old) = self.game.as_ref() {
            log::debug!(
                "discarding game at frame {} with score {}",
                old.current_frame(),
                old.score()
            );
        }
        self.game = Some(Game::new());
        self.games_started += 1;
        log::info!("game {} created", self.games_started);
        Reply::GameCreated
    }

    pub fn score(&self) -> Reply {
        match self.current() {
            Ok(game) => Reply::Score(game.score()),
            Err(err) => Reply::Refused(err),
        }
    }

    pub fn status(&self) -> Reply {
        match self.current() {
            Ok(game) => Reply::Status {
                status: game.status(),
                frame: game.current_frame(),
                score: game.score(),
            },
            Err(err) => Reply::Refused(err),
        }
    }

    pub fn card(&self) -> Reply {
        match self.current() {
            Ok(game) => Reply::Card(Box::new(game.snapshot())),
            Err(err) => Reply::Refused(err),
        }
    }

    /// Check that a roll prompt makes sense right now.
    pub fn begin_roll(&self) -> Result<(), SessionError> {
        let game = self.current()?;
        if game.is_finished() {
            return Err(SessionError::AlreadyFinished {
                final_score: game.score(),
            });
        }
        Ok(())
    }

    /// Apply every pin count on `line` in order.
    ///
    /// Stops at the first token that is not an integer or that the game
    /// rejects; balls applied before that stay recorded.
    pub fn roll_line(&mut self, line: &str) -> Vec<Reply> {
        let replies = self.apply_pins(line);
        self.record("pins", line, &replies);
        replies
    }

    fn apply_pins(&mut self, line: &str) -> Vec<Reply> {
        if let Err(err) = self.begin_roll() {
            return vec![Reply::Refused(err)];
        }
        let Some(game) = self.game.as_mut() else {
            return vec![Reply::Refused(SessionError::NoGame)];
        };

        let mut replies = Vec::new();
        for token in parse_pins(line) {
            let pins = match token {
                Ok(pins) => pins,
                Err(err) => {
                    log::debug!("roll line stopped: {err}");
                    replies.push(Reply::BadToken(err));
                    return replies;
                }
            };

            match game.roll(pins) {
                Ok(outcome) => {
                    replies.push(Reply::RollAdded {
                        pins: outcome.pins,
                        frame: outcome.frame,
                    });
                    if outcome.finished {
                        log::info!("game finished with score {}", game.score());
                        replies.push(Reply::GameFinished {
                            score: game.score(),
                        });
                    }
                }
                Err(err) => {
                    log::debug!("roll of {pins} rejected: {err}");
                    replies.push(Reply::RollRejected(err));
                    return replies;
                }
            }
        }

        if replies.is_empty() {
            replies.push(Reply::NoRollValues);
        }
        replies
    }

    fn record(&mut self, command: &str, input: &str, replies: &[Reply]) {
        let Some(transcript) = self.transcript.as_mut() else {
            return;
        };
        let record = TranscriptRecord {
            ts_ms: now_ms(),
            command: command.to_string(),
            input: input.to_string(),
            replies: replies.iter().map(ReplyRecord::from).collect(),
            game: self.game.as_ref().map(Game::snapshot),
        };
        transcript.write(&record);
    }
}

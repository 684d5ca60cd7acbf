//! Poll payload types.
//!
//! See <https://discord.com/developers/docs/resources/poll#poll-create-request-object>.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

/// Discord rejects polls with more answers than this.
pub const MAX_ANSWERS: usize = 10;

/// Longest poll duration Discord accepts, in hours (32 days).
pub const MAX_DURATION_HOURS: u32 = 32 * 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollMedia {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollAnswer {
    pub answer_id: u32,
    pub poll_media: PollMedia,
}

/// A poll to attach to a webhook message.
///
/// Answer ids start at 1 and are handed out by the poll itself, so they are
/// never reused or skipped while the value lives.
#[derive(Debug, Serialize)]
pub struct Poll {
    /// The question of the poll. Only text is supported.
    question: PollMedia,

    /// Each of the answers available in the poll, up to 10.
    answers: Vec<PollAnswer>,

    /// Number of hours the poll should be open for, up to 32 days.
    duration: u32,

    /// Whether a user can select multiple answers.
    allow_multiselect: bool,

    #[serde(skip)]
    last_answer_id: AtomicU32,
}

impl Poll {
    pub fn new(question: impl Into<String>, duration: u32, allow_multiselect: bool) -> Self {
        Self {
            question: PollMedia {
                text: question.into(),
            },
            answers: vec![],
            duration,
            allow_multiselect,
            last_answer_id: AtomicU32::new(0),
        }
    }

    fn next_answer_id(&self) -> u32 {
        self.last_answer_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Append an answer with the next id.
    pub fn add_answer(&mut self, text: impl Into<String>) {
        let answer = PollAnswer {
            answer_id: self.next_answer_id(),
            poll_media: PollMedia { text: text.into() },
        };
        self.answers.push(answer);
    }

    pub fn question(&self) -> &str {
        &self.question.text
    }

    pub fn answers(&self) -> &[PollAnswer] {
        &self.answers
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn allow_multiselect(&self) -> bool {
        self.allow_multiselect
    }
}

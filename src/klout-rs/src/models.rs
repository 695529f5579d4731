use serde::{Deserialize, Serialize};
use std::fmt;

/// ScoreRecord pairs a screen name with its Klout score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub screen_name: String,
    pub score: f64,
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.screen_name, self.score)
    }
}

/// Top-level `{"users": [...]}` shape shared by every endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct UsersEnvelope<T> {
    #[serde(default)]
    pub users: Vec<T>,
}

/// One element of the `klout` endpoint's `users` array
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreEntry {
    pub twitter_screen_name: String,
    pub kscore: f64,
}

impl ScoreEntry {
    pub fn into_record(self) -> ScoreRecord {
        ScoreRecord {
            screen_name: self.twitter_screen_name,
            score: self.kscore,
        }
    }
}

/// An account on either side of an influence edge
#[derive(Debug, Deserialize)]
pub(crate) struct EdgeEntry {
    pub twitter_screen_name: String,
}

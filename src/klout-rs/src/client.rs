use crate::models::{ScoreEntry, ScoreRecord, UsersEnvelope};
use crate::{ClientConfig, ClientError, Result, Transport, User};
use serde_json::Value;
use tracing::warn;

/// One or more screen names, normalized to the comma-joined form the API
/// expects in its `users` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenNames(String);

impl ScreenNames {
    /// Comma-joined value for the `users` parameter
    pub fn as_param(&self) -> &str {
        &self.0
    }
}

fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

impl From<&str> for ScreenNames {
    fn from(names: &str) -> Self {
        Self(names.to_string())
    }
}

impl From<String> for ScreenNames {
    fn from(names: String) -> Self {
        Self(names)
    }
}

impl From<&String> for ScreenNames {
    fn from(names: &String) -> Self {
        Self(names.clone())
    }
}

impl<S: AsRef<str>> From<&[S]> for ScreenNames {
    fn from(names: &[S]) -> Self {
        Self(join_names(names))
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ScreenNames {
    fn from(names: Vec<S>) -> Self {
        Self(join_names(&names))
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ScreenNames {
    fn from(names: [S; N]) -> Self {
        Self(join_names(&names))
    }
}

/// Klout REST API Client
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client for the public API host
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit config
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Transport shared with the users this client creates
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Klout scores for one or more users, in the order the API returns them
    pub async fn scores(&self, users: impl Into<ScreenNames>) -> Result<Vec<ScoreRecord>> {
        let users = users.into();
        let data = self
            .transport
            .get("klout", &[("users", users.as_param())])
            .await?;

        let envelope: UsersEnvelope<ScoreEntry> = serde_json::from_value(data)?;
        Ok(envelope.users.into_iter().map(ScoreEntry::into_record).collect())
    }

    /// Full profiles for one or more users
    ///
    /// A 404 from the API means none of the accounts exist and is reported
    /// as [`ClientError::Account`].
    pub async fn users(&self, users: impl Into<ScreenNames>) -> Result<Vec<User>> {
        let users = users.into();
        let data = self
            .transport
            .get("users/show", &[("users", users.as_param())])
            .await
            .map_err(|e| account_error(e, users.as_param()))?;

        let envelope: UsersEnvelope<Value> = serde_json::from_value(data)?;
        Ok(envelope
            .users
            .into_iter()
            .map(|record| User::from_record(self.transport.clone(), record))
            .collect())
    }

    /// Fetch a single user's profile by screen name
    pub async fn user(&self, name: &str) -> Result<User> {
        User::fetch(self.transport.clone(), name).await
    }
}

/// Downgrade a 404 into an account error naming `users`
pub(crate) fn account_error(err: ClientError, users: &str) -> ClientError {
    if err.is_not_found() {
        warn!("No Klout account for '{}'", users);
        ClientError::Account {
            users: users.to_string(),
        }
    } else {
        err
    }
}

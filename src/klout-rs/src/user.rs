use crate::client::account_error;
use crate::models::{EdgeEntry, UsersEnvelope};
use crate::{ClientError, Result, Transport};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// A single Klout user backed by the JSON record the API returned
///
/// The record never changes after construction. Topics and influence edges
/// are fetched on first access and kept for the lifetime of the value; a
/// failed fetch leaves the cache empty so the next call tries again.
#[derive(Debug)]
pub struct User {
    transport: Transport,
    record: Value,
    topics: OnceCell<Vec<Value>>,
    influencers: OnceCell<Vec<String>>,
    influencees: OnceCell<Vec<String>>,
}

impl User {
    /// Wrap a record already in hand, without touching the network
    pub fn from_record(transport: Transport, record: Value) -> Self {
        Self {
            transport,
            record,
            topics: OnceCell::new(),
            influencers: OnceCell::new(),
            influencees: OnceCell::new(),
        }
    }

    /// Fetch a user's record from `users/show`
    pub async fn fetch(transport: Transport, name: &str) -> Result<Self> {
        let data = transport
            .get("users/show", &[("users", name)])
            .await
            .map_err(|e| account_error(e, name))?;

        let envelope: UsersEnvelope<Value> = serde_json::from_value(data)?;
        let record = envelope
            .users
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Account {
                users: name.to_string(),
            })?;

        Ok(Self::from_record(transport, record))
    }

    /// The raw backing record
    pub fn record(&self) -> &Value {
        &self.record
    }

    /// Look up any top-level field of the backing record
    pub fn lookup(&self, name: &str) -> Result<&Value> {
        self.record
            .get(name)
            .ok_or_else(|| ClientError::AttributeNotFound(name.to_string()))
    }

    fn score_field(&self, name: &str) -> Result<&Value> {
        self.lookup("score")?
            .get(name)
            .ok_or_else(|| ClientError::AttributeNotFound(format!("score.{name}")))
    }

    fn score_f64(&self, name: &str) -> Result<f64> {
        self.score_field(name)?
            .as_f64()
            .ok_or_else(|| ClientError::AttributeNotFound(format!("score.{name}")))
    }

    /// Twitter screen name
    pub fn name(&self) -> Result<&str> {
        self.lookup("twitter_screen_name")?
            .as_str()
            .ok_or_else(|| ClientError::AttributeNotFound("twitter_screen_name".to_string()))
    }

    /// Twitter id; the API sends it as either a number or a numeric string
    pub fn id(&self) -> Result<u64> {
        let id = self.lookup("twitter_id")?;
        id.as_u64()
            .or_else(|| id.as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| ClientError::AttributeNotFound("twitter_id".to_string()))
    }

    /// Composite Klout score
    pub fn klout(&self) -> Result<f64> {
        self.score_f64("kscore")
    }

    /// Number of accounts the user meaningfully influences
    pub fn true_reach(&self) -> Result<i64> {
        self.score_field("true_reach")?
            .as_i64()
            .ok_or_else(|| ClientError::AttributeNotFound("score.true_reach".to_string()))
    }

    /// Amplification component of the score
    pub fn amplification(&self) -> Result<f64> {
        self.score_f64("amplification_score")
    }

    /// Network component of the score
    pub fn network(&self) -> Result<f64> {
        self.score_f64("network_score")
    }

    /// Klout classification label, e.g. "Networker"
    pub fn classification(&self) -> Result<&str> {
        self.score_field("kclass")?
            .as_str()
            .ok_or_else(|| ClientError::AttributeNotFound("score.kclass".to_string()))
    }

    /// Score change over the last day
    pub fn delta_1day(&self) -> Result<f64> {
        self.score_f64("delta_1day")
    }

    /// Score change over the last five days
    pub fn delta_5day(&self) -> Result<f64> {
        self.score_f64("delta_5day")
    }

    /// Topics in which the user is most active
    pub async fn topics(&self) -> Result<&[Value]> {
        let topics = self
            .topics
            .get_or_try_init(|| async move {
                let name = self.name()?;
                let data = self
                    .transport
                    .get("users/topics", &[("users", name)])
                    .await?;

                let envelope: UsersEnvelope<Value> = serde_json::from_value(data)?;
                let topics = match envelope
                    .users
                    .into_iter()
                    .next()
                    .and_then(|mut user| user.get_mut("topics").map(Value::take))
                {
                    Some(Value::Array(topics)) => topics,
                    _ => Vec::new(),
                };

                debug!("Cached {} topics for '{}'", topics.len(), name);
                Ok::<_, ClientError>(topics)
            })
            .await?;

        Ok(topics)
    }

    /// Users who influence this user
    pub async fn influencers(&self) -> Result<&[String]> {
        let edges = self
            .influencers
            .get_or_try_init(|| self.fetch_edges("soi/influenced_by", "influencers"))
            .await?;
        Ok(edges)
    }

    /// Users whom this user influences
    pub async fn influencees(&self) -> Result<&[String]> {
        let edges = self
            .influencees
            .get_or_try_init(|| self.fetch_edges("soi/influencer_of", "influencees"))
            .await?;
        Ok(edges)
    }

    async fn fetch_edges(&self, endpoint: &str, field: &str) -> Result<Vec<String>> {
        let name = self.name()?;

        let data = match self.transport.get(endpoint, &[("users", name)]).await {
            Ok(data) => data,
            Err(e) if e.is_not_found() => {
                warn!("{} has no entry for '{}', treating as no {}", endpoint, name, field);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let envelope: UsersEnvelope<Value> = serde_json::from_value(data)?;
        let Some(mut user) = envelope.users.into_iter().next() else {
            return Ok(Vec::new());
        };

        let edges = match user.get_mut(field).map(Value::take) {
            Some(edges @ Value::Array(_)) => serde_json::from_value::<Vec<EdgeEntry>>(edges)?,
            _ => Vec::new(),
        };

        debug!("Cached {} {} for '{}'", edges.len(), field, name);
        Ok(edges.into_iter().map(|e| e.twitter_screen_name).collect())
    }
}

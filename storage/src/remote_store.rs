//! Remote document-store backend.
//!
//! Each user's history is one document at `/users/<user_key>` under a shared database root,
//! read and replaced through the database's REST surface (`GET`/`PUT {root}/users/{key}.json`).
//! A `null` document means the user has no history yet.

use async_trait::async_trait;
use reflect_core::{InteractionRecord, UserKey};
use reqwest::{Client, Url};
use tracing::{debug, error, info, instrument};

use crate::error::StorageError;
use crate::history_store::HistoryStore;

/// Collection under the database root that holds one document per user.
pub const USERS_COLLECTION: &str = "users";

/// Characters the database does not accept in a path key, plus the escape character itself.
const RESERVED_KEY_CHARS: &[char] = &['.', '$', '#', '[', ']', '%'];

/// Maps a user key to a database path key: each reserved character becomes `%XX`.
///
/// The mapping is injective, so distinct users never share a document. The `%` is itself
/// percent-encoded in the URL, so the database stores the escaped form literally.
pub fn document_key(user: &UserKey) -> String {
    let mut key = String::with_capacity(user.as_str().len());
    for c in user.as_str().chars() {
        if RESERVED_KEY_CHARS.contains(&c) {
            key.push_str(&format!("%{:02X}", c as u32));
        } else {
            key.push(c);
        }
    }
    key
}

#[derive(Debug, Clone)]
pub struct RemoteDocumentStore {
    client: Client,
    root: Url,
    auth: Option<String>,
}

impl RemoteDocumentStore {
    /// Creates a store for the database at `root` (e.g. `https://<project>.firebaseio.com`).
    pub fn new(root: &str, auth: Option<String>) -> Result<Self, StorageError> {
        let root = Url::parse(root)
            .map_err(|e| StorageError::Config(format!("Invalid remote database URL {}: {}", root, e)))?;
        if root.cannot_be_a_base() {
            return Err(StorageError::Config(format!(
                "Remote database URL cannot be a base: {}",
                root
            )));
        }
        let client = Client::builder().build()?;
        info!(root = %root, "Initialized remote document history store");
        Ok(Self { client, root, auth })
    }

    /// REST URL of `user`'s document, including the auth query when configured.
    pub fn user_url(&self, user: &UserKey) -> Result<Url, StorageError> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| StorageError::Config(format!("Remote database URL cannot be a base: {}", self.root)))?
            .pop_if_empty()
            .push(USERS_COLLECTION)
            .push(&format!("{}.json", document_key(user)));
        if let Some(auth) = &self.auth {
            url.query_pairs_mut().append_pair("auth", auth);
        }
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Vec<InteractionRecord>, StorageError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Remote history read failed");
            return Err(StorageError::Remote(format!("GET returned {}: {}", status, body)));
        }
        let bytes = response.bytes().await?;
        let records: Option<Vec<InteractionRecord>> = serde_json::from_slice(&bytes)?;
        Ok(records.unwrap_or_default())
    }
}

#[async_trait]
impl HistoryStore for RemoteDocumentStore {
    #[instrument(skip(self), fields(user = %user))]
    async fn load(&self, user: &UserKey) -> Result<Vec<InteractionRecord>, StorageError> {
        let records = self.fetch(self.user_url(user)?).await?;
        debug!(count = records.len(), "Loaded remote history");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(user = %user))]
    async fn append(&self, user: &UserKey, record: &InteractionRecord) -> Result<(), StorageError> {
        let url = self.user_url(user)?;
        let mut records = self.fetch(url.clone()).await?;
        records.push(record.clone());

        let response = self.client.put(url).json(&records).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Remote history write failed");
            return Err(StorageError::Remote(format!("PUT returned {}: {}", status, body)));
        }
        info!(count = records.len(), "Appended remote record");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

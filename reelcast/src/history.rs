//! History fetch & lookup against an address-scoped indexing endpoint
//! (Helius-style `/v0/addresses/{address}/transactions` queries). The list is
//! small; lookup is a linear scan.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solana_sdk::pubkey::Pubkey;

use crate::error::ClientError;
use crate::utils::shorten;

pub const DEFAULT_INDEXER_URL: &str = "https://api.helius.xyz";

/// Longest value rendered in a detail row before the ellipsis marker.
const DETAIL_VALUE_LEN: usize = 10;

/// One prior transaction as the indexer reports it. Only `signature` is
/// interpreted; everything else is carried opaquely for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub signature: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HistoryEntry {
    /// Detail rows the way the viewer dialog renders them: scalar values
    /// truncated past 10 characters, everything else shown as unavailable.
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![("signature".to_string(), shorten(&self.signature, DETAIL_VALUE_LEN))];
        for (key, value) in &self.fields {
            rows.push((key.clone(), render_value(value)));
        }
        rows
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => shorten(s, DETAIL_VALUE_LEN),
        Value::Number(n) => shorten(&n.to_string(), DETAIL_VALUE_LEN),
        _ => "Not Available".to_string(),
    }
}

/// Find an entry by its transaction signature in a fetched list.
pub fn find_by_signature<'a>(entries: &'a [HistoryEntry], signature: &str) -> Option<&'a HistoryEntry> {
    entries.iter().find(|entry| entry.signature == signature)
}

/// Read-side collaborator for the indexing endpoint.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HistoryClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_INDEXER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn history_url(&self, address: &Pubkey) -> String {
        format!("{}/v0/addresses/{}/transactions?api-key={}", self.base_url, address, self.api_key)
    }

    /// Fetch the ordered list of prior transactions for `address`. On failure
    /// the caller keeps whatever list it already had; nothing partial is
    /// returned.
    pub async fn fetch_history(&self, address: &Pubkey) -> Result<Vec<HistoryEntry>, ClientError> {
        let response = self.http.get(self.history_url(address)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::IndexerStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

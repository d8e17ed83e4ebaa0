use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;

use crate::api::types::{
    Dialog, MessageRecord, ProfileSnapshot, WireDialogsResponse, WireProfile,
};
use crate::config::settings::Settings;

/// Outcome of a profile lookup. An unoccupied username is an expected
/// answer, not an error, so it gets its own variant.
#[derive(Debug)]
pub enum ProfileLookup {
    Found(ProfileSnapshot),
    NotFound,
}

fn build_headers(settings: &Settings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(token) = settings.resolve_token() {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
    }
    Ok(headers)
}

pub async fn fetch_profile(
    client: &reqwest::Client,
    settings: &Settings,
    username: &str,
) -> Result<ProfileLookup> {
    let endpoint = format!(
        "{}/users/{}",
        settings.gateway_url.trim_end_matches('/'),
        username
    );

    let resp = client
        .get(&endpoint)
        .headers(build_headers(settings)?)
        .send()
        .await
        .map_err(|e| anyhow!("Network error: {}", e))?;

    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(ProfileLookup::NotFound);
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(anyhow!("Gateway error {}: {}", status, text));
    }

    let wire: WireProfile = resp.json().await?;
    tracing::debug!(id = wire.id, "fetched profile snapshot");
    Ok(ProfileLookup::Found(wire.into()))
}

pub async fn fetch_dialogs(
    client: &reqwest::Client,
    settings: &Settings,
    limit: u32,
) -> Result<(Vec<Dialog>, Vec<MessageRecord>)> {
    let endpoint = format!(
        "{}/dialogs?limit={}",
        settings.gateway_url.trim_end_matches('/'),
        limit
    );

    let resp = client
        .get(&endpoint)
        .headers(build_headers(settings)?)
        .send()
        .await
        .map_err(|e| anyhow!("Network error: {}", e))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(anyhow!("Gateway error {}: {}", status, text));
    }

    let body: WireDialogsResponse = resp.json().await?;
    let dialogs = body
        .dialogs
        .into_iter()
        .map(|d| Dialog {
            peer: d.peer.into(),
            name: d.name,
            unread: d.unread,
        })
        .collect::<Vec<_>>();
    let messages = body
        .messages
        .into_iter()
        .map(|m| MessageRecord {
            peer: m.peer.into(),
            text: m.text,
        })
        .collect::<Vec<_>>();
    tracing::debug!(
        dialogs = dialogs.len(),
        messages = messages.len(),
        "fetched dialog window"
    );
    Ok((dialogs, messages))
}

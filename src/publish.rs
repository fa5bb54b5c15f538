use std::path::Path;

use anyhow::Context;
use reqwest::blocking::multipart::Form;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaId(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostId(pub String);

/// Social account the finished post goes to.
pub trait Publisher {
    fn upload_media(&self, path: &Path) -> Result<MediaId>;
    fn post(&self, text: &str, media: Option<&MediaId>) -> Result<PostId>;
}

#[derive(Deserialize)]
struct Envelope {
    data: IdOnly,
}

#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

/// X API v2 client authenticated with an OAuth 2.0 user bearer token.
pub struct XClient {
    client: reqwest::blocking::Client,
    api_base: String,
    token: String,
}

impl XClient {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let token = config
            .bearer_token
            .clone()
            .context("X_BEARER_TOKEN required")?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.http_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/2/{}", self.api_base, path)
    }

    fn read_id(resp: reqwest::blocking::Response, what: &str) -> Result<String> {
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| Error::Publish(format!("{}: failed to read response: {}", what, e)))?;
        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            return Err(Error::Publish(format!("{}: HTTP {}: {}", what, status, snippet)));
        }
        parse_id(&text).map_err(|e| Error::Publish(format!("{}: {}", what, e)))
    }
}

fn parse_id(body: &str) -> std::result::Result<String, serde_json::Error> {
    serde_json::from_str::<Envelope>(body).map(|env| env.data.id)
}

impl Publisher for XClient {
    fn upload_media(&self, path: &Path) -> Result<MediaId> {
        let form = Form::new()
            .text("media_category", "tweet_image")
            .file("media", path)
            .map_err(|e| Error::io(path, e))?;

        let resp = self
            .client
            .post(self.endpoint("media/upload"))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .map_err(|e| Error::Publish(format!("media upload request failed: {}", e)))?;

        let id = Self::read_id(resp, "media upload")?;
        info!(media_id = %id, "media uploaded");
        Ok(MediaId(id))
    }

    fn post(&self, text: &str, media: Option<&MediaId>) -> Result<PostId> {
        let mut body = json!({ "text": text });
        if let Some(media) = media {
            body["media"] = json!({ "media_ids": [media.0] });
        }

        let resp = self
            .client
            .post(self.endpoint("tweets"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| Error::Publish(format!("post request failed: {}", e)))?;

        let id = Self::read_id(resp, "post")?;
        info!(post_id = %id, "post created");
        Ok(PostId(id))
    }
}

/// Logs instead of publishing.
pub struct DryRunPublisher;

impl Publisher for DryRunPublisher {
    fn upload_media(&self, path: &Path) -> Result<MediaId> {
        if !path.exists() {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "artifact missing"),
            ));
        }
        info!(path = %path.display(), "dry run: skipping media upload");
        Ok(MediaId("dry-run-media".to_string()))
    }

    fn post(&self, text: &str, media: Option<&MediaId>) -> Result<PostId> {
        info!(
            text,
            media = media.map(|m| m.0.as_str()).unwrap_or("none"),
            "dry run: skipping post"
        );
        Ok(PostId("dry-run".to_string()))
    }
}

use std::fmt;
use std::path::PathBuf;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::bio::extract::{extract_image_url, extract_position, parse_document};
use crate::bio::image::retrieve_image;
use crate::bio::{fetch_page, Transport};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::message::format_post;
use crate::players::normalize::normalize;
use crate::players::types::PlayerProfile;
use crate::players::RecordStore;
use crate::publish::{MediaId, PostId, Publisher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Select,
    Normalize,
    Fetch,
    Extract,
    RetrieveImage,
    Publish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Select => "select",
            Stage::Normalize => "normalize",
            Stage::Fetch => "fetch",
            Stage::Extract => "extract",
            Stage::RetrieveImage => "retrieve_image",
            Stage::Publish => "publish",
        };
        f.write_str(name)
    }
}

/// What a failed stage does to the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Log, then carry on with whatever stages still have their input.
    Continue,
}

#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub profile: Option<PlayerProfile>,
    pub text: Option<String>,
    /// Set only when this run wrote the artifact.
    pub artifact: Option<PathBuf>,
    pub media_id: Option<MediaId>,
    pub post_id: Option<PostId>,
    pub failures: Vec<(Stage, String)>,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    transport: &'a dyn Transport,
    publisher: &'a dyn Publisher,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        transport: &'a dyn Transport,
        publisher: &'a dyn Publisher,
    ) -> Self {
        Self {
            config,
            transport,
            publisher,
        }
    }

    /// Apply the failure policy to one stage result.
    fn settle<T>(
        &self,
        stage: Stage,
        report: &mut RunReport,
        result: Result<T>,
    ) -> std::result::Result<Option<T>, StageError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(source) => match self.config.failure_policy {
                FailurePolicy::Abort => Err(StageError { stage, source }),
                FailurePolicy::Continue => {
                    error!(stage = %stage, kind = %source.kind(), "{}", source);
                    report.failures.push((stage, source.to_string()));
                    Ok(None)
                }
            },
        }
    }

    /// One full run: load, pick, enrich, format, publish.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> std::result::Result<RunReport, StageError> {
        let mut report = RunReport::default();

        let loaded = RecordStore::load(&self.config.dataset_path);
        let Some(store) = self.settle(Stage::Load, &mut report, loaded)? else {
            warn!("no dataset, skipping remaining stages");
            return Ok(report);
        };
        if store.is_empty() {
            warn!(path = %self.config.dataset_path.display(), "dataset is empty");
        }
        info!(records = store.len(), path = %self.config.dataset_path.display(), "player list created");

        let chosen = store.choose(rng);
        let Some(record) = self.settle(Stage::Select, &mut report, chosen)? else {
            warn!("no record selected, skipping remaining stages");
            return Ok(report);
        };
        info!(reference_id = record.reference_id(), "record selected");
        debug!(fields = ?record.fields(), "record fields");

        let normalized = normalize(record, &self.config.base_url, &self.config.page_ext);
        let Some(mut profile) = self.settle(Stage::Normalize, &mut report, normalized)? else {
            warn!("record could not be normalized, skipping remaining stages");
            return Ok(report);
        };
        info!(
            name = %profile.full_name(),
            born = %format!("{} {} {}", profile.birth_year, profile.birth_month, profile.birth_day),
            reference_id = %profile.reference_id,
            url = %profile.profile_url,
            "player profile"
        );

        let fetched = fetch_page(self.transport, &profile.profile_url).and_then(|resp| {
            if resp.is_success() {
                Ok(resp)
            } else {
                Err(Error::Status {
                    url: profile.profile_url.clone(),
                    status: resp.status,
                })
            }
        });
        let page = self.settle(Stage::Fetch, &mut report, fetched)?;

        if let Some(page) = page {
            let document = parse_document(&page.text());

            let image = self.settle(Stage::Extract, &mut report, extract_image_url(&document))?;
            profile.image_url = image.flatten();
            match &profile.image_url {
                Some(url) => info!(url = %url, "image found"),
                None => info!("no image found"),
            }

            let position = self.settle(Stage::Extract, &mut report, extract_position(&document))?;
            profile.position = position.filter(|p| !p.is_empty());
            debug!(position = ?profile.position, "position extracted");
        } else {
            warn!("no biography page, skipping extraction");
        }

        let artifact = &self.config.artifact_path;
        let retrieved = retrieve_image(self.transport, profile.image_url.as_deref(), artifact);
        if let Some(true) = self.settle(Stage::RetrieveImage, &mut report, retrieved)? {
            report.artifact = Some(artifact.clone());
        }

        let text = format_post(&profile);
        info!(text = %text, "post text");
        report.text = Some(text.clone());
        report.profile = Some(profile);

        if let Some(path) = report.artifact.clone() {
            let uploaded = self.publisher.upload_media(&path);
            report.media_id = self.settle(Stage::Publish, &mut report, uploaded)?;
            if report.media_id.is_some() {
                info!("media upload successful");
            }
        }

        let posted = self.publisher.post(&text, report.media_id.as_ref());
        report.post_id = self.settle(Stage::Publish, &mut report, posted)?;
        if let Some(id) = &report.post_id {
            info!(post_id = %id.0, "post successful");
        }

        Ok(report)
    }
}

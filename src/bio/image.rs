use std::fs;
use std::path::Path;

use tracing::info;

use super::Transport;
use crate::error::{Error, Result};

/// Download the portrait to `dest`, replacing whatever is there.
///
/// Returns `Ok(false)` without touching the network when there is no URL.
/// Non-2xx responses are rejected so an error page never lands in the artifact.
pub fn retrieve_image(
    transport: &dyn Transport,
    image_url: Option<&str>,
    dest: &Path,
) -> Result<bool> {
    let Some(url) = image_url.filter(|u| !u.trim().is_empty()) else {
        return Ok(false);
    };

    let resp = transport.get(url)?;
    if !resp.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: resp.status,
        });
    }

    fs::write(dest, &resp.body).map_err(|e| Error::io(dest, e))?;
    info!(url, path = %dest.display(), size = resp.body.len(), "image downloaded");
    Ok(true)
}

use std::path::Path;

use eyre::WrapErr;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::data::ImageCollection;

pub struct Uploader {
    client: Client,
}

#[derive(Debug)]
pub struct UploadResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl UploadResponse {
    pub fn json(&self) -> eyre::Result<Value> {
        serde_json::from_slice(&self.body)
            .wrap_err_with(|| format!("the server answered {} without a json body", self.status))
    }
}

impl Uploader {
    /// The client has no timeout: a server that never answers blocks the run.
    pub fn new() -> eyre::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Sends the whole collection as one json object and waits for the full
    /// body. The status code is only logged, the body is returned either way.
    pub async fn post(&self, url: &Url, images: &ImageCollection) -> eyre::Result<UploadResponse> {
        let payload = serde_json::to_vec(images)?;
        log::info!("posting {} images ({} bytes) to {}", images.len(), payload.len(), url);
        let req = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/plain")
            .body(payload)
            .build()?;
        let result = self
            .client
            .execute(req)
            .await
            .wrap_err_with(|| format!("fail to post to {}", url))?;
        let status = result.status();
        if status.is_success() {
            log::info!("server answered {}", status);
        } else {
            log::warn!("server answered {}", status);
        }
        let body = result.bytes().await?;
        Ok(UploadResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Writes `value` with 4-space indentation and literal non-ascii text,
/// replacing whatever is at `path`.
pub async fn write_response(path: &Path, value: &Value) -> eyre::Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    tokio::fs::write(path, buf)
        .await
        .wrap_err_with(|| format!("fail to write the response to {:?}", path))?;
    log::info!("response saved to {:?}", path);
    Ok(())
}

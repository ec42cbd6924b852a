//! Item endpoints

use crate::TimesideClient;
use crate::error::Result;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use std::path::Path;
use timeside_core::domain::item::{Item, ItemSource};
use timeside_core::dto::item::CreateItem;
use tokio_util::io::ReaderStream;
use tracing::debug;

impl TimesideClient {
    /// Create an item
    ///
    /// Provider and URL sources are sent as JSON and fetched by the server.
    /// Local files are streamed from disk in a multipart upload; the file is
    /// only opened here, when the request is built.
    pub async fn create_item(&self, req: &CreateItem) -> Result<Item> {
        let builder = self.request(Method::POST, "/items/");

        let builder = if let ItemSource::LocalFile { path } = &req.source {
            builder.multipart(upload_form(req, path).await?)
        } else {
            builder.json(&req.json_body())
        };

        let response = builder.send().await?;
        self.handle_response(response).await
    }
}

/// Multipart body streaming `path` as the `source_file` part
async fn upload_form(req: &CreateItem, path: &Path) -> Result<Form> {
    let file = tokio::fs::File::open(path).await?;
    let length = file.metadata().await?.len();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "source".to_string());

    debug!(path = %path.display(), length, "Streaming media file");

    let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), length)
        .file_name(file_name);

    Ok(Form::new()
        .text("title", req.title.clone())
        .text("description", req.description.clone())
        .part("source_file", part))
}

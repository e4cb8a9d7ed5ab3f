use bytes::Bytes;
use reqwest::multipart;
use reqwest::{Client, Response};

use crate::error::ApiError;
use crate::models::promotion::{ErrorBody, ErrorDetail, Promotion};

/// REST client for the promotions backend. One instance per page; calls are
/// independent, carry no cancellation token, and are never retried.
pub struct PromotionsApi {
    http: Client,
    base_url: String,
}

impl PromotionsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/promotions", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/promotions/{}", self.base_url, id)
    }

    /// Fetch the full collection, in server order.
    pub async fn list(&self) -> Result<Vec<Promotion>, ApiError> {
        let response = self.http.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Create a promotion from native form contents (multipart).
    pub async fn create(&self, form: FormData) -> Result<Promotion, ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .multipart(form.into_multipart()?)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Update one promotion from native form contents (multipart).
    pub async fn update(&self, id: i64, form: FormData) -> Result<Promotion, ApiError> {
        let response = self
            .http
            .put(self.item_url(id))
            .multipart(form.into_multipart()?)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Delete one promotion. Success body is ignored.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}

/// Recover structured `detail` from a non-2xx response; an unreadable or
/// shapeless body degrades to the generic message.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => ErrorDetail::Message("Unknown error".into()),
    };
    ApiError::Status { status, detail }
}

/// Contents of a submitted form: ordered fields, text or file, exactly as the
/// form widget collected them. No re-validation happens on this side.
#[derive(Debug, Default, Clone)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File {
        filename: String,
        content_type: String,
        bytes: Bytes,
    },
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Attach a file field. When the widget did not report a content type it
    /// is guessed from the filename, falling back to octet-stream.
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: Option<&str>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let filename = filename.into();
        let content_type = content_type
            .map(str::to_owned)
            .unwrap_or_else(|| {
                mime_guess::from_path(&filename)
                    .first_or(mime::APPLICATION_OCTET_STREAM)
                    .to_string()
            });
        self.fields.push((
            name.into(),
            FormValue::File {
                filename,
                content_type,
                bytes: bytes.into(),
            },
        ));
        self
    }

    fn into_multipart(self) -> Result<multipart::Form, reqwest::Error> {
        let mut form = multipart::Form::new();
        for (name, value) in self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File {
                    filename,
                    content_type,
                    bytes,
                } => {
                    let part = multipart::Part::stream(bytes)
                        .file_name(filename)
                        .mime_str(&content_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

//! HTTP service submitting a draft to the ad generation endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{generate_url, DESCRIPTION_FIELD, IMAGE_FIELD};
use crate::types::{ErrorBody, GenerateError, GeneratedContent};

/// Send the description and images as one multipart POST.
///
/// No retry and no timeout: the future resolves when the browser does.
pub async fn generate_ad(
    description: &str,
    images: &[File],
    api_base: &str,
) -> Result<GeneratedContent, GenerateError> {
    let form_data = FormData::new()
        .map_err(|e| GenerateError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_str(DESCRIPTION_FIELD, description)
        .map_err(|e| GenerateError::Request(format!("Failed to append description: {:?}", e)))?;

    for image in images {
        form_data
            .append_with_blob(IMAGE_FIELD, image)
            .map_err(|e| GenerateError::Request(format!("Failed to append image: {:?}", e)))?;
    }

    let url = generate_url(api_base);
    log::info!("📤 Generating ad copy ({} images) via {}", images.len(), url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| GenerateError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| GenerateError::Transport(e.to_string()))?;

    let body = response.text().await.ok();
    interpret_response(response.status(), body.as_deref())
}

/// Turn a status code and raw body into the request outcome.
///
/// `body` is `None` when it could not be read at all.
pub fn interpret_response(status: u16, body: Option<&str>) -> Result<GeneratedContent, GenerateError> {
    if !(200..300).contains(&status) {
        let message = body
            .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
            .and_then(|error| error.message);
        return Err(GenerateError::Server { status, message });
    }

    let text = body.ok_or_else(|| GenerateError::Parse("Response body unreadable".to_string()))?;
    serde_json::from_str::<GeneratedContent>(text).map_err(|e| GenerateError::Parse(e.to_string()))
}

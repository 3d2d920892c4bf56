use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use headshot_studio_application::{SynthesisError, SynthesisService};
use headshot_studio_domain::EncodedImage;
use reqwest::blocking::Client as HttpClient;
use serde_json::{json, Value};
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Synthesis over the Generative Language `generateContent` REST shape.
/// Single-shot: no retry, no timeout override, per the workflow's
/// simplicity boundary.
pub struct GeminiSynthesisService {
    api_base: String,
    api_key: String,
    model: String,
    http: HttpClient,
}

impl GeminiSynthesisService {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            http: HttpClient::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn invoke(
        &self,
        image: &EncodedImage,
        instruction: &str,
    ) -> Result<EncodedImage, SynthesisError> {
        let payload = build_payload(image, instruction);
        let endpoint = self.endpoint();
        debug!(%endpoint, input_bytes = image.byte_count(), "issuing synthesis request");

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .map_err(|error| SynthesisError::new(format!("transport failure: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SynthesisError::new(format!(
                "api returned {status}: {}",
                truncate(&body, 200)
            )));
        }

        let body: Value = response
            .json()
            .map_err(|error| SynthesisError::new(format!("malformed response body: {error}")))?;
        extract_result_image(&body)
    }
}

impl SynthesisService for GeminiSynthesisService {
    fn generate(
        &self,
        source: &EncodedImage,
        style_instruction: &str,
    ) -> Result<EncodedImage, SynthesisError> {
        self.invoke(source, style_instruction)
    }

    fn edit(
        &self,
        current: &EncodedImage,
        edit_instruction: &str,
    ) -> Result<EncodedImage, SynthesisError> {
        self.invoke(current, edit_instruction)
    }
}

fn build_payload(image: &EncodedImage, instruction: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                {
                    "inline_data": {
                        "mime_type": image.mime_type(),
                        "data": BASE64.encode(image.bytes()),
                    }
                },
                { "text": instruction },
            ],
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE"],
        },
    })
}

fn extract_result_image(payload: &Value) -> Result<EncodedImage, SynthesisError> {
    let candidates = payload
        .get("candidates")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    for candidate in candidates {
        let parts = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        for part in parts {
            let Some(inline) = part
                .get("inlineData")
                .or_else(|| part.get("inline_data"))
                .and_then(Value::as_object)
            else {
                continue;
            };
            let data = inline
                .get("data")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if data.is_empty() {
                continue;
            }
            let bytes = BASE64
                .decode(data.as_bytes())
                .map_err(|error| SynthesisError::new(format!("image base64 decode failed: {error}")))?;
            let mime_type = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            return EncodedImage::new(mime_type, bytes).map_err(|error| {
                SynthesisError::new(format!("api returned an unusable image: {error}"))
            });
        }
    }

    Err(SynthesisError::new("no image data in response"))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> EncodedImage {
        EncodedImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]).expect("sample image")
    }

    #[test]
    fn payload_carries_inline_image_then_instruction() {
        let payload = build_payload(&sample_image(), "Add a blue tie");

        let parts = &payload["contents"][0]["parts"];
        assert_eq!(
            parts[0]["inline_data"]["mime_type"],
            Value::from("image/jpeg")
        );
        assert_eq!(
            parts[0]["inline_data"]["data"],
            Value::from(BASE64.encode([0xFF, 0xD8, 0xFF]))
        );
        assert_eq!(parts[1]["text"], Value::from("Add a blue tie"));
        assert_eq!(
            payload["generationConfig"]["responseModalities"][0],
            Value::from("IMAGE")
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash_from_base() {
        let service = GeminiSynthesisService::new(
            "https://example.test/v1beta/",
            "key",
            "some-model",
        );
        assert_eq!(
            service.endpoint(),
            "https://example.test/v1beta/models/some-model:generateContent"
        );
    }

    #[test]
    fn extracts_camel_case_inline_data() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here you go" },
                        {
                            "inlineData": {
                                "mimeType": "image/png",
                                "data": BASE64.encode([1, 2, 3]),
                            }
                        },
                    ]
                }
            }]
        });

        let image = extract_result_image(&body).expect("image");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn extracts_snake_case_inline_data_with_default_mime() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inline_data": { "data": BASE64.encode([9]) } }]
                }
            }]
        });

        let image = extract_result_image(&body).expect("image");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.bytes(), &[9]);
    }

    #[test]
    fn missing_image_data_is_a_synthesis_error() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "no image, sorry" }] }
            }]
        });
        let error = extract_result_image(&body).expect_err("should fail");
        assert!(error.detail().contains("no image data"));

        let empty = json!({});
        assert!(extract_result_image(&empty).is_err());
    }

    #[test]
    fn invalid_base64_is_a_synthesis_error() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "data": "not!!base64" } }]
                }
            }]
        });
        let error = extract_result_image(&body).expect_err("should fail");
        assert!(error.detail().contains("base64"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("ok", 200), "ok");
    }
}

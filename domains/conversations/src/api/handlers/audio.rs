//! Audio upload stub
//!
//! Accepts the upload and acknowledges it; speech-to-text processing is
//! out of scope.

use axum::{extract::Multipart, Json};
use medbridge_common::{Error, Result};
use serde::Serialize;

/// Response for the audio upload stub
#[derive(Debug, Serialize)]
pub struct AudioUploadResponse {
    pub message: String,
    pub filename: Option<String>,
    pub status: String,
}

/// Accept an audio upload without processing it
pub async fn upload_audio(mut multipart: Multipart) -> Result<Json<AudioUploadResponse>> {
    let mut filename = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Invalid multipart body: {}", e)))?
    {
        if let Some(name) = field.file_name() {
            filename = Some(name.to_string());
            break;
        }
    }

    Ok(Json(AudioUploadResponse {
        message: "Audio upload received. Speech-to-text processing is not implemented.".to_string(),
        filename,
        status: "stub".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_response_serialization() {
        let response = AudioUploadResponse {
            message: "Audio upload received.".to_string(),
            filename: Some("visit.wav".to_string()),
            status: "stub".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["filename"], "visit.wav");
        assert_eq!(json["status"], "stub");
    }
}

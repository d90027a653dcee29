//! Wire format of the remote file store's `/files` endpoint.
//!
//! The listing response nests the three category sequences inside a
//! `responseData` envelope; the delete request carries the target path as
//! `filePath`. Field renames keep the Rust types idiomatic while matching the
//! server's JSON keys exactly.

use serde::{Deserialize, Serialize};

use crate::domain::ListingSnapshot;

/// Envelope around the categorized listing in a `GET /files` response.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingEnvelope {
    #[serde(rename = "responseData")]
    pub response_data: ListingSnapshot,
}

/// Body of a `DELETE /files` request.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteRequest<'a> {
    #[serde(rename = "filePath")]
    pub file_path: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_envelope_parses_response_data() {
        let body = r#"{
            "responseData": {
                "images": ["photos/cat.jpg", "photos/dog.png"],
                "videos": ["clips/intro.mp4"],
                "files": ["docs/manual.pdf"]
            }
        }"#;
        let envelope: ListingEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.response_data.images,
            ["photos/cat.jpg", "photos/dog.png"]
        );
        assert_eq!(envelope.response_data.videos, ["clips/intro.mp4"]);
        assert_eq!(envelope.response_data.files, ["docs/manual.pdf"]);
    }

    #[test]
    fn delete_request_uses_file_path_key() {
        let body = serde_json::to_string(&DeleteRequest {
            file_path: "docs/manual.pdf",
        })
        .unwrap();
        assert_eq!(body, r#"{"filePath":"docs/manual.pdf"}"#);
    }
}

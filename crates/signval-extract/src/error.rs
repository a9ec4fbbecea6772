use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The OCR collaborator reported zero detections for the image.
    #[error("no text detected in image")]
    NoTextDetected,
}

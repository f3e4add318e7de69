/// Failures at the JavaScript boundary of the footer bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_wasm_bindgen::Error),
    #[error("Document unavailable")]
    NoDocument,
    #[error("Mount root not found: #{0}")]
    MissingRoot(String),
}

/// Everything that can go wrong on this page boils down to "something we
/// expected is not there". Components log these and switch themselves off.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    #[error("Required element missing: {0}")]
    MissingElement(&'static str),

    #[error("Browser window is not available")]
    MissingWindow,

    #[error("Local storage unavailable: {0}")]
    Storage(String),

    #[error("Catalog data invalid: {0}")]
    Catalog(String),
}

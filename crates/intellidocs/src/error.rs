#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Empty required input, caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// Transport or non-2xx failure, collapsed to a fixed message.
    #[error("{0}")]
    Network(String),
}

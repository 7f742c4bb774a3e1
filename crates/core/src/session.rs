use crate::format::FormatRequest;
use crate::readme::{build_parts, PartSpec, UploadFile};

/// Local failures that stop a request before any network activity.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter some text to format.")]
    EmptyText,

    #[error("Provide a repository URL, an archive, or at least one file.")]
    NoReadmeSource,

    #[error("A request is already in flight.")]
    RequestInFlight,
}

/// Request-scoped client state, one per invocation.
///
/// Explicit setters stage the inputs; `begin_*` validates them and either
/// fails locally or transitions into the loading state and yields what the
/// shell needs to issue the request. `complete_*` and `fail` close the
/// lifecycle. `is_loading` is true strictly between a successful `begin_*`
/// and its `complete_*`/`fail`.
#[derive(Debug, Default)]
pub struct Session {
    raw_text: String,
    formatted_text: Option<String>,
    repo_url: Option<String>,
    zip_file: Option<UploadFile>,
    uploaded_files: Vec<UploadFile>,
    readme_content: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    pub fn set_repo_url(&mut self, url: impl Into<String>) {
        self.repo_url = Some(url.into());
    }

    pub fn set_zip_file(&mut self, file: UploadFile) {
        self.zip_file = Some(file);
    }

    pub fn add_file(&mut self, file: UploadFile) {
        self.uploaded_files.push(file);
    }

    pub fn formatted_text(&self) -> Option<&str> {
        self.formatted_text.as_deref()
    }

    pub fn readme_content(&self) -> Option<&str> {
        self.readme_content.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a formatting request.
    ///
    /// Empty or whitespace-only text fails locally: the error is recorded,
    /// no loading transition happens, and no wire request is produced.
    pub fn begin_format(&mut self) -> Result<FormatRequest, SessionError> {
        if self.is_loading {
            return Err(SessionError::RequestInFlight);
        }
        if self.raw_text.trim().is_empty() {
            self.error = Some(SessionError::EmptyText.to_string());
            return Err(SessionError::EmptyText);
        }

        self.error = None;
        self.formatted_text = None;
        self.is_loading = true;

        Ok(FormatRequest {
            text: self.raw_text.clone(),
        })
    }

    pub fn complete_format(&mut self, formatted_text: String) {
        self.formatted_text = Some(formatted_text);
        self.is_loading = false;
    }

    /// Start a README generation request.
    ///
    /// Requires at least one source: a non-blank repository URL, an
    /// archive, or an uploaded file. Yields the multipart parts in the
    /// order the backend expects them.
    pub fn begin_readme(&mut self) -> Result<Vec<PartSpec>, SessionError> {
        if self.is_loading {
            return Err(SessionError::RequestInFlight);
        }
        let no_url = self
            .repo_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty());
        if no_url && self.zip_file.is_none() && self.uploaded_files.is_empty() {
            self.error = Some(SessionError::NoReadmeSource.to_string());
            return Err(SessionError::NoReadmeSource);
        }

        self.error = None;
        self.readme_content = None;
        self.is_loading = true;

        Ok(build_parts(
            self.repo_url.as_deref(),
            self.zip_file.as_ref(),
            &self.uploaded_files,
        ))
    }

    pub fn complete_readme(&mut self, readme_content: String) {
        self.readme_content = Some(readme_content);
        self.is_loading = false;
    }

    /// Record a failed request with its fixed user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }
}

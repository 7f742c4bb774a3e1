use serde::{Deserialize, Serialize};

/// A file staged for upload. The shell reads it into memory before the
/// request is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Response body from `POST /generate-readme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeResponse {
    pub readme_content: String,
}

/// Fixed user-facing message for a failed README generation request.
pub const README_FAILED: &str =
    "Failed to generate README. Check that the backend is running and try again.";

/// One part of the multipart `generate-readme` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSpec {
    pub name: String,
    pub body: PartBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File {
        filename: String,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}

impl PartSpec {
    fn text(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            body: PartBody::Text(value),
        }
    }

    fn file(name: &str, file: &UploadFile) -> Self {
        Self {
            name: name.to_string(),
            body: PartBody::File {
                filename: file.name.clone(),
                mime: mime_from_extension(&file.name),
                bytes: file.bytes.clone(),
            },
        }
    }
}

/// Describe the multipart body for a README generation request.
///
/// Field names are the ones the backend reads: `repo_url`, `zip_file`, and
/// one `files` part per uploaded file, in upload order. A blank URL is
/// treated as absent.
pub fn build_parts(
    repo_url: Option<&str>,
    zip_file: Option<&UploadFile>,
    files: &[UploadFile],
) -> Vec<PartSpec> {
    let mut parts = Vec::new();

    if let Some(url) = repo_url {
        if !url.trim().is_empty() {
            parts.push(PartSpec::text("repo_url", url.trim().to_string()));
        }
    }

    if let Some(zip) = zip_file {
        parts.push(PartSpec::file("zip_file", zip));
    }

    for file in files {
        parts.push(PartSpec::file("files", file));
    }

    parts
}

/// Infer a MIME type from the file extension.
pub fn mime_from_extension(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    match ext.as_str() {
        "md" => "text/markdown",
        "txt" | "rs" | "py" | "go" | "java" | "rb" | "c" | "h" | "cpp" => "text/plain",
        "js" => "application/javascript",
        "ts" => "application/typescript",
        "json" => "application/json",
        "toml" | "yaml" | "yml" | "ini" | "cfg" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "xml" => "application/xml",
        "csv" => "text/csv",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadFile {
        UploadFile::new(name, b"contents".to_vec())
    }

    #[test]
    fn test_build_parts_url_only() {
        let parts = build_parts(Some("https://github.com/a/b"), None, &[]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "repo_url");
        assert_eq!(
            parts[0].body,
            PartBody::Text("https://github.com/a/b".to_string())
        );
    }

    #[test]
    fn test_build_parts_trims_url() {
        let parts = build_parts(Some("  https://github.com/a/b  "), None, &[]);

        assert_eq!(
            parts[0].body,
            PartBody::Text("https://github.com/a/b".to_string())
        );
    }

    #[test]
    fn test_build_parts_blank_url_is_absent() {
        let parts = build_parts(Some("   "), None, &[file("main.rs")]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "files");
    }

    #[test]
    fn test_build_parts_files_keep_order() {
        let files = vec![file("Cargo.toml"), file("src/main.rs"), file("README.md")];

        let parts = build_parts(None, None, &files);

        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.name == "files"));
        let names: Vec<&str> = parts
            .iter()
            .map(|p| match &p.body {
                PartBody::File { filename, .. } => filename.as_str(),
                PartBody::Text(_) => unreachable!(),
            })
            .collect();
        assert_eq!(names, vec!["Cargo.toml", "src/main.rs", "README.md"]);
    }

    #[test]
    fn test_build_parts_zip_field_name() {
        let zip = file("project.zip");

        let parts = build_parts(None, Some(&zip), &[]);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "zip_file");
        match &parts[0].body {
            PartBody::File { mime, .. } => assert_eq!(*mime, "application/zip"),
            PartBody::Text(_) => unreachable!(),
        }
    }

    #[test]
    fn test_build_parts_url_comes_first() {
        let files = vec![file("main.py")];

        let parts = build_parts(Some("https://github.com/a/b"), None, &files);

        assert_eq!(parts[0].name, "repo_url");
        assert_eq!(parts[1].name, "files");
    }

    #[test]
    fn test_build_parts_empty_input_yields_no_parts() {
        assert!(build_parts(None, None, &[]).is_empty());
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension("notes.md"), "text/markdown");
        assert_eq!(mime_from_extension("app.py"), "text/plain");
        assert_eq!(mime_from_extension("package.json"), "application/json");
        assert_eq!(mime_from_extension("archive.ZIP"), "application/zip");
        assert_eq!(mime_from_extension("Makefile"), "application/octet-stream");
    }

    #[test]
    fn test_readme_response_parses_backend_payload() {
        let payload = r##"{ "readme_content": "# My Project" }"##;

        let response: ReadmeResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(response.readme_content, "# My Project");
    }
}

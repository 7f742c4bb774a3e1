use std::path::{Path, PathBuf};

use intellidocs_core::readme::{PartBody, PartSpec, ReadmeResponse, UploadFile, README_FAILED};
use intellidocs_core::session::Session;

use crate::prelude::{println, *};
use crate::{api, clipboard, render};

/// Options for the README generator
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadmeOptions {
    /// Project files to upload for analysis
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Public Git repository URL to analyze
    #[arg(short = 'r', long)]
    pub repo_url: Option<String>,

    /// Upload a project archive instead of individual files
    #[arg(long, conflicts_with = "files")]
    pub zip: Option<PathBuf>,

    /// Print the returned Markdown without terminal styling
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the returned Markdown to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

pub async fn run(options: ReadmeOptions, global: crate::Global) -> Result<()> {
    // Validate all paths before reading anything.
    for path in options.files.iter().chain(options.zip.iter()) {
        if !path.is_file() {
            return Err(eyre!("File not found: {}", path.display()));
        }
    }

    let mut session = Session::new();

    if let Some(url) = &options.repo_url {
        session.set_repo_url(url.clone());
    }
    if let Some(path) = &options.zip {
        session.set_zip_file(read_upload(path).await?);
    }
    for path in &options.files {
        session.add_file(read_upload(path).await?);
    }

    let parts = match session.begin_readme() {
        Ok(parts) => parts,
        Err(err) => return Err(Error::Validation(err.to_string()).into()),
    };

    if global.verbose {
        println!("POST {}", api::endpoint(&global.api_base, "generate-readme"));
        println!("{} part(s) in request body", parts.len());
    }

    let spinner = request_spinner("Generating README...");
    let result = generate_readme_data(&global.api_base, parts).await;
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            log::error!("generate-readme request failed: {err:#}");
            session.fail(README_FAILED);
            return Err(Error::Network(README_FAILED.to_string()).into());
        }
    };

    session.complete_readme(response.readme_content);
    let readme = session.readme_content().unwrap_or_default().to_string();

    if options.json {
        println!("{}", readme_json(&readme)?);
    } else {
        println!("{}", display_text(&readme, options.raw).trim_end_matches('\n'));
    }

    if options.copy {
        clipboard::copy_confirmed(&readme);
    }

    Ok(())
}

/// Send the multipart generation request and parse the response.
pub async fn generate_readme_data(api_base: &str, parts: Vec<PartSpec>) -> Result<ReadmeResponse> {
    let client = api::create_client()?;
    let url = api::endpoint(api_base, "generate-readme");

    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part.body {
            PartBody::Text(value) => form.text(part.name, value),
            PartBody::File {
                filename,
                mime,
                bytes,
            } => {
                let file_part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(filename)
                    .mime_str(mime)
                    .map_err(|e| eyre!("Invalid MIME type: {e}"))?;
                form.part(part.name, file_part)
            }
        };
    }

    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach {url}: {e}"))?;

    let response = api::check_response(response, "generate-readme request failed").await?;

    response
        .json::<ReadmeResponse>()
        .await
        .map_err(|e| eyre!("Failed to parse generate-readme response: {e}"))
}

async fn read_upload(path: &Path) -> Result<UploadFile> {
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;

    Ok(UploadFile::new(name, bytes))
}

/// Render the returned Markdown for display.
fn display_text(readme: &str, raw: bool) -> String {
    if raw {
        readme.to_string()
    } else {
        render::markdown(readme)
    }
}

/// Mirror the wire response shape for `--json` output.
fn readme_json(readme: &str) -> Result<String> {
    serde_json::to_string_pretty(&ReadmeResponse {
        readme_content: readme.to_string(),
    })
    .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

use std::path::PathBuf;

use intellidocs_core::format::{FormatRequest, FormatResponse, FORMAT_FAILED};
use intellidocs_core::session::Session;

use crate::prelude::{println, *};
use crate::{api, clipboard, render};

/// Options for the text formatter
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FormatOptions {
    /// Raw text to format (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the raw text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

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

pub async fn run(options: FormatOptions, global: crate::Global) -> Result<()> {
    let raw_text = read_input(&options).await?;

    let mut session = Session::new();
    session.set_raw_text(raw_text);

    let request = match session.begin_format() {
        Ok(request) => request,
        Err(err) => return Err(Error::Validation(err.to_string()).into()),
    };

    if global.verbose {
        println!("POST {}", api::endpoint(&global.api_base, "format-text"));
    }

    let spinner = request_spinner("Formatting text...");
    let result = format_text_data(&global.api_base, request).await;
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            log::error!("format-text request failed: {err:#}");
            session.fail(FORMAT_FAILED);
            return Err(Error::Network(FORMAT_FAILED.to_string()).into());
        }
    };

    session.complete_format(response.formatted_text);
    let formatted = session.formatted_text().unwrap_or_default().to_string();

    if options.json {
        println!("{}", format_json(&formatted)?);
    } else {
        println!("{}", display_text(&formatted, options.raw).trim_end_matches('\n'));
    }

    if options.copy {
        clipboard::copy_confirmed(&formatted);
    }

    Ok(())
}

/// Send the formatting request and parse the response.
pub async fn format_text_data(api_base: &str, request: FormatRequest) -> Result<FormatResponse> {
    let client = api::create_client()?;
    let url = api::endpoint(api_base, "format-text");

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach {url}: {e}"))?;

    let response = api::check_response(response, "format-text request failed").await?;

    response
        .json::<FormatResponse>()
        .await
        .map_err(|e| eyre!("Failed to parse format-text response: {e}"))
}

async fn read_input(options: &FormatOptions) -> Result<String> {
    if let Some(text) = &options.text {
        return Ok(text.clone());
    }

    if let Some(path) = &options.file {
        return tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read {}", path.display()));
    }

    use tokio::io::AsyncReadExt;

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| eyre!("Failed to read stdin: {e}"))?;

    Ok(buffer)
}

/// Render the returned Markdown for display.
fn display_text(formatted: &str, raw: bool) -> String {
    if raw {
        formatted.to_string()
    } else {
        render::markdown(formatted)
    }
}

/// Mirror the wire response shape for `--json` output.
fn format_json(formatted: &str) -> Result<String> {
    serde_json::to_string_pretty(&FormatResponse {
        formatted_text: formatted.to_string(),
    })
    .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_raw_passthrough() {
        let markdown = "# Title\n\n**bold**";

        assert_eq!(display_text(markdown, true), markdown);
    }

    #[test]
    fn test_display_text_renders_markdown() {
        let rendered = display_text("**hello**", false);

        assert!(rendered.contains("hello"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_format_json_matches_wire_shape() {
        let json = format_json("**hello**").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["formatted_text"], "**hello**");
    }
}

use std::pin::Pin;

use futures::{Stream, TryStreamExt};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::{api_utils::api_client::{get_api_client, send_checked}, config::ApiConfig};

pub struct NotesArtifact {
    pub file_name: String,
    pub content_type: String,
    pub stream: Pin<Box<dyn Stream<Item = anyhow::Result<bytes::Bytes>> + Send + 'static>>,
}

/// Opens the generated notes document of `file_id` as a byte stream.
pub async fn get_notes_stream(config: &ApiConfig, file_id: &str) -> anyhow::Result<NotesArtifact> {
    let url = config.endpoint(&["notes", "download", file_id])?;
    tracing::info!("Downloading notes for {file_id}");
    let client = get_api_client(config.upload_timeout)?;
    let response = send_checked(client.get(url), "download notes", config.upload_timeout).await?;

    let header = |name: reqwest::header::HeaderName| {
        response.headers().get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
    };
    let file_name = header(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|d| attachment_file_name(&d))
        .unwrap_or_else(|| safe_file_name(&format!("{file_id}_notes.pdf")));
    let content_type = header(reqwest::header::CONTENT_TYPE).unwrap_or("application/octet-stream".to_string());

    let stream = response
        .bytes_stream()
        .map_err(|e| anyhow::Error::new(e).context("download notes: stream interrupted"));
    Ok(NotesArtifact { file_name, content_type, stream: Box::pin(stream) })
}

// RFC 5987 attr-char, everything else is percent-encoded in `filename*`.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `Content-Disposition` value for re-serving an upstream attachment named `file_name`.
///
/// The quoted `filename` is an ASCII fallback; `filename*` carries the exact UTF-8 name.
pub fn attachment_header(file_name: &str) -> String {
    let name = safe_file_name(file_name);
    let fallback: String = name.chars().map(|c| if c.is_ascii() { c } else { '_' }).collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{}", utf8_percent_encode(&name, ATTR_CHAR))
}

/// Strips characters that would break a quoted header parameter or a local path.
fn safe_file_name(name: &str) -> String {
    let kept: String = name.chars().filter(|c| !c.is_control() && !matches!(c, '"' | '\\' | '/')).collect();
    kept.trim().to_string()
}

/// File name announced by an upstream `Content-Disposition`. `filename*` wins over `filename`.
fn attachment_file_name(content_disposition: &str) -> Option<String> {
    let params: Vec<(String, &str)> = content_disposition
        .split(';')
        .skip(1)
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            Some((key.trim().to_ascii_lowercase(), value.trim()))
        })
        .collect();
    let param = |key: &str| params.iter().find(|(k, _)| k == key).map(|(_, v)| *v);

    param("filename*")
        .and_then(decode_extended_value)
        .or_else(|| param("filename").map(|name| name.trim_matches('"').to_string()))
        .map(|name| safe_file_name(&name))
        .filter(|name| !name.is_empty())
}

// `charset'language'percent-encoded`; only UTF-8 is understood.
fn decode_extended_value(value: &str) -> Option<String> {
    let mut parts = value.trim_matches('"').splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;
    if !charset.eq_ignore_ascii_case("utf-8") {
        return None;
    }
    percent_decode_str(encoded).decode_utf8().ok().map(|name| name.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{attachment_file_name, attachment_header};

    #[test]
    fn reads_attachment_file_name() {
        assert_eq!(attachment_file_name("attachment; filename=\"notes.pdf\""), Some("notes.pdf".to_string()));
        assert_eq!(attachment_file_name("attachment; filename=a.docx"), Some("a.docx".to_string()));
        assert_eq!(attachment_file_name("inline"), None);
        assert_eq!(attachment_file_name("attachment; filename=\"\""), None);
    }

    #[test]
    fn prefers_extended_file_name() {
        assert_eq!(
            attachment_file_name("attachment; filename=\"notes.pdf\"; filename*=UTF-8''%C3%BCbung%20notes.pdf"),
            Some("übung notes.pdf".to_string())
        );
        assert_eq!(
            attachment_file_name("attachment; FILENAME*=iso-8859-1'en'x.pdf; filename=plain.pdf"),
            Some("plain.pdf".to_string())
        );
    }

    #[test]
    fn strips_quotes_and_separators_from_file_name() {
        assert_eq!(attachment_file_name(r#"attachment; filename="a\"b/c.pdf""#), Some("abc.pdf".to_string()));
        assert_eq!(attachment_file_name("attachment; filename*=UTF-8''evil%22%0D%0Ax.pdf"), Some("evilx.pdf".to_string()));
    }

    #[test]
    fn builds_header_safe_to_echo() {
        assert_eq!(attachment_header("notes.pdf"), "attachment; filename=\"notes.pdf\"; filename*=UTF-8''notes.pdf");
        assert_eq!(
            attachment_header("say \"hi\" ü.pdf"),
            "attachment; filename=\"say hi _.pdf\"; filename*=UTF-8''say%20hi%20%C3%BC.pdf"
        );
    }
}

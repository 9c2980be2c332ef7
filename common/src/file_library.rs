//! Uploaded file summaries, upload kinds and notes jobs.

use std::fmt::Display;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Video,
    Worksheet,
    Notes,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Video, FileKind::Worksheet, FileKind::Notes];

    /// Path segment and multipart field name used by the upload endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Video => "video",
            FileKind::Worksheet => "worksheet",
            FileKind::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Video => "Video",
            FileKind::Worksheet => "Worksheet",
            FileKind::Notes => "Notes",
        }
    }

    /// Whether files of this kind open in the worksheet viewer.
    pub fn has_pages(&self) -> bool {
        !matches!(self, FileKind::Video)
    }

    pub fn accepted_extensions(&self) -> &'static str {
        match self {
            FileKind::Video => ".mp4,.avi,.mov,.mkv,.webm",
            FileKind::Worksheet | FileKind::Notes => ".pdf,.png",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        FileKind::ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(s))
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Unknown or non-string tags fall back to guessing from the file type.
fn usage_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<FileKind>, D::Error> {
    let tag = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(tag.as_ref().and_then(serde_json::Value::as_str).and_then(FileKind::from_str_opt))
}

const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "avi", "mov", "mkv", "webm"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    #[serde(alias = "file_id")]
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default, alias = "usage", deserialize_with = "usage_tag")]
    pub kind: Option<FileKind>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

impl FileSummary {
    /// The usage tag if the server sent one, otherwise guessed from the file type.
    pub fn kind(&self) -> FileKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        let file_type = self.file_type.as_deref().unwrap_or("").to_ascii_lowercase();
        let extension = self.file_name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
        if file_type == "video" || VIDEO_EXTENSIONS.contains(&file_type.as_str()) || VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            FileKind::Video
        } else {
            FileKind::Worksheet
        }
    }

    pub fn display_size(&self) -> String {
        let Some(size) = self.size else { return "-".to_string() };
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut value = size as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit + 1 < UNITS.len() {
            value /= 1024.0;
            unit += 1;
        }
        if unit == 0 { format!("{size} B") } else { format!("{value:.1} {}", UNITS[unit]) }
    }

    /// Date part of `uploaded_at`, which the server sends as ISO 8601.
    pub fn display_uploaded_at(&self) -> String {
        match self.uploaded_at.as_deref() {
            Some(ts) => ts.split('T').next().unwrap_or(ts).to_string(),
            None => "-".to_string(),
        }
    }
}

/// The listing endpoint returns either a bare array or `{ "files": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FileListResponse {
    Files(Vec<FileSummary>),
    Wrapped { files: Vec<FileSummary> },
}

impl FileListResponse {
    pub fn into_files(self) -> Vec<FileSummary> {
        match self {
            FileListResponse::Files(files) | FileListResponse::Wrapped { files } => files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(alias = "id")]
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesJobStatus {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default = "NotesJobStatus::default_status")]
    pub status: String,
}

// Characters that cannot appear raw inside one URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Same-origin link that streams the generated notes of `file_id`.
pub fn notes_download_href(file_id: &str) -> String {
    format!("/_download_notes/{}", utf8_percent_encode(file_id, PATH_SEGMENT))
}

impl NotesJobStatus {
    fn default_status() -> String {
        "queued".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(file_name: &str, file_type: Option<&str>) -> FileSummary {
        FileSummary {
            id: "id".into(),
            file_name: file_name.into(),
            file_type: file_type.map(Into::into),
            kind: None,
            size: Some(1536),
            uploaded_at: Some("2025-03-01T10:11:12.000".into()),
        }
    }

    #[test]
    fn guesses_kind_from_file_type() {
        assert_eq!(summary("lecture.mp4", None).kind(), FileKind::Video);
        assert_eq!(summary("clip", Some("video")).kind(), FileKind::Video);
        assert_eq!(summary("hw.pdf", Some("pdf")).kind(), FileKind::Worksheet);
        let mut notes = summary("notes.pdf", Some("pdf"));
        notes.kind = Some(FileKind::Notes);
        assert_eq!(notes.kind(), FileKind::Notes);
    }

    #[test]
    fn formats_for_display() {
        let s = summary("hw.pdf", None);
        assert_eq!(s.display_size(), "1.5 KB");
        assert_eq!(s.display_uploaded_at(), "2025-03-01");
    }

    #[test]
    fn parses_both_listing_shapes() {
        let bare: FileListResponse = serde_json::from_str(r#"[{"id": "a", "file_name": "a.pdf"}]"#).unwrap();
        let wrapped: FileListResponse = serde_json::from_str(r#"{"files": [{"file_id": "a", "file_name": "a.pdf", "usage": "notes"}]}"#).unwrap();
        assert_eq!(bare.into_files()[0].id, "a");
        assert_eq!(wrapped.into_files()[0].kind(), FileKind::Notes);
    }

    #[test]
    fn unknown_usage_tag_falls_back_to_file_type() {
        let listing: FileListResponse = serde_json::from_str(
            r#"[
                {"id": "a", "file_name": "talk.mp4", "usage": "slides"},
                {"id": "b", "file_name": "hw.pdf", "usage": 7},
                {"id": "c", "file_name": "n.pdf", "usage": "Notes"},
                {"id": "d", "file_name": "e.pdf", "usage": null}
            ]"#,
        )
        .unwrap();
        let kinds: Vec<_> = listing.into_files().iter().map(|f| (f.kind, f.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                (None, FileKind::Video),
                (None, FileKind::Worksheet),
                (Some(FileKind::Notes), FileKind::Notes),
                (None, FileKind::Worksheet),
            ]
        );
    }

    #[test]
    fn download_href_encodes_file_id() {
        assert_eq!(notes_download_href("ws1"), "/_download_notes/ws1");
        assert_eq!(notes_download_href("a/b?c#d"), "/_download_notes/a%2Fb%3Fc%23d");
        assert_eq!(notes_download_href("50% ü"), "/_download_notes/50%25%20%C3%BC");
    }

    #[test]
    fn upload_response_accepts_id_alias() {
        let r: UploadResponse = serde_json::from_str(r#"{"id": "xyz", "success": true}"#).unwrap();
        assert_eq!(r.file_id, "xyz");
        assert_eq!(FileKind::from_str_opt("Worksheet"), Some(FileKind::Worksheet));
    }
}

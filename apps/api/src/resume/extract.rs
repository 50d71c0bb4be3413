//! Plain-text extraction for uploaded documents.
//!
//! Only PDF and plain text are accepted. A document that cannot be decoded is
//! rejected here so the analyzer never scores an empty string by accident.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// Picks the document kind from the declared content type, the file extension,
/// and finally the leading bytes.
pub fn detect_kind(
    bytes: &[u8],
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<DocumentKind, AppError> {
    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match (content_type, extension.as_deref()) {
        (Some("application/pdf"), _) | (_, Some("pdf")) => Ok(DocumentKind::Pdf),
        (Some(ct), _) if ct.starts_with("text/plain") => Ok(DocumentKind::PlainText),
        (_, Some("txt")) => Ok(DocumentKind::PlainText),
        _ if bytes.starts_with(PDF_MAGIC) => Ok(DocumentKind::Pdf),
        _ => Err(AppError::UnsupportedMediaType(format!(
            "Unsupported file type{}. Upload a PDF or plain-text resume.",
            file_name.map(|n| format!(" for '{n}'")).unwrap_or_default()
        ))),
    }
}

/// Extracts text from the document bytes. PDF parsing is CPU-bound; callers on
/// the async runtime should run this on a blocking thread.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text document is not valid UTF-8".to_string())
        })?,
    };

    let text = normalize(&text);
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The document contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}

/// pdf-extract panics on some malformed inputs; those are decode failures too.
fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::UnprocessableEntity(format!(
            "Could not read PDF document: {e}"
        ))),
        Err(_) => Err(AppError::UnprocessableEntity(
            "Could not read PDF document: malformed file".to_string(),
        )),
    }
}

/// Converts page breaks and carriage returns to plain newlines.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace(['\r', '\u{c}'], "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_content_type() {
        let kind = detect_kind(b"", Some("resume"), Some("application/pdf")).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_by_extension_case_insensitive() {
        assert_eq!(
            detect_kind(b"", Some("Resume.PDF"), None).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            detect_kind(b"", Some("resume.txt"), Some("application/octet-stream")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_plain_text_with_charset() {
        let kind = detect_kind(b"", None, Some("text/plain; charset=utf-8")).unwrap();
        assert_eq!(kind, DocumentKind::PlainText);
    }

    #[test]
    fn test_detect_pdf_by_magic_bytes() {
        let kind = detect_kind(b"%PDF-1.7\n...", Some("upload"), None).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_docx_is_unsupported() {
        let err = detect_kind(b"PK\x03\x04", Some("resume.docx"), None).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_plain_text_extraction_normalizes_line_endings() {
        let text = extract_text(b"Resume\r\nSkills: Rust\rPage 2\x0cEnd", DocumentKind::PlainText)
            .unwrap();
        assert_eq!(text, "Resume\nSkills: Rust\nPage 2\nEnd");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = extract_text(&[0xff, 0xfe, 0xfd], DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_blank_document_is_rejected() {
        let err = extract_text(b"  \n\t ", DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_garbage_pdf_is_rejected() {
        let err = extract_text(b"%PDF-1.4 not really a pdf", DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}

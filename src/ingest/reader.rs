//! Format-specific document readers, dispatched by file extension.

use std::path::Path;

use crate::error::Error;
use crate::models::Document;

/// Read one file into documents. PDF files produce one document per page,
/// text files a single document. Returns `None` for extensions the
/// pipeline does not recognize — those files are skipped, not errors.
///
/// A recognized file that cannot be decoded is a hard `Error::Load`: the
/// whole ingestion run aborts rather than publishing an index with a
/// silent gap in it.
pub fn read_document(root: &Path, path: &Path) -> Result<Option<Vec<Document>>, Error> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let source = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    match ext.as_str() {
        "pdf" => read_pdf(path, source).map(Some),
        "txt" => read_text(path, source).map(Some),
        _ => Ok(None),
    }
}

fn read_pdf(path: &Path, source: String) -> Result<Vec<Document>, Error> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| Error::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(i, text)| Document {
            source: source.clone(),
            page: Some(i + 1),
            text,
        })
        .collect())
}

fn read_text(path: &Path, source: String) -> Result<Vec<Document>, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(vec![Document {
        source,
        page: None,
        text,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_extension_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, "binary-ish").unwrap();

        let result = read_document(dir.path(), &path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_no_extension_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README");
        std::fs::write(&path, "plain").unwrap();

        assert!(read_document(dir.path(), &path).unwrap().is_none());
    }

    #[test]
    fn test_text_file_single_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("politicas.txt");
        std::fs::write(&path, "Las vacaciones son 23 días.").unwrap();

        let docs = read_document(dir.path(), &path).unwrap().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "politicas.txt");
        assert_eq!(docs[0].page, None);
        assert_eq!(docs[0].text, "Las vacaciones son 23 días.");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MANUAL.TXT");
        std::fs::write(&path, "contenido").unwrap();

        let docs = read_document(dir.path(), &path).unwrap().unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_undecodable_text_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupto.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = read_document(dir.path(), &path).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    #[test]
    fn test_corrupt_pdf_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roto.pdf");
        std::fs::write(&path, "this is not a pdf").unwrap();

        let err = read_document(dir.path(), &path).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }
}

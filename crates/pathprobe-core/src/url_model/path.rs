//! Path extraction and file/directory heuristics.

use crate::error::ProbeError;

/// Returns the path component of `url`, dropping scheme, host, query and fragment.
///
/// An empty path comes back as `/`.
pub fn pathname(url: &str) -> Result<String, ProbeError> {
    let parsed = url::Url::parse(url).map_err(|source| ProbeError::MalformedUrl {
        url: url.to_string(),
        source,
    })?;
    Ok(parsed.path().to_string())
}

/// Returns true if `path` contains a `.` followed by 3-4 word characters
/// and then either the end of the string or a `?`.
///
/// `file1.txt` and `photo.jpeg` count as files; `notes.md`, `archive.tar.gz`
/// and `/storage/dir1` do not.
pub fn has_file_extension(path: &str) -> bool {
    let bytes = path.as_bytes();
    for (dot, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'.') {
        for ext_len in 3..=4 {
            let end = dot + 1 + ext_len;
            if end > bytes.len() {
                break;
            }
            if !bytes[dot + 1..end]
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || *b == b'_')
            {
                break;
            }
            if end == bytes.len() || bytes[end] == b'?' {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathname_strips_host_and_query() {
        assert_eq!(
            pathname("https://example.com/storage/dir1/file1.txt?x=1").unwrap(),
            "/storage/dir1/file1.txt"
        );
        assert_eq!(pathname("https://example.com/storage/dir1").unwrap(), "/storage/dir1");
        assert_eq!(pathname("https://example.com").unwrap(), "/");
    }

    #[test]
    fn pathname_keeps_trailing_slash() {
        assert_eq!(pathname("https://example.com/storage/dir1/").unwrap(), "/storage/dir1/");
    }

    #[test]
    fn pathname_rejects_garbage() {
        let err = pathname("not a url").unwrap_err();
        assert!(matches!(err, ProbeError::MalformedUrl { .. }));
    }

    #[test]
    fn extension_three_or_four_chars() {
        assert!(has_file_extension("/storage/dir1/file1.txt"));
        assert!(has_file_extension("/a/photo.jpeg"));
        assert!(has_file_extension("/a/b.html"));
    }

    #[test]
    fn extension_wrong_length() {
        assert!(!has_file_extension("/a/notes.md"));
        assert!(!has_file_extension("/a/archive.tar.gz"));
        assert!(!has_file_extension("/a/b.abcde"));
    }

    #[test]
    fn extension_must_end_the_path() {
        assert!(!has_file_extension("/storage/dir1"));
        assert!(!has_file_extension("/a.txt/b"));
        assert!(has_file_extension("/a.txt?x"));
    }
}

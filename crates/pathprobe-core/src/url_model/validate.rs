//! Syntactic URL check.

const MIN_HOST_LEN: usize = 2;
const MAX_HOST_LEN: usize = 256;
const MIN_TLD_LEN: usize = 2;
const MAX_TLD_LEN: usize = 6;

/// Returns true if `s` looks like an `http`/`https` URL.
///
/// Accepted shape:
/// - `http://` or `https://`
/// - one arbitrary BMP character (not a line terminator)
/// - a host token of 2-256 characters from `[-a-zA-Z0-9@:%._+~#=]`
/// - `.` and a 2-6 letter lowercase top-level domain, not followed by a word character
/// - optional path/query characters from `[-a-zA-Z0-9@:%_+.~#?&/=]` up to the end
///
/// No network access; exotic but valid URLs may be rejected.
///
/// # Examples
///
/// - `is_valid_url("https://example.com/a.txt")` → `true`
/// - `is_valid_url("not a url")` → `false`
pub fn is_valid_url(s: &str) -> bool {
    let rest = match s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
    {
        Some(r) => r,
        None => return false,
    };

    let mut chars = rest.chars();
    match chars.next() {
        // The pattern consumes one UTF-16 unit here; astral characters take two.
        Some(c) if !is_line_terminator(c) && c.len_utf16() == 1 => {}
        _ => return false,
    }

    host_and_path_match(chars.as_str().as_bytes())
}

/// Tries every `.` as the host/TLD split point.
fn host_and_path_match(tail: &[u8]) -> bool {
    for (dot, _) in tail.iter().enumerate().filter(|(_, b)| **b == b'.') {
        if dot > MAX_HOST_LEN {
            break;
        }
        // Host bytes include '.', so once the prefix is invalid every later split is too.
        if !tail[..dot].iter().all(|b| is_host_byte(*b)) {
            break;
        }
        if dot < MIN_HOST_LEN {
            continue;
        }

        let after = &tail[dot + 1..];
        for tld_len in MIN_TLD_LEN..=MAX_TLD_LEN {
            if after.len() < tld_len {
                break;
            }
            let (tld, path) = after.split_at(tld_len);
            if !tld.iter().all(u8::is_ascii_lowercase) {
                break;
            }
            if path.first().is_some_and(|b| is_word_byte(*b)) {
                continue;
            }
            if path.iter().all(|b| is_path_byte(*b)) {
                return true;
            }
        }
    }
    false
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-@:%._+~#=".contains(&b)
}

fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-@:%_+.~#?&/=".contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_urls() {
        assert!(is_valid_url("https://example.com/a.txt"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/storage/dir1"));
    }

    #[test]
    fn rejects_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com/file.txt"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn requires_top_level_domain() {
        assert!(!is_valid_url("https://localhost"));
        assert!(!is_valid_url("https://example.c"));
        assert!(!is_valid_url("https://example.COM"));
        assert!(!is_valid_url("https://example.toolongtld"));
    }

    #[test]
    fn host_needs_two_chars_after_the_first() {
        // The first character after the scheme is consumed separately.
        assert!(!is_valid_url("http://a.io"));
        assert!(!is_valid_url("http://ab.io"));
        assert!(is_valid_url("http://abc.io"));
    }

    #[test]
    fn accepts_subdomains_ports_and_queries() {
        assert!(is_valid_url("https://sub.example.co.uk/x?y=1&z=2"));
        assert!(is_valid_url("https://example.com:8080/a"));
        assert!(is_valid_url("https://example.com/#frag"));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(!is_valid_url("https://example.com/path with space"));
        assert!(!is_valid_url("https://example.com/caf\u{e9}"));
        assert!(!is_valid_url("https://example.com/a\nb"));
        assert!(!is_valid_url("https://\nexample.com"));
    }

    #[test]
    fn first_char_must_be_a_single_utf16_unit() {
        assert!(!is_valid_url("https://\u{1F600}ab.com"));
        assert!(is_valid_url("https://\u{e9}ab.com"));
    }

    #[test]
    fn tld_followed_by_word_char_falls_back_to_later_dot() {
        assert!(!is_valid_url("https://example.com1"));
        assert!(is_valid_url("https://example.com1.org"));
    }
}

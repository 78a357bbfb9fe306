//! Separator-aware ordering of display keys.
//!
//! Plain string comparison puts `/a-b` before `/a/b` because `-` (0x2D) is
//! lower than `/` (0x2F), splitting a parent from its children. Here the
//! separator compares as 0x00, below every byte a path segment can hold, so a
//! parent is always followed directly by its own subtree.

use std::cmp::Ordering;
use std::path::MAIN_SEPARATOR;

/// Byte used in place of the separator while comparing.
const SEPARATOR_RANK: u8 = 0;

fn rank(byte: u8, separator: u8) -> u8 {
    if byte == separator {
        SEPARATOR_RANK
    } else {
        byte
    }
}

/// Compare two paths with `separator` sorting below every other byte.
pub fn compare_paths_with(a: &str, b: &str, separator: char) -> Ordering {
    let mut buf = [0u8; 4];
    let sep = separator.encode_utf8(&mut buf).as_bytes();
    // Multi-byte separators never occur in practice; fall back to bytes.
    if sep.len() != 1 {
        return a.cmp(b);
    }
    let sep = sep[0];
    a.bytes()
        .map(|x| rank(x, sep))
        .cmp(b.bytes().map(|x| rank(x, sep)))
}

/// Compare two display keys using the platform separator.
pub fn compare_display_paths(a: &str, b: &str) -> Ordering {
    compare_paths_with(a, b, MAIN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(paths: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = paths.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_paths_with(a, b, '/'));
        v
    }

    #[test]
    fn test_parent_before_child() {
        assert_eq!(compare_paths_with("/a", "/a/b", '/'), Ordering::Less);
        assert_eq!(compare_paths_with("/a/b", "/a", '/'), Ordering::Greater);
        assert_eq!(compare_paths_with("/a", "/a", '/'), Ordering::Equal);
    }

    #[test]
    fn test_separator_sorts_below_punctuation() {
        // Bytewise, "-" and "." come before "/"
        assert_eq!("/a-b".cmp("/a/b"), Ordering::Less);
        assert_eq!(compare_paths_with("/a/b", "/a-b", '/'), Ordering::Less);
        assert_eq!(compare_paths_with("/a/b", "/a.b", '/'), Ordering::Less);
        assert_eq!(compare_paths_with("/a/z", "/a!", '/'), Ordering::Less);
    }

    #[test]
    fn test_subtree_stays_contiguous() {
        let order = sorted(&["/pkg-util", "/pkg/b", "/", "/pkg", "/pkg/a", "/cmd", "/pkg.v2"]);
        assert_eq!(
            order,
            vec!["/", "/cmd", "/pkg", "/pkg/a", "/pkg/b", "/pkg-util", "/pkg.v2"]
        );
    }

    #[test]
    fn test_siblings_in_lexical_order() {
        let order = sorted(&["/zeta", "/alpha", "/Beta", "/alpha2"]);
        assert_eq!(order, vec!["/Beta", "/alpha", "/alpha2", "/zeta"]);
    }

    #[test]
    fn test_other_separator() {
        assert_eq!(compare_paths_with("\\a\\b", "\\a-b", '\\'), Ordering::Less);
    }

    #[test]
    fn test_platform_separator() {
        let sep = MAIN_SEPARATOR;
        let parent = format!("{}a", sep);
        let child = format!("{}a{}b", sep, sep);
        assert_eq!(compare_display_paths(&parent, &child), Ordering::Less);
    }
}

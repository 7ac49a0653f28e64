//! Lexical path handling.
//!
//! Paths are normalised without touching the tree: `.` is dropped, `..`
//! removes the previous component and never climbs above `/`.

use alloc::string::String;
use alloc::vec::Vec;

/// Join `path` onto the absolute directory `base` and normalise.
///
/// The result is absolute, has no trailing slash (except `/` itself) and
/// contains no `.` or `..` components.
pub fn normalize(base: &str, path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let joined = if path.starts_with('/') {
        [path, ""]
    } else {
        [base, path]
    };
    for component in joined.iter().flat_map(|piece| piece.split('/')) {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            name => parts.push(name),
        }
    }
    join(&parts)
}

/// Build an absolute path from components.
pub fn join(parts: &[&str]) -> String {
    if parts.is_empty() {
        return String::from("/");
    }
    let mut out = String::new();
    for part in parts {
        out.push('/');
        out.push_str(part);
    }
    out
}

/// Split a normalised absolute path into its parent and final component.
///
/// Returns `None` for `/`.
pub fn split_parent(path: &str) -> Option<(&str, &str)> {
    let idx = path.rfind('/')?;
    let name = &path[idx + 1..];
    if name.is_empty() {
        return None;
    }
    let parent = if idx == 0 { "/" } else { &path[..idx] };
    Some((parent, name))
}

/// Components of a normalised absolute path.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/", "a/b"), "/a/b");
        assert_eq!(normalize("/usr", "lib/../bin/./sh"), "/usr/bin/sh");
        assert_eq!(normalize("/usr", "/etc//passwd/"), "/etc/passwd");
        assert_eq!(normalize("/a/b", "../../../.."), "/");
        assert_eq!(normalize("/a", "."), "/a");
        assert_eq!(normalize("/", ""), "/");
    }

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("/a/b"), Some(("/a", "b")));
        assert_eq!(split_parent("/a"), Some(("/", "a")));
        assert_eq!(split_parent("/"), None);
    }

    #[test]
    fn test_components() {
        let parts: Vec<&str> = components("/x/y/z").collect();
        assert_eq!(parts, ["x", "y", "z"]);
        assert_eq!(components("/").count(), 0);
    }
}

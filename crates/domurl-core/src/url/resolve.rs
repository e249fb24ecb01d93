//! Path merging for relative references.

/// Merges `relative` onto the directory of `base_path`.
///
/// The last segment of `base_path` is dropped. Each leading `..` segment of
/// `relative` drops one more base segment and is consumed itself. A rooted
/// `relative` (leading `/`) is used on its own.
pub(crate) fn merge_paths(base_path: &str, relative: &str) -> String {
    if relative.starts_with('/') {
        return relative.to_string();
    }

    let mut dir: Vec<&str> = base_path.split('/').collect();
    dir.pop();

    let segments: Vec<&str> = relative.split('/').collect();
    let ups = segments.iter().take_while(|s| **s == "..").count();
    for _ in 0..ups {
        dir.pop();
    }

    format!("{}/{}", dir.join("/"), segments[ups..].join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_onto_base_directory() {
        assert_eq!(merge_paths("/some/dir/page.html", "other.html"), "/some/dir/other.html");
        assert_eq!(merge_paths("/some/dir/", "a/b"), "/some/dir/a/b");
    }

    #[test]
    fn parent_segments_consume_base_segments() {
        assert_eq!(merge_paths("/some/dir/", "../x"), "/some/x");
        assert_eq!(merge_paths("/some/dir/page", "../../x"), "/x");
    }

    #[test]
    fn too_many_parents_stop_at_root() {
        assert_eq!(merge_paths("/a/", "../../../x"), "/x");
        assert_eq!(merge_paths("", "../x"), "/x");
    }

    #[test]
    fn only_leading_parents_are_consumed() {
        assert_eq!(merge_paths("/a/b/", "x/../y"), "/a/b/x/../y");
    }

    #[test]
    fn rooted_relative_stands_alone() {
        assert_eq!(merge_paths("/a/b/c", "/foo"), "/foo");
    }

    #[test]
    fn empty_relative_is_the_directory() {
        assert_eq!(merge_paths("/a/b/c", ""), "/a/b/");
    }
}

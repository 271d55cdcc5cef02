//! URL and path string helpers.
//!
//! - Everything leaving this module is in forward-slash form
//! - Query strings and fragments are carried through untouched

/// Query marker that makes the dev server serve raw CSS instead of a JS module.
pub const DIRECT_QUERY: &str = "direct";

/// Convert a host path string to forward-slash form.
#[inline]
pub fn to_posix_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split `url` into the path part and the `?query#fragment` suffix.
#[inline]
fn split_suffix(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    }
}

/// Canonicalize a URL path: forward slashes, no repeated separators.
///
/// Idempotent. A leading `scheme://` is preserved as-is.
pub fn normalize_url(url: &str) -> String {
    let (path, suffix) = split_suffix(url);
    let path = to_posix_path(path);

    let (scheme, rest) = match path.find("://") {
        Some(idx) => path.split_at(idx + 3),
        None => ("", path.as_str()),
    };

    let mut out = String::with_capacity(url.len());
    out.push_str(scheme);
    let mut prev_slash = false;
    for c in rest.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out.push_str(suffix);
    out
}

/// Prefix `path` with `base`, with exactly one `/` at the join point.
///
/// The result always starts with `/` or the base. Bases may be absolute
/// URLs (CDN hosts), e.g. `https://cdn.example.com/assets/`. Paths that are
/// already absolute URLs are returned as-is.
pub fn prepend_base(path: &str, base: &str) -> String {
    if path.contains("://") {
        return path.to_string();
    }
    let path = path.trim_start_matches('/');
    let base = base.trim_end_matches('/');
    format!("{base}/{path}")
}

/// Join `path` onto `root` with POSIX semantics, resolving `.` and `..`.
///
/// `root` decides whether the result is absolute. `..` never climbs above an
/// absolute root.
pub fn posix_join(root: &str, path: &str) -> String {
    let absolute = root.starts_with('/') || (root.is_empty() && path.starts_with('/'));
    let trailing = path.ends_with('/') && !path.is_empty();

    let mut segments: Vec<&str> = Vec::new();
    for segment in root.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut joined = segments.join("/");
    if absolute {
        joined.insert(0, '/');
    }
    if trailing && !joined.ends_with('/') {
        joined.push('/');
    }
    if joined.is_empty() {
        joined.push('.');
    }
    joined
}

/// Whether the query string already carries the `direct` marker.
fn has_direct_query(url: &str) -> bool {
    let Some((_, query)) = url.split_once('?') else {
        return false;
    };
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .any(|param| param == DIRECT_QUERY || param.starts_with("direct="))
}

/// Add the `direct` query marker once. Repeated calls are no-ops.
pub fn with_direct_query(url: &str) -> String {
    if has_direct_query(url) {
        return url.to_string();
    }
    let (path, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{DIRECT_QUERY}{fragment}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_posix_path() {
        assert_eq!(to_posix_path(r"C:\project\pages\index.js"), "C:/project/pages/index.js");
        assert_eq!(to_posix_path("/already/posix"), "/already/posix");
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("/assets//index.js"), "/assets/index.js");
        assert_eq!(normalize_url(r"\assets\style.css"), "/assets/style.css");
        assert_eq!(normalize_url("///a///b"), "/a/b");
    }

    #[test]
    fn test_normalize_url_keeps_query() {
        assert_eq!(
            normalize_url("/a//b.css?import&url=//x"),
            "/a/b.css?import&url=//x"
        );
        assert_eq!(normalize_url("/a//b#frag//x"), "/a/b#frag//x");
    }

    #[test]
    fn test_normalize_url_keeps_scheme() {
        assert_eq!(
            normalize_url("https://cdn.example.com//a.js"),
            "https://cdn.example.com/a.js"
        );
    }

    #[test]
    fn test_normalize_url_idempotent() {
        let inputs = [
            "",
            "/",
            "//",
            r"\\server\share\x.css",
            "/a/./b//c?x=//y",
            "https://cdn//x//y.js#z",
            "relative//path",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_prepend_base() {
        assert_eq!(prepend_base("/assets/a.js", "/"), "/assets/a.js");
        assert_eq!(prepend_base("/assets/a.js", ""), "/assets/a.js");
        assert_eq!(prepend_base("/assets/a.js", "/blog"), "/blog/assets/a.js");
        assert_eq!(prepend_base("/assets/a.js", "/blog/"), "/blog/assets/a.js");
        assert_eq!(
            prepend_base("/assets/a.js", "https://cdn.example.com/"),
            "https://cdn.example.com/assets/a.js"
        );
    }

    #[test]
    fn test_prepend_base_relative_path() {
        assert_eq!(prepend_base("src/a.css", "/"), "/src/a.css");
        assert_eq!(prepend_base("src/a.css", ""), "/src/a.css");
        assert_eq!(prepend_base("src/a.css", "/blog"), "/blog/src/a.css");
        assert_eq!(
            prepend_base("https://fonts.example.com/a.woff2", "/blog/"),
            "https://fonts.example.com/a.woff2"
        );
    }

    #[test]
    fn test_posix_join() {
        assert_eq!(posix_join("/project", "/pages/index.js"), "/project/pages/index.js");
        assert_eq!(posix_join("/project/", "./pages/../a.js"), "/project/a.js");
        assert_eq!(posix_join("C:/project", "/pages/x.js"), "C:/project/pages/x.js");
        assert_eq!(posix_join("/", "/../etc"), "/etc");
        assert_eq!(posix_join("a", "../../b"), "../b");
        assert_eq!(posix_join("/root", "dir/"), "/root/dir/");
    }

    #[test]
    fn test_with_direct_query() {
        assert_eq!(with_direct_query("/style.css"), "/style.css?direct");
        assert_eq!(with_direct_query("/style.css?v=1"), "/style.css?v=1&direct");
        assert_eq!(with_direct_query("/style.css#x"), "/style.css?direct#x");
    }

    #[test]
    fn test_with_direct_query_once() {
        let once = with_direct_query("/style.css");
        assert_eq!(with_direct_query(&once), once);

        let once = with_direct_query("/style.css?v=1");
        assert_eq!(with_direct_query(&once), once);
    }
}

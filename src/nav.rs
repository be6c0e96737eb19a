//! Section extraction from an entry page's `<nav>` links.
//!
//! Every `nav a` is a candidate. An anchor directly followed by an
//! `.articles` element heads an article list rather than a section and is
//! skipped, as are external links and anchors without text or target.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::models::NavEntry;

static NAV_ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("nav a").unwrap());

const ARTICLES_CLASS: &str = "articles";
const EXTERNAL_PREFIX: &str = "http";

/// A parsed entry page.
pub struct NavPage {
    document: Html,
}

impl NavPage {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::EntryPage {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Sections linked from the page's navigation, in document order.
    ///
    /// Paths are `base_path` joined with each anchor's `href`.
    pub fn entries<'a>(&'a self, base_path: &'a str) -> impl Iterator<Item = NavEntry> + 'a {
        self.document
            .select(&NAV_ANCHOR_SELECTOR)
            .filter_map(move |anchor| section_entry(anchor, base_path))
    }
}

fn section_entry(anchor: ElementRef<'_>, base_path: &str) -> Option<NavEntry> {
    if !is_title(anchor) {
        return None;
    }

    let href = anchor.value().attr("href").filter(|href| !href.is_empty())?;
    if href.starts_with(EXTERNAL_PREFIX) {
        return None;
    }

    let name = anchor.text().collect::<String>().trim().to_string();
    if name.is_empty() {
        return None;
    }

    Some(NavEntry {
        name,
        path: join_path(base_path, href),
    })
}

/// False when the next sibling element carries the `articles` class.
fn is_title(anchor: ElementRef<'_>) -> bool {
    let next = anchor.next_siblings().find_map(ElementRef::wrap);
    !next.is_some_and(|el| el.value().classes().any(|class| class == ARTICLES_CLASS))
}

/// Join two slash-separated paths and clean the result lexically.
pub fn join_path(base: &str, href: &str) -> String {
    match (base.is_empty(), href.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean_path(href),
        (false, true) => clean_path(base),
        (false, false) => clean_path(&format!("{base}/{href}")),
    }
}

/// Collapse repeated slashes and resolve `.` and `..` segments.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(segment),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("dev/api", "api/foo.html"), "dev/api/api/foo.html");
        assert_eq!(join_path("dev/api", "./foo.html"), "dev/api/foo.html");
        assert_eq!(join_path("dev/api", "../component/view.html"), "dev/component/view.html");
        assert_eq!(join_path("dev/api", "/abs.html"), "dev/api/abs.html");
        assert_eq!(join_path("dev/api", "sub/"), "dev/api/sub");
        assert_eq!(join_path("dev/api", "foo.html#anchor"), "dev/api/foo.html#anchor");
        assert_eq!(join_path("dev", "../../x.html"), "../x.html");
        assert_eq!(join_path("", ""), "");
        assert_eq!(join_path("dev/api", ""), "dev/api");
    }

    #[test]
    fn test_clean_path_rooted() {
        assert_eq!(clean_path("/../a//b/./c"), "/a/b/c");
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("a/.."), ".");
    }

    #[test]
    fn test_is_title_looks_at_next_element_only() {
        let page = NavPage::parse(
            r#"<nav>
                <a href="a.html">A</a>
                text between
                <ul class="list articles"><li><a href="b.html">B</a></li></ul>
                <a href="c.html">C</a>
                <ul class="list"></ul>
            </nav>"#,
        );
        let names: Vec<_> = page.entries("dev").map(|e| e.name).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}

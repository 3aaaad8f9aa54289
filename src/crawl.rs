use crate::{Corpus, Error};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tracing::debug;

fn anchor_href() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap())
}

/// `href` targets of every `<a>` tag in `html`, in document order.
pub fn extract_links(html: &str) -> impl Iterator<Item = &str> {
    anchor_href()
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
}

/// Loads every `*.html` file directly under `dir` as one page of a corpus.
///
/// Pages are labelled by file name. Links to files outside the corpus and
/// links of a page to itself are discarded.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus, Error> {
    let dir = dir.as_ref();
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| Error::Io { path, source }
    };
    let mut pages: Vec<(String, Vec<String>)> = vec![];
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path: PathBuf = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(io_err(&path))?;
        let links: Vec<String> = extract_links(&contents).map(str::to_string).collect();
        debug!(page = name, links = links.len(), "crawled");
        pages.push((name.to_string(), links));
    }
    pages.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(Corpus::from_links(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use algograph::graph::QueryableGraph;

    #[test]
    fn extracts_hrefs() {
        let html = r#"<html><body>
            <a href="2.html">two</a>
            <a class="x" href="3.html">three</a>
            <a name="n">none</a>
            <link href="style.css">
        </body></html>"#;
        let links: Vec<_> = extract_links(html).collect();
        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn crawl_directory() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, body: &str| fs::write(dir.path().join(name), body).unwrap();
        write("1.html", r#"<a href="2.html">2</a><a href="1.html">self</a>"#);
        write("2.html", r#"<a href="1.html">1</a><a href="3.html">3</a>"#);
        write("3.html", r#"<a href="https://example.com">out</a>"#);
        write("notes.txt", r#"<a href="1.html">ignored</a>"#);

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.vertex_size(), 3);
        assert_eq!(corpus.links_of("1.html").unwrap(), vec!["2.html"]);
        assert_eq!(corpus.links_of("2.html").unwrap(), vec!["1.html", "3.html"]);
        assert!(corpus.links_of("3.html").unwrap().is_empty());
        assert!(matches!(
            corpus.links_of("notes.txt"),
            Err(Error::UnknownPage(_))
        ));
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let res = crawl(dir.path().join("nope"));
        assert!(matches!(res, Err(Error::Io { .. })));
    }
}

//! HTML directory listings for directories without an `index.html`.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::path::{Component, Path, PathBuf};

/// Characters escaped in a single path segment of a link.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Renders the listing of the directory `request_path` points to under `root`.
///
/// Anything that is not a directory inside `root` is a 404.
pub async fn directory_listing(root: &Path, request_path: &str) -> Response {
    let Some(dir) = resolve_dir(root, request_path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut read_dir = match tokio::fs::read_dir(&dir).await {
        Ok(read_dir) => read_dir,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    let mut entries = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => {
                let mut name = entry.file_name().to_string_lossy().into_owned();
                let is_dir = entry
                    .file_type()
                    .await
                    .map(|t| t.is_dir())
                    .unwrap_or(false);
                if is_dir {
                    name.push('/');
                }
                entries.push(name);
            }
            Ok(None) => break,
            Err(e) => {
                log::warn!("Listing {} failed: {}", dir.display(), e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }
    entries.sort();

    let display_path = percent_decode_str(request_path).decode_utf8_lossy();
    Html(render(&display_path, &entries)).into_response()
}

/// Maps a request path onto a directory below `root`, refusing anything that
/// would leave it.
fn resolve_dir(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;

    let mut dir = root.to_path_buf();
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => dir.push(part),
            _ => return None,
        }
    }

    dir.is_dir().then_some(dir)
}

fn render(path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(path));
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for name in entries {
        let (stem, slash) = match name.strip_suffix('/') {
            Some(stem) => (stem, "/"),
            None => (name.as_str(), ""),
        };
        html.push_str(&format!(
            "<li><a href=\"{}{}\">{}</a></li>\n",
            utf8_percent_encode(stem, SEGMENT),
            slash,
            escape_html(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_dir_refuses_parent_segments() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("assets")).unwrap();

        assert_eq!(
            resolve_dir(root.path(), "/assets/"),
            Some(root.path().join("assets"))
        );
        assert_eq!(resolve_dir(root.path(), "/"), Some(root.path().to_path_buf()));
        assert_eq!(resolve_dir(root.path(), "/../etc/"), None);
        assert_eq!(resolve_dir(root.path(), "/assets/%2e%2e/"), None);
        assert_eq!(resolve_dir(root.path(), "/missing/"), None);
    }

    #[test]
    fn render_escapes_names_and_links() {
        let html = render("/", &["a b.html".to_string(), "<x>/".to_string()]);
        assert!(html.contains("<a href=\"a%20b.html\">a b.html</a>"));
        assert!(html.contains("<a href=\"%3Cx%3E/\">&lt;x&gt;/</a>"));
    }
}

//! HTML rendering of a glyph [`Document`] and writing it to disk.

use crate::config::Config;
use crate::document::Document;
use crate::{AsciifyError, Result};
use std::fs::{self, Permissions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const OUTPUT_SUFFIX: &str = "ASCII.html";

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Render the document as a standalone HTML5 page.
///
/// Each cell becomes one `<span>` colored with its source pixel; cells in a
/// row are concatenated without separators and rows are joined by newlines
/// inside a single `<pre>` block.
pub fn render_html(doc: &Document, config: &Config) -> String {
    // Roughly 48 bytes of markup per glyph
    let mut body = String::with_capacity(doc.width() * doc.height() * 48);
    for (y, row) in doc.rows.iter().enumerate() {
        if y > 0 {
            body.push('\n');
        }
        for cell in row {
            let [r, g, b] = cell.color;
            body.push_str(&format!("<span style=\"color: rgb({r},{g},{b});\">"));
            let mut buf = [0u8; 4];
            push_escaped(&mut body, cell.ch.encode_utf8(&mut buf));
            body.push_str("</span>");
        }
    }

    let mut page = String::with_capacity(body.len() + 512);
    page.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>");
    push_escaped(&mut page, &doc.title);
    page.push_str(" &mdash; ASCII</title>\n");
    page.push_str(&format!(
        "<style>\n  body {{ background: black; margin: 0; padding: 1rem; }}\n  \
         pre {{ font-family: monospace; font-size: 12px; line-height: {}; white-space: pre; }}\n  \
         span {{ font-family: monospace; }}\n</style>\n",
        config.line_height
    ));
    page.push_str("</head>\n<body>\n<pre>\n");
    page.push_str(&body);
    page.push_str("\n</pre>\n</body>\n</html>\n");
    page
}

/// `{dir}/{stem}ASCII.html` next to the input image.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Mode the written page should carry: an existing destination keeps its
/// own, a new one gets `rw-r--r--`.
fn output_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Write `contents` to `path` atomically.
///
/// The page is staged in a temporary file beside the destination and renamed
/// into place, so the destination is either fully replaced or left untouched.
pub fn write_document(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let write_err =
        |source: std::io::Error| AsciifyError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    // Staged files are created owner-only
    if let Some(perms) = output_permissions(path) {
        staged.as_file().set_permissions(perms).map_err(write_err)?;
    }
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphCell;

    fn cell(ch: char, color: [u8; 3]) -> GlyphCell {
        GlyphCell { ch, color }
    }

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_html("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&#x27;f");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_span_format() {
        let doc = Document::new("t", vec![vec![cell('@', [1, 2, 3])]]);
        let html = render_html(&doc, &Config::default());
        assert!(html.contains("<span style=\"color: rgb(1,2,3);\">@</span>"));
    }

    #[test]
    fn test_glyphs_escaped() {
        let doc = Document::new(
            "t",
            vec![vec![cell('<', [0, 0, 0]), cell('&', [0, 0, 0]), cell('"', [0, 0, 0])]],
        );
        let html = render_html(&doc, &Config::default());
        assert!(html.contains(">&lt;</span>"));
        assert!(html.contains(">&amp;</span>"));
        assert!(html.contains(">&quot;</span>"));
    }

    #[test]
    fn test_title_escaped() {
        let doc = Document::new("<b>&.png", vec![vec![cell(' ', [0, 0, 0])]]);
        let html = render_html(&doc, &Config::default());
        assert!(html.contains("<title>&lt;b&gt;&amp;.png &mdash; ASCII</title>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_rows_and_spans() {
        let rows = vec![vec![cell('x', [5, 5, 5]); 4]; 3];
        let doc = Document::new("grid", rows);
        let html = render_html(&doc, &Config::default());

        let start = html.find("<pre>\n").unwrap() + "<pre>\n".len();
        let end = html.find("\n</pre>").unwrap();
        let lines: Vec<&str> = html[start..end].split('\n').collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.matches("<span ").count(), 4);
        }
    }

    #[test]
    fn test_head_contents() {
        let doc = Document::new("t", vec![vec![cell('.', [0, 0, 0])]]);
        let html = render_html(&doc, &Config::default());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("line-height: 0.95;"));
        assert!(html.contains("background: black"));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("dir/sub/photo.jpg"), PathBuf::from("dir/sub/photoASCII.html"));
        assert_eq!(output_path("photo.png"), PathBuf::from("photoASCII.html"));
        assert_eq!(output_path("archive.tar.gz"), PathBuf::from("archive.tarASCII.html"));
        assert_eq!(output_path("noext"), PathBuf::from("noextASCII.html"));
    }

    #[test]
    fn test_write_document_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outASCII.html");
        std::fs::write(&path, "old").unwrap();

        write_document(&path, "<p>new</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>new</p>");
        // Only the destination remains, no staging leftovers
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_document_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freshASCII.html");
        write_document(&path, "x").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_document_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sharedASCII.html");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        write_document(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_document_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("outASCII.html");
        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, AsciifyError::Write { .. }));
        assert!(!path.exists());
    }
}

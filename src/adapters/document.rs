use crate::domain::model::CARD_ELEMENT_IDS;
use crate::domain::ports::Document;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::Path;

const BUNDLED_TEMPLATE: &str = include_str!("../../templates/card.html");

// 1: closing slash, 2: tag name, 3: attributes, 4: self-closing slash
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<(/?)([A-Za-z][A-Za-z0-9-]*)\b([^>]*?)(/?)>").expect("tag pattern is valid")
});

static ID_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\sid\s*=\s*["']([^"']*)["']"#).expect("id attribute pattern is valid")
});

/// In-memory page: element id -> text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, String>,
}

impl MemoryDocument {
    pub fn with_elements<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
        }
    }

    pub fn with_card_elements() -> Self {
        Self::with_elements(CARD_ELEMENT_IDS)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text_content(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.elements.get_mut(id) {
            *slot = text.to_string();
        }
    }
}

/// An HTML page whose elements (`<span id="nombre"></span>`) get their text content replaced,
/// child markup included.
///
/// Nothing touches the disk until [`save`](HtmlDocument::save), so a failed render
/// never leaves a half-written page behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn bundled() -> Self {
        Self::from_html(BUNDLED_TEMPLATE)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Ok(Self::from_html(html))
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.html)?;
        tracing::debug!("Wrote {} bytes to {}", self.html.len(), path.display());
        Ok(())
    }

    /// Byte range of the text content of the element with this id.
    ///
    /// The closing tag is matched by name with nesting taken into account. Self-closing
    /// and unclosed (void) elements have no content to replace and count as missing.
    fn content_range(&self, id: &str) -> Option<Range<usize>> {
        let mut tags = TAG_PATTERN.captures_iter(&self.html);

        let (name, start) = loop {
            let caps = tags.next()?;
            if !caps[1].is_empty() {
                continue;
            }
            let matches_id = ID_ATTRIBUTE
                .captures(&caps[3])
                .is_some_and(|attr| &attr[1] == id);
            if !matches_id {
                continue;
            }
            if !caps[4].is_empty() {
                return None;
            }
            break (caps[2].to_string(), caps.get(0)?.end());
        };

        let mut depth = 1usize;
        for caps in tags {
            if !caps[2].eq_ignore_ascii_case(&name) {
                continue;
            }
            if !caps[1].is_empty() {
                depth -= 1;
                if depth == 0 {
                    return Some(start..caps.get(0)?.start());
                }
            } else if caps[4].is_empty() {
                depth += 1;
            }
        }
        None
    }
}

impl Document for HtmlDocument {
    fn has_element(&self, id: &str) -> bool {
        self.content_range(id).is_some()
    }

    fn set_text_content(&mut self, id: &str, text: &str) {
        if let Some(range) = self.content_range(id) {
            self.html.replace_range(range, &escape_html(text));
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_document_ignores_unknown_ids() {
        let mut doc = MemoryDocument::with_card_elements();
        doc.set_text_content("otro", "x");

        assert!(!doc.has_element("otro"));
        assert_eq!(doc.text("otro"), None);
        assert_eq!(doc.elements().count(), 3);
    }

    #[test]
    fn test_bundled_template_has_card_elements() {
        let doc = HtmlDocument::bundled();
        for id in CARD_ELEMENT_IDS {
            assert!(doc.has_element(id), "missing {}", id);
        }
        assert!(!doc.has_element("qr"));
    }

    #[test]
    fn test_set_text_content_replaces_only_target() {
        let mut doc = HtmlDocument::from_html(
            r#"<p><span id="nombre">old</span> <span id='programa' class="x"></span></p>"#,
        );

        doc.set_text_content("nombre", "Ana Gómez");

        assert_eq!(
            doc.html(),
            r#"<p><span id="nombre">Ana Gómez</span> <span id='programa' class="x"></span></p>"#
        );
    }

    #[test]
    fn test_set_text_content_escapes_markup() {
        let mut doc = HtmlDocument::from_html(r#"<div id="nombre"></div>"#);
        doc.set_text_content("nombre", "<b>O'Brien & Co</b>");

        assert_eq!(
            doc.html(),
            r#"<div id="nombre">&lt;b&gt;O&#39;Brien &amp; Co&lt;/b&gt;</div>"#
        );
    }

    #[test]
    fn test_set_text_content_drops_child_markup() {
        let mut doc = HtmlDocument::from_html(r#"<p id="nombre"><b>old</b> tail</p><p>keep</p>"#);

        assert!(doc.has_element("nombre"));
        doc.set_text_content("nombre", "Ana Gómez");

        assert_eq!(doc.html(), r#"<p id="nombre">Ana Gómez</p><p>keep</p>"#);
    }

    #[test]
    fn test_set_text_content_with_nested_same_tag() {
        let mut doc = HtmlDocument::from_html(
            r#"<div id="programa"><div>a</div><div><br/>b</div></DIV><div>keep</div>"#,
        );

        doc.set_text_content("programa", "Derecho");

        assert_eq!(doc.html(), r#"<div id="programa">Derecho</DIV><div>keep</div>"#);
    }

    #[test]
    fn test_self_closing_target_is_missing() {
        let html = r#"<span id="nombre"/><p>keep</p>"#;
        let mut doc = HtmlDocument::from_html(html);

        assert!(!doc.has_element("nombre"));
        doc.set_text_content("nombre", "Ana");
        assert_eq!(doc.html(), html);
    }

    #[test]
    fn test_unclosed_target_is_missing() {
        let doc = HtmlDocument::from_html(r#"<input id="codigoEstudiante"><p>x</p>"#);
        assert!(!doc.has_element("codigoEstudiante"));
    }

    #[test]
    fn test_data_id_attribute_is_not_an_id() {
        let doc = HtmlDocument::from_html(r#"<span data-id="nombre"></span>"#);
        assert!(!doc.has_element("nombre"));
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("card.html");

        let mut doc = HtmlDocument::bundled();
        doc.set_text_content("codigoEstudiante", "2025123456");
        doc.save(&path).unwrap();

        let loaded = HtmlDocument::load(&path).unwrap();
        assert!(loaded.html().contains(r#"<span id="codigoEstudiante">2025123456</span>"#));
    }
}

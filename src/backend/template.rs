//! Root document templates
//!
//! The responder only produces the head tags and the app markup; the
//! surrounding HTML document belongs to the host. [`RootTemplate`] is the
//! seam; closures of shape `Fn(&str, &str) -> String` implement it, and
//! [`DocumentTemplate`] covers the common case of a title plus entry
//! scripts and stylesheets.

use std::sync::Arc;

/// Shared handle to the host's root template
pub type SharedTemplate = Arc<dyn RootTemplate>;

/// Wraps server-rendered head tags and body markup into a full document
pub trait RootTemplate: Send + Sync {
    fn render(&self, head: &str, body: &str) -> String;
}

impl<F> RootTemplate for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn render(&self, head: &str, body: &str) -> String {
        self(head, body)
    }
}

/// A minimal HTML5 document
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    title: String,
    lang: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

impl DocumentTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: "en".to_string(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Add a stylesheet link
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    /// Add a module script, typically the client entry point
    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }
}

impl RootTemplate for DocumentTemplate {
    fn render(&self, head: &str, body: &str) -> String {
        let mut assets = String::new();
        for href in &self.stylesheets {
            assets.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(href)
            ));
        }
        for src in &self.scripts {
            assets.push_str(&format!(
                "<script type=\"module\" src=\"{}\"></script>\n",
                html_escape::encode_double_quoted_attribute(src)
            ));
        }

        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n{assets}{head}\n</head>\n<body>\n{body}\n</body>\n</html>\n",
            lang = html_escape::encode_double_quoted_attribute(&self.lang),
            title = html_escape::encode_text(&self.title),
        )
    }
}

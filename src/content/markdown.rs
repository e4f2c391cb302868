//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create with a specific syntect theme
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is stripped before rendering, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) => match code_block.as_mut() {
                    Some((_, code)) => code.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
            .and_then(|theme| {
                highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
            });

        match highlighted {
            Some(html) => format!(r#"<figure class="highlight {}">{}</figure>"#, lang, html),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

//! Stylesheet generation for paged output.
//!
//! The generated CSS sets page margins, puts the document title in the page
//! header and a "Page N of M" counter in the footer. Only the two footer words
//! depend on the document language.

/// Footer wording for the page counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Dutch,
}

impl Locale {
    /// Pick the locale for a `lang` setting. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "nl" => Locale::Dutch,
            _ => Locale::English,
        }
    }

    /// The words used in "Page N of M".
    pub const fn page_words(self) -> (&'static str, &'static str) {
        match self {
            Locale::English => ("Page", "of"),
            Locale::Dutch => ("Pagina", "van"),
        }
    }
}

/// Build the stylesheet for a document.
///
/// `title` is inserted as-is; the caller passes text that was already escaped.
pub fn generate_css(title: &str, language: &str) -> String {
    let (page, of) = Locale::from_code(language).page_words();

    format!(
        r#"
          @page {{
            margin: 3cm 2cm; padding-left: 1.5cm;
            @top-center {{
              content: "{title}";
              vertical-align: bottom; border-bottom: 0.5pt solid; margin-bottom: 0.5cm }}
            @bottom-right {{
              content: "{page} " counter(page) " {of} " counter(pages) }}}}
          body {{ text-align: justify }}
          h1 {{ -weasy-bookmark-level: none }}
          "#
    )
}

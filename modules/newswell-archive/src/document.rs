use scraper::{Html, Selector};

/// A parsed HTML document with selector-based lookups. Thin wrapper so the
/// rest of the pipeline depends on attribute/text/markup queries, not on a
/// particular parsing library.
///
/// Invalid selectors resolve to no match rather than panicking, since
/// selector chains are operator-supplied configuration.
pub struct Document {
    html: Html,
    url: String,
}

impl Document {
    pub fn parse(html: &str, url: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            url: url.to_string(),
        }
    }

    /// URL the document was fetched from. Base for resolving relative links.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Flattened, trimmed text of the first element matching `selector`.
    pub fn select_text(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let element = self.html.select(&sel).next()?;
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let text = collapse_whitespace(&text);
        (!text.is_empty()).then_some(text)
    }

    /// Value of `attr` on the first element matching `selector`.
    pub fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let value = self.html.select(&sel).next()?.value().attr(attr)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Inner markup of the first element matching `selector`.
    pub fn select_inner_html(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let inner = self.html.select(&sel).next()?.inner_html();
        let trimmed = inner.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// All `(href, text)` pairs from anchor elements, in document order.
    pub fn anchors(&self) -> Vec<(String, String)> {
        let sel = Selector::parse("a[href]").expect("valid selector");
        self.html
            .select(&sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?.trim();
                if href.is_empty() {
                    return None;
                }
                let text = collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "));
                Some((href.to_string(), text))
            })
            .collect()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

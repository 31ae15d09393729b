use scraper::{ElementRef, Html, Selector};

/// How a registered source's page is reduced to excerpts.
///
/// Each source gets one rule; the rules are applied through a single
/// dispatcher so changing a source touches one table entry instead of
/// a conditional chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Full trimmed text of the first element matching `tag.class`.
    ElementText {
        tag: &'static str,
        class: &'static str,
    },
    /// Trimmed text of the first `limit` paragraphs under `<body>`,
    /// in document order.
    LeadParagraphs { limit: usize },
}

impl ExtractionRule {
    /// Applies the rule to a parsed document.
    ///
    /// `None` means the rule's selector matched nothing and the caller
    /// should fall back; `Some` is the rule's verdict even when empty.
    pub fn apply(&self, document: &Html) -> Option<Vec<String>> {
        match *self {
            ExtractionRule::ElementText { tag, class } => {
                let selector = class_selector(tag, class)?;
                document
                    .select(&selector)
                    .next()
                    .map(|element| vec![element_text(element)])
            }
            ExtractionRule::LeadParagraphs { limit } => {
                let body = Selector::parse("body").ok()?;
                let paragraphs = Selector::parse("p").ok()?;
                let body_element = document.select(&body).next()?;
                Some(
                    body_element
                        .select(&paragraphs)
                        .take(limit)
                        .map(element_text)
                        .collect(),
                )
            }
        }
    }
}

/// Builds a `tag.class` selector; multi-valued class attributes become
/// compound class selectors.
fn class_selector(tag: &str, class: &str) -> Option<Selector> {
    let classes: Vec<&str> = class.split_whitespace().collect();
    if classes.is_empty() {
        return Selector::parse(tag).ok();
    }
    Selector::parse(&format!("{}.{}", tag, classes.join("."))).ok()
}

/// Concatenated text content with outer whitespace stripped.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_text_takes_first_match_trimmed() {
        let document = Html::parse_document(
            r#"<html><body>
                <div class="report-content">  Pomegranate leaves reduce inflammation.  </div>
                <div class="report-content">second match is ignored</div>
            </body></html>"#,
        );
        let rule = ExtractionRule::ElementText {
            tag: "div",
            class: "report-content",
        };
        assert_eq!(
            rule.apply(&document),
            Some(vec!["Pomegranate leaves reduce inflammation.".to_string()])
        );
    }

    #[test]
    fn multi_valued_class_attributes_match_as_compound_selectors() {
        let document = Html::parse_document(
            r#"<html><body>
                <div class="abstract-content selected">Jamun abstract.</div>
            </body></html>"#,
        );
        let rule = ExtractionRule::ElementText {
            tag: "div",
            class: "abstract-content selected",
        };
        assert_eq!(rule.apply(&document), Some(vec!["Jamun abstract.".to_string()]));
    }

    #[test]
    fn selector_miss_returns_none() {
        let document = Html::parse_document("<html><body><p>hello</p></body></html>");
        let rule = ExtractionRule::ElementText {
            tag: "div",
            class: "css-1avyp1d",
        };
        assert_eq!(rule.apply(&document), None);
    }

    #[test]
    fn lead_paragraphs_stop_at_limit_in_document_order() {
        let document = Html::parse_document(
            "<html><body><h1>Lemon</h1><p> one </p><p>two</p><p>three</p><p>four</p></body></html>",
        );
        let rule = ExtractionRule::LeadParagraphs { limit: 3 };
        assert_eq!(
            rule.apply(&document),
            Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
        );
    }

    #[test]
    fn lead_paragraphs_on_paragraphless_body_is_empty_but_matched() {
        let document = Html::parse_document("<html><body><div>no paragraphs here</div></body></html>");
        let rule = ExtractionRule::LeadParagraphs { limit: 6 };
        assert_eq!(rule.apply(&document), Some(vec![]));
    }

    #[test]
    fn nested_markup_flattens_into_one_excerpt() {
        let document = Html::parse_document(
            r#"<html><body><div class="content">Mustard <b>greens</b> are iron-rich.</div></body></html>"#,
        );
        let rule = ExtractionRule::ElementText {
            tag: "div",
            class: "content",
        };
        assert_eq!(
            rule.apply(&document),
            Some(vec!["Mustard greens are iron-rich.".to_string()])
        );
    }
}

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::rules::ExtractionRule;
use crate::labels::ClassLabel;

/// Where a species' information comes from and how to cut the relevant
/// excerpt out of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub url: String,
    /// Per-source extraction rule; `None` means the retriever goes
    /// straight to its generic body-text fallback.
    pub rule: Option<ExtractionRule>,
}

/// Static mapping from species label to its content source.
///
/// The builtin table is deployment configuration, curated per site and
/// never mutated at runtime. Substitute registries can be assembled
/// with `with_source` to keep the retriever testable.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    entries: HashMap<ClassLabel, SourceEntry>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the source for `label` (builder pattern).
    pub fn with_source(
        mut self,
        label: ClassLabel,
        url: impl Into<String>,
        rule: Option<ExtractionRule>,
    ) -> Self {
        self.entries.insert(
            label,
            SourceEntry {
                url: url.into(),
                rule,
            },
        );
        self
    }

    pub fn lookup(&self, label: ClassLabel) -> Option<&SourceEntry> {
        self.entries.get(&label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The curated production table: one source per species.
    pub fn builtin() -> &'static SourceRegistry {
        &BUILTIN
    }
}

lazy_static! {
    static ref BUILTIN: SourceRegistry = {
        use ClassLabel::*;
        use ExtractionRule::*;

        SourceRegistry::new()
            .with_source(
                SyzygiumCumini,
                "https://pubmed.ncbi.nlm.nih.gov/37667613/#:~:text=Leaves%20of%20jamun%20collected%20as,bladder%20stones%20and%20other%20ailments.",
                Some(ElementText { tag: "div", class: "abstract-content selected" }),
            )
            .with_source(
                OcimumTenuiflorum,
                "https://www.1mg.com/ayurveda/tulsi-12?wpsrc=Google+Organic+Search",
                Some(ElementText { tag: "div", class: "TextComponent__text___wvzbD" }),
            )
            .with_source(
                CitrusLimon,
                "https://www.vietnam.vn/en/la-chanh-giup-giai-cam-tri-ho-va-co-nhieu-loi-ich-cho-suc-khoe-bao-quang-nam-online/#:~:text=In%20addition%2C%20lemon%20leaves%20are%20also%20used%20to%20boil%20cold%20water.&text=Has%20antibacterial%20properties-,Lemon%20leaves%20have%20antibacterial%20properties%20and%20contain%20many%20compounds%20that,limonene%2C%20citral%2C%20and%20geraniol.",
                Some(LeadParagraphs { limit: 6 }),
            )
            .with_source(
                BrassicaJuncea,
                "https://www.indiatvnews.com/health/superfood-mustard-greens-know-these-5-benefits-of-sarson-ka-saag-2024-04-16-926450",
                Some(ElementText { tag: "div", class: "content" }),
            )
            .with_source(
                PsidiumGuajava,
                "https://www.healthline.com/nutrition/8-benefits-of-guavas#TOC_TITLE_HDR_2",
                Some(ElementText { tag: "div", class: "css-1avyp1d" }),
            )
            .with_source(
                PunicaGranatum,
                "https://www.medindia.net/news/healthwatch/pomegranate-leaves-natures-secret-remedy-for-health-and-wellness-215154-1.htm",
                Some(ElementText { tag: "div", class: "report-content" }),
            )
            .with_source(
                MangiferaIndica,
                "https://www.ifp.co.in/health/benefits-of-mango-leaves#google_vignette",
                Some(ElementText { tag: "div", class: "section-wrapper shadow-none article-body" }),
            )
            .with_source(
                Mentha,
                "https://www.1mg.com/articles/7-amazing-ways-pudina-mint-can-improve-your-health/",
                Some(ElementText { tag: "div", class: "entry-content clearfix" }),
            )
            .with_source(
                BasellaAlba,
                "http://ccras.nic.in/content/less-known-facts-about-health-benefits-basella-alba",
                Some(ElementText { tag: "div", class: "field-item even" }),
            )
            .with_source(
                AzadirachtaIndica,
                "https://www.1mg.com/ayurveda/neem-15?wpsrc=Google+Organic+Search",
                Some(ElementText { tag: "div", class: "TextComponent__text___wvzbD" }),
            )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_label() {
        let registry = SourceRegistry::builtin();
        assert_eq!(registry.len(), ClassLabel::ALL.len());
        for label in ClassLabel::ALL {
            let entry = registry.lookup(label).expect("every label has a source");
            assert!(!entry.url.is_empty());
            assert!(entry.url.starts_with("http"));
        }
    }

    #[test]
    fn lemon_uses_the_paragraph_rule() {
        let entry = SourceRegistry::builtin()
            .lookup(ClassLabel::CitrusLimon)
            .unwrap();
        assert_eq!(entry.rule, Some(ExtractionRule::LeadParagraphs { limit: 6 }));
    }

    #[test]
    fn with_source_replaces_existing_entries() {
        let registry = SourceRegistry::new()
            .with_source(ClassLabel::Mentha, "https://one.example", None)
            .with_source(ClassLabel::Mentha, "https://two.example", None);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup(ClassLabel::Mentha).unwrap().url,
            "https://two.example"
        );
    }

    #[test]
    fn lookup_miss_is_not_an_error() {
        assert!(SourceRegistry::new().lookup(ClassLabel::Mentha).is_none());
    }
}

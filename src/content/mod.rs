//! Prompt content model.
//!
//! The content resource is a JSON array of prompt records. Records are
//! decoded leniently: a record with missing or mistyped fields is kept as an
//! invalid `PromptRecord` and later dropped by [`selection::select`], so one
//! bad entry never takes the whole document down.

pub mod selection;

use serde::Deserialize;

/// Prompt line shown by a panel that received no content.
pub const PLACEHOLDER_PROMPT: &str = "More prompts coming soon";

/// Raw record as it appears in the content resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptRecord {
    pub prompt: Option<String>,
    pub background: Option<String>,
    pub slider_images: Option<Vec<String>>,
    pub slider_text: Option<Vec<String>>,
}

/// One page of a panel's slide viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub text: String,
}

/// A validated record: every field present, at least one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub prompt: String,
    pub background: String,
    pub slides: Vec<Slide>,
}

impl PromptRecord {
    /// Validate the record.
    ///
    /// Slides pair `sliderImages[i]` with `sliderText[i]`; if the two
    /// sequences differ in length the longer one's tail is ignored.
    pub fn validate(&self) -> Option<Prompt> {
        let prompt = self.prompt.as_ref()?;
        let background = self.background.as_ref()?;
        let images = self.slider_images.as_deref().filter(|v| !v.is_empty())?;
        let texts = self.slider_text.as_deref().filter(|v| !v.is_empty())?;

        let slides = images
            .iter()
            .zip(texts)
            .map(|(image, text)| Slide {
                image: image.clone(),
                text: text.clone(),
            })
            .collect();

        Some(Prompt {
            prompt: prompt.clone(),
            background: background.clone(),
            slides,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_some()
    }
}

impl Prompt {
    /// Every image this prompt displays: background first, then slides.
    pub fn image_sources(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.background.as_str())
            .chain(self.slides.iter().map(|s| s.image.as_str()))
    }
}

/// Decode the content resource.
///
/// Fails only if the document is not a JSON array. Elements that do not
/// match the record shape become `PromptRecord::default()` (invalid).
pub fn parse_records(json: &str) -> Result<Vec<PromptRecord>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let records = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                log::warn!("Prompt record #{} is malformed: {}", i, e);
                PromptRecord::default()
            })
        })
        .collect();
    Ok(records)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(n: usize) -> PromptRecord {
        PromptRecord {
            prompt: Some(format!("prompt {}", n)),
            background: Some(format!("bg{}.png", n)),
            slider_images: Some(vec![format!("a{}.png", n), format!("b{}.png", n)]),
            slider_text: Some(vec![format!("first {}", n), format!("second {}", n)]),
        }
    }

    #[test]
    fn parses_camel_case_fields() {
        let json = r#"[{
            "prompt": "Paint a fox",
            "background": "fox.jpg",
            "sliderImages": ["f1.jpg", "f2.jpg"],
            "sliderText": ["one", "two"]
        }]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 1);
        let prompt = records[0].validate().unwrap();
        assert_eq!(prompt.prompt, "Paint a fox");
        assert_eq!(prompt.slides.len(), 2);
        assert_eq!(prompt.slides[1].image, "f2.jpg");
        assert_eq!(prompt.slides[1].text, "two");
    }

    #[test]
    fn malformed_elements_become_invalid_records() {
        let json = r#"[
            {"prompt": 5, "background": "x.jpg"},
            "not an object",
            {"prompt": "ok", "background": "b.jpg", "sliderImages": ["i.jpg"], "sliderText": ["t"]}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 3);
        assert!(!records[0].is_valid());
        assert!(!records[1].is_valid());
        assert!(records[2].is_valid());
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(parse_records(r#"{"prompt": "x"}"#).is_err());
    }

    #[test]
    fn empty_sequences_are_invalid() {
        let mut r = record(1);
        r.slider_text = Some(Vec::new());
        assert!(!r.is_valid());

        let mut r = record(1);
        r.slider_images = None;
        assert!(!r.is_valid());

        let mut r = record(1);
        r.background = None;
        assert!(!r.is_valid());
    }

    #[test]
    fn mismatched_lengths_use_shorter_sequence() {
        let mut r = record(1);
        r.slider_text = Some(vec!["only".to_string()]);
        let prompt = r.validate().unwrap();
        assert_eq!(prompt.slides.len(), 1);
        assert_eq!(prompt.slides[0].text, "only");
    }

    #[test]
    fn image_sources_lists_background_first() {
        let prompt = record(3).validate().unwrap();
        let sources: Vec<&str> = prompt.image_sources().collect();
        assert_eq!(sources, vec!["bg3.png", "a3.png", "b3.png"]);
    }
}

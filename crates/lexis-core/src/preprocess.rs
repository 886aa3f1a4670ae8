use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Turn a raw editor selection into a lookup term
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // A selection dragged across lines still names one word or phrase
        text = text.replace(['\n', '\r'], " ");
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

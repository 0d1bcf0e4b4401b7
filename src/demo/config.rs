//! Inputs for the demo runners.

/// Titles shelved by the iterator demo when none are supplied.
pub const DEFAULT_TITLES: [&str; 3] = ["Java 언어로 배우는 디자인 패턴 입문", "Clean Code", "월든"];

/// Parameters for the three demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Titles appended to the shelf, in order.
    pub titles: Vec<String>,
    /// Symbol repeated by the char display.
    pub symbol: char,
    /// Text framed by the string display.
    pub text: String,
    /// Text printed with strong emphasis by the banner.
    pub banner_strong: String,
    /// Text printed with weak emphasis by the banner.
    pub banner_weak: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            titles: DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
            symbol: 'C',
            text: "Hello World!!".to_string(),
            banner_strong: "HELLO!".to_string(),
            banner_weak: "bye...".to_string(),
        }
    }
}

impl DemoConfig {
    /// Replace the shelved titles.
    pub fn with_titles<I, T>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the char display symbol.
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Set the string display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set both banner texts.
    pub fn with_banner(mut self, strong: impl Into<String>, weak: impl Into<String>) -> Self {
        self.banner_strong = strong.into();
        self.banner_weak = weak.into();
        self
    }
}

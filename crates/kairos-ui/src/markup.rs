//! Minimal declarative output handed to the host's renderer.

/// One styled text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    /// Font size relative to the host's base size for the widget
    /// (`1.0` = unscaled).
    pub font_scale: f32,
}

impl Span {
    pub fn new(text: impl Into<String>, font_scale: f32) -> Self {
        Self { text: text.into(), font_scale }
    }
}

/// A flat run of spans — all the markup a stopwatch needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markup {
    pub spans: Vec<Span>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span (builder style).
    pub fn span(mut self, text: impl Into<String>, font_scale: f32) -> Self {
        self.spans.push(Span::new(text, font_scale));
        self
    }

    /// All span text concatenated, styling dropped. Useful for terminal
    /// hosts and assertions.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_spans() {
        let m = Markup::new().span("01:02.", 1.0).span("345", 0.6);
        assert_eq!(m.text(), "01:02.345");
    }
}

use std::collections::HashMap;

use log::debug;

use crate::widget::Element;

// ── TagProps ──────────────────────────────────────────────────────────────

/// String-keyed property bag attached to a markup tag.
#[derive(Debug, Clone, Default)]
pub struct TagProps(HashMap<String, String>);

impl TagProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Typed accessor; unparseable values read as absent.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        self.prop_str(key)?.parse().ok()
    }
}

// ── WidgetRegistry ────────────────────────────────────────────────────────

type BuildFn = Box<dyn Fn(&TagProps) -> Element>;

/// Tag-name registry used by markup-driven hosts.
///
/// The embedding application registers every tag it wants to support,
/// explicitly, once, at startup:
///
/// ```rust,ignore
/// let mut registry = WidgetRegistry::new();
/// StopwatchWidget::register(&mut registry);
/// ```
///
/// Unknown tags build to `None` rather than failing — the host decides how
/// to render the gap.
#[derive(Default)]
pub struct WidgetRegistry {
    builders: HashMap<String, BuildFn>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `tag` with a builder. Re-registering a tag replaces the
    /// previous builder.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        build: impl Fn(&TagProps) -> Element + 'static,
    ) {
        let tag = tag.into();
        if self.builders.insert(tag.clone(), Box::new(build)).is_some() {
            debug!("tag re-registered: {tag}");
        } else {
            debug!("tag registered: {tag}");
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    /// Instantiates the widget registered under `tag`.
    pub fn build(&self, tag: &str, props: &TagProps) -> Option<Element> {
        self.builders.get(tag).map(|build| build(props))
    }
}

#[cfg(test)]
mod tests {
    use crate::markup::Markup;
    use crate::widget::Widget;

    use super::*;

    struct Label(String);

    impl Widget for Label {
        fn view(&self) -> Markup {
            Markup::new().span(self.0.clone(), 1.0)
        }
    }

    #[test]
    fn builds_registered_tag() {
        let mut registry = WidgetRegistry::new();
        registry.register("Label", |props| {
            Label(props.prop_str("text").unwrap_or("?").to_string()).into()
        });

        let props = TagProps::new().with("text", "hi");
        let element = registry.build("Label", &props).unwrap();
        assert_eq!(element.view().text(), "hi");
    }

    #[test]
    fn unknown_tag_builds_to_none() {
        let registry = WidgetRegistry::new();
        assert!(registry.build("Nope", &TagProps::new()).is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = WidgetRegistry::new();
        registry.register("Label", |_| Label("first".into()).into());
        registry.register("Label", |_| Label("second".into()).into());

        let element = registry.build("Label", &TagProps::new()).unwrap();
        assert_eq!(element.view().text(), "second");
    }

    #[test]
    fn prop_f32_ignores_garbage() {
        let props = TagProps::new().with("scale", "0.45").with("junk", "big");
        assert_eq!(props.prop_f32("scale"), Some(0.45));
        assert_eq!(props.prop_f32("junk"), None);
        assert_eq!(props.prop_f32("missing"), None);
    }
}

#![forbid(unsafe_code)]

//! Applying resolution results to a widget.
//!
//! A host widget exposes its displayed attributes through [`Localizable`].
//! [`localize_widget`] walks the widget kind's binding table, asks the
//! resolver for each attribute, writes the results back and stores captured
//! keys in the widget's [`LocalizeProps`].
//!
//! # Invariants
//!
//! 1. Bindings are applied in table order, so a key captured by an earlier
//!    binding is seen by later bindings reading the same slot.
//! 2. Segment titles never capture keys.
//! 3. An attribute with neither a usable key nor a displayed value is left
//!    untouched. An empty key counts as no key.
//! 4. Images are only touched through an explicit, non-empty key.

use tagloc_core::{
    FontSpec, KeyResolver, Translate, TranslateFont, TranslateImage, key_for_segment, usable_key,
};

use crate::attribute::{Attribute, Binding, KeySlot, WidgetKind};
use crate::props::LocalizeProps;

/// Displayed attributes of a host widget.
///
/// Only [`kind`](Self::kind) and the text accessors are required; kinds
/// without fonts, images or segments keep the default no-op accessors.
pub trait Localizable {
    /// Image handle type the widget displays.
    type Image;

    /// Which binding table applies.
    fn kind(&self) -> WidgetKind;

    /// Currently displayed text for `attribute`.
    fn text(&self, attribute: Attribute) -> Option<&str>;

    fn set_text(&mut self, attribute: Attribute, text: String);

    fn font(&self) -> Option<FontSpec> {
        None
    }

    fn set_font(&mut self, _font: FontSpec) {}

    fn image(&self, _attribute: Attribute) -> Option<Self::Image> {
        None
    }

    fn set_image(&mut self, _attribute: Attribute, _image: Self::Image) {}

    fn segment_count(&self) -> usize {
        0
    }

    fn segment_title(&self, _index: usize) -> Option<&str> {
        None
    }

    fn set_segment_title(&mut self, _index: usize, _title: String) {}
}

impl<W: Localizable + ?Sized> Localizable for Box<W> {
    type Image = W::Image;

    fn kind(&self) -> WidgetKind {
        (**self).kind()
    }

    fn text(&self, attribute: Attribute) -> Option<&str> {
        (**self).text(attribute)
    }

    fn set_text(&mut self, attribute: Attribute, text: String) {
        (**self).set_text(attribute, text);
    }

    fn font(&self) -> Option<FontSpec> {
        (**self).font()
    }

    fn set_font(&mut self, font: FontSpec) {
        (**self).set_font(font);
    }

    fn image(&self, attribute: Attribute) -> Option<Self::Image> {
        (**self).image(attribute)
    }

    fn set_image(&mut self, attribute: Attribute, image: Self::Image) {
        (**self).set_image(attribute, image);
    }

    fn segment_count(&self) -> usize {
        (**self).segment_count()
    }

    fn segment_title(&self, index: usize) -> Option<&str> {
        (**self).segment_title(index)
    }

    fn set_segment_title(&mut self, index: usize, title: String) {
        (**self).set_segment_title(index, title);
    }
}

/// What one [`localize_widget`] call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizeReport {
    /// Text attributes written.
    pub texts: usize,
    /// Fonts written.
    pub fonts: usize,
    /// Images written.
    pub images: usize,
    /// Segment titles written.
    pub segments: usize,
    /// Slots that received a captured key, in capture order.
    pub captured: Vec<KeySlot>,
}

impl LocalizeReport {
    /// Number of attributes written.
    #[must_use]
    pub fn total(&self) -> usize {
        self.texts + self.fonts + self.images + self.segments
    }
}

/// Localize every attribute of `widget` described by its kind's table.
pub fn localize_widget<T, W>(
    resolver: &KeyResolver<T>,
    props: &mut LocalizeProps,
    widget: &mut W,
) -> LocalizeReport
where
    T: Translate + TranslateFont + TranslateImage,
    W: Localizable<Image = T::Image> + ?Sized,
{
    let kind = widget.kind();
    let mut report = LocalizeReport::default();

    for binding in kind.bindings() {
        match *binding {
            Binding::Text { attribute, key } => {
                apply_text(resolver, props, widget, attribute, key, &mut report);
            }
            Binding::Font { key, size } => {
                let observed = widget.font();
                if let Some(font) =
                    resolver.resolve_font(props.slot(key), props.slot(size), observed)
                {
                    widget.set_font(font);
                    report.fonts += 1;
                }
            }
            Binding::Image { attribute, key } => {
                if usable_key(props.slot(key)).is_none() {
                    continue;
                }
                let observed = widget.image(attribute);
                if let Some(image) = resolver.resolve_image(props.slot(key), observed) {
                    widget.set_image(attribute, image);
                    report.images += 1;
                }
            }
            Binding::Segments { key } => {
                report.segments += apply_segments(resolver, props.slot(key), widget);
            }
        }
    }

    tracing::trace!(
        target: "tagloc.widgets",
        kind = ?kind,
        written = report.total(),
        captured = report.captured.len(),
        "widgets.localized"
    );
    report
}

fn apply_text<T, W>(
    resolver: &KeyResolver<T>,
    props: &mut LocalizeProps,
    widget: &mut W,
    attribute: Attribute,
    slot: KeySlot,
    report: &mut LocalizeReport,
) where
    T: Translate,
    W: Localizable + ?Sized,
{
    let key = props.slot(slot);
    let value = widget.text(attribute);
    if usable_key(key).is_none() && value.is_none() {
        return;
    }
    let resolution = resolver.resolve_text(key, value, true);
    if resolution.captured {
        tracing::debug!(
            target: "tagloc.widgets",
            slot = %slot,
            key = resolution.key.as_deref().unwrap_or_default(),
            "widgets.key_stored"
        );
        props.set_slot(slot, resolution.key);
        report.captured.push(slot);
    }
    widget.set_text(attribute, resolution.text);
    report.texts += 1;
}

fn apply_segments<T, W>(resolver: &KeyResolver<T>, spec: Option<&str>, widget: &mut W) -> usize
where
    T: Translate,
    W: Localizable + ?Sized,
{
    let mut written = 0;
    for index in 0..widget.segment_count() {
        let key = key_for_segment(index, spec);
        let value = widget.segment_title(index);
        if key.is_none() && value.is_none() {
            continue;
        }
        let resolution = resolver.resolve_text(key.as_deref(), value, false);
        widget.set_segment_title(index, resolution.text);
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ControlState;
    use crate::model::WidgetModel;
    use tagloc_catalog::{ActiveCatalog, LocaleStrings, StringCatalog};

    fn resolver() -> KeyResolver<ActiveCatalog<&'static str>> {
        let mut catalog = StringCatalog::new();
        catalog.add_locale(
            "es",
            LocaleStrings::from_iter([
                ("Save", "Guardar"),
                ("button.open", "Abrir"),
                ("title.home", "Inicio"),
                ("tabs.first", "Primero"),
                ("tabs.second", "Segundo"),
                ("Cancel", "Cancelar"),
                ("size.body", "18"),
            ]),
        );
        catalog.add_fonts("es", [("font.bold", "Lato-Bold"), ("font.body", "Lato")]);
        catalog.add_image("es", "img.flag", "flag_es.png");
        catalog.add_image("es", "img.flag.hi", "flag_es_hi.png");
        KeyResolver::new(ActiveCatalog::new(catalog, "es").unwrap())
    }

    // ── Text bindings ──────────────────────────────────────────────

    #[test]
    fn label_with_explicit_key() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Key, "button.open");
        let mut label = WidgetModel::new(WidgetKind::Label).with_text(Attribute::Text, "Open");
        let report = localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.text(Attribute::Text), Some("Abrir"));
        assert_eq!(report.texts, 1);
        assert!(report.captured.is_empty());
    }

    #[test]
    fn label_captures_key_from_text() {
        let mut props = LocalizeProps::new();
        let mut label = WidgetModel::new(WidgetKind::Label).with_text(Attribute::Text, "Save");
        let report = localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.text(Attribute::Text), Some("Guardar"));
        assert_eq!(props.slot(KeySlot::Key), Some("Save"));
        assert_eq!(report.captured, vec![KeySlot::Key]);
    }

    #[test]
    fn second_pass_resolves_through_captured_key() {
        let res = resolver();
        let mut props = LocalizeProps::new();
        let mut label = WidgetModel::new(WidgetKind::Label).with_text(Attribute::Text, "Save");
        localize_widget(&res, &mut props, &mut label);
        let report = localize_widget(&res, &mut props, &mut label);
        assert_eq!(label.text(Attribute::Text), Some("Guardar"));
        assert!(report.captured.is_empty());
    }

    #[test]
    fn untagged_empty_attribute_is_untouched() {
        let mut props = LocalizeProps::new();
        let mut item = WidgetModel::<&str>::new(WidgetKind::NavigationItem);
        let report = localize_widget(&resolver(), &mut props, &mut item);
        assert_eq!(item.text(Attribute::Title), None);
        assert_eq!(item.text(Attribute::Prompt), None);
        assert_eq!(report, LocalizeReport::default());
    }

    #[test]
    fn empty_key_without_text_is_untouched() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Key, "");
        let mut label = WidgetModel::<&str>::new(WidgetKind::Label);
        let report = localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.text(Attribute::Text), None);
        assert_eq!(report.texts, 0);
        assert_eq!(props.slot(KeySlot::Key), Some(""));
    }

    #[test]
    fn empty_key_with_text_falls_back_to_value() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Key, "");
        let mut label = WidgetModel::new(WidgetKind::Label).with_text(Attribute::Text, "Save");
        let report = localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.text(Attribute::Text), Some("Guardar"));
        assert_eq!(props.slot(KeySlot::Key), Some("Save"));
        assert_eq!(report.captured, vec![KeySlot::Key]);
    }

    #[test]
    fn untranslated_text_is_kept_without_capture() {
        let mut props = LocalizeProps::new();
        let mut vc = WidgetModel::new(WidgetKind::ViewController).with_text(Attribute::Title, "Settings");
        localize_widget(&resolver(), &mut props, &mut vc);
        assert_eq!(vc.text(Attribute::Title), Some("Settings"));
        assert_eq!(props.slot(KeySlot::Title), None);
    }

    #[test]
    fn button_state_titles_reuse_captured_key() {
        let mut props = LocalizeProps::new();
        let mut button = WidgetModel::new(WidgetKind::Button)
            .with_text(Attribute::Title, "Cancel")
            .with_text(Attribute::StateTitle(ControlState::Selected), "Something else");
        let report = localize_widget(&resolver(), &mut props, &mut button);
        assert_eq!(props.slot(KeySlot::Key), Some("Cancel"));
        assert_eq!(button.text(Attribute::Title), Some("Cancelar"));
        for state in [
            ControlState::Normal,
            ControlState::Highlighted,
            ControlState::Selected,
            ControlState::Disabled,
        ] {
            assert_eq!(button.text(Attribute::StateTitle(state)), Some("Cancelar"));
        }
        assert_eq!(report.texts, 5);
        assert_eq!(report.captured, vec![KeySlot::Key]);
    }

    #[test]
    fn text_field_keys_are_independent() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Placeholder, "title.home");
        let mut field = WidgetModel::new(WidgetKind::TextField).with_text(Attribute::Text, "Save");
        localize_widget(&resolver(), &mut props, &mut field);
        assert_eq!(field.text(Attribute::Text), Some("Guardar"));
        assert_eq!(field.text(Attribute::Placeholder), Some("Inicio"));
        assert_eq!(props.slot(KeySlot::Text), Some("Save"));
        assert_eq!(props.slot(KeySlot::Key), None);
    }

    // ── Fonts ──────────────────────────────────────────────────────

    #[test]
    fn font_inferred_from_observed_name() {
        let mut props = LocalizeProps::new();
        let mut label = WidgetModel::new(WidgetKind::Label)
            .with_text(Attribute::Text, "x")
            .with_font(FontSpec::new("Helvetica-Bold", 15.0));
        let report = localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.font(), Some(FontSpec::new("Lato-Bold", 15.0)));
        assert_eq!(report.fonts, 1);
    }

    #[test]
    fn font_with_explicit_keys() {
        let mut props = LocalizeProps::new()
            .with_slot(KeySlot::FontName, "font.body")
            .with_slot(KeySlot::FontSize, "size.body");
        let mut view = WidgetModel::new(WidgetKind::TextView).with_font(FontSpec::new("Arial", 11.0));
        localize_widget(&resolver(), &mut props, &mut view);
        assert_eq!(view.font(), Some(FontSpec::new("Lato", 18.0)));
    }

    #[test]
    fn unknown_font_is_kept() {
        let mut props = LocalizeProps::new();
        let observed = FontSpec::new("Courier", 10.0);
        let mut label = WidgetModel::<&str>::new(WidgetKind::Label).with_font(observed.clone());
        localize_widget(&resolver(), &mut props, &mut label);
        assert_eq!(label.font(), Some(observed));
    }

    // ── Images ─────────────────────────────────────────────────────

    #[test]
    fn image_view_uses_explicit_keys_only() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Image, "img.flag");
        let mut view = WidgetModel::new(WidgetKind::ImageView)
            .with_image(Attribute::Image, "flag_en.png")
            .with_image(Attribute::HighlightedImage, "flag_en_hi.png");
        let report = localize_widget(&resolver(), &mut props, &mut view);
        assert_eq!(view.image(Attribute::Image), Some("flag_es.png"));
        assert_eq!(view.image(Attribute::HighlightedImage), Some("flag_en_hi.png"));
        assert_eq!(report.images, 1);
    }

    #[test]
    fn empty_image_key_is_ignored() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Highlighted, "");
        let mut view = WidgetModel::new(WidgetKind::ImageView)
            .with_image(Attribute::HighlightedImage, "keep.png");
        let report = localize_widget(&resolver(), &mut props, &mut view);
        assert_eq!(view.image(Attribute::HighlightedImage), Some("keep.png"));
        assert_eq!(report.images, 0);
    }

    #[test]
    fn button_backgrounds_per_state() {
        let mut props = LocalizeProps::new()
            .with_slot(KeySlot::Background, "img.flag")
            .with_slot(KeySlot::BackgroundSelected, "img.flag.hi");
        let mut button = WidgetModel::new(WidgetKind::Button);
        localize_widget(&resolver(), &mut props, &mut button);
        assert_eq!(
            button.image(Attribute::Background(ControlState::Normal)),
            Some("flag_es.png")
        );
        assert_eq!(
            button.image(Attribute::Background(ControlState::Selected)),
            Some("flag_es_hi.png")
        );
    }

    // ── Segments ───────────────────────────────────────────────────

    #[test]
    fn segments_follow_rooted_spec() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Key, "tabs: first, second");
        let mut control = WidgetModel::<&str>::new(WidgetKind::SegmentedControl)
            .with_segments(["One", "Two", "Three"]);
        let report = localize_widget(&resolver(), &mut props, &mut control);
        assert_eq!(control.segment_title(0), Some("Primero"));
        assert_eq!(control.segment_title(1), Some("Segundo"));
        assert_eq!(control.segment_title(2), Some("Three"));
        assert_eq!(report.segments, 3);
    }

    #[test]
    fn untitled_segment_without_key_is_untouched() {
        let mut props = LocalizeProps::new().with_slot(KeySlot::Key, "tabs: first,,second");
        let mut control = WidgetModel::<&str>::new(WidgetKind::SegmentedControl)
            .with_segments(["One"])
            .with_untitled_segment()
            .with_untitled_segment()
            .with_untitled_segment();
        let report = localize_widget(&resolver(), &mut props, &mut control);
        assert_eq!(control.segment_title(0), Some("Primero"));
        // Empty key in the spec and no title.
        assert_eq!(control.segment_title(1), None);
        assert_eq!(control.segment_title(2), Some("Segundo"));
        // Past the end of the spec and no title.
        assert_eq!(control.segment_title(3), None);
        assert_eq!(report.segments, 2);
    }

    #[test]
    fn segments_never_capture() {
        let mut props = LocalizeProps::new();
        let mut control =
            WidgetModel::<&str>::new(WidgetKind::SegmentedControl).with_segments(["Save", "Cancel"]);
        let report = localize_widget(&resolver(), &mut props, &mut control);
        assert_eq!(control.segment_title(0), Some("Guardar"));
        assert_eq!(control.segment_title(1), Some("Cancelar"));
        assert_eq!(props.slot(KeySlot::Key), None);
        assert!(report.captured.is_empty());
    }

    // ── Boxed widgets ──────────────────────────────────────────────

    #[test]
    fn boxed_widget_forwards() {
        let mut props = LocalizeProps::new();
        let mut boxed: Box<dyn Localizable<Image = &'static str>> =
            Box::new(WidgetModel::new(WidgetKind::TabBarItem).with_text(Attribute::Title, "Save"));
        localize_widget(&resolver(), &mut props, &mut boxed);
        assert_eq!(boxed.kind(), WidgetKind::TabBarItem);
        assert_eq!(boxed.text(Attribute::Title), Some("Guardar"));
    }
}

#![forbid(unsafe_code)]

//! Declarative table of what each widget kind localizes.
//!
//! Every supported widget kind is described by a list of [`Binding`]s. A
//! binding names the displayed attribute, the resolver that handles it, and
//! the [`KeySlot`]s its keys are stored in. The adapter walks this table;
//! there is no per-kind localization code.
//!
//! | kind | bindings |
//! |---|---|
//! | bar button item | title ← `key` |
//! | button | title and the four state titles ← `key`, font ← `font_name`/`font_size`, normal background ← `background`, selected background ← `background_selected` |
//! | label | text ← `key`, font |
//! | navigation item | title ← `title`, prompt ← `prompt` |
//! | search bar | placeholder ← `placeholder`, prompt ← `prompt` |
//! | segmented control | segment titles ← `key` (segmented spec) |
//! | tab bar item | title ← `key` |
//! | text field | text ← `text`, placeholder ← `placeholder`, font |
//! | text view | text ← `key`, font |
//! | view controller | title ← `title` |
//! | image view | image ← `image`, highlighted image ← `highlighted` |

use std::fmt;

use bitflags::bitflags;

/// Storage slot for one localization key on a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeySlot {
    Key,
    Title,
    Text,
    Placeholder,
    Prompt,
    FontName,
    FontSize,
    Background,
    BackgroundSelected,
    Image,
    Highlighted,
}

impl KeySlot {
    /// Every slot, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Key,
        Self::Title,
        Self::Text,
        Self::Placeholder,
        Self::Prompt,
        Self::FontName,
        Self::FontSize,
        Self::Background,
        Self::BackgroundSelected,
        Self::Image,
        Self::Highlighted,
    ];

    /// Inspector property name designers tag widgets with.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Key => "localizeKey",
            Self::Title => "localizeTitle",
            Self::Text => "localizeText",
            Self::Placeholder => "localizePlaceholder",
            Self::Prompt => "localizePrompt",
            Self::FontName => "localizeFontName",
            Self::FontSize => "localizeFontSize",
            Self::Background => "localizeBackground",
            Self::BackgroundSelected => "localizeBackgroundSelected",
            Self::Image => "localizeImage",
            Self::Highlighted => "localizeHighlighted",
        }
    }

    /// Slot for an inspector property name.
    #[must_use]
    pub fn from_property_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.property_name() == name)
    }

    /// Flag for this slot in a [`SlotSet`].
    #[must_use]
    pub const fn flag(self) -> SlotSet {
        match self {
            Self::Key => SlotSet::KEY,
            Self::Title => SlotSet::TITLE,
            Self::Text => SlotSet::TEXT,
            Self::Placeholder => SlotSet::PLACEHOLDER,
            Self::Prompt => SlotSet::PROMPT,
            Self::FontName => SlotSet::FONT_NAME,
            Self::FontSize => SlotSet::FONT_SIZE,
            Self::Background => SlotSet::BACKGROUND,
            Self::BackgroundSelected => SlotSet::BACKGROUND_SELECTED,
            Self::Image => SlotSet::IMAGE,
            Self::Highlighted => SlotSet::HIGHLIGHTED,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for KeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_name())
    }
}

bitflags! {
    /// Set of key slots, e.g. the slots a widget kind reads.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SlotSet: u16 {
        const KEY = 1 << 0;
        const TITLE = 1 << 1;
        const TEXT = 1 << 2;
        const PLACEHOLDER = 1 << 3;
        const PROMPT = 1 << 4;
        const FONT_NAME = 1 << 5;
        const FONT_SIZE = 1 << 6;
        const BACKGROUND = 1 << 7;
        const BACKGROUND_SELECTED = 1 << 8;
        const IMAGE = 1 << 9;
        const HIGHLIGHTED = 1 << 10;
    }
}

/// Interaction state of a control with per-state content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlState {
    Normal,
    Highlighted,
    Selected,
    Disabled,
}

/// A displayed, localizable attribute of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Title,
    /// Title shown for one control state.
    StateTitle(ControlState),
    Text,
    Placeholder,
    Prompt,
    Font,
    Image,
    HighlightedImage,
    /// Background image for one control state.
    Background(ControlState),
}

/// One row of a widget kind's localization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Text resolved with key capture into `key`.
    Text { attribute: Attribute, key: KeySlot },
    /// Font resolved from a style key and a size key.
    Font { key: KeySlot, size: KeySlot },
    /// Image resolved from an explicit key only.
    Image { attribute: Attribute, key: KeySlot },
    /// Per-segment titles addressed by a segmented key spec, no capture.
    Segments { key: KeySlot },
}

impl Binding {
    /// Slots this binding reads.
    #[must_use]
    pub const fn slots(&self) -> SlotSet {
        match *self {
            Self::Text { key, .. } | Self::Image { key, .. } | Self::Segments { key } => key.flag(),
            Self::Font { key, size } => key.flag().union(size.flag()),
        }
    }
}

const fn text(attribute: Attribute, key: KeySlot) -> Binding {
    Binding::Text { attribute, key }
}

const fn image(attribute: Attribute, key: KeySlot) -> Binding {
    Binding::Image { attribute, key }
}

const FONT: Binding = Binding::Font {
    key: KeySlot::FontName,
    size: KeySlot::FontSize,
};

const BAR_BUTTON_ITEM: &[Binding] = &[text(Attribute::Title, KeySlot::Key)];

const BUTTON: &[Binding] = &[
    text(Attribute::Title, KeySlot::Key),
    text(Attribute::StateTitle(ControlState::Normal), KeySlot::Key),
    text(Attribute::StateTitle(ControlState::Highlighted), KeySlot::Key),
    text(Attribute::StateTitle(ControlState::Selected), KeySlot::Key),
    text(Attribute::StateTitle(ControlState::Disabled), KeySlot::Key),
    FONT,
    image(Attribute::Background(ControlState::Normal), KeySlot::Background),
    image(
        Attribute::Background(ControlState::Selected),
        KeySlot::BackgroundSelected,
    ),
];

const LABEL: &[Binding] = &[text(Attribute::Text, KeySlot::Key), FONT];

const NAVIGATION_ITEM: &[Binding] = &[
    text(Attribute::Title, KeySlot::Title),
    text(Attribute::Prompt, KeySlot::Prompt),
];

const SEARCH_BAR: &[Binding] = &[
    text(Attribute::Placeholder, KeySlot::Placeholder),
    text(Attribute::Prompt, KeySlot::Prompt),
];

const SEGMENTED_CONTROL: &[Binding] = &[Binding::Segments { key: KeySlot::Key }];

const TAB_BAR_ITEM: &[Binding] = &[text(Attribute::Title, KeySlot::Key)];

const TEXT_FIELD: &[Binding] = &[
    text(Attribute::Text, KeySlot::Text),
    text(Attribute::Placeholder, KeySlot::Placeholder),
    FONT,
];

const TEXT_VIEW: &[Binding] = &[text(Attribute::Text, KeySlot::Key), FONT];

const VIEW_CONTROLLER: &[Binding] = &[text(Attribute::Title, KeySlot::Title)];

const IMAGE_VIEW: &[Binding] = &[
    image(Attribute::Image, KeySlot::Image),
    image(Attribute::HighlightedImage, KeySlot::Highlighted),
];

/// Kinds of widgets the adapter knows how to localize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    BarButtonItem,
    Button,
    Label,
    NavigationItem,
    SearchBar,
    SegmentedControl,
    TabBarItem,
    TextField,
    TextView,
    ViewController,
    ImageView,
}

impl WidgetKind {
    /// Every kind.
    pub const ALL: [Self; 11] = [
        Self::BarButtonItem,
        Self::Button,
        Self::Label,
        Self::NavigationItem,
        Self::SearchBar,
        Self::SegmentedControl,
        Self::TabBarItem,
        Self::TextField,
        Self::TextView,
        Self::ViewController,
        Self::ImageView,
    ];

    /// The localization table of this kind, in resolution order.
    #[must_use]
    pub const fn bindings(self) -> &'static [Binding] {
        match self {
            Self::BarButtonItem => BAR_BUTTON_ITEM,
            Self::Button => BUTTON,
            Self::Label => LABEL,
            Self::NavigationItem => NAVIGATION_ITEM,
            Self::SearchBar => SEARCH_BAR,
            Self::SegmentedControl => SEGMENTED_CONTROL,
            Self::TabBarItem => TAB_BAR_ITEM,
            Self::TextField => TEXT_FIELD,
            Self::TextView => TEXT_VIEW,
            Self::ViewController => VIEW_CONTROLLER,
            Self::ImageView => IMAGE_VIEW,
        }
    }

    /// Slots read by any binding of this kind.
    #[must_use]
    pub fn slots(self) -> SlotSet {
        self.bindings()
            .iter()
            .fold(SlotSet::empty(), |acc, b| acc | b.slots())
    }

    /// Whether this kind reads `slot`.
    #[must_use]
    pub fn exposes(self, slot: KeySlot) -> bool {
        self.slots().contains(slot.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_round_trip() {
        for slot in KeySlot::ALL {
            assert_eq!(KeySlot::from_property_name(slot.property_name()), Some(slot));
        }
        assert_eq!(KeySlot::from_property_name("localizeNothing"), None);
    }

    #[test]
    fn slot_indices_are_dense() {
        for (i, slot) in KeySlot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn slot_flags_are_distinct() {
        let all = KeySlot::ALL
            .into_iter()
            .fold(SlotSet::empty(), |acc, s| acc | s.flag());
        assert_eq!(all, SlotSet::all());
        assert_eq!(all.bits().count_ones(), 11);
    }

    #[test]
    fn button_slots() {
        let slots = WidgetKind::Button.slots();
        assert_eq!(
            slots,
            SlotSet::KEY
                | SlotSet::FONT_NAME
                | SlotSet::FONT_SIZE
                | SlotSet::BACKGROUND
                | SlotSet::BACKGROUND_SELECTED
        );
        assert!(!WidgetKind::Button.exposes(KeySlot::Title));
    }

    #[test]
    fn button_resolves_label_before_states() {
        let bindings = WidgetKind::Button.bindings();
        assert_eq!(bindings[0], text(Attribute::Title, KeySlot::Key));
        let states: Vec<_> = bindings
            .iter()
            .filter_map(|b| match b {
                Binding::Text {
                    attribute: Attribute::StateTitle(state),
                    ..
                } => Some(*state),
                _ => None,
            })
            .collect();
        assert_eq!(
            states,
            [
                ControlState::Normal,
                ControlState::Highlighted,
                ControlState::Selected,
                ControlState::Disabled
            ]
        );
    }

    #[test]
    fn every_kind_has_bindings() {
        for kind in WidgetKind::ALL {
            assert!(!kind.bindings().is_empty(), "{kind:?}");
            assert!(!kind.slots().is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn text_field_uses_dedicated_slots() {
        assert!(WidgetKind::TextField.exposes(KeySlot::Text));
        assert!(WidgetKind::TextField.exposes(KeySlot::Placeholder));
        assert!(!WidgetKind::TextField.exposes(KeySlot::Key));
    }

    #[test]
    fn image_view_reads_only_image_slots() {
        assert_eq!(
            WidgetKind::ImageView.slots(),
            SlotSet::IMAGE | SlotSet::HIGHLIGHTED
        );
    }

    #[test]
    fn display_uses_property_name() {
        assert_eq!(KeySlot::FontSize.to_string(), "localizeFontSize");
    }
}

use std::fmt;

/// One of the five article parameters the panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::FontFamily,
        FieldKey::FontSize,
        FieldKey::FontColor,
        FieldKey::BackgroundColor,
        FieldKey::ContentWidth,
    ];

    /// The ordered option set declared for this field.
    pub fn options(self) -> &'static [StyleOption] {
        match self {
            FieldKey::FontFamily => FONT_FAMILY_OPTIONS,
            FieldKey::FontSize => FONT_SIZE_OPTIONS,
            FieldKey::FontColor => FONT_COLORS,
            FieldKey::BackgroundColor => BACKGROUND_COLORS,
            FieldKey::ContentWidth => CONTENT_WIDTHS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FieldKey::FontFamily => "Font",
            FieldKey::FontSize => "Font size",
            FieldKey::FontColor => "Font color",
            FieldKey::BackgroundColor => "Background color",
            FieldKey::ContentWidth => "Content width",
        }
    }

    /// Returns `true` if `option` belongs to this field's option set.
    pub fn accepts(self, option: &StyleOption) -> bool {
        option.field() == self && self.options().contains(option)
    }
}

/// A selectable value/label pair. Only the static tables in this module
/// construct these, so every instance belongs to its field's option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleOption {
    field: FieldKey,
    value: &'static str,
    label: &'static str,
}

impl StyleOption {
    const fn new(field: FieldKey, value: &'static str, label: &'static str) -> Self {
        Self {
            field,
            value,
            label,
        }
    }

    pub fn field(&self) -> FieldKey {
        self.field
    }

    pub fn value(&self) -> &'static str {
        self.value
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn font(value: &'static str) -> StyleOption {
    StyleOption::new(FieldKey::FontFamily, value, value)
}

const fn size(value: &'static str) -> StyleOption {
    StyleOption::new(FieldKey::FontSize, value, value)
}

const fn fg(value: &'static str, label: &'static str) -> StyleOption {
    StyleOption::new(FieldKey::FontColor, value, label)
}

const fn bg(value: &'static str, label: &'static str) -> StyleOption {
    StyleOption::new(FieldKey::BackgroundColor, value, label)
}

const fn width(value: &'static str, label: &'static str) -> StyleOption {
    StyleOption::new(FieldKey::ContentWidth, value, label)
}

pub static FONT_FAMILY_OPTIONS: &[StyleOption] = &[
    font("Open Sans"),
    font("Ubuntu"),
    font("Cormorant Garamond"),
    font("Days One"),
    font("Merriweather"),
];

pub static FONT_SIZE_OPTIONS: &[StyleOption] = &[size("18px"), size("25px"), size("38px")];

pub static FONT_COLORS: &[StyleOption] = &[
    fg("#000000", "Black"),
    fg("#FFFFFF", "White"),
    fg("#C4C4C4", "Gray"),
    fg("#FEAFE8", "Pink"),
    fg("#FD24AF", "Fuchsia"),
    fg("#FFC802", "Yellow"),
    fg("#80D994", "Green"),
    fg("#6FC1FD", "Blue"),
    fg("#5F00FF", "Purple"),
];

pub static BACKGROUND_COLORS: &[StyleOption] = &[
    bg("#FFFFFF", "White"),
    bg("#F5F5F5", "Light gray"),
    bg("#000000", "Black"),
    bg("#C4C4C4", "Gray"),
    bg("#FEAFE8", "Pink"),
    bg("#FD24AF", "Fuchsia"),
    bg("#FFC802", "Yellow"),
    bg("#80D994", "Green"),
    bg("#6FC1FD", "Blue"),
    bg("#5F00FF", "Purple"),
];

pub static CONTENT_WIDTHS: &[StyleOption] = &[
    width("1394px", "Wide"),
    width("948px", "Narrow"),
];

/// The five selected options that style the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub font_family: StyleOption,
    pub font_size: StyleOption,
    pub font_color: StyleOption,
    pub background_color: StyleOption,
    pub content_width: StyleOption,
}

pub const DEFAULT_CONFIGURATION: Configuration = Configuration {
    font_family: font("Open Sans"),
    font_size: size("18px"),
    font_color: fg("#000000", "Black"),
    background_color: bg("#FFFFFF", "White"),
    content_width: width("1394px", "Wide"),
};

impl Default for Configuration {
    fn default() -> Self {
        DEFAULT_CONFIGURATION
    }
}

impl Configuration {
    pub fn get(&self, field: FieldKey) -> StyleOption {
        match field {
            FieldKey::FontFamily => self.font_family,
            FieldKey::FontSize => self.font_size,
            FieldKey::FontColor => self.font_color,
            FieldKey::BackgroundColor => self.background_color,
            FieldKey::ContentWidth => self.content_width,
        }
    }

    /// Returns a copy with `field` replaced by `option`.
    pub fn with(mut self, field: FieldKey, option: StyleOption) -> Self {
        let slot = match field {
            FieldKey::FontFamily => &mut self.font_family,
            FieldKey::FontSize => &mut self.font_size,
            FieldKey::FontColor => &mut self.font_color,
            FieldKey::BackgroundColor => &mut self.background_color,
            FieldKey::ContentWidth => &mut self.content_width,
        };
        *slot = option;
        self
    }

    /// Returns `true` if every field holds an option from its own set.
    pub fn is_consistent(&self) -> bool {
        FieldKey::ALL
            .iter()
            .all(|&field| field.accepts(&self.get(field)))
    }
}

/// Looks up an option of `field` by its value, e.g. `"18px"`.
#[cfg(test)]
pub fn find(field: FieldKey, value: &str) -> Option<StyleOption> {
    field.options().iter().copied().find(|o| o.value == value)
}

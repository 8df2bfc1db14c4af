use crate::options::Configuration;

const TITLE: &str = "Human Nature at a Glance";

const PARAGRAPHS: &[&str] = &[
    "Imagine a reader who opens a long article late in the evening. The \
     default typeface feels cramped, the lines run the full width of a wide \
     monitor, and the white page glares. A few adjustments fix all of it.",
    "The parameters panel on the left lets that reader pick a typeface, a \
     text size and color, a background, and how wide the column of text \
     should be. Nothing changes until the choices are applied, so it is \
     safe to experiment.",
    "Clearing the form puts everything back the way it started, and \
     clicking anywhere outside the panel simply puts it away.",
];

/// Resolved display style for the article body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStyle {
    pub family: FamilyKind,
    pub font_size: f32,
    pub text_color: egui::Color32,
    pub background: egui::Color32,
    pub max_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyKind {
    Sans,
    Serif,
    Display,
}

impl FamilyKind {
    fn from_name(name: &str) -> Self {
        match name {
            "Cormorant Garamond" | "Merriweather" => FamilyKind::Serif,
            "Days One" => FamilyKind::Display,
            _ => FamilyKind::Sans,
        }
    }

    /// Only egui's built-in families are registered.
    fn egui_family(self) -> egui::FontFamily {
        match self {
            FamilyKind::Display => egui::FontFamily::Monospace,
            FamilyKind::Sans | FamilyKind::Serif => egui::FontFamily::Proportional,
        }
    }
}

impl ArticleStyle {
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            family: FamilyKind::from_name(config.font_family.value()),
            font_size: parse_px(config.font_size.value()).unwrap_or(18.0),
            text_color: parse_hex_color(config.font_color.value())
                .unwrap_or(egui::Color32::BLACK),
            background: parse_hex_color(config.background_color.value())
                .unwrap_or(egui::Color32::WHITE),
            max_width: parse_px(config.content_width.value()).unwrap_or(1394.0),
        }
    }
}

fn parse_px(raw: &str) -> Option<f32> {
    raw.trim().strip_suffix("px")?.parse().ok()
}

fn parse_hex_color(raw: &str) -> Option<egui::Color32> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(egui::Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Renders the sample article with the committed configuration.
pub fn show(ctx: &egui::Context, config: &Configuration) {
    let style = ArticleStyle::from_configuration(config);
    let family = style.family.egui_family();

    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(style.background))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("article_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let column = style.max_width.min(ui.available_width());
                    let margin = ((ui.available_width() - column) / 2.0).max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_max_width(column);
                            ui.add_space(48.0);
                            ui.label(
                                egui::RichText::new(TITLE)
                                    .family(family.clone())
                                    .size(style.font_size * 2.0)
                                    .strong()
                                    .color(style.text_color),
                            );
                            ui.add_space(style.font_size);
                            for paragraph in PARAGRAPHS {
                                ui.label(
                                    egui::RichText::new(*paragraph)
                                        .family(family.clone())
                                        .size(style.font_size)
                                        .color(style.text_color),
                                );
                                ui.add_space(style.font_size * 0.75);
                            }
                        });
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DEFAULT_CONFIGURATION, FieldKey, find};

    #[test]
    fn default_configuration_resolves_to_expected_style() {
        let style = ArticleStyle::from_configuration(&DEFAULT_CONFIGURATION);
        assert_eq!(style.family, FamilyKind::Sans);
        assert_eq!(style.font_size, 18.0);
        assert_eq!(style.text_color, egui::Color32::BLACK);
        assert_eq!(style.background, egui::Color32::WHITE);
        assert_eq!(style.max_width, 1394.0);
    }

    #[test]
    fn every_color_and_size_option_parses() {
        for field in [FieldKey::FontColor, FieldKey::BackgroundColor] {
            for option in field.options() {
                assert!(parse_hex_color(option.value()).is_some(), "{}", option.value());
            }
        }
        for field in [FieldKey::FontSize, FieldKey::ContentWidth] {
            for option in field.options() {
                assert!(parse_px(option.value()).is_some(), "{}", option.value());
            }
        }
    }

    #[test]
    fn light_gray_background_is_f5() {
        let config = DEFAULT_CONFIGURATION.with(
            FieldKey::BackgroundColor,
            find(FieldKey::BackgroundColor, "#F5F5F5").unwrap(),
        );
        let style = ArticleStyle::from_configuration(&config);
        assert_eq!(style.background, egui::Color32::from_rgb(0xF5, 0xF5, 0xF5));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(parse_hex_color("F5F5F5"), None);
        assert_eq!(parse_hex_color("#F5F5"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_px("18"), None);
    }
}

//! Presentational form controls for the parameters panel.
//!
//! These widgets hold no state. Each one draws the current selection and
//! returns what the user picked this frame, if anything.

use crate::options::StyleOption;

/// What a form button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRole {
    Submit,
    Reset,
}

/// Visual weight of a form button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Apply,
    Clear,
}

const APPLY_FILL: egui::Color32 = egui::Color32::from_rgb(0xFE, 0xAF, 0xE8);

fn field_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title.to_uppercase()).strong().size(12.0));
}

/// Labelled dropdown. Returns the newly selected option.
pub fn select(
    ui: &mut egui::Ui,
    title: &str,
    selected: StyleOption,
    options: &[StyleOption],
    width: f32,
) -> Option<StyleOption> {
    let mut picked = selected;
    field_title(ui, title);
    egui::ComboBox::from_id_salt(title)
        .selected_text(selected.label())
        .width(width)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut picked, *option, option.label());
            }
        });
    ui.add_space(8.0);
    (picked != selected).then_some(picked)
}

/// Labelled radio group; `name` scopes the group's widget ids.
pub fn radio_group(
    ui: &mut egui::Ui,
    name: &str,
    title: &str,
    selected: StyleOption,
    options: &[StyleOption],
) -> Option<StyleOption> {
    let mut picked = selected;
    field_title(ui, title);
    ui.push_id(name, |ui| {
        ui.horizontal(|ui| {
            for option in options {
                ui.radio_value(&mut picked, *option, option.label());
            }
        });
    });
    ui.add_space(8.0);
    (picked != selected).then_some(picked)
}

pub fn separator(ui: &mut egui::Ui) {
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);
}

/// Labelled form button. Returns its role when clicked.
pub fn form_button(
    ui: &mut egui::Ui,
    title: &str,
    role: FormRole,
    kind: ButtonKind,
) -> Option<FormRole> {
    let text = egui::RichText::new(title.to_uppercase()).strong();
    let button = match kind {
        ButtonKind::Apply => egui::Button::new(text.color(egui::Color32::BLACK)).fill(APPLY_FILL),
        ButtonKind::Clear => egui::Button::new(text),
    };
    ui.add(button.min_size(egui::vec2(110.0, 32.0)))
        .clicked()
        .then_some(role)
}

/// Arrow tab that opens and closes the panel. Points back when open.
pub fn arrow_button(ui: &mut egui::Ui, is_open: bool) -> bool {
    let (glyph, hint) = if is_open {
        ("◀", "Close parameters")
    } else {
        ("▶", "Open parameters")
    };
    ui.add(
        egui::Button::new(egui::RichText::new(glyph).size(18.0))
            .min_size(egui::vec2(36.0, 36.0)),
    )
    .on_hover_text(hint)
    .clicked()
}

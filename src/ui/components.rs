//! Reusable UI components
//!
//! Controls and decorations shared by every grid region.

use crate::theme;
use crate::types::{Counters, SortMode};
use eframe::egui;

/// Sort selector combo box. Returns the emitted value when the user picks a
/// different mode.
pub fn sort_selector(ui: &mut egui::Ui, id_salt: &str, current: SortMode) -> Option<&'static str> {
    let mut selected = current;
    ui.label(
        egui::RichText::new("Sort by")
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_DIM),
    );
    egui::ComboBox::from_id_salt(("sort", id_salt))
        .selected_text(current.label())
        .width(140.0)
        .show_ui(ui, |ui| {
            for mode in SortMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });
    (selected != current).then(|| selected.as_str())
}

/// "Showing 6 of 14 projects"
pub fn counters_label(ui: &mut egui::Ui, counters: Counters, noun: &str) {
    ui.label(
        egui::RichText::new(format!(
            "Showing {} of {} {}",
            counters.showing, counters.total, noun
        ))
        .size(theme::FONT_LABEL)
        .color(theme::TEXT_MUTED),
    );
}

/// Centered "Load more" button. Returns true if clicked.
pub fn load_more_button(ui: &mut egui::Ui) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_LG);
        let text = format!("{}  Load more", egui_phosphor::regular::ARROW_DOWN);
        ui.add(theme::button_accent(text).min_size(egui::vec2(160.0, theme::BUTTON_HEIGHT_LARGE)))
            .clicked()
    })
    .inner
}

/// Static message shown in place of a grid whose collection failed to load
pub fn error_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                .size(32.0)
                .color(theme::STATUS_ERROR),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(message)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
        );
    });
}

pub fn loading_indicator(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.spinner();
        ui.label(
            egui::RichText::new("Loading...")
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
        );
    });
}

/// Small pill for a tag
pub fn tag_chip(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::new()
        .fill(theme::TAG_BG)
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(tag)
                    .size(theme::FONT_SMALL)
                    .color(theme::ACCENT_LIGHT),
            );
        });
}

pub fn tag_row(ui: &mut egui::Ui, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
        for tag in tags {
            tag_chip(ui, tag);
        }
    });
}

/// Link-style label that opens `url` in the system browser
pub fn external_link(ui: &mut egui::Ui, icon: &str, label: &str, url: &str) {
    let text = egui::RichText::new(format!("{}  {}", icon, label))
        .size(theme::FONT_LABEL)
        .color(theme::ACCENT);
    let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if response.on_hover_text(url).clicked() {
        crate::utils::open_external(url);
    }
}

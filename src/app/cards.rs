//! Per-item card templates, one per content type

use crate::content::{Article, Project, TimelineEntry};
use crate::theme;
use crate::ui::components::{external_link, tag_row};
use eframe::egui;
use egui_phosphor::regular as icons;

fn card_title(ui: &mut egui::Ui, title: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_PRIMARY)
                .strong(),
        )
        .wrap(),
    );
}

fn card_body(ui: &mut egui::Ui, text: &str) {
    if text.is_empty() {
        return;
    }
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
        )
        .wrap(),
    );
}

fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_DIM),
    );
}

pub fn project_card(ui: &mut egui::Ui, project: &Project) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            card_title(ui, &project.title);
            if project.featured {
                ui.label(
                    egui::RichText::new(format!("{} Featured", icons::STAR))
                        .size(theme::FONT_SMALL)
                        .color(theme::STAR_FILLED),
                );
            }
        });
        if !project.image.is_empty() {
            caption(ui, &format!("{} {}", icons::IMAGE, project.image));
        }
        ui.add_space(theme::SPACING_SM);
        card_body(ui, &project.description);
        ui.add_space(theme::SPACING_MD);
        tag_row(ui, &project.tags);
        ui.add_space(theme::SPACING_SM);
        ui.horizontal(|ui| {
            if !project.github_url.is_empty() {
                external_link(ui, icons::GITHUB_LOGO, "Code", &project.github_url);
            }
            if let Some(live) = &project.live_url {
                external_link(ui, icons::ARROW_SQUARE_OUT, "Live", live);
            }
        });
    });
}

pub fn article_card(ui: &mut egui::Ui, article: &Article) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        caption(
            ui,
            &format!(
                "{} {}   {} {}",
                icons::CALENDAR_BLANK,
                article.display_date(),
                icons::CLOCK,
                article.reading_time()
            ),
        );
        card_title(ui, &article.title);
        ui.add_space(theme::SPACING_SM);
        card_body(ui, &article.excerpt);
        ui.add_space(theme::SPACING_MD);
        tag_row(ui, &article.tags);
    });
}

pub fn timeline_item(ui: &mut egui::Ui, entry: &TimelineEntry) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            card_title(ui, &entry.role);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                caption(ui, &entry.duration);
            });
        });
        if !entry.organization.is_empty() {
            ui.label(
                egui::RichText::new(&entry.organization)
                    .size(theme::FONT_LABEL)
                    .color(theme::ACCENT),
            );
        }
        if let Some(summary) = &entry.summary {
            ui.add_space(theme::SPACING_SM);
            card_body(ui, summary);
        }
    });
}

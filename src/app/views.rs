//! Region rendering: toolbar, grid of cards and the load-more trigger
//!
//! Every frame redraws the whole visible window; nothing is diffed.

use super::region::{Region, RegionState};
use crate::content::Collection;
use crate::theme;
use crate::ui::components::{
    counters_label, error_placeholder, load_more_button, loading_indicator, sort_selector,
};
use eframe::egui;

impl<T: Collection + Send + 'static> Region<T> {
    /// Draw the region. `card` renders a single item; at most `max_columns`
    /// cards are placed side by side.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        max_columns: usize,
        card: impl Fn(&mut egui::Ui, &T),
    ) {
        let container = self.container();
        let controls = self.controls();
        let mut sort_value = None;
        let mut load_more_clicked = false;

        match self.state() {
            RegionState::Loading => loading_indicator(ui),
            RegionState::Failed(message) => error_placeholder(ui, message),
            RegionState::Ready(state) => {
                ui.horizontal(|ui| {
                    if controls.sort_selector {
                        sort_value = sort_selector(ui, container, state.sort_mode());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        counters_label(ui, state.counters(), T::NOUN);
                    });
                });
                ui.add_space(theme::SPACING_MD);

                let window = state.visible_window();
                egui::ScrollArea::vertical()
                    .id_salt(container)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if window.is_empty() {
                            ui.vertical_centered(|ui| {
                                ui.add_space(48.0);
                                ui.label(
                                    egui::RichText::new(format!("No {} yet", T::NOUN))
                                        .color(theme::TEXT_DIM),
                                );
                            });
                        }

                        let columns = columns_for(ui.available_width(), max_columns);
                        for row in window.chunks(columns) {
                            ui.columns(columns, |cols| {
                                for (col, item) in cols.iter_mut().zip(row) {
                                    col.push_id(item.key(), |ui| card(ui, item));
                                }
                            });
                            ui.add_space(theme::SPACING_MD);
                        }

                        if controls.load_more && state.has_more() {
                            load_more_clicked = load_more_button(ui);
                        }
                        ui.add_space(theme::SPACING_XL);
                    });
            }
        }

        if let Some(value) = sort_value {
            self.select_sort(value);
        }
        if load_more_clicked {
            self.load_more();
        }
    }
}

fn columns_for(width: f32, max_columns: usize) -> usize {
    let fit = ((width + theme::SPACING_MD) / (theme::CARD_MIN_WIDTH + theme::SPACING_MD)).floor();
    (fit as usize).clamp(1, max_columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::columns_for;

    #[test]
    fn columns_fit_the_width() {
        assert_eq!(columns_for(100.0, 3), 1);
        assert_eq!(columns_for(2000.0, 3), 3);
        assert_eq!(columns_for(2000.0, 1), 1);
        assert_eq!(columns_for(0.0, 0), 1);
    }
}

mod coin_table;
mod detail_overlay;
mod highlights;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;

use eframe::egui::{RichText, Ui};

use crate::data::FetchError;

pub(crate) use coin_table::{CoinTablePanel, TableEvent};
pub(crate) use detail_overlay::render_detail_overlay;
pub(crate) use highlights::{HighlightsEvent, HighlightsPanel};
pub(crate) use styles::{UiStyleExt, get_change_color};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Placeholder shown while a fetch is in flight.
pub(crate) fn render_loading(ui: &mut Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.spinner();
        ui.add_space(6.0);
        ui.label_subdued(text);
        ui.add_space(16.0);
    });
}

/// Error message plus a retry control. Returns true when retry was clicked.
pub(crate) fn render_load_error(ui: &mut Ui, title: &str, err: &FetchError) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!("{} {}", ui_text::ICON_WARNING, title))
                .strong()
                .color(UI_CONFIG.colors.error),
        );
        let detail = if err.is_rate_limited() {
            UI_TEXT.error_rate_limited.clone()
        } else {
            err.to_string()
        };
        ui.label_error(detail);
        ui.add_space(6.0);
        retry = ui.button(&UI_TEXT.label_retry).clicked();
        ui.add_space(12.0);
    });
    retry
}

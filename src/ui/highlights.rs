use eframe::egui::{Align, Button, Image, Layout, RichText, Sense, Ui, vec2};

use crate::config::DASHBOARD;
use crate::data::{FetchSlot, HighlightsData};
use crate::domain::CoinView;
use crate::models::{HighlightKind, HighlightList, Highlights};
use crate::ui::{
    Panel, UI_CONFIG, UI_TEXT, UiStyleExt, get_change_color, render_load_error, render_loading,
};
use crate::utils::{format_currency, format_pct, format_updated, truncate_name};

#[derive(Debug, Clone, PartialEq)]
pub enum HighlightsEvent {
    Selected(CoinView),
    Toggle(HighlightKind),
    Reload,
}

fn kind_icon(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::Trending => &UI_TEXT.icon_trending,
        HighlightKind::Gainers => &UI_TEXT.icon_gainers,
        HighlightKind::Losers => &UI_TEXT.icon_losers,
        HighlightKind::Volume => &UI_TEXT.icon_volume,
    }
}

pub struct HighlightsPanel<'a> {
    slot: Option<&'a FetchSlot<HighlightsData>>,
    highlights: Option<&'a Highlights>,
}

impl<'a> HighlightsPanel<'a> {
    pub fn new(
        slot: Option<&'a FetchSlot<HighlightsData>>,
        highlights: Option<&'a Highlights>,
    ) -> Self {
        Self { slot, highlights }
    }

    fn render_list(ui: &mut Ui, list: &HighlightList, events: &mut Vec<HighlightsEvent>) {
        ui.label_subheader(format!("{} {}", kind_icon(list.kind), list.kind));

        if list.all().is_empty() {
            ui.label_subdued(&UI_TEXT.hl_empty);
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for coin in list.visible() {
                if Self::render_card(ui, coin) {
                    events.push(HighlightsEvent::Selected(coin.clone()));
                }
            }
        });

        if list.has_more() {
            let label = if list.is_expanded() {
                &UI_TEXT.hl_show_less
            } else {
                &UI_TEXT.hl_show_more
            };
            if ui.small_button(label).clicked() {
                events.push(HighlightsEvent::Toggle(list.kind));
            }
        }
    }

    /// One coin card. Returns true when clicked.
    fn render_card(ui: &mut Ui, coin: &CoinView) -> bool {
        let cfg = &DASHBOARD.highlights;
        let response = UI_CONFIG
            .card_frame()
            .show(ui, |ui| {
                ui.set_width(cfg.card_size);
                ui.vertical_centered(|ui| {
                    if !coin.image.is_empty() {
                        ui.add(
                            Image::new(coin.image.as_str())
                                .fit_to_exact_size(vec2(cfg.card_icon_size, cfg.card_icon_size)),
                        );
                    }
                    ui.label(RichText::new(truncate_name(&coin.name, cfg.card_name_chars)).strong());
                    ui.label_subdued(coin.ticker());
                    if let Some(price) = coin.current_price {
                        ui.label(RichText::new(format_currency(price)).small());
                    }
                    ui.label(
                        RichText::new(format_pct(coin.change_24h))
                            .small()
                            .color(get_change_color(coin.change_24h)),
                    );
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_text(&coin.name);
        response.clicked()
    }
}

impl Panel for HighlightsPanel<'_> {
    type Event = HighlightsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<HighlightsEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.heading(RichText::new(&UI_TEXT.highlights_title).color(UI_CONFIG.colors.heading));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let busy = self.slot.is_none_or(|s| s.is_pending());
                if ui
                    .add_enabled(!busy, Button::new(&UI_TEXT.icon_refresh))
                    .clicked()
                {
                    events.push(HighlightsEvent::Reload);
                }
                if let Some(data) = self.slot.and_then(|s| s.ready()) {
                    ui.label_subdued(format!(
                        "{} {}",
                        UI_TEXT.tbl_updated,
                        format_updated(&data.fetched_at)
                    ));
                }
            });
        });
        ui.separator();

        match (self.slot, self.highlights) {
            (Some(FetchSlot::Failed(err)), _) => {
                if render_load_error(ui, &UI_TEXT.error_load_highlights, err) {
                    events.push(HighlightsEvent::Reload);
                }
            }
            (Some(FetchSlot::Ready(_)), Some(highlights)) => {
                for list in highlights.lists() {
                    Self::render_list(ui, list, &mut events);
                    ui.add_space(8.0);
                }
            }
            _ => render_loading(ui, &UI_TEXT.hl_loading),
        }

        events
    }
}

use eframe::egui::{Align, Button, FontId, Grid, Image, Layout, RichText, TextEdit, Ui, vec2};
use strum::IntoEnumIterator;

use crate::config::DASHBOARD;
use crate::data::{FetchError, FetchSlot, MarketPage};
use crate::domain::{CoinView, MarketCoin};
use crate::models::{SortDirection, SortKey, TableRow, TableState};
use crate::ui::{
    Panel, UI_CONFIG, UI_TEXT, UiStyleExt, get_change_color, render_load_error, render_loading,
};
use crate::utils::{format_compact, format_currency, format_pct, format_updated};

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    Selected(CoinView),
    SortBy(SortKey),
    ClearSort,
    GoToPage(u32),
    /// Drop the current page and fetch it again (retry after failure, or refresh).
    Reload,
}

pub struct CoinTablePanel<'a> {
    state: &'a mut TableState,
    slot: Option<&'a FetchSlot<MarketPage>>,
    search_enabled: bool,
}

impl<'a> CoinTablePanel<'a> {
    pub fn new(state: &'a mut TableState, slot: Option<&'a FetchSlot<MarketPage>>) -> Self {
        Self {
            state,
            slot,
            search_enabled: true,
        }
    }

    /// Whether the search box takes input.
    pub fn search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    fn render_toolbar(&mut self, ui: &mut Ui, events: &mut Vec<TableEvent>) {
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(self.state.query_mut())
                    .hint_text(&UI_TEXT.tbl_search_hint)
                    .desired_width(DASHBOARD.table.search_width)
                    .interactive(self.search_enabled),
            );

            if ui
                .add_enabled(self.state.sort().is_some(), Button::new(&UI_TEXT.tbl_clear_sort))
                .clicked()
            {
                events.push(TableEvent::ClearSort);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let busy = self.slot.is_none_or(|s| s.is_pending());
                if ui
                    .add_enabled(!busy, Button::new(&UI_TEXT.icon_refresh))
                    .on_hover_text(&UI_TEXT.tbl_refresh_hover)
                    .clicked()
                {
                    events.push(TableEvent::Reload);
                }
                if let Some(page) = self.slot.and_then(|s| s.ready()) {
                    ui.label_subdued(format!(
                        "{} {}",
                        UI_TEXT.tbl_updated,
                        format_updated(&page.fetched_at)
                    ));
                }
            });
        });
    }

    fn render_header(&self, ui: &mut Ui, events: &mut Vec<TableEvent>) {
        let current = self.state.sort();
        for key in SortKey::iter() {
            let (selected, arrow) = match current {
                Some((k, SortDirection::Ascending)) if k == key => (true, &UI_TEXT.icon_sort_asc),
                Some((k, SortDirection::Descending)) if k == key => {
                    (true, &UI_TEXT.icon_sort_desc)
                }
                _ => (false, &UI_TEXT.icon_sort),
            };
            let text = format!("{} {}", key, arrow);
            if ui
                .interactive_label(
                    &text,
                    selected,
                    UI_CONFIG.colors.heading,
                    FontId::proportional(13.0),
                )
                .on_hover_text(&UI_TEXT.tbl_sort_hover)
                .clicked()
            {
                events.push(TableEvent::SortBy(key));
            }
        }
        ui.end_row();
    }

    fn render_row(ui: &mut Ui, row: &TableRow<'_>, events: &mut Vec<TableEvent>) {
        let coin: &MarketCoin = row.coin;
        ui.label_subdued(row.rank.to_string());

        ui.horizontal(|ui| {
            let size = DASHBOARD.table.icon_size;
            if coin.image.is_empty() {
                ui.add_space(size);
            } else {
                ui.add(Image::new(coin.image.as_str()).fit_to_exact_size(vec2(size, size)));
            }
            if ui
                .interactive_label(
                    &coin.name,
                    false,
                    UI_CONFIG.colors.label,
                    FontId::proportional(14.0),
                )
                .clicked()
            {
                events.push(TableEvent::Selected(CoinView::from(coin)));
            }
            ui.label_subdued(coin.symbol.to_uppercase());
        });

        ui.label(format_currency(coin.current_price));
        ui.label(
            RichText::new(format_pct(coin.price_change_percentage_24h))
                .color(get_change_color(coin.price_change_percentage_24h)),
        );
        ui.label(format_compact(coin.total_volume));
        ui.label(format_compact(coin.market_cap));
        ui.end_row();
    }

    fn render_rows(&self, ui: &mut Ui, coins: &[MarketCoin], events: &mut Vec<TableEvent>) {
        let rows = self.state.rows(coins);

        Grid::new("coin_table_grid")
            .striped(true)
            .num_columns(SortKey::iter().count())
            .spacing(vec2(16.0, DASHBOARD.table.row_spacing))
            .show(ui, |ui| {
                self.render_header(ui, events);
                for row in &rows {
                    Self::render_row(ui, row, events);
                }
            });

        if rows.is_empty() {
            ui.add_space(8.0);
            ui.label_subdued(&UI_TEXT.tbl_no_matches);
        }
    }

    fn render_pagination(&self, ui: &mut Ui, events: &mut Vec<TableEvent>) {
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            if ui
                .add_enabled(self.state.has_prev(), Button::new(&UI_TEXT.tbl_prev))
                .clicked()
            {
                events.push(TableEvent::GoToPage(self.state.page() - 1));
            }

            for page in 1..=self.state.max_pages() {
                if ui
                    .selectable_label(page == self.state.page(), page.to_string())
                    .clicked()
                {
                    events.push(TableEvent::GoToPage(page));
                }
            }

            if ui
                .add_enabled(self.state.has_next(), Button::new(&UI_TEXT.tbl_next))
                .clicked()
            {
                events.push(TableEvent::GoToPage(self.state.page() + 1));
            }
        });
    }
}

impl Panel for CoinTablePanel<'_> {
    type Event = TableEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<TableEvent> {
        let mut events = Vec::new();

        self.render_toolbar(ui, &mut events);
        ui.add_space(6.0);

        match self.slot {
            Some(FetchSlot::Ready(page)) => self.render_rows(ui, &page.coins, &mut events),
            Some(FetchSlot::Failed(err)) => {
                if render_coin_error(ui, err) {
                    events.push(TableEvent::Reload);
                }
            }
            Some(FetchSlot::Pending(_)) | None => render_loading(ui, &UI_TEXT.tbl_loading),
        }

        self.render_pagination(ui, &mut events);
        events
    }
}

fn render_coin_error(ui: &mut Ui, err: &FetchError) -> bool {
    render_load_error(ui, &UI_TEXT.error_load_coins, err)
}

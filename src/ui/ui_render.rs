use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel};

use crate::app::App;
use crate::ui::{CoinTablePanel, HighlightsPanel, Panel, UI_CONFIG, UI_TEXT, UiStyleExt};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    ui.label_subdued(self.settings.currency_label());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "{} {} / {}",
                            UI_TEXT.tbl_page,
                            self.list.table.page(),
                            self.list.table.max_pages()
                        ));
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();
        let scroll_enabled = !self.overlay.scroll_locked();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .enable_scrolling(scroll_enabled)
                .show(ui, |ui| {
                    let highlight_events = UI_CONFIG
                        .section_frame()
                        .show(ui, |ui| {
                            HighlightsPanel::new(
                                self.highlights.slot(),
                                self.highlights.highlights(),
                            )
                            .render(ui)
                        })
                        .inner;
                    self.handle_highlights_events(highlight_events);

                    ui.add_space(12.0);

                    let table_events = UI_CONFIG
                        .section_frame()
                        .show(ui, |ui| {
                            let slot = self.list.cache.slot(self.list.table.page());
                            CoinTablePanel::new(&mut self.list.table, slot)
                                .search_enabled(scroll_enabled)
                                .render(ui)
                        })
                        .inner;
                    self.handle_table_events(table_events);
                });
        });
    }
}

use {
    anyhow::Result,
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
};

use crate::{
    Cli,
    app::{HighlightsView, ListView},
    config::{ApiSettings, DF},
    data::{CoinGeckoProvider, FetchSpawner, MarketFeed, share_provider},
    domain::CoinView,
    models::{DetailOverlay, TableState},
    trace_time,
    ui::{HighlightsEvent, TableEvent, UI_CONFIG, render_detail_overlay},
};

pub struct App {
    pub(crate) settings: ApiSettings,
    pub(crate) feed: MarketFeed,
    pub(crate) list: ListView,
    pub(crate) highlights: HighlightsView,
    pub(crate) overlay: DetailOverlay,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = args.api_settings();
        log::info!(
            "Starting dashboard against {} in {}",
            settings.base_url,
            settings.currency_label()
        );

        let provider = share_provider(CoinGeckoProvider::new(settings.clone())?);
        let spawner = FetchSpawner::new(Some(cc.egui_ctx.clone()))?;
        let feed = MarketFeed::new(provider, spawner);

        let mut app = Self {
            highlights: HighlightsView::new(settings.vs_currency.clone()),
            settings,
            feed,
            list: ListView::new(TableState::default()),
            overlay: DetailOverlay::default(),
        };
        app.list.ensure_current_page(&app.feed);
        app.highlights.ensure_loaded(&app.feed);
        Ok(app)
    }

    fn select(&mut self, coin: CoinView) {
        if DF.log_selection {
            log::info!("Selected {} ({})", coin.name, coin.id);
        }
        self.overlay.open(coin);
    }

    pub(crate) fn handle_table_events(&mut self, events: Vec<TableEvent>) {
        for event in unless_overlay_open(&self.overlay, events) {
            match event {
                TableEvent::Selected(coin) => self.select(coin),
                TableEvent::SortBy(key) => self.list.table.select_sort(key),
                TableEvent::ClearSort => self.list.table.clear_sort(),
                TableEvent::GoToPage(page) => {
                    self.list.go_to_page(page, &self.feed);
                }
                TableEvent::Reload => self.list.reload(&self.feed),
            }
        }
    }

    pub(crate) fn handle_highlights_events(&mut self, events: Vec<HighlightsEvent>) {
        for event in unless_overlay_open(&self.overlay, events) {
            match event {
                HighlightsEvent::Selected(coin) => self.select(coin),
                HighlightsEvent::Toggle(kind) => self.highlights.toggle(kind),
                HighlightsEvent::Reload => self.highlights.reload(&self.feed),
            }
        }
    }

    fn poll_fetches(&mut self) {
        self.list.poll();
        self.highlights.poll();
        // Covers a page whose slot was dropped by a retry that hasn't re-issued yet.
        self.list.ensure_current_page(&self.feed);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_fetches();

        trace_time!("render_frame", 16_000, {
            self.render_top_panel(ctx);
            self.render_central_panel(ctx);
            render_detail_overlay(ctx, &mut self.overlay);
        });
    }
}

/// Panels behind the overlay are inert: a click there only dismisses it.
fn unless_overlay_open<E>(overlay: &DetailOverlay, events: Vec<E>) -> Vec<E> {
    if overlay.is_open() && !events.is_empty() {
        if DF.log_selection {
            log::info!("Dropped {} panel event(s) behind the overlay", events.len());
        }
        return Vec::new();
    }
    events
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.section;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

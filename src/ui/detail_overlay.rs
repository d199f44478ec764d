use eframe::egui::{
    Align, Align2, Color32, Context, Id, Image, Key, LayerId, Layout, Order, RichText, Ui, Window,
    vec2,
};

use crate::config::DASHBOARD;
use crate::domain::{CoinSource, CoinView};
use crate::models::{CloseReason, DetailOverlay};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, get_change_color};
use crate::utils::{
    format_api_timestamp, format_compact, format_currency, format_pct, format_supply,
};

fn or_blank(value: Option<String>) -> String {
    value.unwrap_or_else(|| UI_TEXT.ov_not_available.clone())
}

/// Header row. Returns true when the close control was clicked.
fn render_header(ui: &mut Ui, coin: &CoinView) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        let size = DASHBOARD.overlay.icon_size;
        if !coin.image.is_empty() {
            ui.add(Image::new(coin.image.as_str()).fit_to_exact_size(vec2(size, size)));
        }
        ui.vertical(|ui| {
            ui.heading(RichText::new(&coin.name).color(UI_CONFIG.colors.heading));
            ui.label_subdued(coin.ticker());
        });
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button(&UI_TEXT.icon_close).clicked() {
                close = true;
            }
        });
    });
    close
}

fn render_fields(ui: &mut Ui, coin: &CoinView) {
    let text = UI_CONFIG.colors.neutral;

    ui.metric(
        &UI_TEXT.ov_price,
        &or_blank(coin.current_price.map(format_currency)),
        text,
    );

    let change = if coin.change_24h.is_some() {
        format_pct(coin.change_24h)
    } else {
        UI_TEXT.ov_not_available.clone()
    };
    ui.metric(&UI_TEXT.ov_change, &change, get_change_color(coin.change_24h));

    ui.metric(
        &UI_TEXT.ov_volume,
        &or_blank(coin.total_volume.map(format_compact)),
        text,
    );
    ui.metric(
        &UI_TEXT.ov_market_cap,
        &or_blank(coin.market_cap.map(format_compact)),
        text,
    );
    ui.metric(
        &UI_TEXT.ov_rank,
        &or_blank(coin.market_cap_rank.map(|r| format!("#{}", r))),
        text,
    );

    // Market listings carry these; trending entries don't.
    if coin.high_24h.is_some() || coin.low_24h.is_some() {
        ui.metric(
            &UI_TEXT.ov_high,
            &or_blank(coin.high_24h.map(format_currency)),
            UI_CONFIG.colors.positive,
        );
        ui.metric(
            &UI_TEXT.ov_low,
            &or_blank(coin.low_24h.map(format_currency)),
            UI_CONFIG.colors.negative,
        );
    }
    if let Some(supply) = coin.circulating_supply {
        ui.metric(&UI_TEXT.ov_supply, &format_supply(supply), text);
    }
    if let Some(updated) = &coin.last_updated {
        ui.metric(&UI_TEXT.ov_updated, &format_api_timestamp(updated), text);
    }

    ui.add_space(6.0);
    ui.label_subdued(source_label(coin.source));
}

/// Trending scores are zero-based.
fn source_label(source: CoinSource) -> String {
    match source {
        CoinSource::Market => UI_TEXT.ov_source_market.clone(),
        CoinSource::Trending { score: Some(score) } => {
            format!("{} #{}", UI_TEXT.ov_source_trending, score.saturating_add(1))
        }
        CoinSource::Trending { score: None } => UI_TEXT.ov_source_trending.clone(),
    }
}

/// Draw the overlay for the current selection and apply its dismiss rules:
/// close control, Escape, or a primary click outside the window.
pub fn render_detail_overlay(ctx: &Context, overlay: &mut DetailOverlay) {
    let Some(coin) = overlay.selected().cloned() else {
        return;
    };

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        overlay.close(CloseReason::Escape);
        return;
    }

    ctx.layer_painter(LayerId::new(Order::Middle, Id::new("detail_overlay_dim")))
        .rect_filled(ctx.viewport_rect(), 0.0, Color32::from_black_alpha(160));

    let mut close_clicked = false;
    let window = Window::new(&coin.name)
        .id(Id::new("detail_overlay"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .default_width(DASHBOARD.overlay.width)
        .show(ctx, |ui| {
            ui.set_width(DASHBOARD.overlay.width);
            close_clicked = render_header(ui, &coin);
            ui.separator();
            render_fields(ui, &coin);
            ui.add_space(4.0);
            ui.label_subdued(&UI_TEXT.ov_close_hint);
        });

    if close_clicked {
        overlay.close(CloseReason::CloseButton);
        return;
    }

    if overlay.accepts_outside_click() && ctx.input(|i| i.pointer.primary_clicked()) {
        let pos = ctx.input(|i| i.pointer.interact_pos());
        let inside = match (&window, pos) {
            (Some(w), Some(p)) => w.response.rect.contains(p),
            _ => false,
        };
        if !inside {
            overlay.close(CloseReason::ClickOutside);
            return;
        }
    }

    overlay.arm();
}

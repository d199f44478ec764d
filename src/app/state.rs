// src/app/state.rs

use crate::config::DF;
use crate::data::{FetchSlot, HighlightsData, MarketFeed, MarketPage, PageCache};
use crate::models::{HighlightKind, Highlights, TableState};

/// Coin table state plus the pages fetched so far this session.
#[derive(Default)]
pub struct ListView {
    pub table: TableState,
    pub cache: PageCache,
}

impl ListView {
    pub fn new(table: TableState) -> Self {
        Self {
            table,
            cache: PageCache::new(),
        }
    }

    /// Start fetching the current page unless it's cached or already in flight.
    pub fn ensure_current_page(&mut self, feed: &MarketFeed) {
        let page = self.table.page();
        if self.cache.needs_fetch(page) {
            if DF.log_fetch {
                log::info!("Requesting market page {}", page);
            }
            self.cache.start(page, feed.request_page(page));
        }
    }

    /// Retry or refresh: drop the current page and fetch it again.
    pub fn reload(&mut self, feed: &MarketFeed) {
        self.cache.invalidate(self.table.page());
        self.ensure_current_page(feed);
    }

    pub fn go_to_page(&mut self, page: u32, feed: &MarketFeed) -> bool {
        let moved = self.table.go_to_page(page);
        if moved {
            self.ensure_current_page(feed);
        }
        moved
    }

    /// Settle finished fetches. Returns the pages that landed or failed.
    pub fn poll(&mut self) -> Vec<u32> {
        let settled = self.cache.poll();
        for page in &settled {
            if let Some(err) = self.cache.slot(*page).and_then(|s| s.error()) {
                log::warn!("Market page {} failed: {}", page, err);
            }
        }
        settled
    }

    pub fn current_slot(&self) -> Option<&FetchSlot<MarketPage>> {
        self.cache.slot(self.table.page())
    }
}

/// The highlights fetch and the lists derived from it.
pub struct HighlightsView {
    vs_currency: String,
    slot: Option<FetchSlot<HighlightsData>>,
    highlights: Option<Highlights>,
}

impl HighlightsView {
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            slot: None,
            highlights: None,
        }
    }

    pub fn ensure_loaded(&mut self, feed: &MarketFeed) {
        if self.slot.is_none() {
            self.slot = Some(FetchSlot::Pending(feed.request_highlights()));
        }
    }

    pub fn reload(&mut self, feed: &MarketFeed) {
        self.slot = None;
        self.highlights = None;
        self.ensure_loaded(feed);
    }

    /// Settle the fetch and derive the lists once it lands. Returns true on settle.
    pub fn poll(&mut self) -> bool {
        let Some(slot) = self.slot.take() else {
            return false;
        };
        if !slot.is_pending() {
            self.slot = Some(slot);
            return false;
        }

        let slot = slot.poll();
        let settled = !slot.is_pending();
        match &slot {
            FetchSlot::Ready(data) => {
                self.highlights = Some(Highlights::with_defaults(
                    &data.trending,
                    &data.market,
                    &self.vs_currency,
                ));
            }
            FetchSlot::Failed(err) => log::warn!("Highlights failed: {}", err),
            FetchSlot::Pending(_) => {}
        }
        self.slot = Some(slot);
        settled
    }

    pub fn toggle(&mut self, kind: HighlightKind) {
        if let Some(highlights) = &mut self.highlights {
            highlights.toggle(kind);
        }
    }

    pub fn slot(&self) -> Option<&FetchSlot<HighlightsData>> {
        self.slot.as_ref()
    }

    pub fn highlights(&self) -> Option<&Highlights> {
        self.highlights.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use chrono::Local;
    use poll_promise::Promise;

    #[test]
    fn highlights_failure_keeps_no_lists() {
        let mut view = HighlightsView::new("usd");
        view.slot = Some(FetchSlot::Pending(Promise::from_ready(Err(
            FetchError::Network("offline".into()),
        ))));
        assert!(view.poll());
        assert!(view.highlights().is_none());
        assert!(view.slot().and_then(|s| s.error()).is_some());

        // Already settled.
        assert!(!view.poll());
    }

    #[test]
    fn highlights_landing_derives_lists() {
        let mut view = HighlightsView::new("usd");
        view.slot = Some(FetchSlot::Pending(Promise::from_ready(Ok(HighlightsData {
            trending: Vec::new(),
            market: Vec::new(),
            fetched_at: Local::now(),
        }))));
        assert!(view.poll());
        let lists = view.highlights().map(|h| h.lists().len());
        assert_eq!(lists, Some(4));
    }
}

use crate::config::DF;
use crate::domain::CoinView;

/// Why the overlay went away. Logged only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    ClickOutside,
    CloseButton,
}

/// Selected-record overlay. Page scrolling is locked for as long as it's open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailOverlay {
    selected: Option<CoinView>,
    /// False on the frame the overlay opened, so the opening click isn't
    /// mistaken for a click outside.
    armed: bool,
}

impl DetailOverlay {
    pub fn open(&mut self, coin: CoinView) {
        if DF.log_selection {
            log::info!("Overlay opened for {}", coin.id);
        }
        self.selected = Some(coin);
        self.armed = false;
    }

    pub fn close(&mut self, reason: CloseReason) {
        if let Some(coin) = self.selected.take() {
            if DF.log_selection {
                log::info!("Overlay for {} closed ({:?})", coin.id, reason);
            }
        }
        self.armed = false;
    }

    pub fn selected(&self) -> Option<&CoinView> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Whether an outside click this frame should close the overlay.
    pub fn accepts_outside_click(&self) -> bool {
        self.is_open() && self.armed
    }

    /// Called once the overlay has been drawn for a frame.
    pub fn arm(&mut self) {
        if self.is_open() {
            self.armed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoinSource, MarketCoin};

    fn view() -> CoinView {
        let coin = MarketCoin {
            id: "solana".to_string(),
            name: "Solana".to_string(),
            symbol: "sol".to_string(),
            image: "sol.png".to_string(),
            current_price: 150.0,
            price_change_percentage_24h: None,
            total_volume: 2.0e9,
            market_cap: 7.0e10,
            market_cap_rank: Some(5),
            high_24h: None,
            low_24h: None,
            circulating_supply: None,
            last_updated: None,
        };
        CoinView::from(&coin)
    }

    #[test]
    fn open_shows_normalized_record_and_locks_scroll() {
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_locked());

        overlay.open(view());
        assert!(overlay.scroll_locked());
        let selected = overlay.selected().unwrap();
        assert_eq!(selected.ticker(), "SOL");
        assert_eq!(selected.change_24h, None);
        assert_eq!(selected.source, CoinSource::Market);
    }

    #[test]
    fn close_clears_selection_and_restores_scroll() {
        for reason in [
            CloseReason::Escape,
            CloseReason::ClickOutside,
            CloseReason::CloseButton,
        ] {
            let mut overlay = DetailOverlay::default();
            overlay.open(view());
            overlay.close(reason);
            assert!(overlay.selected().is_none());
            assert!(!overlay.scroll_locked());
        }
    }

    #[test]
    fn opening_click_is_not_an_outside_click() {
        let mut overlay = DetailOverlay::default();
        overlay.open(view());
        assert!(!overlay.accepts_outside_click());
        overlay.arm();
        assert!(overlay.accepts_outside_click());

        // Re-selecting disarms again.
        overlay.open(view());
        assert!(!overlay.accepts_outside_click());
    }

    #[test]
    fn arm_without_selection_is_a_no_op() {
        let mut overlay = DetailOverlay::default();
        overlay.arm();
        assert!(!overlay.accepts_outside_click());
        overlay.close(CloseReason::Escape);
        assert!(!overlay.is_open());
    }
}

use std::collections::HashMap;

use poll_promise::Promise;

use crate::data::{FetchError, MarketPage};

/// A keyed result slot: in flight, landed, or failed.
pub enum FetchSlot<T: Send + 'static> {
    Pending(Promise<Result<T, FetchError>>),
    Ready(T),
    Failed(FetchError),
}

impl<T: Send + 'static> FetchSlot<T> {
    /// Move a finished promise into `Ready`/`Failed`. Returns the slot unchanged otherwise.
    pub fn poll(self) -> Self {
        match self {
            Self::Pending(promise) => match promise.try_take() {
                Ok(Ok(value)) => Self::Ready(value),
                Ok(Err(err)) => Self::Failed(err),
                Err(promise) => Self::Pending(promise),
            },
            settled => settled,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Session cache of listing pages keyed by page number. A page is fetched
/// once; only an explicit invalidate lets it be fetched again.
#[derive(Default)]
pub struct PageCache {
    slots: HashMap<u32, FetchSlot<MarketPage>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_fetch(&self, page: u32) -> bool {
        !self.slots.contains_key(&page)
    }

    pub fn start(&mut self, page: u32, promise: Promise<Result<MarketPage, FetchError>>) {
        self.slots.insert(page, FetchSlot::Pending(promise));
    }

    /// Settle every finished fetch. Returns the pages that changed state.
    pub fn poll(&mut self) -> Vec<u32> {
        let pending: Vec<u32> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.is_pending())
            .map(|(page, _)| *page)
            .collect();

        let mut settled = Vec::new();
        for page in pending {
            if let Some(slot) = self.slots.remove(&page) {
                let slot = slot.poll();
                if !slot.is_pending() {
                    settled.push(page);
                }
                self.slots.insert(page, slot);
            }
        }
        settled
    }

    pub fn slot(&self, page: u32) -> Option<&FetchSlot<MarketPage>> {
        self.slots.get(&page)
    }

    /// Drop a page so the next request fetches it afresh (retry / refresh).
    pub fn invalidate(&mut self, page: u32) {
        self.slots.remove(&page);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

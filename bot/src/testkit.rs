//! Scripted in-memory marketplace for driving the booster and creator
//! in tests.

use crate::market::Marketplace;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use t2::schema::{Cost, Currency, Emoji, Lot, LotStatus, TrafficType, Uom, Volume};
use t2::AvailableForSale;

pub(crate) fn lot(id: &str, amount: Decimal) -> Lot {
    Lot {
        id: id.into(),
        status: LotStatus::Active,
        traffic_type: TrafficType::Voice,
        volume: Volume {
            value: 100,
            uom: Uom::Min,
        },
        cost: Cost {
            amount,
            currency: Currency::Rub,
        },
        show_seller_name: false,
        emojis: Vec::new(),
    }
}

/// Responses are consumed front-to-back; an exhausted queue yields an
/// empty page, which reads as "no lots" to both drivers.
#[derive(Clone, Default)]
pub(crate) struct ScriptedMarket {
    state: Arc<State>,
}

#[derive(Default)]
struct State {
    my_lots: Mutex<VecDeque<Vec<Lot>>>,
    pages: Mutex<VecDeque<Vec<Lot>>>,
    available: Mutex<AvailableForSale>,
    created: Mutex<Vec<Lot>>,
    decorated: Mutex<Vec<(String, Vec<Emoji>)>>,
    boosted: Mutex<Vec<String>>,
    listings: AtomicUsize,
    searches: AtomicUsize,
    sequence: AtomicUsize,
}

impl ScriptedMarket {
    pub(crate) fn with_available(available: AvailableForSale) -> Self {
        let market = Self::default();
        *market.state.available.lock().unwrap() = available;
        market
    }

    pub(crate) fn push_my_lots(&self, lots: Vec<Lot>) {
        self.state.my_lots.lock().unwrap().push_back(lots);
    }

    pub(crate) fn push_page(&self, lots: Vec<Lot>) {
        self.state.pages.lock().unwrap().push_back(lots);
    }

    pub(crate) fn boosted(&self) -> Vec<String> {
        self.state.boosted.lock().unwrap().clone()
    }

    pub(crate) fn created(&self) -> Vec<Lot> {
        self.state.created.lock().unwrap().clone()
    }

    pub(crate) fn decorated(&self) -> Vec<(String, Vec<Emoji>)> {
        self.state.decorated.lock().unwrap().clone()
    }

    pub(crate) fn listings(&self) -> usize {
        self.state.listings.load(Ordering::SeqCst)
    }

    pub(crate) fn searches(&self) -> usize {
        self.state.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Marketplace for ScriptedMarket {
    async fn my_lots(&self) -> Result<Vec<Lot>> {
        self.state.listings.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .state
            .my_lots
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn search_lots(
        &self,
        _traffic_type: TrafficType,
        _volume: u32,
        _cost: Decimal,
        _limit: usize,
    ) -> Result<Vec<Lot>> {
        self.state.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .state
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn create_lot(
        &self,
        volume: u32,
        uom: Uom,
        cost: Decimal,
        traffic_type: TrafficType,
    ) -> Result<Lot> {
        let n = self.state.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Lot {
            id: format!("lot-{n}"),
            status: LotStatus::Active,
            traffic_type,
            volume: Volume { value: volume, uom },
            cost: Cost {
                amount: cost,
                currency: Currency::Rub,
            },
            show_seller_name: false,
            emojis: Vec::new(),
        };
        self.state.created.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn decorate_lot(&self, lot_id: &str, cost: Decimal, emojis: &[Emoji]) -> Result<Lot> {
        self.state
            .decorated
            .lock()
            .unwrap()
            .push((lot_id.to_string(), emojis.to_vec()));
        let mut decorated = lot(lot_id, cost);
        decorated.show_seller_name = true;
        decorated.emojis = emojis.to_vec();
        Ok(decorated)
    }

    async fn boost_lot(&self, lot_id: &str) -> Result<()> {
        self.state.boosted.lock().unwrap().push(lot_id.to_string());
        Ok(())
    }

    async fn available_for_sale(&self) -> Result<AvailableForSale> {
        Ok(*self.state.available.lock().unwrap())
    }
}

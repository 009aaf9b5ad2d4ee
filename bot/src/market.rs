use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use t2::inventory;
use t2::schema::{Emoji, Lot, TrafficType, Uom};
use t2::AvailableForSale;

/// Marketplace operations the booster and creator run against. The
/// live implementation wraps [`t2::Client`]; tests script an
/// in-memory one.
#[async_trait]
pub(crate) trait Marketplace {
    async fn my_lots(&self) -> Result<Vec<Lot>>;

    async fn search_lots(
        &self,
        traffic_type: TrafficType,
        volume: u32,
        cost: Decimal,
        limit: usize,
    ) -> Result<Vec<Lot>>;

    async fn create_lot(
        &self,
        volume: u32,
        uom: Uom,
        cost: Decimal,
        traffic_type: TrafficType,
    ) -> Result<Lot>;

    async fn decorate_lot(&self, lot_id: &str, cost: Decimal, emojis: &[Emoji]) -> Result<Lot>;

    async fn boost_lot(&self, lot_id: &str) -> Result<()>;

    async fn available_for_sale(&self) -> Result<AvailableForSale>;
}

/// Top-window membership is a pure set test: do any of our known lot
/// ids appear in the returned page? The remote ranking itself is
/// never reproduced locally.
pub(crate) fn in_top_window(known: &HashSet<String>, top: &[Lot]) -> bool {
    top.iter().any(|lot| known.contains(&lot.id))
}

#[derive(Clone)]
pub(crate) struct T2Marketplace {
    client: t2::Client,
    number: String,
}

impl T2Marketplace {
    pub(crate) fn new(client: t2::Client, number: String) -> Self {
        Self { client, number }
    }
}

#[async_trait]
impl Marketplace for T2Marketplace {
    async fn my_lots(&self) -> Result<Vec<Lot>> {
        Ok(self.client.my_lots(&self.number).await?)
    }

    async fn search_lots(
        &self,
        traffic_type: TrafficType,
        volume: u32,
        cost: Decimal,
        limit: usize,
    ) -> Result<Vec<Lot>> {
        Ok(self
            .client
            .search_lots(&self.number, traffic_type, volume, cost, 0, limit)
            .await?)
    }

    async fn create_lot(
        &self,
        volume: u32,
        uom: Uom,
        cost: Decimal,
        traffic_type: TrafficType,
    ) -> Result<Lot> {
        Ok(self
            .client
            .create_lot(&self.number, volume, uom, cost, traffic_type)
            .await?)
    }

    async fn decorate_lot(&self, lot_id: &str, cost: Decimal, emojis: &[Emoji]) -> Result<Lot> {
        Ok(self
            .client
            .update_lot(&self.number, lot_id, cost, emojis)
            .await?)
    }

    async fn boost_lot(&self, lot_id: &str) -> Result<()> {
        Ok(self.client.boost_lot(&self.number, lot_id).await?)
    }

    async fn available_for_sale(&self) -> Result<AvailableForSale> {
        let rests = self.client.rests(&self.number).await?;
        Ok(inventory::available_for_sale(&rests))
    }
}

use crate::market::{in_top_window, Marketplace};
use anyhow::{bail, Result};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::time::Duration;
use t2::schema::{Emoji, LotStatus, TrafficType, Uom};
use tokio::time::sleep;

/// How often to re-check the search index for a lot that was just
/// created; the marketplace takes a moment to surface new lots.
const PLACEMENT_POLL: Duration = Duration::from_secs(1);

/// Places new lots against sellable inventory, one at a time, waiting
/// out periods where the seller already holds the top window.
pub(crate) struct Creator<M> {
    market: M,
    traffic_type: TrafficType,
    uom: Uom,
    volume: u32,
    cost: Decimal,
    orders_count: u32,
    emojis: Vec<Emoji>,
    poll_interval: Duration,
    top_window: usize,
}

impl<M: Marketplace> Creator<M> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        market: M,
        traffic_type: TrafficType,
        uom: Uom,
        volume: u32,
        cost: Decimal,
        orders_count: u32,
        emojis: Vec<Emoji>,
        poll_interval: Duration,
        top_window: usize,
    ) -> Self {
        Self {
            market,
            traffic_type,
            uom,
            volume,
            cost,
            orders_count,
            emojis,
            poll_interval,
            top_window,
        }
    }

    pub(crate) async fn run(&self) -> Result<()> {
        let count = self.placeable_count().await?;

        let mut known = self.known_active_ids().await?;

        for placed in 1..=count {
            self.wait_until_top_clears(&known).await?;

            let created = self
                .market
                .create_lot(self.volume, self.uom, self.cost, self.traffic_type)
                .await?;
            info!("created lot {} at {} rub", created.id, self.cost);

            let decorated = self
                .market
                .decorate_lot(&created.id, self.cost, &self.emojis)
                .await?;

            self.wait_until_indexed(&decorated.id).await?;
            info!("lot {} placed ({placed}/{count})", decorated.id);

            known.insert(decorated.id);
        }

        Ok(())
    }

    /// Requested order count clamped to what sellable inventory
    /// covers. Not even one lot's worth of volume is a hard stop
    /// before any lot is created.
    async fn placeable_count(&self) -> Result<u32> {
        let available = self.market.available_for_sale().await?;
        let Some(available) = available.for_uom(self.uom) else {
            bail!("unit {} cannot be sold on the exchange", self.uom);
        };

        let possible = (available / u64::from(self.volume)) as u32;
        if possible == 0 {
            bail!(
                "insufficient sellable inventory: {} {} available, lot volume is {}",
                available,
                self.uom,
                self.volume
            );
        }

        let count = self.orders_count.min(possible);
        if count < self.orders_count {
            warn!(
                "clamping order count from {} to {count} to fit sellable inventory",
                self.orders_count
            );
        }
        Ok(count)
    }

    async fn known_active_ids(&self) -> Result<HashSet<String>> {
        let lots = self.market.my_lots().await?;
        Ok(lots
            .into_iter()
            .filter(|lot| {
                lot.status == LotStatus::Active && lot.traffic_type == self.traffic_type
            })
            .map(|lot| lot.id)
            .collect())
    }

    /// Holds off creating while any of our lots still occupy the top
    /// window; a new lot would only compete with them.
    async fn wait_until_top_clears(&self, known: &HashSet<String>) -> Result<()> {
        loop {
            let top = self
                .market
                .search_lots(self.traffic_type, self.volume, self.cost, self.top_window)
                .await?;
            if !in_top_window(known, &top) {
                return Ok(());
            }
            debug!("an own lot still holds the top window, waiting");
            sleep(self.poll_interval).await;
        }
    }

    /// Read-after-write compensation: the lot only counts as placed
    /// once the search index actually returns it.
    async fn wait_until_indexed(&self, lot_id: &str) -> Result<()> {
        let target = HashSet::from([lot_id.to_string()]);
        loop {
            let top = self
                .market
                .search_lots(self.traffic_type, self.volume, self.cost, self.top_window)
                .await?;
            if in_top_window(&target, &top) {
                return Ok(());
            }
            debug!("lot {lot_id} not yet surfaced by the search index, waiting");
            sleep(PLACEMENT_POLL).await;
        }
    }
}

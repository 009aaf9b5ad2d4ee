use crate::market::{in_top_window, Marketplace};
use anyhow::Result;
use log::info;
use rust_decimal::Decimal;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use t2::schema::{Lot, LotStatus, TrafficType};
use tokio::time::sleep;

/// Every boost costs a flat fee, charged against the configured
/// balance.
const BOOST_COST: i64 = 5;

/// Keeps the seller's lots represented in the top search window by
/// spending a bounded boost balance on lots that fell out of it.
///
/// The loop has no natural end: it re-lists live state after every
/// pass and only stops once the balance is exhausted or no active lot
/// matches the configured target. Callers cancel it by dropping the
/// future (main races it against Ctrl-C).
pub(crate) struct Booster<M> {
    market: M,
    traffic_type: TrafficType,
    volume: u32,
    cost: Decimal,
    balance: i64,
    poll_interval: Duration,
    top_window: usize,
}

impl<M: Marketplace> Booster<M> {
    pub(crate) fn new(
        market: M,
        traffic_type: TrafficType,
        volume: u32,
        cost: Decimal,
        balance: i64,
        poll_interval: Duration,
        top_window: usize,
    ) -> Self {
        Self {
            market,
            traffic_type,
            volume,
            cost,
            balance,
            poll_interval,
            top_window,
        }
    }

    pub(crate) async fn run(&self) -> Result<()> {
        let mut balance = self.balance;
        let mut topped_last_pass = HashSet::new();

        loop {
            if balance <= 0 {
                info!("boost balance exhausted, stopping");
                return Ok(());
            }

            let active = self.active_lots().await?;
            if active.is_empty() {
                info!("no active lots match the configured target, stopping");
                return Ok(());
            }

            let known: HashSet<String> = active.iter().map(|lot| lot.id.clone()).collect();
            let mut queue = reorder(active, &topped_last_pass);
            let mut topped = HashSet::new();

            while let Some(lot) = queue.pop_front() {
                let top = self
                    .market
                    .search_lots(self.traffic_type, self.volume, self.cost, self.top_window)
                    .await?;

                if in_top_window(&known, &top) {
                    info!("lot {} is covered by the top window", lot.id);
                    topped.insert(lot.id);
                } else {
                    info!("boosting lot {}", lot.id);
                    self.market.boost_lot(&lot.id).await?;
                    balance -= BOOST_COST;
                    if balance <= 0 {
                        info!("boost balance exhausted, stopping");
                        return Ok(());
                    }
                }

                sleep(self.poll_interval).await;
            }

            topped_last_pass = topped;
        }
    }

    /// Lots eligible for boosting: active, the configured traffic
    /// type, and still at exactly the configured cost. A lot whose
    /// cost drifted is dropped, not re-priced.
    async fn active_lots(&self) -> Result<Vec<Lot>> {
        let lots = self.market.my_lots().await?;
        Ok(lots
            .into_iter()
            .filter(|lot| {
                lot.status == LotStatus::Active
                    && lot.traffic_type == self.traffic_type
                    && lot.cost.amount == self.cost
            })
            .collect())
    }
}

/// Priority hint: lots observed in the top window last pass are
/// likely still there, so they go to the back of the queue and get
/// checked last.
fn reorder(lots: Vec<Lot>, topped_last_pass: &HashSet<String>) -> VecDeque<Lot> {
    let (fresh, topped): (Vec<_>, Vec<_>) = lots
        .into_iter()
        .partition(|lot| !topped_last_pass.contains(&lot.id));
    fresh.into_iter().chain(topped).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{lot, ScriptedMarket};
    use rust_decimal_macros::dec;

    fn booster(market: ScriptedMarket, balance: i64) -> Booster<ScriptedMarket> {
        Booster::new(
            market,
            TrafficType::Voice,
            100,
            dec!(100),
            balance,
            Duration::ZERO,
            10,
        )
    }

    #[tokio::test]
    async fn zero_balance_terminates_before_any_work() {
        let market = ScriptedMarket::default();
        market.push_my_lots(vec![lot("a", dec!(100))]);

        booster(market.clone(), 0).run().await.unwrap();

        assert_eq!(market.listings(), 0);
        assert_eq!(market.searches(), 0);
        assert!(market.boosted().is_empty());
    }

    #[tokio::test]
    async fn terminates_when_no_active_lot_matches() {
        let market = ScriptedMarket::default();
        market.push_my_lots(Vec::new());

        booster(market.clone(), 50).run().await.unwrap();

        assert_eq!(market.listings(), 1);
        assert!(market.boosted().is_empty());
    }

    #[tokio::test]
    async fn drifted_cost_excludes_a_lot_from_the_active_set() {
        let market = ScriptedMarket::default();
        // id2 drifted to 80, target is 100
        market.push_my_lots(vec![lot("id1", dec!(100)), lot("id2", dec!(80))]);
        market.push_page(Vec::new());

        booster(market.clone(), 5).run().await.unwrap();

        assert_eq!(market.boosted(), vec!["id1".to_string()]);
    }

    #[tokio::test]
    async fn topped_lot_is_not_boosted() {
        let market = ScriptedMarket::default();
        market.push_my_lots(vec![lot("a", dec!(100)), lot("b", dec!(100))]);
        // any known id in the page covers the whole set
        market.push_page(vec![lot("b", dec!(100)), lot("c", dec!(100))]);
        market.push_page(vec![lot("b", dec!(100))]);
        // next pass finds nothing active and stops
        market.push_my_lots(Vec::new());

        booster(market.clone(), 50).run().await.unwrap();

        assert!(market.boosted().is_empty());
        assert_eq!(market.listings(), 2);
    }

    #[tokio::test]
    async fn balance_halts_the_pass_it_crosses_zero() {
        let market = ScriptedMarket::default();
        market.push_my_lots(vec![
            lot("x", dec!(100)),
            lot("y", dec!(100)),
            lot("z", dec!(100)),
        ]);
        // every search misses, so every lot wants a boost

        booster(market.clone(), 10).run().await.unwrap();

        // 10 pays for two boosts; the third lot is never reached
        assert_eq!(market.boosted(), vec!["x".to_string(), "y".to_string()]);
        assert_eq!(market.listings(), 1);
    }

    #[tokio::test]
    async fn exhausted_balance_stops_the_next_pass_listing() {
        let market = ScriptedMarket::default();
        market.push_my_lots(vec![lot("a", dec!(100))]);
        market.push_my_lots(vec![lot("a", dec!(100))]);

        booster(market.clone(), 5).run().await.unwrap();

        assert_eq!(market.boosted(), vec!["a".to_string()]);
        assert_eq!(market.listings(), 1);
    }

    #[test]
    fn reorder_sends_previously_topped_lots_to_the_back() {
        let topped = HashSet::from(["a".to_string()]);
        let queue = reorder(
            vec![lot("a", dec!(100)), lot("b", dec!(100)), lot("c", dec!(100))],
            &topped,
        );
        let order: Vec<_> = queue.into_iter().map(|lot| lot.id).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}

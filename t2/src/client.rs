use crate::headers::Fingerprint;
use crate::page::Page;
use crate::schema::{Currency, Emoji, Envelope, Lot, Region, Rests, TrafficType, Uom};
use crate::{Error, Result};
use reqwest::{Method, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const DOMAIN: &str = "t2.ru";

/// Stateless wrapper around the exchange endpoints. One instance per
/// credential/region pair; every call is a single round-trip.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    fingerprint: Fingerprint,
    region: Region,
}

impl Client {
    pub fn new(auth_code: String, region: Region) -> Self {
        Self {
            client: reqwest::Client::new(),
            fingerprint: Fingerprint::new(auth_code, region),
            region,
        }
    }

    /// The seller's own lots, all statuses.
    pub async fn my_lots(&self, number: &str) -> Result<Vec<Lot>> {
        let path = format!("/api/subscribers/{number}/exchange/lots/created");
        let response: Envelope<Vec<Lot>> = self.get(&path, Page::MyLots).await?;
        Ok(response.data)
    }

    /// The first `limit` lots the marketplace ranks for the given
    /// bucket. Ordering is decided remotely; callers may only test id
    /// membership within the returned page.
    pub async fn search_lots(
        &self,
        number: &str,
        traffic_type: TrafficType,
        volume: u32,
        cost: Decimal,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Lot>> {
        // cost goes through a string so 80 does not turn into "80.0"
        let query = serde_qs::to_string(&json!({
            "trafficType": traffic_type,
            "volume": volume,
            "cost": cost.normalize().to_string(),
            "offset": offset,
            "limit": limit,
        }))?;
        let path = format!("/api/subscribers/{number}/exchange/lots?{query}");
        let response: Envelope<Vec<Lot>> = self.get(&path, Page::Search).await?;
        Ok(response.data)
    }

    /// Places a new lot. The marketplace creates it undecorated and
    /// without the seller name shown; decoration is a separate
    /// [`update_lot`](Self::update_lot) call.
    pub async fn create_lot(
        &self,
        number: &str,
        volume: u32,
        uom: Uom,
        cost: Decimal,
        traffic_type: TrafficType,
    ) -> Result<Lot> {
        let path = format!("/api/subscribers/{number}/exchange/lots/created");
        let body = json!({
            "volume": { "value": volume, "uom": uom },
            "cost": { "amount": cost, "currency": Currency::Rub },
            "trafficType": traffic_type,
        });
        let response: Envelope<Lot> = self.put(&path, Page::MyLots, body).await?;
        Ok(response.data)
    }

    /// Sets the lot's decorations and makes the seller name visible.
    pub async fn update_lot(
        &self,
        number: &str,
        lot_id: &str,
        cost: Decimal,
        emojis: &[Emoji],
    ) -> Result<Lot> {
        let path = format!("/api/subscribers/{number}/exchange/lots/created/{lot_id}");
        let body = json!({
            "showSellerName": true,
            "emojis": emojis,
            "cost": { "amount": cost, "currency": Currency::Rub },
        });
        let response: Envelope<Lot> = self.patch(&path, Page::MyLots, body).await?;
        Ok(response.data)
    }

    /// Pays to re-rank a lot toward the top of search results. The
    /// response carries no payload contract beyond success.
    pub async fn boost_lot(&self, number: &str, lot_id: &str) -> Result<()> {
        let path = format!("/api/subscribers/{number}/exchange/lots/premium");
        let body = json!({ "lotId": lot_id });
        self.send(Method::PUT, &path, Page::MyLots, Some(body))
            .await?;
        Ok(())
    }

    /// Raw remaining-allowance snapshot, sellable or not.
    pub async fn rests(&self, number: &str) -> Result<Rests> {
        let site = self.region.to_string().to_uppercase();
        let path = format!("/api/subscribers/{number}/site{site}/rests");
        let response: Envelope<Rests> = self.get(&path, Page::Remains).await?;
        Ok(response.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, page: Page) -> Result<T> {
        self.request(Method::GET, path, page, None).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str, page: Page, body: Value) -> Result<T> {
        self.request(Method::PUT, path, page, Some(body)).await
    }

    async fn patch<T: DeserializeOwned>(&self, path: &str, page: Page, body: Value) -> Result<T> {
        self.request(Method::PATCH, path, page, Some(body)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        page: Page,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, page, body).await?;
        Ok(response.json().await?)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        page: Page,
        body: Option<Value>,
    ) -> Result<Response> {
        let url = format!("https://{}.{DOMAIN}{path}", self.region);
        let headers = self.fingerprint.headers(page)?;

        let mut request = self.client.request(method, url).headers(headers);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Response(response.status(), response.text().await?))
        }
    }
}

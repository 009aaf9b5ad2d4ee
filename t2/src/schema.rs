use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A sell offer on the exchange.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    pub status: LotStatus,
    pub traffic_type: TrafficType,
    pub volume: Volume,
    pub cost: Cost,
    #[serde(default)]
    pub show_seller_name: bool,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    Active,
    Bought,
    Expired,
    Revoked,
    Error,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrafficType {
    Voice,
    Data,
    Sms,
}

/// Unit of measure. `Mb` and `Pcs` only occur in raw allowance
/// entries; lots and sellable inventory use `Gb`, `Min` and `Sms`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Uom {
    Gb,
    Mb,
    Min,
    Sms,
    Pcs,
}

/// Decorations a seller can attach to a lot, at most eight per lot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Emoji {
    Devil,
    Bomb,
    Cat,
    Cool,
    Rich,
    Scream,
    Tongue,
    Zipped,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
}

/// Subscriber's home region, doubles as the API subdomain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Ekt,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Volume {
    pub value: u32,
    pub uom: Uom,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Cost {
    pub amount: Decimal,
    pub currency: Currency,
}

/// Remaining-allowance snapshot as the carrier reports it.
#[derive(Debug, Deserialize)]
pub struct Rests {
    pub rests: Vec<Rest>,
}

/// One allowance entry. The unit is kept as a raw string so entries
/// with units this client does not know about still deserialize.
#[derive(Debug, Deserialize)]
pub struct Rest {
    pub uom: String,
    pub remain: u64,
    pub rollover: bool,
}

/// Responses come wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

use crate::schema::{Rests, Uom};

const MB_PER_GB: u64 = 1024;

/// Sellable inventory per unit, derived fresh from an allowance
/// snapshot on every query.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AvailableForSale {
    pub min: u64,
    pub gb: u64,
    pub sms: u64,
}

impl AvailableForSale {
    /// Sellable total for a unit, `None` for units that cannot be
    /// sold on the exchange.
    pub fn for_uom(&self, uom: Uom) -> Option<u64> {
        match uom {
            Uom::Min => Some(self.min),
            Uom::Gb => Some(self.gb),
            Uom::Sms => Some(self.sms),
            Uom::Mb | Uom::Pcs => None,
        }
    }
}

/// Sums the sellable remainder of an allowance snapshot.
///
/// Rollover allowance is not eligible for resale and is skipped
/// entirely. Megabytes fold into whole gigabytes per entry; the
/// sub-gigabyte remainder is dropped, never carried to another entry.
/// Units this accounting does not know about are skipped so a new
/// upstream unit cannot break it.
pub fn available_for_sale(rests: &Rests) -> AvailableForSale {
    let mut available = AvailableForSale::default();

    for rest in &rests.rests {
        if rest.rollover {
            continue;
        }
        match rest.uom.as_str() {
            "min" => available.min += rest.remain,
            "mb" => available.gb += rest.remain / MB_PER_GB,
            "pcs" => available.sms += rest.remain,
            other => log::debug!("skipping allowance entry with unknown unit {other:?}"),
        }
    }

    available
}

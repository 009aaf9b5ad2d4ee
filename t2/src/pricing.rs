use crate::schema::Uom;
use crate::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MIN_UNIT_COST: Decimal = dec!(0.8);
const GB_UNIT_COST: Decimal = dec!(15);
const SMS_UNIT_COST: Decimal = dec!(15);

/// Minimum acceptable price per unit of volume. Only the three
/// sellable units carry a price; asking for any other unit is a
/// configuration error and fails before a single request goes out.
pub fn min_unit_cost(uom: Uom) -> Result<Decimal> {
    match uom {
        Uom::Min => Ok(MIN_UNIT_COST),
        Uom::Gb => Ok(GB_UNIT_COST),
        Uom::Sms => Ok(SMS_UNIT_COST),
        Uom::Mb | Uom::Pcs => Err(Error::UnsupportedUnit(uom)),
    }
}

/// Price floor. The requested cost survives only when it is present
/// and at least `volume * min_unit_cost`; anything lower, or absent,
/// becomes exactly the floor.
pub fn effective_cost(uom: Uom, volume: u32, requested: Option<Decimal>) -> Result<Decimal> {
    let floor = Decimal::from(volume) * min_unit_cost(uom)?;
    Ok(match requested {
        Some(cost) if cost >= floor => cost,
        _ => floor,
    })
}

use super::Concession;
use crate::model::station::Zone;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// the charge for one traveler, in the order travelers were given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TravelerCharge {
    pub age: u32,
    pub concession: Concession,
    pub amount: Decimal,
}

/// result of pricing a trip request, with the steps that produced the total.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FareQuote {
    pub start_zone: Zone,
    pub destination_zone: Zone,
    pub zones_crossed: u32,
    pub base_fare: Decimal,
    pub charges: Vec<TravelerCharge>,
    /// sum of traveler charges before any cap
    pub subtotal: Decimal,
    /// the cap ceiling for the whole trip, if the ticket type is capped
    pub cap: Option<Decimal>,
    pub total: Decimal,
}

impl FareQuote {
    pub fn cap_applied(&self) -> bool {
        self.total < self.subtotal
    }

    /// total rounded to pence, half pennies rounding up.
    pub fn total_pounds(&self) -> String {
        let pence = self
            .total
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("£{pence:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::FareQuote;
    use crate::model::station::Zone;
    use rust_decimal::Decimal;

    fn quote_totalling(total: Decimal) -> FareQuote {
        FareQuote {
            start_zone: Zone(1),
            destination_zone: Zone(2),
            zones_crossed: 2,
            base_fare: total,
            charges: vec![],
            subtotal: total,
            cap: None,
            total,
        }
    }

    #[test]
    fn test_total_pounds_rounds_half_pennies_up() {
        assert_eq!(quote_totalling(Decimal::new(125, 3)).total_pounds(), "£0.13");
        assert_eq!(quote_totalling(Decimal::new(1145, 3)).total_pounds(), "£1.15");
        assert_eq!(quote_totalling(Decimal::new(1144, 3)).total_pounds(), "£1.14");
        assert_eq!(quote_totalling(Decimal::new(96, 1)).total_pounds(), "£9.60");
    }
}

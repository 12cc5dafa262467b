use rust_decimal::Decimal;

/// single-journey fares by number of zones crossed.
#[derive(Clone, Debug, PartialEq)]
pub struct FareTable {
    fares: Vec<Decimal>,
    max_fare: Decimal,
}

impl FareTable {
    /// `fares[i]` is the fare for a trip crossing `i + 1` zones.
    pub fn new(fares: Vec<Decimal>) -> Result<FareTable, String> {
        let max_fare = fares
            .iter()
            .max()
            .copied()
            .ok_or_else(|| String::from("fare table must contain at least one fare"))?;
        if let Some(negative) = fares.iter().find(|f| f.is_sign_negative()) {
            return Err(format!("fare table contains negative fare {negative}"));
        }
        Ok(FareTable { fares, max_fare })
    }

    /// fare for crossing `zones_crossed` zones. spans with no entry of
    /// their own are charged the highest fare in the table.
    pub fn base_fare(&self, zones_crossed: u32) -> Decimal {
        (zones_crossed as usize)
            .checked_sub(1)
            .and_then(|idx| self.fares.get(idx))
            .copied()
            .unwrap_or(self.max_fare)
    }
}

use crate::Establishment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const STANDARD_STOCK: u32 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    #[error("out of stock: {0:?}")]
    OutOfStock(Establishment),
}

/// Purchasable card inventory. Resolution never consults this; it only seeds
/// the outer purchase layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub stock: HashMap<Establishment, u32>,
}

impl Market {
    /// Opening marketplace: six copies of every catalog establishment.
    pub fn standard() -> Self {
        let stock = Establishment::ALL
            .iter()
            .map(|key| (*key, STANDARD_STOCK))
            .collect();
        Self { stock }
    }

    pub fn available(&self, key: Establishment) -> u32 {
        self.stock.get(&key).copied().unwrap_or(0)
    }

    /// Removes one copy for a purchase handled by the outer turn layer.
    pub fn take(&mut self, key: Establishment) -> Result<(), MarketError> {
        match self.stock.get_mut(&key) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(MarketError::OutOfStock(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_six_of_each() {
        let market = Market::standard();
        for key in Establishment::ALL {
            assert_eq!(market.available(key), 6);
        }
    }

    #[test]
    fn take_depletes_and_bottoms_out() {
        let mut market = Market::standard();
        for _ in 0..6 {
            market.take(Establishment::Cafe).unwrap();
        }
        assert_eq!(market.available(Establishment::Cafe), 0);
        assert_eq!(
            market.take(Establishment::Cafe).unwrap_err(),
            MarketError::OutOfStock(Establishment::Cafe)
        );
    }
}

use crate::Establishment;
use std::collections::HashMap;

/// Roll-total activation tables, one for gain effects and one for steal
/// effects. Keys are generic integer totals so two-die rows (roll 7) fit
/// alongside the single-die range.
#[derive(Debug, Clone)]
pub struct TriggerTables {
    gains: HashMap<u8, Vec<Establishment>>,
    steals: HashMap<u8, Vec<Establishment>>,
}

impl TriggerTables {
    pub fn standard() -> Self {
        use Establishment::*;
        let mut gains = HashMap::new();
        gains.insert(1, vec![WheatField]);
        gains.insert(2, vec![Ranch, Bakery]);
        gains.insert(3, vec![Bakery]);
        gains.insert(4, vec![ConvenienceStore]);
        gains.insert(5, vec![Forest]);
        gains.insert(7, vec![CheeseFactory]);
        let mut steals = HashMap::new();
        steals.insert(3, vec![Cafe]);
        Self { gains, steals }
    }

    /// Cards whose gain effect fires on this roll total. A roll with no row
    /// triggers nothing.
    pub fn gains_on(&self, roll: u8) -> &[Establishment] {
        self.gains.get(&roll).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cards whose steal effect fires on this roll total.
    pub fn steals_on(&self, roll: u8) -> &[Establishment] {
        self.steals.get(&roll).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rows() {
        let tables = TriggerTables::standard();
        assert_eq!(tables.gains_on(1), &[Establishment::WheatField]);
        assert_eq!(
            tables.gains_on(2),
            &[Establishment::Ranch, Establishment::Bakery]
        );
        assert_eq!(tables.gains_on(7), &[Establishment::CheeseFactory]);
        assert_eq!(tables.steals_on(3), &[Establishment::Cafe]);
    }

    #[test]
    fn unmapped_rolls_trigger_nothing() {
        let tables = TriggerTables::standard();
        assert!(tables.gains_on(6).is_empty());
        assert!(tables.gains_on(12).is_empty());
        assert!(tables.steals_on(1).is_empty());
        assert!(tables.steals_on(6).is_empty());
    }
}

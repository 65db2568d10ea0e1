use crate::{Establishment, EstablishmentDef, Player, Restriction, Symbol};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown establishment: {0:?}")]
    UnknownEstablishment(Establishment),
}

/// Static card registry. Populated once at startup and read-only afterwards;
/// resolution looks entries up by key and never mutates them.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: HashMap<Establishment, EstablishmentDef>,
}

impl Catalog {
    /// The base-game card set.
    pub fn standard() -> Self {
        let mut defs = HashMap::new();
        defs.insert(
            Establishment::WheatField,
            EstablishmentDef {
                name: "Wheat Field",
                restriction: Restriction::Unrestricted,
                amount: 1,
                symbol: None,
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::Ranch,
            EstablishmentDef {
                name: "Ranch",
                restriction: Restriction::Unrestricted,
                amount: 1,
                symbol: Some(Symbol::Cow),
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::Bakery,
            EstablishmentDef {
                name: "Bakery",
                restriction: Restriction::SelfOnly,
                amount: 1,
                symbol: None,
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::ConvenienceStore,
            EstablishmentDef {
                name: "Convenience Store",
                restriction: Restriction::SelfOnly,
                amount: 3,
                symbol: None,
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::Cafe,
            EstablishmentDef {
                name: "Cafe",
                restriction: Restriction::OthersOnly,
                amount: 1,
                symbol: None,
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::Forest,
            EstablishmentDef {
                name: "Forest",
                restriction: Restriction::Unrestricted,
                amount: 1,
                symbol: None,
                linked_symbol: None,
            },
        );
        defs.insert(
            Establishment::CheeseFactory,
            EstablishmentDef {
                name: "Cheese Factory",
                restriction: Restriction::Unrestricted,
                amount: 3,
                symbol: None,
                linked_symbol: Some(Symbol::Cow),
            },
        );
        Self { defs }
    }

    /// Catalog from an explicit definition set, for variant card pools.
    pub fn from_defs(defs: HashMap<Establishment, EstablishmentDef>) -> Self {
        Self { defs }
    }

    pub fn lookup(&self, key: Establishment) -> Result<&EstablishmentDef, CatalogError> {
        self.defs
            .get(&key)
            .ok_or(CatalogError::UnknownEstablishment(key))
    }

    /// The player's total holdings across every card tagged with `symbol`.
    pub fn symbol_count(&self, player: &Player, symbol: Symbol) -> i64 {
        self.defs
            .iter()
            .filter(|(_, def)| def.symbol == Some(symbol))
            .map(|(key, _)| i64::from(player.owned(*key)))
            .sum()
    }
}

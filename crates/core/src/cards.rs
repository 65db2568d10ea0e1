use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Establishment {
    WheatField,
    Ranch,
    Bakery,
    ConvenienceStore,
    Cafe,
    Forest,
    CheeseFactory,
}

impl Establishment {
    pub const ALL: [Establishment; 7] = [
        Establishment::WheatField,
        Establishment::Ranch,
        Establishment::Bakery,
        Establishment::ConvenienceStore,
        Establishment::Cafe,
        Establishment::Forest,
        Establishment::CheeseFactory,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Establishment::WheatField => "Wheat Field",
            Establishment::Ranch => "Ranch",
            Establishment::Bakery => "Bakery",
            Establishment::ConvenienceStore => "Convenience Store",
            Establishment::Cafe => "Cafe",
            Establishment::Forest => "Forest",
            Establishment::CheeseFactory => "Cheese Factory",
        }
    }
}

/// Resource category printed on a card. Cards tagged with a symbol count
/// toward any card whose payout is linked to that symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cow,
}

/// Whose turn must be active for a card's effect to apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Restriction {
    Unrestricted,
    SelfOnly,
    OthersOnly,
}

#[derive(Debug, Clone)]
pub struct EstablishmentDef {
    pub name: &'static str,
    pub restriction: Restriction,
    /// Payout per owned copy, in coins.
    pub amount: i64,
    /// Category this card counts toward for linked payouts.
    pub symbol: Option<Symbol>,
    /// When set, the payout is multiplied by the owner's holdings across
    /// every card tagged with this symbol.
    pub linked_symbol: Option<Symbol>,
}

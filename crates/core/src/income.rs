use crate::{Catalog, CatalogError, Player, Restriction, TriggerTables};
use serde::{Deserialize, Serialize};

/// The static tables one resolution pass reads: card catalog plus trigger
/// tables. Built once per game.
#[derive(Debug, Clone)]
pub struct Ruleset {
    pub catalog: Catalog,
    pub triggers: TriggerTables,
}

impl Ruleset {
    pub fn standard() -> Self {
        Self {
            catalog: Catalog::standard(),
            triggers: TriggerTables::standard(),
        }
    }
}

/// Income from `subject`'s own establishments for one roll. Self-only cards
/// pay only when `subject` is the active player; unrestricted and others-only
/// cards pay regardless of whose turn it is. A linked-symbol card pays
/// `symbol holdings * owned copies * amount`, so it is zero whenever either
/// factor is zero. Never negative.
pub fn gains(
    subject: &Player,
    active: &Player,
    roll: u8,
    rules: &Ruleset,
) -> Result<i64, CatalogError> {
    let mut total = 0;
    for key in rules.triggers.gains_on(roll) {
        let def = rules.catalog.lookup(*key)?;
        if def.restriction == Restriction::SelfOnly && subject.name != active.name {
            continue;
        }
        let owned = i64::from(subject.owned(*key));
        total += match def.linked_symbol {
            Some(symbol) => rules.catalog.symbol_count(subject, symbol) * owned * def.amount,
            None => owned * def.amount,
        };
    }
    Ok(total)
}

/// How much `actor`'s steal-triggered establishments take from `victim` on
/// one roll. Per-card takes are summed first, then capped once at the
/// victim's stash. Pure: reads `actor`'s holdings and `victim`'s stash only.
pub fn stolen(
    actor: &Player,
    victim: &Player,
    roll: u8,
    rules: &Ruleset,
) -> Result<i64, CatalogError> {
    let mut total = 0;
    for key in rules.triggers.steals_on(roll) {
        let def = rules.catalog.lookup(*key)?;
        total += i64::from(actor.owned(*key)) * def.amount;
    }
    Ok(total.min(victim.stash))
}

/// One player's resolved share of a roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnIncome {
    /// Income from the player's own establishments.
    pub gains: i64,
    /// Coins taken from the active player's stash (opponents only).
    pub stolen: i64,
    /// Coins lost to opponents' steal effects (active player only).
    pub losses: i64,
    /// Net stash delta; applying it never drives the stash negative.
    pub net: i64,
}

/// Resolves `subject`'s net income for one roll. For the active player the
/// losses to every opponent are summed, then capped once at the active
/// stash; each opponent's take is independently capped against the full
/// pre-loss stash (a shared depleting pool is deliberately not modeled).
/// Roster order is irrelevant: the loss aggregation is a pure sum.
pub fn resolve_income(
    subject: &Player,
    active: &Player,
    players: &[Player],
    roll: u8,
    rules: &Ruleset,
) -> Result<TurnIncome, CatalogError> {
    let gained = gains(subject, active, roll, rules)?;
    if subject.name == active.name {
        let mut lost = 0;
        for opponent in players {
            if opponent.name != active.name {
                lost += stolen(opponent, active, roll, rules)?;
            }
        }
        let losses = lost.min(active.stash);
        Ok(TurnIncome {
            gains: gained,
            stolen: 0,
            losses,
            net: gained - losses,
        })
    } else {
        let taken = stolen(subject, active, roll, rules)?;
        Ok(TurnIncome {
            gains: gained,
            stolen: taken,
            losses: 0,
            net: gained + taken,
        })
    }
}

/// Net stash change for `subject` when `active` rolls `roll`.
pub fn income(
    subject: &Player,
    active: &Player,
    players: &[Player],
    roll: u8,
    rules: &Ruleset,
) -> Result<i64, CatalogError> {
    resolve_income(subject, active, players, roll, rules).map(|turn| turn.net)
}

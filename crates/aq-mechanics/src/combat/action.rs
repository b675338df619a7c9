//! Combat actions and the damage formulas behind them.

use crate::error::{MechError, MechResult};

/// Weapon damage when nothing is equipped.
pub const UNARMED_DAMAGE: i32 = 2;
/// Chance a plain attack opens a bleeding wound.
pub const ATTACK_BLEED_CHANCE: f64 = 0.1;
/// Chance a special attack connects.
pub const SPECIAL_HIT_CHANCE: f64 = 0.7;
/// Chance a landed special attack inflicts bleeding or weakness.
pub const SPECIAL_EFFECT_CHANCE: f64 = 0.25;
/// Chance defending grants strength.
pub const DEFEND_STRENGTH_CHANCE: f64 = 0.25;
/// Chance an enemy hit inflicts bleeding or poison.
pub const ENEMY_EFFECT_CHANCE: f64 = 0.15;
/// Multiplier for strengthened attackers and weakened defenders.
const EFFECT_MULTIPLIER: f64 = 1.5;

/// An action the player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// Basic attack with the equipped weapon.
    Attack,
    /// Double-damage attack that can miss.
    SpecialAttack,
    /// Halve the enemy's next hit.
    Defend,
    /// Drink a potion. `slot` is the 1-based position in the potion list;
    /// `None` asks for the list, `Some(0)` cancels.
    UseItem {
        /// Chosen potion slot.
        slot: Option<usize>,
    },
    /// Try to escape.
    Flee,
}

impl CombatAction {
    /// Parse a menu choice: `1`–`5` or the action's name. `4 2` (or
    /// `item 2`) selects potion slot 2 directly.
    pub fn parse(input: &str) -> MechResult<Self> {
        let mut words = input.split_whitespace();
        let head = words
            .next()
            .ok_or_else(|| MechError::InvalidAction(input.to_string()))?
            .to_lowercase();
        let slot = match words.next() {
            Some(w) => Some(
                w.parse::<usize>()
                    .map_err(|_| MechError::InvalidAction(input.to_string()))?,
            ),
            None => None,
        };

        match head.as_str() {
            "1" | "attack" => Ok(Self::Attack),
            "2" | "special" => Ok(Self::SpecialAttack),
            "3" | "defend" => Ok(Self::Defend),
            "4" | "item" | "use" => Ok(Self::UseItem { slot }),
            "5" | "flee" | "run" => Ok(Self::Flee),
            _ => Err(MechError::InvalidAction(input.to_string())),
        }
    }
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::SpecialAttack => write!(f, "Special Attack"),
            Self::Defend => write!(f, "Defend"),
            Self::UseItem { slot: Some(s) } => write!(f, "Use Item #{s}"),
            Self::UseItem { slot: None } => write!(f, "Use Item"),
            Self::Flee => write!(f, "Flee"),
        }
    }
}

/// The action menu, in choice order.
pub const MENU: [(&str, &str); 5] = [
    ("Attack", "Basic attack with your weapon"),
    ("Special Attack", "Stronger attack with a chance to miss"),
    ("Defend", "Reduce incoming damage this turn"),
    ("Use Item", "Use a potion or other item"),
    ("Flee", "Attempt to escape combat"),
];

fn scale(value: i32, factor: f64) -> i32 {
    // Truncates toward zero.
    (f64::from(value) * factor) as i32
}

fn apply_modifiers(raw: i32, strengthened: bool, weakened: bool) -> i32 {
    let mut damage = if strengthened {
        scale(raw, EFFECT_MULTIPLIER)
    } else {
        raw
    }
    .max(1);
    if weakened {
        damage = scale(damage, EFFECT_MULTIPLIER);
    }
    damage
}

/// Damage of a plain attack. `variance` is a roll in `-2..=2`.
pub fn attack_damage(weapon: i32, variance: i32, strengthened: bool, weakened: bool) -> i32 {
    apply_modifiers(weapon + variance, strengthened, weakened)
}

/// Damage of a landed special attack. `variance` is a roll in `-1..=3`.
pub fn special_damage(weapon: i32, variance: i32, strengthened: bool, weakened: bool) -> i32 {
    apply_modifiers(weapon * 2 + variance, strengthened, weakened)
}

/// Damage of an enemy hit. `variance` is a roll in `-2..=2`.
pub fn enemy_damage(base: i32, variance: i32, armor: i32, defending: bool) -> i32 {
    let damage = (base + variance - armor).max(1);
    if defending {
        (damage / 2).max(1)
    } else {
        damage
    }
}

/// Probability of escaping: 0.4 at full health rising to 0.7 at zero.
pub fn flee_chance(health: i32, max_health: i32) -> f64 {
    let fraction = if max_health > 0 {
        (f64::from(health) / f64::from(max_health)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    0.4 + (1.0 - fraction) * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbers_and_names() {
        assert_eq!(CombatAction::parse("1").unwrap(), CombatAction::Attack);
        assert_eq!(CombatAction::parse(" 2 ").unwrap(), CombatAction::SpecialAttack);
        assert_eq!(CombatAction::parse("defend").unwrap(), CombatAction::Defend);
        assert_eq!(
            CombatAction::parse("4").unwrap(),
            CombatAction::UseItem { slot: None }
        );
        assert_eq!(
            CombatAction::parse("4 2").unwrap(),
            CombatAction::UseItem { slot: Some(2) }
        );
        assert_eq!(CombatAction::parse("FLEE").unwrap(), CombatAction::Flee);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(CombatAction::parse("").is_err());
        assert!(CombatAction::parse("6").is_err());
        assert!(CombatAction::parse("dance").is_err());
        assert!(CombatAction::parse("4 x").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CombatAction::SpecialAttack.to_string(), "Special Attack");
        assert_eq!(
            CombatAction::UseItem { slot: Some(1) }.to_string(),
            "Use Item #1"
        );
    }

    #[test]
    fn attack_damage_range_for_rusty_sword() {
        let hits: Vec<i32> = (-2..=2).map(|v| attack_damage(5, v, false, false)).collect();
        assert_eq!(hits, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn attack_damage_floor_and_modifiers() {
        assert_eq!(attack_damage(1, -2, false, false), 1);
        assert_eq!(attack_damage(5, 0, true, false), 7);
        assert_eq!(attack_damage(5, 0, false, true), 7);
        assert_eq!(attack_damage(5, 1, true, true), 13);
    }

    #[test]
    fn special_damage_doubles_weapon() {
        assert_eq!(special_damage(5, -1, false, false), 9);
        assert_eq!(special_damage(5, 3, false, false), 13);
        assert_eq!(special_damage(5, 3, true, false), 19);
    }

    #[test]
    fn enemy_damage_armor_and_defense() {
        assert_eq!(enemy_damage(8, 0, 0, false), 8);
        assert_eq!(enemy_damage(8, 2, 5, false), 5);
        assert_eq!(enemy_damage(8, -2, 10, false), 1);
        assert_eq!(enemy_damage(8, 1, 0, true), 4);
        assert_eq!(enemy_damage(3, -2, 0, true), 1);
    }

    #[test]
    fn flee_chance_bounds() {
        assert!((flee_chance(100, 100) - 0.4).abs() < 1e-12);
        assert!((flee_chance(0, 100) - 0.7).abs() < 1e-12);
        assert!((flee_chance(50, 100) - 0.55).abs() < 1e-12);
    }
}

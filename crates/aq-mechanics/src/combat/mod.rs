//! The turn-based combat state machine.
//!
//! An [`Encounter`] pits the player against one enemy instance. Each round
//! runs through [`CombatPhase`]s: status damage for both sides, the
//! player's action, then the enemy's attack. The machine suspends whenever
//! it needs a player decision: [`Encounter::begin`] and [`Encounter::act`]
//! return a [`TurnReport`] whose [`CombatStep`] says whether to ask for an
//! action, a potion slot, or whether the fight is over.

pub mod action;

pub use action::{
    CombatAction, MENU, UNARMED_DAMAGE, attack_damage, enemy_damage, flee_chance, special_damage,
};

use aq_core::{EnemyInstance, EnemyTemplate, GameState, ItemId, ItemKind, LocationId, WorldModel};

use crate::dice::RandomSource;
use crate::error::{MechError, MechResult};
use crate::status::{EFFECT_TURNS, EnemyStatus, PlayerStatus, STRENGTH_TURNS};

use action::{
    ATTACK_BLEED_CHANCE, DEFEND_STRENGTH_CHANCE, ENEMY_EFFECT_CHANCE, SPECIAL_EFFECT_CHANCE,
    SPECIAL_HIT_CHANCE,
};

/// Minutes that pass during a successful escape.
pub const FLEE_MINUTES: u32 = 5;

/// Where the encounter currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    /// A round is starting.
    PlayerTurn,
    /// Bleeding and poison are being applied.
    StatusResolution,
    /// Waiting for the player to choose an action.
    ActionSelection,
    /// The enemy is attacking.
    EnemyTurn,
    /// The enemy fell.
    Victory,
    /// The player fell.
    Defeat,
    /// The player escaped.
    Fled,
}

impl CombatPhase {
    /// Whether the encounter has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat | Self::Fled)
    }
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The enemy was defeated.
    Victory,
    /// The player was defeated.
    Defeat,
    /// The player escaped.
    Fled,
}

/// What the encounter needs next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStep {
    /// One of the five combat actions.
    AwaitingAction,
    /// A potion slot (1-based) or 0 to cancel.
    AwaitingItem,
    /// Nothing; the encounter is over.
    Finished(CombatOutcome),
}

/// Narration for one resolved step plus what comes next.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// Lines to show the player, in order.
    pub lines: Vec<String>,
    /// What the encounter needs next.
    pub step: CombatStep,
}

/// A potion the player can drink mid-fight.
#[derive(Debug, Clone, PartialEq)]
pub struct Potion {
    /// Inventory item id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Health restored.
    pub heal: i32,
}

/// List the potions in the inventory, one entry per carried copy.
pub fn potions(state: &GameState, world: &WorldModel) -> Vec<Potion> {
    state
        .player
        .inventory
        .iter()
        .filter_map(|id| world.item(id))
        .filter(|item| item.kind == ItemKind::Potion)
        .map(|item| Potion {
            id: item.id.clone(),
            name: item.name.clone(),
            heal: item.value,
        })
        .collect()
}

/// One fight between the player and a single enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    enemy: EnemyInstance,
    location: LocationId,
    weapon_label: String,
    weapon_damage: i32,
    armor: i32,
    player_status: PlayerStatus,
    enemy_status: EnemyStatus,
    turn: u32,
    phase: CombatPhase,
    awaiting_item: bool,
    strengthened_at_start: bool,
    weakened_at_start: bool,
}

impl Encounter {
    /// Start a fight with `template` at `location`.
    ///
    /// The equipped weapon and armor are read once here. The first round's
    /// status phase runs immediately, so the report already carries the
    /// step the caller should wait on.
    pub fn begin(
        template: &EnemyTemplate,
        location: LocationId,
        state: &mut GameState,
        world: &WorldModel,
        rng: &mut dyn RandomSource,
    ) -> (Self, TurnReport) {
        let player = &state.player;
        let weapon = player.equipped_weapon.as_ref().and_then(|id| world.item(id));
        let armor = player.equipped_armor.as_ref().and_then(|id| world.item(id));

        let mut encounter = Self {
            enemy: template.spawn(),
            location,
            weapon_label: player
                .equipped_weapon
                .as_ref()
                .map_or_else(|| "fists".to_string(), |id| id.spoken()),
            weapon_damage: weapon.map_or(UNARMED_DAMAGE, |w| w.value),
            armor: armor.map_or(0, |a| a.value),
            player_status: PlayerStatus::default(),
            enemy_status: EnemyStatus::default(),
            turn: 1,
            phase: CombatPhase::PlayerTurn,
            awaiting_item: false,
            strengthened_at_start: false,
            weakened_at_start: false,
        };
        tracing::info!(enemy = %encounter.enemy.id, location = %encounter.location, "combat started");

        let mut lines = vec![format!(
            "You engage in combat with {}!",
            encounter.enemy.name
        )];
        let step = encounter.start_round(state, rng, &mut lines);
        (encounter, TurnReport { lines, step })
    }

    /// Resolve one player action and everything that follows it, up to the
    /// next decision point.
    pub fn act(
        &mut self,
        action: CombatAction,
        state: &mut GameState,
        world: &WorldModel,
        rng: &mut dyn RandomSource,
    ) -> MechResult<TurnReport> {
        if self.phase.is_terminal() {
            return Err(MechError::EncounterOver);
        }
        self.awaiting_item = false;
        tracing::debug!(turn = self.turn, %action, "combat action");

        let mut lines = Vec::new();
        let mut defending = false;
        let mut enemy_acts = true;
        let name = self.enemy.name.clone();
        let strengthened = self.player_status.is_strengthened();
        let weakened = self.enemy_status.is_weakened();

        match action {
            CombatAction::Attack => {
                lines.push(format!("You attack {name} with your {}!", self.weapon_label));
                let damage =
                    attack_damage(self.weapon_damage, rng.roll(-2, 2), strengthened, weakened);
                self.enemy.health -= damage;
                lines.push(format!("You deal {damage} damage to {name}."));
                if rng.chance(ATTACK_BLEED_CHANCE) {
                    self.enemy_status.bleeding = EFFECT_TURNS;
                    lines.push(format!("Your attack causes {name} to bleed!"));
                }
            }
            CombatAction::SpecialAttack => {
                lines.push("You prepare a special attack!".to_string());
                if rng.chance(SPECIAL_HIT_CHANCE) {
                    let damage = special_damage(
                        self.weapon_damage,
                        rng.roll(-1, 3),
                        strengthened,
                        weakened,
                    );
                    self.enemy.health -= damage;
                    lines.push(format!("Your special attack hits for {damage} damage!"));
                    if rng.chance(SPECIAL_EFFECT_CHANCE) {
                        let effect = if rng.coin_flip() {
                            self.enemy_status.weakened = EFFECT_TURNS;
                            "weakened"
                        } else {
                            self.enemy_status.bleeding = EFFECT_TURNS;
                            "bleeding"
                        };
                        lines.push(format!("Your special attack causes {name} to be {effect}!"));
                    }
                } else {
                    lines.push("Your special attack misses!".to_string());
                }
            }
            CombatAction::Defend => {
                lines.push("You take a defensive stance.".to_string());
                defending = true;
                if rng.chance(DEFEND_STRENGTH_CHANCE) {
                    self.player_status.strengthened = STRENGTH_TURNS;
                    lines.push("You find an opening in the enemy's attack pattern!".to_string());
                }
            }
            CombatAction::UseItem { slot } => {
                let available = potions(state, world);
                if available.is_empty() {
                    lines.push("You don't have any usable items!".to_string());
                    return Ok(self.awaiting(lines, CombatStep::AwaitingAction));
                }
                let Some(slot) = slot else {
                    lines.push("Your inventory:".to_string());
                    lines.extend(
                        available
                            .iter()
                            .enumerate()
                            .map(|(i, p)| format!("{}. {}", i + 1, p.name)),
                    );
                    lines.push("Choose an item to use (or 0 to cancel).".to_string());
                    return Ok(self.awaiting(lines, CombatStep::AwaitingItem));
                };
                let Some(potion) = slot.checked_sub(1).and_then(|i| available.get(i)) else {
                    lines.push("Invalid choice.".to_string());
                    return Ok(self.awaiting(lines, CombatStep::AwaitingAction));
                };
                state.player.remove_item(&potion.id);
                state.player.heal(potion.heal);
                lines.push(format!(
                    "You used {} and recovered {} health points.",
                    potion.name, potion.heal
                ));
                enemy_acts = false;
            }
            CombatAction::Flee => {
                lines.push("You attempt to flee from combat!".to_string());
                let p = flee_chance(state.player.health, state.player.max_health);
                if rng.chance(p) {
                    lines.push("You successfully escape!".to_string());
                    state.advance_time(FLEE_MINUTES);
                    return Ok(self.finish(CombatOutcome::Fled, lines));
                }
                lines.push("You failed to escape!".to_string());
            }
        }

        if self.enemy.is_defeated() {
            return Ok(self.finish(CombatOutcome::Victory, lines));
        }

        if enemy_acts {
            self.phase = CombatPhase::EnemyTurn;
            self.enemy_attack(defending, state, rng, &mut lines);
            if state.player.is_defeated() {
                lines.push("You have been defeated!".to_string());
                return Ok(self.finish(CombatOutcome::Defeat, lines));
            }
        }

        self.end_round();
        let step = self.start_round(state, rng, &mut lines);
        Ok(TurnReport { lines, step })
    }

    /// Parse `input` as a combat action and resolve it. Unknown input
    /// re-prompts without using up the round.
    ///
    /// Right after the potion list was shown, `input` is read as a slot
    /// number instead; anything that is not a number counts as slot 0.
    pub fn act_on_input(
        &mut self,
        input: &str,
        state: &mut GameState,
        world: &WorldModel,
        rng: &mut dyn RandomSource,
    ) -> MechResult<TurnReport> {
        if self.phase.is_terminal() {
            return Err(MechError::EncounterOver);
        }
        if self.awaiting_item {
            let slot = input.trim().parse::<usize>().unwrap_or(0);
            return self.act(CombatAction::UseItem { slot: Some(slot) }, state, world, rng);
        }
        match CombatAction::parse(input) {
            Ok(action) => self.act(action, state, world, rng),
            Err(_) => Ok(self.awaiting(
                vec!["Invalid choice. Choose an action from 1 to 5.".to_string()],
                CombatStep::AwaitingAction,
            )),
        }
    }

    fn enemy_attack(
        &mut self,
        defending: bool,
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        lines: &mut Vec<String>,
    ) {
        let name = &self.enemy.name;
        lines.push(format!("{name} attacks you!"));
        let damage = enemy_damage(self.enemy.base_damage, rng.roll(-2, 2), self.armor, defending);
        if defending {
            lines.push("Your defensive stance reduces the damage!".to_string());
        }
        state.player.take_damage(damage);
        lines.push(format!("{name} deals {damage} damage to you."));
        if rng.chance(ENEMY_EFFECT_CHANCE) {
            let effect = if rng.coin_flip() {
                self.player_status.poisoned = EFFECT_TURNS;
                "poisoned"
            } else {
                self.player_status.bleeding = EFFECT_TURNS;
                "bleeding"
            };
            lines.push(format!("The attack causes you to be {effect}!"));
        }
    }

    /// Begin a round: snapshot the damage modifiers, apply status damage,
    /// and check whether either side fell to it.
    fn start_round(
        &mut self,
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        lines: &mut Vec<String>,
    ) -> CombatStep {
        self.phase = CombatPhase::PlayerTurn;
        self.strengthened_at_start = self.player_status.is_strengthened();
        self.weakened_at_start = self.enemy_status.is_weakened();

        self.phase = CombatPhase::StatusResolution;
        let ours = self.player_status.tick(rng);
        if let Some(n) = ours.bleeding {
            state.player.take_damage(n);
            lines.push(format!("You take {n} bleeding damage."));
        }
        if let Some(n) = ours.poison {
            state.player.take_damage(n);
            lines.push(format!("You take {n} poison damage."));
        }
        let theirs = self.enemy_status.tick(rng);
        if let Some(n) = theirs.bleeding {
            self.enemy.health -= n;
            lines.push(format!("{} takes {n} bleeding damage.", self.enemy.name));
        }
        if let Some(n) = theirs.poison {
            self.enemy.health -= n;
            lines.push(format!("{} takes {n} poison damage.", self.enemy.name));
        }

        if state.player.is_defeated() {
            lines.push("You have been defeated by your wounds!".to_string());
            self.phase = CombatPhase::Defeat;
            tracing::info!(enemy = %self.enemy.id, turn = self.turn, "combat lost to status damage");
            return CombatStep::Finished(CombatOutcome::Defeat);
        }
        if self.enemy.is_defeated() {
            lines.push(format!("{} collapses from its wounds!", self.enemy.name));
            self.phase = CombatPhase::Victory;
            tracing::info!(enemy = %self.enemy.id, turn = self.turn, "combat won by status damage");
            return CombatStep::Finished(CombatOutcome::Victory);
        }

        self.phase = CombatPhase::ActionSelection;
        CombatStep::AwaitingAction
    }

    fn end_round(&mut self) {
        if self.strengthened_at_start {
            self.player_status.strengthened = self.player_status.strengthened.saturating_sub(1);
        }
        if self.weakened_at_start {
            self.enemy_status.weakened = self.enemy_status.weakened.saturating_sub(1);
        }
        self.turn += 1;
    }

    fn awaiting(&mut self, lines: Vec<String>, step: CombatStep) -> TurnReport {
        self.phase = CombatPhase::ActionSelection;
        self.awaiting_item = step == CombatStep::AwaitingItem;
        TurnReport { lines, step }
    }

    fn finish(&mut self, outcome: CombatOutcome, lines: Vec<String>) -> TurnReport {
        self.phase = match outcome {
            CombatOutcome::Victory => CombatPhase::Victory,
            CombatOutcome::Defeat => CombatPhase::Defeat,
            CombatOutcome::Fled => CombatPhase::Fled,
        };
        tracing::info!(enemy = %self.enemy.id, turn = self.turn, ?outcome, "combat finished");
        TurnReport {
            lines,
            step: CombatStep::Finished(outcome),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Whether the next input is read as a potion slot.
    pub fn awaiting_item(&self) -> bool {
        self.awaiting_item
    }

    /// The enemy being fought.
    pub fn enemy(&self) -> &EnemyInstance {
        &self.enemy
    }

    /// Where the fight takes place.
    pub fn location(&self) -> &LocationId {
        &self.location
    }

    /// Current round, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current phase.
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// How the encounter ended, if it has.
    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Victory => Some(CombatOutcome::Victory),
            CombatPhase::Defeat => Some(CombatOutcome::Defeat),
            CombatPhase::Fled => Some(CombatOutcome::Fled),
            _ => None,
        }
    }

    /// The player's effect timers.
    pub fn player_status(&self) -> &PlayerStatus {
        &self.player_status
    }

    /// The enemy's effect timers.
    pub fn enemy_status(&self) -> &EnemyStatus {
        &self.enemy_status
    }

    /// Damage the player's weapon deals before variance.
    pub fn weapon_damage(&self) -> i32 {
        self.weapon_damage
    }

    /// Damage reduction from the player's armor.
    pub fn armor(&self) -> i32 {
        self.armor
    }

    /// Header lines for the current round: turn, both health values and
    /// any active effects.
    pub fn banner(&self, state: &GameState) -> Vec<String> {
        let mut lines = vec![
            format!("=== COMBAT: TURN {} ===", self.turn),
            format!(
                "You: Health {}/{}",
                state.player.health, state.player.max_health
            ),
            format!("{}: Health {}", self.enemy.name, self.enemy.health.max(0)),
        ];
        let ours = self.player_status.summary();
        if !ours.is_empty() {
            lines.push(format!("Your status: {ours}"));
        }
        let theirs = self.enemy_status.summary();
        if !theirs.is_empty() {
            lines.push(format!("Enemy status: {theirs}"));
        }
        lines
    }
}

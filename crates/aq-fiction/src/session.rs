//! Adventure session management.
//!
//! `AdventureSession` owns one playthrough: the world, the game state, the
//! random source and at most one active encounter. While an encounter is
//! active every input line is read as a combat action, so nothing else can
//! change the state mid-fight.

use aq_core::{EnemyId, GameState, WorldModel};
use aq_mechanics::{CombatOutcome, CombatStep, Encounter, RandomSource, SeededRandom, TurnReport};

use crate::config::SessionConfig;
use crate::defeat::resolve_victory;
use crate::error::{FictionError, FictionResult};
use crate::interpreter::{Signal, arrive, describe_location, interpret};
use crate::narration::Narration;

/// Minutes that pass per command outside combat.
pub const MINUTES_PER_COMMAND: u32 = 1;
/// Every this many minutes the player recovers one health point.
pub const REGEN_INTERVAL: u32 = 10;

/// A fight in progress, with the enemy id as the location lists it.
struct Fight {
    enemy: EnemyId,
    encounter: Encounter,
}

/// An interactive adventure session.
pub struct AdventureSession {
    /// Pristine copy for restarts.
    initial_world: WorldModel,
    world: WorldModel,
    state: GameState,
    rng: Box<dyn RandomSource>,
    fight: Option<Fight>,
    config: SessionConfig,
    quit: bool,
}

impl AdventureSession {
    /// Create a session with a seeded random source.
    pub fn new(world: WorldModel, config: SessionConfig) -> FictionResult<Self> {
        let rng = Box::new(SeededRandom::seed_from_u64(config.seed));
        Self::with_random(world, config, rng)
    }

    /// Create a session with a specific random source.
    ///
    /// Fails if the world's starting location doesn't exist.
    pub fn with_random(
        world: WorldModel,
        config: SessionConfig,
        rng: Box<dyn RandomSource>,
    ) -> FictionResult<Self> {
        if world.location(&world.start.location).is_none() {
            return Err(FictionError::LocationNotFound(world.start.location.clone()));
        }
        let state = GameState::new_game(&world, config.player_name.clone());
        Ok(Self {
            initial_world: world.clone(),
            world,
            state,
            rng,
            fight: None,
            config,
            quit: false,
        })
    }

    /// Get the current world.
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// Get the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a mutable reference to the game state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Get a mutable reference to the world.
    pub fn world_mut(&mut self) -> &mut WorldModel {
        &mut self.world
    }

    /// The fight in progress, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.fight.as_ref().map(|f| &f.encounter)
    }

    /// Whether the next input is read as a potion slot.
    pub fn awaiting_item(&self) -> bool {
        self.encounter().is_some_and(Encounter::awaiting_item)
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether input is currently read as combat actions.
    pub fn in_combat(&self) -> bool {
        self.fight.is_some()
    }

    /// Whether the player ran out of health.
    pub fn is_game_over(&self) -> bool {
        self.state.player.is_defeated()
    }

    /// Whether the player stands in the victory location with the final
    /// enemy gone from it.
    pub fn is_victory(&self) -> bool {
        let Some(victory) = &self.world.victory else {
            return false;
        };
        self.state.current_location == victory.location
            && self
                .world
                .location(&victory.location)
                .is_some_and(|l| !l.enemies.contains(&victory.enemy))
    }

    /// Whether the player asked to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Whether the session accepts no more commands.
    pub fn is_finished(&self) -> bool {
        self.quit || self.is_game_over() || self.is_victory()
    }

    /// Opening narration: a welcome and arrival at the starting location.
    pub fn intro(&mut self) -> Narration {
        let mut out = Narration::line(format!("Welcome, {}!", self.state.player.name));
        match self.world.location(&self.state.current_location) {
            Some(start) => {
                out.push(format!("Your adventure begins at {}.", start.name));
                out.blank();
                out.append(arrive(start, &mut self.state, &self.world));
            }
            None => out.push(self.failure(FictionError::LocationNotFound(
                self.state.current_location.clone(),
            ))),
        }
        out
    }

    /// The full view of the current location.
    pub fn look(&self) -> Narration {
        match self.world.location(&self.state.current_location) {
            Some(here) => describe_location(here, &self.state, &self.world),
            None => Narration::line(self.failure(FictionError::LocationNotFound(
                self.state.current_location.clone(),
            ))),
        }
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> Narration {
        if self.is_finished() {
            return Narration::line("The adventure is over.");
        }
        if let Some(fight) = self.fight.take() {
            return self.combat_turn(fight, input);
        }
        if input.trim().is_empty() {
            return Narration::new();
        }

        let mut out = match interpret(input, &mut self.state, &mut self.world) {
            Ok(outcome) => {
                let mut out = outcome.narration;
                match outcome.signal {
                    Some(Signal::Quit) => self.quit = true,
                    Some(Signal::Combat(engagement)) => {
                        let (encounter, report) =
                            engagement.begin(&mut self.state, &self.world, self.rng.as_mut());
                        let fight = Fight {
                            enemy: engagement.enemy,
                            encounter,
                        };
                        out.append(self.absorb(fight, report));
                    }
                    None => {}
                }
                out
            }
            Err(e) => Narration::line(self.failure(e)),
        };

        if !self.quit {
            self.tick();
        }
        if self.is_game_over() {
            out.push("You have been defeated! Game Over!");
        }
        out
    }

    /// Start over with a fresh copy of the world. The random source keeps
    /// its position.
    pub fn restart(&mut self) {
        self.world = self.initial_world.clone();
        self.state = GameState::new_game(&self.world, self.config.player_name.clone());
        self.fight = None;
        self.quit = false;
    }

    fn combat_turn(&mut self, mut fight: Fight, input: &str) -> Narration {
        let step =
            fight.encounter.act_on_input(input, &mut self.state, &self.world, self.rng.as_mut());
        match step {
            Ok(report) => {
                let mut out = self.absorb(fight, report);
                if self.is_game_over() {
                    out.push("You have been defeated! Game Over!");
                }
                out
            }
            Err(e) => Narration::line(self.failure(e.into())),
        }
    }

    /// Keep the encounter if it still needs input, or settle how it ended.
    fn absorb(&mut self, fight: Fight, report: TurnReport) -> Narration {
        let mut out = Narration::from(report.lines);
        match report.step {
            CombatStep::AwaitingAction | CombatStep::AwaitingItem => {
                self.fight = Some(fight);
            }
            CombatStep::Finished(CombatOutcome::Victory) => {
                let location = fight.encounter.location();
                match resolve_victory(&fight.enemy, location, &mut self.state, &mut self.world) {
                    Ok(spoils) => out.append(spoils),
                    Err(e) => out.push(self.failure(e)),
                }
            }
            CombatStep::Finished(CombatOutcome::Defeat | CombatOutcome::Fled) => {}
        }
        out
    }

    fn tick(&mut self) {
        self.state.advance_time(MINUTES_PER_COMMAND);
        if self.state.game_time % REGEN_INTERVAL == 0 {
            self.state.player.heal(1);
        }
    }

    fn failure(&self, error: FictionError) -> String {
        tracing::error!(error = %error, location = %self.state.current_location, "command failed");
        format!("Something went wrong: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::{EnemyId, ItemId, LocationId, preset};
    use aq_mechanics::ScriptedRandom;

    fn session(rng: ScriptedRandom) -> AdventureSession {
        AdventureSession::with_random(preset::oakvale(), SessionConfig::default(), Box::new(rng))
            .unwrap()
    }

    fn place(session: &mut AdventureSession, location: &str) {
        session.state_mut().current_location = LocationId::new(location);
    }

    #[test]
    fn missing_start_location_rejected() {
        let mut world = preset::oakvale();
        world.start.location = LocationId::new("nowhere");
        assert!(matches!(
            AdventureSession::new(world, SessionConfig::default()),
            Err(FictionError::LocationNotFound(_))
        ));
    }

    #[test]
    fn intro_marks_start_visited() {
        let mut s = session(ScriptedRandom::new());
        let out = s.intro();
        assert_eq!(out.lines()[0], "Welcome, Adventurer!");
        assert!(out.contains("You have arrived at Village of Oakvale."));
        assert!(s.state().visited_locations.contains(&LocationId::new("village")));
        assert_eq!(s.state().game_time, 0);
    }

    #[test]
    fn commands_advance_clock_and_regenerate() {
        let mut s = session(ScriptedRandom::new());
        s.state_mut().player.health = 50;
        for _ in 0..9 {
            s.process("look");
        }
        assert_eq!(s.state().game_time, 9);
        assert_eq!(s.state().player.health, 50);
        s.process("look");
        assert_eq!(s.state().game_time, 10);
        assert_eq!(s.state().player.health, 51);
    }

    #[test]
    fn blank_input_is_free() {
        let mut s = session(ScriptedRandom::new());
        assert!(s.process("  ").is_empty());
        assert_eq!(s.state().game_time, 0);
    }

    #[test]
    fn quit_finishes_session() {
        let mut s = session(ScriptedRandom::new());
        s.process("quit");
        assert!(s.has_quit());
        assert!(s.is_finished());
        assert_eq!(s.process("look").lines(), ["The adventure is over."]);
    }

    #[test]
    fn fight_the_wolf_to_victory() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "dark_forest");

        let out = s.process("attack wolf");
        assert_eq!(out.lines()[0], "You engage in combat with Wolf!");
        assert!(s.in_combat());

        // Exploration commands are not accepted mid-fight.
        let out = s.process("go forest");
        assert!(out.lines()[0].starts_with("Invalid choice"));
        assert_eq!(s.state().current_location, LocationId::new("dark_forest"));

        for _ in 0..3 {
            s.process("1");
            assert!(s.in_combat());
        }
        let out = s.process("attack");
        assert!(!s.in_combat());
        assert!(out.contains("You defeated Wolf!"));
        assert!(out.contains("Quest objective completed: Clear Forest"));

        let state = s.state();
        assert_eq!(state.enemies_defeated, 1);
        assert!(state.flag("forest_cleared"));
        assert_eq!(state.game_time, 1 + 5);
        assert_eq!(state.player.health, 100 - 24);
        let forest = s.world().location(&LocationId::new("dark_forest")).unwrap();
        assert!(!forest.enemies.contains(&EnemyId::new("wolf")));
    }

    #[test]
    fn fleeing_leaves_enemy_in_place() {
        let mut s = session(ScriptedRandom::new().with_chances([true]));
        place(&mut s, "dark_forest");
        s.process("fight wolf");
        let out = s.process("5");
        assert!(out.contains("You successfully escape!"));
        assert!(!s.in_combat());
        assert_eq!(s.state().enemies_defeated, 0);
        let forest = s.world().location(&LocationId::new("dark_forest")).unwrap();
        assert_eq!(forest.enemies, vec![EnemyId::new("wolf")]);
    }

    #[test]
    fn potion_menu_mid_fight() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "dark_forest");
        s.state_mut().player.health = 40;
        s.process("attack wolf");
        let out = s.process("4");
        assert!(out.contains("1. Health Potion"));
        assert!(s.awaiting_item());
        let out = s.process("1");
        assert!(out.contains("You used Health Potion and recovered 25 health points."));
        assert_eq!(s.state().player.health, 65);
        assert!(s.in_combat());
        assert!(!s.awaiting_item());
    }

    #[test]
    fn potion_slot_in_one_command() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "dark_forest");
        s.state_mut().player.health = 40;
        s.process("attack wolf");
        let out = s.process("4 1");
        assert!(out.contains("You used Health Potion and recovered 25 health points."));
        assert!(!s.awaiting_item());
    }

    #[test]
    fn victory_settles_enemy_by_its_listed_id() {
        let mut world = preset::oakvale();
        let wolf = world.enemies.get_mut(&EnemyId::new("wolf")).unwrap();
        wolf.id = EnemyId::new("grey_wolf");
        let mut s = AdventureSession::with_random(
            world,
            SessionConfig::default(),
            Box::new(ScriptedRandom::new()),
        )
        .unwrap();
        place(&mut s, "dark_forest");

        s.process("attack wolf");
        for _ in 0..3 {
            s.process("1");
        }
        let out = s.process("1");
        assert!(!s.in_combat());
        assert!(out.contains("You defeated Wolf!"));
        assert!(!out.lines().iter().any(|l| l.starts_with("Something went wrong")));
        assert_eq!(s.state().enemies_defeated, 1);
        let forest = s.world().location(&LocationId::new("dark_forest")).unwrap();
        assert!(forest.enemies.is_empty());
    }

    #[test]
    fn defeat_ends_game() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "dark_forest");
        s.state_mut().player.health = 8;
        s.process("attack wolf");
        let out = s.process("1");
        assert!(out.contains("You have been defeated!"));
        assert!(out.contains("You have been defeated! Game Over!"));
        assert!(s.is_game_over());
        assert!(s.is_finished());
        assert!(!s.in_combat());
    }

    #[test]
    fn victory_once_final_enemy_is_gone() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "throne_room");
        assert!(!s.is_victory());
        s.world_mut()
            .location_mut(&LocationId::new("throne_room"))
            .unwrap()
            .remove_enemy(&EnemyId::new("dark_knight"));
        assert!(s.is_victory());
        assert!(s.is_finished());
    }

    #[test]
    fn restart_restores_world() {
        let mut s = session(ScriptedRandom::new());
        s.process("take map");
        assert!(s.state().player.has_item(&ItemId::new("village_map")));
        s.process("quit");
        s.restart();
        assert!(!s.has_quit());
        assert!(!s.state().player.has_item(&ItemId::new("village_map")));
        let village = s.world().location(&LocationId::new("village")).unwrap();
        assert_eq!(village.items, vec![ItemId::new("village_map")]);
    }

    #[test]
    fn broken_world_narrates_error() {
        let mut s = session(ScriptedRandom::new());
        place(&mut s, "atlantis");
        let out = s.process("look");
        assert!(out.lines()[0].starts_with("Something went wrong"));
    }
}

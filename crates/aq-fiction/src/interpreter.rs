//! The command interpreter.
//!
//! [`interpret`] takes one raw input line, dispatches on its verb, mutates
//! the game state and world, and narrates the result. Attacks don't fight
//! here: they hand an [`EnemyEngagement`] back to the caller, which owns
//! the random source and drives the [`Encounter`].

use aq_core::{
    EnemyId, EnemyTemplate, GameState, ItemKind, Location, LocationId, WorldModel,
};
use aq_mechanics::{Encounter, RandomSource, TurnReport};

use crate::defeat::advance_objective;
use crate::error::{FictionError, FictionResult};
use crate::narration::Narration;
use crate::parser::{Verb, parse_command, resolve_enemy, resolve_exit, resolve_item, resolve_npc};

/// Minutes it takes to travel between two locations.
pub const TRAVEL_MINUTES: u32 = 10;

/// The command reference shown by `help`.
pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "- go/move/travel [location]: Move to a connected location",
    "- look/examine [object/person]: Look at something or someone",
    "- take/get/pickup [item]: Pick up an item",
    "- inventory/i/items: Check your inventory",
    "- equip/wear/wield [item]: Equip a weapon or armor",
    "- use/drink/consume [item]: Use an item like a potion",
    "- talk/speak [person]: Talk to an NPC",
    "- attack/fight [enemy]: Attack an enemy",
    "- help/commands: Show this help message",
    "- quit/exit: Exit the game",
];

/// An enemy the player chose to fight.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyEngagement {
    /// Which enemy, as listed at the location.
    pub enemy: EnemyId,
    /// Its template.
    pub template: EnemyTemplate,
    /// Where the fight happens.
    pub location: LocationId,
}

impl EnemyEngagement {
    /// Start the encounter.
    pub fn begin(
        &self,
        state: &mut GameState,
        world: &WorldModel,
        rng: &mut dyn RandomSource,
    ) -> (Encounter, TurnReport) {
        Encounter::begin(&self.template, self.location.clone(), state, world, rng)
    }
}

/// Something the caller must act on after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The player asked to leave.
    Quit,
    /// The player attacked an enemy.
    Combat(EnemyEngagement),
}

/// The result of interpreting one command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// What to show the player.
    pub narration: Narration,
    /// Follow-up the caller must handle.
    pub signal: Option<Signal>,
}

impl From<Narration> for Outcome {
    fn from(narration: Narration) -> Self {
        Self {
            narration,
            signal: None,
        }
    }
}

/// Interpret one line of player input.
///
/// Player mistakes come back as narration. An `Err` means the world itself
/// is inconsistent, such as the current location being missing from it.
pub fn interpret(
    input: &str,
    state: &mut GameState,
    world: &mut WorldModel,
) -> FictionResult<Outcome> {
    let Some(command) = parse_command(input) else {
        return Ok(Outcome::default());
    };
    tracing::debug!(verb = ?command.verb, target = %command.target, "command");

    let target = command.target.as_str();
    let narration = match command.verb {
        Verb::Move => do_move(target, state, world)?,
        Verb::Look => do_look(target, state, world)?,
        Verb::Take => do_take(target, state, world)?,
        Verb::Inventory => do_inventory(state, world),
        Verb::Equip => do_equip(target, state, world),
        Verb::Use => do_use(target, state, world),
        Verb::Talk => do_talk(target, state, world)?,
        Verb::Attack => return do_attack(target, state, world),
        Verb::Help => HELP_LINES.iter().map(|l| (*l).to_string()).collect::<Vec<_>>().into(),
        Verb::Quit => {
            return Ok(Outcome {
                narration: Narration::new(),
                signal: Some(Signal::Quit),
            });
        }
        Verb::Unknown => Narration::line(
            "I don't understand that command. Type 'help' for a list of commands.",
        ),
    };
    Ok(narration.into())
}

fn current_location<'a>(state: &GameState, world: &'a WorldModel) -> FictionResult<&'a Location> {
    world
        .location(&state.current_location)
        .ok_or_else(|| FictionError::LocationNotFound(state.current_location.clone()))
}

fn do_move(target: &str, state: &mut GameState, world: &WorldModel) -> FictionResult<Narration> {
    let here = current_location(state, world)?;
    let Some(dest_id) = resolve_exit(world, &here.connections, target) else {
        return Ok(Narration::line("You can't go there from here."));
    };
    let dest = world
        .location(dest_id)
        .ok_or_else(|| FictionError::DanglingConnection {
            from: here.id.clone(),
            to: dest_id.clone(),
        })?;

    let missing_key = dest
        .requires_item
        .as_ref()
        .filter(|key| !state.player.has_item(key));
    if let Some(key) = missing_key {
        return Ok(Narration::line(format!(
            "You need a {} to enter {}.",
            key.spoken(),
            dest.name
        )));
    }

    state.current_location = dest.id.clone();
    state.advance_time(TRAVEL_MINUTES);
    Ok(arrive(dest, state, world))
}

/// Narrate arriving at `location` and fire its arrival hook.
pub fn arrive(location: &Location, state: &mut GameState, world: &WorldModel) -> Narration {
    let mut out = if state.visit(&location.id) {
        Narration::line(format!("You have arrived at {}.", location.name))
    } else {
        Narration::line(format!("You are at {}.", location.name))
    };
    out.push(location.description.clone());
    if let Some(hook) = location.arrival_objective(&state.player.inventory) {
        out.append(advance_objective(hook, state, world));
    }
    out
}

/// The full view of a location: description, exits, people, enemies and
/// items.
pub fn describe_location(
    location: &Location,
    state: &GameState,
    world: &WorldModel,
) -> Narration {
    let mut out = Narration::line(location.name.clone());
    out.push(location.description.clone());

    out.blank();
    out.push("You can go to:");
    for id in &location.connections {
        let Some(dest) = world.location(id) else {
            continue;
        };
        let locked = dest
            .requires_item
            .as_ref()
            .is_some_and(|key| !state.player.has_item(key));
        if locked {
            out.push(format!("- {} (locked)", dest.name));
        } else {
            out.push(format!("- {}", dest.name));
        }
    }

    if !location.npcs.is_empty() {
        out.blank();
        out.push("People here:");
        for id in &location.npcs {
            if let Some(npc) = world.npc(id) {
                out.push(format!("- {} ({id})", npc.name));
            }
        }
    }

    if !location.enemies.is_empty() {
        out.blank();
        out.push("Enemies here:");
        for id in &location.enemies {
            if let Some(enemy) = world.enemy(id) {
                out.push(format!("- {}", enemy.name));
            }
        }
    }

    if !location.items.is_empty() {
        out.blank();
        out.push("Items here:");
        for id in &location.items {
            out.push(format!("- {}", world.item_name(id)));
        }
    }
    out
}

fn do_look(target: &str, state: &GameState, world: &WorldModel) -> FictionResult<Narration> {
    let here = current_location(state, world)?;
    if target.is_empty() {
        return Ok(describe_location(here, state, world));
    }

    if let Some(id) = resolve_item(world, &here.items, target) {
        let line = match world.item(id) {
            Some(item) => format!("{}: {}", item.name, item.description),
            None => format!("{}: Nothing special.", id.spoken()),
        };
        return Ok(Narration::line(line));
    }
    if let Some(npc) = resolve_npc(world, &here.npcs, target).and_then(|id| world.npc(id)) {
        return Ok(Narration::line(format!("{}: {}", npc.name, npc.description)));
    }
    if let Some(enemy) = resolve_enemy(world, &here.enemies, target).and_then(|id| world.enemy(id))
    {
        return Ok(Narration::line(format!(
            "{}: {}",
            enemy.name, enemy.description
        )));
    }
    Ok(Narration::line("You don't see that here."))
}

fn do_take(target: &str, state: &mut GameState, world: &mut WorldModel) -> FictionResult<Narration> {
    let here = current_location(state, world)?;
    let Some(item_id) = resolve_item(world, &here.items, target).cloned() else {
        return Ok(Narration::line("You don't see that here."));
    };
    let here_id = here.id.clone();
    world.require_location_mut(&here_id)?.remove_item(&item_id);
    state.player.add_item(item_id.clone());

    let item = world.item(&item_id);
    let mut out = Narration::line(format!(
        "You picked up {}.",
        item.map_or_else(|| item_id.spoken(), |i| i.name.clone())
    ));
    if let Some(hook) = item.and_then(|i| i.objective.as_ref()) {
        out.append(advance_objective(hook, state, world));
    }
    Ok(out)
}

fn do_inventory(state: &GameState, world: &WorldModel) -> Narration {
    let player = &state.player;
    if player.inventory.is_empty() {
        return Narration::line("Your inventory is empty.");
    }
    let mut out = Narration::line("You are carrying:");
    for id in &player.inventory {
        let marker = if player.equipped_weapon.as_ref() == Some(id) {
            " (equipped weapon)"
        } else if player.equipped_armor.as_ref() == Some(id) {
            " (equipped armor)"
        } else {
            ""
        };
        out.push(format!("- {}{marker}", world.item_name(id)));
    }
    out
}

fn do_equip(target: &str, state: &mut GameState, world: &WorldModel) -> Narration {
    let Some(id) = resolve_item(world, &state.player.inventory, target).cloned() else {
        return Narration::line("You don't have that item.");
    };
    let Some(item) = world.item(&id) else {
        return Narration::line(format!("You can't equip {}.", id.spoken()));
    };
    match item.kind {
        ItemKind::Weapon => {
            state.player.equipped_weapon = Some(id);
            Narration::line(format!("You equipped {} as your weapon.", item.name))
        }
        ItemKind::Armor => {
            state.player.equipped_armor = Some(id);
            Narration::line(format!("You equipped {} as your armor.", item.name))
        }
        ItemKind::Potion | ItemKind::KeyItem => {
            Narration::line(format!("You can't equip {}.", item.name))
        }
    }
}

fn do_use(target: &str, state: &mut GameState, world: &WorldModel) -> Narration {
    let Some(id) = resolve_item(world, &state.player.inventory, target).cloned() else {
        return Narration::line("You don't have that item.");
    };
    match world.item(&id) {
        Some(item) if item.kind == ItemKind::Potion => {
            state.player.remove_item(&id);
            state.player.heal(item.value);
            Narration::line(format!(
                "You used {} and recovered {} health points.",
                item.name, item.value
            ))
        }
        Some(item) => Narration::line(format!("You can't use {} that way.", item.name)),
        None => Narration::line(format!("You can't use {} that way.", id.spoken())),
    }
}

fn do_talk(target: &str, state: &GameState, world: &WorldModel) -> FictionResult<Narration> {
    let here = current_location(state, world)?;
    let Some(npc) = resolve_npc(world, &here.npcs, target).and_then(|id| world.npc(id)) else {
        return Ok(Narration::line("There's no one by that name here."));
    };

    let mut out = Narration::line(format!("{}: \"{}\"", npc.name, npc.dialogue.greeting));

    if let Some(quest) = npc.quest.as_ref().and_then(|id| state.quests.get(id)) {
        out.blank();
        out.push(format!("{} has a quest for you: {}", npc.name, quest.name));
        out.push(quest.description.clone());
        let (done, _) = quest.progress();
        let line = if quest.completed {
            npc.dialogue.quest_complete.as_ref()
        } else if done > 0 {
            npc.dialogue.quest_active.as_ref()
        } else {
            npc.dialogue.quest.as_ref()
        };
        if let Some(line) = line {
            out.push(format!("{}: \"{line}\"", npc.name));
        }
    }

    if !npc.trades.is_empty() {
        out.blank();
        out.push(format!("{} can trade with you:", npc.name));
        for trade in &npc.trades {
            out.push(format!(
                "- {} (costs {} gold)",
                world.item_name(&trade.give),
                trade.cost
            ));
        }
    }
    Ok(out)
}

fn do_attack(target: &str, state: &GameState, world: &WorldModel) -> FictionResult<Outcome> {
    let here = current_location(state, world)?;
    let Some(enemy) = resolve_enemy(world, &here.enemies, target) else {
        return Ok(Narration::line("There's no enemy by that name here.").into());
    };
    let template = world
        .enemy(enemy)
        .cloned()
        .ok_or_else(|| FictionError::EnemyNotFound(enemy.clone()))?;
    Ok(Outcome {
        narration: Narration::new(),
        signal: Some(Signal::Combat(EnemyEngagement {
            enemy: enemy.clone(),
            template,
            location: here.id.clone(),
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::{ItemId, preset};
    use proptest::prelude::*;

    fn new_game() -> (GameState, WorldModel) {
        let world = preset::oakvale();
        let state = GameState::new_game(&world, "Ada");
        (state, world)
    }

    fn run(input: &str, state: &mut GameState, world: &mut WorldModel) -> Narration {
        interpret(input, state, world).unwrap().narration
    }

    fn place(state: &mut GameState, location: &str) {
        state.current_location = LocationId::new(location);
    }

    #[test]
    fn empty_input_does_nothing() {
        let (mut state, mut world) = new_game();
        let before = state.clone();
        let outcome = interpret("   ", &mut state, &mut world).unwrap();
        assert!(outcome.narration.is_empty());
        assert!(outcome.signal.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_command() {
        let (mut state, mut world) = new_game();
        let out = run("dance", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["I don't understand that command. Type 'help' for a list of commands."]
        );
    }

    #[test]
    fn move_and_revisit() {
        let (mut state, mut world) = new_game();
        let out = run("go forest", &mut state, &mut world);
        assert_eq!(out.lines()[0], "You have arrived at Forest Path.");
        assert_eq!(out.lines()[1], "A narrow trail winding between ancient oaks.");
        assert_eq!(state.current_location, LocationId::new("forest_path"));
        assert_eq!(state.game_time, TRAVEL_MINUTES);

        run("travel village", &mut state, &mut world);
        let out = run("MOVE Forest Path", &mut state, &mut world);
        assert_eq!(out.lines()[0], "You are at Forest Path.");
        assert_eq!(state.game_time, 3 * TRAVEL_MINUTES);
    }

    #[test]
    fn move_nowhere() {
        let (mut state, mut world) = new_game();
        let out = run("go castle", &mut state, &mut world);
        assert_eq!(out.lines(), ["You can't go there from here."]);
        assert_eq!(state.current_location, LocationId::new("village"));
        assert_eq!(state.game_time, 0);
    }

    #[test]
    fn locked_door_needs_key() {
        let (mut state, mut world) = new_game();
        place(&mut state, "dark_forest");
        let out = run("go mines", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["You need a mine key to enter Abandoned Mines."]
        );
        assert_eq!(state.current_location, LocationId::new("dark_forest"));

        run("take key", &mut state, &mut world);
        let out = run("go mines", &mut state, &mut world);
        assert_eq!(out.lines()[0], "You have arrived at Abandoned Mines.");
    }

    #[test]
    fn amulet_counts_only_when_delivered() {
        let (mut state, mut world) = new_game();
        let royal = aq_core::QuestId::new("royal_amulet");
        place(&mut state, "castle_road");
        state.player.add_item(ItemId::new("castle_key"));

        let out = run("go gate", &mut state, &mut world);
        assert!(!out.contains("Quest objective completed: Deliver Amulet"));
        assert!(!state.quests[&royal].is_recorded("deliver_amulet"));

        run("go road", &mut state, &mut world);
        state.player.add_item(ItemId::new("ancient_amulet"));
        let out = run("go gate", &mut state, &mut world);
        assert!(out.contains("Quest objective completed: Deliver Amulet"));
        assert!(state.quests[&royal].is_recorded("deliver_amulet"));
    }

    #[test]
    fn look_full_view() {
        let (mut state, mut world) = new_game();
        place(&mut state, "dark_forest");
        let out = run("look", &mut state, &mut world);
        assert_eq!(out.lines()[0], "Dark Forest");
        assert!(out.contains("You can go to:"));
        assert!(out.contains("- Forest Path"));
        assert!(out.contains("- Abandoned Mines (locked)"));
        assert!(out.contains("- Wolf"));
        assert!(out.contains("- Mine Key"));

        place(&mut state, "village");
        let out = run("examine", &mut state, &mut world);
        assert!(out.contains("- Elder Thorne (village_elder)"));
        assert!(!out.contains("Enemies here:"));
    }

    #[test]
    fn look_at_things() {
        let (mut state, mut world) = new_game();
        let out = run("look map", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["Village Map: A crude map showing the surrounding areas."]
        );
        let out = run("look elder", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["Elder Thorne: An elderly man with a long white beard and kind eyes."]
        );
        let out = run("look dragon", &mut state, &mut world);
        assert_eq!(out.lines(), ["You don't see that here."]);

        place(&mut state, "dark_forest");
        let out = run("look wolf", &mut state, &mut world);
        assert!(out.lines()[0].starts_with("Wolf: "));
    }

    #[test]
    fn take_moves_item() {
        let (mut state, mut world) = new_game();
        let out = run("take map", &mut state, &mut world);
        assert_eq!(out.lines(), ["You picked up Village Map."]);
        assert!(state.player.has_item(&ItemId::new("village_map")));
        let village = world.location(&LocationId::new("village")).unwrap();
        assert!(village.items.is_empty());

        let out = run("get map", &mut state, &mut world);
        assert_eq!(out.lines(), ["You don't see that here."]);
    }

    #[test]
    fn taken_item_no_longer_visible() {
        let (mut state, mut world) = new_game();
        let out = run("look map", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["Village Map: A crude map showing the surrounding areas."]
        );
        run("take map", &mut state, &mut world);
        let out = run("look map", &mut state, &mut world);
        assert_eq!(out.lines(), ["You don't see that here."]);
    }

    #[test]
    fn take_loose_item_uses_spoken_id() {
        let (mut state, mut world) = new_game();
        world
            .location_mut(&LocationId::new("village"))
            .unwrap()
            .items
            .push(ItemId::new("odd_pebble"));
        let out = run("pickup pebble", &mut state, &mut world);
        assert_eq!(out.lines(), ["You picked up odd pebble."]);
    }

    #[test]
    fn take_amulet_records_objective() {
        let (mut state, mut world) = new_game();
        place(&mut state, "mine_depths");
        let out = run("take amulet", &mut state, &mut world);
        assert_eq!(out.lines()[0], "You picked up Ancient Amulet.");
        assert!(out.contains("Quest objective completed: Find Amulet"));
    }

    #[test]
    fn inventory_listing() {
        let (mut state, mut world) = new_game();
        let out = run("i", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            [
                "You are carrying:",
                "- Rusty Sword (equipped weapon)",
                "- Health Potion",
            ]
        );
        state.player.inventory.clear();
        let out = run("inventory", &mut state, &mut world);
        assert_eq!(out.lines(), ["Your inventory is empty."]);
    }

    #[test]
    fn equip_by_kind() {
        let (mut state, mut world) = new_game();
        state.player.add_item(ItemId::new("leather_armor"));
        let out = run("wear leather", &mut state, &mut world);
        assert_eq!(out.lines(), ["You equipped Leather Armor as your armor."]);
        assert_eq!(
            state.player.equipped_armor,
            Some(ItemId::new("leather_armor"))
        );

        let out = run("equip potion", &mut state, &mut world);
        assert_eq!(out.lines(), ["You can't equip Health Potion."]);
        let out = run("wield axe", &mut state, &mut world);
        assert_eq!(out.lines(), ["You don't have that item."]);
        assert_eq!(
            state.player.equipped_weapon,
            Some(ItemId::new("rusty_sword"))
        );
    }

    #[test]
    fn key_items_cannot_be_equipped() {
        let (mut state, mut world) = new_game();
        state.player.add_item(ItemId::new("village_map"));
        state.player.add_item(ItemId::new("mine_key"));

        let out = run("equip map", &mut state, &mut world);
        assert_eq!(out.lines(), ["You can't equip Village Map."]);
        let out = run("wield key", &mut state, &mut world);
        assert_eq!(out.lines(), ["You can't equip Mine Key."]);

        assert_eq!(
            state.player.equipped_weapon,
            Some(ItemId::new("rusty_sword"))
        );
        assert_eq!(state.player.equipped_armor, None);
        assert!(state.player.has_item(&ItemId::new("mine_key")));
    }

    #[test]
    fn use_potion_heals_and_consumes() {
        let (mut state, mut world) = new_game();
        state.player.health = 50;
        let out = run("drink potion", &mut state, &mut world);
        assert_eq!(
            out.lines(),
            ["You used Health Potion and recovered 25 health points."]
        );
        assert_eq!(state.player.health, 75);
        assert!(!state.player.has_item(&ItemId::new("health_potion")));
    }

    #[test]
    fn use_potion_caps_at_max() {
        let (mut state, mut world) = new_game();
        state.player.health = 90;
        run("use health", &mut state, &mut world);
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn use_non_potion_changes_nothing() {
        let (mut state, mut world) = new_game();
        let before = state.clone();
        let out = run("use sword", &mut state, &mut world);
        assert_eq!(out.lines(), ["You can't use Rusty Sword that way."]);
        assert_eq!(state, before);
        let out = run("consume scroll", &mut state, &mut world);
        assert_eq!(out.lines(), ["You don't have that item."]);
    }

    #[test]
    fn talk_with_quest_giver() {
        let (mut state, mut world) = new_game();
        let out = run("talk elder", &mut state, &mut world);
        assert_eq!(
            out.lines()[0],
            "Elder Thorne: \"Welcome to Oakvale, traveler. Our village has faced troubled times lately.\""
        );
        assert!(out.contains("Elder Thorne has a quest for you: Village Troubles"));
        assert!(out.lines().iter().any(|l| l.contains("miners have gone missing")));

        for objective in ["clear_forest", "clear_mines"] {
            state.advance_objective(&aq_core::ObjectiveRef::new("village_troubles", objective));
        }
        let out = run("speak thorne", &mut state, &mut world);
        assert!(out.lines().iter().any(|l| l.contains("a great service")));
    }

    #[test]
    fn talk_with_trader() {
        let (mut state, mut world) = new_game();
        let out = run("talk merchant", &mut state, &mut world);
        assert!(out.contains("Merchant Lysa can trade with you:"));
        assert!(out.contains("- Health Potion (costs 10 gold)"));
        assert!(out.contains("- Leather Armor (costs 25 gold)"));
        let out = run("talk wizard", &mut state, &mut world);
        assert_eq!(out.lines(), ["There's no one by that name here."]);
    }

    #[test]
    fn attack_signals_combat() {
        let (mut state, mut world) = new_game();
        place(&mut state, "dark_forest");
        let outcome = interpret("attack wolf", &mut state, &mut world).unwrap();
        match outcome.signal {
            Some(Signal::Combat(engagement)) => {
                assert_eq!(engagement.enemy.as_str(), "wolf");
                assert_eq!(engagement.template.max_health, 20);
                assert_eq!(engagement.location.as_str(), "dark_forest");
            }
            other => panic!("expected combat, got {other:?}"),
        }

        let out = run("fight goblin", &mut state, &mut world);
        assert_eq!(out.lines(), ["There's no enemy by that name here."]);
    }

    #[test]
    fn help_and_quit() {
        let (mut state, mut world) = new_game();
        let out = run("commands", &mut state, &mut world);
        assert_eq!(out.lines().len(), HELP_LINES.len());
        let outcome = interpret("exit", &mut state, &mut world).unwrap();
        assert_eq!(outcome.signal, Some(Signal::Quit));
    }

    #[test]
    fn missing_location_is_an_error() {
        let (mut state, mut world) = new_game();
        place(&mut state, "atlantis");
        assert!(matches!(
            interpret("look", &mut state, &mut world),
            Err(FictionError::LocationNotFound(_))
        ));
    }

    #[test]
    fn dangling_connection_is_an_error() {
        let (mut state, mut world) = new_game();
        world
            .location_mut(&LocationId::new("village"))
            .unwrap()
            .connections
            .insert(0, LocationId::new("atlantis"));
        assert!(matches!(
            interpret("go atlantis", &mut state, &mut world),
            Err(FictionError::DanglingConnection { .. })
        ));
    }

    proptest! {
        #[test]
        fn locked_mines_stay_locked(target in "[a-z_ ]{0,16}") {
            let (mut state, mut world) = new_game();
            place(&mut state, "dark_forest");
            state.player.remove_item(&ItemId::new("mine_key"));
            let _ = interpret(&format!("go {target}"), &mut state, &mut world);
            prop_assert_ne!(state.current_location, LocationId::new("abandoned_mines"));
        }

        #[test]
        fn health_stays_in_bounds(start in 0i32..=100, uses in 0usize..4) {
            let (mut state, mut world) = new_game();
            state.player.health = start;
            for _ in 0..uses {
                state.player.add_item(ItemId::new("greater_health_potion"));
                let _ = interpret("use potion", &mut state, &mut world);
            }
            prop_assert!(state.player.health >= 0);
            prop_assert!(state.player.health <= state.player.max_health);
        }
    }
}

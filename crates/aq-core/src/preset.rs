//! The built-in Oakvale adventure.
//!
//! Produces the same [`WorldModel`] that the equivalent JSON file would, but
//! without requiring one on disk.

use crate::enemy::EnemyTemplate;
use crate::id::{EnemyId, ItemId, LocationId};
use crate::item::{Item, ItemKind};
use crate::location::Location;
use crate::npc::{Dialogue, Npc};
use crate::quest::{ObjectiveRef, Quest};
use crate::world::{VictoryCondition, WorldModel};

/// The Oakvale world: a village, a haunted forest, the mines below it and
/// a castle taken by the Dark Knight.
pub fn oakvale() -> WorldModel {
    let mut world = WorldModel::new("Adventure Quest", "village");
    world.start.inventory = vec![ItemId::new("rusty_sword"), ItemId::new("health_potion")];
    world.start.weapon = Some(ItemId::new("rusty_sword"));
    world.victory = Some(VictoryCondition {
        location: LocationId::new("throne_room"),
        enemy: EnemyId::new("dark_knight"),
    });

    for item in items() {
        world.add_item(item);
    }
    for location in locations() {
        world.add_location(location);
    }
    for npc in npcs() {
        world.add_npc(npc);
    }
    for enemy in enemies() {
        world.add_enemy(enemy);
    }
    for quest in quests() {
        world.add_quest(quest);
    }
    world
}

fn items() -> Vec<Item> {
    use ItemKind::{Armor, KeyItem, Potion, Weapon};
    vec![
        Item::new("rusty_sword", "Rusty Sword", "An old sword with a dull edge.", Weapon, 5),
        Item::new("iron_sword", "Iron Sword", "A sturdy iron sword.", Weapon, 10),
        Item::new(
            "enchanted_blade",
            "Enchanted Blade",
            "A magical sword that glows faintly blue.",
            Weapon,
            20,
        ),
        Item::new(
            "leather_armor",
            "Leather Armor",
            "Basic protection made of hardened leather.",
            Armor,
            5,
        ),
        Item::new(
            "chainmail",
            "Chainmail",
            "Interlocking metal rings provide solid protection.",
            Armor,
            10,
        ),
        Item::new(
            "knight_armor",
            "Knight's Armor",
            "Shining plate armor of exceptional quality.",
            Armor,
            15,
        ),
        Item::new(
            "health_potion",
            "Health Potion",
            "A red liquid that restores 25 health points.",
            Potion,
            25,
        ),
        Item::new(
            "greater_health_potion",
            "Greater Health Potion",
            "A crimson liquid that restores 50 health points.",
            Potion,
            50,
        ),
        Item::new(
            "village_map",
            "Village Map",
            "A crude map showing the surrounding areas.",
            KeyItem,
            0,
        ),
        Item::new(
            "mine_key",
            "Mine Key",
            "An old iron key that opens the abandoned mines.",
            KeyItem,
            0,
        ),
        Item::new(
            "castle_key",
            "Castle Key",
            "An ornate key with the royal crest.",
            KeyItem,
            0,
        ),
        Item::new(
            "ancient_amulet",
            "Ancient Amulet",
            "A mysterious artifact with strange markings.",
            KeyItem,
            0,
        )
        .with_objective(ObjectiveRef::new("royal_amulet", "find_amulet")),
    ]
}

fn locations() -> Vec<Location> {
    vec![
        Location::new(
            "village",
            "Village of Oakvale",
            "A peaceful village with thatched-roof cottages and friendly people.",
        )
        .connect(["forest_path", "village_inn", "blacksmith", "village_square"])
        .with_npcs(["village_elder", "farmer", "merchant"])
        .with_items(["village_map"]),
        Location::new(
            "village_inn",
            "The Sleeping Stag Inn",
            "A warm common room smelling of stew and pipe smoke.",
        )
        .connect(["village"])
        .with_npcs(["innkeeper"])
        .with_items(["health_potion"]),
        Location::new(
            "blacksmith",
            "Blacksmith's Forge",
            "Sparks fly from the anvil and racks of blades line the walls.",
        )
        .connect(["village"])
        .with_npcs(["smith"]),
        Location::new(
            "village_square",
            "Village Square",
            "A cobbled square around an old well. A road leads north toward the castle.",
        )
        .connect(["village", "castle_road"])
        .with_npcs(["town_guard"]),
        Location::new(
            "forest_path",
            "Forest Path",
            "A narrow trail winding between ancient oaks.",
        )
        .connect(["village", "dark_forest"])
        .with_items(["health_potion"]),
        Location::new(
            "dark_forest",
            "Dark Forest",
            "The canopy blots out the sun. Something growls in the undergrowth.",
        )
        .connect(["forest_path", "abandoned_mines"])
        .with_enemies(["wolf"])
        .with_items(["mine_key"]),
        Location::new(
            "abandoned_mines",
            "Abandoned Mines",
            "Rotting timbers hold up a tunnel that reeks of damp and old smoke.",
        )
        .connect(["dark_forest", "mine_depths"])
        .with_enemies(["goblin"])
        .with_items(["chainmail"])
        .locked_by("mine_key"),
        Location::new(
            "mine_depths",
            "Mine Depths",
            "A vast cavern lit by glowing runes carved into the rock.",
        )
        .connect(["abandoned_mines"])
        .with_enemies(["mine_guardian"])
        .with_items(["ancient_amulet"]),
        Location::new(
            "castle_road",
            "Castle Road",
            "A rutted road climbing toward grey battlements.",
        )
        .connect(["village_square", "castle_gate"])
        .with_enemies(["bandit"]),
        Location::new(
            "castle_gate",
            "Castle Gate",
            "Towering doors bearing the royal crest stand half open.",
        )
        .connect(["castle_road", "throne_room"])
        .with_npcs(["royal_advisor"])
        .locked_by("castle_key")
        .with_delivery(
            ObjectiveRef::new("royal_amulet", "deliver_amulet"),
            "ancient_amulet",
        ),
        Location::new(
            "throne_room",
            "Throne Room",
            "Black banners hang where the king's colors once flew.",
        )
        .connect(["castle_gate"])
        .with_enemies(["dark_knight"])
        .with_items(["knight_armor"]),
    ]
}

fn npcs() -> Vec<Npc> {
    vec![
        Npc::new(
            "village_elder",
            "Elder Thorne",
            "An elderly man with a long white beard and kind eyes.",
            Dialogue {
                greeting: "Welcome to Oakvale, traveler. Our village has faced troubled times lately."
                    .to_string(),
                quest: Some(
                    "The forest has become dangerous, and our miners have gone missing. Would you help us?"
                        .to_string(),
                ),
                quest_active: Some(
                    "Have you checked the forest and the abandoned mines yet?".to_string(),
                ),
                quest_complete: Some(
                    "You've done a great service to our village. Take this as a token of our gratitude."
                        .to_string(),
                ),
            },
        )
        .gives_quest("village_troubles"),
        Npc::new(
            "farmer",
            "Farmer Giles",
            "A weathered man leaning on a pitchfork.",
            Dialogue::greeting("Wolves took two of my sheep last week. Stay off the forest path at night."),
        ),
        Npc::new(
            "merchant",
            "Merchant Lysa",
            "A sharp-eyed trader with a cart full of odds and ends.",
            Dialogue::greeting("Potions, armor, a bit of everything. Have a look!"),
        )
        .sells("health_potion", 10)
        .sells("leather_armor", 25),
        Npc::new(
            "innkeeper",
            "Martha",
            "A cheerful woman polishing a tankard.",
            Dialogue::greeting("Rest your feet, dear. They say the old mines are haunted now."),
        ),
        Npc::new(
            "smith",
            "Bram the Smith",
            "A broad-shouldered smith with soot on his forearms.",
            Dialogue::greeting("Need steel? Mine is the best this side of the mountains."),
        )
        .sells("iron_sword", 50)
        .sells("chainmail", 75),
        Npc::new(
            "town_guard",
            "Guard Rowan",
            "A young guard clutching a spear a little too tightly.",
            Dialogue::greeting("Bandits on the castle road. Nobody goes north anymore."),
        ),
        Npc::new(
            "royal_advisor",
            "Advisor Caldus",
            "A gaunt man in faded royal livery.",
            Dialogue {
                greeting: "You made it past the gate. The king's hope is not lost yet.".to_string(),
                quest: Some("The amulet from the depths can break the knight's power.".to_string()),
                quest_active: Some("Bring the amulet here, quickly.".to_string()),
                quest_complete: Some("With the amulet's power, this blade is yours.".to_string()),
            },
        )
        .gives_quest("royal_amulet"),
    ]
}

fn enemies() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new(
            "wolf",
            "Wolf",
            "A fierce wolf with matted gray fur and sharp teeth.",
            20,
            8,
        )
        .with_loot(["health_potion"])
        .flags_on_defeat("forest_cleared")
        .with_objective(ObjectiveRef::new("village_troubles", "clear_forest")),
        EnemyTemplate::new(
            "goblin",
            "Goblin Scavenger",
            "A wiry goblin wielding a rusted pick.",
            15,
            5,
        )
        .with_loot(["health_potion"]),
        EnemyTemplate::new(
            "mine_guardian",
            "Mine Guardian",
            "A hulking construct of stone and iron with glowing eyes.",
            50,
            12,
        )
        .with_loot(["castle_key", "greater_health_potion"])
        .flags_on_defeat("mines_cleared")
        .with_objective(ObjectiveRef::new("village_troubles", "clear_mines")),
        EnemyTemplate::new(
            "bandit",
            "Road Bandit",
            "A masked cutthroat with a notched blade.",
            30,
            10,
        )
        .with_loot(["iron_sword"]),
        EnemyTemplate::new(
            "dark_knight",
            "Dark Knight",
            "A towering figure in black armor wreathed in shadow.",
            80,
            18,
        ),
    ]
}

fn quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "village_troubles",
            "Village Troubles",
            "Investigate the forest and abandoned mines to discover what's causing problems for the village.",
            ["clear_forest", "clear_mines"],
            "greater_health_potion",
        ),
        Quest::new(
            "royal_amulet",
            "The Royal Amulet",
            "Find the ancient amulet and bring it to the castle to help stop the darkness.",
            ["find_amulet", "deliver_amulet"],
            "enchanted_blade",
        ),
    ]
}

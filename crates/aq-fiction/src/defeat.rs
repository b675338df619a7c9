//! What happens after combat: spoils of victory and quest hooks.

use aq_core::quest::objective_title;
use aq_core::{EnemyId, GameState, LocationId, ObjectiveRef, QuestUpdate, WorldModel};

use crate::error::{FictionError, FictionResult};
use crate::narration::Narration;

/// Minutes a won fight takes.
pub const VICTORY_MINUTES: u32 = 5;

/// Settle a won fight against `enemy` at `location`.
///
/// Loot goes to the inventory, the enemy leaves the location for good, the
/// defeat counter and clock advance, and the enemy's progress flag and
/// objective hook fire.
pub fn resolve_victory(
    enemy: &EnemyId,
    location: &LocationId,
    state: &mut GameState,
    world: &mut WorldModel,
) -> FictionResult<Narration> {
    let template = world
        .enemy(enemy)
        .cloned()
        .ok_or_else(|| FictionError::EnemyNotFound(enemy.clone()))?;

    let mut out = Narration::line(format!("You defeated {}!", template.name));
    if !template.loot.is_empty() {
        out.push("You found:");
        for item in &template.loot {
            out.push(format!("- {}", world.item_name(item)));
            state.player.add_item(item.clone());
        }
    }

    world.require_location_mut(location)?.remove_enemy(enemy);
    state.enemies_defeated += 1;
    state.advance_time(VICTORY_MINUTES);

    if let Some(flag) = &template.progress_flag {
        state.set_flag(flag.clone());
    }
    if let Some(hook) = &template.objective {
        out.append(advance_objective(hook, state, world));
    }

    tracing::info!(enemy = %enemy, defeated = state.enemies_defeated, "enemy defeated");
    Ok(out)
}

/// Fire an objective hook and narrate whatever it changed.
pub fn advance_objective(hook: &ObjectiveRef, state: &mut GameState, world: &WorldModel) -> Narration {
    let mut out = Narration::new();
    match state.advance_objective(hook) {
        QuestUpdate::Unchanged => {}
        QuestUpdate::ObjectiveCompleted { objective, .. } => {
            out.push(format!(
                "Quest objective completed: {}",
                objective_title(&objective)
            ));
        }
        QuestUpdate::QuestCompleted {
            quest,
            objective,
            reward,
        } => {
            out.push(format!(
                "Quest objective completed: {}",
                objective_title(&objective)
            ));
            out.push(format!("Quest completed: {quest}"));
            out.push(format!("You received: {}", world.item_name(&reward)));
            tracing::info!(%quest, %reward, "quest completed");
        }
    }
    out
}

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use aq_core::validate_world;
use aq_fiction::{AdventureSession, Narration, SessionConfig};
use aq_mechanics::combat::MENU;

pub fn run(world_path: Option<&Path>, seed: u64, name: &str) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let errors = validate_world(&world)
        .into_iter()
        .filter(|issue| issue.is_error)
        .count();
    if errors > 0 {
        return Err(format!(
            "'{}' has {errors} error(s); run `aq check` for details",
            world.name
        ));
    }

    let config = SessionConfig::default()
        .with_seed(seed)
        .with_player_name(name);
    let mut session = AdventureSession::new(world, config).map_err(|e| e.to_string())?;
    tracing::info!(seed, world = %session.world().name, "adventure started");

    println!();
    println!("  {}", "ADVENTURE QUEST".bold());
    println!("  Type 'help' for a list of commands.");
    println!();
    print_narration(&session.intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!();
        if session.awaiting_item() {
            print!("Choose an item to use (or 0 to cancel): ");
        } else if session.in_combat() {
            print_combat(&session);
            print!("Choose your action (1-5): ");
        } else {
            print_status(&session);
            print!("> ");
        }
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(input) = read_line(&mut reader)? else {
            break;
        };

        let out = session.process(&input);
        if !out.is_empty() {
            println!();
            print_narration(&out);
        }

        if session.has_quit() {
            break;
        }
        if session.is_game_over() {
            print_game_over();
        } else if session.is_victory() {
            print_victory(&session);
        } else {
            continue;
        }

        if !play_again(&mut reader)? {
            break;
        }
        session.restart();
        println!();
        print_narration(&session.intro());
    }

    println!();
    println!("Thank you for playing Adventure Quest!");
    Ok(())
}

/// Read one line, or `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(input.trim().to_string())),
        Err(e) => Err(format!("failed to read input: {e}")),
    }
}

fn play_again(reader: &mut impl BufRead) -> Result<bool, String> {
    println!();
    print!("Would you like to play again? (y/n): ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let answer = read_line(reader)?.unwrap_or_default().to_lowercase();
    Ok(answer.starts_with('y'))
}

fn print_narration(out: &Narration) {
    for line in out.lines() {
        println!("{line}");
    }
}

fn print_status(session: &AdventureSession) {
    let state = session.state();
    let player = &state.player;
    let location = session
        .world()
        .location(&state.current_location)
        .map_or_else(|| state.current_location.to_string(), |l| l.name.clone());

    let health = format!("{}/{}", player.health, player.max_health);
    let health = if player.health_fraction() < 0.3 {
        health.red()
    } else if player.health_fraction() < 0.6 {
        health.yellow()
    } else {
        health.green()
    };
    println!(
        "{} {health} | {} {location} | {} {}",
        "Health:".dimmed(),
        "Location:".dimmed(),
        "Time:".dimmed(),
        state.clock()
    );
}

fn print_combat(session: &AdventureSession) {
    let Some(encounter) = session.encounter() else {
        return;
    };
    for (i, line) in encounter.banner(session.state()).iter().enumerate() {
        if i == 0 {
            println!("{}", line.red().bold());
        } else {
            println!("{line}");
        }
    }
    println!();
    for (i, (label, help)) in MENU.iter().enumerate() {
        println!("  {}. {label} {}", i + 1, format!("({help})").dimmed());
    }
}

fn print_game_over() {
    println!();
    println!("{}", "=".repeat(40));
    println!("{}", "GAME OVER".red().bold());
    println!("Your adventure has come to an end.");
    println!("{}", "=".repeat(40));
}

fn print_victory(session: &AdventureSession) {
    let state = session.state();
    let foe = session
        .world()
        .victory
        .as_ref()
        .and_then(|v| session.world().enemy(&v.enemy))
        .map_or_else(|| "final foe".to_string(), |e| e.name.clone());

    println!();
    println!("{}", "=".repeat(40));
    println!("{}", "VICTORY!".green().bold());
    println!(
        "Congratulations, {}! You have defeated the {foe} and saved the kingdom!",
        state.player.name
    );
    println!();
    println!("Final stats:");
    println!("  Enemies defeated: {}", state.enemies_defeated);
    println!("  Game time: {}", state.clock());
    println!("  Locations visited: {}", state.visited_locations.len());
    println!();
    println!("The End");
    println!("{}", "=".repeat(40));
}

mod common;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use adkins_house::GameState;
use common::{log_lines, new_game, run};

fn room_sets(game: &GameState) -> BTreeMap<String, BTreeSet<String>> {
    game.world
        .rooms
        .iter()
        .map(|(name, room)| (name.clone(), room.items.iter().cloned().collect()))
        .collect()
}

#[test]
fn save_then_load_restores_everything() {
    let (_dir, mut game) = new_game();
    run(&mut game, "pick up flashlight");
    run(&mut game, "move south");
    run(&mut game, "pick up coin");
    run(&mut game, "move east");

    let room = game.player.current_room.clone();
    let inventory: BTreeSet<String> = game.player.inventory.iter().cloned().collect();
    let rooms = room_sets(&game);

    run(&mut game, "save");

    // wander off and change things before loading
    run(&mut game, "pick up map");
    run(&mut game, "move west");
    run(&mut game, "move north");

    run(&mut game, "load");

    assert_eq!(game.player.current_room, room);
    assert_eq!(game.player.current_room, "Secret Study");
    let restored: BTreeSet<String> = game.player.inventory.iter().cloned().collect();
    assert_eq!(restored, inventory);
    assert_eq!(room_sets(&game), rooms);
    assert_eq!(game.world.room("Secret Study").unwrap().items, vec!["Map"]);
}

#[test]
fn partial_save_does_not_duplicate_items() {
    let (_dir, mut game) = new_game();
    fs::write(
        &game.config.save_path,
        "current_room = \"Library\"\ninventory = [\"Book\"]\n",
    )
    .unwrap();

    let out = run(&mut game, "load");
    assert!(out.contains("Game loaded."));
    assert_eq!(game.player.current_room, "Library");
    assert_eq!(game.player.inventory, vec!["Book"]);
    assert!(game.world.room("Library").unwrap().items.is_empty());

    let out = run(&mut game, "pick up book");
    assert!(out.contains("That item isn't here."));
    assert_eq!(game.player.inventory, vec!["Book"]);

    // the other rooms keep what they had
    assert_eq!(game.world.room("Kitchen").unwrap().items, vec!["Key"]);
    assert_eq!(game.world.room("Foyer").unwrap().items, vec!["Flashlight"]);
}

#[test]
fn unknown_room_falls_back_to_foyer() {
    let (_dir, mut game) = new_game();
    run(&mut game, "move north");
    fs::write(
        &game.config.save_path,
        "current_room = \"Ballroom\"\ninventory = [\"Book\"]\n\n[room_items]\nLibrary = []\n",
    )
    .unwrap();

    let out = run(&mut game, "load");
    assert!(out.contains("Game loaded."));
    assert_eq!(game.player.current_room, "Foyer");
    assert_eq!(game.player.inventory, vec!["Book"]);
    assert!(game.world.room("Library").unwrap().items.is_empty());
}

#[test]
fn unknown_items_are_silently_omitted() {
    let (_dir, mut game) = new_game();
    fs::write(
        &game.config.save_path,
        r#"
current_room = "Attic"
inventory = ["Sword", "Key"]

[room_items]
Attic = ["Lantern", "Ghost"]
Kitchen = []
"#,
    )
    .unwrap();

    let out = run(&mut game, "load");
    assert!(out.contains("Game loaded."));
    assert_eq!(game.player.current_room, "Attic");
    assert_eq!(game.player.inventory, vec!["Key"]);
    assert_eq!(game.world.room("Attic").unwrap().items, vec!["Lantern"]);
}

#[test]
fn loading_without_a_save_is_reported() {
    let (_dir, mut game) = new_game();
    let out = run(&mut game, "load");
    assert!(out.contains("Load error: no save file"));
    assert_eq!(game.player.current_room, "Foyer");
    assert!(log_lines(&game).last().unwrap().starts_with("Load error:"));
}

#[test]
fn malformed_save_is_reported() {
    let (_dir, mut game) = new_game();
    fs::write(&game.config.save_path, "current_room = \n").unwrap();

    let out = run(&mut game, "load");
    assert!(out.contains("Load error: malformed save data"));
    assert_eq!(game.player.current_room, "Foyer");
}

#[test]
fn unreadable_save_is_unexpected() {
    let (dir, mut game) = new_game();
    game.config.save_path = dir.path().to_path_buf();

    let out = run(&mut game, "load");
    assert!(out.contains("Unexpected load error:"));
    assert!(
        log_lines(&game)
            .last()
            .unwrap()
            .starts_with("Unexpected load error:")
    );
}

#[test]
fn failed_save_keeps_playing() {
    let (dir, mut game) = new_game();
    game.config.save_path = dir.path().join("no_such_dir").join("savegame.toml");

    let out = run(&mut game, "save");
    assert!(out.contains("Save error:"));
    assert!(run(&mut game, "move north").contains("Library"));
}

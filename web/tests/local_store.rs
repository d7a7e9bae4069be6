#![cfg(target_arch = "wasm32")]

use blossom_core::{KeyValueStore, MemoryStore, PLAYERS_KEY, PlayerId, Roster, Shell};
use blossom_core::{Board, BoardGenerator, Generation};
use blossom_web::LocalStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct MineAtZero;

impl BoardGenerator for MineAtZero {
    fn generate(&mut self, generation: Generation) -> Board {
        Board::from_mine_indices(generation, &[0]).unwrap()
    }
}

fn clear_players() {
    LocalStore.set(PLAYERS_KEY, "[]").unwrap();
}

#[wasm_bindgen_test]
fn roster_round_trips_through_local_storage() {
    clear_players();

    let mut roster = Roster::load(LocalStore);
    let id = roster.create("ana").unwrap().id;
    roster.update_score(&id, 4).unwrap();

    assert_eq!(
        LocalStore.get(PLAYERS_KEY).as_deref(),
        Some(r#"[{"id":"1","name":"ana","score":4}]"#)
    );
    let reloaded = Roster::load(LocalStore);
    assert_eq!(reloaded.find(&id).unwrap().score, 4);
}

#[wasm_bindgen_test]
fn local_storage_matches_memory_store_behavior() {
    clear_players();

    let mut browser = Shell::load(LocalStore, MineAtZero);
    let mut memory = Shell::load(MemoryStore::new(), MineAtZero);
    for name in ["a", "b"] {
        browser.submit_name(name).unwrap();
        memory.submit_name(name).unwrap();
    }
    for index in [3, 4, 0] {
        browser.reveal(index).unwrap();
        memory.reveal(index).unwrap();
    }

    assert_eq!(
        LocalStore.get(PLAYERS_KEY),
        memory.roster().store().get(PLAYERS_KEY)
    );
    assert_eq!(browser.roster().find(&PlayerId::new("2")).unwrap().score, 2);
}

//! Browser-facing API over a single game session.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::RulesConfig;
use crate::game::Game;

static SESSION: Lazy<Mutex<Game>> = Lazy::new(|| Mutex::new(Game::default()));

fn session() -> Result<MutexGuard<'static, Game>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("game session lock poisoned"))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Starts a new game. `config` may be `undefined`/`null` for the defaults.
#[wasm_bindgen]
pub fn new_game(config: JsValue) -> Result<JsValue, JsValue> {
    let config: RulesConfig = if config.is_undefined() || config.is_null() {
        RulesConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let game = Game::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut session = session()?;
    *session = game;
    to_js(&session.to_game_state())
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsValue> {
    to_js(&session()?.to_game_state())
}

#[wasm_bindgen]
pub fn get_legal_moves() -> Result<JsValue, JsValue> {
    to_js(&session()?.legal_moves())
}

#[wasm_bindgen]
pub fn is_legal_move(origin: u8, destination: u8) -> bool {
    session().is_ok_and(|game| game.is_legal_move(origin, destination))
}

/// Plays a move and returns the new state, or the rejection reason as a string.
#[wasm_bindgen]
pub fn play_move(origin: u8, destination: u8) -> Result<JsValue, JsValue> {
    let mut game = session()?;
    game.play(origin, destination)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&game.to_game_state())
}

/// `null` while the game is in progress.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsValue> {
    match session()?.to_game_result() {
        Some(result) => to_js(&result),
        None => Ok(JsValue::NULL),
    }
}

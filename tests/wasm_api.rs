#![cfg(target_arch = "wasm32")]

use damas::wasm::{get_legal_moves, get_result, get_state, is_legal_move, new_game, play_move};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_returns_initial_state() {
    let state = new_game(JsValue::UNDEFINED).unwrap();

    assert!(damas::wasm_ready());
    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("light"));
    assert_eq!(field(&state, "light_count").as_f64(), Some(12.0));
    assert_eq!(field(&state, "dark_count").as_f64(), Some(12.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 32);
    assert!(get_result().unwrap().is_null());
}

#[wasm_bindgen_test]
fn play_move_updates_session() {
    new_game(JsValue::NULL).unwrap();

    assert!(is_legal_move(9, 13));
    assert!(!is_legal_move(9, 18));
    let state = play_move(9, 13).unwrap();

    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("dark"));
    let last = field(&state, "last_move");
    assert_eq!(field(&last, "origin").as_f64(), Some(9.0));
    assert_eq!(field(&last, "destination").as_f64(), Some(13.0));
    assert_eq!(
        field(&get_state().unwrap(), "current_player").as_string().as_deref(),
        Some("dark")
    );
}

#[wasm_bindgen_test]
fn illegal_move_is_reported_as_string() {
    new_game(JsValue::UNDEFINED).unwrap();

    let err = play_move(9, 18).unwrap_err();

    assert_eq!(
        err.as_string().as_deref(),
        Some("piece on square 9 cannot move to 18")
    );
}

#[wasm_bindgen_test]
fn config_is_read_from_js_object() {
    let config = Object::new();
    Reflect::set(&config, &"first_player".into(), &"dark".into()).unwrap();

    let state = new_game(config.into()).unwrap();

    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("dark"));
    assert_eq!(Array::from(&get_legal_moves().unwrap()).length(), 7);
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let config = Object::new();
    Reflect::set(&config, &"draw_after_king_moves".into(), &JsValue::from_f64(0.0)).unwrap();

    let err = new_game(config.into()).unwrap_err();

    assert_eq!(
        err.as_string().as_deref(),
        Some("config validation error: draw_after_king_moves must be > 0")
    );
}

use eframe::egui::{InputState, Key};
use ninefold_core::Digit;

use crate::ui::Action;

const DIGIT_KEYS: [(Key, Digit); 9] = [
    (Key::Num1, Digit::D1),
    (Key::Num2, Digit::D2),
    (Key::Num3, Digit::D3),
    (Key::Num4, Digit::D4),
    (Key::Num5, Digit::D5),
    (Key::Num6, Digit::D6),
    (Key::Num7, Digit::D7),
    (Key::Num8, Digit::D8),
    (Key::Num9, Digit::D9),
];

/// Maps pressed digit keys to placement actions. Every other key is ignored.
pub fn digit_actions(i: &InputState) -> Vec<Action> {
    let mut actions = vec![];
    for (key, digit) in DIGIT_KEYS {
        if i.key_pressed(key) {
            actions.push(Action::PressDigit(digit));
        }
    }
    actions
}

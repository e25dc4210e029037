//! Key identifiers that a binding can be attached to.
//!
//! Names follow the host's key enumeration (`F1`, `Alpha1`, `Keypad0`, ...).
//! Parsing trims surrounding whitespace and then requires an exact,
//! case-sensitive match against a key name. Unlike the host's own key
//! lookup, numeric key codes such as `"282"` are rejected: bindings are
//! written by name.

use std::fmt;
use std::str::FromStr;

macro_rules! key_ids {
    ($($variant:ident),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum KeyId {
            $($variant),+
        }

        impl KeyId {
            pub const ALL: &'static [KeyId] = &[$(KeyId::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(KeyId::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

key_ids![
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15,
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Alpha0, Alpha1, Alpha2, Alpha3, Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Alpha9,
    Keypad0, Keypad1, Keypad2, Keypad3, Keypad4, Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
    Space, Tab, Return, Backspace, Escape, Insert, Delete, Home, End, PageUp, PageDown,
    UpArrow, DownArrow, LeftArrow, RightArrow,
    LeftShift, RightShift, LeftControl, RightControl, LeftAlt, RightAlt,
    Mouse3, Mouse4, Mouse5, Mouse6,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key identifier '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for KeyId {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        KeyId::ALL
            .iter()
            .copied()
            .find(|key| key.name() == trimmed)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

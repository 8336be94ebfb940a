//! Game configuration.
//!
//! Settings arrive from the hosting page as a JSON object persisted by
//! the settings screen. Every field is optional in that object: a
//! partial document merges over the defaults, which is why each field
//! carries a serde default. Read once at session start; only the two
//! presentation toggles may change mid-round.

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSettings {
    /// Preset player count. `None` means the UI prompts for one.
    pub total_players: Option<u8>,
    /// Starting cash per player.
    pub init_cash: f64,
    /// Cash at or above this wins the game.
    pub win_cash: f64,
    /// Lower clamp bound for the leverage input.
    pub min_lev: i64,
    /// Upper clamp bound for the leverage input.
    pub max_lev: i64,
    /// Presentation-only: whether the UI plays the dice animation.
    /// Never read by engine math.
    pub use_dice_animation: bool,
    /// Presentation-only: whether the UI plays sounds.
    pub use_sound: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            total_players: None,
            init_cash: 30.0,
            win_cash: 100.0,
            min_lev: -3,
            max_lev: 9,
            use_dice_animation: true,
            use_sound: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = GameSettings::default();
        assert_eq!(s.total_players, None);
        assert_eq!(s.init_cash, 30.0);
        assert_eq!(s.win_cash, 100.0);
        assert_eq!(s.min_lev, -3);
        assert_eq!(s.max_lev, 9);
        assert!(s.use_dice_animation);
        assert!(s.use_sound);
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let s: GameSettings =
            serde_json::from_str(r#"{"initCash": 50, "maxLev": 5}"#).unwrap();
        assert_eq!(s.init_cash, 50.0);
        assert_eq!(s.max_lev, 5);
        // Untouched fields keep their defaults.
        assert_eq!(s.win_cash, 100.0);
        assert_eq!(s.min_lev, -3);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "totalPlayers": 3,
            "initCash": 25,
            "winCash": 80,
            "minLev": -2,
            "maxLev": 6,
            "useDiceAnimation": false,
            "useSound": false
        }"#;
        let s: GameSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_players, Some(3));
        assert_eq!(s.init_cash, 25.0);
        assert_eq!(s.win_cash, 80.0);
        assert_eq!(s.min_lev, -2);
        assert_eq!(s.max_lev, 6);
        assert!(!s.use_dice_animation);
        assert!(!s.use_sound);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let s: GameSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, GameSettings::default());
    }

    #[test]
    fn test_round_trip_uses_camel_case_keys() {
        let json = serde_json::to_string(&GameSettings::default()).unwrap();
        assert!(json.contains("initCash"));
        assert!(json.contains("useDiceAnimation"));
    }
}

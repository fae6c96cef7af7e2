use crate::core::game_state::GameState;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Manages the single JSON save snapshot.
///
/// The format is self-describing, so fields added in later releases fall
/// back to their defaults on load instead of invalidating the file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager rooted at the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "questline").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("questline-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            save_path: temp_dir.join("save.json"),
        })
    }

    /// Loads the save. A missing or unparseable file yields the fresh
    /// default state; older saves merge through the serde defaults.
    pub fn load_or_default(&self) -> GameState {
        match fs::read_to_string(&self.save_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => GameState::default(),
        }
    }

    /// Writes the whole state as one JSON document, replacing any previous
    /// save.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_string(state)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.save_path, json)
    }

    /// Deletes the save file. An absent file counts as already reset.
    pub fn reset(&self) -> io::Result<()> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::{
        DailyTime, PlayerClass, PlayerProfile, QuestProgress, TargetMastery, TimeFrame,
    };
    use chrono::NaiveDate;

    fn test_profile() -> PlayerProfile {
        PlayerProfile::new(
            "Save Tester".to_string(),
            PlayerClass::Practitioner,
            TargetMastery::Power,
            DailyTime::Min15,
            TimeFrame::ThreeMonths,
            1_700_000_000,
        )
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut state = GameState::new_game(test_profile(), today);
        state.xp = 1280;
        state.gold = 145;
        state.streak = 4;
        state.total_kills = 11;
        state.completed_quests.insert(
            "basics-1".to_string(),
            QuestProgress {
                completed: true,
                score: 92,
                completed_at: 1_700_000_100,
            },
        );

        manager.save(&state).expect("Failed to save game state");
        assert!(manager.save_exists());

        let loaded = manager.load_or_default();
        assert_eq!(loaded, state);

        manager.reset().expect("Failed to reset save");
    }

    #[test]
    fn test_load_missing_returns_default() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        assert!(!manager.save_exists());
        let state = manager.load_or_default();
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        fs::write(&manager.save_path, b"this is not valid json {{{").unwrap();

        let state = manager.load_or_default();
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_load_partial_save_merges_defaults() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        // A hand-trimmed save from an older release
        fs::write(&manager.save_path, r#"{"xp": 700, "streak": 2}"#).unwrap();

        let state = manager.load_or_default();
        assert_eq!(state.xp, 700);
        assert_eq!(state.streak, 2);
        assert_eq!(state.unlocked_nodes, vec!["basics".to_string()]);
        assert!(state.sound_enabled);
        assert!(state.profile.is_none());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        let mut first = GameState::default();
        first.xp = 100;
        manager.save(&first).unwrap();

        let mut second = GameState::default();
        second.xp = 900;
        manager.save(&second).unwrap();

        let loaded = manager.load_or_default();
        assert_eq!(loaded.xp, 900);
    }

    #[test]
    fn test_reset_removes_save() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");

        manager.save(&GameState::default()).unwrap();
        assert!(manager.save_exists());

        manager.reset().unwrap();
        assert!(!manager.save_exists());

        // Resetting again is fine
        manager.reset().unwrap();
    }
}

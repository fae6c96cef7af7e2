use thiserror::Error;

/// Where an encounter stands. `Fighting` is the only state that accepts
/// further answers; `Victory` and `Defeat` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Fighting,
    Victory,
    Defeat,
}

/// What the most recent turn amounted to. Terminal kinds outrank the
/// blow that caused them: a killing crit reports `Victory`, not
/// `CriticalHit` (the `is_crit` flag on the action still records it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleActionKind {
    PlayerAttack,
    CriticalHit,
    EnemyAttack,
    Victory,
    Defeat,
}

/// One resolved turn, for callers that present the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleAction {
    pub kind: BattleActionKind,
    pub damage: u32,
    pub is_crit: bool,
    /// Combo count after this turn (0 when the enemy acted).
    pub combo: u32,
}

/// Per-encounter battle state. Lives only as long as the quest run that
/// spawned it and is never persisted; abandoning a battle is dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleState {
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    /// Current run of consecutive correct answers.
    pub combo: u32,
    /// Highest combo reached this battle, survives combo breaks.
    pub max_combo: u32,
    pub turn: u32,
    pub status: BattleStatus,
    pub last_action: Option<BattleAction>,
    /// Index into the enemy's phase table; only ever moves forward.
    pub phase_idx: usize,
}

impl BattleState {
    pub fn is_over(&self) -> bool {
        self.status != BattleStatus::Fighting
    }

    pub fn player_hp_percent(&self) -> f64 {
        self.player_hp as f64 / self.player_max_hp as f64 * 100.0
    }

    pub fn enemy_hp_fraction(&self) -> f64 {
        self.enemy_hp as f64 / self.enemy_max_hp as f64
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    /// The battle already reached Victory or Defeat; no further turns
    /// can be resolved against it.
    #[error("battle is already over")]
    BattleOver,
}

// Battle pacing
/// Rounds fought before a battle is called off (one round per day).
pub const DAY_BUDGET: u32 = 7;

// Items
pub const POTION_CHARGES: u32 = 2;

// Monte Carlo sweep
pub const DEFAULT_TRIAL_COUNT: u32 = 10_000;
pub const QUICK_TRIAL_COUNT: u32 = 1_000;

// The strongest creature tier rolls three dice; the expected-roll model stops there.
pub const MAX_POLICY_DICE: u32 = 3;

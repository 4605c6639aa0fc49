//! Battle state machine.
//!
//! A battle runs one round per day until a side's willpower drops to zero or
//! below, or the day budget runs out.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::combatant::CombatantState;
use crate::dice::draw;
use crate::error::{Result, SimError};

use super::policy::{choose_item, ItemUse};
use super::resolver::{round_damage, RoundDamage, RoundResolver, StandardResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BattleState {
    Active,
    HeroWon,
    EnemyWon,
    /// Day budget exhausted with both sides still standing.
    Draw,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        self != BattleState::Active
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub hero_dice: Vec<i32>,
    pub enemy_dice: Vec<i32>,
    pub item: ItemUse,
    pub hero_roll: i32,
    pub enemy_roll: i32,
    pub damage: RoundDamage,
}

/// One hero against one creature.
#[derive(Debug, Clone)]
pub struct Battle<'a> {
    hero: CombatantState<'a>,
    enemy: CombatantState<'a>,
    days_left: u32,
    state: BattleState,
}

impl<'a> Battle<'a> {
    /// Set up a battle. Fails if either dice table cannot cover the starting
    /// willpower, before any dice are rolled.
    pub fn new(
        hero: CombatantState<'a>,
        enemy: CombatantState<'a>,
        day_budget: u32,
    ) -> Result<Self> {
        hero.dice_count()?;
        enemy.dice_count()?;

        Ok(Self {
            hero,
            enemy,
            days_left: day_budget,
            state: BattleState::Active,
        })
    }

    pub fn hero(&self) -> &CombatantState<'a> {
        &self.hero
    }

    pub fn enemy(&self) -> &CombatantState<'a> {
        &self.enemy
    }

    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    fn should_continue(&self) -> bool {
        self.days_left > 0 && self.hero.is_alive() && self.enemy.is_alive()
    }

    /// Fight one round: both sides roll, the hero picks an item, the loser of
    /// the round takes the difference.
    pub fn simulate_round<R: RoundResolver>(
        &mut self,
        rng: &mut impl Rng,
        resolver: &R,
    ) -> Result<RoundReport> {
        let hero_dice = draw(self.hero.dice_family(), self.hero.dice_count()?, rng);
        let enemy_dice = draw(self.enemy.dice_family(), self.enemy.dice_count()?, rng);

        let item = choose_item(&mut self.hero, &self.enemy, &hero_dice)?;
        let (hero_roll, enemy_roll) =
            resolver.effective_rolls(&self.hero, &hero_dice, item, &self.enemy, &enemy_dice);

        let damage = round_damage(hero_roll, enemy_roll);
        self.hero.take_damage(damage.hero);
        self.enemy.take_damage(damage.enemy);
        self.days_left = self.days_left.saturating_sub(1);

        trace!(
            hero = self.hero.name(),
            enemy = self.enemy.name(),
            ?hero_dice,
            ?enemy_dice,
            %item,
            hero_roll,
            enemy_roll,
            hero_willpower = self.hero.willpower,
            enemy_willpower = self.enemy.willpower,
            "round resolved"
        );

        Ok(RoundReport {
            hero_dice,
            enemy_dice,
            item,
            hero_roll,
            enemy_roll,
            damage,
        })
    }

    /// Fight to the end under the standard rules.
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<BattleState> {
        self.run_with(rng, &StandardResolver)
    }

    pub fn run_with<R: RoundResolver>(
        &mut self,
        rng: &mut impl Rng,
        resolver: &R,
    ) -> Result<BattleState> {
        while self.should_continue() {
            self.simulate_round(rng, resolver)?;
        }

        self.state = self.conclude()?;
        debug!(
            hero = self.hero.name(),
            enemy = self.enemy.name(),
            state = ?self.state,
            days_left = self.days_left,
            "battle over"
        );
        Ok(self.state)
    }

    fn conclude(&self) -> Result<BattleState> {
        let hero_alive = self.hero.is_alive();
        let enemy_alive = self.enemy.is_alive();

        // Only one side takes damage per round.
        debug_assert!(
            hero_alive || enemy_alive,
            "both sides defeated in {} vs {}",
            self.hero.name(),
            self.enemy.name()
        );

        match (hero_alive, enemy_alive) {
            (true, false) => Ok(BattleState::HeroWon),
            (false, true) => Ok(BattleState::EnemyWon),
            (true, true) => Ok(BattleState::Draw),
            (false, false) => Err(SimError::InvalidOutcome {
                hero: self.hero.name().to_string(),
                enemy: self.enemy.name().to_string(),
                state: self.state,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{CombatantTemplate, Loadout};
    use crate::core::DAY_BUDGET;
    use crate::dice::DiceFamily;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct FixedRolls(i32, i32);

    impl RoundResolver for FixedRolls {
        fn effective_rolls(
            &self,
            _hero: &CombatantState,
            _hero_dice: &[i32],
            _item: ItemUse,
            _enemy: &CombatantState,
            _enemy_dice: &[i32],
        ) -> (i32, i32) {
            (self.0, self.1)
        }
    }

    fn thorn() -> CombatantTemplate {
        CombatantTemplate::hero("Thorn", 6, 14, &[(6, 2), (13, 3), (14, 4)], true)
    }

    fn gor() -> CombatantTemplate {
        CombatantTemplate::enemy("Gor", 2, 4, &[(4, 2)], DiceFamily::Red)
    }

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_new_battle_is_active() {
        let (h, e) = (thorn(), gor());
        let battle = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&e),
            DAY_BUDGET,
        )
        .unwrap();

        assert_eq!(battle.state(), BattleState::Active);
        assert_eq!(battle.days_left(), DAY_BUDGET);
        assert_eq!(battle.hero().willpower, 14);
        assert_eq!(battle.enemy().willpower, 4);
    }

    #[test]
    fn test_forced_tie_ends_in_draw_after_budget() {
        let (h, e) = (thorn(), gor());
        let mut battle = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&e),
            DAY_BUDGET,
        )
        .unwrap();

        let state = battle
            .run_with(&mut create_test_rng(), &FixedRolls(9, 9))
            .unwrap();

        assert_eq!(state, BattleState::Draw);
        assert_eq!(battle.days_left(), 0);
        assert_eq!(battle.hero().willpower, 14);
        assert_eq!(battle.enemy().willpower, 4);
    }

    #[test]
    fn test_hero_wins_on_first_lethal_round() {
        let (h, e) = (thorn(), gor());
        let mut battle = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&e),
            DAY_BUDGET,
        )
        .unwrap();

        let state = battle
            .run_with(&mut create_test_rng(), &FixedRolls(20, 10))
            .unwrap();

        assert_eq!(state, BattleState::HeroWon);
        assert_eq!(battle.days_left(), DAY_BUDGET - 1);
        assert_eq!(battle.enemy().willpower, -6);
    }

    #[test]
    fn test_enemy_wins_and_loop_stops() {
        let (h, e) = (thorn(), gor());
        let mut battle = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&e),
            DAY_BUDGET,
        )
        .unwrap();

        // 5 damage per round: 14 -> 9 -> 4 -> -1
        let state = battle
            .run_with(&mut create_test_rng(), &FixedRolls(5, 10))
            .unwrap();

        assert_eq!(state, BattleState::EnemyWon);
        assert_eq!(battle.days_left(), DAY_BUDGET - 3);
        assert_eq!(battle.hero().willpower, -1);
    }

    #[test]
    fn test_malformed_table_fails_before_rolling() {
        let h = thorn();
        let broken = CombatantTemplate::enemy("Wardrak", 10, 7, &[(6, 1)], DiceFamily::Black);

        let err = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&broken),
            DAY_BUDGET,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SimError::Configuration { ref name, willpower: 7 } if name == "Wardrak"
        ));
    }

    #[test]
    fn test_round_report_reflects_state_change() {
        let (h, e) = (thorn(), gor());
        let mut battle = Battle::new(
            CombatantState::hero(&h, &Loadout::none()),
            CombatantState::enemy(&e),
            DAY_BUDGET,
        )
        .unwrap();

        let report = battle
            .simulate_round(&mut create_test_rng(), &StandardResolver)
            .unwrap();

        assert_eq!(report.hero_dice.len(), 4);
        assert_eq!(report.enemy_dice.len(), 2);
        assert_eq!(report.item, ItemUse::None);
        assert_eq!(battle.hero().willpower, 14 - report.damage.hero);
        assert_eq!(battle.enemy().willpower, 4 - report.damage.enemy);
        assert_eq!(battle.days_left(), DAY_BUDGET - 1);
    }

    #[test]
    fn test_standard_battle_always_terminates() {
        let (h, e) = (thorn(), gor());
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let mut battle = Battle::new(
                CombatantState::hero(&h, &Loadout::helmet()),
                CombatantState::enemy(&e),
                DAY_BUDGET,
            )
            .unwrap();
            let state = battle.run(&mut rng).unwrap();
            assert!(state.is_terminal());
            assert!(battle.days_left() < DAY_BUDGET);
        }
    }
}

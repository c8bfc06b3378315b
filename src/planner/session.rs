use tracing::{debug, info};

use crate::models::{EnergyTargets, GroceryLine, Person, Profile, SplitMacros, Week};
use crate::planner::energy::energy_targets;
use crate::planner::generator::{generate_week, PlanInputs, WeeklyPlan};
use crate::planner::grocery::aggregate_groceries;
use crate::planner::macros::day_macros;
use crate::planner::rng::fresh_seed;
use crate::planner::share::{
    auto_share, cheat_makeup, clamp_share, steady_rowing_minutes, CheatMakeup,
};
use crate::planner::workouts::WEEKLY_ROTATION;

/// Both profiles plus the week generated from them.
///
/// Profile edits are applied with [`PlanSession::set_profile`] and only take
/// effect once the caller runs [`PlanSession::recompute`]. Changing the seed
/// or the share regenerates the week right away, since those are the
/// generator's direct inputs.
#[derive(Debug, Clone)]
pub struct PlanSession {
    you: Profile,
    partner: Profile,
    you_targets: EnergyTargets,
    partner_targets: EnergyTargets,
    seed: u32,
    auto_share: f64,
    share: f64,
    manual_share: bool,
    stale: bool,
    week: Week,
}

impl PlanSession {
    pub fn new(you: Profile, partner: Profile, seed: u32, share_override: Option<f64>) -> Self {
        let you_targets = energy_targets(&you);
        let partner_targets = energy_targets(&partner);
        let auto = auto_share(you_targets.goal_kcal, partner_targets.goal_kcal);
        let share = share_override.map(clamp_share).unwrap_or(auto);

        let inputs = PlanInputs {
            seed,
            you_share: share,
            you_target_kcal: you_targets.goal_kcal,
            partner_target_kcal: partner_targets.goal_kcal,
        };

        Self {
            you,
            partner,
            you_targets,
            partner_targets,
            seed,
            auto_share: auto,
            share,
            manual_share: share_override.is_some(),
            stale: false,
            week: generate_week(&inputs),
        }
    }

    pub fn profile(&self, person: Person) -> &Profile {
        match person {
            Person::You => &self.you,
            Person::Partner => &self.partner,
        }
    }

    pub fn targets(&self, person: Person) -> &EnergyTargets {
        match person {
            Person::You => &self.you_targets,
            Person::Partner => &self.partner_targets,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Active share of shared ingredients for the first person.
    pub fn share(&self) -> f64 {
        self.share
    }

    pub fn is_manual_share(&self) -> bool {
        self.manual_share
    }

    /// True after a profile edit until [`PlanSession::recompute`] runs.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn week(&self) -> &Week {
        &self.week
    }

    pub fn inputs(&self) -> PlanInputs {
        PlanInputs {
            seed: self.seed,
            you_share: self.share,
            you_target_kcal: self.you_targets.goal_kcal,
            partner_target_kcal: self.partner_targets.goal_kcal,
        }
    }

    /// Replace a profile. Targets and the week stay as they were until `recompute`.
    pub fn set_profile(&mut self, person: Person, profile: Profile) {
        match person {
            Person::You => self.you = profile,
            Person::Partner => self.partner = profile,
        }
        self.stale = true;
    }

    /// Re-derive targets and share from the profiles and rebuild the week.
    ///
    /// A manual share survives only if the derived share did not move.
    pub fn recompute(&mut self) {
        self.you_targets = energy_targets(&self.you);
        self.partner_targets = energy_targets(&self.partner);

        let auto = auto_share(self.you_targets.goal_kcal, self.partner_targets.goal_kcal);
        if auto != self.auto_share || !self.manual_share {
            if self.manual_share {
                debug!(share = auto, "Energy targets moved, dropping manual share");
            }
            self.share = auto;
            self.manual_share = false;
        }
        self.auto_share = auto;
        self.stale = false;
        self.rebuild();
    }

    /// Set a manual share (clamped) and rebuild the week.
    pub fn set_share(&mut self, share: f64) {
        self.share = clamp_share(share);
        self.manual_share = true;
        self.rebuild();
    }

    /// Go back to the share derived from the energy targets.
    pub fn reset_share(&mut self) {
        self.share = self.auto_share;
        self.manual_share = false;
        self.rebuild();
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.rebuild();
    }

    /// Draw a new seed and rebuild. Returns the seed used.
    pub fn regenerate(&mut self) -> u32 {
        let seed = fresh_seed();
        info!(seed, "Regenerating week");
        self.set_seed(seed);
        seed
    }

    fn rebuild(&mut self) {
        self.week = generate_week(&self.inputs());
    }

    pub fn groceries(&self) -> Vec<GroceryLine> {
        aggregate_groceries(&self.week)
    }

    /// Current week together with the workout rotation and grocery list.
    pub fn weekly_plan(&self) -> WeeklyPlan {
        WeeklyPlan {
            week: self.week.clone(),
            workouts: WEEKLY_ROTATION,
            groceries: self.groceries(),
        }
    }

    /// Macros for a zero-based day index.
    pub fn day_macros(&self, day: usize) -> Option<SplitMacros> {
        self.week
            .days
            .get(day)
            .map(|d| day_macros(&d.meals, self.share))
    }

    pub fn cheat_makeup(&self, extra_kcal: f64) -> CheatMakeup {
        cheat_makeup(extra_kcal, self.share)
    }

    /// Steady rowing minutes (you, partner) for cardio days.
    pub fn rowing_minutes(&self) -> (u32, u32) {
        steady_rowing_minutes(self.you_targets.goal_kcal, self.partner_targets.goal_kcal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use crate::planner::constants::DEFAULT_SEED;

    fn session() -> PlanSession {
        PlanSession::new(
            Profile::default_you(),
            Profile::default_partner(),
            DEFAULT_SEED,
            None,
        )
    }

    #[test]
    fn test_auto_share_from_goals() {
        let s = session();
        let expected = 1737.86 / (1737.86 + 2406.25);
        assert!((s.share() - expected).abs() < 1e-6);
        assert!(!s.is_manual_share());
    }

    #[test]
    fn test_profile_edit_waits_for_recompute() {
        let mut s = session();
        let before = s.week().clone();
        let share_before = s.share();

        let mut heavier = Profile::default_partner();
        heavier.weight_kg = 110.0;
        heavier.goal = Goal::Bulk;
        s.set_profile(Person::Partner, heavier);

        assert!(s.is_stale());
        assert_eq!(s.week(), &before);
        assert_eq!(s.share(), share_before);

        s.recompute();
        assert!(!s.is_stale());
        assert!(s.share() < share_before);
    }

    #[test]
    fn test_manual_share_dropped_when_targets_move() {
        let mut s = session();
        s.set_share(0.65);
        assert!(s.is_manual_share());

        // same profiles, derived share unchanged: manual share kept
        s.recompute();
        assert_eq!(s.share(), 0.65);

        let mut p = Profile::default_you();
        p.weight_kg = 80.0;
        s.set_profile(Person::You, p);
        s.recompute();
        assert!(!s.is_manual_share());
        assert!(s.share() != 0.65);
    }

    #[test]
    fn test_set_share_clamps_and_rebuilds() {
        let mut s = session();
        let before = s.week().clone();
        s.set_share(0.95);
        assert_eq!(s.share(), 0.70);
        assert_ne!(s.week(), &before);

        s.reset_share();
        assert_eq!(s.week(), &before);
    }

    #[test]
    fn test_set_seed_is_reproducible() {
        let mut a = session();
        let mut b = session();
        a.set_seed(42);
        b.set_seed(42);
        assert_eq!(a.week(), b.week());
    }
}

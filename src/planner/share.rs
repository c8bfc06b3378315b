use serde::Serialize;

use crate::planner::constants::*;

/// First person's share of shared ingredients, from both goal calorie targets.
///
/// Clamped to [`SHARE_MIN`, `SHARE_MAX`]; falls back to an even split when the
/// total is not positive.
pub fn auto_share(you_kcal: f64, partner_kcal: f64) -> f64 {
    let total = you_kcal + partner_kcal;
    if total <= 0.0 || total.is_nan() {
        return SHARE_FALLBACK;
    }
    clamp_share(you_kcal / total)
}

pub fn clamp_share(share: f64) -> f64 {
    if share.is_nan() {
        return SHARE_FALLBACK;
    }
    share.clamp(SHARE_MIN, SHARE_MAX)
}

/// Use a manual share when given (still clamped), else derive it.
pub fn resolve_share(share_override: Option<f64>, you_kcal: f64, partner_kcal: f64) -> f64 {
    match share_override {
        Some(share) => clamp_share(share),
        None => auto_share(you_kcal, partner_kcal),
    }
}

/// Extra rowing minutes each person needs to burn off a treat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheatMakeup {
    pub you_minutes: u32,
    pub partner_minutes: u32,
}

/// Split extra calories by the share and convert to minutes, rounding up.
pub fn cheat_makeup(extra_kcal: f64, you_share: f64) -> CheatMakeup {
    let extra = extra_kcal.max(0.0);
    CheatMakeup {
        you_minutes: (extra * you_share / KCAL_PER_ROWING_MINUTE).ceil() as u32,
        partner_minutes: (extra * (1.0 - you_share) / KCAL_PER_ROWING_MINUTE).ceil() as u32,
    }
}

/// Steady rowing minutes per person, weighted by each person's energy target.
pub fn steady_rowing_minutes(you_kcal: f64, partner_kcal: f64) -> (u32, u32) {
    let total = you_kcal + partner_kcal;
    if total <= 0.0 || total.is_nan() {
        let even = BASE_ROWING_MINUTES as u32;
        return (even, even);
    }
    let minutes = |kcal: f64| (BASE_ROWING_MINUTES * (kcal / total) * 2.0).round() as u32;
    (minutes(you_kcal), minutes(partner_kcal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_share_proportional() {
        let share = auto_share(1737.86, 2406.25);
        assert!((share - 1737.86 / (1737.86 + 2406.25)).abs() < 1e-12);
    }

    #[test]
    fn test_auto_share_clamped() {
        assert_eq!(auto_share(100.0, 10_000.0), SHARE_MIN);
        assert_eq!(auto_share(10_000.0, 100.0), SHARE_MAX);
        assert_eq!(auto_share(0.0, 0.0), SHARE_FALLBACK);
        assert_eq!(auto_share(-5.0, 1.0), SHARE_FALLBACK);
    }

    #[test]
    fn test_share_bounds_over_a_grid() {
        for a in (0..5000).step_by(37) {
            for b in (0..5000).step_by(41) {
                let s = auto_share(a as f64, b as f64);
                assert!((SHARE_MIN..=SHARE_MAX).contains(&s), "{a} {b} -> {s}");
            }
        }
    }

    #[test]
    fn test_override_is_clamped() {
        assert_eq!(resolve_share(Some(0.9), 1.0, 1.0), SHARE_MAX);
        assert_eq!(resolve_share(Some(0.45), 1.0, 1.0), 0.45);
        assert_eq!(resolve_share(None, 1.0, 1.0), 0.5);
    }

    #[test]
    fn test_cheat_makeup() {
        let m = cheat_makeup(350.0, 0.45);
        assert_eq!(m.you_minutes, 20);
        assert_eq!(m.partner_minutes, 25);

        let none = cheat_makeup(0.0, 0.45);
        assert_eq!(none.you_minutes, 0);
        assert_eq!(none.partner_minutes, 0);
    }

    #[test]
    fn test_steady_rowing_minutes() {
        assert_eq!(steady_rowing_minutes(2000.0, 2000.0), (30, 30));
        assert_eq!(steady_rowing_minutes(1000.0, 3000.0), (15, 45));
        assert_eq!(steady_rowing_minutes(0.0, 0.0), (30, 30));
    }
}

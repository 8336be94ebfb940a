//! Scoring: cash application, risk-adjusted performance, and status.
//!
//! Pure functions over [`Player`] state; the session calls them during
//! event resolution. Performance is a risk-adjusted return:
//!
//! ```text
//! performance = (cash - init_cash) / sqrt(leverage_sum)    (leverage_sum > 0)
//! performance = 0                                          (leverage_sum <= 0)
//! ```
//!
//! The leverage sum only ever grows, so repeatedly taking leverage
//! without commensurate cash gains drags performance toward zero.
//! Special-topic events route through the same update with a leverage
//! of 0: cash moves, the denominator does not.

use crate::core::{Player, PlayerStatus};

/// Leverage assumed when the raw input does not parse as an integer.
pub const DEFAULT_LEVERAGE: i64 = 1;

/// Add a cash delta to a player. No validation; callers guarantee the
/// delta is a finite number.
pub fn apply_cash(player: &mut Player, delta: f64) {
    player.cash += delta;
}

/// Apply a leveraged event outcome: accumulate the leverage, apply the
/// cash delta, and recompute performance against the updated risk
/// denominator.
pub fn apply_leveraged_outcome(player: &mut Player, delta: f64, leverage: i64, init_cash: f64) {
    player.leverage_sum += leverage;
    apply_cash(player, delta);
    player.performance = performance(player.cash, init_cash, player.leverage_sum);
}

/// The performance value for a given cash/denominator pair.
#[must_use]
pub fn performance(cash: f64, init_cash: f64, leverage_sum: i64) -> f64 {
    if leverage_sum <= 0 {
        0.0
    } else {
        (cash - init_cash) / (leverage_sum as f64).sqrt()
    }
}

/// Re-evaluate a player's standing after a cash change.
///
/// Negative cash eliminates; cash at or above `win_cash` wins; both
/// deactivate the player. Otherwise the status cell is cleared. The two
/// terminal outcomes are mutually exclusive because `win_cash` is
/// non-negative in any playable configuration.
pub fn check_status(player: &mut Player, win_cash: f64) {
    if player.cash < 0.0 {
        player.active = false;
        player.status = PlayerStatus::Eliminated;
    } else if player.cash >= win_cash {
        player.active = false;
        player.status = PlayerStatus::Won;
    } else {
        player.status = PlayerStatus::InPlay;
    }
}

/// Parse a raw leverage input, falling back to [`DEFAULT_LEVERAGE`]
/// when it is not an integer.
#[must_use]
pub fn parse_leverage(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(DEFAULT_LEVERAGE)
}

/// Clamp a leverage value into the configured bounds.
///
/// The lower bound wins if a malformed configuration inverts the
/// bounds; no input can make this panic.
#[must_use]
pub fn clamp_leverage(leverage: i64, min_lev: i64, max_lev: i64) -> i64 {
    leverage.min(max_lev).max(min_lev)
}

/// Parse and clamp in one step: the full input-to-leverage pipeline.
#[must_use]
pub fn leverage_from_input(raw: &str, min_lev: i64, max_lev: i64) -> i64 {
    clamp_leverage(parse_leverage(raw), min_lev, max_lev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn player(cash: f64) -> Player {
        let mut p = Player::new(PlayerId::new(1), 30.0);
        p.cash = cash;
        p
    }

    #[test]
    fn test_apply_cash() {
        let mut p = player(30.0);
        apply_cash(&mut p, 12.5);
        assert_eq!(p.cash, 42.5);
        apply_cash(&mut p, -50.0);
        assert_eq!(p.cash, -7.5);
    }

    #[test]
    fn test_leveraged_outcome_triple_leverage_gain() {
        // impact 10, leverage 3, starting from 30.
        let mut p = player(30.0);
        apply_leveraged_outcome(&mut p, 30.0, 3, 30.0);

        assert_eq!(p.cash, 60.0);
        assert_eq!(p.leverage_sum, 3);
        assert_eq!(p.performance, 30.0 / 3f64.sqrt());
    }

    #[test]
    fn test_performance_zero_when_denominator_nonpositive() {
        assert_eq!(performance(100.0, 30.0, 0), 0.0);
        assert_eq!(performance(100.0, 30.0, -2), 0.0);
        assert!(performance(100.0, 30.0, 1) > 0.0);
    }

    #[test]
    fn test_zero_leverage_moves_cash_not_denominator() {
        let mut p = player(30.0);
        apply_leveraged_outcome(&mut p, 30.0, 3, 30.0);
        let denom_before = p.leverage_sum;

        // A special event: cash falls 40, leverage contribution 0.
        apply_leveraged_outcome(&mut p, -40.0, 0, 30.0);

        assert_eq!(p.cash, 20.0);
        assert_eq!(p.leverage_sum, denom_before);
        assert_eq!(p.performance, (20.0 - 30.0) / 3f64.sqrt());
    }

    #[test]
    fn test_negative_leverage_can_zero_performance() {
        let mut p = player(30.0);
        apply_leveraged_outcome(&mut p, 10.0, 2, 30.0);
        apply_leveraged_outcome(&mut p, 10.0, -3, 30.0);

        assert_eq!(p.leverage_sum, -1);
        assert_eq!(p.performance, 0.0);
    }

    #[test]
    fn test_check_status_eliminated() {
        let mut p = player(-0.01);
        check_status(&mut p, 100.0);
        assert!(!p.active);
        assert_eq!(p.status, PlayerStatus::Eliminated);
    }

    #[test]
    fn test_check_status_won() {
        let mut p = player(100.0);
        check_status(&mut p, 100.0);
        assert!(!p.active);
        assert_eq!(p.status, PlayerStatus::Won);
    }

    #[test]
    fn test_check_status_clears_in_play() {
        let mut p = player(55.0);
        check_status(&mut p, 100.0);
        assert!(p.active);
        assert_eq!(p.status, PlayerStatus::InPlay);
    }

    #[test]
    fn test_check_status_zero_cash_still_in_play() {
        // Exactly zero is not negative; the player survives.
        let mut p = player(0.0);
        check_status(&mut p, 100.0);
        assert!(p.active);
        assert_eq!(p.status, PlayerStatus::InPlay);
    }

    #[test]
    fn test_parse_leverage() {
        assert_eq!(parse_leverage("3"), 3);
        assert_eq!(parse_leverage("  -2 "), -2);
        assert_eq!(parse_leverage("abc"), 1);
        assert_eq!(parse_leverage(""), 1);
        assert_eq!(parse_leverage("2.5"), 1);
    }

    #[test]
    fn test_clamp_leverage() {
        assert_eq!(clamp_leverage(50, -3, 9), 9);
        assert_eq!(clamp_leverage(-50, -3, 9), -3);
        assert_eq!(clamp_leverage(4, -3, 9), 4);
    }

    #[test]
    fn test_leverage_from_input_pipeline() {
        assert_eq!(leverage_from_input("3", -3, 9), 3);
        assert_eq!(leverage_from_input("99", -3, 9), 9);
        assert_eq!(leverage_from_input("nonsense", -3, 9), 1);
        // Unparseable input defaults to 1 *before* clamping; bounds that
        // exclude 1 still clamp it in.
        assert_eq!(leverage_from_input("nonsense", 2, 9), 2);
        assert_eq!(leverage_from_input("nonsense", -9, 0), 0);
    }
}

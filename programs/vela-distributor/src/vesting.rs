use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Computes the portion of `total_entitlement` unlocked at `now_ts` for a linear
/// schedule running from `start_ts` to `end_ts`.
///
/// Before the start nothing is vested; from the end onward everything is. In
/// between the amount is `total * elapsed / duration`, evaluated in u128 so the
/// product cannot wrap, rounding down so a claimant never receives more than
/// entitled. Monotonically non-decreasing in `now_ts`.
pub fn claimable_amount(
    total_entitlement: u64,
    start_ts: i64,
    end_ts: i64,
    now_ts: i64,
) -> Result<u64> {
    if now_ts <= start_ts {
        return Ok(0);
    }
    if now_ts >= end_ts {
        return Ok(total_entitlement);
    }

    // Both differences are positive here: start_ts < now_ts < end_ts.
    let elapsed = now_ts.checked_sub(start_ts).ok_or(ErrorCode::NumericOverflow)? as u128;
    let duration = end_ts.checked_sub(start_ts).ok_or(ErrorCode::NumericOverflow)? as u128;

    let vested = (total_entitlement as u128)
        .checked_mul(elapsed)
        .ok_or(ErrorCode::NumericOverflow)?
        / duration;

    u64::try_from(vested).map_err(|_| ErrorCode::NumericOverflow.into())
}

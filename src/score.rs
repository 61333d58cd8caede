//! Deliverability health score.
//!
//! Points per check (50 in total), scaled to 0-100:
//!
//! | Check | Points |
//! |-------|--------|
//! | SPF   | hard_fail 10, soft_fail 7, any other valid record 3 |
//! | DKIM  | any selector found 15 |
//! | DMARC | reject 15, quarantine 11, none 5 |
//! | MX    | records present 10 |

use serde::Serialize;

use crate::checks::{DkimResult, DmarcPolicy, DmarcResult, MxResult, SpfEnforcement, SpfResult};
use crate::config::{
    DKIM_POINTS_FOUND, DMARC_POINTS_NONE, DMARC_POINTS_QUARANTINE, DMARC_POINTS_REJECT,
    MX_POINTS_VALID, SCORE_RAW_MAX, SPF_POINTS_HARD_FAIL, SPF_POINTS_OTHER, SPF_POINTS_SOFT_FAIL,
};

/// Points earned by each check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// SPF points (max 10)
    pub spf: u32,
    /// DKIM points (max 15)
    pub dkim: u32,
    /// DMARC points (max 15)
    pub dmarc: u32,
    /// MX points (max 10)
    pub mx: u32,
}

impl ScoreBreakdown {
    /// Sum of all points, in `0..=50`.
    pub fn raw_total(&self) -> u32 {
        self.spf + self.dkim + self.dmarc + self.mx
    }

    /// The total scaled to `0..=100`, rounded down.
    pub fn health_score(&self) -> u8 {
        let scaled = (self.raw_total() * 100 / SCORE_RAW_MAX).min(100);
        // min(100) keeps the value in u8 range
        scaled as u8
    }
}

fn spf_points(spf: &SpfResult) -> u32 {
    if !spf.valid {
        return 0;
    }
    match spf.enforcement {
        SpfEnforcement::HardFail => SPF_POINTS_HARD_FAIL,
        SpfEnforcement::SoftFail => SPF_POINTS_SOFT_FAIL,
        _ => SPF_POINTS_OTHER,
    }
}

fn dmarc_points(dmarc: &DmarcResult) -> u32 {
    if !dmarc.valid {
        return 0;
    }
    match dmarc.policy {
        Some(DmarcPolicy::Reject) => DMARC_POINTS_REJECT,
        Some(DmarcPolicy::Quarantine) => DMARC_POINTS_QUARANTINE,
        Some(DmarcPolicy::None) => DMARC_POINTS_NONE,
        None => 0,
    }
}

/// Computes the points earned by each check.
pub fn score_breakdown(
    spf: &SpfResult,
    dkim: &DkimResult,
    dmarc: &DmarcResult,
    mx: &MxResult,
) -> ScoreBreakdown {
    ScoreBreakdown {
        spf: spf_points(spf),
        dkim: if dkim.found { DKIM_POINTS_FOUND } else { 0 },
        dmarc: dmarc_points(dmarc),
        mx: if mx.valid { MX_POINTS_VALID } else { 0 },
    }
}

/// Computes the 0-100 health score from the four check results.
pub fn calculate_health_score(
    spf: &SpfResult,
    dkim: &DkimResult,
    dmarc: &DmarcResult,
    mx: &MxResult,
) -> u8 {
    score_breakdown(spf, dkim, dmarc, mx).health_score()
}

/// Alignment and obstruction policy
///
/// Stateless threshold rules. Every poll is judged on its own, so an
/// obstruction above the threshold re-alerts on every cycle.

use serde::Deserialize;
use std::fmt;

/// Thresholds used to grade a status read
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Both axis errors below this (exclusive) grade as OK
    pub alignment_ok_deg: f64,
    /// Both axis errors below this (exclusive) grade as MARGINAL
    pub alignment_marginal_deg: f64,
    /// Obstruction above this percentage (exclusive) raises an alert
    pub obstruction_alert_percent: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alignment_ok_deg: 2.0,
            alignment_marginal_deg: 5.0,
            obstruction_alert_percent: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentStatus {
    Ok,
    Marginal,
    NeedsAdjustment,
}

impl fmt::Display for AlignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentStatus::Ok => write!(f, "OKAY"),
            AlignmentStatus::Marginal => write!(f, "MARGINAL"),
            AlignmentStatus::NeedsAdjustment => write!(f, "NEEDS ADJUSTMENT"),
        }
    }
}

/// Raised when the obstruction percentage is above the alert threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstructionAlert {
    pub percent: f64,
}

impl ObstructionAlert {
    /// Event log text for this alert
    pub fn message(&self) -> String {
        format!("⚠ HIGH OBSTRUCTION: {:.2}%", self.percent)
    }
}

/// Result of running the policy over one derived model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub alignment: AlignmentStatus,
    pub obstruction: Option<ObstructionAlert>,
}

pub fn classify_alignment(tilt_deg: f64, rotation_deg: f64, thresholds: &Thresholds) -> AlignmentStatus {
    let within = |limit: f64| tilt_deg < limit && rotation_deg < limit;

    if within(thresholds.alignment_ok_deg) {
        AlignmentStatus::Ok
    } else if within(thresholds.alignment_marginal_deg) {
        AlignmentStatus::Marginal
    } else {
        AlignmentStatus::NeedsAdjustment
    }
}

pub fn obstruction_alert(percent: f64, thresholds: &Thresholds) -> Option<ObstructionAlert> {
    (percent > thresholds.obstruction_alert_percent).then_some(ObstructionAlert { percent })
}

/// Grade tilt/rotation error magnitudes and the obstruction percentage
pub fn classify(
    tilt_deg: f64,
    rotation_deg: f64,
    obstruction_percent: f64,
    thresholds: &Thresholds,
) -> Assessment {
    Assessment {
        alignment: classify_alignment(tilt_deg, rotation_deg, thresholds),
        obstruction: obstruction_alert(obstruction_percent, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_tiers() {
        let t = Thresholds::default();
        assert_eq!(classify_alignment(1.9, 1.9, &t), AlignmentStatus::Ok);
        assert_eq!(classify_alignment(0.0, 0.0, &t), AlignmentStatus::Ok);
        assert_eq!(classify_alignment(2.0, 1.0, &t), AlignmentStatus::Marginal);
        assert_eq!(classify_alignment(1.0, 4.99, &t), AlignmentStatus::Marginal);
        assert_eq!(classify_alignment(5.0, 0.0, &t), AlignmentStatus::NeedsAdjustment);
        assert_eq!(classify_alignment(0.0, 12.0, &t), AlignmentStatus::NeedsAdjustment);
    }

    #[test]
    fn test_alignment_grid_matches_rule() {
        let t = Thresholds::default();
        for tilt in [0.0, 1.5, 1.99, 2.0, 3.0, 4.99, 5.0, 8.0] {
            for rot in [0.0, 1.5, 1.99, 2.0, 3.0, 4.99, 5.0, 8.0] {
                let expected = if tilt < 2.0 && rot < 2.0 {
                    AlignmentStatus::Ok
                } else if tilt < 5.0 && rot < 5.0 {
                    AlignmentStatus::Marginal
                } else {
                    AlignmentStatus::NeedsAdjustment
                };
                assert_eq!(classify_alignment(tilt, rot, &t), expected, "tilt={} rot={}", tilt, rot);
            }
        }
    }

    #[test]
    fn test_obstruction_threshold_is_strict() {
        let t = Thresholds::default();
        assert!(obstruction_alert(3.0, &t).is_none());
        assert!(obstruction_alert(2.5, &t).is_none());
        assert!(obstruction_alert(3.0001, &t).is_some());
        assert_eq!(obstruction_alert(7.25, &t), Some(ObstructionAlert { percent: 7.25 }));
    }

    #[test]
    fn test_alert_message() {
        let alert = ObstructionAlert { percent: 4.199 };
        assert_eq!(alert.message(), "⚠ HIGH OBSTRUCTION: 4.20%");
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            alignment_ok_deg: 0.5,
            alignment_marginal_deg: 1.0,
            obstruction_alert_percent: 0.0,
        };
        let assessment = classify(0.75, 0.1, 0.01, &t);
        assert_eq!(assessment.alignment, AlignmentStatus::Marginal);
        assert!(assessment.obstruction.is_some());
    }
}

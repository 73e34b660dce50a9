//! Idle drift: a small periodic offset per card.

use super::transform::CardTransform;
use crate::options::DriftOptions;

/// Drift offset for card `index` at host time `t_ms`.
///
/// Each axis runs its own sine/cosine with a per-index phase so neighbouring
/// cards never move in lockstep. Time stays in `f64` because page-session
/// timestamps outgrow `f32` precision within minutes.
#[must_use]
pub fn drift_offset(
    options: &DriftOptions,
    t_ms: f64,
    index: usize,
) -> CardTransform {
    let i = index as f64;
    let x = (t_ms * options.speed_x + i * options.phase_x).sin();
    let y = (t_ms * options.speed_y + i * options.phase_y).cos();
    let rot = (t_ms * options.speed_rot + i * options.phase_rot).sin();
    CardTransform::new(
        x as f32 * options.amplitude_x,
        y as f32 * options.amplitude_y,
        rot as f32 * options.amplitude_rot,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_phase_only() {
        let opts = DriftOptions::default();
        let d0 = drift_offset(&opts, 0.0, 0);
        // sin(0) = 0, cos(0) = 1
        assert!(d0.tx().abs() < 1e-6);
        assert!((d0.ty() - 6.0).abs() < 1e-6);
        assert!(d0.rot_deg.abs() < 1e-6);

        let d1 = drift_offset(&opts, 0.0, 1);
        assert!((d1.tx() - 0.9_f32.sin() * 6.0).abs() < 1e-5);
        assert!((d1.ty() - 1.1_f32.cos() * 6.0).abs() < 1e-5);
        assert!((d1.rot_deg - 0.7_f32.sin() * 0.8).abs() < 1e-5);
    }

    #[test]
    fn stays_within_amplitude() {
        let opts = DriftOptions::default();
        for step in 0..500 {
            let t = f64::from(step) * 997.0;
            for index in 0..5 {
                let d = drift_offset(&opts, t, index);
                assert!(d.tx().abs() <= opts.amplitude_x + 1e-4);
                assert!(d.ty().abs() <= opts.amplitude_y + 1e-4);
                assert!(d.rot_deg.abs() <= opts.amplitude_rot + 1e-4);
            }
        }
    }

    #[test]
    fn large_timestamps_stay_smooth() {
        // Hours into a session, consecutive frames still differ only slightly.
        let opts = DriftOptions::default();
        let t = 3.6e6 * 5.0;
        let a = drift_offset(&opts, t, 2);
        let b = drift_offset(&opts, t + 16.7, 2);
        assert!((a.tx() - b.tx()).abs() < 0.05);
    }
}

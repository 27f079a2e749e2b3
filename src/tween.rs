// Eased scalar animation used for the camera zoom.
use bevy::math::curve::{Curve, easing::EaseFunction};

/// Interpolates a single value from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
}

impl Tween {
    /// A finished tween resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
            ease: EaseFunction::Linear,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn sample(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.ease.sample_clamped(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn tick(&mut self, delta_secs: f32) -> f32 {
        self.elapsed = (self.elapsed + delta_secs).min(self.duration);
        self.sample()
    }

    /// Heads for `to` from wherever the tween currently is.
    ///
    /// Retargeting to the current target is a no-op, so calling this every
    /// frame does not restart the curve.
    pub fn retarget(&mut self, to: f32, duration: f32, ease: EaseFunction) {
        if to == self.to {
            return;
        }
        self.from = self.sample();
        self.to = to;
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
        self.ease = ease;
    }
}

/// Frame-rate independent exponential ease towards `target`.
///
/// `factor` is the fraction of the gap closed per 60 Hz frame.
pub fn ease_towards(current: f32, target: f32, factor: f32, delta_secs: f32) -> f32 {
    let k = 1.0 - (1.0 - factor).powf(delta_secs * 60.0);
    current + (target - current) * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_tween_holds_its_value() {
        let mut tween = Tween::settled(5.0);
        assert!(tween.is_finished());
        assert_eq!(tween.tick(0.5), 5.0);
    }

    #[test]
    fn tween_hits_both_endpoints() {
        let mut tween = Tween::settled(5.0);
        tween.retarget(1.8, 1.2, EaseFunction::CubicInOut);
        assert_eq!(tween.sample(), 5.0);
        let halfway = tween.tick(0.6);
        assert!(halfway < 5.0 && halfway > 1.8);
        assert_eq!(tween.tick(10.0), 1.8);
        assert!(tween.is_finished());
    }

    #[test]
    fn retarget_starts_from_the_current_value() {
        let mut tween = Tween::settled(5.0);
        tween.retarget(1.8, 1.0, EaseFunction::Linear);
        let mid = tween.tick(0.5);
        tween.retarget(5.0, 1.0, EaseFunction::Linear);
        assert!((tween.sample() - mid).abs() < 1e-5);
        assert_eq!(tween.target(), 5.0);
    }

    #[test]
    fn retarget_to_same_target_keeps_progress() {
        let mut tween = Tween::settled(0.0);
        tween.retarget(1.0, 1.0, EaseFunction::Linear);
        tween.tick(0.5);
        tween.retarget(1.0, 1.0, EaseFunction::Linear);
        assert!((tween.sample() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn ease_matches_factor_at_sixty_hertz() {
        let next = ease_towards(0.0, 1.0, 0.05, 1.0 / 60.0);
        assert!((next - 0.05).abs() < 1e-5);
    }

    #[test]
    fn ease_converges_regardless_of_frame_rate() {
        let mut fast = 0.0;
        for _ in 0..240 {
            fast = ease_towards(fast, 1.0, 0.05, 1.0 / 120.0);
        }
        let mut slow = 0.0;
        for _ in 0..60 {
            slow = ease_towards(slow, 1.0, 0.05, 1.0 / 30.0);
        }
        assert!((fast - slow).abs() < 1e-4);
        assert!(fast > 0.9);
    }
}

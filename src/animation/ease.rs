use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    #[default]
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`. `y` control points may overshoot.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Long exponential-style deceleration used for section entrances.
    pub const OUT_EXPO: Ease = Ease::CubicBezier {
        x1: 0.16,
        y1: 1.0,
        x2: 0.3,
        y2: 1.0,
    };

    /// Anticipate-then-overshoot curve used for badges and icons popping in.
    pub const BACK_IN_OUT: Ease = Ease::CubicBezier {
        x1: 0.68,
        y1: -0.55,
        x2: 0.265,
        y2: 1.55,
    };

    /// Softer deceleration used for card image zoom.
    pub const OUT_QUINT: Ease = Ease::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    };

    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> ScrollcueResult<Self> {
        let ease = Self::CubicBezier { x1, y1, x2, y2 };
        ease.validate()?;
        Ok(ease)
    }

    pub fn validate(self) -> ScrollcueResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ScrollcueError::animation(
                    "cubic_bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ScrollcueError::animation(
                    "cubic_bezier x control points must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Endpoints are exact: `apply(0) == 0` and `apply(1) == 1` for every curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Whether the curve stays inside `[0, 1]` and never reverses.
    pub fn is_monotonic(self) -> bool {
        match self {
            Self::CubicBezier { y1, y2, .. } => {
                (0.0..=1.0).contains(&y1) && (0.0..=1.0).contains(&y2)
            }
            _ => true,
        }
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    fn sample_curve(a1: f64, a2: f64, u: f64) -> f64 {
        let omu = 1.0 - u;
        3.0 * omu * omu * u * a1 + 3.0 * omu * u * u * a2 + u * u * u
    }
    fn sample_curve_derivative(a1: f64, a2: f64, u: f64) -> f64 {
        let omu = 1.0 - u;
        3.0 * omu * omu * a1 + 6.0 * omu * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
    }

    // Solve bx(u) = x, then return by(u). Newton first, bisection if it stalls.
    let mut u = x;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, u) - x;
        if err.abs() < 1e-9 {
            return sample_curve(y1, y2, u);
        }
        let d = sample_curve_derivative(x1, x2, u);
        if d.abs() < 1e-7 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    u = x;
    for _ in 0..48 {
        let x_u = sample_curve(x1, x2, u);
        if (x_u - x).abs() < 1e-9 {
            break;
        }
        if x_u < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, u)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

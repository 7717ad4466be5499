// Easing curves - progress shaping for tweens
use std::f32::consts::{PI, TAU};
use std::str::FromStr;

use bevy::log::warn;
use thiserror::Error;

/// Maps elapsed-time fraction (0..=1) to progress fraction.
/// Every curve hits 0 at 0 and 1 at 1; back/elastic overshoot in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    SineInOut,
    /// `powerN.out`: 1 - (1 - p)^(N + 1)
    PowerOut(u8),
    BackOut(f32),
    ElasticOut { amplitude: f32, period: f32 },
    /// CSS cubic-bezier(x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::PowerOut(1)
    }
}

impl Easing {
    /// CSS `ease-out`
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);

    /// Curve for a configured name. An unknown name logs a warning and falls
    /// back to the default curve.
    pub fn named(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: EasingParseError| {
            warn!("{}, using the default curve", err);
            Easing::default()
        })
    }

    pub fn elastic_out(amplitude: f32, period: f32) -> Self {
        Easing::ElasticOut { amplitude, period }
    }

    pub fn apply(&self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        if p >= 1.0 {
            return 1.0;
        }
        if p <= 0.0 {
            return 0.0;
        }

        match *self {
            Easing::Linear => p,
            Easing::SineInOut => -((PI * p).cos() - 1.0) / 2.0,
            Easing::PowerOut(power) => 1.0 - (1.0 - p).powi(power as i32 + 1),
            Easing::BackOut(overshoot) => {
                let q = p - 1.0;
                q * q * ((overshoot + 1.0) * q + overshoot) + 1.0
            }
            Easing::ElasticOut { amplitude, period } => elastic_out(p, amplitude, period),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(p, x1, y1, x2, y2),
        }
    }
}

fn elastic_out(p: f32, amplitude: f32, period: f32) -> f32 {
    let a = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let period = period / amplitude.clamp(f32::EPSILON, 1.0);
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * p) * ((p - shift) * TAU / period).sin() + 1.0
}

fn bezier_axis(t: f32, c1: f32, c2: f32) -> f32 {
    // B(t) with P0 = 0 and P3 = 1
    let u = 1.0 - t;
    3.0 * u * u * t * c1 + 3.0 * u * t * t * c2 + t * t * t
}

fn bezier_axis_slope(t: f32, c1: f32, c2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * c1 + 6.0 * u * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton first, bisection when the slope flattens out
    let mut t = x;
    for _ in 0..8 {
        let error = bezier_axis(t, x1, x2) - x;
        if error.abs() < 1e-6 {
            return bezier_axis(t, y1, y2);
        }
        let slope = bezier_axis_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..32 {
        let value = bezier_axis(t, x1, x2);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    bezier_axis(t, y1, y2)
}

#[derive(Debug, Error, PartialEq)]
pub enum EasingParseError {
    #[error("unknown easing `{0}`")]
    Unknown(String),
    #[error("bad easing parameter `{param}` in `{name}`")]
    BadParameter { name: String, param: String },
}

fn parse_params(name: &str, raw: &str) -> Result<Vec<f32>, EasingParseError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>().map_err(|_| EasingParseError::BadParameter {
                name: name.to_string(),
                param: s.to_string(),
            })
        })
        .collect()
}

impl FromStr for Easing {
    type Err = EasingParseError;

    /// Accepts the dotted tween names (`power2.out`, `back.out(1.7)`,
    /// `elastic.out(1, 0.5)`, `sine.inOut`, `none`) and the CSS keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, params) = match s.find('(') {
            Some(open) if s.ends_with(')') => {
                let name = &s[..open];
                (name, parse_params(name, &s[open + 1..s.len() - 1])?)
            }
            _ => (s, Vec::new()),
        };

        let easing = match name {
            "none" | "linear" => Easing::Linear,
            "sine.inOut" => Easing::SineInOut,
            "ease" => Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
            "ease-in" => Easing::CubicBezier(0.42, 0.0, 1.0, 1.0),
            "ease-out" => Easing::EASE_OUT,
            "ease-in-out" => Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
            "back.out" => Easing::BackOut(params.first().copied().unwrap_or(1.70158)),
            "elastic.out" => Easing::ElasticOut {
                amplitude: params.first().copied().unwrap_or(1.0),
                period: params.get(1).copied().unwrap_or(0.3),
            },
            _ => {
                let power = name
                    .strip_prefix("power")
                    .and_then(|rest| rest.strip_suffix(".out"))
                    .and_then(|n| n.parse::<u8>().ok());
                match power {
                    Some(n) if n <= 4 => Easing::PowerOut(n),
                    _ => return Err(EasingParseError::Unknown(s.to_string())),
                }
            }
        };
        Ok(easing)
    }
}

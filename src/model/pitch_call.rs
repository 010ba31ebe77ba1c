use std::fmt;

/// Half-width of home plate plus a little, inside which a pitch is a clear strike (ft)
const FULL_CREDIT_HALF_WIDTH: f64 = 0.75;

/// Outer horizontal bound of the margin-of-error band (ft)
const HALF_CREDIT_HALF_WIDTH: f64 = 0.91;

/// Radius of a baseball (ft)
const BALL_RADIUS: f64 = 0.12;

/// Tracking tolerance added on top of the ball radius (ft)
const MEASUREMENT_MARGIN: f64 = 0.08;

/// Expected umpire call for a single pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Ball,
    Strike,
    MarginOfError,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Ball => write!(f, "Ball"),
            Call::Strike => write!(f, "Strike"),
            Call::MarginOfError => write!(f, "MOE"),
        }
    }
}

/// Classify a pitch from its location and the batter's strike zone
///
/// `px` is the horizontal distance from the centre of the plate and `pz` the
/// height above the ground, both in feet. Each axis awards full credit when
/// clearly inside the zone and half credit inside the tolerance band; a pitch
/// outside the band on either axis is a ball. Horizontal is tested first.
pub fn expected_call(px: f64, pz: f64, sz_top: f64, sz_bottom: f64) -> Call {
    let horizontal = if px.abs() <= FULL_CREDIT_HALF_WIDTH {
        1.0
    } else if px.abs() <= HALF_CREDIT_HALF_WIDTH {
        0.5
    } else {
        return Call::Ball;
    };

    let tolerance = BALL_RADIUS + MEASUREMENT_MARGIN;
    let vertical = if pz >= sz_bottom && pz <= sz_top {
        1.0
    } else if pz >= sz_bottom - tolerance && pz <= sz_top + tolerance {
        0.5
    } else {
        return Call::Ball;
    };

    if horizontal + vertical == 2.0 {
        Call::Strike
    } else {
        Call::MarginOfError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = 3.5;
    const BOTTOM: f64 = 1.5;

    #[test]
    fn test_center_pitch_is_strike() {
        assert_eq!(expected_call(0.0, 2.5, TOP, BOTTOM), Call::Strike);
    }

    #[test]
    fn test_wide_pitch_is_ball() {
        assert_eq!(expected_call(1.0, 2.5, TOP, BOTTOM), Call::Ball);
        assert_eq!(expected_call(-1.0, 2.5, TOP, BOTTOM), Call::Ball);
    }

    #[test]
    fn test_edge_pitch_is_margin_of_error() {
        assert_eq!(expected_call(0.8, 2.5, TOP, BOTTOM), Call::MarginOfError);
        assert_eq!(expected_call(0.0, 3.6, TOP, BOTTOM), Call::MarginOfError);
        assert_eq!(expected_call(0.0, 1.35, TOP, BOTTOM), Call::MarginOfError);
    }

    #[test]
    fn test_both_axes_on_edge_is_margin_of_error() {
        assert_eq!(expected_call(0.85, 3.65, TOP, BOTTOM), Call::MarginOfError);
    }

    #[test]
    fn test_high_pitch_is_ball() {
        assert_eq!(expected_call(0.0, 3.8, TOP, BOTTOM), Call::Ball);
        assert_eq!(expected_call(0.0, 0.5, TOP, BOTTOM), Call::Ball);
    }

    #[test]
    fn test_horizontal_short_circuit_ignores_height() {
        for pz in [-1.0, 0.0, 1.5, 2.5, 3.5, 10.0] {
            for px in [0.92, 1.5, -0.95, 4.0] {
                assert_eq!(expected_call(px, pz, TOP, BOTTOM), Call::Ball);
            }
        }
    }

    #[test]
    fn test_inside_zone_is_always_strike() {
        let zones = [(3.5, 1.5), (3.2, 1.6), (4.0, 1.8)];
        for (top, bottom) in zones {
            let mut px = -0.75;
            while px <= 0.75 {
                let mut pz = bottom;
                while pz <= top {
                    assert_eq!(expected_call(px, pz, top, bottom), Call::Strike);
                    pz += 0.1;
                }
                px += 0.05;
            }
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(expected_call(0.75, TOP, TOP, BOTTOM), Call::Strike);
        assert_eq!(expected_call(-0.75, BOTTOM, TOP, BOTTOM), Call::Strike);
        assert_eq!(expected_call(0.91, 2.5, TOP, BOTTOM), Call::MarginOfError);
    }

    #[test]
    fn test_call_display() {
        assert_eq!(Call::Ball.to_string(), "Ball");
        assert_eq!(Call::Strike.to_string(), "Strike");
        assert_eq!(Call::MarginOfError.to_string(), "MOE");
    }
}

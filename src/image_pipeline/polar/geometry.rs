use std::f64::consts::TAU;

/// Converts polar coordinates around `(cx, cy)` to pixel coordinates.
///
/// `phi = 0` points along +x, increasing `phi` turns towards +y.
#[inline]
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, phi: f64) -> (f64, f64) {
    (cx + r * phi.cos(), cy + r * phi.sin())
}

/// Angle of ray `n`. Decreases with `n`, matching the rotor's spin direction.
#[inline]
pub fn ray_angle(n: usize, n_rays: usize) -> f64 {
    TAU * (n_rays - n) as f64 / n_rays as f64
}

/// Sample radius of LED `k` on a ring of `leds` LEDs spanning `diameter` pixels.
///
/// The outermost LED of the half ring lands exactly on the disc edge,
/// `(diameter - 1) / 2`.
#[inline]
pub fn led_radius(k: usize, diameter: usize, leds: usize) -> f64 {
    let sca = (diameter as f64 - 1.0) / (leds as f64 - 1.0);
    (0.5 + k as f64) * sca
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn clock_positions() {
        assert!(close(polar_to_cartesian(10.0, 10.0, 5.0, 0.0), (15.0, 10.0)));
        assert!(close(polar_to_cartesian(10.0, 10.0, 5.0, FRAC_PI_2), (10.0, 15.0)));
        assert!(close(polar_to_cartesian(10.0, 10.0, 5.0, PI), (5.0, 10.0)));
        assert!(close(polar_to_cartesian(10.0, 10.0, 0.0, 1.234), (10.0, 10.0)));
    }

    #[test]
    fn ray_angle_runs_backwards() {
        assert!((ray_angle(0, 2700) - TAU).abs() < 1e-12);
        assert!((ray_angle(675, 2700) - 1.5 * PI).abs() < 1e-12);
        assert!((ray_angle(1350, 2700) - PI).abs() < 1e-12);
        assert!(ray_angle(2699, 2700) > 0.0);
        assert!(ray_angle(1, 2700) < ray_angle(0, 2700));
    }

    #[test]
    fn outermost_led_reaches_disc_edge() {
        assert!((led_radius(111, 360, 224) - 179.5).abs() < 1e-9);
        assert!((led_radius(0, 360, 224) - 0.5 * 359.0 / 223.0).abs() < 1e-12);
    }
}

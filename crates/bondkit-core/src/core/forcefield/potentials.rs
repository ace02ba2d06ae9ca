use nalgebra::Vector3;

/// Harmonic bond stretch, `E = k/2 (r - r0)^2`.
///
/// Returns the energy together with `dE/dr`.
#[inline]
pub fn harmonic_bond(dist: f64, length: f64, k: f64) -> (f64, f64) {
    let delta = dist - length;
    let d_energy = k * delta;
    (0.5 * d_energy * delta, d_energy)
}

/// Wraps a displacement into the nearest periodic image of a rectangular box.
#[inline]
pub fn minimum_image(delta: Vector3<f64>, box_lengths: &Vector3<f64>) -> Vector3<f64> {
    delta.zip_map(box_lengths, |d, l| {
        if l > 0.0 { d - l * (d / l).round() } else { d }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn harmonic_bond_at_equilibrium_is_zero() {
        let (energy, d_energy) = harmonic_bond(0.15, 0.15, 300000.0);
        assert!(f64_approx_equal(energy, 0.0));
        assert!(f64_approx_equal(d_energy, 0.0));
    }

    #[test]
    fn harmonic_bond_stretched_has_positive_energy_and_derivative() {
        let (energy, d_energy) = harmonic_bond(1.5, 1.0, 4.0);
        assert!(f64_approx_equal(energy, 0.5));
        assert!(f64_approx_equal(d_energy, 2.0));
    }

    #[test]
    fn harmonic_bond_compressed_has_negative_derivative() {
        let (energy, d_energy) = harmonic_bond(0.5, 1.0, 4.0);
        assert!(f64_approx_equal(energy, 0.5));
        assert!(f64_approx_equal(d_energy, -2.0));
    }

    #[test]
    fn harmonic_bond_with_zero_constant_is_flat() {
        let (energy, d_energy) = harmonic_bond(3.0, 1.0, 0.0);
        assert_eq!(energy, 0.0);
        assert_eq!(d_energy, 0.0);
    }

    #[test]
    fn minimum_image_wraps_into_half_box() {
        let wrapped = minimum_image(Vector3::new(2.6, -2.6, 0.4), &Vector3::new(3.0, 3.0, 3.0));
        assert!(f64_approx_equal(wrapped.x, -0.4));
        assert!(f64_approx_equal(wrapped.y, 0.4));
        assert!(f64_approx_equal(wrapped.z, 0.4));
    }

    #[test]
    fn minimum_image_ignores_non_positive_box_lengths() {
        let wrapped = minimum_image(Vector3::new(5.0, 5.0, 5.0), &Vector3::new(0.0, 2.0, -1.0));
        assert!(f64_approx_equal(wrapped.x, 5.0));
        assert!(f64_approx_equal(wrapped.y, -1.0));
        assert!(f64_approx_equal(wrapped.z, 5.0));
    }
}

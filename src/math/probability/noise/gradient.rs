/// The twelve cube-edge midpoint directions.
///
/// Shared by every field regardless of seed. The 2D sampler only reads the
/// first two components.
pub const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

pub const GRADIENT_COUNT: usize = GRAD3.len();

#[inline(always)]
pub(crate) fn dot2(gradient: &[i8; 3], x: f64, y: f64) -> f64 {
    f64::from(gradient[0]) * x + f64::from(gradient[1]) * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradients_are_edge_midpoints() {
        for g in GRAD3 {
            // Genau eine Komponente ist null, die anderen sind ±1
            assert_eq!(g.iter().filter(|c| **c == 0).count(), 1, "{:?}", g);
            assert!(g.iter().all(|c| c.abs() <= 1));
        }
    }

    #[test]
    fn test_dot2_ignores_third_component() {
        assert_eq!(dot2(&GRAD3[4], 2.0, 3.0), 2.0);
        assert_eq!(dot2(&GRAD3[3], 2.0, 3.0), -5.0);
    }
}

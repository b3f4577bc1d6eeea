//! Printed critical values at α = 0.05.

/// Two-sided Student's t, indexed by `df - 1` for `df` in `1..=30`.
pub(super) const STUDENT: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228,
    2.201, 2.179, 2.160, 2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086,
    2.080, 2.074, 2.069, 2.064, 2.060, 2.056, 2.052, 2.048, 2.045, 2.042,
];

/// Upper Fisher-Snedecor quantile, indexed by `[df2 - 1][df1 - 1]`.
pub(super) const FISHER: [[f64; 10]; 10] = [
    [161.4, 199.5, 215.7, 224.6, 230.2, 234.0, 236.8, 238.9, 240.5, 241.9],
    [18.51, 19.00, 19.16, 19.25, 19.30, 19.33, 19.35, 19.37, 19.38, 19.40],
    [10.13, 9.55, 9.28, 9.12, 9.01, 8.94, 8.89, 8.85, 8.81, 8.79],
    [7.71, 6.94, 6.59, 6.39, 6.26, 6.16, 6.09, 6.04, 6.00, 5.96],
    [6.61, 5.79, 5.41, 5.19, 5.05, 4.95, 4.88, 4.82, 4.77, 4.74],
    [5.99, 5.14, 4.76, 4.53, 4.39, 4.28, 4.21, 4.15, 4.10, 4.06],
    [5.59, 4.74, 4.35, 4.12, 3.97, 3.87, 3.79, 3.73, 3.68, 3.64],
    [5.32, 4.46, 4.07, 3.84, 3.69, 3.58, 3.50, 3.44, 3.39, 3.35],
    [5.12, 4.26, 3.86, 3.63, 3.48, 3.37, 3.29, 3.23, 3.18, 3.14],
    [4.96, 4.10, 3.71, 3.48, 3.33, 3.22, 3.14, 3.07, 3.02, 2.98],
];

/// Cochran's G, indexed by `[k - 2][df - 1]` for `k` in `2..=4` groups and
/// `df = n - 1` in `1..=10`.
pub(super) const COCHRAN: [[f64; 10]; 3] = [
    [0.9985, 0.9750, 0.9392, 0.9057, 0.8772, 0.8534, 0.8332, 0.8159, 0.8010, 0.7880],
    [0.9669, 0.8709, 0.7977, 0.7457, 0.7071, 0.6771, 0.6530, 0.6333, 0.6167, 0.6025],
    [0.9065, 0.7679, 0.6841, 0.6287, 0.5892, 0.5598, 0.5365, 0.5175, 0.5017, 0.4884],
];

/// Upper chi-squared quantile, indexed by `df - 1` for `df` in `1..=10`.
pub(super) const CHI_SQUARED: [f64; 10] = [
    3.841, 5.991, 7.815, 9.488, 11.070, 12.592, 14.067, 15.507, 16.919, 18.307,
];

/// Maximum normed deviation `(n, u)`, ascending in `n`.
pub(super) const MAX_NORMED_DEVIATION: [(usize, f64); 24] = [
    (5, 2.75), (6, 2.82), (7, 2.87), (8, 2.92), (9, 2.96), (10, 2.99),
    (11, 3.03), (12, 3.06), (13, 3.09), (14, 3.12), (15, 3.14),
    (16, 3.17), (17, 3.19), (18, 3.21), (19, 3.23), (20, 3.25),
    (25, 3.31), (30, 3.35), (35, 3.39), (40, 3.42), (45, 3.45),
    (50, 3.48), (100, 3.60), (200, 3.72),
];

/// Two-sided standard normal quantile.
pub(super) const NORMAL_TWO_SIDED: f64 = 1.96;

//! Critical values of Student's t distribution, three decimals.
//!
//! Each table holds one value per entry of [`TABLE_ROWS`](super::TABLE_ROWS), in the same order.

use super::TABLE_LEN;

/// One-tailed, alpha = .05
pub(super) static DIRECTIONAL_05: [f64; TABLE_LEN] = [
    6.314, 2.920, 2.353, 2.132, 2.015, 1.943, 1.895, 1.860, 1.833, 1.812, // 1-10
    1.796, 1.782, 1.771, 1.761, 1.753, 1.746, 1.740, 1.734, 1.729, 1.725, // 11-20
    1.721, 1.717, 1.714, 1.711, 1.708, 1.706, 1.703, 1.701, 1.699, 1.697, // 21-30
    1.684, 1.671, 1.658, 1.645, // 40, 60, 120, inf
];

/// One-tailed, alpha = .01
pub(super) static DIRECTIONAL_01: [f64; TABLE_LEN] = [
    31.821, 6.965, 4.541, 3.747, 3.365, 3.143, 2.998, 2.896, 2.821, 2.764,
    2.718, 2.681, 2.650, 2.624, 2.602, 2.583, 2.567, 2.552, 2.539, 2.528,
    2.518, 2.508, 2.500, 2.492, 2.485, 2.479, 2.473, 2.467, 2.462, 2.457,
    2.423, 2.390, 2.358, 2.326,
];

/// One-tailed, alpha = .001
pub(super) static DIRECTIONAL_001: [f64; TABLE_LEN] = [
    318.309, 22.327, 10.215, 7.173, 5.893, 5.208, 4.785, 4.501, 4.297, 4.144,
    4.025, 3.930, 3.852, 3.787, 3.733, 3.686, 3.646, 3.610, 3.579, 3.552,
    3.527, 3.505, 3.485, 3.467, 3.450, 3.435, 3.421, 3.408, 3.396, 3.385,
    3.307, 3.232, 3.160, 3.090,
];

/// Two-tailed, alpha = .05
pub(super) static NON_DIRECTIONAL_05: [f64; TABLE_LEN] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228,
    2.201, 2.179, 2.160, 2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086,
    2.080, 2.074, 2.069, 2.064, 2.060, 2.056, 2.052, 2.048, 2.045, 2.042,
    2.021, 2.000, 1.980, 1.960,
];

/// Two-tailed, alpha = .01
pub(super) static NON_DIRECTIONAL_01: [f64; TABLE_LEN] = [
    63.657, 9.925, 5.841, 4.604, 4.032, 3.707, 3.499, 3.355, 3.250, 3.169,
    3.106, 3.055, 3.012, 2.977, 2.947, 2.921, 2.898, 2.878, 2.861, 2.845,
    2.831, 2.819, 2.807, 2.797, 2.787, 2.779, 2.771, 2.763, 2.756, 2.750,
    2.704, 2.660, 2.617, 2.576,
];

/// Two-tailed, alpha = .001
pub(super) static NON_DIRECTIONAL_001: [f64; TABLE_LEN] = [
    636.619, 31.599, 12.924, 8.610, 6.869, 5.959, 5.408, 5.041, 4.781, 4.587,
    4.437, 4.318, 4.221, 4.140, 4.073, 4.015, 3.965, 3.922, 3.883, 3.850,
    3.819, 3.792, 3.768, 3.745, 3.725, 3.707, 3.690, 3.674, 3.659, 3.646,
    3.551, 3.460, 3.373, 3.291,
];

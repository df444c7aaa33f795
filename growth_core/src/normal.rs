//! Standard normal distribution helpers.
//!
//! The CDF uses the five-term polynomial of Zelen & Severo
//! (Abramowitz & Stegun 26.2.17), absolute error below 7.5e-8. Published
//! growth-chart percentiles are computed with this exact polynomial, so it is
//! kept even though more precise methods exist.

const P: f64 = 0.2316419;
const B1: f64 = 0.3193815;
const B2: f64 = -0.3565638;
const B3: f64 = 1.781478;
const B4: f64 = -1.821256;
const B5: f64 = 1.330274;

/// 1/sqrt(2π), rounded as in the reference implementation of the polynomial
const INV_SQRT_2PI: f64 = 0.3989423;

/// Standard normal density φ(x)
pub fn standard_normal_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-x * x / 2.0).exp()
}

/// Standard normal cumulative distribution Φ(x)
pub fn standard_normal_cdf(x: f64) -> f64 {
    let ax = x.abs();
    let t = 1.0 / (1.0 + P * ax);
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let upper_tail = standard_normal_pdf(ax) * poly;

    if x >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Convert a Z-score to a percentile in [0, 100]
pub fn z_to_percentile(z: f64) -> f64 {
    standard_normal_cdf(z) * 100.0
}

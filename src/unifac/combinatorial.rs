//! Combinatorial (size and shape) contribution to the activity coefficients.
use ndarray::Array1;

/// Staverman-Guggenheim combinatorial term of the original UNIFAC method.
pub fn ln_gamma_unifac(q: &Array1<f64>, r: &Array1<f64>, x: &Array1<f64>) -> Array1<f64> {
    let v = r / x.dot(r);
    let f = q / x.dot(q);
    let v_f = &v / &f;
    1.0 - &v + v.mapv(f64::ln) - 5.0 * q * (1.0 - &v_f + v_f.mapv(f64::ln))
}

/// Combinatorial term of the modified UNIFAC (Dortmund) method.
///
/// The volume fraction in the first part is calculated from `r^(3/4)`.
pub fn ln_gamma_dortmund(q: &Array1<f64>, r: &Array1<f64>, x: &Array1<f64>) -> Array1<f64> {
    let r_p = r.mapv(|r| r.powf(0.75));
    let v_p = &r_p / x.dot(&r_p);
    let v = r / x.dot(r);
    let f = q / x.dot(q);
    let v_f = &v / &f;
    1.0 - &v_p + v_p.mapv(f64::ln) - 5.0 * q * (1.0 - &v_f + v_f.mapv(f64::ln))
}

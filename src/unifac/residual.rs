//! Residual (group interaction) contribution to the activity coefficients.
use ndarray::{Array1, Array2, Array3, ArrayView1, Axis, Zip};

/// `psi[(m, n)] = exp(-a_mn / T)`
pub fn psi_unifac(temperature: f64, interactions: &Array3<f64>) -> Array2<f64> {
    interactions
        .index_axis(Axis(2), 0)
        .mapv(|a| (-a / temperature).exp())
}

/// `psi[(m, n)] = exp(-(a_mn / T + b_mn + c_mn * T))`
pub fn psi_dortmund(temperature: f64, interactions: &Array3<f64>) -> Array2<f64> {
    Zip::from(interactions.index_axis(Axis(2), 0))
        .and(interactions.index_axis(Axis(2), 1))
        .and(interactions.index_axis(Axis(2), 2))
        .map_collect(|&a, &b, &c| (-(a / temperature + b + c * temperature)).exp())
}

/// Logarithmic group activity coefficients of a mixture of groups with
/// surface fractions `theta`.
pub fn ln_gamma_groups(
    q_group: &Array1<f64>,
    theta: ArrayView1<f64>,
    psi: &Array2<f64>,
) -> Array1<f64> {
    // sum1[k] = sum_m theta_m psi_mk
    let sum1 = theta.dot(psi);
    // sum2[k] = sum_m theta_m psi_km / sum1[m]
    let sum2 = psi.dot(&(&theta / &sum1));
    (1.0 - sum1.mapv(f64::ln) - sum2) * q_group
}

/// Logarithmic group activity coefficients in each pure chemical.
///
/// `chem_qfractions` contains the group surface fractions of one chemical
/// per row. `group_psi` must vanish for pairs of groups that never occur
/// together in a chemical. The resulting entries of groups absent from a
/// chemical are meaningless and have to be weighted with a zero count.
pub fn ln_gamma_groups_pure(
    q_group: &Array1<f64>,
    chem_qfractions: &Array2<f64>,
    group_psi: &Array2<f64>,
) -> Array2<f64> {
    let sum1 = chem_qfractions
        .dot(group_psi)
        .mapv_into(|s| if s == 0.0 { 1.0 } else { s });
    let sum2 = (chem_qfractions / &sum1).dot(&group_psi.t());
    (1.0 - sum1.mapv(f64::ln) - sum2) * q_group
}

/// Residual part of the logarithmic activity coefficients.
pub fn ln_gamma_residual(
    x: &Array1<f64>,
    chemgroups: &Array2<f64>,
    q_group: &Array1<f64>,
    chem_qfractions: &Array2<f64>,
    psi: &Array2<f64>,
    group_psi: &Array2<f64>,
) -> Array1<f64> {
    let weighted_counts = x.dot(chemgroups);
    let theta = q_group * &weighted_counts;
    let theta = &theta / theta.sum();
    let ln_gamma_mix = ln_gamma_groups(q_group, theta.view(), psi);
    let ln_gamma_pure = ln_gamma_groups_pure(q_group, chem_qfractions, group_psi);
    let ln_gamma = -ln_gamma_pure + &ln_gamma_mix;
    (ln_gamma * chemgroups).sum_axis(Axis(1))
}

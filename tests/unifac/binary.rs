use crate::chemicals;
use approx::assert_relative_eq;
use gc_activity::{ActivityCoefficients, ActivityResult, GroupActivityCoefficients, ParameterCache};
use ndarray::arr1;

#[test]
fn acetone_pentane() -> ActivityResult<()> {
    // Poling, Prausnitz, O'Connell: The Properties of Gases and Liquids, 5th ed., Example 8-12
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Acetone", "Pentane"])?, &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.047, 0.953]), 307.0)?;
    assert_relative_eq!(gamma[0], 4.99, max_relative = 1e-2);
    assert_relative_eq!(gamma[1], 1.005, max_relative = 1e-2);
    assert_relative_eq!(
        gamma,
        arr1(&[4.992034311484566, 1.0052602111878808]),
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn ethanol_water() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Ethanol", "Water"])?, &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.5, 0.5]), 298.15)?;
    assert_relative_eq!(
        gamma,
        arr1(&[1.203740793084845, 1.496744531490048]),
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn benzene_toluene() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Benzene", "Toluene"])?, &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.5, 0.5]), 350.0)?;
    assert_relative_eq!(
        gamma,
        arr1(&[0.9907571385836593, 0.9921862139459402]),
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn dortmund_ethanol_water() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let dortmund =
        GroupActivityCoefficients::dortmund(&chemicals(&["Ethanol", "Water"])?, &cache)?;
    let gamma = dortmund.activity_coefficients(&arr1(&[0.5, 0.5]), 298.15)?;
    assert_relative_eq!(
        gamma,
        arr1(&[1.2529635465293214, 1.4398163587783257]),
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn dortmund_ethanol_pentane() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let dortmund =
        GroupActivityCoefficients::dortmund(&chemicals(&["Ethanol", "Pentane"])?, &cache)?;
    let gamma = dortmund.activity_coefficients(&arr1(&[0.3, 0.7]), 330.0)?;
    assert_relative_eq!(
        gamma,
        arr1(&[2.569561335555146, 1.330152826168066]),
        max_relative = 1e-10
    );

    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Ethanol", "Pentane"])?, &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.3, 0.7]), 330.0)?;
    assert_relative_eq!(
        gamma,
        arr1(&[2.3897047748890543, 1.3281453627899862]),
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn ternary() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(
        &chemicals(&["Ethanol", "Water", "Pentane"])?,
        &cache,
    )?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.3, 0.5, 0.2]), 320.0)?;
    assert_relative_eq!(
        gamma,
        arr1(&[0.9958925150707222, 2.13148003497636, 8.31145049624358]),
        max_relative = 1e-10
    );
    Ok(())
}

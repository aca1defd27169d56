use crate::chemicals;
use approx::assert_relative_eq;
use gc_activity::{
    ActivityCoefficients, ActivityError, ActivityResult, GroupActivityCoefficients,
    IdealActivityCoefficients, ParameterCache,
};
use ndarray::arr1;
use std::sync::Arc;

#[test]
fn pure_chemicals_are_ideal() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    for substance in ["Water", "Ethanol", "Acetone", "Pentane", "Toluene"] {
        let unifac = GroupActivityCoefficients::unifac(&chemicals(&[substance])?, &cache)?;
        let gamma = unifac.activity_coefficients(&arr1(&[1.0]), 310.0)?;
        assert_relative_eq!(gamma[0], 1.0, max_relative = 1e-12);
    }
    for substance in ["Water", "Ethanol", "Pentane"] {
        let dortmund = GroupActivityCoefficients::dortmund(&chemicals(&[substance])?, &cache)?;
        let gamma = dortmund.activity_coefficients(&arr1(&[1.0]), 310.0)?;
        assert_relative_eq!(gamma[0], 1.0, max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn permutation() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let t = 320.0;
    let abc = chemicals(&["Ethanol", "Water", "Pentane"])?;
    let cab = chemicals(&["Pentane", "Ethanol", "Water"])?;
    for (m1, m2) in [
        (
            GroupActivityCoefficients::unifac(&abc, &cache)?,
            GroupActivityCoefficients::unifac(&cab, &cache)?,
        ),
        (
            GroupActivityCoefficients::dortmund(&abc, &cache)?,
            GroupActivityCoefficients::dortmund(&cab, &cache)?,
        ),
    ] {
        let g1 = m1.activity_coefficients(&arr1(&[0.3, 0.5, 0.2]), t)?;
        let g2 = m2.activity_coefficients(&arr1(&[0.2, 0.3, 0.5]), t)?;
        assert_relative_eq!(g1, arr1(&[g2[1], g2[2], g2[0]]), max_relative = 1e-12);
    }
    Ok(())
}

#[test]
fn cache_correctness() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let x = arr1(&[0.4, 0.6]);
    let records = chemicals(&["Water", "Ethanol"])?;
    let m1 = GroupActivityCoefficients::unifac(&records, &cache)?;
    let m2 = GroupActivityCoefficients::unifac(&chemicals(&["Water", "Ethanol"])?, &cache)?;
    assert!(Arc::ptr_eq(m1.parameters(), m2.parameters()));
    assert_eq!(
        m1.activity_coefficients(&x, 300.0)?,
        m2.activity_coefficients(&x, 300.0)?
    );

    let m3 = GroupActivityCoefficients::unifac(&[&records[1], &records[0]], &cache)?;
    assert!(!Arc::ptr_eq(m1.parameters(), m3.parameters()));
    assert_eq!(cache.len(), 2);
    let g1 = m1.activity_coefficients(&x, 300.0)?;
    let g3 = m3.activity_coefficients(&arr1(&[0.6, 0.4]), 300.0)?;
    assert_relative_eq!(g1, arr1(&[g3[1], g3[0]]), max_relative = 1e-12);

    // same chemicals with a different method
    GroupActivityCoefficients::dortmund(&chemicals(&["Water", "Ethanol"])?, &cache)?;
    assert_eq!(cache.len(), 3);
    assert_eq!((cache.hits(), cache.misses()), (1, 3));
    Ok(())
}

#[test]
fn zero_fraction() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Ethanol", "Water"])?, &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[1.0, 0.0]), 298.15)?;
    assert!(gamma.iter().all(|g| g.is_finite()));
    assert_relative_eq!(gamma, arr1(&[1.0, 2.66277152695855]), max_relative = 1e-10);

    let dortmund =
        GroupActivityCoefficients::dortmund(&chemicals(&["Ethanol", "Pentane"])?, &cache)?;
    let gamma = dortmund.activity_coefficients(&arr1(&[0.0, 1.0]), 298.15)?;
    assert_relative_eq!(gamma, arr1(&[60.00138707626598, 1.0]), max_relative = 1e-10);
    Ok(())
}

#[test]
fn missing_group_data() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let records = chemicals(&["Water", "NaCl"])?;
    let result = GroupActivityCoefficients::unifac(&records, &cache);
    assert!(matches!(
        result,
        Err(ActivityError::MissingGroupData { chemical, method })
            if chemical == "NaCl" && method == "UNIFAC"
    ));
    assert!(cache.is_empty());
    Ok(())
}

#[test]
fn groups_outside_the_bundled_tables() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let records = chemicals(&["Acetone", "Water"])?;
    assert!(matches!(
        GroupActivityCoefficients::dortmund(&records, &cache),
        Err(ActivityError::MissingParameters(_))
    ));
    assert!(cache.is_empty());
    Ok(())
}

#[test]
fn ideal() -> ActivityResult<()> {
    let ideal = IdealActivityCoefficients::new(&chemicals(&["Water", "NaCl"])?);
    assert_eq!(ideal.components(), 2);
    assert_eq!(
        ideal.activity_coefficients(&arr1(&[0.0, 0.0]), 1e-300)?,
        arr1(&[1.0, 1.0])
    );
    Ok(())
}

#[test]
fn display() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let unifac = GroupActivityCoefficients::unifac(&chemicals(&["Water", "Ethanol"])?, &cache)?;
    assert_eq!(unifac.to_string(), "UNIFACActivityCoefficients([Water, Ethanol])");
    Ok(())
}

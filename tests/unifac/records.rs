use crate::chemicals;
use approx::assert_relative_eq;
use gc_activity::parameter::{ChemicalRecord, IdentifierOption, InteractionRecord, SubgroupRecord};
use gc_activity::{
    ActivityCoefficients, ActivityError, ActivityResult, Contributions, GroupActivityCoefficients,
    GroupTables, Method, ParameterCache,
};
use ndarray::arr1;
use std::sync::Arc;

#[test]
fn from_json_keeps_order() -> ActivityResult<()> {
    let records = ChemicalRecord::from_json(
        &["n-pentane", "water", "ethanol"],
        "parameters/unifac/chemicals.json",
        IdentifierOption::Name,
    )?;
    let ids: Vec<_> = records.iter().map(|r| r.identifier.id.as_str()).collect();
    assert_eq!(ids, vec!["Pentane", "Water", "Ethanol"]);
    Ok(())
}

#[test]
fn from_json_errors() {
    assert!(matches!(
        chemicals(&["Water", "Mercury"]),
        Err(ActivityError::ComponentsNotFound(_))
    ));
    assert!(matches!(
        chemicals(&["Water", "Water"]),
        Err(ActivityError::IncompatibleParameters(_))
    ));
    assert!(matches!(
        ChemicalRecord::from_json(
            &["Water"],
            "parameters/unifac/missing.json",
            IdentifierOption::Id
        ),
        Err(ActivityError::FileIO(_))
    ));
}

#[test]
fn custom_tables() -> ActivityResult<()> {
    let tables = GroupTables::from_json(
        Method::Unifac,
        "parameters/unifac/subgroups.json",
        "parameters/unifac/interactions.json",
    )?;
    assert_eq!(tables.subgroups.len(), 3);
    let cache = ParameterCache::new();
    let records = chemicals(&["Acetone", "Pentane"])?;
    let unifac = GroupActivityCoefficients::new(&records, Arc::new(tables), &cache)?;
    let gamma = unifac.activity_coefficients(&arr1(&[0.047, 0.953]), 307.0)?;
    assert_relative_eq!(
        gamma,
        arr1(&[4.992034311484566, 1.0052602111878808]),
        max_relative = 1e-10
    );

    // water is not part of the custom tables
    let records = chemicals(&["Acetone", "Water"])?;
    let tables = Arc::new(GroupTables::from_json(
        Method::Unifac,
        "parameters/unifac/subgroups.json",
        "parameters/unifac/interactions.json",
    )?);
    assert!(matches!(
        GroupActivityCoefficients::new(&records, tables, &ParameterCache::new()),
        Err(ActivityError::MissingParameters(_))
    ));
    Ok(())
}

#[test]
fn missing_interactions_are_reported() -> ActivityResult<()> {
    let subgroups = SubgroupRecord::from_json("parameters/unifac/subgroups.json")?;
    let tables = Arc::new(GroupTables::new(Method::Unifac, subgroups, vec![]));
    let cache = ParameterCache::new();
    let records = chemicals(&["Acetone", "Pentane"])?;
    let unifac = GroupActivityCoefficients::new(&records, tables, &cache)?;
    assert_eq!(unifac.parameters().missing_interactions(), &[(1, 9), (9, 1)]);
    let x = arr1(&[0.047, 0.953]);
    let residual = unifac.ln_activity_coefficients(&x, 307.0, Contributions::Residual)?;
    assert_relative_eq!(residual, arr1(&[0.0, 0.0]), epsilon = 1e-14);
    Ok(())
}

#[test]
fn tables_are_not_mixed_up_in_cache() -> ActivityResult<()> {
    let cache = ParameterCache::new();
    let records = chemicals(&["Acetone", "Pentane"])?;
    let x = arr1(&[0.047, 0.953]);
    let bundled = GroupActivityCoefficients::unifac(&records, &cache)?;

    let subgroups = SubgroupRecord::from_json("parameters/unifac/subgroups.json")?;
    let interactions = vec![
        InteractionRecord::new(1, 9, 0.0, 0.0, 0.0),
        InteractionRecord::new(9, 1, 0.0, 0.0, 0.0),
    ];
    let tables = Arc::new(GroupTables::new(Method::Unifac, subgroups, interactions));
    let custom = GroupActivityCoefficients::new(&records, tables.clone(), &cache)?;
    assert!(!Arc::ptr_eq(bundled.parameters(), custom.parameters()));
    assert_eq!(cache.len(), 2);
    assert_relative_eq!(
        bundled.activity_coefficients(&x, 307.0)?,
        arr1(&[4.992034311484566, 1.0052602111878808]),
        max_relative = 1e-10
    );
    assert_relative_eq!(
        custom.activity_coefficients(&x, 307.0)?,
        arr1(&[0.9486481941330566, 0.9998982357658336]),
        max_relative = 1e-10
    );

    // subsets keep using the tables of the model
    let acetone = custom.subset(&[0], &cache)?;
    assert_eq!(acetone.parameters().groups(), 2);
    assert!(Arc::ptr_eq(
        acetone.parameters(),
        GroupActivityCoefficients::new(&records[..1], tables, &cache)?.parameters()
    ));
    assert_eq!(cache.len(), 3);
    Ok(())
}

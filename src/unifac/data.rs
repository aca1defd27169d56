//! Bundled reference data.
//!
//! UNIFAC: [Hansen et al., 1991](https://doi.org/10.1021/ie00056a050)
//! Modified UNIFAC (Dortmund): [Gmehling et al., 1993](https://doi.org/10.1021/ie00018a014)
//!
//! Only a selection of groups is included. Interaction parameters are given
//! for every pair of the included main groups. Use [GroupTables::from_json]
//! to supply complete tables.
use super::{GroupTables, Method};
use crate::parameter::{InteractionRecord, SubgroupRecord};
use once_cell::sync::Lazy;
use std::sync::Arc;

// (id, name, main group, R, Q)
type SubgroupRow = (u32, &'static str, u32, f64, f64);
// (main group 1, main group 2, a, b, c)
type InteractionRow = (u32, u32, f64, f64, f64);

const UNIFAC_SUBGROUPS: &[SubgroupRow] = &[
    (1, "CH3", 1, 0.9011, 0.848),
    (2, "CH2", 1, 0.6744, 0.540),
    (3, "CH", 1, 0.4469, 0.228),
    (4, "C", 1, 0.2195, 0.000),
    (5, "CH2=CH", 2, 1.3454, 1.176),
    (6, "CH=CH", 2, 1.1167, 0.867),
    (7, "CH2=C", 2, 1.1173, 0.988),
    (8, "CH=C", 2, 0.8886, 0.676),
    (70, "C=C", 2, 0.6605, 0.485),
    (9, "ACH", 3, 0.5313, 0.400),
    (10, "AC", 3, 0.3652, 0.120),
    (11, "ACCH3", 4, 1.2663, 0.968),
    (12, "ACCH2", 4, 1.0396, 0.660),
    (13, "ACCH", 4, 0.8121, 0.348),
    (14, "OH", 5, 1.0000, 1.200),
    (15, "CH3OH", 6, 1.4311, 1.432),
    (16, "H2O", 7, 0.9200, 1.400),
    (17, "ACOH", 8, 0.8952, 0.680),
    (18, "CH3CO", 9, 1.6724, 1.488),
    (19, "CH2CO", 9, 1.4457, 1.180),
    (21, "CH3COO", 11, 1.9031, 1.728),
    (22, "CH2COO", 11, 1.6764, 1.420),
];

const UNIFAC_INTERACTIONS: &[InteractionRow] = &[
    (1, 2, 86.02, 0.0, 0.0),
    (2, 1, -35.36, 0.0, 0.0),
    (1, 3, 61.13, 0.0, 0.0),
    (3, 1, -11.12, 0.0, 0.0),
    (1, 4, 76.50, 0.0, 0.0),
    (4, 1, -69.70, 0.0, 0.0),
    (1, 5, 986.5, 0.0, 0.0),
    (5, 1, 156.4, 0.0, 0.0),
    (1, 6, 697.2, 0.0, 0.0),
    (6, 1, 16.51, 0.0, 0.0),
    (1, 7, 1318.0, 0.0, 0.0),
    (7, 1, 300.0, 0.0, 0.0),
    (1, 8, 1333.0, 0.0, 0.0),
    (8, 1, 275.8, 0.0, 0.0),
    (1, 9, 476.4, 0.0, 0.0),
    (9, 1, 26.76, 0.0, 0.0),
    (1, 11, 232.1, 0.0, 0.0),
    (11, 1, 114.8, 0.0, 0.0),
    (2, 3, 38.81, 0.0, 0.0),
    (3, 2, 3.446, 0.0, 0.0),
    (2, 4, 74.15, 0.0, 0.0),
    (4, 2, -113.6, 0.0, 0.0),
    (2, 5, 524.1, 0.0, 0.0),
    (5, 2, 457.0, 0.0, 0.0),
    (2, 6, 787.6, 0.0, 0.0),
    (6, 2, -12.52, 0.0, 0.0),
    (2, 7, 270.6, 0.0, 0.0),
    (7, 2, 496.1, 0.0, 0.0),
    (2, 8, 526.1, 0.0, 0.0),
    (8, 2, 217.5, 0.0, 0.0),
    (2, 9, 182.6, 0.0, 0.0),
    (9, 2, 42.92, 0.0, 0.0),
    (2, 11, 37.85, 0.0, 0.0),
    (11, 2, 132.1, 0.0, 0.0),
    (3, 4, 167.0, 0.0, 0.0),
    (4, 3, -146.8, 0.0, 0.0),
    (3, 5, 636.1, 0.0, 0.0),
    (5, 3, 89.60, 0.0, 0.0),
    (3, 6, 637.4, 0.0, 0.0),
    (6, 3, -50.00, 0.0, 0.0),
    (3, 7, 903.8, 0.0, 0.0),
    (7, 3, 362.3, 0.0, 0.0),
    (3, 8, 1329.0, 0.0, 0.0),
    (8, 3, 25.34, 0.0, 0.0),
    (3, 9, 25.77, 0.0, 0.0),
    (9, 3, 140.1, 0.0, 0.0),
    (3, 11, 5.994, 0.0, 0.0),
    (11, 3, 85.84, 0.0, 0.0),
    (4, 5, 803.2, 0.0, 0.0),
    (5, 4, 25.82, 0.0, 0.0),
    (4, 6, 603.3, 0.0, 0.0),
    (6, 4, -44.50, 0.0, 0.0),
    (4, 7, 5695.0, 0.0, 0.0),
    (7, 4, 377.6, 0.0, 0.0),
    (4, 8, 884.9, 0.0, 0.0),
    (8, 4, 244.2, 0.0, 0.0),
    (4, 9, -52.10, 0.0, 0.0),
    (9, 4, 365.8, 0.0, 0.0),
    (4, 11, 5688.0, 0.0, 0.0),
    (11, 4, -170.0, 0.0, 0.0),
    (5, 6, -137.1, 0.0, 0.0),
    (6, 5, 249.1, 0.0, 0.0),
    (5, 7, 353.5, 0.0, 0.0),
    (7, 5, -229.1, 0.0, 0.0),
    (5, 8, -259.7, 0.0, 0.0),
    (8, 5, -451.6, 0.0, 0.0),
    (5, 9, 84.00, 0.0, 0.0),
    (9, 5, 164.5, 0.0, 0.0),
    (5, 11, 101.1, 0.0, 0.0),
    (11, 5, 245.4, 0.0, 0.0),
    (6, 7, -181.0, 0.0, 0.0),
    (7, 6, 289.6, 0.0, 0.0),
    (6, 8, -101.7, 0.0, 0.0),
    (8, 6, -265.2, 0.0, 0.0),
    (6, 9, 23.39, 0.0, 0.0),
    (9, 6, 108.7, 0.0, 0.0),
    (6, 11, -10.72, 0.0, 0.0),
    (11, 6, 249.63, 0.0, 0.0),
    (7, 8, 324.5, 0.0, 0.0),
    (8, 7, -601.8, 0.0, 0.0),
    (7, 9, -195.4, 0.0, 0.0),
    (9, 7, 472.5, 0.0, 0.0),
    (7, 11, 72.87, 0.0, 0.0),
    (11, 7, 200.8, 0.0, 0.0),
    (8, 9, -356.1, 0.0, 0.0),
    (9, 8, -133.1, 0.0, 0.0),
    (8, 11, -449.4, 0.0, 0.0),
    (11, 8, -36.72, 0.0, 0.0),
    (9, 11, -213.7, 0.0, 0.0),
    (11, 9, 372.2, 0.0, 0.0),
];

const DORTMUND_SUBGROUPS: &[SubgroupRow] = &[
    (1, "CH3", 1, 0.6325, 1.0608),
    (2, "CH2", 1, 0.6325, 0.7081),
    (3, "CH", 1, 0.6325, 0.3554),
    (4, "C", 1, 0.6325, 0.0000),
    (14, "OH(P)", 5, 1.2302, 0.8927),
    (81, "OH(S)", 5, 1.0630, 0.8663),
    (82, "OH(T)", 5, 0.6895, 0.8345),
    (16, "H2O", 7, 1.7334, 2.4561),
];

const DORTMUND_INTERACTIONS: &[InteractionRow] = &[
    (1, 5, 2777.0, -4.674, 0.001551),
    (5, 1, 1606.0, -4.746, 0.0009181),
    (1, 7, 1391.3, -3.6156, 0.001144),
    (7, 1, -17.253, 0.8389, 0.0009021),
    (5, 7, -801.9, 3.824, -0.007514),
    (7, 5, 1460.0, -8.673, 0.01641),
];

fn tables(
    method: Method,
    subgroups: &[SubgroupRow],
    interactions: &[InteractionRow],
) -> GroupTables {
    GroupTables::new(
        method,
        subgroups
            .iter()
            .map(|&(id, name, main_group, r, q)| SubgroupRecord::new(id, name, main_group, r, q))
            .collect(),
        interactions
            .iter()
            .map(|&(m1, m2, a, b, c)| InteractionRecord::new(m1, m2, a, b, c))
            .collect(),
    )
}

pub(super) static UNIFAC: Lazy<Arc<GroupTables>> = Lazy::new(|| {
    Arc::new(tables(Method::Unifac, UNIFAC_SUBGROUPS, UNIFAC_INTERACTIONS))
});

pub(super) static DORTMUND: Lazy<Arc<GroupTables>> = Lazy::new(|| {
    Arc::new(tables(
        Method::Dortmund,
        DORTMUND_SUBGROUPS,
        DORTMUND_INTERACTIONS,
    ))
});

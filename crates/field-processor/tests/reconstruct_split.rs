//! End-to-end tests over a small hemisphere geometry: shrunk vector in,
//! hemisphere tiles out, and back again.

use field_processor::{
    merge, reconstruct, split, ChunkedReconstructor, HemisphereTile, WetMask,
};
use ocean_common::{Geometry, OceanError};

/// A 12-cell geometry shaped like the production one: east 2x3, west is the
/// transposed 3x2.
fn small_geometry() -> Geometry {
    Geometry {
        name: "small".to_string(),
        east_rows: 2,
        east_cols: 3,
        west_rows: 3,
        west_cols: 2,
    }
}

/// A coastline-ish mask: wet cells scattered through both hemispheres.
fn small_mask(geometry: &Geometry) -> WetMask {
    let mut weights = vec![0.0_f32; geometry.n_global()];
    for i in [1, 2, 4, 6, 9, 10] {
        weights[i] = 1.0;
    }
    WetMask::with_geometry(weights, geometry).unwrap()
}

#[test]
fn snapshot_to_tiles_pipeline() {
    let geometry = small_geometry();
    let mask = small_mask(&geometry);
    let shrunk: Vec<f32> = vec![35.1, 35.2, 34.9, 35.4, 34.7, 35.0];

    let dense = reconstruct(&mask, &shrunk).unwrap();
    assert_eq!(dense.len(), geometry.n_global());

    // Wet positions carry the shrunk values in order, dry positions are NaN.
    let wet_values: Vec<f32> = dense
        .iter()
        .enumerate()
        .filter(|(i, _)| mask.is_wet(*i))
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(wet_values, shrunk);
    for (i, v) in dense.iter().enumerate() {
        if !mask.is_wet(i) {
            assert!(v.is_nan(), "dry cell {i} not NaN");
        }
    }

    let (east, west) = split(&dense, &geometry).unwrap();
    assert_eq!(east.shape(), (2, 3));
    assert_eq!(west.shape(), (3, 2));

    // Spot-check the tile layout against the flat grid.
    assert_eq!(east.get(0, 1), Some(35.1));
    assert_eq!(east.get(1, 0), Some(35.4));
    assert_eq!(west.get(1, 1), Some(34.7));
    assert!(east.get(0, 0).unwrap().is_nan());
}

#[test]
fn split_merge_is_a_bijection() {
    let geometry = small_geometry();
    let dense: Vec<f32> = (0..geometry.n_global()).map(|i| i as f32 * 0.5).collect();

    let (east, west) = split(&dense, &geometry).unwrap();
    assert_eq!(east.len() + west.len(), geometry.n_global());
    assert_eq!(merge(&east, &west, &geometry).unwrap(), dense);
}

#[test]
fn chunked_pipeline_matches_whole_grid() {
    let geometry = small_geometry();
    let mask = small_mask(&geometry);
    let shrunk: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    let whole = reconstruct(&mask, &shrunk).unwrap();
    let streamed: Vec<f32> = ChunkedReconstructor::new(&mask, &shrunk, 5)
        .unwrap()
        .flatten()
        .collect();

    let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&streamed), bits(&whole));

    // The streamed grid splits identically.
    let (east_a, west_a) = split(&whole, &geometry).unwrap();
    let (east_b, west_b) = split(&streamed, &geometry).unwrap();
    assert_eq!(bits(&east_a.data), bits(&east_b.data));
    assert_eq!(bits(&west_a.data), bits(&west_b.data));
}

#[test]
fn shape_errors_surface_before_any_output() {
    let geometry = small_geometry();
    let mask = small_mask(&geometry);

    // Shrunk vector one element short.
    let err = reconstruct(&mask, &[1.0_f32; 5]).unwrap_err();
    assert!(matches!(err, OceanError::ShapeMismatch { expected: 6, actual: 5, .. }));

    // Dense vector from some other geometry.
    let err = split(&vec![0.0_f32; 14], &geometry).unwrap_err();
    assert!(matches!(err, OceanError::ShapeMismatch { expected: 12, actual: 14, .. }));

    // Tile from some other geometry.
    let alien = HemisphereTile {
        data: vec![0.0_f32; 4],
        rows: 2,
        cols: 2,
    };
    let (_, west) = split(&vec![0.0_f32; 12], &geometry).unwrap();
    assert!(merge(&alien, &west, &geometry).is_err());
}

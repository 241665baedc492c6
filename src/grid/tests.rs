use super::*;
use crate::table::TravelTimeTable;
use std::str::FromStr;

fn slice_geometry(ny: usize, nz: usize) -> GridGeometry {
    GridGeometry::new([1, ny, nz], [0.0, 0.0, 0.0], [0.0, 1.0, 2.0]).unwrap()
}

fn sample_table(nd: usize, nz: usize) -> TravelTimeTable {
    let values = (0..nd * nz).map(|i| i as f64 * 0.25).collect();
    TravelTimeTable::from_values(nd, nz, values).unwrap()
}

#[test]
fn test_degenerate_axis_accepted() {
    let geometry = GridGeometry::new([1, 4, 3], [0.0, 10.0, 0.0], [0.0, 2.5, 1.0]).unwrap();
    assert_eq!(geometry.sample_count(), 12);
    assert_eq!(geometry.nx(), 1);
}

#[test]
fn test_zero_axis_rejected() {
    assert_eq!(
        GridGeometry::new([1, 0, 3], [0.0; 3], [0.0, 1.0, 1.0]),
        Err(GridError::ZeroAxis { axis: 'y' })
    );
}

#[test]
fn test_invalid_spacing_rejected() {
    assert!(matches!(
        GridGeometry::new([1, 4, 3], [0.0; 3], [0.0, 0.0, 1.0]),
        Err(GridError::InvalidSpacing { axis: 'y', .. })
    ));
    assert!(matches!(
        GridGeometry::new([1, 4, 3], [0.0; 3], [0.0, 1.0, -1.0]),
        Err(GridError::InvalidSpacing { axis: 'z', .. })
    ));
    assert!(matches!(
        GridGeometry::new([1, 4, 3], [0.0; 3], [f64::NAN, 1.0, 1.0]),
        Err(GridError::InvalidSpacing { axis: 'x', .. })
    ));
}

#[test]
fn test_invalid_origin_rejected() {
    assert!(matches!(
        GridGeometry::new([1, 1, 1], [0.0, f64::INFINITY, 0.0], [0.0; 3]),
        Err(GridError::InvalidOrigin { axis: 'y', .. })
    ));
}

#[test]
fn test_byte_length_overflow_rejected() {
    // sample count fits, buffer bytes at double precision do not
    let ny = usize::MAX / 4;
    assert_eq!(
        GridGeometry::new([1, ny, 1], [0.0; 3], [1.0; 3]),
        Err(GridError::TooLarge { nx: 1, ny, nz: 1 })
    );
    assert!(GridGeometry::new([1, usize::MAX / 8, 1], [0.0; 3], [1.0; 3]).is_ok());
}

#[test]
fn test_index_order_z_fastest() {
    let geometry = GridGeometry::new([2, 3, 4], [0.0; 3], [1.0; 3]).unwrap();
    assert_eq!(geometry.index_of(0, 0, 1), Some(1));
    assert_eq!(geometry.index_of(0, 1, 0), Some(4));
    assert_eq!(geometry.index_of(1, 0, 0), Some(12));
    assert_eq!(geometry.index_of(1, 2, 3), Some(23));
    assert_eq!(geometry.index_of(2, 0, 0), None);
}

#[test]
fn test_node_coordinates() {
    let geometry = GridGeometry::new([1, 3, 2], [5.0, 100.0, 0.0], [0.0, 10.0, 2.0]).unwrap();
    assert_eq!(geometry.node(0, 2, 1), [5.0, 120.0, 2.0]);
}

#[test]
fn test_build_preserves_values() {
    let table = sample_table(3, 4);
    let expected: Vec<f64> = table.values().to_vec();

    let model = GridModel::build(
        table,
        slice_geometry(3, 4),
        ScalarType::Double,
        GridType::Time2D,
        "P",
        None,
    )
    .unwrap();

    assert_eq!(model.data(), &GridData::Double(expected));
    // table (id, iz) maps to grid (0, id, iz)
    assert_eq!(model.value(0, 2, 1), Some(9.0 * 0.25));
    assert_eq!(model.scalar_type(), ScalarType::Double);
    assert_eq!(model.wave_label(), "P");
    assert_eq!(model.station_label(), None);
}

#[test]
fn test_build_single_precision() {
    let table = TravelTimeTable::from_values(1, 2, vec![0.1, 1.5]).unwrap();
    let model = GridModel::build(
        table,
        slice_geometry(1, 2),
        ScalarType::Single,
        GridType::Time2D,
        "S",
        Some("STA1".to_string()),
    )
    .unwrap();

    assert_eq!(model.data(), &GridData::Single(vec![0.1_f32, 1.5_f32]));
    assert_eq!(model.header().buffer_byte_len(), 8);
    assert_eq!(model.station_label(), Some("STA1"));
}

#[test]
fn test_build_geometry_mismatch() {
    let result = GridModel::build(
        sample_table(3, 4),
        slice_geometry(4, 4),
        ScalarType::Single,
        GridType::Time2D,
        "P",
        None,
    );

    assert_eq!(
        result,
        Err(GridError::GeometryMismatch {
            nx: 1,
            ny: 4,
            nz: 4,
            expected: 16,
            actual: 12,
        })
    );
}

#[test]
fn test_invalid_labels() {
    let geometry = slice_geometry(1, 1);
    assert!(matches!(
        GridHeader::new(geometry, ScalarType::Single, GridType::Time2D, "", None),
        Err(GridError::InvalidLabel { field: "wave", .. })
    ));
    assert!(matches!(
        GridHeader::new(geometry, ScalarType::Single, GridType::Time2D, "P\nS", None),
        Err(GridError::InvalidLabel { field: "wave", .. })
    ));
    assert!(matches!(
        GridHeader::new(
            geometry,
            ScalarType::Single,
            GridType::Time2D,
            "P",
            Some(" STA ".to_string())
        ),
        Err(GridError::InvalidLabel {
            field: "station",
            ..
        })
    ));
}

#[test]
fn test_empty_station_is_absent() {
    let header = GridHeader::new(
        slice_geometry(1, 1),
        ScalarType::Single,
        GridType::Time2D,
        "P",
        Some(String::new()),
    )
    .unwrap();
    assert_eq!(header.station_label(), None);
}

#[test]
fn test_from_parts_uses_buffer_precision() {
    let header = GridHeader::new(
        slice_geometry(1, 2),
        ScalarType::Single,
        GridType::Time,
        "P",
        None,
    )
    .unwrap();

    let model = GridModel::from_parts(header, GridData::Double(vec![1.0, 2.0])).unwrap();
    assert_eq!(model.scalar_type(), ScalarType::Double);
    assert_eq!(model.header().scalar_type(), ScalarType::Double);
}

#[test]
fn test_bit_eq_handles_nan() {
    let a = GridData::Double(vec![f64::NAN, 1.0]);
    let b = GridData::Double(vec![f64::NAN, 1.0]);
    assert_ne!(a, b);
    assert!(a.bit_eq(&b));
    assert!(!a.bit_eq(&GridData::Single(vec![f32::NAN, 1.0])));
}

#[test]
fn test_type_tags() {
    assert_eq!(ScalarType::from_str("double").unwrap(), ScalarType::Double);
    assert_eq!(ScalarType::from_str("FLOAT").unwrap(), ScalarType::Single);
    assert!(ScalarType::from_str("half").is_err());

    for grid_type in GridType::ALL {
        assert_eq!(GridType::from_str(grid_type.tag()).unwrap(), grid_type);
    }
    assert_eq!(GridType::from_str("time2d").unwrap(), GridType::Time2D);
    assert!(matches!(
        GridType::from_str("SURFACE"),
        Err(GridError::UnknownGridType(_))
    ));
    assert!(GridType::Time2D.is_travel_time());
    assert!(!GridType::Angle2D.is_travel_time());
}

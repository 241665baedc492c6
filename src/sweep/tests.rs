use super::*;

#[test]
fn test_inclusive_endpoint() {
    let axis = SampleGrid1D::new(0.0, 10.0, 2.0).unwrap();
    assert_eq!(axis.len(), 6);
    assert_eq!(axis.to_vec(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(axis.last(), 10.0);
}

#[test]
fn test_endpoint_off_boundary_excluded() {
    let axis = SampleGrid1D::new(0.0, 9.0, 2.0).unwrap();
    assert_eq!(axis.len(), 5);
    assert_eq!(axis.to_vec(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(axis.get(5), None);
}

#[test]
fn test_rounding_tolerance_keeps_endpoint() {
    // 0.3 / 0.1 evaluates slightly below 3
    let axis = SampleGrid1D::new(0.0, 0.3, 0.1).unwrap();
    assert_eq!(axis.len(), 4);
}

#[test]
fn test_single_sample() {
    let axis = SampleGrid1D::new(5.0, 5.0, 1.0).unwrap();
    assert_eq!(axis.len(), 1);
    assert!(!axis.is_empty());
    assert_eq!(axis.to_vec(), vec![5.0]);
}

#[test]
fn test_invalid_ranges() {
    assert!(matches!(
        SampleGrid1D::new(0.0, 10.0, 0.0),
        Err(SweepError::InvalidRange { .. })
    ));
    assert!(matches!(
        SampleGrid1D::new(0.0, 10.0, -1.0),
        Err(SweepError::InvalidRange { .. })
    ));
    assert!(matches!(
        SampleGrid1D::new(10.0, 0.0, 1.0),
        Err(SweepError::InvalidRange { .. })
    ));
    assert!(matches!(
        SampleGrid1D::new(0.0, f64::INFINITY, 1.0),
        Err(SweepError::InvalidRange { .. })
    ));
}

#[test]
fn test_parse_description() {
    let axis: SampleGrid1D = "0:100:5".parse().unwrap();
    assert_eq!(axis.len(), 21);
    assert_eq!(axis.start(), 0.0);
    assert_eq!(axis.step(), 5.0);

    let axis: SampleGrid1D = " 1.5 : 3.5 : 0.5 ".parse().unwrap();
    assert_eq!(axis.to_vec(), vec![1.5, 2.0, 2.5, 3.0, 3.5]);

    assert!(matches!(
        "0:10".parse::<SampleGrid1D>(),
        Err(SweepError::InvalidDescription(_))
    ));
    assert!(matches!(
        "a:10:1".parse::<SampleGrid1D>(),
        Err(SweepError::InvalidDescription(_))
    ));
    assert!(matches!(
        "0:10:0".parse::<SampleGrid1D>(),
        Err(SweepError::InvalidRange { .. })
    ));
}

#[test]
fn test_display_uses_last_sample() {
    let axis = SampleGrid1D::new(0.0, 9.0, 2.0).unwrap();
    assert_eq!(axis.to_string(), "0:8:2");
}

#[test]
fn test_sweep_table_shape() {
    let sweep = Sweep::new(
        SampleGrid1D::new(0.0, 10.0, 2.0).unwrap(),
        SampleGrid1D::new(0.0, 40.0, 10.0).unwrap(),
    );
    assert_eq!(sweep.table_shape(), (6, 5));
}

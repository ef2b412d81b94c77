use polystroke::*;

fn pt(x: f32, y: f32) -> Point {
    Point::from_xy(x, y)
}

fn points(polygon: &JoinPolygon) -> Vec<Point> {
    polygon.corners.iter().map(|c| c.point).collect()
}

#[test]
fn single_segment_butt_cap() {
    let path = [pt(0.0, 0.0), pt(10.0, 0.0)];
    let stroke = Stroke {
        width: 4.0,
        ..Stroke::default()
    };

    let mut stroker = GradientStroker::new();
    let polygons = stroker.polygonize(&path, &stroke).unwrap();

    assert_eq!(polygons.len(), 1);
    assert_eq!(
        points(&polygons[0]),
        &[pt(0.0, -2.0), pt(10.0, -2.0), pt(10.0, 2.0), pt(0.0, 2.0)]
    );
    assert!(polygons[0].corners.iter().all(|c| !c.arc));
}

#[test]
fn collinear_path_tiles_into_rectangles() {
    let path = [pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0), pt(30.0, 0.0)];
    let stroke = Stroke {
        width: 4.0,
        ..Stroke::default()
    };

    let mut stroker = GradientStroker::new();
    let polygons = stroker.polygonize(&path, &stroke).unwrap();

    assert_eq!(polygons.len(), 3);
    for (i, polygon) in polygons.iter().enumerate() {
        let x0 = 10.0 * i as f32;
        let x1 = 10.0 * (i + 1) as f32;
        assert_eq!(
            points(polygon),
            &[pt(x0, -2.0), pt(x1, -2.0), pt(x1, 2.0), pt(x0, 2.0)]
        );
        assert!(polygon.corners.iter().all(|c| !c.arc));
        assert!(!polygon.degenerate);
    }

    // Consecutive rectangles share their boundary edge exactly.
    assert_eq!(polygons[0].corners[1].point, polygons[1].corners[0].point);
    assert_eq!(polygons[0].corners[2].point, polygons[1].corners[3].point);
}

#[test]
fn full_reversal_is_arc_capped() {
    for &line_join in &[LineJoin::Miter, LineJoin::Bevel, LineJoin::Round] {
        let path = [pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 0.0)];
        let stroke = Stroke {
            width: 4.0,
            line_join,
            ..Stroke::default()
        };

        let mut stroker = GradientStroker::new();
        let polygons = stroker.polygonize(&path, &stroke).unwrap();

        assert_eq!(polygons.len(), 2);
        // Both polygons stay plain rectangles; only the two corners facing
        // the turnaround point carry arc marks.
        assert_eq!(polygons[0].len(), 4);
        assert_eq!(polygons[1].len(), 4);
        assert!(polygons[0].corners[2].arc);
        assert!(polygons[1].corners[0].arc);
        assert!(!polygons[0].corners[0].arc);
        assert!(!polygons[0].corners[1].arc);
        assert!(!polygons[0].corners[3].arc);
    }
}

#[test]
fn zigzag_polygon_stream_properties() {
    let path = [
        pt(0.0, 0.0),
        pt(20.0, 0.0),
        pt(25.0, 15.0),
        pt(5.0, 20.0),
        pt(-10.0, 4.0),
        pt(-20.0, 30.0),
    ];

    for &line_join in &[LineJoin::Miter, LineJoin::Bevel, LineJoin::Round] {
        let stroke = Stroke {
            width: 6.0,
            line_join,
            ..Stroke::default()
        };

        let mut stroker = GradientStroker::new();
        let polygons = stroker.polygonize(&path, &stroke).unwrap();

        assert_eq!(polygons.len(), path.len() - 1);
        for polygon in polygons {
            assert!(polygon.len() >= 4 && polygon.len() <= 6);
            assert!(!polygon.is_empty());
        }

        // The first polygon has nothing to bridge, the final flush never
        // reports a degenerate join.
        assert_eq!(polygons[0].right_join, None);
        assert!(!polygons[polygons.len() - 1].degenerate);
    }
}

#[test]
fn bridged_polygons_share_the_join_point() {
    let path = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
    let stroke = Stroke {
        width: 4.0,
        ..Stroke::default()
    };

    let mut stroker = GradientStroker::new();
    let polygons = stroker.polygonize(&path, &stroke).unwrap();

    // The miter spike of the first polygon is bridged in as the second
    // polygon's first corner.
    assert_eq!(polygons[0].corners[2].point, pt(12.0, -2.0));
    assert_eq!(polygons[1].corners[0].point, pt(12.0, -2.0));
    assert_eq!(polygons[1].right_join, Some(true));

    // And both polygons meet at the clamped inner intersection.
    assert_eq!(polygons[0].corners[3].point, pt(8.0, 2.0));
    assert_eq!(polygons[1].corners[4].point, pt(8.0, 2.0));
}

#[test]
fn square_cap_extends_outer_segments_only() {
    let path = [pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0), pt(30.0, 0.0)];
    let stroke = Stroke {
        width: 4.0,
        line_cap: LineCap::Square,
        ..Stroke::default()
    };

    let mut stroker = GradientStroker::new();
    let polygons = stroker.polygonize(&path, &stroke).unwrap();

    assert_eq!(
        points(&polygons[0]),
        &[pt(-2.0, -2.0), pt(10.0, -2.0), pt(10.0, 2.0), pt(-2.0, 2.0)]
    );
    // Interior segments are untouched.
    assert_eq!(
        points(&polygons[1]),
        &[pt(10.0, -2.0), pt(20.0, -2.0), pt(20.0, 2.0), pt(10.0, 2.0)]
    );
    assert_eq!(
        points(&polygons[2]),
        &[pt(20.0, -2.0), pt(32.0, -2.0), pt(32.0, 2.0), pt(20.0, 2.0)]
    );
}

#[test]
fn stroker_can_be_reused() {
    let stroke = Stroke {
        width: 4.0,
        ..Stroke::default()
    };

    let mut stroker = GradientStroker::new();

    let path = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
    let first = stroker.polygonize(&path, &stroke).unwrap().to_vec();

    let longer = [pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0), pt(30.0, 0.0)];
    assert_eq!(stroker.polygonize(&longer, &stroke).unwrap().len(), 3);

    // And back again: earlier results are reproduced exactly.
    let again = stroker.polygonize(&path, &stroke).unwrap();
    assert_eq!(again, first.as_slice());
}

#[test]
fn rejects_precondition_violations() {
    let stroke = Stroke {
        width: 4.0,
        ..Stroke::default()
    };
    let mut stroker = GradientStroker::new();

    // Too short.
    assert!(stroker.polygonize(&[pt(0.0, 0.0)], &stroke).is_none());
    // Duplicate adjacent points.
    assert!(stroker
        .polygonize(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 0.0)], &stroke)
        .is_none());
    // Non-finite coordinates.
    assert!(stroker
        .polygonize(&[pt(0.0, 0.0), pt(f32::INFINITY, 0.0)], &stroke)
        .is_none());
}

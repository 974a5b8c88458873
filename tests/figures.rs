//! End-to-end figure tests: run the full save path against scratch
//! directories and check the serialized output and the error paths.
use std::fs;
use std::path::PathBuf;

use pubfig::{
    BarGroup, Error, LegendPlacement, PlotOptions, Series, Style, XySeries, bar_chart, line_chart,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pubfig-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn survey_group() -> BarGroup {
    BarGroup::new(
        vec!["0-12", "13-17", "18-29", "30-49", "50+"],
        vec![
            Series::new(
                "Cilantro",
                vec![12.0, 32.0, 48.0, 41.0, 85.0],
                vec![1.0, 2.0, 1.0, 10.0, 20.0],
            ),
            Series::new(
                "Basil",
                vec![84.0, 72.0, 99.0, 87.0, 60.0],
                vec![5.0, 6.0, 2.0, 10.0, 18.0],
            ),
        ],
    )
}

// a modest raster resolution keeps the test output small
fn test_style() -> Style {
    Style::default().with_dpi(150.0)
}

#[test]
fn bar_chart_writes_both_formats() {
    let dir = scratch_dir("bars");
    let opts = PlotOptions::new()
        .with_x_label("Age group")
        .with_y_label("Fraction of people (%)");

    bar_chart(&survey_group(), "survey", &dir, &test_style(), &opts).unwrap();

    let svg = fs::read_to_string(dir.join("survey.svg")).unwrap();
    assert!(svg.contains("<svg"));
    // legend entries and axis description are real text elements
    assert!(svg.contains("Cilantro"));
    assert!(svg.contains("Basil"));
    assert!(svg.contains("Age group"));
    // category tick labels sit on the slot centers
    assert!(svg.contains("13-17"));

    let png = fs::read(dir.join("survey.png")).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn bar_chart_with_legend_above_and_columns() {
    let dir = scratch_dir("bars-outtop");
    let opts = PlotOptions::new()
        .with_legend(LegendPlacement::OutTop)
        .with_legend_columns(2);

    bar_chart(&survey_group(), "survey", &dir, &test_style(), &opts).unwrap();
    assert!(dir.join("survey.svg").exists());
    assert!(dir.join("survey.png").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn bar_chart_with_hidden_legend() {
    let dir = scratch_dir("bars-hidden");
    let opts = PlotOptions::new().with_legend(LegendPlacement::Hidden);

    bar_chart(&survey_group(), "survey", &dir, &test_style(), &opts).unwrap();
    let svg = fs::read_to_string(dir.join("survey.svg")).unwrap();
    assert!(!svg.contains("Cilantro"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn line_chart_writes_both_formats() {
    let dir = scratch_dir("lines");
    let series = vec![
        XySeries::new(
            "Data 1",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![20.0, 30.0, 40.0, 50.0, 60.0],
            vec![2.0, 3.0, 2.0, 1.0, 3.0],
        ),
        XySeries::new(
            "Data 2",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![20.0, 50.0, 10.0, 20.0, 30.0],
            vec![2.0, 3.0, 2.0, 1.0, 3.0],
        ),
    ];
    let opts = PlotOptions::new().with_x_label("x label").with_y_label("y label");

    line_chart(&series, "lines", &dir, &test_style(), &opts).unwrap();

    let svg = fs::read_to_string(dir.join("lines.svg")).unwrap();
    assert!(svg.contains("Data 1"));
    assert!(svg.contains("Data 2"));
    assert!(svg.contains("y label"));
    assert!(dir.join("lines.png").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_destination_is_rejected() {
    let dir = scratch_dir("missing").join("does-not-exist");
    let err = bar_chart(
        &survey_group(),
        "survey",
        &dir,
        &test_style(),
        &PlotOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::DestinationUnwritable(_)));
}

#[test]
fn file_destination_is_rejected() {
    let dir = scratch_dir("file-dest");
    let file = dir.join("occupied");
    fs::write(&file, b"not a directory").unwrap();

    let err = line_chart(
        &[XySeries::without_errors("d", vec![0.0], vec![0.0])],
        "fig",
        &file,
        &test_style(),
        &PlotOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::DestinationUnwritable(_)));

    fs::remove_dir_all(&dir).ok();
}

#[cfg(unix)]
#[test]
fn readonly_destination_is_rejected() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir("readonly");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

    let err = bar_chart(
        &survey_group(),
        "survey",
        &dir,
        &test_style(),
        &PlotOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::DestinationUnwritable(_)));

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn shape_mismatch_fails_before_any_file_is_written() {
    let dir = scratch_dir("mismatch");
    let group = BarGroup::new(
        vec!["A", "B", "C", "D", "E"],
        vec![Series::new("short", vec![1.0, 2.0, 3.0], vec![0.1, 0.2, 0.3])],
    );

    let err = bar_chart(&group, "bad", &dir, &test_style(), &PlotOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidSeriesShape {
            len: 3,
            expected: 5,
            ..
        }
    ));
    assert!(!dir.join("bad.svg").exists());
    assert!(!dir.join("bad.png").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn empty_group_fails_before_any_file_is_written() {
    let dir = scratch_dir("empty");
    let group = BarGroup::new(vec!["A", "B"], Vec::new());

    let err = bar_chart(&group, "empty", &dir, &test_style(), &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyGroup));
    assert!(!dir.join("empty.svg").exists());

    let err = line_chart(&[], "empty", &dir, &test_style(), &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyGroup));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn xy_shape_mismatch_is_rejected() {
    let dir = scratch_dir("xy-mismatch");
    let series = vec![XySeries::new(
        "lop",
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0],
        vec![0.1, 0.1, 0.1],
    )];

    let err = line_chart(&series, "bad", &dir, &test_style(), &PlotOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidSeriesShape {
            len: 2,
            expected: 3,
            ..
        }
    ));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn many_series_cycle_the_palettes() {
    // more series than colors and hatches; the chart still renders and the
    // assignments wrap instead of running out
    let dir = scratch_dir("many");
    let categories = vec!["a", "b", "c"];
    let series: Vec<Series> = (0..12)
        .map(|i| {
            Series::new(
                format!("series {}", i),
                vec![i as f64 + 1.0, i as f64 + 2.0, i as f64 + 1.5],
                vec![0.5, 0.5, 0.5],
            )
        })
        .collect();
    let group = BarGroup::new(categories, series);
    let opts = PlotOptions::new().with_legend(LegendPlacement::Hidden);

    bar_chart(&group, "many", &dir, &test_style(), &opts).unwrap();
    assert!(dir.join("many.svg").exists());

    let style = Style::default();
    for k in 0..4 {
        assert_eq!(style.series_color(k), style.series_color(k + 10));
        assert_eq!(style.series_hatch(k), style.series_hatch(k + 4));
    }

    fs::remove_dir_all(&dir).ok();
}

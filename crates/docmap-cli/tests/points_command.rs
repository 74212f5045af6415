use assert_cmd::cargo::cargo_bin_cmd;
use docmap_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_points_plain_table() {
    let world = TestWorld::new().with_samples();

    let mut cmd = cargo_bin_cmd!("docmap");
    world.configure_command(&mut cmd).arg("points");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("DOCUMENT"))
        .stdout(predicate::str::contains("MDS1"))
        .stdout(predicate::str::is_match(r"(?m)^a\.txt\s+C1\s+0\.500\s+-1\.250").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^c\.txt\s+C2\s").unwrap());
}

#[test]
fn test_points_json_maps_data_into_plot_space() {
    let world = TestWorld::new().with_samples();

    let mut cmd = cargo_bin_cmd!("docmap");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "points"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json = assertions::parse_envelope(&output.stdout).unwrap();
    assertions::assert_point_count(&json, 3).unwrap();
    assert_eq!(json["content"]["unmatched"], 0);

    // Default plot: x domain [-15, 23] over 530 units, y domain [-25, 15] over 450
    let b = &json["content"]["points"][1];
    assert_eq!(b["id"], "b.txt");
    assert_eq!(b["cluster"], "C1");
    let cx = b["cx"].as_f64().unwrap();
    let cy = b["cy"].as_f64().unwrap();
    assert!((cx - 25.0 / 38.0 * 530.0).abs() < 1e-9, "cx = {cx}");
    assert!((cy - 35.0 / 40.0 * 450.0).abs() < 1e-9, "cy = {cy}");
}

#[test]
fn test_points_outside_cluster_list_are_flagged() {
    let world = TestWorld::new().with_samples();
    world
        .write_file(
            "mds_data1.json",
            r#"[{"index": "a.txt", "MDS1": 0, "MDS2": 0}, {"index": "stray.txt", "MDS1": 1, "MDS2": 1}]"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("docmap");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "points"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json = assertions::parse_envelope(&output.stdout).unwrap();
    assert_eq!(json["content"]["unmatched"], 1);
    assert!(json["content"]["points"][1]["cluster"].is_null());
    assert_eq!(assertions::suggestion_count(&json), 1);
}

#[test]
fn test_scatterplot_config_changes_plot_space() {
    let world = TestWorld::new().with_samples();
    world
        .write_file(
            "docmap.toml",
            "[scatterplot]\nwidth = 100.0\nheight = 100.0\nx_domain = [0.0, 10.0]\n\n[scatterplot.margin]\ntop = 0.0\nright = 0.0\nbottom = 0.0\nleft = 0.0\n",
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("docmap");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "points"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json = assertions::parse_envelope(&output.stdout).unwrap();
    let a = &json["content"]["points"][0];
    assert!((a["cx"].as_f64().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_missing_points_file_fails() {
    let world = TestWorld::new().with_samples();
    world.remove_file("mds_data1.json").unwrap();

    let mut cmd = cargo_bin_cmd!("docmap");
    world.configure_command(&mut cmd).arg("points");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Resource not found: mds_data1.json",
        ));
}

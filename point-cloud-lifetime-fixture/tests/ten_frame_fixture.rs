use constants::spherical_harmonics::SH_C0;
use point_cloud_lifetime_fixture::{FixtureError, FixtureGenerator, GeneratorConfig};
use std::fs;
use std::path::Path;

const FIELDS: usize = 20;
const MU: usize = 17;
const W: usize = 18;
const K: usize = 19;

/// Splits a written file at `end_header\n` and decodes the body into rows.
fn read_fixture(path: &Path) -> (String, Vec<[f32; FIELDS]>) {
    let bytes = fs::read(path).unwrap();
    let marker = b"end_header\n";
    let end = bytes
        .windows(marker.len())
        .position(|w| w == marker)
        .expect("header terminator")
        + marker.len();

    let header = String::from_utf8(bytes[..end].to_vec()).unwrap();
    let body = &bytes[end..];
    assert_eq!(body.len() % (FIELDS * 4), 0);

    let rows = body
        .chunks_exact(FIELDS * 4)
        .map(|row| {
            let mut fields = [0.0f32; FIELDS];
            for (field, b) in fields.iter_mut().zip(row.chunks_exact(4)) {
                *field = f32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            }
            fields
        })
        .collect();
    (header, rows)
}

fn declared_vertex_count(header: &str) -> usize {
    header
        .lines()
        .find_map(|l| l.strip_prefix("element vertex "))
        .and_then(|n| n.parse().ok())
        .expect("element vertex line")
}

#[test]
fn ten_frames_of_ten_thousand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_lifetime_10frames.ply");
    let config = GeneratorConfig::new(10, 10_000).with_seed(42);

    let report = FixtureGenerator::new(config, &path)
        .unwrap()
        .generate()
        .unwrap();
    assert_eq!(report.vertex_count, 100_000);
    assert_eq!(report.body_bytes, 8_000_000);

    let (header, rows) = read_fixture(&path);
    assert!(header.starts_with("ply\nformat binary_little_endian 1.0\n"));
    assert!(header.contains("element vertex 100000\n"));
    assert_eq!(declared_vertex_count(&header), rows.len());
    assert_eq!(rows.len() * FIELDS * 4, 8_000_000);

    let frame_three: Vec<_> = rows.iter().filter(|r| r[MU] == 3.0).collect();
    assert_eq!(frame_three.len(), 10_000);
    for row in frame_three {
        let red = row[6] as f64 * SH_C0 + 0.5;
        let green = row[7] as f64 * SH_C0 + 0.5;
        let blue = row[8] as f64 * SH_C0 + 0.5;
        assert!((red - 1.0).abs() < 1e-6);
        assert!((green - 0.1).abs() < 1e-6);
        assert!((blue - 0.1).abs() < 1e-6);
    }
}

#[test]
fn every_row_satisfies_fixture_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.ply");
    let frames = 7;
    let config = GeneratorConfig::new(frames, 300)
        .with_seed(3)
        .with_manifest(false);
    FixtureGenerator::new(config, &path)
        .unwrap()
        .generate()
        .unwrap();

    let (_, rows) = read_fixture(&path);
    assert_eq!(rows.len(), frames * 300);

    for (i, row) in rows.iter().enumerate() {
        let frame = i / 300;
        let mu = row[MU];
        assert_eq!(mu, frame as f32);
        assert_eq!(mu.fract(), 0.0);
        assert!(mu >= 0.0 && (mu as usize) < frames);
        assert_eq!(row[W], 0.5);
        assert_eq!(row[K], 10.0);

        let x = row[0];
        let lo = 2.0 * frame as f32 - 0.5;
        assert!(x >= lo && x < lo + 1.0, "row {i}: x = {x}");

        assert_eq!(&row[3..6], &[0.0, 0.0, 0.0]);
        assert_eq!(row[9], 10.0);
        assert_eq!(&row[10..13], &[-4.0, -4.0, -4.0]);
        assert_eq!(&row[13..17], &[1.0, 0.0, 0.0, 0.0]);
        let norm: f32 = row[13..17].iter().map(|q| q * q).sum();
        assert_eq!(norm, 1.0);
    }
}

#[test]
fn header_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.ply");
    let second = dir.path().join("second.ply");

    // Unseeded: positions differ, header must not.
    for path in [&first, &second] {
        FixtureGenerator::new(GeneratorConfig::new(4, 250).with_manifest(false), path)
            .unwrap()
            .generate()
            .unwrap();
    }

    let (a, _) = read_fixture(&first);
    let (b, _) = read_fixture(&second);
    assert_eq!(a, b);
}

#[test]
fn same_seed_gives_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.ply");
    let second = dir.path().join("b.ply");

    for path in [&first, &second] {
        let config = GeneratorConfig::new(3, 200).with_seed(1234);
        FixtureGenerator::new(config, path)
            .unwrap()
            .generate()
            .unwrap();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn manifest_describes_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("described.ply");
    let config = GeneratorConfig::new(5, 100).with_seed(8);
    FixtureGenerator::new(config, &path)
        .unwrap()
        .generate()
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("described.json")).unwrap())
            .unwrap();
    assert_eq!(json["ply_file"], "described.ply");
    assert_eq!(json["vertex_count"], 500);
    assert_eq!(json["frame_count"], 5);
    assert_eq!(json["properties"].as_array().unwrap().len(), 20);
    assert_eq!(json["properties"][17], "lifetime_mu");
    for frame in json["frames"].as_array().unwrap() {
        assert_eq!(frame["visible_at_mu"], 100);
    }
}

#[test]
fn non_positive_counts_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_signed(-2, 10),
        Err(FixtureError::InvalidConfig(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.ply");
    assert!(matches!(
        FixtureGenerator::new(GeneratorConfig::new(5, 0), &path),
        Err(FixtureError::InvalidConfig(_))
    ));
    assert!(!path.exists());
}

#[test]
fn failed_write_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.ply");

    let result = FixtureGenerator::new(GeneratorConfig::new(2, 10).with_seed(1), &path)
        .unwrap()
        .generate();
    assert!(matches!(result, Err(FixtureError::Io(_))));
    assert!(!path.exists());
}

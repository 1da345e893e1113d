use std::{fs, path::PathBuf};

use tempfile::tempdir;

use fdlayout::{geometry::Rect, record::GraphRecord};
use fdlayout_cli::{Args, CliError, run};

fn args_for(input: impl Into<String>, output: impl Into<String>) -> Args {
    Args {
        input: input.into(),
        output: output.into(),
        config: None,
        seed: Some(17),
        shift_x: 0.0,
        shift_y: 0.0,
        log_level: "off".to_string(),
    }
}

/// Collects all .json graphs from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn node_rects(record: &GraphRecord) -> Vec<Rect> {
    record
        .nodes
        .iter()
        .map(|node| {
            Rect::new(
                node.x.unwrap(),
                node.y.unwrap(),
                node.width.unwrap(),
                node.height.unwrap(),
            )
        })
        .collect()
}

#[test]
fn e2e_smoke_test_demo_graphs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // Demos are at workspace root, relative to workspace not the crate
    let demos_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos");
    let demos = collect_json_files(demos_path);

    assert!(!demos.is_empty(), "No demo graphs found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_path = temp_dir
            .path()
            .join(demo_path.file_name().unwrap());
        let args = args_for(
            demo_path.to_string_lossy(),
            output_path.to_string_lossy(),
        );

        if let Err(e) = run(&args) {
            failed.push((demo_path.clone(), e));
            continue;
        }

        let input: GraphRecord =
            serde_json::from_str(&fs::read_to_string(demo_path).unwrap()).unwrap();
        let output: GraphRecord =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

        assert_eq!(input.nodes.len(), output.nodes.len());
        assert_eq!(input.edges.len(), output.edges.len());
        for node in &output.nodes {
            let (x, y) = (node.x.unwrap(), node.y.unwrap());
            assert!(x.is_finite() && y.is_finite(), "{}: {}", demo_path.display(), node.id);
            assert!(x >= -1e-9 && y >= -1e-9, "{}: {}", demo_path.display(), node.id);
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo graphs that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo graph(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_isolated_nodes_form_a_row() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("row.json");
    let output_path = temp_dir.path().join("row.out.json");
    fs::write(
        &input_path,
        r#"{ "nodes": [ { "id": "A" }, { "id": "B" } ] }"#,
    )
    .unwrap();

    run(&args_for(
        input_path.to_string_lossy(),
        output_path.to_string_lossy(),
    ))
    .unwrap();

    let output: GraphRecord =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let rects = node_rects(&output);
    assert!((rects[1].left() - rects[0].right() - 15.0).abs() < 1e-9);
    assert!((rects[1].top() - rects[0].top()).abs() < 1e-9);
}

#[test]
fn e2e_shift_and_config_are_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("pair.json");
    let output_path = temp_dir.path().join("pair.out.json");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &input_path,
        r#"{ "nodes": [ { "id": "A" }, { "id": "B" } ] }"#,
    )
    .unwrap();
    fs::write(&config_path, "[layout]\ncluster_padding = 40\niterations = 50\n").unwrap();

    let mut args = args_for(input_path.to_string_lossy(), output_path.to_string_lossy());
    args.config = Some(config_path.to_string_lossy().to_string());
    args.shift_x = 10.0;
    args.shift_y = 20.0;
    run(&args).unwrap();

    let output: GraphRecord =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let rects = node_rects(&output);
    assert!((rects[0].left() - 10.0).abs() < 1e-9);
    assert!((rects[0].top() - 20.0).abs() < 1e-9);
    assert!((rects[1].left() - rects[0].right() - 40.0).abs() < 1e-9);
}

#[test]
fn e2e_unknown_endpoint_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("dangling.json");
    let output_path = temp_dir.path().join("dangling.out.json");
    fs::write(
        &input_path,
        r#"{ "nodes": [ { "id": "A" } ], "edges": [ { "source": "A", "destination": "Z" } ] }"#,
    )
    .unwrap();

    let err = run(&args_for(
        input_path.to_string_lossy(),
        output_path.to_string_lossy(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Layout(_)));
    assert!(err.to_string().contains('Z'), "unexpected error: {err}");
    assert!(!output_path.exists());
}

#[test]
fn e2e_malformed_json_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("broken.json");
    fs::write(&input_path, "{ \"nodes\": [ { \"id\": } ] }").unwrap();

    let err = run(&args_for(
        input_path.to_string_lossy(),
        temp_dir.path().join("broken.out.json").to_string_lossy(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Json { .. }));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args_for(
        temp_dir.path().join("absent.json").to_string_lossy(),
        temp_dir.path().join("absent.out.json").to_string_lossy(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Io(_)));
}

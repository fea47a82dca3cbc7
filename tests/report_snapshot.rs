use linemeter::usage::UsageSnapshot;

fn sample_snapshot() -> UsageSnapshot {
    UsageSnapshot {
        memory_bytes: 10_863_824,
        memory_formatted: "10 MiB".to_string(),
        peak_bytes: 10_863_824,
        peak_formatted: "10 MiB".to_string(),
        elapsed_ms: 196,
        elapsed_formatted: "196.688ms".to_string(),
    }
}

#[test]
fn usage_line_layout() {
    insta::assert_snapshot!("usage_line", sample_snapshot().usage_line());
}

#[test]
fn snapshot_json_shape() {
    let json = serde_json::to_string_pretty(&sample_snapshot()).unwrap();
    insta::assert_snapshot!("snapshot_json", json);
}

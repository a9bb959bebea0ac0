use gittag::analyzer::{generate_candidate_matrix, next_version, VersionSet};
use gittag::domain::{Segment, Tag};

#[test]
fn test_empty_history_plain_column() {
    let set = VersionSet::new(Vec::<&str>::new(), false);
    let matrix = generate_candidate_matrix(&set);

    let plain: Vec<String> = (0..3)
        .map(|row| matrix.cell(row, 0).unwrap().to_string())
        .collect();
    assert_eq!(plain, vec!["0.0.1", "0.1.0", "1.0.0"]);
}

#[test]
fn test_columns_follow_channel_rank() {
    let set = VersionSet::new(
        [
            "v1.0.0",
            "v1.1.0-rc.1",
            "v1.1.0-beta.1",
            "v1.1.0-beta.2",
            "v1.1.0-beta.3",
            "v1.1.0-alpha.1",
            "v1.1.0-alpha.2",
        ],
        false,
    );
    let matrix = generate_candidate_matrix(&set);

    assert_eq!(matrix.column_titles(), vec!["plain", "beta", "alpha", "rc"]);

    let minor: Vec<String> = matrix.rows[1]
        .cells
        .iter()
        .map(|c| c.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(
        minor,
        vec!["1.1.0", "1.1.0-beta.4", "1.1.0-alpha.3", "1.1.0-rc.2"]
    );
}

#[test]
fn test_flag_mode_renders_tag() {
    let set = VersionSet::new(["v0.3.1", "v0.4.0-rc.1"], false);

    let cases = [
        (Some(Segment::Patch), None, "v0.3.2"),
        (Some(Segment::Minor), None, "v0.4.0"),
        (Some(Segment::Major), None, "v1.0.0"),
        (None, Some("rc"), "v0.4.0-rc.2"),
        (None, Some("beta"), "v0.3.2-beta.1"),
        (Some(Segment::Minor), Some("rc"), "v0.4.0-rc.2"),
        (Some(Segment::Major), Some("rc"), "v1.0.0-rc.1"),
    ];

    for (segment, channel, expected) in cases {
        let version = next_version(&set, segment, channel).unwrap().unwrap();
        assert_eq!(
            Tag::from_version(&version).name,
            expected,
            "segment={:?} channel={:?}",
            segment,
            channel
        );
    }
}

#[test]
fn test_channel_base_uses_core_of_newest_prerelease() {
    // newest alpha lives on a core above the next patch
    let set = VersionSet::new(["v1.0.0", "v2.0.0-alpha.5", "v1.0.1-alpha.1"], false);
    let version = next_version(&set, None, Some("alpha")).unwrap().unwrap();
    assert_eq!(version.to_string(), "2.0.0-alpha.6");
}

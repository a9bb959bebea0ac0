use gittag::analyzer::{next_for_channel, VersionSet};
use gittag::domain::{Core, PreRelease, Version};

fn scenario_tags() -> Vec<&'static str> {
    vec![
        "v1.0.0",
        "v1.1.0",
        "v1.2.0-alpha.1",
        "v1.2.0-alpha.2",
        "v1.2.0-beta.1",
    ]
}

#[test]
fn test_scenario_latest_and_lookups() {
    let set = VersionSet::new(scenario_tags(), false);

    assert_eq!(set.latest().to_string(), "1.1.0");
    assert_eq!(
        set.latest_for_core_and_channel(Core::new(1, 2, 0), "alpha")
            .unwrap()
            .to_string(),
        "1.2.0-alpha.2"
    );
    assert_eq!(
        next_for_channel(&set, Core::new(1, 2, 0), "alpha")
            .unwrap()
            .to_string(),
        "1.2.0-alpha.3"
    );
    assert_eq!(
        next_for_channel(&set, Core::new(1, 2, 0), "rc")
            .unwrap()
            .to_string(),
        "1.2.0-rc.1"
    );
}

#[test]
fn test_empty_tag_list() {
    let set = VersionSet::new(Vec::<String>::new(), false);
    assert_eq!(set.latest().to_string(), "0.0.0");
    assert!(set.channel_rank().is_empty());
}

#[test]
fn test_malformed_tags_dropped() {
    let mut tags = scenario_tags();
    tags.insert(2, "not-a-version");
    tags.push("release-candidate");
    tags.push("");

    let with_noise = VersionSet::new(&tags, true);
    let clean = VersionSet::new(scenario_tags(), false);

    assert_eq!(with_noise.latest(), clean.latest());
    assert_eq!(with_noise.channel_rank(), clean.channel_rank());
    assert_eq!(with_noise.versions().len(), clean.versions().len());
}

#[test]
fn test_missing_sequence_not_ranked() {
    let set = VersionSet::new(["v1.0.0", "v1.1.0-alpha", "v1.1.0-beta.1"], false);

    assert_eq!(set.channel_rank(), ["beta"]);
    assert!(set.latest_for_channel("alpha").is_none());
    assert!(set
        .versions()
        .iter()
        .any(|v| v.prerelease() == Some("alpha")));
}

#[test]
fn test_channel_rank_counts() {
    let mut tags = Vec::new();
    for n in 1..=3 {
        tags.push(format!("v2.0.0-alpha.{}", n));
    }
    for n in 1..=5 {
        tags.push(format!("v2.0.0-beta.{}", n));
    }
    tags.push("v2.0.0-rc.1".to_string());

    let set = VersionSet::new(&tags, false);
    assert_eq!(set.channel_rank(), ["beta", "alpha", "rc"]);
}

#[test]
fn test_latest_is_greatest_release() {
    let histories: Vec<Vec<&str>> = vec![
        vec!["v0.1.0", "v0.10.0", "v0.9.0"],
        vec!["v3.0.0-rc.1", "v2.9.9", "junk", "v2.10.0"],
        vec!["v1.0.0-alpha.1"],
        vec!["1", "1.1", "v1.0.9"],
    ];

    for tags in histories {
        let set = VersionSet::new(&tags, false);
        let latest = set.latest();
        let releases: Vec<&Version> = set
            .versions()
            .iter()
            .filter(|v| !v.is_prerelease())
            .collect();

        if releases.is_empty() {
            assert_eq!(latest, &Version::zero());
        } else {
            assert!(releases.contains(&latest));
            assert!(releases.iter().all(|v| *v <= latest), "{:?}", tags);
        }
    }
}

#[test]
fn test_precedence_is_total_order() {
    let versions: Vec<Version> = [
        "1.0.0",
        "1.0.0-alpha.1",
        "1.0.0-alpha.2",
        "1.0.0-alpha.10",
        "1.0.0-beta.1",
        "1.0.0-rc.1",
        "1.0.1",
        "0.9.9",
        "2.0.0-alpha.1",
    ]
    .iter()
    .map(|s| Version::parse(s).unwrap())
    .collect();

    for a in &versions {
        for b in &versions {
            // antisymmetry
            if a < b {
                assert!(!(b < a));
            }
            for c in &versions {
                // transitivity
                if a < b && b < c {
                    assert!(a < c, "{} < {} < {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_sequence_continuation_is_monotonic() {
    let mut tags: Vec<String> = scenario_tags().iter().map(|s| s.to_string()).collect();
    let base = Core::new(1, 2, 0);

    let first = next_for_channel(&VersionSet::new(&tags, false), base, "alpha").unwrap();
    assert_eq!(first.to_string(), "1.2.0-alpha.3");

    tags.push(format!("v{}", first));
    let second = next_for_channel(&VersionSet::new(&tags, false), base, "alpha").unwrap();
    assert_eq!(second.to_string(), "1.2.0-alpha.4");
    assert!(second > first);
}

#[test]
fn test_prerelease_round_trip() {
    for s in ["alpha.1", "beta.0", "rc.12", "pre-release.3"] {
        assert_eq!(PreRelease::decode(s).unwrap().encode(), s);
    }
}

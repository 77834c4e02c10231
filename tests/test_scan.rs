use edasweep::{scan, CandidateKind, SweepConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_matched_directory_is_one_candidate_with_no_descendants() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sim/work/nested")).unwrap();
    fs::write(dir.path().join("sim/work/trace.vcd"), "waveform").unwrap();
    fs::write(dir.path().join("sim/work/nested/vsim.wlf"), "log").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 1, "expected exactly one candidate");
    assert_eq!(candidates[0].kind, CandidateKind::Directory);
    assert!(candidates[0].path.ends_with("sim/work"));
}

#[test]
fn test_directory_match_is_case_insensitive() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("WORK")).unwrap();
    fs::write(dir.path().join("WORK/_info"), "library").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].kind, CandidateKind::Directory);
}

#[test]
fn test_file_match_is_case_insensitive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Trace.VCD"), "waveform").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].kind, CandidateKind::File);
}

#[test]
fn test_protected_extension_is_never_a_candidate() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top.qpf"), "project").unwrap();
    fs::write(dir.path().join("pins.qsf"), "assignments").unwrap();
    fs::write(dir.path().join("build.rpt"), "report").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].path.ends_with("build.rpt"));
}

#[test]
fn test_skip_folder_contents_are_invisible() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git/work")).unwrap();
    fs::write(dir.path().join(".git/index.vcd"), "not a waveform").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert!(
        candidates.is_empty(),
        "nothing inside a skip-folder may be a candidate"
    );
}

#[test]
fn test_skip_folder_itself_is_not_a_candidate() {
    let dir = tempdir().unwrap();

    // A skip name that is also a delete name: skip wins
    let config = {
        let mut c = SweepConfig::default();
        c.skip_folders.insert("work".to_string());
        c
    };
    fs::create_dir_all(dir.path().join("work")).unwrap();
    fs::write(dir.path().join("work/trace.vcd"), "waveform").unwrap();

    let candidates = scan(dir.path(), &config).unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn test_directory_candidate_size_is_recursive() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("work/sub")).unwrap();
    fs::write(dir.path().join("work/a.bin"), vec![0u8; 100]).unwrap();
    fs::write(dir.path().join("work/sub/b.bin"), vec![0u8; 50]).unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].size, 150);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_never_candidates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("real.txt"), "keep me").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.vcd"))
        .unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn test_scan_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(scan(&missing, &SweepConfig::default()).is_err());
}

#[test]
fn test_scan_root_must_be_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "x").unwrap();

    assert!(scan(&file, &SweepConfig::default()).is_err());
}

// The worked example from the project docs: sim/work is swept as a whole,
// build.rpt goes, top.qpf stays.
#[test]
fn test_quartus_project_example() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sim/work")).unwrap();
    fs::write(dir.path().join("sim/work/trace.vcd"), "waveform").unwrap();
    fs::write(dir.path().join("top.qpf"), "project").unwrap();
    fs::write(dir.path().join("build.rpt"), "report").unwrap();

    let candidates = scan(dir.path(), &SweepConfig::default()).unwrap();

    assert_eq!(candidates.len(), 2);
    assert!(candidates
        .iter()
        .any(|c| c.kind == CandidateKind::Directory && c.path.ends_with("sim/work")));
    assert!(candidates
        .iter()
        .any(|c| c.kind == CandidateKind::File && c.path.ends_with("build.rpt")));
    assert!(!candidates.iter().any(|c| c.path.ends_with("top.qpf")));
}

//!
//! The benchmark discovery tests.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::config::Config;

use super::TestsDirectory;

fn directory(files: &[&str], directories: &[&str]) -> (tempfile::TempDir, TestsDirectory) {
    let root = tempfile::tempdir().expect("Temporary directory");
    for file in files.iter() {
        std::fs::write(root.path().join(file), "").expect("Always valid");
    }
    for directory in directories.iter() {
        std::fs::create_dir(root.path().join(directory)).expect("Always valid");
    }
    let config = Config {
        benchmark_directory: root.path().to_path_buf(),
        ..Config::default()
    };
    let tests_directory = TestsDirectory::new(&config);
    (root, tests_directory)
}

fn names(paths: Vec<PathBuf>) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            path.file_name()
                .expect("Always exists")
                .to_string_lossy()
                .to_string()
        })
        .collect()
}

#[test]
fn prefix_excludes_support_sources() {
    let (_root, directory) = directory(&["fs_read.c", "fs_write.c", "bench.c", "imfs.c"], &[]);

    let paths = directory
        .discover(&["fs_".to_owned()])
        .expect("Always valid");

    assert_eq!(names(paths), vec!["fs_read.c", "fs_write.c"]);
}

#[test]
fn no_prefix_matches_everything() {
    let (_root, directory) = directory(
        &[
            "fs_read.c",
            "sys_close.c",
            "imfs_grate.grate",
            "bench.c",
            "imfs.c",
            "bench.h",
            "README.md",
        ],
        &["imfs_grate", "geteuid_grate"],
    );

    let paths = directory.discover(&[]).expect("Always valid");

    assert_eq!(
        names(paths),
        vec!["fs_read.c", "imfs_grate.grate", "sys_close.c"]
    );
}

#[test]
fn overlapping_prefixes_are_deduplicated() {
    let (_root, directory) = directory(&["fs_read.c", "fs_write.c", "ipc_pipe.c"], &[]);

    let paths = directory
        .discover(&["fs".to_owned(), "fs_r".to_owned(), "ipc".to_owned()])
        .expect("Always valid");

    assert_eq!(names(paths), vec!["fs_read.c", "fs_write.c", "ipc_pipe.c"]);
}

#[test]
fn directories_are_skipped() {
    let (_root, directory) = directory(&[], &["weird.grate", "nested.c"]);

    let paths = directory.discover(&[]).expect("Always valid");

    assert!(paths.is_empty());
}

#[test]
fn missing_directory_yields_nothing() {
    let config = Config {
        benchmark_directory: Path::new("/definitely/not/a/benchmark/directory").to_path_buf(),
        ..Config::default()
    };

    let paths = TestsDirectory::new(&config)
        .discover(&[])
        .expect("Always valid");

    assert!(paths.is_empty());
}

//!
//! The benchmark runner tests.
//!

use std::sync::Arc;

use crate::config::repository::Repository;
use crate::config::Config;
use crate::error::Kind as FailureKind;
use crate::results::measurement::Measurement;
use crate::results::ResultTable;
use crate::summary::element::outcome::Outcome;
use crate::summary::Summary;
use crate::tool::fake::FakeInvoker;
use crate::tool::ToolInvoker;
use crate::BenchmarkRunner;

struct Fixture {
    root: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("Temporary directory");
        let benchmarks = root.path().join("benchmarks");
        std::fs::create_dir_all(&benchmarks).expect("Always valid");
        for name in ["fs_read.c", "imfs.c", "bench.c", "imfs_grate.fs_read.grate"] {
            std::fs::write(benchmarks.join(name), "").expect("Always valid");
        }
        std::fs::create_dir_all(root.path().join("grates").join("imfs_grate"))
            .expect("Always valid");
        Self { root }
    }

    fn config(&self) -> Config {
        Config {
            benchmark_directory: self.root.path().join("benchmarks"),
            sandbox_root: self.root.path().join("lindfs"),
            repository: Repository {
                working_copy: self.root.path().join("grates"),
                ..Repository::default()
            },
            ..Config::default()
        }
    }

    fn run(&self, invoker: &Arc<FakeInvoker>, prefixes: &[&str]) -> (ResultTable, Summary) {
        let invoker: Arc<dyn ToolInvoker> = invoker.clone();
        let mut runner = BenchmarkRunner::new(self.config(), invoker, Summary::new(false, true));
        let prefixes = prefixes
            .iter()
            .map(|prefix| prefix.to_string())
            .collect::<Vec<String>>();
        let mut results = ResultTable::default();
        runner
            .run(prefixes.as_slice(), &mut results)
            .expect("Always valid");
        (results, runner.into_summary())
    }
}

fn invoker() -> FakeInvoker {
    FakeInvoker::default()
        .respond("cc ", "")
        .respond("lind-boot fs_read.cwasm", "fs_read\t1\t10\t300\n")
        .respond(
            "lind-boot imfs_grate.cwasm fs_read.cwasm",
            "fs_read\t1\t10\t500\n",
        )
        .respond("lindfs/fs_read", "fs_read\t1\t10\t100\n")
}

fn reported(value: &str) -> Measurement {
    Measurement::Reported(value.to_owned())
}

#[test]
fn fills_every_platform_column() {
    let fixture = Fixture::new();
    let invoker = Arc::new(invoker());

    let (results, summary) = fixture.run(&invoker, &[]);

    let record = results.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.linux, reported("100"));
    assert_eq!(record.lind, reported("300"));
    assert_eq!(record.grate, reported("500"));
    assert_eq!(record.loops, reported("10"));
    assert_eq!(summary.measured(), 2);
    assert_eq!(summary.skipped(), 0);
}

#[test]
fn runs_benchmarks_in_order() {
    let fixture = Fixture::new();
    let invoker = Arc::new(invoker());

    fixture.run(&invoker, &[]);

    let commands = invoker.commands();
    let position = |predicate: &dyn Fn(&crate::tool::command::Command) -> bool| {
        commands
            .iter()
            .position(predicate)
            .expect("Always invoked")
    };
    let native_build = position(&|command| command.program == "cc");
    let sandbox_build = position(&|command| command.program == "lind_compile");
    let sandbox_run = position(&|command| command.to_string() == "lind-boot fs_read.cwasm");
    let native_run = position(&|command| command.program.ends_with("lindfs/fs_read"));
    let shim_build = position(&|command| command.program == "bash");
    let composite_run = position(&|command| {
        command.to_string() == "lind-boot imfs_grate.cwasm fs_read.cwasm"
    });

    assert!(native_build < sandbox_build);
    assert!(sandbox_build < sandbox_run);
    assert!(sandbox_run < native_run);
    assert!(native_run < shim_build);
    assert!(shim_build < composite_run);
}

#[test]
fn boots_composite_parts_in_name_order() {
    let fixture = Fixture::new();
    let invoker = Arc::new(invoker());

    fixture.run(&invoker, &["imfs_grate"]);

    let boot = invoker
        .commands()
        .into_iter()
        .find(|command| command.program == "lind-boot")
        .expect("Always exists");
    assert_eq!(boot.arguments, vec!["imfs_grate.cwasm", "fs_read.cwasm"]);
    assert!(boot.is_privileged);
}

#[test]
fn prefix_selects_benchmarks() {
    let fixture = Fixture::new();
    let invoker = Arc::new(invoker());

    let (results, summary) = fixture.run(&invoker, &["fs_"]);

    let record = results.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.grate, Measurement::NotMeasured);
    assert_eq!(summary.elements().len(), 1);
    assert!(!invoker
        .command_lines()
        .iter()
        .any(|line| line.contains("imfs_grate")));
}

#[test]
fn compilation_failure_skips_benchmark() {
    let fixture = Fixture::new();
    let invoker = Arc::new(
        FakeInvoker::default()
            .fail("lind_compile")
            .respond("lindfs/fs_read", "fs_read\t1\t10\t100\n"),
    );

    let (results, summary) = fixture.run(&invoker, &["fs_read"]);

    assert!(results.is_empty());
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failures(FailureKind::Compilation), 1);
    assert!(!invoker
        .commands()
        .iter()
        .any(|command| command.program.ends_with("fs_read") || command.program == "lind-boot"));
}

#[test]
fn execution_failure_keeps_other_platform() {
    let fixture = Fixture::new();
    let invoker = Arc::new(
        FakeInvoker::default()
            .respond("cc ", "")
            .fail("lind-boot")
            .respond("lindfs/fs_read", "fs_read\t1\t10\t100\n"),
    );

    let (results, summary) = fixture.run(&invoker, &[]);

    let record = results.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.linux, reported("100"));
    assert_eq!(record.lind, Measurement::NotMeasured);
    assert_eq!(record.grate, Measurement::NotMeasured);
    assert_eq!(summary.partial(), 1);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failures(FailureKind::Execution), 2);
}

#[test]
fn malformed_output_is_not_absorbed() {
    let fixture = Fixture::new();
    let invoker = Arc::new(
        FakeInvoker::default()
            .respond("cc ", "")
            .respond("lind-boot fs_read.cwasm", "fs_read\tone\t10\t300\n")
            .respond("lindfs/fs_read", "starting\nfinished\n"),
    );

    let (results, summary) = fixture.run(&invoker, &["fs_read"]);

    assert!(results.is_empty());
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failures(FailureKind::MalformedOutput), 2);
}

#[test]
fn missing_component_skips_composite() {
    let fixture = Fixture::new();
    std::fs::remove_dir(fixture.root.path().join("grates").join("imfs_grate"))
        .expect("Always valid");
    let invoker = Arc::new(invoker());

    let (results, summary) = fixture.run(&invoker, &[]);

    let record = results.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.grate, Measurement::NotMeasured);
    assert_eq!(summary.measured(), 1);
    assert_eq!(summary.failures(FailureKind::Resolution), 1);
    match summary.elements().last().map(|element| &element.outcome) {
        Some(Outcome::Skipped { failures }) => {
            assert_eq!(failures[0].kind(), FailureKind::Resolution)
        }
        outcome => panic!("Unexpected outcome: {outcome:?}"),
    }
}

#[test]
fn empty_directory_yields_empty_table() {
    let fixture = Fixture::new();
    let invoker = Arc::new(invoker());

    let (results, summary) = fixture.run(&invoker, &["nothing_"]);

    assert!(results.is_empty());
    assert!(summary.elements().is_empty());
    assert!(invoker.commands().is_empty());
    assert!(!fixture.root.path().join("lindfs").exists());
}

//!
//! The benchmark results table tests.
//!

use crate::platform::Platform;

use super::error::Error;
use super::measurement::Measurement;
use super::ResultTable;

#[test]
fn absorb_writes_only_the_platform_column() {
    let mut table = ResultTable::default();

    let count = table
        .absorb("fs_read\t4096\t1000\t2500\n", Platform::Lind)
        .expect("Always valid");

    assert_eq!(count, 1);
    let record = table.get("fs_read", 4096).expect("Always exists");
    assert_eq!(record.lind, Measurement::reported("2500"));
    assert_eq!(record.linux, Measurement::NotMeasured);
    assert_eq!(record.grate, Measurement::NotMeasured);
    assert_eq!(record.loops, Measurement::reported("1000"));
}

#[test]
fn absorb_keeps_other_platforms() {
    let mut table = ResultTable::default();
    table
        .absorb("fs_read\t1\t10\t300\n", Platform::Lind)
        .expect("Always valid");

    table
        .absorb("fs_read\t1\t20\t100\n", Platform::Linux)
        .expect("Always valid");

    let record = table.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.linux, Measurement::reported("100"));
    assert_eq!(record.lind, Measurement::reported("300"));
    assert_eq!(record.grate, Measurement::NotMeasured);
    assert_eq!(record.loops, Measurement::reported("20"));
}

#[test]
fn absorb_twice_is_last_write_wins() {
    let mut table = ResultTable::default();
    table
        .absorb("fs_read\t1\t10\t300\n", Platform::Lind)
        .expect("Always valid");

    table
        .absorb("fs_read\t1\t11\t310\n", Platform::Lind)
        .expect("Always valid");

    assert_eq!(table.len(), 1);
    let record = table.get("fs_read", 1).expect("Always exists");
    assert_eq!(record.lind, Measurement::reported("310"));
    assert_eq!(record.loops, Measurement::reported("11"));
}

#[test]
fn absorb_skips_malformed_lines() {
    let mut table = ResultTable::default();
    let output = "starting\nfs_read\t1\t10\t300\nfs_read\t2\t10\nnoise\ta\tb\tc\td\nfs_read\t2\t10\t400\n";

    let count = table.absorb(output, Platform::Grate).expect("Always valid");

    assert_eq!(count, 2);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("fs_read", 2).expect("Always exists").grate,
        Measurement::reported("400")
    );
}

#[test]
fn absorb_trims_fields() {
    let mut table = ResultTable::default();

    table
        .absorb("fs_read\t 1 \t10\t300\r\n", Platform::Linux)
        .expect("Always valid");

    assert_eq!(
        table.get("fs_read", 1).expect("Always exists").linux,
        Measurement::reported("300")
    );
}

#[test]
fn malformed_batch_leaves_table_empty() {
    let mut table = ResultTable::default();

    let result = table.absorb("fs_read\t1\t10\n", Platform::Linux);

    assert_eq!(result, Err(Error::NoRecords { lines: 1 }));
    assert!(table.is_empty());
}

#[test]
fn non_integer_param_rejects_batch() {
    let mut table = ResultTable::default();
    let output = "fs_read\t1\t10\t300\nfs_read\tbig\t10\t300\n";

    let result = table.absorb(output, Platform::Linux);

    assert_eq!(
        result,
        Err(Error::Param {
            line: 2,
            value: "big".to_owned()
        })
    );
    assert!(table.is_empty());
}

#[test]
fn empty_output_is_malformed() {
    let mut table = ResultTable::default();

    assert!(table.absorb("", Platform::Lind).is_err());
    assert!(table.is_empty());
}

#[test]
fn measurement_integer_conversion() {
    assert_eq!(Measurement::reported("42").as_integer(), 42);
    assert_eq!(Measurement::reported("4.2").as_integer(), -1);
    assert_eq!(Measurement::NotMeasured.as_integer(), -1);
    assert_eq!(Measurement::NotMeasured.to_string(), "-1");
}

//! # Library Registry Tests
//!
//! Registration order, lookup, and duplicate-name rejection.

use pretty_assertions::assert_eq;

use hdlbench_core::error::BenchError;
use hdlbench_core::library::{Library, LibraryRegistry};
use hdlbench_core::source::SourceRef;

#[test]
fn test_multiple_libraries_supported() {
    let mut registry = LibraryRegistry::new();
    registry
        .register("src_lib")
        .unwrap()
        .add_sources([SourceRef::dependency("src/utils_pkg.vhd")]);
    registry
        .register("axi_lib")
        .unwrap()
        .add_sources([SourceRef::dependency("axi/axi_pkg.vhd")]);

    assert_eq!(registry.len(), 2);
    let names: Vec<&str> = registry.iter().map(Library::name).collect();
    assert_eq!(names, ["src_lib", "axi_lib"]);
}

#[test]
fn test_duplicate_library_always_fails() {
    let mut registry = LibraryRegistry::new();
    registry
        .register("src_lib")
        .unwrap()
        .add_sources([SourceRef::dependency("a.vhd")]);

    // Identical name with a different source list still fails.
    let err = registry.register("src_lib").unwrap_err();
    assert!(matches!(err, BenchError::DuplicateLibrary { name } if name == "src_lib"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_source_order_is_declaration_order() {
    let mut registry = LibraryRegistry::new();
    let lib = registry.register("src_lib").unwrap();
    lib.add_sources([
        SourceRef::dependency("src/utils_pkg.vhd"),
        SourceRef::dependency("src/alu.vhd"),
        SourceRef::testbench("tb/alu_tb.vhd"),
    ]);

    let paths: Vec<_> = registry
        .get("src_lib")
        .unwrap()
        .sources()
        .iter()
        .map(|s| s.path.to_string_lossy().into_owned())
        .collect();
    assert_eq!(paths, ["src/utils_pkg.vhd", "src/alu.vhd", "tb/alu_tb.vhd"]);
}

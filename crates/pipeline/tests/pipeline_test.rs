//! Integration tests for the generate-config pipeline
//!
//! The store and converter are mockall doubles, so these tests pin the
//! pipeline's contract: validation order, cascade precedence, failure
//! normalization, and output handling.

use kongen_common::{ConversionResult, Result};
use kongen_converter::SpecConverter;
use kongen_pipeline::{generate_config, GenerateConfigRequest};
use kongen_store::{ApiSpec, SpecStore};
use mockall::mock;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mock! {
    Store {}
    impl SpecStore for Store {
        fn get(&self, identifier: &str) -> Result<Option<ApiSpec>>;
        fn prompt_choice(&self, ci: bool) -> Result<Option<ApiSpec>>;
    }
}

mock! {
    Converter {}
    impl SpecConverter for Converter {
        fn convert_contents(&self, contents: &str, selector: &str) -> Result<ConversionResult>;
        fn convert_file(&self, path: &Path, selector: &str) -> Result<ConversionResult>;
    }
}

fn request(
    identifier: Option<&str>,
    kind: &str,
    output: Option<&Path>,
    working_dir: &Path,
) -> GenerateConfigRequest {
    GenerateConfigRequest {
        identifier: identifier.map(String::from),
        output_kind: kind.to_string(),
        output: output.map(Path::to_path_buf),
        working_dir: working_dir.to_path_buf(),
        ci: false,
    }
}

fn spec(contents: &str) -> ApiSpec {
    ApiSpec {
        name: "petstore".to_string(),
        contents: contents.to_string(),
    }
}

fn docs(texts: &[&str]) -> ConversionResult {
    ConversionResult::new(
        texts
            .iter()
            .map(|text| serde_yaml::from_str(text).unwrap())
            .collect(),
    )
}

#[test]
fn test_invalid_kind_fails_before_any_access() {
    let dir = TempDir::new().unwrap();
    // No expectations configured: any store or converter call panics.
    let store = MockStore::new();
    let converter = MockConverter::new();

    let req = request(Some("petstore"), "helm", None, dir.path());
    assert!(!generate_config(&req, &store, &converter));
}

#[test]
fn test_store_hit_uses_inline_contents() {
    let dir = TempDir::new().unwrap();
    // A file with the same identifier exists, but the store answer wins.
    fs::write(dir.path().join("petstore"), "from-file").unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .withf(|identifier| identifier == "petstore")
        .times(1)
        .returning(|_| Ok(Some(spec("from-store"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .withf(|contents, selector| {
            contents == "from-store" && selector == "kong-declarative-config"
        })
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1"])));

    let out = dir.path().join("kong.yaml");
    let req = request(Some("petstore"), "declarative", Some(&out), dir.path());
    assert!(generate_config(&req, &store, &converter));
    assert_eq!(fs::read_to_string(&out).unwrap(), "a: 1\n");
}

#[test]
fn test_store_miss_falls_back_to_working_dir_file() {
    let dir = TempDir::new().unwrap();
    let spec_path = dir.path().join("petstore.yaml");
    fs::write(&spec_path, "openapi: 3.0.0").unwrap();

    let mut store = MockStore::new();
    store.expect_get().times(1).returning(|_| Ok(None));

    let expected = spec_path.clone();
    let mut converter = MockConverter::new();
    converter
        .expect_convert_file()
        .withf(move |path, selector| path == expected && selector == "kong-for-kubernetes")
        .times(1)
        .returning(|_, _| Ok(docs(&["kind: Ingress"])));

    let out = dir.path().join("kong.yaml");
    let req = request(Some("petstore.yaml"), "kubernetes", Some(&out), dir.path());
    assert!(generate_config(&req, &store, &converter));
}

#[test]
fn test_unreadable_file_is_a_resolution_failure() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store.expect_get().times(1).returning(|_| Ok(None));
    // Converter has no expectations: it must never run.
    let converter = MockConverter::new();

    let req = request(Some("missing.yaml"), "declarative", None, dir.path());
    assert!(!generate_config(&req, &store, &converter));
}

#[test]
fn test_no_identifier_prompts_with_ci_flag() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store
        .expect_prompt_choice()
        .withf(|ci| *ci)
        .times(1)
        .returning(|_| Ok(Some(spec("openapi: 3.0.0"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1"])));

    let mut req = request(None, "declarative", None, dir.path());
    req.ci = true;
    assert!(generate_config(&req, &store, &converter));
}

#[test]
fn test_zero_documents_fail_like_missing_specification() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Ok(Some(spec("openapi: 3.0.0"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .times(1)
        .returning(|_, _| Ok(ConversionResult::default()));

    let req = request(Some("petstore"), "declarative", None, dir.path());
    assert!(!generate_config(&req, &store, &converter));
}

#[test]
fn test_converter_error_is_caught_and_reported() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Ok(Some(spec("not a spec"))));

    let mut converter = MockConverter::new();
    converter.expect_convert_contents().times(1).returning(|_, _| {
        Err(kongen_common::ConfigError::Conversion(
            "scripted failure".to_string(),
        ))
    });

    let req = request(Some("petstore"), "declarative", None, dir.path());
    assert!(!generate_config(&req, &store, &converter));
}

#[test]
fn test_documents_joined_with_single_separator() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Ok(Some(spec("openapi: 3.0.0"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1", "b: 2"])));

    let out = dir.path().join("kong.yaml");
    let req = request(Some("petstore"), "declarative", Some(&out), dir.path());
    assert!(generate_config(&req, &store, &converter));
    assert_eq!(fs::read_to_string(&out).unwrap(), "a: 1\n---\nb: 2\n");
}

#[test]
fn test_write_failure_returns_false_without_crashing() {
    let dir = TempDir::new().unwrap();
    // A plain file where a directory is expected blocks the write.
    fs::write(dir.path().join("blocker"), "file").unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Ok(Some(spec("openapi: 3.0.0"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1"])));

    let out = PathBuf::from("blocker/kong.yaml");
    let req = request(Some("petstore"), "declarative", Some(&out), dir.path());
    assert!(!generate_config(&req, &store, &converter));
}

#[test]
fn test_stdout_emission_succeeds_without_output_path() {
    let dir = TempDir::new().unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .times(1)
        .returning(|_| Ok(Some(spec("openapi: 3.0.0"))));

    let mut converter = MockConverter::new();
    converter
        .expect_convert_contents()
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1"])));

    let req = request(Some("petstore"), "declarative", None, dir.path());
    assert!(generate_config(&req, &store, &converter));
}

#[test]
fn test_store_error_falls_back_to_file_without_raising() {
    let dir = TempDir::new().unwrap();
    let spec_path = dir.path().join("petstore.yaml");
    fs::write(&spec_path, "openapi: 3.0.0").unwrap();

    let mut store = MockStore::new();
    store.expect_get().times(1).returning(|_| {
        Err(kongen_common::ConfigError::Resolution(
            "store unavailable".to_string(),
        ))
    });

    let mut converter = MockConverter::new();
    converter
        .expect_convert_file()
        .times(1)
        .returning(|_, _| Ok(docs(&["a: 1"])));

    let req = request(Some("petstore.yaml"), "declarative", None, dir.path());
    assert!(generate_config(&req, &store, &converter));
}

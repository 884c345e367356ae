use crate::{compile_content_module, CompileOptions, EXPORT_NAMES};
use dwd_content::Document;

fn compile(document: &Document) -> String {
    compile_content_module(document, CompileOptions::default()).expect("Failed to compile")
}

#[test]
fn test_header_marks_output_as_generated() {
    let result = compile(&Document::seed().unwrap());

    let mut lines = result.lines();
    assert_eq!(
        lines.next(),
        Some("// AUTO-GENERATED from content.data.json. Do not edit directly.")
    );
    assert_eq!(lines.next(), Some("// Use the editor UI or run `dwd generate`."));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn test_one_export_per_section_in_order() {
    let result = compile(&Document::seed().unwrap());

    let exported: Vec<&str> = result
        .lines()
        .filter_map(|line| line.strip_prefix("export const "))
        .map(|rest| rest.split(' ').next().unwrap())
        .collect();

    assert_eq!(exported, EXPORT_NAMES.to_vec());
}

#[test]
fn test_sections_are_pretty_json_literals() {
    let result = compile(&Document::seed().unwrap());

    println!("Generated code:\n{}", result);

    assert!(result.contains("export const BRAND = {\n  \"left\": \"DWD\",\n  \"dot\": \".\",\n  \"right\": \"HC\"\n};"));
    assert!(result.contains("export const ICON_KEYS = [\n  \"Activity\","));
    assert!(result.contains("\"statusLines\": [\n    \"CONNECTING_NODES: {count}\","));
    assert!(result.contains("\"x\": 80,"));
    assert!(result.contains("\"kor\": \"세포치료제\""));
}

#[test]
fn test_blank_line_between_exports_and_trailing_newline() {
    let result = compile(&Document::seed().unwrap());

    assert!(result.contains("};\n\nexport const ICON_KEYS"));
    assert!(result.ends_with("]\n};\n"));
    assert!(!result.ends_with("\n\n"));
}

#[test]
fn test_each_export_matches_its_section() {
    let document = Document::seed().unwrap();
    let result = compile(&document);

    let start = result.find("export const TEAM = ").unwrap() + "export const TEAM = ".len();
    let end = start + result[start..].find(";\n").unwrap();
    let team: dwd_content::Team = serde_json::from_str(&result[start..end]).unwrap();

    assert_eq!(team, document.team);
}

#[test]
fn test_output_is_deterministic() {
    let document = Document::seed().unwrap();
    assert_eq!(compile(&document), compile(&document.clone()));
}

#[test]
fn test_custom_header_options() {
    let options = CompileOptions {
        source_name: "site.json".to_string(),
        regenerate_command: "make content".to_string(),
    };
    let result = compile_content_module(&Document::seed().unwrap(), options).unwrap();

    assert!(result.starts_with("// AUTO-GENERATED from site.json. Do not edit directly.\n"));
    assert!(result.contains("run `make content`."));
}

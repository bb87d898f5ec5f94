//! Integration tests for theme loading

use std::path::Path;

use mindmap_logo::{build_document, DocumentConfig, Theme, BRANCH_COUNT};

#[test]
fn test_load_theme_file() {
    let theme = Theme::from_file(Path::new("tests/fixtures/ocean.toml")).unwrap();

    assert_eq!(theme.name.as_deref(), Some("Ocean"));
    assert_eq!(theme.root_label, "Atlas");
    assert_eq!(theme.nodes.len(), BRANCH_COUNT);
    assert_eq!(theme.nodes[0].label, "currents");
    assert_eq!(theme.nodes[0].color.name, "abyss");
    assert_eq!(theme.background.name, "foam");

    // omitted keys fall back to the defaults
    assert_eq!(theme.color_model, "RGB");
    assert_eq!(theme.font, "M+ 1mn");
    assert_eq!(theme.root_font_style, "bfseries");
    assert_eq!(theme.root_font_size, "large");
}

#[test]
fn test_loaded_theme_builds() {
    let theme = Theme::from_file(Path::new("tests/fixtures/ocean.toml")).unwrap();

    let tex = build_document(&theme, &DocumentConfig::default()).unwrap();

    assert!(tex.contains("\\node[font=\\bfseries\\large] {Atlas}"));
    assert!(tex.contains("\\definecolor{coral}{RGB}{236, 112, 99}"));
    assert!(tex.contains("child[concept color=seagrass] { node {kelp}"));
}

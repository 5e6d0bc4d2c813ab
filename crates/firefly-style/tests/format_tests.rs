//! Integration tests for the format map.

use std::path::Path;

use firefly_classify::Category;
use firefly_style::{FormatMap, FormatMapError, Rgb, Theme};

#[test]
fn test_default_display_names() {
    let map = FormatMap::default();
    assert_eq!(
        map.delimiter.display_name,
        "Lit HTML Template Delimiter Character"
    );
    assert_eq!(map.element.display_name, "Lit HTML Template Element");
    assert_eq!(
        map.lit_attribute_name.display_name,
        "Lit HTML Template Lit Special Attribute Name"
    );
}

#[test]
fn test_default_colors_per_theme() {
    let map = FormatMap::default();
    assert_eq!(map.delimiter.color(Theme::Light), Rgb::new(0, 0, 255));
    assert_eq!(map.delimiter.color(Theme::Dark), Rgb::new(192, 192, 192));
    assert_eq!(map.element.color(Theme::Dark), Rgb::new(86, 156, 214));
}

#[test]
fn test_definition_covers_every_category() {
    let map = FormatMap::default();
    assert_eq!(
        map.definition(Category::Quote).display_name,
        "Lit HTML Template Quote"
    );
    assert_eq!(
        map.definition(Category::LitAttributeValue).color(Theme::Light),
        Rgb::new(0, 100, 0)
    );
}

#[test]
fn test_json_round_trip() {
    let map = FormatMap::default();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(FormatMap::from_json(&json).unwrap(), map);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    assert!(matches!(
        FormatMap::from_json("{}"),
        Err(FormatMapError::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    assert!(matches!(
        FormatMap::load(Path::new("/nonexistent/formats.json")),
        Err(FormatMapError::Io(_))
    ));
}

//! End-to-end rendering through the public `Mulang` API

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;

use mulang::config::MulangOptions;
use mulang::dictionary::ContentDictionary;
use mulang::markup::MarkupText;
use mulang::range::build_ranges;
use mulang::scanner::scan;
use mulang::{
    Mulang,
    MulangError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title class="m__page_title"></title>
  </head>
  <body>
    <h1 class="hero m__landing_title"></h1>
    <p class='m__landing_description' id="intro"></p>
    <footer class="m__not_translated"></footer>
  </body>
</html>
"#;

const LANDING_JSON: &str = r#"{
    "meta": {
        "languages": ["eng", "kor"],
        "linebreak": "<br>",
    },
    "contents": {
        "page_title": ["Mulang", "물랑"],
        "landing_title": ["Hello World!", "안녕 세상!"],
        // descriptions may contain markup
        "landing_description": ["line1<br>line2", "줄1<br>줄2"],
    },
}"#;

fn landing() -> Mulang {
    let dictionary = ContentDictionary::from_json_str(LANDING_JSON, "<inline>").unwrap();
    Mulang::new(MulangOptions::inline(LANDING_HTML, dictionary)).unwrap()
}

#[test]
fn test_render_landing_page_per_language() {
    let result = landing().render().unwrap();

    assert_eq!(
        result.get("eng").unwrap(),
        concat!(
            "<!DOCTYPE html> <html> <head> <title class=\"m__page_title\">Mulang</title> </head> ",
            "<body> <h1 class=\"hero m__landing_title\">Hello World!</h1> ",
            "<p class='m__landing_description' id=\"intro\">line1<br>line2</p> ",
            "<footer class=\"m__not_translated\"></footer> </body> </html> "
        )
    );
    assert_eq!(
        result.get("kor").unwrap(),
        concat!(
            "<!DOCTYPE html> <html> <head> <title class=\"m__page_title\">물랑</title> </head> ",
            "<body> <h1 class=\"hero m__landing_title\">안녕 세상!</h1> ",
            "<p class='m__landing_description' id=\"intro\">줄1<br>줄2</p> ",
            "<footer class=\"m__not_translated\"></footer> </body> </html> "
        )
    );
}

#[test]
fn test_value_follows_its_insertion_point() {
    let mulang = landing();
    let markup = mulang.markup();
    let occurrences = scan(markup);
    let ranges = build_ranges(&occurrences, markup.len());
    let result = mulang.render().unwrap();

    for (language_index, language) in ["eng", "kor"].iter().enumerate() {
        let html = result.get(language).unwrap();
        let mut offset = 0;
        for range in &ranges {
            let slice = markup.slice(range.slice_start, range.slice_end).unwrap();
            assert_eq!(&html[offset..offset + slice.len()], slice);
            offset += slice.len();
            if let Some(text) = mulang.dictionary().content(&range.name, language_index) {
                assert_eq!(&html[offset..offset + text.len()], text);
                offset += text.len();
            }
        }
        assert_eq!(offset, html.len());
    }
}

#[test]
fn test_render_twice_is_identical() {
    let mulang = landing();

    assert_eq!(mulang.render().unwrap(), mulang.render().unwrap());
}

#[test]
fn test_unsupported_linebreak_is_reported() {
    let json = LANDING_JSON.replace(r#""linebreak": "<br>""#, r#""linebreak": "\n""#);
    let dictionary = ContentDictionary::from_json_str(&json, "<inline>").unwrap();
    let mulang = Mulang::new(MulangOptions::inline(LANDING_HTML, dictionary)).unwrap();

    let err = mulang.render().unwrap_err();

    assert!(matches!(err, MulangError::UnsupportedLinebreak(ref v) if v == "\n"));
}

#[test]
fn test_markup_without_markers_is_copied_per_language() {
    let dictionary = ContentDictionary::from_json_str(LANDING_JSON, "<inline>").unwrap();
    let mulang = Mulang::new(MulangOptions::inline("<p>\n static </p>", dictionary)).unwrap();

    let result = mulang.render().unwrap();

    assert_eq!(result.len(), 2);
    for document in &result {
        assert_eq!(document.html, MarkupText::normalize("<p>\n static </p>").as_str());
    }
}

#[test]
fn test_render_from_files_and_write_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("landing.html");
    let json_path = temp_dir.path().join("landing.json");
    fs::write(&html_path, LANDING_HTML).unwrap();
    fs::write(&json_path, LANDING_JSON).unwrap();

    let mulang = Mulang::new(MulangOptions::from_paths(&html_path, &json_path)).unwrap();
    let result = mulang.render().unwrap();
    let naming = mulang.output_naming(temp_dir.path().join("dist"));
    let report = mulang.write_files(&result, &naming);

    assert!(report.is_success());
    let eng = fs::read_to_string(temp_dir.path().join("dist/landing.eng.html")).unwrap();
    assert_eq!(eng, result.get("eng").unwrap());
    let kor = fs::read_to_string(temp_dir.path().join("dist/landing.kor.html")).unwrap();
    assert_eq!(kor, result.get("kor").unwrap());
}

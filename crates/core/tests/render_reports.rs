use scout_core::analyze::analyze_unit;
use scout_core::model::AnalysisReport;
use scout_core::render::{render_json, render_text, RenderOptions};
use scout_core::source::SourceUnit;

const SAMPLE: &str = "\
#include <QWidget>
#include <vector>

class Widget : public QWidget {
};

Widget::Widget() {
}

Widget::~Widget() {
}

int Widget::width() const {
    return 0;
}

void Widget::resize(std::vector<int> sizes) {
}
";

fn sample_report() -> AnalysisReport {
    analyze_unit(&SourceUnit::from_content("widget.cpp", SAMPLE))
}

#[test]
fn default_rendering_is_overview_then_function_listing() {
    let text = render_text(&sample_report(), &RenderOptions::default());
    let expected = concat!(
        "File: widget.cpp\n",
        "Lines: 19\n",
        "Functions: 4\n",
        "Classes: 1\n",
        "Types: 6\n",
        "Includes: 2\n",
        "\n",
        "Functions:\n",
        "- void Widget::Widget [ctor]\n",
        "- void Widget::~Widget [dtor]\n",
        "- int Widget::width\n",
        "- void Widget::resize"
    );
    assert_eq!(text, expected);
}

#[test]
fn class_filter_prints_only_the_class_listing() {
    let options = RenderOptions { classes: true, ..Default::default() };
    let text = render_text(&sample_report(), &options);
    assert_eq!(text, "Classes:\n- Widget : public QWidget");
}

#[test]
fn type_filter_prints_the_sorted_type_listing() {
    let options = RenderOptions { types: true, ..Default::default() };
    let text = render_text(&sample_report(), &options);
    let expected = concat!(
        "Types:\n",
        "- QWidget\n",
        "- Widget::Widget\n",
        "- Widget::resize\n",
        "- Widget::width\n",
        "- int\n",
        "- std::vector"
    );
    assert_eq!(text, expected);
}

#[test]
fn names_only_function_listing_is_bare_names() {
    let options = RenderOptions { functions: true, names_only: true, ..Default::default() };
    let text = render_text(&sample_report(), &options);
    assert_eq!(text, "Widget\n~Widget\nwidth\nresize");
}

#[test]
fn names_only_class_listing_is_bare_names() {
    let unit = SourceUnit::from_content(
        "pair.h",
        "class Alpha {\n};\nclass Beta : public Alpha {\n};\n",
    );
    let report = analyze_unit(&unit);

    let options = RenderOptions { classes: true, names_only: true, ..Default::default() };
    assert_eq!(render_text(&report, &options), "Alpha\nBeta");
}

#[test]
fn sort_reorders_the_function_listing_for_display_only() {
    let report = sample_report();
    let options = RenderOptions { functions: true, sort: true, ..Default::default() };
    let text = render_text(&report, &options);
    let expected = concat!(
        "Functions:\n",
        "- void Widget::Widget [ctor]\n",
        "- void Widget::resize\n",
        "- int Widget::width\n",
        "- void Widget::~Widget [dtor]"
    );
    assert_eq!(text, expected);

    // The report itself keeps source order.
    assert_eq!(report.functions[1].function_name, "~Widget");
}

#[test]
fn sort_leaves_already_sorted_listings_unchanged() {
    let content = "class Left {\n};\nclass Right {\n};\nvoid Pair::first() {\nvoid Pair::second() {\n";
    let report = analyze_unit(&SourceUnit::from_content("pair.cpp", content));

    let plain = RenderOptions { functions: true, classes: true, types: true, ..Default::default() };
    let sorted = RenderOptions { sort: true, ..plain };
    assert_eq!(render_text(&report, &plain), render_text(&report, &sorted));
}

#[test]
fn summary_section_sorts_buckets_and_truncates_long_ones() {
    let mut content = String::new();
    for name in ["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"] {
        content.push_str(&format!("void Pool::{}() {{\n", name));
    }
    content.push_str("int Pool::size() {\n");
    let report = analyze_unit(&SourceUnit::from_content("pool.cpp", &content));

    let options = RenderOptions { summary: true, ..Default::default() };
    let text = render_text(&report, &options);
    let expected = concat!(
        "Function summary by return type:\n",
        "- int (1): size\n",
        "- void (8): a1, b2, c3, d4, e5\n",
        "  ... and 3 more"
    );
    assert_eq!(text, expected);
}

#[test]
fn summary_names_sort_only_with_the_sort_switch() {
    let content = "void Pool::zeta() {\nvoid Pool::alpha() {\n";
    let report = analyze_unit(&SourceUnit::from_content("pool.cpp", content));

    let plain = RenderOptions { summary: true, ..Default::default() };
    assert_eq!(
        render_text(&report, &plain),
        "Function summary by return type:\n- void (2): zeta, alpha"
    );

    let sorted = RenderOptions { summary: true, sort: true, ..Default::default() };
    assert_eq!(
        render_text(&report, &sorted),
        "Function summary by return type:\n- void (2): alpha, zeta"
    );
}

#[test]
fn combined_filters_keep_the_fixed_section_order() {
    let options =
        RenderOptions { classes: true, types: true, summary: true, ..Default::default() };
    let text = render_text(&sample_report(), &options);

    let classes_at = text.find("Classes:").expect("classes section");
    let types_at = text.find("Types:").expect("types section");
    let summary_at = text.find("Function summary").expect("summary section");
    assert!(classes_at < types_at && types_at < summary_at);
    assert!(!text.contains("File:"));
    assert!(!text.contains("Functions:"));
}

#[test]
fn json_rendering_matches_the_wire_contract() {
    let json = render_json(&sample_report()).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");

    let object = value.as_object().expect("top-level object");
    assert_eq!(object.len(), 7);
    for key in
        ["file", "line_count", "functions", "classes", "includes", "types", "function_summary"]
    {
        assert!(object.contains_key(key), "missing key {key}");
    }

    assert_eq!(value["line_count"], 19);
    assert_eq!(value["functions"][0]["line"], 7);
    assert_eq!(value["functions"][0]["is_constructor"], true);
    assert_eq!(value["classes"][0]["type"], "class");
    assert_eq!(value["function_summary"][0]["return_type"], "void");
    assert_eq!(value["function_summary"][0]["functions"][1], "~Widget");

    // Serialized field order follows the report struct.
    let file_at = json.find("\"file\"").expect("file key");
    let count_at = json.find("\"line_count\"").expect("line_count key");
    assert!(file_at < count_at);
}

#[test]
fn json_rendering_is_stable_across_runs() {
    let report = sample_report();
    assert_eq!(render_json(&report).unwrap(), render_json(&report).unwrap());
}

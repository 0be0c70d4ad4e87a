//! End-to-end extraction from realistic HTML pages

use contact_handles::{
    parse_handles_from_html, parse_handles_from_html_with, ExtractConfig, HandleCollection,
    HandleField, PageData, Platform,
};
use strum::IntoEnumIterator;

const ABOUT_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>About Example Bakery</title>
  <style>.footer { color: #333; }</style>
  <script type="application/ld+json">{"email": "schema@example.com"}</script>
</head>
<body>
  <header>
    <nav>
      <a href="/">Home</a>
      <a href="#contact">Contact</a>
      <a href="javascript:void(0)">Menu</a>
    </nav>
  </header>
  <main>
    <section id="contact">
      <h2>Contact</h2>
      <p>Orders: orders@example-bakery.com<br>Press: PRESS@example-bakery.com</p>
      <p>Phone: (555) 010-2030, mobile +44 7700 900123</p>
      <p>Open since 2009-04-01 &middot; 12 employees</p>
      <a href="mailto:orders@example-bakery.com">Email orders</a>
      <a href="mailto:jobs@example-bakery.com?subject=Application">Jobs</a>
      <a href="mailto:broken@@example">Broken</a>
      <a href="tel:+15550102030">Call</a>
      <a href="TEL:+447700900123">Call UK</a>
    </section>
  </main>
  <footer>
    <a href="https://www.facebook.com/examplebakery">Facebook</a>
    <a href="https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com">Share</a>
    <a href="https://twitter.com/examplebakery">Twitter</a>
    <a href="https://twitter.com/intent/tweet?text=yum">Tweet</a>
    <a href="//www.instagram.com/examplebakery/">Instagram</a>
    <a href="https://www.linkedin.com/company/example-bakery">LinkedIn</a>
    <a href="https://www.linkedin.com/company/example-bakery/">LinkedIn again</a>
  </footer>
</body>
</html>"##;

fn assert_normalized(handles: &HandleCollection) {
    for field in HandleField::iter() {
        let values = handles.field(field);
        let mut expected = values.to_vec();
        expected.sort();
        expected.dedup();
        assert_eq!(values, expected.as_slice(), "{} not normalized", field.key());
    }
}

#[test]
fn test_about_page_emails() {
    let handles = parse_handles_from_html(ABOUT_PAGE, None);
    assert_eq!(
        handles.emails,
        vec![
            "PRESS@example-bakery.com",
            "jobs@example-bakery.com",
            "orders@example-bakery.com",
        ]
    );
}

#[test]
fn test_about_page_phones() {
    let handles = parse_handles_from_html(ABOUT_PAGE, None);
    assert_eq!(handles.phones, vec!["+15550102030", "+447700900123"]);
    // Dates and small counts in the text are not phone numbers
    assert_eq!(
        handles.phones_uncertain,
        vec!["(555) 010-2030", "+44 7700 900123"]
    );
}

#[test]
fn test_about_page_social_profiles() {
    let handles = parse_handles_from_html(ABOUT_PAGE, None);
    assert_eq!(
        handles.profiles(Platform::Facebook),
        &["https://www.facebook.com/examplebakery".to_string()]
    );
    assert_eq!(
        handles.profiles(Platform::Twitter),
        &["https://twitter.com/examplebakery".to_string()]
    );
    assert_eq!(
        handles.profiles(Platform::Instagram),
        &["https://www.instagram.com/examplebakery".to_string()]
    );
    assert_eq!(
        handles.profiles(Platform::LinkedIn),
        &["https://www.linkedin.com/company/example-bakery".to_string()]
    );
}

#[test]
fn test_about_page_is_normalized() {
    assert_normalized(&parse_handles_from_html(ABOUT_PAGE, None));
}

#[test]
fn test_mailto_and_visible_text_yield_one_entry() {
    let html = r#"<p>Contact: dana@example.com</p>
        <a href="mailto:dana@example.com">dana@example.com</a>"#;
    let handles = parse_handles_from_html(html, None);
    assert_eq!(handles.emails, vec!["dana@example.com"]);
}

#[test]
fn test_script_content_is_not_scanned() {
    let handles = parse_handles_from_html(ABOUT_PAGE, None);
    assert!(!handles.emails.iter().any(|e| e == "schema@example.com"));
}

#[test]
fn test_malformed_html_never_fails() {
    let inputs = [
        "",
        "   ",
        "<",
        "</p></div></html>",
        "<a href='mailto:x@example.com'",
        "<<a href=\"tel:\">>",
        "<table><tr><td>unterminated",
        "\u{feff}<p>\u{0}</p>",
    ];
    for html in inputs {
        let handles = parse_handles_from_html(html, None);
        assert_normalized(&handles);
        assert!(handles.phones_uncertain.is_empty(), "{html:?}");
    }
}

#[test]
fn test_result_always_has_every_field() {
    let handles = parse_handles_from_html("<p>nothing here</p>", None);
    let value = serde_json::to_value(&handles).unwrap();
    for key in [
        "emails",
        "phones",
        "phonesUncertain",
        "linkedIns",
        "twitters",
        "instagrams",
        "facebooks",
    ] {
        assert_eq!(value[key], serde_json::json!([]), "{key}");
    }
}

#[test]
fn test_page_data_is_reused_on_second_call() {
    let mut page = PageData::default();
    let first = parse_handles_from_html(ABOUT_PAGE, Some(&mut page));
    assert!(page.text.is_some());
    assert!(page.link_urls.is_some());

    // Both views are present, so the HTML argument is not consulted
    let second = parse_handles_from_html("", Some(&mut page));
    assert_eq!(first, second);
}

#[test]
fn test_text_limit_applies_to_visible_text_only() {
    let config = ExtractConfig {
        max_text_chars: 10,
        ..Default::default()
    };
    let html = r#"<p>0123456789 late@example.com</p><a href="mailto:link@example.com">x</a>"#;
    let handles = parse_handles_from_html_with(html, None, &config);
    assert_eq!(handles.emails, vec!["link@example.com"]);
}

#[test]
fn test_concurrent_calls_agree() {
    let expected = parse_handles_from_html(ABOUT_PAGE, None);
    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| parse_handles_from_html(ABOUT_PAGE, None)))
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), expected);
        }
    });
}

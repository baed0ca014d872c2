//! Behavioural tests for the crawler meta-tag filter.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

use porto_data::{EdgeResponse, SocialPreview, rewrite_for_crawler};

const INDEX: &str = "<!doctype html><html><head><meta charset=\"utf-8\"><title>Porto Map</title></head><body><div id=\"root\"></div></body></html>";

#[fixture]
fn page() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn served() -> RefCell<Option<EdgeResponse>> {
    RefCell::new(None)
}

fn request(page: &RefCell<String>, served: &RefCell<Option<EdgeResponse>>, agent: &str) {
    let html = page.borrow();
    *served.borrow_mut() = Some(rewrite_for_crawler(agent, &html, &SocialPreview::default()));
}

#[given("the guide's index page")]
fn index_page(#[from(page)] page: &RefCell<String>) {
    *page.borrow_mut() = INDEX.to_owned();
}

#[when("Twitterbot requests the page")]
fn twitterbot(
    #[from(page)] page: &RefCell<String>,
    #[from(served)] served: &RefCell<Option<EdgeResponse>>,
) {
    request(page, served, "Twitterbot/1.0");
}

#[when("a desktop browser requests the page")]
fn desktop_browser(
    #[from(page)] page: &RefCell<String>,
    #[from(served)] served: &RefCell<Option<EdgeResponse>>,
) {
    request(
        page,
        served,
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36",
    );
}

#[then("the response carries the Open Graph tags")]
fn has_tags(#[from(served)] served: &RefCell<Option<EdgeResponse>>) {
    let served = served.borrow();
    let response = served.as_ref().expect("a response was served");
    let body = response.body();
    assert!(body.contains(r#"<meta property="og:description" content="Interactive map of Porto">"#));
    assert!(body.contains(r#"<meta name="twitter:image" content="https://porto-map.netlify.app/porto.webp">"#));
    assert!(body.contains("</head><body>"));
}

#[then("the response is served as uncached HTML")]
fn uncached_html(#[from(served)] served: &RefCell<Option<EdgeResponse>>) {
    let served = served.borrow();
    let response = served.as_ref().expect("a response was served");
    assert!(response.is_rewritten());
    assert!(response.headers().contains(&("cache-control", "no-cache")));
    assert!(
        response
            .headers()
            .contains(&("content-type", "text/html; charset=utf-8"))
    );
}

#[then("the response is the original page")]
fn original_page(#[from(served)] served: &RefCell<Option<EdgeResponse>>) {
    let served = served.borrow();
    let response = served.as_ref().expect("a response was served");
    assert!(!response.is_rewritten());
    assert_eq!(response.body(), INDEX);
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/crawler_meta.feature", name = $title)]
        fn $fn_name(page: RefCell<String>, served: RefCell<Option<EdgeResponse>>) {
            let _ = (page, served);
        }
    };
}

register_scenario!(crawler_gets_preview, "a crawler receives preview tags");
register_scenario!(browser_gets_original, "a browser receives the page unchanged");

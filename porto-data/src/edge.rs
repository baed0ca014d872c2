//! Social-preview rewriting for crawler requests.
//!
//! Link-preview crawlers do not execute scripts, so the page they fetch
//! lacks the Open Graph and Twitter Card tags a browser would see. Requests
//! whose user agent identifies such a crawler get those tags inserted before
//! the first `</head>`; every other request passes through untouched.

/// User-agent fragments identifying link-preview crawlers, lower-case.
const CRAWLER_AGENTS: [&str; 3] = ["facebookexternalhit", "twitterbot", "linkedinbot"];

const HEAD_CLOSE: &str = "</head>";

/// Whether `user_agent` belongs to a social-media link-preview crawler.
///
/// # Examples
/// ```
/// use porto_data::is_social_crawler;
///
/// assert!(is_social_crawler("Twitterbot/1.0"));
/// assert!(!is_social_crawler("Mozilla/5.0 (X11; Linux x86_64)"));
/// ```
pub fn is_social_crawler(user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    CRAWLER_AGENTS.iter().any(|crawler| agent.contains(crawler))
}

/// Values advertised to link-preview crawlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPreview {
    /// Canonical page URL.
    pub url: String,
    pub title: String,
    pub description: String,
    /// Preview image location.
    pub image: String,
    /// MIME type of the preview image.
    pub image_type: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
    pub site_name: String,
}

impl Default for SocialPreview {
    fn default() -> Self {
        Self {
            url: "https://porto-map.netlify.app/".to_owned(),
            title: "Porto Map".to_owned(),
            description: "Interactive map of Porto".to_owned(),
            image: "https://porto-map.netlify.app/porto.webp".to_owned(),
            image_type: "image/webp".to_owned(),
            image_width: 1200,
            image_height: 630,
            image_alt: "Porto Map".to_owned(),
            site_name: "Porto Map".to_owned(),
        }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl SocialPreview {
    fn properties(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("property", "og:type", "website".to_owned()),
            ("property", "og:url", self.url.clone()),
            ("property", "og:title", self.title.clone()),
            ("property", "og:description", self.description.clone()),
            ("property", "og:image", self.image.clone()),
            ("property", "og:image:type", self.image_type.clone()),
            ("property", "og:image:width", self.image_width.to_string()),
            ("property", "og:image:height", self.image_height.to_string()),
            ("property", "og:image:alt", self.image_alt.clone()),
            ("property", "og:site_name", self.site_name.clone()),
            ("name", "twitter:card", "summary_large_image".to_owned()),
            ("name", "twitter:url", self.url.clone()),
            ("name", "twitter:title", self.title.clone()),
            ("name", "twitter:description", self.description.clone()),
            ("name", "twitter:image", self.image.clone()),
        ]
    }

    /// The `<meta>` elements for this preview, one per line.
    pub fn meta_tags(&self) -> String {
        self.properties()
            .into_iter()
            .map(|(attribute, key, value)| {
                format!(
                    "<meta {attribute}=\"{key}\" content=\"{}\">\n",
                    escape_attribute(&value)
                )
            })
            .collect()
    }
}

/// Outcome of the edge filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeResponse {
    /// Serve the origin response as-is.
    Passthrough(String),
    /// Serve the rewritten page with [`EdgeResponse::headers`].
    Rewritten(String),
}

impl EdgeResponse {
    pub fn body(&self) -> &str {
        match self {
            Self::Passthrough(body) | Self::Rewritten(body) => body,
        }
    }

    pub fn into_body(self) -> String {
        match self {
            Self::Passthrough(body) | Self::Rewritten(body) => body,
        }
    }

    /// Headers replacing the origin's when the page was rewritten. A
    /// passthrough keeps the origin headers, so this is empty.
    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Passthrough(_) => &[],
            Self::Rewritten(_) => &[
                ("content-type", "text/html; charset=utf-8"),
                ("cache-control", "no-cache"),
            ],
        }
    }

    pub const fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten(_))
    }
}

/// Apply the crawler filter to a page served to `user_agent`.
///
/// Crawler requests get `preview`'s tags inserted before the first
/// `</head>`. A page without a head is still served with the rewritten
/// headers but an unchanged body.
///
/// # Examples
/// ```
/// use porto_data::{SocialPreview, rewrite_for_crawler};
///
/// let page = "<html><head><title>Porto</title></head><body></body></html>";
/// let served = rewrite_for_crawler("facebookexternalhit/1.1", page, &SocialPreview::default());
/// assert!(served.is_rewritten());
/// assert!(served.body().contains(r#"<meta property="og:title" content="Porto Map">"#));
///
/// let browser = rewrite_for_crawler("Mozilla/5.0", page, &SocialPreview::default());
/// assert_eq!(browser.body(), page);
/// ```
pub fn rewrite_for_crawler(user_agent: &str, html: &str, preview: &SocialPreview) -> EdgeResponse {
    if !is_social_crawler(user_agent) {
        return EdgeResponse::Passthrough(html.to_owned());
    }
    let tags = preview.meta_tags();
    let body = html.replacen(HEAD_CLOSE, &format!("{tags}{HEAD_CLOSE}"), 1);
    EdgeResponse::Rewritten(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn page() -> &'static str {
        "<html><head><title>Porto</title></head><body><head></head></body></html>"
    }

    #[rstest]
    #[case("facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)")]
    #[case("Twitterbot/1.0")]
    #[case("LinkedInBot/1.0 (compatible; Mozilla/5.0)")]
    fn recognises_crawlers(#[case] agent: &str) {
        assert!(is_social_crawler(agent));
    }

    #[rstest]
    #[case("")]
    #[case("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) Safari/605.1.15")]
    #[case("Googlebot/2.1")]
    fn ignores_other_agents(#[case] agent: &str) {
        assert!(!is_social_crawler(agent));
    }

    #[rstest]
    fn inserts_before_first_head_close_only(page: &str) {
        let served = rewrite_for_crawler("Twitterbot/1.0", page, &SocialPreview::default());
        let body = served.body();
        assert_eq!(body.matches("og:title").count(), 1);
        let tags_at = body.find("<meta").expect("tags inserted");
        let first_close = body.find(HEAD_CLOSE).expect("head close kept");
        assert!(tags_at < first_close);
        assert!(body.ends_with("<body><head></head></body></html>"));
    }

    #[rstest]
    fn default_preview_advertises_the_site() {
        let tags = SocialPreview::default().meta_tags();
        assert!(tags.contains(r#"<meta property="og:url" content="https://porto-map.netlify.app/">"#));
        assert!(tags.contains(
            r#"<meta property="og:image" content="https://porto-map.netlify.app/porto.webp">"#
        ));
        assert!(tags.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(tags.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert_eq!(tags.lines().count(), 15);
    }

    #[rstest]
    fn escapes_attribute_values() {
        let preview = SocialPreview {
            title: r#"Porto "Map" <beta> & co"#.to_owned(),
            ..SocialPreview::default()
        };
        let tags = preview.meta_tags();
        assert!(tags.contains(
            r#"content="Porto &quot;Map&quot; &lt;beta&gt; &amp; co""#
        ));
    }

    #[rstest]
    fn rewritten_pages_replace_headers(page: &str) {
        let served = rewrite_for_crawler("Twitterbot", page, &SocialPreview::default());
        assert_eq!(
            served.headers(),
            &[
                ("content-type", "text/html; charset=utf-8"),
                ("cache-control", "no-cache"),
            ]
        );
        let passthrough = rewrite_for_crawler("curl/8.0", page, &SocialPreview::default());
        assert!(passthrough.headers().is_empty());
        assert_eq!(passthrough.into_body(), page);
    }

    #[rstest]
    fn headless_page_keeps_body() {
        let served = rewrite_for_crawler("Twitterbot", "<p>hi</p>", &SocialPreview::default());
        assert!(served.is_rewritten());
        assert_eq!(served.body(), "<p>hi</p>");
    }
}

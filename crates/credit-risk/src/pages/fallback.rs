use crate::pages::layout;
use crate::seo::{page_metadata, PageOverrides, SiteConfig};

/// Screen served for routes that do not exist.
pub fn not_found_page(site: &SiteConfig) -> String {
    let meta = page_metadata(
        site,
        PageOverrides {
            title: Some("404".to_string()),
            description: Some(
                "The page you are looking for does not exist or has been moved.".to_string(),
            ),
            ..Default::default()
        },
    );
    let body = "<main class=\"fallback\">\n\
                <div class=\"fallback-icon\">&#9888;</div>\n\
                <h1>Page Not Found</h1>\n\
                <a class=\"btn btn-home\" href=\"/\">Return to Home</a>\n\
                </main>\n";
    layout(&meta, body)
}

/// Screen served when handling a request fails outright.
pub fn server_error_page(site: &SiteConfig) -> String {
    let meta = page_metadata(
        site,
        PageOverrides {
            title: Some("500".to_string()),
            description: Some("This page is inaccessible due to a server error.".to_string()),
            ..Default::default()
        },
    );
    let body = "<main class=\"fallback\">\n\
                <div class=\"fallback-icon\">&#9888;</div>\n\
                <h1>Internal Server Error</h1>\n\
                <a class=\"btn btn-home\" href=\"\">Try Again</a>\n\
                </main>\n";
    layout(&meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::SiteConfig;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Credit Risk Console".to_string(),
            description: "Console description.".to_string(),
            url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn not_found_page_offers_the_way_home() {
        let markup = not_found_page(&site());
        assert!(markup.contains("<title>404</title>"));
        assert!(markup.contains("Page Not Found"));
        assert!(markup.contains("href=\"/\">Return to Home</a>"));
        assert!(markup.contains("does not exist or has been moved"));
    }

    #[test]
    fn server_error_page_offers_a_retry() {
        let markup = server_error_page(&site());
        assert!(markup.contains("<title>500</title>"));
        assert!(markup.contains("Internal Server Error"));
        assert!(markup.contains("Try Again"));
    }
}

use crate::html;
use std::env;

/// Static site identity; every page metadata record falls back to these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl SiteConfig {
    /// Base URL comes from `SITE_URL`; title and description are fixed.
    pub fn from_env() -> Self {
        let url = env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self {
            title: "Credit Risk Console".to_string(),
            description: "Single-page console for running credit risk assessments against the evaluation engine."
                .to_string(),
            url,
        }
    }
}

/// Optional per-page overrides; omitted fields fall back to site defaults.
#[derive(Debug, Clone, Default)]
pub struct PageOverrides {
    pub title: Option<String>,
    pub template_title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub href: &'static str,
    pub sizes: Option<&'static str>,
    pub mime: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleWebApp {
    pub capable: bool,
    pub status_bar_style: &'static str,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraphCard {
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub image: String,
    pub kind: &'static str,
    pub locale: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Fully-populated metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub application_name: String,
    pub title: String,
    pub title_template: String,
    pub description: String,
    pub robots: &'static str,
    pub icons: Vec<IconLink>,
    pub shortcut_icon: &'static str,
    pub apple_icon: &'static str,
    pub manifest: &'static str,
    pub apple_web_app: AppleWebApp,
    pub open_graph: OpenGraphCard,
    pub twitter: TwitterCard,
}

/// Pure builder: overrides win field-by-field, site defaults fill the rest.
pub fn page_metadata(site: &SiteConfig, overrides: PageOverrides) -> PageMetadata {
    let title = overrides.title.unwrap_or_else(|| site.title.clone());
    let title_template = overrides
        .template_title
        .unwrap_or_else(|| format!("%s | {}", site.title));
    let description = overrides
        .description
        .unwrap_or_else(|| site.description.clone());
    let og_image = format!("{}/images/og.png", site.url);

    PageMetadata {
        application_name: site.title.clone(),
        title: title.clone(),
        title_template,
        description: description.clone(),
        robots: "index, follow",
        icons: vec![
            IconLink {
                href: "/favicon.ico",
                sizes: None,
                mime: None,
            },
            IconLink {
                href: "/favicon-16x16.png",
                sizes: Some("16x16"),
                mime: Some("image/png"),
            },
            IconLink {
                href: "/favicon-32x32.png",
                sizes: Some("32x32"),
                mime: Some("image/png"),
            },
        ],
        shortcut_icon: "/icons/favicon-16x16.png",
        apple_icon: "/icons/apple-touch-icon.png",
        manifest: "/manifest.json",
        apple_web_app: AppleWebApp {
            capable: true,
            status_bar_style: "default",
            title: site.title.clone(),
        },
        open_graph: OpenGraphCard {
            url: site.url.clone(),
            title: title.clone(),
            description: description.clone(),
            site_name: site.title.clone(),
            image: og_image.clone(),
            kind: "website",
            locale: "id_ID",
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title,
            description,
            image: og_image,
        },
    }
}

/// Renders the metadata record as `<head>` markup.
pub fn render_head(meta: &PageMetadata) -> String {
    let mut head = String::new();
    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    head.push_str(&format!("<title>{}</title>\n", html::escape(&meta.title)));
    head.push_str(&format!(
        "<meta name=\"application-name\" content=\"{}\">\n",
        html::escape(&meta.application_name)
    ));
    head.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        html::escape(&meta.description)
    ));
    head.push_str(&format!(
        "<meta name=\"robots\" content=\"{}\">\n",
        meta.robots
    ));
    for icon in &meta.icons {
        head.push_str("<link rel=\"icon\" href=\"");
        head.push_str(icon.href);
        head.push('"');
        if let Some(sizes) = icon.sizes {
            head.push_str(&format!(" sizes=\"{sizes}\""));
        }
        if let Some(mime) = icon.mime {
            head.push_str(&format!(" type=\"{mime}\""));
        }
        head.push_str(">\n");
    }
    head.push_str(&format!(
        "<link rel=\"shortcut icon\" href=\"{}\">\n",
        meta.shortcut_icon
    ));
    head.push_str(&format!(
        "<link rel=\"apple-touch-icon\" href=\"{}\">\n",
        meta.apple_icon
    ));
    head.push_str(&format!(
        "<link rel=\"manifest\" href=\"{}\">\n",
        meta.manifest
    ));
    if meta.apple_web_app.capable {
        head.push_str("<meta name=\"apple-mobile-web-app-capable\" content=\"yes\">\n");
        head.push_str(&format!(
            "<meta name=\"apple-mobile-web-app-status-bar-style\" content=\"{}\">\n",
            meta.apple_web_app.status_bar_style
        ));
        head.push_str(&format!(
            "<meta name=\"apple-mobile-web-app-title\" content=\"{}\">\n",
            html::escape(&meta.apple_web_app.title)
        ));
    }
    head.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        html::escape(&meta.open_graph.url)
    ));
    head.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        html::escape(&meta.open_graph.title)
    ));
    head.push_str(&format!(
        "<meta property=\"og:description\" content=\"{}\">\n",
        html::escape(&meta.open_graph.description)
    ));
    head.push_str(&format!(
        "<meta property=\"og:site_name\" content=\"{}\">\n",
        html::escape(&meta.open_graph.site_name)
    ));
    head.push_str(&format!(
        "<meta property=\"og:image\" content=\"{}\">\n",
        html::escape(&meta.open_graph.image)
    ));
    head.push_str(&format!(
        "<meta property=\"og:type\" content=\"{}\">\n",
        meta.open_graph.kind
    ));
    head.push_str(&format!(
        "<meta property=\"og:locale\" content=\"{}\">\n",
        meta.open_graph.locale
    ));
    head.push_str(&format!(
        "<meta name=\"twitter:card\" content=\"{}\">\n",
        meta.twitter.card
    ));
    head.push_str(&format!(
        "<meta name=\"twitter:title\" content=\"{}\">\n",
        html::escape(&meta.twitter.title)
    ));
    head.push_str(&format!(
        "<meta name=\"twitter:description\" content=\"{}\">\n",
        html::escape(&meta.twitter.description)
    ));
    head.push_str(&format!(
        "<meta name=\"twitter:image\" content=\"{}\">\n",
        html::escape(&meta.twitter.image)
    ));
    head
}

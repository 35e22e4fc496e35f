use askama::Template;
use tracing::debug;

use super::{Theme, ViewContext};
use crate::config::SiteConfig;
use crate::version::{VersionSource, VERSION_PLACEHOLDER};

const DID_DOCUMENT_PATH: &str = "/.well-known/did.json";

/// What the version line currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionDisplay {
    Loading,
    Loaded(String),
}

impl VersionDisplay {
    pub fn text(&self) -> &str {
        match self {
            VersionDisplay::Loading => VERSION_PLACEHOLDER,
            VersionDisplay::Loaded(version) => version,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    theme: &'a Theme,
    glyph: &'a str,
    version: &'a str,
    did_href: &'a str,
    service_did: String,
    app_version: &'a str,
    hostname: &'a str,
    repo_url: &'a str,
    build_url: &'a str,
}

/// The landing page: logo glyph, version line and static links.
pub struct HomeView {
    ctx: ViewContext,
    site: SiteConfig,
    version: VersionDisplay,
}

impl HomeView {
    pub fn new(ctx: ViewContext, site: &SiteConfig) -> Self {
        Self {
            ctx,
            site: site.clone(),
            version: VersionDisplay::Loading,
        }
    }

    /// Fetches the version once. On failure the view keeps showing the placeholder.
    pub async fn mount(&mut self, source: &dyn VersionSource) {
        if let Some(info) = source.fetch_or_log().await {
            debug!(version = info.ffmpeg_version.as_str(), "Home view mounted");
            self.version = VersionDisplay::Loaded(info.ffmpeg_version);
        }
    }

    pub fn version(&self) -> &VersionDisplay {
        &self.version
    }

    pub fn version_text(&self) -> &str {
        self.version.text()
    }

    pub fn render_html(&self) -> Result<String, askama::Error> {
        HomeTemplate {
            theme: self.ctx.theme(),
            glyph: &self.site.message,
            version: self.version_text(),
            did_href: DID_DOCUMENT_PATH,
            service_did: self.site.service_did(),
            app_version: &self.site.app_version,
            hostname: &self.site.hostname,
            repo_url: &self.site.repo_url,
            build_url: &self.site.build_url,
        }
        .render()
    }
}

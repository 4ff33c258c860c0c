//! Application constants and configuration

pub const APP_NAME: &str = "Portfolio Grid";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PROJECTS_SOURCE: &str = "assets/featured_projects/data/projects.json";
pub const DEFAULT_ARTICLES_SOURCE: &str = "content/articles.json";
pub const DEFAULT_TIMELINE_SOURCE: &str = "content/timeline.json";

/// Environment overrides for the collection sources
pub const ENV_PROJECTS_SOURCE: &str = "PORTFOLIO_PROJECTS";
pub const ENV_ARTICLES_SOURCE: &str = "PORTFOLIO_ARTICLES";
pub const ENV_TIMELINE_SOURCE: &str = "PORTFOLIO_TIMELINE";

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Container keys, one per grid region
pub const PROJECT_GRID: &str = "project-grid";
pub const ARTICLES_GRID: &str = "articles-grid";
pub const TIMELINE_TRACK: &str = "timeline-track";

pub const DEFAULT_COVER_IMAGE: &str = "/images/blog/default-cover.jpg";
pub const WORDS_PER_MINUTE: usize = 200;

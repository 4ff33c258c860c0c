//! App module - contains the main application state and logic

mod cards;
mod region;
mod views;

use crate::constants::*;
use crate::content::{Article, Project, TimelineEntry};
use crate::loader::SourceLocation;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use region::{Controls, Region};
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Articles,
    Timeline,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Articles, Tab::Timeline];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Articles => "Articles",
            Tab::Timeline => "Experience",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Projects => egui_phosphor::regular::FOLDERS,
            Tab::Articles => egui_phosphor::regular::ARTICLE,
            Tab::Timeline => egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE,
        }
    }
}

pub struct App {
    pub(crate) projects: Region<Project>,
    pub(crate) articles: Region<Article>,
    pub(crate) timeline: Region<TimelineEntry>,
    pub(crate) active_tab: Tab,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) loads_started: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

fn repaint_on_load(ctx: &egui::Context) -> impl FnOnce() + Send + 'static {
    let ctx = ctx.clone();
    move || ctx.request_repaint()
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            projects: Region::new(
                PROJECT_GRID,
                Controls::FULL,
                Some(settings.projects_page_size),
            ),
            articles: Region::new(
                ARTICLES_GRID,
                Controls::FULL,
                Some(settings.articles_page_size),
            ),
            // The timeline is always shown whole, newest first
            timeline: Region::new(TIMELINE_TRACK, Controls::NONE, None),
            active_tab: Tab::Projects,
            settings,
            data_dir,
            runtime,
            loads_started: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    /// Kick off the three collection loads. Runs once, on the first frame.
    pub fn start_loading(&mut self, ctx: &egui::Context) {
        if self.loads_started {
            return;
        }
        self.loads_started = true;

        let mut sources = self.settings.clone();
        sources.apply_env_overrides(|key| std::env::var(key).ok());

        self.projects.start_loading(
            &self.runtime,
            SourceLocation::parse(&sources.projects_source),
            repaint_on_load(ctx),
        );
        self.articles.start_loading(
            &self.runtime,
            SourceLocation::parse(&sources.articles_source),
            repaint_on_load(ctx),
        );
        self.timeline.start_loading(
            &self.runtime,
            SourceLocation::parse(&sources.timeline_source),
            repaint_on_load(ctx),
        );
        info!("Collection loads started");
    }

    /// Move finished loads into their regions
    pub fn poll_regions(&mut self) {
        self.projects.poll();
        self.articles.poll();
        self.timeline.poll();
    }

    pub fn show_active_region(&mut self, ui: &mut egui::Ui) {
        match self.active_tab {
            Tab::Projects => self.projects.show(ui, 3, cards::project_card),
            Tab::Articles => self.articles.show(ui, 3, cards::article_card),
            Tab::Timeline => self.timeline.show(ui, 1, cards::timeline_item),
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}

//! Chart service
//!
//! Loads organizational charts and runs the visitors over them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    sample, ChartBuilder, ChartDef, CollectVisitor, PrintVisitor, SearchVisitor, University,
    Visited,
};
use crate::infrastructure::traits::FileSystem;
use crate::tree_traits::TreeNodeConvert;

/// Result of a committee search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    /// Name of the matched committee (the last one visited if several match)
    pub committee: Option<String>,
    /// Number of committees carrying the queried name
    pub matches: usize,
}

impl SearchOutcome {
    pub fn is_ambiguous(&self) -> bool {
        self.matches > 1
    }
}

/// Service for loading and inspecting charts.
pub struct ChartService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ChartService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read, parse and build the chart stored at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<University> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::ChartNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read chart", path)?;
        let def = ChartDef::from_toml(&content)?;
        let university = ChartBuilder::new(self.settings.max_depth).build(&def)?;
        debug!(university = university.name(), "chart loaded");
        Ok(university)
    }

    /// Load `path`, else the configured default chart, else the sample chart.
    pub fn load_or_sample(&self, path: Option<&Path>) -> ApplicationResult<University> {
        match self.chart_path(path) {
            Some(p) => self.load(&p),
            None => {
                debug!("no chart given, using sample");
                Ok(sample::mcgill())
            }
        }
    }

    fn chart_path(&self, path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf)
            .or_else(|| self.settings.default_chart.clone())
    }

    #[instrument(level = "debug", skip(self, university), fields(university = university.name()))]
    pub fn search(&self, university: &University, query: &str) -> SearchOutcome {
        let mut searcher = SearchVisitor::new(query);
        university.accept(&mut searcher);
        let outcome = SearchOutcome {
            query: query.to_string(),
            committee: searcher.result().map(|c| c.name().to_string()),
            matches: searcher.matches(),
        };
        if outcome.is_ambiguous() {
            warn!(query, matches = outcome.matches, "several committees match, last one wins");
        }
        outcome
    }

    pub fn render_print(&self, university: &University) -> String {
        let mut printer = PrintVisitor::with_style(self.settings.print_style());
        university.accept(&mut printer);
        printer.into_output()
    }

    pub fn render_tree(&self, university: &University) -> String {
        university.to_tree_string().to_string()
    }

    pub fn list(&self, university: &University) -> Vec<Visited> {
        let mut collector = CollectVisitor::new();
        university.accept(&mut collector);
        collector.into_visited()
    }

    /// Sample chart as a TOML definition, a starting point for own charts.
    pub fn sample_definition(&self) -> ApplicationResult<String> {
        Ok(ChartDef::from(&sample::mcgill()).to_toml()?)
    }

    /// Write the sample definition to `path`; refuses to overwrite unless `force`.
    #[instrument(level = "debug", skip(self))]
    pub fn write_sample(&self, path: &Path, force: bool) -> ApplicationResult<()> {
        if self.fs.exists(path) && !force {
            return Err(ApplicationError::AlreadyExists(path.to_path_buf()));
        }
        let content = self.sample_definition()?;
        self.fs
            .write(path, &content)
            .with_path_context("write chart", path)
    }
}

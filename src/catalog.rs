use crate::config::{SiteConfig, FILTER_ALL};
use crate::telemetry::{log_event, LogLevel};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::rc::Rc;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tecnologias", default)]
    pub technologies: Vec<String>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

impl Project {
    pub fn image_src(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }

    pub fn has_technology(&self, tag: &str) -> bool {
        self.technologies.iter().any(|technology| technology == tag)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum TechFilter {
    #[default]
    All,
    Tag(String),
}

impl TechFilter {
    pub fn from_attr(value: &str) -> Self {
        if value == FILTER_ALL {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn as_attr(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_technology(tag),
        }
    }
}

pub fn parse_catalog(body: &str) -> Result<Vec<Project>, &'static str> {
    serde_json::from_str(body).map_err(|_| "failed decoding catalog")
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_catalog(path: &str) -> Result<Vec<Project>, &'static str> {
    use gloo_net::http::Request;

    let response = Request::get(path)
        .send()
        .await
        .map_err(|_| "request failed")?;
    if !response.ok() {
        return Err("received non-success response");
    }

    let body = response
        .text()
        .await
        .map_err(|_| "failed reading response body")?;
    parse_catalog(&body)
}

/// Awaits `fetch` and returns its projects, or an empty catalog after logging the failure.
pub async fn load_catalog_with<Fut>(config: &SiteConfig, fetch: Fut) -> Vec<Project>
where
    Fut: Future<Output = Result<Vec<Project>, &'static str>>,
{
    match fetch.await {
        Ok(projects) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "catalog_loaded",
                serde_json::json!({
                    "path": config.data_path.as_str(),
                    "projects": projects.len(),
                }),
            );
            projects
        }
        Err(reason) => {
            log_event(
                config.log_level,
                LogLevel::Error,
                "catalog_load_failed",
                serde_json::json!({
                    "path": config.data_path.as_str(),
                    "reason": reason,
                }),
            );
            Vec::new()
        }
    }
}

/// `all` followed by every tag in order of first appearance.
pub fn available_filters(projects: &[Project]) -> Vec<TechFilter> {
    let mut filters = vec![TechFilter::All];
    for tag in projects.iter().flat_map(|project| project.technologies.iter()) {
        let filter = TechFilter::Tag(tag.clone());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

#[derive(Clone, PartialEq, Debug)]
pub enum GalleryAction {
    Load(Vec<Project>),
    Filter(TechFilter),
    Open(usize),
    Next,
    Previous,
    Close,
}

/// Catalog plus the view state derived from it: the filtered subset and the modal cursor.
///
/// `displayed` holds indices into `full`, so a card always knows its catalog position and
/// the modal cursor stays a catalog index no matter which filter is active.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Gallery {
    full: Rc<Vec<Project>>,
    displayed: Vec<usize>,
    filter: TechFilter,
    current_index: usize,
    modal_open: bool,
}

impl Gallery {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let mut gallery = Self::default();
        gallery.load(projects);
        gallery
    }

    /// Replaces the catalog, keeping the selected filter.
    pub fn load(&mut self, projects: Vec<Project>) {
        self.full = Rc::new(projects);
        self.current_index = 0;
        self.modal_open = false;
        self.refilter();
    }

    pub fn apply_filter(&mut self, filter: TechFilter) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.displayed = self
            .full
            .iter()
            .enumerate()
            .filter(|(_, project)| self.filter.matches(project))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn projects(&self) -> &[Project] {
        &self.full
    }

    pub fn filter(&self) -> &TechFilter {
        &self.filter
    }

    pub fn displayed_indices(&self) -> &[usize] {
        &self.displayed
    }

    pub fn displayed(&self) -> impl Iterator<Item = (usize, &Project)> + '_ {
        self.displayed
            .iter()
            .filter_map(|&index| self.full.get(index).map(|project| (index, project)))
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn current(&self) -> Option<&Project> {
        if !self.modal_open {
            return None;
        }

        self.full.get(self.current_index)
    }

    pub fn open(&mut self, index: usize) -> Option<&Project> {
        if index >= self.full.len() {
            return None;
        }

        self.current_index = index;
        self.modal_open = true;
        self.full.get(index)
    }

    pub fn next(&mut self) -> Option<&Project> {
        let len = self.full.len();
        if len == 0 {
            return None;
        }

        self.open((self.current_index + 1) % len)
    }

    pub fn previous(&mut self) -> Option<&Project> {
        let len = self.full.len();
        if len == 0 {
            return None;
        }

        self.open((self.current_index % len + len - 1) % len)
    }

    pub fn close(&mut self) {
        self.modal_open = false;
    }

    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Load(projects) => self.load(projects),
            GalleryAction::Filter(filter) => self.apply_filter(filter),
            GalleryAction::Open(index) => {
                self.open(index);
            }
            GalleryAction::Next => {
                self.next();
            }
            GalleryAction::Previous => {
                self.previous();
            }
            GalleryAction::Close => self.close(),
        }
    }
}

//! Data Repository
//!
//! Lazily loads the department directory and the campus dataset through a
//! [`DocumentLoader`] and hands out the same cached `Arc` to every caller.
//! Concurrent first requests share one in-flight load; a failed load is not
//! cached, so the next request tries again.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use super::error::{DataError, Result};
use super::loader::DocumentLoader;
use super::models::{CampusDataset, DepartmentDirectory, DepartmentRecord, HodRecord};

/// Default location of the department directory.
pub const DEFAULT_DEPARTMENTS_PATH: &str = "departments.json";
/// Default location of the campus dataset.
pub const DEFAULT_CAMPUS_PATH: &str = "campusData.json";

/// Where the two documents live, relative to the loader's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    pub departments: String,
    pub campus: String,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            departments: DEFAULT_DEPARTMENTS_PATH.to_string(),
            campus: DEFAULT_CAMPUS_PATH.to_string(),
        }
    }
}

/// Shared, lazily-populated access to both documents.
pub struct DataRepository {
    loader: Arc<dyn DocumentLoader>,
    paths: DocumentPaths,
    departments: OnceCell<Arc<DepartmentDirectory>>,
    campus: OnceCell<Arc<CampusDataset>>,
}

impl DataRepository {
    pub fn new(loader: Arc<dyn DocumentLoader>, paths: DocumentPaths) -> Self {
        Self {
            loader,
            paths,
            departments: OnceCell::new(),
            campus: OnceCell::new(),
        }
    }

    /// Repository over the default document paths.
    pub fn with_loader(loader: Arc<dyn DocumentLoader>) -> Self {
        Self::new(loader, DocumentPaths::default())
    }

    /// The department directory, or `None` when it cannot be loaded.
    ///
    /// Failures are logged here and never reach the caller as errors.
    pub async fn load_departments(&self) -> Option<Arc<DepartmentDirectory>> {
        let result = self
            .departments
            .get_or_try_init(|| async {
                let directory: DepartmentDirectory =
                    self.fetch(&self.paths.departments, "department directory").await?;
                let directory = directory.normalized();
                log::info!("Loaded {} departments", directory.len());
                Ok::<_, DataError>(Arc::new(directory))
            })
            .await;

        match result {
            Ok(directory) => Some(Arc::clone(directory)),
            Err(e) => {
                log::error!("Error loading department data: {e}");
                None
            }
        }
    }

    /// Look up a department by code, ignoring case.
    pub async fn get_department(&self, code: &str) -> Option<DepartmentRecord> {
        let directory = self.load_departments().await?;
        directory.get(code).cloned()
    }

    /// The HOD of the department with the given code.
    pub async fn get_hod(&self, code: &str) -> Option<HodRecord> {
        self.get_department(code).await.map(|dept| dept.hod)
    }

    /// All departments in listing order; empty when the directory is unavailable.
    pub async fn list_departments(&self) -> Vec<DepartmentRecord> {
        match self.load_departments().await {
            Some(directory) => directory.records().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// The campus dataset. Unlike the directory, failure is returned to the
    /// caller because most college-level answers depend on it.
    pub async fn load_campus_dataset(&self) -> Result<Arc<CampusDataset>> {
        let campus = self
            .campus
            .get_or_try_init(|| async {
                let campus: CampusDataset = self.fetch(&self.paths.campus, "campus dataset").await?;
                log::info!("Loaded campus dataset for {}", campus.college.name);
                Ok::<_, DataError>(Arc::new(campus))
            })
            .await
            .map_err(|e| {
                log::error!("Error loading campus data: {e}");
                e
            })?;

        Ok(Arc::clone(campus))
    }

    /// Drop both cached documents so the next access reloads them.
    pub fn reset(&mut self) {
        self.departments.take();
        self.campus.take();
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, document: &'static str) -> Result<T> {
        let value = self.loader.load(path).await?;
        serde_json::from_value(value).map_err(|source| DataError::Schema { document, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::loader::MockDocumentLoader;
    use crate::core::data::Canteen;
    use crate::tests::common::{campus_json, departments_json};
    use crate::tests::mocks::CountingLoader;

    fn repository(loader: CountingLoader) -> (DataRepository, Arc<CountingLoader>) {
        let loader = Arc::new(loader);
        let repo = DataRepository::with_loader(loader.clone());
        (repo, loader)
    }

    #[tokio::test]
    async fn test_load_departments_is_cached() {
        let (repo, loader) = repository(CountingLoader::with_fixtures());

        let first = repo.load_departments().await.unwrap();
        let second = repo.load_departments().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.calls(DEFAULT_DEPARTMENTS_PATH), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_fetch() {
        let (repo, loader) = repository(CountingLoader::with_fixtures().with_delay_ms(50));

        let (a, b, c) = tokio::join!(
            repo.load_departments(),
            repo.load_departments(),
            repo.load_departments()
        );

        assert!(Arc::ptr_eq(a.as_ref().unwrap(), b.as_ref().unwrap()));
        assert!(Arc::ptr_eq(b.as_ref().unwrap(), c.as_ref().unwrap()));
        assert_eq!(loader.calls(DEFAULT_DEPARTMENTS_PATH), 1);

        let (x, y) = tokio::join!(repo.load_campus_dataset(), repo.load_campus_dataset());
        assert!(Arc::ptr_eq(&x.unwrap(), &y.unwrap()));
        assert_eq!(loader.calls(DEFAULT_CAMPUS_PATH), 1);
    }

    #[tokio::test]
    async fn test_get_department_is_case_insensitive() {
        let (repo, _) = repository(CountingLoader::with_fixtures());

        let dept = repo.get_department("CSE").await.unwrap();
        assert_eq!(dept.code, "cse");
        assert_eq!(repo.get_hod("Ece").await.unwrap().name, "Dr. Lakshmi Narayana");
        assert!(repo.get_department("zoology").await.is_none());
    }

    #[tokio::test]
    async fn test_list_departments_keeps_document_order() {
        let (repo, _) = repository(CountingLoader::with_fixtures());

        let codes: Vec<String> = repo
            .list_departments()
            .await
            .into_iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, vec!["cse", "ece", "eee", "mech", "civil"]);
    }

    #[tokio::test]
    async fn test_department_failure_yields_none_and_retries() {
        let (repo, loader) = repository(CountingLoader::empty());

        assert!(repo.load_departments().await.is_none());
        assert!(repo.list_departments().await.is_empty());
        assert!(loader.calls(DEFAULT_DEPARTMENTS_PATH) >= 2);
    }

    #[tokio::test]
    async fn test_campus_failure_is_surfaced() {
        let (repo, _) = repository(CountingLoader::empty());

        let err = repo.load_campus_dataset().await.unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_reported() {
        let mut loader = MockDocumentLoader::new();
        loader
            .expect_load()
            .returning(|_| Ok(serde_json::json!({ "college": { "name": 42 } })));
        let repo = DataRepository::with_loader(Arc::new(loader));

        let err = repo.load_campus_dataset().await.unwrap_err();
        assert!(matches!(err, DataError::Schema { document: "campus dataset", .. }));
    }

    #[tokio::test]
    async fn test_plain_text_canteen_loads() {
        let mut campus = campus_json();
        campus["facilities"]["canteen"] = serde_json::json!("Hygienic canteen serving meals");
        let loader = CountingLoader::empty().with_document(DEFAULT_CAMPUS_PATH, campus);
        let (repo, _) = repository(loader);

        let campus = repo.load_campus_dataset().await.unwrap();
        assert!(matches!(
            campus.facilities.canteen,
            Some(Canteen::Text(ref text)) if text == "Hygienic canteen serving meals"
        ));
        assert!(campus.facilities.library.is_some());
    }

    #[tokio::test]
    async fn test_custom_paths_are_used() {
        let mut loader = MockDocumentLoader::new();
        loader
            .expect_load()
            .withf(|path| path.to_string() == "static/depts.json")
            .times(1)
            .returning(|_| Ok(departments_json()));
        loader
            .expect_load()
            .withf(|path| path.to_string() == "static/campus.json")
            .times(1)
            .returning(|_| Ok(campus_json()));

        let paths = DocumentPaths {
            departments: "static/depts.json".to_string(),
            campus: "static/campus.json".to_string(),
        };
        let repo = DataRepository::new(Arc::new(loader), paths);

        assert_eq!(repo.list_departments().await.len(), 5);
        assert!(repo.load_campus_dataset().await.is_ok());
    }

    #[tokio::test]
    async fn test_reset_forces_reload() {
        let (mut repo, loader) = repository(CountingLoader::with_fixtures());

        repo.load_departments().await.unwrap();
        repo.reset();
        repo.load_departments().await.unwrap();

        assert_eq!(loader.calls(DEFAULT_DEPARTMENTS_PATH), 2);
    }
}

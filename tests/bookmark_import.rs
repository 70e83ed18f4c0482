use async_trait::async_trait;
use memorabilia::config::BookmarksConfig;
use memorabilia::import::{
    import_all, save_collection, BookmarkPage, BookmarkSource, ImportError, RaindropClient, RaindropSettings,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves canned pages and records which pages were requested
struct ScriptedSource {
    pages: Vec<Result<BookmarkPage, u16>>,
    requested: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<BookmarkPage, u16>>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookmarkSource for ScriptedSource {
    async fn fetch_page(&self, page: u32) -> Result<BookmarkPage, ImportError> {
        self.requested.lock().unwrap().push(page);
        match self.pages.get(page as usize) {
            Some(Ok(fetched)) => Ok(fetched.clone()),
            Some(Err(status)) => Err(ImportError::Status { status: *status, page }),
            None => Ok(BookmarkPage::default()),
        }
    }
}

fn page(ids: std::ops::Range<u64>, count: u64) -> BookmarkPage {
    BookmarkPage {
        items: ids.map(|id| json!({ "_id": id })).collect(),
        count,
    }
}

fn settings(endpoint: String) -> RaindropSettings {
    RaindropSettings {
        endpoint,
        collection_id: "4242".to_string(),
        token: "secret-token".to_string(),
        page_size: 2,
    }
}

#[tokio::test]
async fn test_pages_until_count_is_reached() {
    let source = ScriptedSource::new(vec![Ok(page(0..2, 5)), Ok(page(2..4, 5)), Ok(page(4..5, 5))]);

    let outcome = import_all(&source).await;

    assert_eq!(source.requested(), vec![0, 1, 2]);
    assert_eq!(outcome.items.len(), 5);
    assert_eq!(outcome.pages_fetched, 3);
    assert!(!outcome.interrupted);
    assert_eq!(outcome.items[4], json!({ "_id": 4 }));
}

#[tokio::test]
async fn test_single_page_collection() {
    let source = ScriptedSource::new(vec![Ok(page(0..2, 2))]);

    let outcome = import_all(&source).await;

    assert_eq!(source.requested(), vec![0]);
    assert_eq!(outcome.items.len(), 2);
}

#[tokio::test]
async fn test_empty_collection_makes_one_request() {
    let source = ScriptedSource::new(vec![Ok(page(0..0, 0))]);

    let outcome = import_all(&source).await;

    assert_eq!(source.requested(), vec![0]);
    assert!(outcome.items.is_empty());
    assert!(!outcome.interrupted);
}

#[tokio::test]
async fn test_error_keeps_items_gathered_so_far() {
    let source = ScriptedSource::new(vec![Ok(page(0..2, 6)), Err(500), Ok(page(4..6, 6))]);

    let outcome = import_all(&source).await;

    assert_eq!(source.requested(), vec![0, 1]);
    assert_eq!(outcome.items.len(), 2);
    assert!(outcome.interrupted);
}

#[tokio::test]
async fn test_error_on_first_page_collects_nothing() {
    let source = ScriptedSource::new(vec![Err(401)]);

    let outcome = import_all(&source).await;

    assert!(outcome.items.is_empty());
    assert_eq!(outcome.pages_fetched, 0);
    assert!(outcome.interrupted);
}

#[tokio::test]
async fn test_empty_page_stops_a_short_collection() {
    // The service claims more items than it ever returns
    let source = ScriptedSource::new(vec![Ok(page(0..2, 10)), Ok(page(2..2, 10))]);

    let outcome = import_all(&source).await;

    assert_eq!(source.requested(), vec![0, 1]);
    assert_eq!(outcome.items.len(), 2);
    assert!(!outcome.interrupted);
}

#[test]
fn test_save_collection_writes_pretty_array() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("moodboard").join("raindrop-collection.json");
    let items = vec![json!({ "_id": 1, "title": "first" }), json!({ "_id": 2 })];

    save_collection(&items, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\n  {"));
    let parsed: Vec<Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, items);
}

#[test]
fn test_save_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.json");

    save_collection(&[], &output).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_settings_require_every_variable() {
    let config = BookmarksConfig::default();
    let mut env: HashMap<String, String> = HashMap::new();
    env.insert(config.endpoint_env.clone(), "https://api.example.test/raindrops".to_string());
    env.insert(config.collection_id_env.clone(), "4242".to_string());

    let error = RaindropSettings::from_lookup(&config, |name| env.get(name).cloned()).unwrap_err();
    match error {
        ImportError::MissingEnv(name) => assert_eq!(name, config.token_env),
        other => panic!("unexpected error: {other}"),
    }

    env.insert(config.token_env.clone(), "   ".to_string());
    assert!(RaindropSettings::from_lookup(&config, |name| env.get(name).cloned()).is_err());

    env.insert(config.token_env.clone(), "tok".to_string());
    let settings = RaindropSettings::from_lookup(&config, |name| env.get(name).cloned()).unwrap();
    assert_eq!(settings.collection_id, "4242");
    assert_eq!(settings.page_size, 50);
}

#[test]
fn test_page_url() {
    let client = RaindropClient::new(settings("https://api.example.test/raindrops/".to_string())).unwrap();
    assert_eq!(
        client.page_url(3),
        "https://api.example.test/raindrops/4242?perpage=2&page=3"
    );
}

#[tokio::test]
async fn test_client_sends_token_and_paging_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/4242"))
        .and(query_param("perpage", "2"))
        .and(query_param("page", "0"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": true,
            "items": [{ "_id": 1 }, { "_id": 2 }],
            "count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/4242"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": true,
            "items": [{ "_id": 3 }],
            "count": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RaindropClient::new(settings(server.uri())).unwrap();
    let outcome = import_all(&client).await;

    assert_eq!(outcome.items.len(), 3);
    assert!(!outcome.interrupted);
}

#[tokio::test]
async fn test_client_reports_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = RaindropClient::new(settings(server.uri())).unwrap();
    let error = client.fetch_page(0).await.unwrap_err();
    assert!(matches!(error, ImportError::Status { status: 500, page: 0 }));

    let outcome = import_all(&client).await;
    assert!(outcome.interrupted);
    assert!(outcome.items.is_empty());
}

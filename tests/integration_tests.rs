use figma_tokens::{run_with, FigmaClient, LocalStorage, TokenError};
use httpmock::prelude::*;
use std::collections::HashMap;
use tempfile::TempDir;

fn env() -> HashMap<&'static str, String> {
    HashMap::from([
        ("FIGMA_TOKEN", "figd_test".to_string()),
        ("FILE_KEY", "abc123".to_string()),
        ("ARTBOARD_NODE_ID", "10:20".to_string()),
    ])
}

fn text(characters: &str, x: f64) -> serde_json::Value {
    serde_json::json!({
        "id": format!("t-{characters}"),
        "name": characters,
        "type": "TEXT",
        "characters": characters,
        "absoluteBoundingBox": {"x": x, "y": 0.0, "width": 80.0, "height": 20.0}
    })
}

fn row(children: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({"type": "FRAME", "children": children})
}

fn nodes_body(rows: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "name": "Design System",
        "lastModified": "2024-01-01T00:00:00Z",
        "nodes": {
            "10:20": {
                "document": {"id": "10:20", "type": "FRAME", "children": rows},
                "components": {},
                "styles": {}
            }
        }
    })
}

fn read(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

#[tokio::test]
async fn test_end_to_end_writes_three_files() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/files/abc123/nodes")
            .query_param("ids", "10:20")
            .header("X-Figma-Token", "figd_test");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(nodes_body(vec![
                row(vec![text("Alias", 0.0), text("Value", 200.0)]),
                row(vec![text("color_primary", 0.0), text("16px", 200.0)]),
                row(vec![
                    serde_json::json!({"type": "RECTANGLE"}),
                    text("8px", 200.0),
                    text("spacing_sm", 0.0),
                ]),
            ]));
    });

    let vars = env();
    let base_url = server.base_url();
    let report = run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await
    .unwrap();

    api_mock.assert();
    assert_eq!(report.tokens_extracted, 2);
    assert_eq!(
        report.files_written,
        vec!["tokens.web.json", "tokens.ios.json", "tokens.android.json"]
    );

    assert_eq!(
        read(&temp_dir, "tokens.web.json"),
        "{\n  \"color_primary\": \"16px\",\n  \"spacing_sm\": \"8px\"\n}"
    );
    let ios: serde_json::Value =
        serde_json::from_str(&read(&temp_dir, "tokens.ios.json")).unwrap();
    assert_eq!(
        ios,
        serde_json::json!({"colorPrimary": "16pt", "spacingSm": "8pt"})
    );
    let android: serde_json::Value =
        serde_json::from_str(&read(&temp_dir, "tokens.android.json")).unwrap();
    assert_eq!(
        android,
        serde_json::json!({"colorPrimary": "16dp", "spacingSm": "8dp"})
    );
}

#[tokio::test]
async fn test_existing_files_are_overwritten() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("tokens.web.json"), "stale")?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/files/abc123/nodes");
        then.status(200).json_body(nodes_body(vec![
            row(vec![]),
            row(vec![text("radius", 0.0), text("4px", 10.0)]),
        ]));
    });

    let vars = env();
    let base_url = server.base_url();
    run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await?;

    assert_eq!(
        read(&temp_dir, "tokens.web.json"),
        "{\n  \"radius\": \"4px\"\n}"
    );
    Ok(())
}

#[tokio::test]
async fn test_malformed_row_leaves_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/files/abc123/nodes");
        then.status(200).json_body(nodes_body(vec![
            row(vec![text("Alias", 0.0), text("Value", 200.0)]),
            row(vec![text("color_primary", 0.0), text("16px", 200.0)]),
            row(vec![text("orphan", 0.0)]),
        ]));
    });

    let vars = env();
    let base_url = server.base_url();
    let result = run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await;

    api_mock.assert();
    assert!(matches!(
        result,
        Err(TokenError::RowMissingTextNodes { row: 2, found: 1 })
    ));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_malformed_row_keeps_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let previous = [
        ("tokens.web.json", "{\n  \"old_alias\": \"1px\"\n}"),
        ("tokens.ios.json", "{\n  \"oldAlias\": \"1pt\"\n}"),
        ("tokens.android.json", "{\n  \"oldAlias\": \"1dp\"\n}"),
    ];
    for (name, content) in previous {
        std::fs::write(temp_dir.path().join(name), content).unwrap();
    }

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/files/abc123/nodes");
        then.status(200).json_body(nodes_body(vec![
            row(vec![text("Alias", 0.0), text("Value", 200.0)]),
            row(vec![text("color_primary", 0.0), text("16px", 200.0)]),
            row(vec![serde_json::json!({"type": "RECTANGLE"}), text("8px", 200.0)]),
        ]));
    });

    let vars = env();
    let base_url = server.base_url();
    let result = run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await;

    api_mock.assert();
    assert!(matches!(
        result,
        Err(TokenError::RowMissingTextNodes { row: 2, found: 1 })
    ));
    for (name, content) in previous {
        assert_eq!(read(&temp_dir, name), content);
    }
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 3);
}

#[tokio::test]
async fn test_api_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/files/abc123/nodes");
        then.status(404)
            .json_body(serde_json::json!({"status": 404, "err": "Not found"}));
    });

    let vars = env();
    let base_url = server.base_url();
    let result = run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await;

    api_mock.assert_hits(1);
    let err = result.unwrap_err();
    assert!(matches!(err, TokenError::ApiStatusError { status: 404, .. }));
    assert_eq!(err.recovery_suggestion(), "Check FILE_KEY and ARTBOARD_NODE_ID");
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_env_makes_no_request() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/files/abc123/nodes");
        then.status(200).json_body(nodes_body(vec![]));
    });

    let mut vars = env();
    vars.remove("ARTBOARD_NODE_ID");
    let base_url = server.base_url();
    let result = run_with(
        |name| vars.get(name).cloned(),
        |config| config.with_api_base(base_url.clone()),
        FigmaClient::from_config,
        LocalStorage::new(temp_dir.path()),
    )
    .await;

    api_mock.assert_hits(0);
    assert!(matches!(
        result,
        Err(TokenError::MissingConfigError { ref fields }) if fields == &["ARTBOARD_NODE_ID"]
    ));
}

use crate::catalog::Catalog;
use crate::cli::commands::repos::*;
use crate::cli::commands::test_support::*;
use crate::models::Repo;

#[tokio::test(flavor = "multi_thread")]
async fn test_list_repos_json_keeps_only_allow_listed() {
    let (url, _handle) = spawn_test_server(Fixture::portfolio()).await;
    let api_client = client_for(&url);

    let output = list_repos(&api_client, &Catalog::default(), AUTHOR, "json")
        .await
        .unwrap();
    let repos: Vec<Repo> = serde_json::from_str(&output).unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["FRONT-END", "BACK-END_FRONT-END", "PORTFOLIO-BERGKLEY"]);

    let portfolio = &repos[2];
    assert_eq!(portfolio.stargazers_count, 9);
    assert_eq!(portfolio.forks_count, 2);
    assert_eq!(
        portfolio.html_url,
        "https://github.com/bergkley/PORTFOLIO-BERGKLEY"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_repos_table_format() {
    let (url, _handle) = spawn_test_server(Fixture::portfolio()).await;
    let api_client = client_for(&url);

    let output = list_repos(&api_client, &Catalog::default(), AUTHOR, "table")
        .await
        .unwrap();

    assert!(output.starts_with("Repositories of bergkley"));
    assert!(output.contains("FRONT-END"));
    assert!(output.contains("/project/PORTFOLIO-BERGKLEY"));
    assert!(!output.contains("dotfiles"));
    assert!(!output.contains("old-site"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_catalog_changes_selection() {
    let (url, _handle) = spawn_test_server(Fixture::portfolio()).await;
    let api_client = client_for(&url);
    let catalog = Catalog::from_yaml("allowed_repos: [old-site]").unwrap();

    let repos = fetch_allowed_repos(&api_client, &catalog, AUTHOR).await;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "old-site");
    assert_eq!(repos[0].language, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_user_degrades_to_empty() {
    let (url, _handle) = spawn_test_server(Fixture::portfolio()).await;
    let api_client = client_for(&url);

    let output = list_repos(&api_client, &Catalog::default(), "nobody", "table")
        .await
        .unwrap();
    assert_eq!(output, "No repositories found for nobody.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rate_limited_degrades_to_empty_json() {
    let fixture = Fixture::portfolio().with_failing_user("busy", 403);
    let (url, _handle) = spawn_test_server(fixture).await;
    let api_client = client_for(&url);

    let output = list_repos(&api_client, &Catalog::default(), "busy", "json")
        .await
        .unwrap();
    let repos: Vec<Repo> = serde_json::from_str(&output).unwrap();
    assert!(repos.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_allow_listed_repos() {
    let fixture = Fixture::default().with_repos(
        "someone",
        serde_json::json!([repo_json("dotfiles", Some("Shell"), 1, 0)]),
    );
    let (url, _handle) = spawn_test_server(fixture).await;
    let api_client = client_for(&url);

    let repos = fetch_allowed_repos(&api_client, &Catalog::default(), "someone").await;
    assert!(repos.is_empty());
}

#[test]
fn test_degrade_to_empty_passes_success_through() {
    let repos = vec![Repo {
        name: "FRONT-END".to_string(),
        language: None,
        html_url: String::new(),
        forks_count: 0,
        stargazers_count: 0,
    }];
    assert_eq!(degrade_to_empty::<String>(AUTHOR, Ok(repos.clone())), repos);
    assert!(degrade_to_empty(AUTHOR, Err("boom")).is_empty());
}

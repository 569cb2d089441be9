use crate::fixtures::{
    create_test_config, episode_page, home_page, search_feed, search_page, series_page,
};
use bubuwi::config::SearchSource;
use bubuwi::normalize::{VideoSources, VIDEO_NOT_FOUND};
use bubuwi::{BubuwiError, FetchError, PageRequest, PageResult, Pipeline};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=UTF-8")
}

fn create_pipeline(server: &MockServer, search_source: SearchSource) -> Pipeline {
    Pipeline::new(create_test_config(&server.uri(), search_source))
        .expect("Failed to create pipeline")
}

#[tokio::test]
async fn test_latest_drops_item_without_link() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(home_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let result = pipeline.run(&PageRequest::Latest).await.expect("Scrape failed");

    let results = match result {
        PageResult::Latest { results } => results,
        other => panic!("unexpected result: {:?}", other),
    };

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "One Piece Episode 1100",
            "Boruto Episode 293",
            "Frieren Episode 28"
        ]
    );

    assert_eq!(
        results[0].link,
        format!("{}/one-piece-episode-1100/", base_url)
    );
    assert_eq!(results[0].thumbnail, format!("{}/img/op.jpg", base_url));
    assert_eq!(results[1].thumbnail, "placeholder.jpg");
    assert_eq!(results[2].episode, None);
}

#[tokio::test]
async fn test_html_search_excludes_page_title() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "naruto"))
        .respond_with(html_response(search_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let request = PageRequest::Search {
        query: "naruto".to_string(),
    };
    let response = pipeline.respond(&request).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["type"], json!("search"));
    assert_eq!(response.body["query"], json!("naruto"));

    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], json!("Naruto"));
    assert_eq!(results[0]["genres"], json!(["Action", "Comedy"]));
    assert_eq!(results[1]["title"], json!("Naruto Shippuden"));
    assert_eq!(results[1]["genres"], json!([]));
    assert_eq!(results[1]["thumbnail"], json!(null));
}

#[tokio::test]
async fn test_feed_search_without_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "zzz"))
        .and(query_param("feed", "rss2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(search_feed(&[]))
                .insert_header("content-type", "application/rss+xml"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Feed);
    let request = PageRequest::Search {
        query: "zzz".to_string(),
    };
    let response = pipeline.respond(&request).await;

    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({ "type": "search", "query": "zzz", "results": [] })
    );
}

#[tokio::test]
async fn test_feed_search_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("feed", "rss2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_feed(&[
            ("Naruto", "https://samehadaku.li/anime/naruto/"),
            ("Boruto", "https://samehadaku.li/anime/boruto/"),
        ])))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Feed);
    let request = PageRequest::Search {
        query: "naru".to_string(),
    };
    let response = pipeline.respond(&request).await;

    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], json!("Naruto"));
    assert_eq!(results[0]["pubDate"], json!("2024-10-14T10:00:00Z"));
    assert_eq!(results[0]["genres"], json!(null));
    assert_eq!(results[0]["thumbnail"], json!(null));
}

#[tokio::test]
async fn test_series_page_with_five_episodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/one-piece/"))
        .respond_with(html_response(series_page(5, "/img/op.jpg")))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let request = PageRequest::SeriesPage {
        url: format!("{}/anime/one-piece/", mock_server.uri()),
    };
    let result = pipeline.run(&request).await.expect("Scrape failed");

    let page = match result {
        PageResult::SeriesPage(page) => page,
        other => panic!("unexpected result: {:?}", other),
    };

    assert_eq!(page.episode_count(), 5);
    assert_eq!(page.episodes().len(), 5);
    assert_eq!(page.episodes()[0].title, "One Piece Episode 5");
    assert_eq!(
        page.thumbnail(),
        Some(format!("{}/img/op.jpg", mock_server.uri()).as_str())
    );
    assert_eq!(page.synopsis(), "Gol D. Roger was known as the Pirate King.");
}

#[tokio::test]
async fn test_episode_without_iframes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/one-piece-episode-1100/"))
        .respond_with(html_response(episode_page(&[])))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let request = PageRequest::Episode {
        url: format!("{}/one-piece-episode-1100/", mock_server.uri()),
    };
    let response = pipeline.respond(&request).await;

    assert_eq!(
        response.body,
        json!({
            "type": "episode",
            "title": "One Piece Episode 1100",
            "videoSources": [VIDEO_NOT_FOUND],
            "videoFound": false,
        })
    );
}

#[tokio::test]
async fn test_episode_sources_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/one-piece-episode-1100/"))
        .respond_with(html_response(episode_page(&[
            "https://player.one/embed/1",
            "https://player.two/embed/2",
        ])))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let request = PageRequest::Episode {
        url: format!("{}/one-piece-episode-1100/", mock_server.uri()),
    };

    match pipeline.run(&request).await.expect("Scrape failed") {
        PageResult::Episode(page) => assert_eq!(
            page.sources,
            VideoSources::Found(vec![
                "https://player.one/embed/1".to_string(),
                "https://player.two/embed/2".to_string(),
            ])
        ),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_upstream_error_becomes_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);

    let error = pipeline.run(&PageRequest::Latest).await.unwrap_err();
    assert!(matches!(
        error,
        BubuwiError::Fetch(FetchError::Status { status: 404, .. })
    ));

    let response = pipeline.respond(&PageRequest::Latest).await;
    assert_eq!(response.status, 500);
    assert_eq!(response.body["status"], json!(500));
    assert_eq!(response.body["error"], json!("Scraping failed."));
    assert!(response.body["details"].as_str().unwrap().contains("404"));
    assert!(response.body.get("results").is_none());
}

#[tokio::test]
async fn test_fetch_deadline_is_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(home_page()).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let error = pipeline.run(&PageRequest::Latest).await.unwrap_err();

    assert!(
        matches!(error, BubuwiError::Fetch(FetchError::Timeout { .. })),
        "Expected timeout, got {:?}",
        error
    );
}

#[tokio::test]
async fn test_empty_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(String::new()))
        .mount(&mock_server)
        .await;

    let pipeline = create_pipeline(&mock_server, SearchSource::Html);
    let error = pipeline.run(&PageRequest::Latest).await.unwrap_err();
    assert!(matches!(error, BubuwiError::MalformedDocument { .. }));
}

use crate::fixtures::{create_test_config, search_feed, series_page};
use bubuwi::config::SearchSource;
use bubuwi::{PageRequest, PageResult, Pipeline};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_feed(mock_server: &MockServer, items: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("feed", "rss2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_feed(items)))
        .mount(mock_server)
        .await;
}

async fn mount_series(mock_server: &MockServer, series_path: &str, thumbnail: &str) {
    Mock::given(method("GET"))
        .and(path(series_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(series_page(1, thumbnail))
                .insert_header("content-type", "text/html"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_enrichment_tolerates_partial_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let naruto = format!("{}/anime/naruto/", base_url);
    let boruto = format!("{}/anime/boruto/", base_url);
    let gone = format!("{}/anime/gone/", base_url);

    mount_feed(
        &mock_server,
        &[
            ("Naruto", naruto.as_str()),
            ("Gone", gone.as_str()),
            ("Boruto", boruto.as_str()),
        ],
    )
    .await;
    mount_series(&mock_server, "/anime/naruto/", "/img/naruto.jpg").await;
    mount_series(&mock_server, "/anime/boruto/", "/img/boruto.jpg").await;

    Mock::given(method("GET"))
        .and(path("/anime/gone/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&base_url, SearchSource::Feed);
    config.enrichment.enabled = true;
    config.enrichment.max_concurrent = 2;

    let pipeline = Pipeline::new(config).expect("Failed to create pipeline");
    let request = PageRequest::Search {
        query: "naru".to_string(),
    };
    let result = pipeline.run(&request).await.expect("Scrape failed");

    let results = match result {
        PageResult::Search { results, .. } => results,
        other => panic!("unexpected result: {:?}", other),
    };

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Naruto", "Gone", "Boruto"]);

    assert_eq!(
        results[0].thumbnail,
        Some(format!("{}/img/naruto.jpg", base_url))
    );
    assert_eq!(results[1].thumbnail, None);
    assert_eq!(
        results[2].thumbnail,
        Some(format!("{}/img/boruto.jpg", base_url))
    );

    // Enrichment only fills thumbnails; feed results still carry no genres
    assert!(results.iter().all(|r| r.genres.is_none()));
}

#[tokio::test]
async fn test_enrichment_disabled_fetches_only_feed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let naruto = format!("{}/anime/naruto/", base_url);

    mount_feed(&mock_server, &[("Naruto", naruto.as_str())]).await;

    Mock::given(method("GET"))
        .and(path("/anime/naruto/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(series_page(1, "/t.jpg")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::new(create_test_config(&base_url, SearchSource::Feed))
        .expect("Failed to create pipeline");
    let request = PageRequest::Search {
        query: "naruto".to_string(),
    };

    match pipeline.run(&request).await.expect("Scrape failed") {
        PageResult::Search { results, .. } => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].thumbnail, None);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_enrichment_respects_concurrency_cap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let delay = Duration::from_millis(300);

    let links: Vec<String> = (1..=4)
        .map(|n| format!("{}/anime/series-{}/", base_url, n))
        .collect();
    let items: Vec<(&str, &str)> = links.iter().map(|link| ("Series", link.as_str())).collect();
    mount_feed(&mock_server, &items).await;

    for n in 1..=4 {
        Mock::given(method("GET"))
            .and(path(format!("/anime/series-{}/", n)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(series_page(1, "/t.jpg"))
                    .set_delay(delay),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let mut config = create_test_config(&base_url, SearchSource::Feed);
    config.enrichment.enabled = true;
    config.enrichment.max_concurrent = 2;

    let pipeline = Pipeline::new(config).expect("Failed to create pipeline");
    let request = PageRequest::Search {
        query: "series".to_string(),
    };

    let started = Instant::now();
    let result = pipeline.run(&request).await.expect("Scrape failed");
    let elapsed = started.elapsed();

    match result {
        PageResult::Search { results, .. } => {
            assert_eq!(results.len(), 4);
            assert!(results.iter().all(|r| r.thumbnail.is_some()));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    // Two permits over four delayed fetches means at least two rounds,
    // but fewer than four
    assert!(elapsed >= delay * 2, "cap exceeded: finished in {:?}", elapsed);
    assert!(elapsed < delay * 4, "fetches ran serially: took {:?}", elapsed);
}

use headline_tally::outputs::chart::{BarChart, ChartRenderer};
use headline_tally::outputs::xlsx::XlsxExporter;
use headline_tally::scrapers::fetcher::HttpFetcher;
use headline_tally::{Error, ScrapeConfig, scrape_and_analyze};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"<!doctype html>
<html>
  <body>
    <main>
      <article><h4>Central Bank Raises Rates</h4><time>2h ago</time></article>
      <article><h4>Local Team Wins Final</h4></article>
      <article><figure><img src="/ad.png"></figure></article>
      <article><h4>Economy Shrinks Amid Banking Crisis</h4></article>
      <article><h4>Crisis Talks Continue</h4></article>
    </main>
  </body>
</html>"#;

#[derive(Default)]
struct RecordingRenderer(Vec<BarChart>);

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &BarChart) -> headline_tally::Result<()> {
        self.0.push(chart.clone());
        Ok(())
    }
}

fn keywords() -> Vec<String> {
    ["bank", "crisis", "economy"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

#[tokio::test]
async fn scrapes_listing_over_http_and_writes_workbook() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics/business"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("article_titles.xlsx");
    let config = ScrapeConfig::new(&format!("{}/topics/business", server.uri()), keywords(), 50).unwrap();
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let mut renderer = RecordingRenderer::default();

    let report = scrape_and_analyze(&fetcher, &config, &XlsxExporter::new(&output), &mut renderer)
        .await
        .unwrap();

    assert_eq!(
        report.titles,
        vec![
            "central bank raises rates",
            "economy shrinks amid banking crisis",
            "crisis talks continue",
        ]
    );
    assert_eq!(report.counts.get("bank"), Some(2));
    assert_eq!(report.counts.get("crisis"), Some(2));
    assert_eq!(report.counts.get("economy"), Some(1));

    assert_eq!(renderer.0.len(), 1);
    let labels: Vec<&str> = renderer.0[0].bars.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["bank", "crisis", "economy"]);

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn cap_truncates_before_counting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = ScrapeConfig::new(&server.uri(), keywords(), 1).unwrap();
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let mut renderer = RecordingRenderer::default();

    let report = scrape_and_analyze(
        &fetcher,
        &config,
        &XlsxExporter::new(dir.path().join("out.xlsx")),
        &mut renderer,
    )
    .await
    .unwrap();

    assert_eq!(report.titles, vec!["central bank raises rates"]);
    assert_eq!(report.counts.get("bank"), Some(1));
    assert_eq!(report.counts.get("crisis"), Some(0));
    assert_eq!(report.counts.get("economy"), Some(0));
}

#[tokio::test]
async fn http_error_status_aborts_without_export() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("article_titles.xlsx");
    let config = ScrapeConfig::new(&server.uri(), keywords(), 50).unwrap();
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let mut renderer = RecordingRenderer::default();

    let err = scrape_and_analyze(&fetcher, &config, &XlsxExporter::new(&output), &mut renderer)
        .await
        .unwrap_err();

    match err {
        Error::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(!output.exists());
    assert!(renderer.0.is_empty());
}

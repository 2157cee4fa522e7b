use dwellboard::wordlist::{HttpWordSource, WordListError, WordSource};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_http_source_parses_word_per_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/palavras"))
        .respond_with(ResponseTemplate::new(200).set_body_string("casa\n  carro\n\nbola \n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = HttpWordSource::new(format!("{}/palavras", mock_server.uri()));
    let words = source.load().await.unwrap();

    assert_eq!(words.words(), ["casa", "carro", "bola"]);
    assert_eq!(words.suggestions("CA", 5), vec!["casa", "carro"]);
}

#[tokio::test]
async fn test_http_source_empty_body_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/palavras"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\n\n"))
        .mount(&mock_server)
        .await;

    let source = HttpWordSource::new(format!("{}/palavras", mock_server.uri()));
    let words = source.load().await.unwrap();
    assert!(words.is_empty());
}

#[tokio::test]
async fn test_http_source_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/palavras"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let source = HttpWordSource::new(format!("{}/palavras", mock_server.uri()));
    match source.load().await {
        Err(WordListError::Http { status }) => assert_eq!(status, 404),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_source_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&mock_server)
        .await;

    let source = HttpWordSource::new(format!("{}/palavras", mock_server.uri()));
    let err = source.load().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

use ensembl::{endpoints, ConfigError, EnsemblClient, EnsemblError, Params, ResponseFormat, HUMAN};
use rstest::*;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;
use helpers::{client_for, AnyResult};

#[tokio::test]
async fn test_lookup_round_trip() -> AnyResult {
    let server = MockServer::start().await;
    let gene = json!({
        "id": "ENSG00000157764",
        "display_name": "BRAF",
        "species": "homo_sapiens",
        "start": 140719327,
        "strand": -1
    });
    Mock::given(method("GET"))
        .and(path("/lookup/id/ENSG00000157764"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&gene))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.lookup_id().dispatch("ENSG00000157764").await?;
    assert_eq!(response.into_json(), Some(gene));
    Ok(())
}

#[tokio::test]
async fn test_typed_response() -> AnyResult {
    #[derive(Deserialize)]
    struct Gene {
        display_name: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup/symbol/homo_sapiens/BRAF"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"display_name": "BRAF", "id": "x"})),
        )
        .mount(&server)
        .await;

    let gene: Gene = client_for(&server)
        .lookup_symbol("homo_sapiens")
        .dispatch("BRAF")
        .await?
        .deserialize()?;
    assert_eq!(gene.display_name, "BRAF");
    Ok(())
}

#[tokio::test]
async fn test_sequence_batch() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sequence/id"))
        .and(query_param("species", HUMAN))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"ids": ["ENSG1", "ENSG2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "ENSG1", "seq": "ACGT"},
            {"id": "ENSG2", "seq": "TTGA"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .sequence_id()
        .param("species", HUMAN)
        .dispatch(vec!["ENSG1", "ENSG2"])
        .await?;
    let sequences = response.into_json().unwrap();
    assert_eq!(sequences.as_array().unwrap().len(), 2);
    assert_eq!(sequences[1]["seq"], "TTGA");
    Ok(())
}

#[rstest]
#[case(vec![])]
#[case(vec!["ENSG00000157764"])]
#[tokio::test]
async fn test_short_batches_are_posted(#[case] ids: Vec<&str>) -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lookup/id"))
        .and(body_json(json!({ "ids": ids.clone() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    client_for(&server).lookup_id().dispatch(ids).await?;
    Ok(())
}

#[tokio::test]
async fn test_absent_params_are_omitted() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/overlap/id/ENSG00000157764"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params: Params = [
        ("feature", Some("gene")),
        ("biotype", None),
        ("logic_name", None),
    ]
    .into_iter()
    .collect();
    client_for(&server)
        .endpoint(&endpoints::OVERLAP_ID)
        .arg("id", "ENSG00000157764")
        .params(params)
        .param("db_type", "core")
        .param_opt("species", None::<&str>)
        .param("utr", false)
        .param("start", 0)
        .send()
        .await?;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("feature=gene&db_type=core&utr=0&start=0")
    );
    Ok(())
}

#[tokio::test]
async fn test_fasta_is_raw_text() -> AnyResult {
    let server = MockServer::start().await;
    let fasta = ">ENSG00000157764.14\nTTCCCCCAATCCCCTCAGGCTCGGCTGCGCCCGGGGCCGCGGGCCGGTACCTGAGGTGGC\n";
    Mock::given(method("GET"))
        .and(path("/sequence/id/ENSG00000157764"))
        .and(header("content-type", "text/x-fasta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fasta))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .sequence_id()
        .format(ResponseFormat::Fasta)
        .dispatch("ENSG00000157764")
        .await?;
    assert_eq!(response.as_text(), Some(fasta));
    assert!(matches!(
        response.deserialize::<serde_json::Value>(),
        Err(EnsemblError::NotJson(ResponseFormat::Fasta))
    ));
    Ok(())
}

#[tokio::test]
async fn test_get_does_not_negotiate_with_accept() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("(a,b);"))
        .mount(&server)
        .await;

    client_for(&server)
        .endpoint(&endpoints::GENETREE)
        .arg("id", "ENSGT00390000003602")
        .format(ResponseFormat::Nh)
        .send()
        .await?;

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers.get("content-type").unwrap(), "text/x-nh");
    assert_ne!(
        headers.get("accept").map(|v| v.to_str().unwrap()),
        Some("text/x-nh")
    );
    Ok(())
}

#[tokio::test]
async fn test_ga4gh_search_body() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ga4gh/variants/search"))
        .and(body_json(json!({
            "variantSetId": 1,
            "referenceName": "22",
            "start": 17190024,
            "end": 17671934,
            "pageSize": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"variants": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .endpoint(&endpoints::GA4GH_VARIANTS_SEARCH)
        .body_field("variantSetId", 1)
        .body_field("referenceName", "22")
        .body_field("start", 17190024)
        .body_field("end", 17671934)
        .body_field("pageSize", 1)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_not_retried() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup/id/ENSG00000157764"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup_id()
        .dispatch("ENSG00000157764")
        .await
        .unwrap_err();
    match err {
        EnsemblError::Http { status, text, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(text, "Internal Server Error");
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_bad_request_carries_body() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "ID 'nope' not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup_id()
        .dispatch("nope")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert!(err.to_string().contains("not found"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_identifier_sends_nothing() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup_id()
        .dispatch_json(json!({"id": "ENSG00000157764"}))
        .await
        .unwrap_err();
    assert!(matches!(err, EnsemblError::Dispatch(_)));
    Ok(())
}

#[test]
fn test_unknown_format_name() {
    let client = EnsemblClient::new().unwrap();
    let err = client.sequence_id().format_name("genbank").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFormat(name) if name == "genbank"));
}

#[test]
fn test_unknown_server() {
    let err = EnsemblClient::for_server("GRCh99", "http").unwrap_err();
    assert!(matches!(
        err,
        EnsemblError::Config(ConfigError::UnknownServer { .. })
    ));
}

#[tokio::test]
async fn test_ping() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ping": 1})))
        .mount(&server)
        .await;
    assert!(client_for(&server).ping().await?);
    Ok(())
}

#[tokio::test]
async fn test_base_url_path_is_kept() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mirror/info/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ping": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/mirror", server.uri()).parse()?;
    let client = EnsemblClient::builder_with_url(url).build()?;
    let response = client.get("info/ping", &Params::new(), ResponseFormat::Json).await?;
    assert_eq!(response.into_json(), Some(json!({"ping": 1})));
    Ok(())
}

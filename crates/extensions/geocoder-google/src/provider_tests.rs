    use super::*;

    #[test]
    fn test_geocoder_id() {
        let geocoder = GoogleGeocoder::new("key".to_string());
        assert_eq!(geocoder.id(), "google");
    }

    #[test]
    fn test_geocoder_defaults() {
        let geocoder = GoogleGeocoder::new("key".to_string());
        assert_eq!(geocoder.api_url, DEFAULT_API_URL);
        assert_eq!(geocoder.unit, "mi");
        assert_eq!(geocoder.distance, 30);
    }

    #[test]
    fn test_first_location_uses_first_result() {
        let geocoder = GoogleGeocoder::new("key".to_string());
        let response: GeocodeResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 1.0, "lng": 2.0}}},
                {"geometry": {"location": {"lat": 3.0, "lng": 4.0}}}
            ]
        }))
        .unwrap();

        let geo = geocoder.first_location("00000", response).unwrap();
        assert_eq!(geo, GeoCoordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_first_location_ok_but_empty() {
        let geocoder = GoogleGeocoder::new("key".to_string());
        let response: GeocodeResponse =
            serde_json::from_value(serde_json::json!({"status": "OK", "results": []})).unwrap();
        let result = geocoder.first_location("00000", response);
        assert!(matches!(result, Err(GeocodeError::NoResults(_))));
    }

    // Wiremock-based tests for actual HTTP calls
    mod http_tests {
        use super::*;
        use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn test_geocode_success() {
            let mock_server = MockServer::start().await;

            let body = serde_json::json!({
                "status": "OK",
                "results": [{"geometry": {"location": {"lat": 39.29, "lng": -76.61}}}]
            });

            Mock::given(matchers::method("GET"))
                .and(matchers::path("/geocode/json"))
                .and(matchers::query_param("address", "21201"))
                .and(matchers::query_param("key", "g-key"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url(
                "g-key".to_string(),
                format!("{}/geocode/json", mock_server.uri()),
            );
            let geo = geocoder.geocode("21201").await.unwrap();
            assert_eq!(geo.lat, 39.29);
            assert_eq!(geo.lng, -76.61);
            assert_eq!(geo.unit, "mi");
            assert_eq!(geo.distance, 30);
        }

        #[tokio::test]
        async fn test_geocode_custom_radius() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "status": "OK",
                    "results": [{"geometry": {"location": {"lat": 1.5, "lng": 2.5}}}]
                })))
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url("k".to_string(), mock_server.uri())
                .with_radius("km", 10);
            let geo = geocoder.geocode("12345").await.unwrap();
            assert_eq!(geo.unit, "km");
            assert_eq!(geo.distance, 10);
        }

        #[tokio::test]
        async fn test_geocode_request_denied() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "status": "REQUEST_DENIED",
                    "error_message": "The provided API key is invalid.",
                    "results": []
                })))
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url(String::new(), mock_server.uri());
            match geocoder.geocode("21201").await {
                Err(GeocodeError::Rejected { status, message }) => {
                    assert_eq!(status, "REQUEST_DENIED");
                    assert!(message.contains("API key"));
                }
                other => panic!("Expected Rejected, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_geocode_zero_results() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "status": "ZERO_RESULTS",
                    "results": []
                })))
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url("k".to_string(), mock_server.uri());
            let result = geocoder.geocode("00000").await;
            assert!(matches!(result, Err(GeocodeError::NoResults(code)) if code == "00000"));
        }

        #[tokio::test]
        async fn test_geocode_http_error() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("GET"))
                .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url("k".to_string(), mock_server.uri());
            let result = geocoder.geocode("21201").await;
            assert!(matches!(result, Err(GeocodeError::Api { status: 500, .. })));
        }

        #[tokio::test]
        async fn test_geocode_malformed_body() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
                .mount(&mock_server)
                .await;

            let geocoder = GoogleGeocoder::with_url("k".to_string(), mock_server.uri());
            let result = geocoder.geocode("21201").await;
            assert!(matches!(result, Err(GeocodeError::MalformedBody(_))));
        }
    }

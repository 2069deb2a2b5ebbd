    use super::*;

    fn digest(recipients: &[&str]) -> EmailDigest {
        EmailDigest {
            recipients: recipients.iter().map(|r| r.to_string()).collect(),
            subject: "NEW AMAZON FULFILLMENT JOBS - 1".to_string(),
            text_body: "Jobs".to_string(),
            html_body: "<ul><li>one</li></ul>".to_string(),
            item_count: 1,
        }
    }

    #[test]
    fn test_mailer_id() {
        let mailer = SendGridMailer::new("key".to_string(), "from@x.com".to_string());
        assert_eq!(mailer.id(), "sendgrid");
    }

    #[test]
    fn test_build_request_single_personalization() {
        let mailer = SendGridMailer::new("key".to_string(), "from@x.com".to_string())
            .with_from_name("hirewatch");
        let request = mailer
            .build_request(&digest(&["a@x.com", "b@y.com"]))
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["personalizations"],
            serde_json::json!([{"to": [{"email": "a@x.com"}, {"email": "b@y.com"}]}])
        );
        assert_eq!(
            json["from"],
            serde_json::json!({"email": "from@x.com", "name": "hirewatch"})
        );
        assert_eq!(json["subject"], "NEW AMAZON FULFILLMENT JOBS - 1");
        assert_eq!(json["content"][0]["type"], "text/plain");
        assert_eq!(json["content"][0]["value"], "Jobs");
        assert_eq!(json["content"][1]["type"], "text/html");
    }

    #[test]
    fn test_build_request_no_recipients() {
        let mailer = SendGridMailer::new("key".to_string(), "from@x.com".to_string());
        let result = mailer.build_request(&digest(&[]));
        assert!(matches!(result, Err(NotifyError::NoRecipients)));
    }

    #[test]
    fn test_empty_from_name_is_omitted() {
        let mailer =
            SendGridMailer::new("key".to_string(), "from@x.com".to_string()).with_from_name("");
        assert!(mailer.from.name.is_none());
    }

    // Wiremock-based tests for actual HTTP calls
    mod http_tests {
        use super::*;
        use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn test_send_accepted() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/v3/mail/send"))
                .and(matchers::header("Authorization", "Bearer sg-key"))
                .and(matchers::body_partial_json(serde_json::json!({
                    "subject": "NEW AMAZON FULFILLMENT JOBS - 1"
                })))
                .respond_with(
                    ResponseTemplate::new(202).insert_header("X-Message-Id", "msg-123"),
                )
                .expect(1)
                .mount(&mock_server)
                .await;

            let mailer = SendGridMailer::with_url(
                "sg-key".to_string(),
                "from@x.com".to_string(),
                format!("{}/v3/mail/send", mock_server.uri()),
            );
            let receipt = mailer.send(&digest(&["a@x.com"])).await.unwrap();
            assert_eq!(receipt.status, 202);
            assert_eq!(receipt.message_id.as_deref(), Some("msg-123"));
        }

        #[tokio::test]
        async fn test_send_unauthorized() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("POST"))
                .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                    "errors": [{"message": "The provided authorization grant is invalid"}]
                })))
                .mount(&mock_server)
                .await;

            let mailer = SendGridMailer::with_url(
                String::new(),
                "from@x.com".to_string(),
                mock_server.uri(),
            );
            let result = mailer.send(&digest(&["a@x.com"])).await;
            match result {
                Err(NotifyError::Api { status, message }) => {
                    assert_eq!(status, 401);
                    assert!(message.contains("authorization grant"));
                }
                other => panic!("Expected Api error, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_send_no_recipients_makes_no_call() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("POST"))
                .respond_with(ResponseTemplate::new(202))
                .expect(0)
                .mount(&mock_server)
                .await;

            let mailer = SendGridMailer::with_url(
                "k".to_string(),
                "from@x.com".to_string(),
                mock_server.uri(),
            );
            let result = mailer.send(&digest(&[])).await;
            assert!(matches!(result, Err(NotifyError::NoRecipients)));
        }
    }

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use rocket::http::{Header, Status};

    use crate::auth::{BasicChallenge, parse_basic_auth};
    use crate::content::InMemoryStore;
    use crate::test::utils::test_utils::{
        STUDIO_PASSWORD, STUDIO_USER, basic_auth, setup_test_client,
    };

    const CHALLENGE: &str = "Basic realm=\"Barbell Admin\", charset=\"UTF-8\"";

    #[test]
    fn test_parse_basic_auth_splits_on_first_colon() {
        let header = format!("Basic {}", STANDARD.encode("coach:pass:word"));
        let (username, password) = parse_basic_auth(&header).unwrap();

        assert_eq!(username, "coach");
        assert_eq!(password, "pass:word");
    }

    #[test]
    fn test_parse_basic_auth_rejects_malformed_headers() {
        assert!(parse_basic_auth("Bearer abc").is_err());
        assert!(parse_basic_auth("Basic").is_err());
        assert!(parse_basic_auth("Basic !!!not-base64!!!").is_err());
        let no_colon = format!("Basic {}", STANDARD.encode("nocolon"));
        assert!(parse_basic_auth(&no_colon).is_err());
    }

    #[test]
    fn test_challenge_header_value() {
        assert_eq!(BasicChallenge::new("Barbell Admin").header_value(), CHALLENGE);
    }

    #[rocket::async_test]
    async fn test_studio_requires_credentials() {
        let (client, _) = setup_test_client(InMemoryStore::new()).await;

        let response = client.get("/studio/desk").dispatch().await;

        assert_eq!(response.status(), Status::Unauthorized);
        assert_eq!(
            response.headers().get_one("WWW-Authenticate"),
            Some(CHALLENGE)
        );
    }

    #[rocket::async_test]
    async fn test_studio_rejects_wrong_password() {
        let (client, _) = setup_test_client(InMemoryStore::new()).await;

        let response = client
            .get("/studio/desk")
            .header(basic_auth(STUDIO_USER, "wrong"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        assert_eq!(
            response.headers().get_one("WWW-Authenticate"),
            Some(CHALLENGE)
        );

        let response = client
            .get("/studio/desk")
            .header(Header::new("Authorization", "Bearer token"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn test_studio_accepts_password_with_colon() {
        let (client, _) = setup_test_client(InMemoryStore::new()).await;

        let response = client
            .get("/studio/desk")
            .header(basic_auth(STUDIO_USER, STUDIO_PASSWORD))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("Signed in as coach"));
        assert!(body.contains("test-project"));
    }

    #[rocket::async_test]
    async fn test_public_routes_are_not_challenged() {
        let (client, _) = setup_test_client(InMemoryStore::new()).await;

        let response = client.get("/api/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert!(response.headers().get_one("WWW-Authenticate").is_none());

        let response = client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert!(response.headers().get_one("WWW-Authenticate").is_none());
    }
}

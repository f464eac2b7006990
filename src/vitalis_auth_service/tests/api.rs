use secrecy::Secret;
use vitalis_adapters::{
    Argon2Hasher, HashMapUserStore, HashMapVerificationStore, JwtConfig, JwtTokenIssuer,
    MockMailRelay,
};
use vitalis_auth_service::{AppState, AuthService};

struct TestApp {
    address: String,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        Self::spawn_with_relay(MockMailRelay::new()).await
    }

    async fn spawn_with_relay(mail_relay: MockMailRelay) -> Self {
        let state = AppState {
            user_store: HashMapUserStore::new(),
            verification_store: HashMapVerificationStore::new(),
            mail_relay,
            hasher: Argon2Hasher::new(),
            token_issuer: JwtTokenIssuer::new(JwtConfig {
                jwt_secret: Secret::from("test-secret".to_owned()),
                token_ttl_in_seconds: 600,
            }),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(AuthService::new(state).run(listener));

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    async fn register(&self, nik: &str, email: &str) -> reqwest::Response {
        self.post("/auth/register", register_body(nik, email)).await
    }
}

fn register_body(nik: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Smith",
        "nik": nik,
        "email": email,
        "dob": "1992-05-20",
        "gender": "female",
        "agreement": true,
        "password": "password123",
        "phoneCode": "+62",
        "phoneNumber": "8129876543",
    })
}

#[tokio::test]
async fn register_creates_an_account_and_returns_a_token() {
    let app = TestApp::spawn().await;

    let response = app.register("3201234567890001", "jane@example.com").await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["access_token"].as_str().unwrap().split('.').count(), 3);
    assert!(body["otp"].is_u64());
    assert_eq!(body["user"]["name"], "Jane Smith");
    assert_eq!(body["user"]["email"], "jane@example.com");
    assert!(body["user"]["id"].is_i64());
}

#[tokio::test]
async fn register_without_the_optional_agreement_field_defaults_to_declined() {
    let app = TestApp::spawn().await;
    let mut body = register_body("3201234567890001", "jane@example.com");
    body.as_object_mut().unwrap().remove("agreement");

    let response = app.post("/auth/register", body).await;

    assert_eq!(response.status().as_u16(), 201);
    let registered: serde_json::Value = response.json().await.unwrap();
    let token = registered["access_token"].as_str().unwrap().to_owned();

    let profile: serde_json::Value = app
        .client
        .get(format!("{}/auth/profile", app.address))
        .bearer_auth(token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["agreementAccepted"], false);
}

#[tokio::test]
async fn register_rejects_a_taken_national_id() {
    let app = TestApp::spawn().await;
    app.register("3201234567890001", "jane@example.com").await;

    let response = app.register("3201234567890001", "other@example.com").await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn register_soft_fails_without_creating_an_account_when_mail_is_rejected() {
    let app = TestApp::spawn_with_relay(MockMailRelay::answering(206)).await;

    let response = app.register("3201234567890001", "jane@example.com").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 206);
    assert_eq!(body["mail-status"], "Failed to send email");
    assert!(body["otp"].is_u64());

    // no account was created, so the same credentials cannot log in
    let login = app
        .post(
            "/auth/login",
            serde_json::json!({ "nik": "3201234567890001", "password": "password123" }),
        )
        .await;
    assert_eq!(login.status().as_u16(), 401);
}

#[tokio::test]
async fn login_returns_a_token_and_a_fresh_otp() {
    let app = TestApp::spawn().await;
    app.register("3201234567890001", "jane@example.com").await;

    let response = app
        .post(
            "/auth/login",
            serde_json::json!({ "nik": "3201234567890001", "password": "password123" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert!(body["otp"].is_u64());
    assert_eq!(body["user"]["email"], "jane@example.com");
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_national_ids_exist() {
    let app = TestApp::spawn().await;
    app.register("3201234567890001", "jane@example.com").await;

    let wrong_password = app
        .post(
            "/auth/login",
            serde_json::json!({ "nik": "3201234567890001", "password": "wrong-password" }),
        )
        .await;
    let unknown_nik = app
        .post(
            "/auth/login",
            serde_json::json!({ "nik": "9999999999999999", "password": "password123" }),
        )
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_nik.status().as_u16(), 401);

    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_nik.json().await.unwrap();
    assert_eq!(first["error"], second["error"]);
}

#[tokio::test]
async fn otp_request_reissues_a_code_for_a_known_email() {
    let app = TestApp::spawn().await;
    app.register("3201234567890001", "jane@example.com").await;

    let response = app
        .post(
            "/auth/otp/request",
            serde_json::json!({ "email": "jane@example.com" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 200);
    assert_eq!(body["mail-status"], "Email Sent");
    assert_eq!(body["name"], "Jane Smith");
    assert_eq!(body["email"], "jane@example.com");
    assert!(body["otp"].is_u64());
}

#[tokio::test]
async fn otp_request_for_an_unknown_email_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/auth/otp/request",
            serde_json::json!({ "email": "nobody@example.com" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn repeated_google_logins_resolve_to_the_same_account() {
    let app = TestApp::spawn().await;
    let body = serde_json::json!({
        "googleId": "google-oauth2|12345",
        "email": "jane@gmail.com",
        "name": "Jane Smith",
        "picture": "https://example.com/jane.png",
    });

    let first = app.post("/auth/google/login", body.clone()).await;
    let second = app.post("/auth/google/login", body).await;

    assert_eq!(first.status().as_u16(), 200);
    assert_eq!(second.status().as_u16(), 200);

    let first: serde_json::Value = first.json().await.unwrap();
    let second: serde_json::Value = second.json().await.unwrap();
    assert_eq!(first["user"]["id"], second["user"]["id"]);
    // a Google-only account never gains a national ID, so it stays "new"
    assert_eq!(first["isNewAccount"], true);
    assert_eq!(second["isNewAccount"], true);
}

#[tokio::test]
async fn google_login_links_to_an_existing_local_account_by_email() {
    let app = TestApp::spawn().await;
    app.register("3201234567890001", "jane@example.com").await;

    let response = app
        .post(
            "/auth/google/login",
            serde_json::json!({
                "googleId": "google-oauth2|12345",
                "email": "jane@example.com",
                "name": "Jane Smith",
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    // the linked account keeps its national ID, so it is not a new account
    assert_eq!(body["isNewAccount"], false);
}

#[tokio::test]
async fn profile_returns_the_user_behind_a_valid_token() {
    let app = TestApp::spawn().await;
    let register = app.register("3201234567890001", "jane@example.com").await;
    let body: serde_json::Value = register.json().await.unwrap();
    let token = body["access_token"].as_str().unwrap().to_owned();

    let response = app
        .client
        .get(format!("{}/auth/profile", app.address))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["email"], "jane@example.com");
    assert_eq!(profile["nationalId"], "3201234567890001");
    assert!(profile.get("passwordHash").is_none());
}

#[tokio::test]
async fn profile_rejects_a_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/auth/profile", app.address))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn profile_without_a_token_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/auth/profile", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

use payloads::{AuthEndpoint, AuthOutcome, Credentials};
use test_helpers::{alice_signup, assert_rejected, spawn_app, stub::EMAIL_TAKEN};

#[tokio::test]
async fn signup_sends_username() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let outcome = app.client.signup(&alice_signup()).await?;
    assert!(matches!(outcome, AuthOutcome::Authenticated { .. }));

    let requests = app.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, AuthEndpoint::Signup);
    assert_eq!(requests[0].body["username"], "alice");
    assert_eq!(
        app.backend.username_of("alice@example.com").as_deref(),
        Some("alice")
    );

    Ok(())
}

#[tokio::test]
async fn signup_with_empty_username_still_sends_field() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let credentials = Credentials {
        username: Some(String::new()),
        email: "blank@example.com".into(),
        password: "pw".into(),
    };
    app.client.signup(&credentials).await?;

    let requests = app.requests();
    assert_eq!(requests[0].body["username"], "");

    Ok(())
}

#[tokio::test]
async fn duplicate_email_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let result = app.client.signup(&alice_signup()).await;
    assert_rejected(result, EMAIL_TAKEN);

    Ok(())
}

#[tokio::test]
async fn each_signup_gets_a_distinct_token() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.create_alice_user().await?;
    let mut bob = alice_signup();
    bob.username = Some("bob".into());
    bob.email = "bob@example.com".into();
    let second = match app.client.signup(&bob).await? {
        AuthOutcome::Authenticated { token } => token,
        AuthOutcome::Rejected { errors } => panic!("signup refused: {errors}"),
    };
    assert_ne!(first, second);

    Ok(())
}

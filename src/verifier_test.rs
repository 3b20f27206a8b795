use super::*;

// =============================================================================
// login synthesis
// =============================================================================

#[tokio::test]
async fn login_derives_name_from_email_local_part() {
    let verifier = MockVerifier::instant();
    let identity = verifier.verify_login("ana@test.com", "secret1").await.unwrap();
    assert_eq!(identity.name, "ana");
    assert_eq!(identity.email, "ana@test.com");
}

#[tokio::test]
async fn login_grants_admin_for_admin_substring() {
    let verifier = MockVerifier::instant();
    let identity = verifier
        .verify_login("admin@site.com", "pw123456")
        .await
        .unwrap();
    assert!(identity.is_admin);
    assert_eq!(identity.name, "admin");
}

#[tokio::test]
async fn login_admin_substring_is_case_sensitive() {
    let verifier = MockVerifier::instant();
    let identity = verifier
        .verify_login("Admin@site.com", "pw123456")
        .await
        .unwrap();
    assert!(!identity.is_admin);
}

#[tokio::test]
async fn login_without_admin_substring_is_not_admin() {
    let verifier = MockVerifier::instant();
    let identity = verifier.verify_login("bob@site.com", "pw123456").await.unwrap();
    assert!(!identity.is_admin);
}

#[tokio::test]
async fn login_generates_fresh_ids() {
    let verifier = MockVerifier::instant();
    let a = verifier.verify_login("ana@test.com", "secret1").await.unwrap();
    let b = verifier.verify_login("ana@test.com", "secret1").await.unwrap();
    assert!(a.id.starts_with("user-"));
    assert_ne!(a.id, b.id);
}

// =============================================================================
// registration synthesis
// =============================================================================

#[tokio::test]
async fn registration_keeps_name_verbatim() {
    let verifier = MockVerifier::instant();
    let identity = verifier
        .verify_registration("Ana", "ana@test.com", "secret1")
        .await
        .unwrap();
    assert_eq!(identity.name, "Ana");
    assert_eq!(identity.email, "ana@test.com");
}

#[tokio::test]
async fn registration_never_grants_admin() {
    let verifier = MockVerifier::instant();
    let identity = verifier
        .verify_registration("Root", "admin@site.com", "pw123456")
        .await
        .unwrap();
    assert!(!identity.is_admin);
}

// =============================================================================
// simulated latency
// =============================================================================

#[tokio::test(start_paused = true)]
async fn default_verifier_waits_the_simulated_delay() {
    let verifier = MockVerifier::default();
    let before = tokio::time::Instant::now();
    verifier.verify_login("ana@test.com", "secret1").await.unwrap();
    assert!(before.elapsed() >= Duration::from_millis(1000));
}

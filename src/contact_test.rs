use super::*;

fn jane() -> FormFields {
    FormFields {
        name: "Jane".to_owned(),
        email: "j@x.com".to_owned(),
        company: "Acme".to_owned(),
        budget: "$5k".to_owned(),
        message: "Need a dashboard.".to_owned(),
    }
}

fn decoded_body(uri: &str) -> String {
    let body = uri.split("body=").nth(1).expect("uri has a body parameter");
    urlencoding::decode(body).expect("body decodes").into_owned()
}

#[test]
fn uri_targets_the_contact_address() {
    let uri = mailto_uri(&jane(), "2026-01-05T10:00:00.000Z", "https://example.com/");
    assert!(uri.starts_with(&format!("mailto:{CONTACT_EMAIL}?subject=")));
}

#[test]
fn subject_carries_the_sender_name() {
    let uri = mailto_uri(&jane(), "ts", "page");
    let subject = uri
        .split("subject=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("uri has a subject parameter");
    assert_eq!(
        urlencoding::decode(subject).expect("subject decodes"),
        "New consulting inquiry: Jane"
    );
}

#[test]
fn subject_falls_back_to_website_when_name_is_empty() {
    let uri = mailto_uri(&FormFields::default(), "ts", "page");
    assert!(uri.contains(&urlencoding::encode("New consulting inquiry: Website").into_owned()));
}

#[test]
fn decoded_body_labels_every_field() {
    let body = decoded_body(&mailto_uri(&jane(), "2026-01-05T10:00:00.000Z", "https://example.com/"));

    assert!(body.contains("Timestamp: 2026-01-05T10:00:00.000Z"));
    assert!(body.contains("Page: https://example.com/"));
    assert!(body.contains("Name: Jane"));
    assert!(body.contains("Email: j@x.com"));
    assert!(body.contains("Company: Acme"));
    assert!(body.contains("Budget: $5k"));
    assert!(body.contains("Message:\nNeed a dashboard."));
}

#[test]
fn empty_fields_serialize_as_empty_labels() {
    let body = decoded_body(&mailto_uri(&FormFields::default(), "ts", "page"));

    assert!(body.contains("Name: \n"));
    assert!(body.contains("Email: \n"));
    assert!(body.ends_with("Message:\n"));
}

#[test]
fn submit_orders_status_navigate_then_fallback_timer() {
    let effects = submit(&jane(), "ts", "page");

    assert_eq!(effects.len(), 3);
    assert_eq!(effects[0], Effect::FormStatus(STATUS_OPENING));
    assert!(matches!(&effects[1], Effect::Navigate(uri) if uri.starts_with("mailto:")));
    assert_eq!(
        effects[2],
        Effect::Schedule { delay_ms: MAILTO_FALLBACK_DELAY_MS, task: Task::FormFallback }
    );
}

#[test]
fn fallback_overwrites_the_status_line() {
    assert_eq!(fallback(), vec![Effect::FormStatus(STATUS_FALLBACK)]);
}

use std::time::Duration;

use resume_parser::{ParseError, ResumeParser};

#[tokio::test]
async fn test_builder_requires_url() {
    let result = ResumeParser::builder().build().await;
    assert!(matches!(result, Err(ParseError::InvalidInput(_))));
}

#[tokio::test]
async fn test_builder_parses_with_timeout_option() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/resume.txt")
        .with_status(200)
        .with_body("Ada Lovelace\nMathematician\nSkills: Analysis, Programming")
        .create();

    let url = format!("{}/resume.txt", server.url());
    let parsed = ResumeParser::builder()
        .url(&url)
        .timeout(Duration::from_secs(5))
        .build()
        .await
        .expect("parse should succeed");

    assert_eq!(parsed.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(parsed.title.as_deref(), Some("Mathematician"));
    assert_eq!(parsed.skills, vec!["Analysis", "Programming"]);
    assert_eq!(parsed.email, None);
    assert_eq!(parsed.experience_years, None);
}

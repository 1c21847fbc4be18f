use reqwest::Method;
use serde_json::json;
use skills_client::error::AppError;
use skills_client::model::requests::{
    Payload, RequestDescriptor, SkillSearchQuery, versioned_path,
};

#[test]
fn test_list_versions_descriptor() {
    let descriptor = RequestDescriptor::list_versions();
    assert_eq!(descriptor.endpoint, "versions");
    assert_eq!(descriptor.payload, Payload::Empty);
    assert_eq!(descriptor.method(), Method::GET);
}

#[test]
fn test_skill_paths_include_version() {
    assert_eq!(
        RequestDescriptor::list_all_skills("latest").unwrap().endpoint,
        "versions/latest/skills"
    );
    assert_eq!(
        RequestDescriptor::get_skill_by_id("7.35", "KS1").unwrap().endpoint,
        "versions/7.35/skills/KS1"
    );
    assert_eq!(
        RequestDescriptor::list_skill_types("latest").unwrap().endpoint,
        "versions/latest/types"
    );
}

#[test]
fn test_search_requires_a_filter() {
    let err = RequestDescriptor::search_skills("latest", None, None).unwrap_err();
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("search string or a type id")),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_search_with_text_only() {
    let descriptor = RequestDescriptor::search_skills("latest", Some("python"), None).unwrap();
    assert_eq!(descriptor.endpoint, "versions/latest/skills");
    assert_eq!(descriptor.method(), Method::GET);
    assert_eq!(
        descriptor.query_params(),
        &[("q".to_string(), "python".to_string())]
    );
}

#[test]
fn test_search_with_text_and_type() {
    let query = SkillSearchQuery::new(Some("java"), Some("ST1")).unwrap();
    assert_eq!(
        query.to_params(),
        vec![
            ("q".to_string(), "java".to_string()),
            ("typeId".to_string(), "ST1".to_string()),
        ]
    );
}

#[test]
fn test_extract_descriptors_differ_only_by_trace_flag() {
    let plain = RequestDescriptor::extract_skills("latest", "Python developer", false).unwrap();
    let traced = RequestDescriptor::extract_skills("latest", "Python developer", true).unwrap();

    assert_eq!(plain.endpoint, traced.endpoint);
    assert_eq!(plain.endpoint, "versions/latest/extract");
    assert_eq!(plain.method(), Method::POST);
    assert_eq!(traced.method(), Method::POST);
    assert_eq!(plain.json_body(), traced.json_body());
    assert_eq!(plain.json_body(), Some(&json!({"full_text": "Python developer"})));
    assert!(plain.query_params().is_empty());
    assert_eq!(
        traced.query_params(),
        &[("trace".to_string(), "true".to_string())]
    );

    let mut stripped = traced.clone();
    if let Payload::Json { query, .. } = &mut stripped.payload {
        query.clear();
    }
    assert_eq!(stripped, plain);
}

#[test]
fn test_json_descriptor_has_no_query() {
    let descriptor = RequestDescriptor::json("custom", json!({"a": 1}));
    assert_eq!(descriptor.method(), Method::POST);
    assert!(descriptor.query_params().is_empty());
}

#[test]
fn test_skill_id_is_a_single_encoded_segment() {
    let descriptor = RequestDescriptor::get_skill_by_id("latest", "../types").unwrap();
    assert_eq!(descriptor.endpoint, "versions/latest/skills/..%2Ftypes");
    assert_ne!(descriptor.endpoint, "versions/latest/types");

    let descriptor = RequestDescriptor::get_skill_by_id("latest", "KS1?limit=5#top").unwrap();
    assert_eq!(descriptor.endpoint, "versions/latest/skills/KS1%3Flimit=5%23top");
}

#[test]
fn test_version_segment_is_encoded() {
    let descriptor = RequestDescriptor::list_skill_types("7.35/../x").unwrap();
    assert_eq!(descriptor.endpoint, "versions/7.35%2F..%2Fx/types");
}

#[test]
fn test_dot_segments_are_rejected() {
    for segment in ["", ".", ".."] {
        match RequestDescriptor::get_skill_by_id("latest", segment) {
            Err(AppError::InvalidInput(msg)) => assert!(msg.contains("invalid path segment")),
            other => panic!("Unexpected result for {segment:?}: {:?}", other),
        }
    }
    assert!(matches!(
        versioned_path("..", &["skills"]),
        Err(AppError::InvalidInput(_))
    ));
}

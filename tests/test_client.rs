//! Offline tests against a mock CGI-Clinics server.

use cgiclinics::auth::ApiToken;
use cgiclinics::errors::CgiError;
use cgiclinics::models::*;
use cgiclinics::types::*;
use cgiclinics::{AdminClient, UserClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ========================================
//                 HELPERS
// ========================================

const TOKEN: &str = "test-api-key";

fn api_url(server: &MockServer) -> ApiUrl {
    format!("{}/api/1.0/", server.uri()).parse().unwrap()
}

async fn admin_client() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::build(api_url(&server), &ApiToken::from(TOKEN))
        .unwrap()
        .build();
    (server, client)
}

async fn user_client() -> (MockServer, UserClient) {
    let server = MockServer::start().await;
    let client = UserClient::build(api_url(&server), &ApiToken::from(TOKEN))
        .unwrap()
        .build();
    (server, client)
}

fn project_uuid() -> ProjectUuid {
    ProjectUuid::from_static("p1")
}

// ========================================
//                 TESTS
// ========================================

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let (server, client) = admin_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/full"))
        .and(header("X-Api-Key", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client
        .get_all_projects(&ProjectFilter::default())
        .await
        .unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_get_project_keeps_unknown_fields() {
    let (server, client) = user_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "p1",
            "name": "Trial1",
            "createdAt": "2024-05-02"
        })))
        .mount(&server)
        .await;

    let project = client.get_project_by_uuid(&project_uuid()).await.unwrap();
    assert_eq!(project.name, "Trial1");
    assert_eq!(
        project.extra.get("createdAt").and_then(|v| v.as_str()),
        Some("2024-05-02")
    );
}

#[tokio::test]
async fn test_create_project_posts_name() {
    let (server, client) = user_client().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/project"))
        .and(body_json(json!({"name": "Trial1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"uuid": "p9", "name": "Trial1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_project("Trial1").await.unwrap();
    assert_eq!(created.uuid.as_str(), "p9");
}

#[tokio::test]
async fn test_error_body_is_surfaced_verbatim() {
    let (server, client) = user_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
        .mount(&server)
        .await;

    let error = client
        .get_project_by_uuid(&ProjectUuid::from_static("nope"))
        .await
        .unwrap_err();
    match error {
        CgiError::Error { status, text, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(text, "project not found");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_page_listing_passes_size_and_page() {
    let (server, client) = user_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project"))
        .and(query_param("size", "5"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"uuid": "p1", "name": "Trial1"}],
            "totalElements": 11,
            "totalPages": 3,
            "number": 2,
            "size": 5
        })))
        .mount(&server)
        .await;

    let page = client
        .get_all_projects_paginated(&ProjectFilter::default(), 5, 2)
        .await
        .unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_elements, 11);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_hospital_listing_drains_every_page() {
    let (server, client) = admin_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/p1/hospital"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"uuid": "h1", "name": "General"},
                {"uuid": "h2", "name": "Clinic"}
            ],
            "totalElements": 3,
            "totalPages": 2,
            "number": 0,
            "size": 100
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/p1/hospital"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"uuid": "h3", "name": "University"}],
            "totalElements": 3,
            "totalPages": 2,
            "number": 1,
            "size": 100
        })))
        .mount(&server)
        .await;

    let hospitals = client.get_all_hospitals(&project_uuid()).await.unwrap();
    let names: Vec<&str> = hospitals.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["General", "Clinic", "University"]);
}

#[tokio::test]
async fn test_patient_full_listing_filter_query() {
    let (server, client) = admin_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/patient/full"))
        .and(query_param("project_uuid", "p1"))
        .and(query_param("gender", "FEMALE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "pa1", "patientId": "P-001", "gender": "FEMALE"}
        ])))
        .mount(&server)
        .await;

    let filter = PatientFilter {
        gender: Some(Gender::Female),
        ..Default::default()
    };
    let patients = client
        .get_all_patients(&project_uuid(), &filter)
        .await
        .unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].gender, Some(Gender::Female));
}

#[tokio::test]
async fn test_sample_full_listing_joins_project_uuids() {
    let (server, client) = admin_client().await;
    Mock::given(method("GET"))
        .and(path("/api/1.0/sample/full"))
        .and(query_param("projectUuids", "p1,p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = [ProjectUuid::from_static("p1"), ProjectUuid::from_static("p2")];
    let samples = client
        .get_all_samples(&projects, &SampleFilter::default())
        .await
        .unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn test_delete_has_no_content() {
    let (server, client) = user_client().await;
    Mock::given(method("DELETE"))
        .and(path("/api/1.0/p1/patient/pa1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete_patient(&project_uuid(), &PatientUuid::from_static("pa1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rerun_multiple_posts_uuid_list() {
    let (server, client) = user_client().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/project/p1/analysis/rerun"))
        .and(body_json(json!({"analysisUuids": ["a1", "a2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uuids = [
        AnalysisUuid::from_static("a1"),
        AnalysisUuid::from_static("a2"),
    ];
    client
        .rerun_multiple_analyses(&project_uuid(), &uuids)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_result_summary_is_verbatim_text() {
    let (server, client) = user_client().await;
    let tsv = "gene\tdriver\nTP53\tyes\n";
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/p1/analysis/a1/result/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(tsv))
        .mount(&server)
        .await;

    let summary = client
        .get_analysis_result_summary(&project_uuid(), &AnalysisUuid::from_static("a1"))
        .await
        .unwrap();
    assert_eq!(summary, tsv);
}

#[tokio::test]
async fn test_result_files_are_bytes() {
    let (server, client) = user_client().await;
    let payload: &[u8] = b"PK\x03\x04zipbytes";
    Mock::given(method("GET"))
        .and(path("/api/1.0/project/p1/analysis/a1/result/files"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
        .mount(&server)
        .await;

    let bytes = client
        .get_analysis_result_files(&project_uuid(), &AnalysisUuid::from_static("a1"))
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), payload);
}

#[tokio::test]
async fn test_upload_file_is_a_two_step_sequence() {
    let (server, client) = user_client().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/project/p1/temporal-upload"))
        .and(body_json(json!({"type": "ANALYSIS_INPUT"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"uuid": "tu1", "code": "c0de"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/public/project/p1/temporal-upload/tu1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "f1"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let local_file = camino::Utf8PathBuf::from_path_buf(dir.path().join("input.vcf")).unwrap();
    fs_err::write(&local_file, b"##fileformat=VCFv4.2\n").unwrap();

    let file_uuid = client.upload_file(&project_uuid(), &local_file).await.unwrap();
    assert_eq!(file_uuid.as_str(), "f1");
}

#[tokio::test]
async fn test_create_direct_analysis_body() {
    let (server, client) = user_client().await;
    Mock::given(method("POST"))
        .and(path("/api/1.0/project/p1/direct-analysis"))
        .and(body_json(json!({
            "patientId": "P-001",
            "sampleId": "S-001",
            "sequencingId": "SEQ-001",
            "analysisId": "AN-001",
            "sampleSource": "BLOOD",
            "tumorType": "LUAD",
            "sequencingType": "WGS",
            "sequencingGermlineControl": "NO",
            "referenceGenome": "HG38",
            "inputText": "chr17 7577120 G A",
            "format": "vcf"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"uuid": "a7", "status": "CREATED"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = CreateDirectAnalysis {
        patient_id: "P-001".to_string(),
        sample_id: "S-001".to_string(),
        sequencing_id: "SEQ-001".to_string(),
        analysis_id: AnalysisId::from_static("AN-001"),
        sample_source: SampleSource::Blood,
        tumor_type: "LUAD".to_string(),
        sequencing_type: "WGS".to_string(),
        sequencing_type_other: None,
        sequencing_germline_control: GermlineControl::No,
        reference_genome: ReferenceGenome::Hg38,
        input: AnalysisInput::text("chr17 7577120 G A", "vcf"),
    };
    let analysis = client
        .create_direct_analysis(&project_uuid(), &body)
        .await
        .unwrap();
    assert_eq!(analysis.status, Some(AnalysisStatus::Created));
}

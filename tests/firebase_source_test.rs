use httpmock::prelude::*;
use pro_catalog::core::ProfessionalSource;
use pro_catalog::{CatalogError, CatalogSession, FirebaseSource};

fn directory() -> serde_json::Value {
    serde_json::json!({
        "-Nana": {
            "nombres": "Ana", "apellidoPaterno": "López", "apellidoMaterno": "Ruiz",
            "ubicacionTrabajo": "Cholula", "numeroCelular": 2221112233u64,
            "oficios": [{"oficio_name": "Plumber", "oficio_descripcion": "Fugas", "fotos": []}]
        },
        "-Nbob": {
            "nombres": "Bob", "apellidoPaterno": "Díaz", "apellidoMaterno": "Mora",
            "oficios": [
                {"oficio_name": "Plumber"},
                {"oficio_name": "Electrician"}
            ]
        },
        "-Ncid": {"nombres": "Cid", "oficios": null}
    })
}

#[tokio::test]
async fn test_fetch_all_decodes_keyed_snapshot() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/profesionales.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(directory());
    });

    let source = FirebaseSource::new(server.base_url(), "profesionales");
    let pros = source.fetch_all().await.unwrap();

    api_mock.assert();
    assert_eq!(pros.len(), 3);
    let ana = pros.iter().find(|p| p.id.as_str() == "-Nana").unwrap();
    assert_eq!(ana.full_name(), "Ana López Ruiz");
    assert_eq!(ana.work_location.as_deref(), Some("Cholula"));
    let cid = pros.iter().find(|p| p.id.as_str() == "-Ncid").unwrap();
    assert!(cid.skills.is_empty());
}

#[tokio::test]
async fn test_auth_token_is_sent_as_query_param() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/profesionales.json")
            .query_param("auth", "tok123");
        then.status(200).json_body(serde_json::json!(null));
    });

    let source = FirebaseSource::new(server.base_url(), "profesionales")
        .with_auth_token(Some("tok123".to_string()));
    let pros = source.fetch_all().await.unwrap();

    api_mock.assert();
    assert!(pros.is_empty());
}

#[tokio::test]
async fn test_permission_denied_surfaces_source_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/profesionales.json");
        then.status(401)
            .json_body(serde_json::json!({"error": "Permission denied"}));
    });

    let source = FirebaseSource::new(server.base_url(), "profesionales");
    let err = source.fetch_all().await.unwrap_err();

    api_mock.assert();
    match err {
        CatalogError::SourceError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Permission denied");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_session_groups_fetched_snapshot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/profesionales.json");
        then.status(200).json_body(directory());
    });

    let source = FirebaseSource::new(server.base_url(), "profesionales");
    let mut session = CatalogSession::load(&source, None).await.unwrap();

    let cards: Vec<(&str, Vec<&str>)> = session
        .groups()
        .iter()
        .map(|g| {
            (
                g.skill_name.as_str(),
                g.professionals
                    .iter()
                    .map(|p| p.professional.given_names.as_str())
                    .collect(),
            )
        })
        .collect();
    assert_eq!(
        cards,
        vec![("Electrician", vec!["Bob"]), ("Plumber", vec!["Ana"])]
    );

    assert_eq!(session.suggestions("plu"), vec!["Plumber".to_string()]);
    assert!(session.select_suggestion("Plumber"));
    assert_eq!(session.groups().len(), 1);
    assert_eq!(session.groups()[0].professionals.len(), 2);
}

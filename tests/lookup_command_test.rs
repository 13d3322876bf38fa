use anyhow::Result;
use httpmock::prelude::*;
use rxnorm_lookup::{execute, LookupCommand, RxNormClient};
use serde_json::json;

/// Drive the same path the `rxnorm` binary takes, against a stub RxNorm.
#[tokio::test]
async fn test_resolve_then_fetch_properties() -> Result<()> {
    let server = MockServer::start();
    let rxcui_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/REST/rxcui.json")
            .query_param("name", "aspirin");
        then.status(200).json_body(json!({"idGroup": {"rxnormId": ["1191"]}}));
    });
    let props_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/REST/rxcui/1191/allProperties.json")
            .query_param("prop", "all");
        then.status(200).json_body(json!({
            "propConceptGroup": {"propConcept": [
                {"propCategory": "ATTRIBUTES", "propName": "TTY", "propValue": "IN"},
                {"propCategory": "NAMES", "propName": "RxNorm Name", "propValue": "aspirin"}
            ]}
        }));
    });

    let client = RxNormClient::with_base_url(&server.url("/REST"))?;

    let resolved = execute(
        &client,
        &LookupCommand::Rxcui {
            name: "aspirin".to_string(),
        },
    )
    .await?;
    assert_eq!(resolved, json!({"name": "aspirin", "rxcui": "1191"}));

    let rxcui = resolved["rxcui"].as_str().unwrap();
    let properties = execute(&client, &LookupCommand::Properties { rxcui: rxcui.into() }).await?;

    rxcui_mock.assert();
    props_mock.assert();
    assert_eq!(properties.as_array().map(Vec::len), Some(2));
    assert_eq!(properties[1]["propValue"], json!("aspirin"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_drug_renders_null_rxcui() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/REST/rxcui.json");
        then.status(200).json_body(json!({"idGroup": {"name": "zzz"}}));
    });

    let client = RxNormClient::with_base_url(&server.url("/REST"))?;
    let output = execute(
        &client,
        &LookupCommand::Rxcui {
            name: "zzz".to_string(),
        },
    )
    .await?;

    assert_eq!(output["rxcui"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_failed_lookup_returns_no_output() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/REST/interaction/interaction.json");
        then.status(503);
    });

    let client = RxNormClient::with_base_url(&server.url("/REST"))?;
    let result = execute(
        &client,
        &LookupCommand::Interactions {
            rxcui: "1191".into(),
        },
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    Ok(())
}

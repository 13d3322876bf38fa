use crate::domain::model::Rxcui;
use crate::domain::ports::DrugInfoSource;
use crate::utils::error::Result;
use serde_json::{json, Value};

/// One lookup, as requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum LookupCommand {
    /// Resolve a drug name to its RxCUI
    Rxcui { name: String },
    /// List all properties of an RxCUI
    Properties { rxcui: Rxcui },
    /// Show drug interactions for an RxCUI
    Interactions { rxcui: Rxcui },
    /// Show all names of an RxCUI
    Names { rxcui: Rxcui },
}

/// Run exactly one lookup and render its result as JSON.
pub async fn execute<S>(source: &S, command: &LookupCommand) -> Result<Value>
where
    S: DrugInfoSource + ?Sized,
{
    match command {
        LookupCommand::Rxcui { name } => {
            let rxcui = source.get_rxcui(name).await?;
            if rxcui.is_none() {
                tracing::info!("No RxNorm concept matches '{}'", name);
            }
            Ok(json!({ "name": name, "rxcui": rxcui }))
        }
        LookupCommand::Properties { rxcui } => {
            let properties = source.get_drug_properties(rxcui).await?;
            Ok(serde_json::to_value(properties)?)
        }
        LookupCommand::Interactions { rxcui } => source.get_drug_interactions(rxcui).await,
        LookupCommand::Names { rxcui } => source.get_drug_names(rxcui).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PropertyRecord;
    use crate::utils::error::RxNormError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Canned answers plus a log of which operation was called.
    struct FakeSource {
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DrugInfoSource for FakeSource {
        async fn get_rxcui(&self, drug_name: &str) -> Result<Option<Rxcui>> {
            self.record(format!("rxcui:{}", drug_name));
            Ok((drug_name == "aspirin").then(|| Rxcui::new("1191")))
        }

        async fn get_drug_properties(&self, rxcui: &Rxcui) -> Result<Vec<PropertyRecord>> {
            self.record(format!("properties:{}", rxcui));
            let record = serde_json::from_value(json!({"propName": "TTY", "propValue": "IN"}))?;
            Ok(vec![record])
        }

        async fn get_drug_interactions(&self, rxcui: &Rxcui) -> Result<Value> {
            self.record(format!("interactions:{}", rxcui));
            Err(RxNormError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: "http://localhost/interaction/interaction.json".to_string(),
            })
        }

        async fn get_drug_names(&self, rxcui: &Rxcui) -> Result<Value> {
            self.record(format!("names:{}", rxcui));
            Ok(json!({"displayGroup": {"name": ["Aspirin"]}}))
        }
    }

    #[tokio::test]
    async fn test_rxcui_command_renders_match_and_absence() {
        let source = FakeSource::new();

        let found = execute(&source, &LookupCommand::Rxcui { name: "aspirin".into() })
            .await
            .unwrap();
        assert_eq!(found, json!({"name": "aspirin", "rxcui": "1191"}));

        let missing = execute(&source, &LookupCommand::Rxcui { name: "unobtainium".into() })
            .await
            .unwrap();
        assert_eq!(missing, json!({"name": "unobtainium", "rxcui": null}));
    }

    #[tokio::test]
    async fn test_each_command_calls_one_operation() {
        let source = FakeSource::new();

        let properties = execute(&source, &LookupCommand::Properties { rxcui: "1191".into() })
            .await
            .unwrap();
        assert_eq!(properties, json!([{"propName": "TTY", "propValue": "IN"}]));

        let names = execute(&source, &LookupCommand::Names { rxcui: "1191".into() })
            .await
            .unwrap();
        assert_eq!(names, json!({"displayGroup": {"name": ["Aspirin"]}}));

        assert_eq!(source.calls(), vec!["properties:1191", "names:1191"]);
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let source = FakeSource::new();

        let err = execute(&source, &LookupCommand::Interactions { rxcui: "1191".into() })
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_execute_through_trait_object() {
        let source: Box<dyn DrugInfoSource> = Box::new(FakeSource::new());
        let result = execute(source.as_ref(), &LookupCommand::Rxcui { name: "aspirin".into() })
            .await
            .unwrap();
        assert_eq!(result["rxcui"], json!("1191"));
    }
}

//! Input spec for a training job.
//!
//! `/train` に送る JSON body の形をここで決めます。
//! `experiment_name` は指定されたときだけ body に含めます。

use serde::{Deserialize, Serialize};

/// Parameters of a training job submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequestSpec {
    pub learning_rate: f64,

    pub epochs: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_name: Option<String>,
}

impl JobRequestSpec {
    pub fn new(learning_rate: f64, epochs: u32) -> Self {
        Self {
            learning_rate,
            epochs,
            experiment_name: None,
        }
    }

    pub fn with_experiment_name(mut self, name: impl Into<String>) -> Self {
        self.experiment_name = Some(name.into());
        self
    }

    /// Serialize into the request body sent to `/train`.
    pub fn to_json_body(&self) -> String {
        let mut body = serde_json::json!({
            "learning_rate": self.learning_rate,
            "epochs": self.epochs,
        });
        if let Some(name) = &self.experiment_name {
            body["experiment_name"] = serde_json::Value::String(name.clone());
        }
        body.to_string()
    }
}

impl Default for JobRequestSpec {
    fn default() -> Self {
        Self::new(0.001, 10)
    }
}

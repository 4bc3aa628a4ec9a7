use serde::{Deserialize, Serialize};

pub use gamecrush_core::{GameConfig, HandRule, Modifier, RunAction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionScript {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub actions: Vec<RunAction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ActionScriptPayload {
    Script(ActionScript),
    Actions(Vec<RunAction>),
}

impl From<ActionScriptPayload> for ActionScript {
    fn from(payload: ActionScriptPayload) -> Self {
        match payload {
            ActionScriptPayload::Script(script) => script,
            ActionScriptPayload::Actions(actions) => ActionScript {
                seed: None,
                actions,
            },
        }
    }
}

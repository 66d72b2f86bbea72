use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The fixed action vocabulary the router dispatches on. Unrecognized
/// strings coerce to `NoAction` during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenApp,
    CloseApp,
    OpenUrl,
    OpenFolder,
    SetVolume,
    RunShell,
    CreateCoverLetter,
    #[serde(rename = "none")]
    NoAction,
}

impl<'de> Deserialize<'de> for ActionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenApp => "open_app",
            Self::CloseApp => "close_app",
            Self::OpenUrl => "open_url",
            Self::OpenFolder => "open_folder",
            Self::SetVolume => "set_volume",
            Self::RunShell => "run_shell",
            Self::CreateCoverLetter => "create_cover_letter",
            Self::NoAction => "none",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "open_app" => Self::OpenApp,
            "close_app" => Self::CloseApp,
            "open_url" => Self::OpenUrl,
            "open_folder" => Self::OpenFolder,
            "set_volume" => Self::SetVolume,
            "run_shell" => Self::RunShell,
            "create_cover_letter" => Self::CreateCoverLetter,
            _ => Self::NoAction,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ActionKind,
    #[serde(default)]
    pub args: Map<String, Value>,
    #[serde(default)]
    pub assistant_reply: String,
}

impl ActionRequest {
    pub fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            action: ActionKind::NoAction,
            args: Map::new(),
            assistant_reply: reply.into(),
        }
    }

    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(Value::as_str)
    }
}

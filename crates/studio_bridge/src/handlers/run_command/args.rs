use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RunCommandArgs {
    pub cwd: String,

    pub command: String,

    #[serde(default)]
    pub timeout: Option<u64>,
}

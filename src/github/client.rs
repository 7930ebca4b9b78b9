use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Create a GitHub client. A personal access token is optional: public
/// repository listings work unauthenticated, a token just raises the rate
/// limit. Pass the token via the GITHUB_TOKEN environment variable.
pub fn create_client(token: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder();
    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }
    builder.build().context("Failed to create GitHub client")
}

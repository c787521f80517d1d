//! The two things this tool does: obtain a token, and generate a feed.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::config::{AppConfig, FeedConfig};
use crate::error::Result;
use crate::feed::{entries_from_statuses, HomeFeed};
use crate::mastodon::MastodonClient;

/// Register an app, walk the user through authorization, print the token.
///
/// `input` supplies the pasted authorization code and `output` receives the
/// prompts; the binary passes stdin and stdout.
pub async fn run_setup<R: BufRead, W: Write>(
    client: &MastodonClient,
    app: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let credentials = client.register_app(app).await?;
    info!("registered application {}", credentials.client_id);

    let url = client.authorization_url(&credentials.client_id);
    writeln!(output, "Please visit the following URL:\n")?;
    writeln!(output, "{url}\n")?;
    write!(
        output,
        "Paste in the authorization code provided at the URL above: "
    )?;
    output.flush()?;

    let mut code = String::new();
    input.read_line(&mut code)?;

    let access_token = client.obtain_token(&credentials, code.trim()).await?;
    writeln!(output, "\nYour access token is: {access_token}")?;
    Ok(access_token)
}

/// Fetch the home timeline and write it to `output_file` as Atom.
///
/// Permalinks point at `instance`. Returns the number of entries written.
/// Nothing is written when the fetch or the conversion fails.
pub async fn run_generate(
    client: &MastodonClient,
    instance: &str,
    access_token: &str,
    feed_config: &FeedConfig,
    output_file: &Path,
) -> Result<usize> {
    let statuses = client.home_timeline(access_token).await?;

    let mut feed = HomeFeed::from_config(feed_config);
    feed.extend(entries_from_statuses(instance, &statuses));
    feed.write_to_path(output_file)?;

    Ok(feed.len())
}

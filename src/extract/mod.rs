//! Database session and the sequential extraction loop.
mod extractor;
mod session;
mod source;

pub use extractor::*;
pub use session::*;
pub use source::*;

use crate::config::Credentials;
use crate::config::Settings;
use crate::sink::Directory;

/// Open one connection, run the configured catalog into the output
/// directory, and close the connection whether or not extraction succeeded.
pub async fn run(settings: &Settings, credentials: &Credentials) -> anyhow::Result<Vec<Summary>> {
    let session = Session::open(credentials).await?;
    let ref mut sink = Directory::from(settings.output.clone());
    let ref mut stdout = std::io::stdout();
    let result = Extractor::new(session.client(), settings.limit)
        .run(&settings.catalog, sink, stdout)
        .await;
    session.close().await;
    result
}

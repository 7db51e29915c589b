use crate::config::Credentials;
use anyhow::Context;
use tokio::task::JoinHandle;
use tokio_postgres::Client;
use tokio_postgres::NoTls;

/// One owned database connection.
///
/// The connection future runs on its own task; [`Session::close`] drops the
/// client and waits for that task to finish.
pub struct Session {
    client: Client,
    connection: JoinHandle<()>,
}

impl Session {
    pub async fn open(credentials: &Credentials) -> anyhow::Result<Self> {
        log::info!("connecting to database ({})", credentials);
        let (client, connection) = credentials
            .config()
            .connect(NoTls)
            .await
            .with_context(|| format!("connect to postgres at {}", credentials))?;
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("database connection error: {}", e);
            }
        });
        Ok(Self { client, connection })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn close(self) {
        drop(self.client);
        match self.connection.await {
            Ok(()) => log::info!("database connection closed"),
            Err(e) => log::warn!("database connection task failed: {}", e),
        }
    }
}

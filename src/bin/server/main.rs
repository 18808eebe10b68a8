#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact and partnership form relay server

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use form_relay::{
    domain::{communication::email_addresses::EmailAddress, forms::FormRelay},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{
            state::{AppState, FormsConfig},
            HttpServer, HttpServerConfig,
        },
    },
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The form relay configuration
    #[clap(flatten)]
    pub forms: FormsConfig,

    /// The SMTP transport configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let recipient = EmailAddress::new(&args.forms.recipient)
        .with_context(|| format!("invalid recipient \"{}\"", args.forms.recipient))?;

    let mailer = SMTPMailer::new(&args.smtp).context("failed to configure SMTP transport")?;

    info!(%recipient, smtp_host = %args.smtp.host, "relaying form submissions");

    let state = AppState::new(FormRelay::new(Arc::new(mailer), recipient));

    HttpServer::new(state, &args.server)?.run().await
}

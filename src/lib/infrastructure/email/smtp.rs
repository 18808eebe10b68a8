//! SMTP email service implementation

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{Mailer, MailerError, Message};

/// The port that uses implicit TLS
const SECURE_PORT: u16 = 465;

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username, also used as the sender address
    #[clap(long = "smtp-user", env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long = "smtp-pass", env = "SMTP_PASS", hide_env_values = true)]
    pub password: String,
}

impl SMTPConfig {
    /// Whether the connection is TLS from the start rather than upgraded
    pub fn is_secure(&self) -> bool {
        self.port == SECURE_PORT
    }
}

/// SMTP mailer
#[derive(Clone)]
pub struct SMTPMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    sender: String,
}

impl SMTPMailer {
    /// Create a new SMTP mailer.
    ///
    /// The transport is built once here and reused for every email; no
    /// connection is opened until the first send.
    pub fn new(config: &SMTPConfig) -> Result<Self, MailerError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let relay = if config.is_secure() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host).tls(
                Tls::Opportunistic(TlsParameters::new(config.host.clone())?),
            )
        };

        let transport = relay.credentials(creds).port(config.port).build();

        debug!(
            host = %config.host,
            port = config.port,
            secure = config.is_secure(),
            "SMTP transport configured"
        );

        Ok(Self {
            transport: Arc::new(transport),
            sender: config.username.clone(),
        })
    }

    fn build_email(&self, message: &Message) -> Result<lettre::Message, MailerError> {
        let from: Mailbox = match &message.from {
            Some(from) => from.to_string().parse()?,
            None => self.sender.parse()?,
        };

        let mut builder = lettre::Message::builder()
            .from(from)
            .to(message.to.to_string().parse()?)
            .subject(message.subject.clone());

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(reply_to.to_string().parse()?);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(
            message.plain_body.clone(),
            message.html_body.clone(),
        ))?)
    }
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer")
            .field("transport", &"AsyncSmtpTransport")
            .field("sender", &self.sender)
            .finish()
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, message: &Message) -> Result<(), MailerError> {
        let email = self.build_email(message)?;

        match self.transport.send(email).await {
            Ok(_) => Ok(()),
            Err(e) => Err(MailerError::UnknownError(e.into())),
        }
    }
}

//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::domain::{communication::mailer::Mailer, forms::FormRelay};

/// Form relay configuration
#[derive(Clone, Debug, Parser)]
pub struct FormsConfig {
    /// The inbox every form submission is sent to
    #[arg(
        long = "forms-recipient",
        env = "FORMS_RECIPIENT",
        default_value = "readstechnologies@gmail.com"
    )]
    pub recipient: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<M: Mailer> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Form relay service
    pub forms: Arc<FormRelay<M>>,
}

/// Implementation of the application state
impl<M> AppState<M>
where
    M: Mailer,
{
    /// Create a new application state
    pub fn new(forms: FormRelay<M>) -> Self {
        Self {
            start_time: Utc::now(),
            forms: Arc::new(forms),
        }
    }
}

impl<M> fmt::Debug for AppState<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("recipient", self.forms.recipient())
            .finish()
    }
}

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::moderation::{JobId, Language, ModerationAction};

/// Approve, reject or close job postings on the moderation backend.
#[derive(Parser, Debug)]
#[command(name = "job-moderation")]
#[command(about = "Moderate job postings from the command line")]
#[command(version)]
pub struct Args {
    /// Base URL of the job board backend
    #[arg(
        long,
        value_name = "URL",
        default_value = "http://127.0.0.1:5000",
        env = "JOB_MODERATION_BASE_URL"
    )]
    pub base_url: String,

    /// Language of the notifications
    #[arg(long, value_enum, default_value_t = Lang::En, env = "JOB_MODERATION_LANG")]
    pub lang: Lang,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Publish pending postings
    Approve {
        #[arg(required = true, value_name = "JOB_ID")]
        job_ids: Vec<String>,
    },
    /// Turn pending postings down
    Reject {
        #[arg(required = true, value_name = "JOB_ID")]
        job_ids: Vec<String>,
    },
    /// Withdraw postings
    Close {
        #[arg(required = true, value_name = "JOB_ID")]
        job_ids: Vec<String>,
    },
}

impl Command {
    pub fn action(&self) -> ModerationAction {
        match self {
            Command::Approve { .. } => ModerationAction::Approve,
            Command::Reject { .. } => ModerationAction::Reject,
            Command::Close { .. } => ModerationAction::Close,
        }
    }

    pub fn job_ids(&self) -> Vec<JobId> {
        let ids = match self {
            Command::Approve { job_ids } | Command::Reject { job_ids } | Command::Close { job_ids } => {
                job_ids
            }
        };
        ids.iter().map(|id| JobId::new(id.as_str())).collect()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::En,
            Lang::Ru => Language::Ru,
        }
    }
}

// Runs one moderation command end to end.
//
// The terminal has no page, so we build one: every job id on the command line
// gets a `job-{id}` row before any request goes out. That keeps the page
// contract the actions rely on.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::core::api::HttpTransport;
use crate::core::moderation::{
    ActionOutcome, JobId, ModerationAction, ModerationError, ModerationService,
};
use crate::core::notifications::{Element, RenderSurface};

use super::args::Command;

/// Tally of how a batch of actions ended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub declined: usize,
    pub unreachable: usize,
    pub failed: Vec<JobId>,
}

impl RunSummary {
    fn record(&mut self, job_id: JobId, result: Result<ActionOutcome, ModerationError>) {
        match result {
            Ok(ActionOutcome::Applied) => self.applied += 1,
            Ok(ActionOutcome::Declined) => self.declined += 1,
            Ok(ActionOutcome::Unreachable) => self.unreachable += 1,
            Err(e) => {
                tracing::error!(job_id = %job_id, "{}", e);
                self.failed.push(job_id);
            }
        }
    }
}

/// Put a row for each job on the page so the actions have something to remove.
pub fn seed_page<S: RenderSurface>(surface: &S, job_ids: &[JobId]) {
    for job_id in job_ids {
        let element = Element::new(job_id.element_id(), "job-row", format!("Job {}", job_id));
        if let Err(e) = surface.insert(element) {
            // Same id given twice on the command line.
            tracing::warn!(job_id = %job_id, "Not adding job to page: {}", e);
        }
    }
}

/// Run the command's action for every job concurrently, then wait for the
/// toasts to run out.
pub async fn run<T, S>(service: Arc<ModerationService<T, S>>, command: &Command) -> RunSummary
where
    T: HttpTransport + 'static,
    S: RenderSurface,
{
    let action = command.action();
    let job_ids = command.job_ids();
    seed_page(service.notifier().surface().as_ref(), &job_ids);

    tracing::info!(action = %action, jobs = job_ids.len(), "Running moderation command");

    let mut tasks = JoinSet::new();
    for job_id in job_ids {
        let service = Arc::clone(&service);
        tasks.spawn(async move {
            let result = match action {
                ModerationAction::Approve => service.approve_job(job_id.clone()).await,
                ModerationAction::Reject => service.reject_job(job_id.clone()).await,
                ModerationAction::Close => service.close_job(job_id.clone()).await,
            };
            (job_id, result)
        });
    }

    let mut summary = RunSummary::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((job_id, result)) => summary.record(job_id, result),
            Err(e) => tracing::error!("Moderation task panicked: {}", e),
        }
    }

    tracing::debug!(
        pending = service.notifier().pending(),
        "Waiting for toasts to expire"
    );
    service.notifier().settle().await;
    summary
}

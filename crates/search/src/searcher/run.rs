use tracing::{debug, trace};

use gridwise_core::{Observer, Task};

use crate::{Candidate, MIN_SCORE, filter, library, score, validate};

use super::{Action, Config, Event, SolveResult, Status};

/// Core search loop.
pub(super) fn run<Obs>(task: &Task, config: &Config, mut observer: Obs) -> SolveResult
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut attempts = 0;
    let scope = config.scope();

    for &family in config.families() {
        if !filter::is_compatible(family, task) {
            let event = Event::FamilySkipped { family };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return finish(task, Outcome::Fallback(Status::StoppedByObserver), attempts);
            }
            continue;
        }

        let candidates = match library::generate(family, task.first()) {
            Ok(candidates) => candidates,
            Err(error) => {
                trace!(task = task.id(), %family, %error, "generation failed");
                let event = Event::GenerationFailed {
                    family,
                    error: &error,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return finish(task, Outcome::Fallback(Status::StoppedByObserver), attempts);
                }
                continue;
            }
        };

        for candidate in candidates {
            if attempts == config.max_candidates() {
                return finish(task, Outcome::Fallback(Status::BudgetExhausted), attempts);
            }
            attempts += 1;

            match evaluate(&candidate, task, attempts, scope, &mut observer) {
                Verdict::Continue => {}
                Verdict::SkipFamily => break,
                Verdict::StopEarly => {
                    return finish(task, Outcome::Fallback(Status::StoppedByObserver), attempts);
                }
                Verdict::Accept => return finish(task, Outcome::Solved(candidate), attempts),
            }
        }
    }

    finish(task, Outcome::Fallback(Status::NoCandidateFound), attempts)
}

// ============================================================================
// Validate + observe helper
// ============================================================================

enum Verdict {
    Continue,
    SkipFamily,
    StopEarly,
    Accept,
}

/// Validate the candidate, emit its event, and handle the observer action.
fn evaluate<Obs>(
    candidate: &Candidate,
    task: &Task,
    attempt: usize,
    scope: validate::Scope,
    observer: &mut Obs,
) -> Verdict
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    match validate::check(candidate, task, scope) {
        Ok(()) => {
            let event = Event::Accepted { candidate, attempt };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Verdict::StopEarly,
                Some(Action::Discard) => {
                    trace!(task = task.id(), %candidate, "validated candidate discarded");
                    Verdict::Continue
                }
                Some(Action::SkipFamily) | None => Verdict::Accept,
            }
        }
        Err(mismatch) => {
            trace!(task = task.id(), %candidate, %mismatch, "candidate rejected");
            let event = Event::Rejected {
                candidate,
                mismatch: &mismatch,
                attempt,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Verdict::StopEarly,
                Some(Action::SkipFamily) => Verdict::SkipFamily,
                Some(Action::Discard) | None => Verdict::Continue,
            }
        }
    }
}

enum Outcome {
    Solved(Candidate),
    Fallback(Status),
}

/// Builds the result, falling back to the identity candidate at the score floor.
fn finish(task: &Task, outcome: Outcome, attempts: usize) -> SolveResult {
    let (status, candidate, score) = match outcome {
        Outcome::Solved(candidate) => {
            let score = score(&candidate);
            (Status::Solved, candidate, score)
        }
        Outcome::Fallback(status) => (status, Candidate::Identity, MIN_SCORE),
    };

    debug!(
        task = task.id(),
        ?status,
        family = %candidate.family(),
        %candidate,
        score,
        attempts,
        "search finished"
    );

    SolveResult {
        task_id: task.id().to_owned(),
        status,
        candidate,
        score,
        attempts,
    }
}

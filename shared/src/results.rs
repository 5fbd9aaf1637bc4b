use std::cell::Cell;

use crate::{AnswerResponse, AskClient, ClientTransport, SourceCard};

pub const THINKING_MESSAGE: &str = "Thinking...";
pub const ERROR_MESSAGE: &str = "Sorry, an error occurred. Please check the console and try again.";

/// Identifies one submission. Later submissions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct TicketCounter(Cell<u64>);

impl TicketCounter {
    pub fn next(&self) -> Ticket {
        let next = self.0.get() + 1;
        self.0.set(next);
        Ticket(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Awaiting,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsAction {
    Submitted(Ticket),
    Answered(Ticket, AnswerResponse),
    Failed(Ticket),
}

impl ResultsAction {
    fn ticket(&self) -> Ticket {
        match self {
            Self::Submitted(t) | Self::Answered(t, _) | Self::Failed(t) => *t,
        }
    }
}

/// What the results region currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub visible: bool,
    pub answer: String,
    pub sources: Vec<SourceCard>,
    pub phase: Phase,
    current: Ticket,
}

impl ResultsState {
    pub fn current(&self) -> Ticket {
        self.current
    }

    /// Completions for anything but the most recent submission are dropped.
    pub fn apply(&mut self, action: ResultsAction) {
        match action {
            ResultsAction::Submitted(ticket) => {
                if ticket < self.current {
                    return;
                }
                self.current = ticket;
                self.visible = true;
                self.answer = THINKING_MESSAGE.to_owned();
                self.sources.clear();
                self.phase = Phase::Awaiting;
            }
            ref completion if completion.ticket() != self.current => {
                tracing::debug!(ticket = ?completion.ticket(), current = ?self.current, "dropping stale completion");
            }
            ResultsAction::Answered(_, resp) => {
                self.sources = resp.sources().iter().map(SourceCard::from).collect();
                self.answer = resp.answer;
                self.phase = Phase::Rendered;
            }
            ResultsAction::Failed(_) => {
                self.answer = ERROR_MESSAGE.to_owned();
                self.sources.clear();
                self.phase = Phase::Failed;
            }
        }
    }
}

/// Runs one submission end to end, reporting progress through `dispatch`.
///
/// Returns `false` without touching the transport when the question is empty.
pub async fn submit_question<Transport, Dispatch>(
    client: &AskClient<Transport>,
    question: &str,
    ticket: Ticket,
    mut dispatch: Dispatch,
) -> bool
where
    Transport: ClientTransport,
    Dispatch: FnMut(ResultsAction),
{
    if question.is_empty() {
        return false;
    }

    dispatch(ResultsAction::Submitted(ticket));

    match client.ask(question).await {
        Ok(resp) => {
            tracing::debug!(sources = resp.sources().len(), "answer received");
            dispatch(ResultsAction::Answered(ticket, resp));
        }
        Err(err) => {
            tracing::error!(error = %err, "Error fetching answer");
            dispatch(ResultsAction::Failed(ticket));
        }
    }

    true
}

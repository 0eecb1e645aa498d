use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::adapter::store::pg::transaction::{Record, ToSql, TransactionError, TransactionWrapper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Open,
    Committed,
    RolledBack,
}

#[derive(Clone)]
pub struct OutcomeHandle(Arc<Mutex<Outcome>>);

impl OutcomeHandle {
    pub fn get(&self) -> Outcome {
        *self.0.lock().unwrap()
    }

    fn set(&self, outcome: Outcome) {
        *self.0.lock().unwrap() = outcome;
    }
}

/// Answers statements from a queue of canned results, in order. An exhausted
/// queue answers with no rows.
pub struct FakeTransaction {
    results: VecDeque<Result<Vec<Record>, TransactionError>>,
    outcome: OutcomeHandle,
}

impl FakeTransaction {
    pub fn with_results(
        results: Vec<Result<Vec<Record>, TransactionError>>,
    ) -> (Self, OutcomeHandle) {
        let outcome = OutcomeHandle(Arc::new(Mutex::new(Outcome::Open)));
        let transaction = Self {
            results: results.into(),
            outcome: outcome.clone(),
        };
        (transaction, outcome)
    }

    pub fn returning(records: Vec<Record>) -> (Self, OutcomeHandle) {
        Self::with_results(vec![Ok(records)])
    }

    pub fn failing(error: TransactionError) -> (Self, OutcomeHandle) {
        Self::with_results(vec![Err(error)])
    }

    fn next(&mut self) -> Result<Vec<Record>, TransactionError> {
        self.results.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl TransactionWrapper for FakeTransaction {
    async fn execute(
        &mut self,
        _query: &str,
        _params: Vec<Box<dyn ToSql>>,
    ) -> Result<u64, TransactionError> {
        self.next().map(|records| records.len() as u64)
    }

    async fn fetch_all(
        &mut self,
        _query: &str,
        _params: Vec<Box<dyn ToSql>>,
    ) -> Result<Vec<Record>, TransactionError> {
        self.next()
    }

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError> {
        self.outcome.set(Outcome::RolledBack);
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        self.outcome.set(Outcome::Committed);
        Ok(())
    }
}

//! Batch runner
//!
//! Runs one handler call per input item, strictly in order, and pairs
//! every result with the index of the item that produced it.

use async_trait::async_trait;
use nexrender_core::domain::item::{InputItem, ItemFailure, ItemResult};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::error::{BatchError, ItemError};

/// Executes the operation selected by a single item
#[async_trait]
pub trait ItemHandler: Send + Sync {
    /// Name of the selected operation, used to report failures
    fn operation_name(&self, item: &InputItem) -> String;

    /// Job a failure of this item should be attributed to, if any
    fn failure_job_id(&self, _item: &InputItem) -> Option<String> {
        None
    }

    /// Executes the item and returns the JSON to hand back to the caller
    async fn handle(&self, index: usize, item: &InputItem) -> Result<Value, ItemError>;
}

/// Sequential batch executor
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    config: RunConfig,
}

impl BatchRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Runs every item through `handler`
    ///
    /// # Returns
    /// Exactly one result per item, in input order.
    ///
    /// # Errors
    /// With continue-on-fail off, the first failing item aborts the run with
    /// a [`BatchError`] naming the item index and operation; later items are
    /// not processed.
    pub async fn run(
        &self,
        items: &[InputItem],
        handler: &dyn ItemHandler,
    ) -> Result<Vec<ItemResult>, BatchError> {
        info!(
            "Running batch of {} item(s) (continue on fail: {})",
            items.len(),
            self.config.continue_on_fail
        );

        let mut results = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let operation = handler.operation_name(item);
            debug!("Item {}: {}", index, operation);

            match handler.handle(index, item).await {
                Ok(json) => results.push(ItemResult::ok(index, json)),
                Err(source) if self.config.continue_on_fail => {
                    warn!("Item {} ({}) failed, continuing: {}", index, operation, source);
                    results.push(ItemResult::Failed {
                        index,
                        failure: ItemFailure {
                            message: source.to_string(),
                            job_id: handler.failure_job_id(item),
                        },
                    });
                }
                Err(source) => {
                    warn!("Item {} ({}) failed, aborting run: {}", index, operation, source);
                    return Err(BatchError::ItemFailed {
                        index,
                        operation,
                        source,
                    });
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Handler failing for the configured indices and recording every call
    struct FailingAt {
        failing: Vec<usize>,
        calls: Mutex<Vec<usize>>,
    }

    impl FailingAt {
        fn new(failing: &[usize]) -> Self {
            Self {
                failing: failing.to_vec(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<usize> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ItemHandler for FailingAt {
        fn operation_name(&self, _item: &InputItem) -> String {
            "job.get".to_string()
        }

        async fn handle(&self, index: usize, _item: &InputItem) -> Result<Value, ItemError> {
            self.calls.lock().unwrap().push(index);
            if self.failing.contains(&index) {
                Err(ItemError::validation(format!("item {} is broken", index)))
            } else {
                Ok(json!({ "index": index }))
            }
        }
    }

    fn items(n: usize) -> Vec<InputItem> {
        (0..n).map(|_| InputItem::new()).collect()
    }

    #[tokio::test]
    async fn test_continue_on_fail_records_failure_in_place() {
        let handler = FailingAt::new(&[2]);
        let results = BatchRunner::new(RunConfig::continue_on_fail())
            .run(&items(5), &handler)
            .await
            .unwrap();

        assert_eq!(results.len(), 5);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.index(), i);
            assert_eq!(result.is_ok(), i != 2);
        }
        assert_eq!(
            results[2],
            ItemResult::failed(2, "item 2 is broken"),
        );
        assert_eq!(handler.calls(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_abort_stops_after_failing_item() {
        let handler = FailingAt::new(&[2]);
        let err = BatchRunner::new(RunConfig::abort_on_fail())
            .run(&items(5), &handler)
            .await
            .unwrap_err();

        assert_eq!(err.index(), 2);
        assert_eq!(err.to_string(), "Item 2 (job.get) failed: item 2 is broken");
        assert_eq!(handler.calls(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_every_item_failing() {
        let handler = FailingAt::new(&[0, 1, 2]);
        let results = BatchRunner::new(RunConfig::continue_on_fail())
            .run(&items(3), &handler)
            .await
            .unwrap();

        assert!(results.iter().all(|r| !r.is_ok()));
        assert_eq!(
            results.iter().map(ItemResult::index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let handler = FailingAt::new(&[]);
        let results = BatchRunner::default().run(&[], &handler).await.unwrap();
        assert!(results.is_empty());
    }
}

use crate::core::log::{LogEntry, Logger, Op};
use crate::core::queue::{ConcurrentQueue, SafeQueue};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Shape of a demonstration run: how many workers to spawn and how many
/// items each producer pushes
#[derive(Clone, Copy, Debug)]
pub struct HarnessConfig {
    pub producers: usize,
    pub consumers: usize,
    pub items_per_producer: u64,
}

/// Result of a finished run
pub struct HarnessReport {
    /// Values received by each consumer, in the order that consumer popped them
    pub received: Vec<Vec<u64>>,
    /// Combined operation log of every worker
    pub log: Vec<LogEntry<u64>>,
}

/// Drive producer and consumer threads over one shared queue.
///
/// Producer `p` pushes the disjoint range
/// `p * items_per_producer .. (p + 1) * items_per_producer`. Consumers claim
/// pops from a shared counter before blocking, so exactly one pop happens per
/// pushed item and no consumer is left parked once the run is complete.
pub fn run(config: HarnessConfig) -> HarnessReport {
    assert!(config.producers > 0, "Harness needs at least one producer");
    assert!(config.consumers > 0, "Harness needs at least one consumer");

    let queue: SafeQueue<u64> = Arc::new(ConcurrentQueue::new());
    let total = config.producers as u64 * config.items_per_producer;
    let claimed = Arc::new(AtomicU64::new(0));

    let mut producer_handles = Vec::new();
    for p in 0..config.producers {
        let queue = queue.clone();
        let items = config.items_per_producer;
        producer_handles.push(thread::spawn(move || {
            let mut logger = Logger::new(format!("producer-{}", p));
            let base = p as u64 * items;
            for value in base..base + items {
                queue.push(value);
                logger.log(Op::Push, value);
            }
            logger
        }));
    }

    let mut consumer_handles = Vec::new();
    for c in 0..config.consumers {
        let queue = queue.clone();
        let claimed = claimed.clone();
        consumer_handles.push(thread::spawn(move || {
            let mut logger = Logger::new(format!("consumer-{}", c));
            let mut received = Vec::new();
            // claim before popping so the pops across all consumers add up
            // to exactly the number of pushes
            while claimed.fetch_add(1, Ordering::SeqCst) < total {
                let item = queue.wait_and_pop();
                logger.log(Op::Pop, item);
                received.push(item);
            }
            (received, logger)
        }));
    }

    let mut log = Vec::new();
    for handle in producer_handles {
        log.extend(handle.join().unwrap().into_entries());
    }

    let mut received = Vec::new();
    for handle in consumer_handles {
        let (values, logger) = handle.join().unwrap();
        log.extend(logger.into_entries());
        received.push(values);
    }

    // every pushed item was handed to exactly one consumer
    assert!(queue.is_empty(), "Queue must be drained after a full run");

    HarnessReport { received, log }
}

use ConcurrentQueueMini::core::log::{Logger, Op, append_logs};
use ConcurrentQueueMini::core::queue::{ConcurrentQueue, SafeQueue};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    let shared_queue: SafeQueue<i64> = Arc::new(ConcurrentQueue::new());

    // Consumer starts first and blocks until the producer's first push
    let consumer_queue = shared_queue.clone();
    let consumer = thread::spawn(move || {
        let mut logger = Logger::new("consumer".to_string());
        for _ in 0..10 {
            let value = consumer_queue.wait_and_pop();
            println!("{}", value);
            logger.log(Op::Pop, value);
            thread::sleep(Duration::from_millis(100));
        }
        logger
    });

    let producer_queue = shared_queue.clone();
    let producer = thread::spawn(move || {
        let mut logger = Logger::new("producer".to_string());
        for i in 0..10 {
            producer_queue.push(i);
            logger.log(Op::Push, i);
            thread::sleep(Duration::from_millis(200));
        }
        logger
    });

    let consumer_log = consumer.join().unwrap();
    let producer_log = producer.join().unwrap();

    // Append the logs of both workers as NDJSON
    append_logs(producer_log.entries(), "output.ndjson").expect("Failed to append logs");
    append_logs(consumer_log.entries(), "output.ndjson").expect("Failed to append logs");
}

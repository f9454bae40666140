use pizza_pipeline::config::KitchenConfig;
use pizza_pipeline::error::OrderError;
use pizza_pipeline::lifecycle::Kitchen;
use pizza_pipeline::model::{OrderIndex, OrderRequest, Stage};
use pizza_pipeline::notify::{NotificationBus, RecordingObserver};
use std::sync::Arc;
use std::time::Duration;

/// Millisecond timings: 7 dough, 4 per topping, 10 cook, 5 serve.
fn fast_config() -> KitchenConfig {
    KitchenConfig::default().with_timings(7, 4, 10, 5)
}

fn recording_bus() -> (Arc<NotificationBus>, Arc<RecordingObserver>) {
    let transcript = Arc::new(RecordingObserver::new("transcript"));
    let mut bus = NotificationBus::new();
    bus.subscribe(transcript.clone());
    (Arc::new(bus), transcript)
}

#[tokio::test(start_paused = true)]
async fn test_single_order_batch() {
    let config = fast_config();
    let kitchen = Kitchen::new(&config);
    let (bus, transcript) = recording_bus();

    let report = kitchen
        .run_batch(bus, vec![OrderRequest::new(["Cheese"])])
        .await
        .unwrap();

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.order_index, OrderIndex(1));
    assert_eq!(entry.toppings, ["Cheese"]);
    assert!(entry.is_success());
    assert_eq!(entry.timeline.len(), 4);
    // 7 + 4 + 10 + 5, nothing to wait behind
    assert!(report.total_elapsed >= Duration::from_millis(26));
    assert!(report.total_elapsed < Duration::from_millis(30));
    assert_eq!(transcript.messages().len(), 8);

    kitchen.shutdown().await.expect("Shutdown failed");
}

/// The five classic orders: everything succeeds, the shared stations never overlap,
/// and the batch is much faster than running the orders one after another.
#[tokio::test(start_paused = true)]
async fn test_canonical_batch_is_concurrent_and_serialized() {
    let config = fast_config();
    let kitchen = Kitchen::new(&config);
    let (bus, _) = recording_bus();

    let report = kitchen.run_batch(bus, config.orders.clone()).await.unwrap();

    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.succeeded().count(), 5);
    for (position, (entry, request)) in report.entries.iter().zip(&config.orders).enumerate() {
        assert_eq!(entry.order_index, OrderIndex(position as u32 + 1));
        assert_eq!(entry.toppings, request.toppings);
    }

    assert!(report.is_serialized(Stage::Cook));
    assert!(report.is_serialized(Stage::Serve));
    assert_eq!(report.intervals(Stage::Cook).len(), 5);

    // Dough overlaps across orders, the oven does not.
    assert!(!report.is_serialized(Stage::Dough));

    // Sequential: 5*7 + 10*4 + 5*10 + 5*5 = 150ms. Oven alone needs 50ms after the
    // first pizza is ready at 11ms.
    assert!(report.total_elapsed < Duration::from_millis(150));
    assert!(report.total_elapsed >= Duration::from_millis(61));

    // Topping time scales with the number of toppings.
    let three = report.entry(OrderIndex(3)).unwrap();
    let topping_time = three.stage(Stage::Toppings).unwrap().elapsed();
    assert!(topping_time >= Duration::from_millis(12));
    assert!(topping_time < Duration::from_millis(14));

    assert_eq!(kitchen.served().await.unwrap(), (5, 5));
    kitchen.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_malformed_order_does_not_sink_the_batch() {
    let config = fast_config();
    let kitchen = Kitchen::new(&config);
    let (bus, transcript) = recording_bus();

    let mut orders = OrderRequest::canonical_batch();
    orders[2] = OrderRequest::new(Vec::<String>::new());

    let report = kitchen.run_batch(bus, orders).await.unwrap();

    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.succeeded().count(), 4);
    let rejected = report.entry(OrderIndex(3)).unwrap();
    assert!(matches!(rejected.error, Some(OrderError::InvalidArgument(_))));
    assert!(rejected.timeline.is_empty());

    // The rejected order never started, so it never spoke.
    assert!(transcript
        .messages()
        .iter()
        .all(|m| !m.contains("Order 3")));

    assert_eq!(kitchen.served().await.unwrap(), (4, 4));
    kitchen.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_empty_batch_reports_nothing() {
    let kitchen = Kitchen::new(&fast_config());
    let (bus, transcript) = recording_bus();

    let report = kitchen.run_batch(bus, Vec::new()).await.unwrap();

    assert!(report.entries.is_empty());
    assert!(transcript.messages().is_empty());
    kitchen.shutdown().await.expect("Shutdown failed");
}

/// Every progress line is delivered exactly once, and each order's lines arrive in
/// stage order.
#[tokio::test(start_paused = true)]
async fn test_progress_lines_delivered_once_in_order() {
    let config = fast_config();
    let kitchen = Kitchen::new(&config);
    let (bus, transcript) = recording_bus();

    kitchen.run_batch(bus, config.orders.clone()).await.unwrap();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 5 * 8);

    let mut unique = messages.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), messages.len());

    for n in 1..=5 {
        let tag_dots = format!("Order {n}...");
        let tag_end = format!("Order {n}.");
        let mine: Vec<&String> = messages
            .iter()
            .filter(|m| m.ends_with(&tag_dots) || m.ends_with(&tag_end))
            .collect();
        assert_eq!(mine.len(), 8, "order {n}");
        assert!(mine[0].starts_with("Dough chef started"));
        assert!(mine[3].starts_with("Topping chef finished"));
        assert!(mine[4].starts_with("Oven started"));
        assert!(mine[7].starts_with("Waiter finished"));
    }

    kitchen.shutdown().await.expect("Shutdown failed");
}

/// Observers never see two pizzas in the oven, or two with the waiter: each
/// station's "started" line is followed by the "finished" line for the same order.
#[tokio::test(start_paused = true)]
async fn test_station_announcements_never_overlap() {
    let config = fast_config();
    let kitchen = Kitchen::new(&config);
    let (bus, transcript) = recording_bus();

    kitchen.run_batch(bus, config.orders.clone()).await.unwrap();

    let messages = transcript.messages();
    for (station, started, finished) in [
        ("Oven", "Oven started cooking", "Oven finished cooking"),
        ("Waiter", "Waiter started serving", "Waiter finished serving"),
    ] {
        let lines: Vec<&String> = messages.iter().filter(|m| m.starts_with(station)).collect();
        assert_eq!(lines.len(), 10, "{station}");
        for pair in lines.chunks(2) {
            let order = pair[0]
                .strip_prefix(started)
                .and_then(|rest| rest.strip_suffix("..."))
                .unwrap_or_else(|| panic!("expected a start line, got {:?}", pair[0]));
            assert_eq!(*pair[1], format!("{finished}{order}."));
        }
    }

    kitchen.shutdown().await.expect("Shutdown failed");
}

/// Same batch on the real clock and a multi-threaded runtime.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batch_runs_in_parallel_on_real_clock() {
    let config = KitchenConfig::default().with_timings(20, 10, 20, 10);
    let kitchen = Kitchen::new(&config);
    let (bus, _) = recording_bus();

    let report = kitchen.run_batch(bus, config.orders.clone()).await.unwrap();

    assert_eq!(report.succeeded().count(), 5);
    assert!(report.is_serialized(Stage::Cook));
    assert!(report.is_serialized(Stage::Serve));
    // Sequential sum is 5*20 + 10*10 + 5*20 + 5*10 = 350ms.
    assert!(
        report.total_elapsed < Duration::from_millis(350),
        "took {:?}",
        report.total_elapsed
    );

    kitchen.shutdown().await.expect("Shutdown failed");
}

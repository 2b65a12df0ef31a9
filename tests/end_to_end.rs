//! Prober polling a live Responder.

use std::time::Duration;

use pingpong::config::{ProberConfig, TransportConfig};
use pingpong::{Prober, Shutdown};

mod common;

#[tokio::test]
async fn test_prober_reports_pongs_from_live_responder() {
    let server_logs = common::CapturedLogs::new();
    let (addr, responder) = common::spawn_responder(TransportConfig::plain(0), 0.0, server_logs.logger()).await;

    let logs = common::CapturedLogs::new();
    let config = ProberConfig {
        targets: vec![format!("http://{}", addr)],
        interval_secs: 1,
        request_timeout_secs: 5,
    };
    let prober = Prober::new(&TransportConfig::default(), &config, logs.logger()).unwrap();

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(prober.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(2500)).await;
    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("prober did not stop")
        .unwrap();

    let pongs = logs.count("Pinged target");
    assert!(pongs >= 2, "expected at least 2 successful probes, got {}", pongs);
    assert_eq!(logs.count("Couldn't ping target"), 0);
    assert_eq!(server_logs.count("Got pinged, sent a pong"), pongs);

    responder.trigger();
}

#[tokio::test]
async fn test_flaky_responder_mixes_outcomes() {
    let (addr, responder) = common::spawn_responder(TransportConfig::plain(0), 0.5, tracing::Dispatch::none()).await;

    let logs = common::CapturedLogs::new();
    let config = ProberConfig {
        targets: vec![format!("http://{}", addr); 200],
        interval_secs: 60,
        request_timeout_secs: 5,
    };
    let prober = Prober::new(&TransportConfig::default(), &config, logs.logger()).unwrap();

    let outcomes = prober.probe_round().await;
    let answered = outcomes.iter().filter(|o| o.is_answered()).count();

    assert_eq!(outcomes.len(), 200);
    assert!(answered > 50 && answered < 150, "answered {}", answered);
    assert_eq!(logs.count("Pinged target"), answered);
    assert_eq!(logs.count("Got non-ok response code"), 200 - answered);

    responder.trigger();
}

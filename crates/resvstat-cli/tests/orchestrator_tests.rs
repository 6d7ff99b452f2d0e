//! Orchestration behavior against a scripted connector: width-hint
//! caching, per-target error isolation, and the fatal connection path.

use resvstat::{FatalError, Session};
use resvstat_testing::fixtures::{capability_record, confirmed_record};
use resvstat_testing::{ScriptedConnector, SessionPlan};
use resvstat_types::DisplayMode;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn run_session(
    connector: ScriptedConnector,
    mode: DisplayMode,
    targets: &[&str],
) -> (Result<i32, FatalError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = {
        let mut session = Session::new(connector, mode, &mut out, &mut err);
        session.run(&args(targets))
    };
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn width_probe_runs_once_across_targets() {
    let connector = ScriptedConnector::new(vec![
        SessionPlan {
            capabilities: Ok(capability_record(123_456_789_012)),
            records: vec![confirmed_record("R1")],
            ..SessionPlan::default()
        },
        SessionPlan {
            // A second probe would flip the layout back to narrow; the
            // cached hint must win instead.
            capabilities: Ok(capability_record(0)),
            records: vec![confirmed_record("R2")],
            ..SessionPlan::default()
        },
    ]);
    let probes = connector.capability_calls();

    let (result, out, err) = run_session(connector, DisplayMode::Default, &["R1", "R2"]);

    assert_eq!(result, Ok(0));
    assert_eq!(err, "");
    assert_eq!(probes.get(), 1);

    // Wide layout on every data line, and the header exactly once.
    assert_eq!(out.matches("Duration").count(), 1);
    assert!(out.contains("R1              workq"));
    assert!(out.contains("R2              workq"));
}

#[test]
fn capability_failure_skips_target_and_leaves_hint_unset() {
    let connector = ScriptedConnector::new(vec![
        SessionPlan {
            capabilities: Err(15010),
            error_message: Some("server busy".to_string()),
            records: vec![confirmed_record("R1")],
            ..SessionPlan::default()
        },
        SessionPlan {
            records: vec![confirmed_record("R2")],
            ..SessionPlan::default()
        },
    ]);
    let probes = connector.capability_calls();

    let (result, out, err) = run_session(connector, DisplayMode::Default, &["R1", "R2"]);

    // A failed probe costs only its own target, not the exit status.
    assert_eq!(result, Ok(0));
    assert!(err.contains("resvstat: server busy"));
    assert!(!out.contains("R1"));
    assert!(out.contains("R2"));
    assert_eq!(probes.get(), 2);
}

#[test]
fn malformed_identifier_skips_target_and_exits_1() {
    let connector = ScriptedConnector::new(vec![SessionPlan::with_records(vec![
        confirmed_record("R1"),
    ])]);

    let (result, out, err) =
        run_session(connector, DisplayMode::Default, &["not a resv!", "R1"]);

    assert_eq!(result, Ok(1));
    assert!(err.contains("resvstat: illegally formed reservation identifier: not a resv!"));
    assert!(out.contains("R1"));
}

#[test]
fn connect_failure_aborts_the_run_with_the_native_code() {
    let connector = ScriptedConnector::new(vec![
        SessionPlan::with_records(vec![confirmed_record("R1")]),
        SessionPlan {
            fail_connect: Some(15033),
            ..SessionPlan::default()
        },
    ]);

    let (result, out, err) =
        run_session(connector, DisplayMode::Default, &["R1", "R2@backup"]);

    assert_eq!(result, Err(FatalError { code: 15033 }));
    // The first target's output survives; nothing after the failure does.
    assert!(out.contains("R1"));
    assert!(!out.contains("R2"));
    assert!(err.contains("resvstat: cannot connect to server backup (err=15033)"));
}

#[test]
fn query_error_is_reported_but_records_still_render() {
    let connector = ScriptedConnector::new(vec![SessionPlan {
        records: vec![confirmed_record("R1")],
        query_error: Some(15007),
        ..SessionPlan::default()
    }]);

    let (result, out, err) = run_session(connector, DisplayMode::Default, &["R1"]);

    assert_eq!(result, Ok(0));
    // No server message on the connection, so the generic fallback.
    assert!(err.contains("resvstat: Error 15007"));
    assert!(out.contains("R1"));
}

#[test]
fn no_arguments_means_everything_at_the_default_server() {
    let connector = ScriptedConnector::new(vec![SessionPlan::with_records(vec![
        confirmed_record("R1"),
        confirmed_record("R2"),
    ])]);

    let (result, out, err) = run_session(connector, DisplayMode::NamesOnly, &[]);

    assert_eq!(result, Ok(0));
    assert_eq!(err, "");
    assert_eq!(out, "Resv ID: R1\nResv ID: R2\n");
}

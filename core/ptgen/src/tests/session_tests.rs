use std::sync::Arc;

use common::adapter::NoopLog;

use crate::adapter::StubGenerator;
use crate::jmx::default_document;
use crate::tests::support::{MemoryPlanStore, RecordingDiagnostics, ScriptedConsole};
use crate::usecase::session::PlanSession;

const SETUP: &str = "TEST TYPE: Spike Test - sudden bursts\n\nTEST PARAMETERS:\n- Users/Threads: 300";

struct Harness {
    stub: Arc<StubGenerator>,
    store: Arc<MemoryPlanStore>,
    console: Arc<ScriptedConsole>,
    session: PlanSession,
}

fn harness(responses: &[&str], inputs: &[&str], store: MemoryPlanStore) -> Harness {
    let stub = Arc::new(StubGenerator::new(responses.iter().copied()));
    let store = Arc::new(store);
    let console = Arc::new(ScriptedConsole::new(inputs));
    let session = PlanSession::new(
        stub.clone(),
        Arc::new(RecordingDiagnostics::default()),
        store.clone(),
        console.clone(),
        Arc::new(NoopLog),
    );
    Harness {
        stub,
        store,
        console,
        session,
    }
}

#[test]
fn test_exit_right_after_suggestion() {
    let h = harness(&[SETUP], &["spike test my shop", "4"], MemoryPlanStore::default());
    assert_eq!(h.session.run(None).unwrap(), 0);
    let out = h.console.transcript();
    assert!(out.starts_with("Welcome to the JMeter Test Plan Generator!"));
    assert!(out.contains("Here's my suggested test setup:"));
    assert!(out.contains(SETUP));
    assert!(out.ends_with("Goodbye!"));
    assert!(h.store.saved().is_empty());
}

#[test]
fn test_accept_saves_plan_with_label_from_setup() {
    let h = harness(
        &[SETUP, "no xml here"],
        &["spike test my shop", "1", "n"],
        MemoryPlanStore::default(),
    );
    assert_eq!(h.session.run(None).unwrap(), 0);
    let saved = h.store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0.as_str(), "spike_test");
    assert_eq!(saved[0].1, default_document());
    let out = h.console.transcript();
    assert!(out.contains("JMX file has been generated and saved to: mem/spike_test_1.jmx"));
    assert!(out.contains("Would you like to create another test plan? (y/n)"));
}

#[test]
fn test_modify_then_accept_uses_updated_setup() {
    let updated = "TEST TYPE: Stress Test\n- Users/Threads: 200";
    let h = harness(
        &[SETUP, updated, "nothing"],
        &["spike test", "2", "Change the number of users to 200", "1", "n"],
        MemoryPlanStore::default(),
    );
    h.session.run(None).unwrap();

    let prompts = h.stub.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains("User feedback: Change the number of users to 200"));
    assert!(prompts[2].contains(&format!("Final test setup:\n{}", updated)));
    assert_eq!(h.store.saved()[0].0.as_str(), "stress_test");
    assert!(h.console.transcript().contains("Updated test setup:"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let h = harness(&[SETUP], &["api", "9", "", "4"], MemoryPlanStore::default());
    h.session.run(None).unwrap();
    let out = h.console.transcript();
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
}

#[test]
fn test_restart_starts_fresh_conversation() {
    let h = harness(&[SETUP, "TEST TYPE: Soak"], &["checkout flow", "3", "search page", "4"], MemoryPlanStore::default());
    h.session.run(None).unwrap();
    let prompts = h.stub.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("search page"));
    assert!(!prompts[1].contains("checkout flow"));
}

#[test]
fn test_create_another_plan_after_save() {
    let h = harness(
        &[SETUP, "x", "TEST TYPE: Soak Test", "y"],
        &["checkout flow", "1", "y", "search page", "1", "n"],
        MemoryPlanStore::default(),
    );
    h.session.run(None).unwrap();
    let labels: Vec<String> = h
        .store
        .saved()
        .iter()
        .map(|(l, _)| l.as_str().to_string())
        .collect();
    assert_eq!(labels, vec!["spike_test", "soak_test"]);
    assert!(h.stub.prompts()[2].contains("search page"));
    assert!(!h.stub.prompts()[2].contains("checkout flow"));
}

#[test]
fn test_initial_requirement_skips_prompt_and_blank_lines_reprompt() {
    let h = harness(&[SETUP], &["4"], MemoryPlanStore::default());
    h.session.run(Some("  load test my API  ".to_string())).unwrap();
    assert!(h.stub.prompts()[0].contains("load test my API"));
    assert!(!h.console.transcript().contains("What would you like to test?"));

    let h = harness(&[SETUP], &["", "   ", "api", "4"], MemoryPlanStore::default());
    h.session.run(None).unwrap();
    assert_eq!(
        h.console.transcript().matches("What would you like to test?").count(),
        3
    );
    assert_eq!(h.stub.prompts().len(), 1);
}

#[test]
fn test_eof_ends_session_cleanly() {
    let h = harness(&[], &[], MemoryPlanStore::default());
    assert_eq!(h.session.run(None).unwrap(), 0);
    assert!(h.console.transcript().ends_with("Goodbye!"));
    assert!(h.stub.prompts().is_empty());

    let h = harness(&[SETUP], &["api", "2"], MemoryPlanStore::default());
    assert_eq!(h.session.run(None).unwrap(), 0);
    assert_eq!(h.console.remaining_inputs(), 0);
}

#[test]
fn test_save_failure_propagates() {
    let h = harness(&[SETUP, "x"], &["api", "1"], MemoryPlanStore::failing());
    let err = h.session.run(None).unwrap_err();
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn test_generator_failure_propagates() {
    let h = harness(&[], &["api"], MemoryPlanStore::default());
    let err = h.session.run(None).unwrap_err();
    assert!(err.to_string().contains("no more responses"));
}

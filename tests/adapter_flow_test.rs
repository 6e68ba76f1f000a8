use adapter_demo::{
    Client, DemoRunner, DemoSettings, DiagnosticEvent, DiagnosticSink, LegacyAdapter,
    LegacyComponent, MemorySink, Role, Target,
};
use anyhow::Result;

/// A target that answers directly, without any legacy component behind it.
struct NativeTarget<S: DiagnosticSink> {
    sink: S,
}

impl<S: DiagnosticSink> Target for NativeTarget<S> {
    fn invoke_target(&self) {
        self.sink.emit(DiagnosticEvent::LegacyExecuted);
    }
}

#[test]
fn test_run_operation_emits_client_adapter_legacy_in_order() -> Result<()> {
    let sink = MemorySink::new();
    let legacy = LegacyComponent::new(sink.clone());
    let adapter = LegacyAdapter::new(legacy, sink.clone());
    let client = Client::new(adapter, sink.clone());

    client.run_operation();

    let roles: Vec<Role> = sink.events().iter().map(|e| e.role()).collect();
    assert_eq!(roles, vec![Role::Client, Role::Adapter, Role::Legacy]);
    Ok(())
}

#[test]
fn test_run_operation_twice_repeats_sequence() -> Result<()> {
    let sink = MemorySink::new();
    let adapter = LegacyAdapter::new(LegacyComponent::new(sink.clone()), sink.clone());
    let client = Client::new(adapter, sink.clone());

    client.run_operation();
    let first = sink.take();
    client.run_operation();
    let second = sink.take();

    assert_eq!(first, DiagnosticEvent::SEQUENCE.to_vec());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_client_works_with_any_target() -> Result<()> {
    let sink = MemorySink::new();
    let native = NativeTarget { sink: sink.clone() };
    let client = Client::new(&native, sink.clone());

    client.run_operation();

    assert_eq!(
        sink.events(),
        vec![
            DiagnosticEvent::ClientDelegating,
            DiagnosticEvent::LegacyExecuted
        ]
    );
    Ok(())
}

#[test]
fn test_client_over_boxed_adapter() -> Result<()> {
    let sink = MemorySink::new();
    let target: Box<dyn Target> = Box::new(LegacyAdapter::new(
        LegacyComponent::new(sink.clone()),
        sink.clone(),
    ));
    let client = Client::new(target, sink.clone());

    client.run_operation();

    assert_eq!(sink.events(), DiagnosticEvent::SEQUENCE.to_vec());
    Ok(())
}

#[test]
fn test_runner_is_deterministic() -> Result<()> {
    let settings = DemoSettings {
        repeat: 2,
        ..DemoSettings::default()
    };

    let a = MemorySink::new();
    let b = MemorySink::new();
    DemoRunner::new(settings.clone()).run_with(a.clone());
    DemoRunner::new(settings).run_with(b.clone());

    assert_eq!(a.len(), 6);
    assert_eq!(a.events(), b.events());
    Ok(())
}

//! # Command Dispatch Scenarios
//!
//! Commands mapped through the facade, reaching proxies and mediators of
//! their own scope:
//!
//! ```text
//! INCREMENT ──→ [Controller] ──→ IncrementCommand (fresh per broadcast)
//!                                     │ retrieve_proxy(CounterProxy)
//!                                     └─ send_notification(COUNTER_CHANGED)
//!                                              │
//!                                              ▼
//!                                     [View] ──→ Display mediator
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        counting_factory, CounterProxy, FailingCommand, IncrementCommand, RecordingMediator,
        ResetCommand, COUNTER_CHANGED, INCREMENT, RESET,
    };
    use puremvc_core::{Command, CoreError, Facade, MacroCommand, Multiton};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter_app(multiton: &Multiton, key: &str) -> (Arc<Facade>, Arc<CounterProxy>, Arc<RecordingMediator>) {
        let facade = multiton.facade(key).unwrap();
        let proxy = CounterProxy::new();
        let display = RecordingMediator::new("Display", &[COUNTER_CHANGED]);
        facade.register_proxy(proxy.clone());
        facade.register_mediator(display.clone());
        (facade, proxy, display)
    }

    #[test]
    fn test_command_updates_proxy_and_notifies_mediator() {
        let multiton = Multiton::new();
        let (facade, proxy, display) = counter_app(&multiton, "app1");
        facade.controller().register_command::<IncrementCommand>(INCREMENT);

        facade.send_notification(INCREMENT, None, None).unwrap();
        facade.send_notification(INCREMENT, None, None).unwrap();

        assert_eq!(proxy.value(), 2);
        let received = display.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].body_as::<usize>(), Some(&2));
        assert_eq!(received[1].kind(), Some("increment"));
    }

    #[test]
    fn test_single_subscription_and_last_factory_wins() {
        let multiton = Multiton::new();
        let (facade, proxy, _display) = counter_app(&multiton, "app1");
        let built_increment = Arc::new(AtomicUsize::new(0));
        let built_reset = Arc::new(AtomicUsize::new(0));

        facade.send_notification(INCREMENT, None, None).unwrap();
        facade.register_command("E", counting_factory::<IncrementCommand>(&built_increment));
        facade.send_notification("E", None, None).unwrap();
        assert_eq!(proxy.value(), 1);

        facade.register_command("E", counting_factory::<ResetCommand>(&built_reset));
        assert_eq!(facade.view().observer_count("E"), 1);

        facade.send_notification("E", None, None).unwrap();
        assert_eq!(built_increment.load(Ordering::SeqCst), 1);
        assert_eq!(built_reset.load(Ordering::SeqCst), 1);
        assert_eq!(proxy.value(), 0);
    }

    #[test]
    fn test_remove_command_stops_dispatch() {
        let multiton = Multiton::new();
        let (facade, proxy, _display) = counter_app(&multiton, "app1");
        facade.controller().register_command::<IncrementCommand>(INCREMENT);
        assert!(facade.has_command(INCREMENT));

        facade.remove_command(INCREMENT);
        assert!(!facade.has_command(INCREMENT));
        assert!(!facade.view().has_observer(INCREMENT));

        facade.send_notification(INCREMENT, None, None).unwrap();
        assert_eq!(proxy.value(), 0);
    }

    #[test]
    fn test_command_and_mediator_share_name() {
        let multiton = Multiton::new();
        let (facade, proxy, _display) = counter_app(&multiton, "app1");
        let watcher = RecordingMediator::new("Watcher", &[INCREMENT]);
        facade.controller().register_command::<IncrementCommand>(INCREMENT);
        facade.register_mediator(watcher.clone());

        facade.send_notification(INCREMENT, None, None).unwrap();
        assert_eq!(proxy.value(), 1);
        assert_eq!(watcher.call_count(), 1);

        facade.remove_command(INCREMENT);
        facade.send_notification(INCREMENT, None, None).unwrap();
        assert_eq!(proxy.value(), 1);
        assert_eq!(watcher.call_count(), 2);
    }

    #[test]
    fn test_failing_command_aborts_broadcast() {
        let multiton = Multiton::new();
        let facade = multiton.facade("app1").unwrap();
        let after = RecordingMediator::new("After", &["EXPLODE"]);
        facade.controller().register_command::<FailingCommand>("EXPLODE");
        facade.register_mediator(after.clone());

        let err = facade.send_notification("EXPLODE", None, None).unwrap_err();
        assert!(matches!(err, CoreError::Handler(_)));
        assert!(err.to_string().contains("refusing to handle EXPLODE"));
        assert_eq!(after.call_count(), 0);
    }

    #[test]
    fn test_nested_failure_reaches_outer_sender() {
        let multiton = Multiton::new();
        let (facade, _proxy, _display) = counter_app(&multiton, "app1");
        facade.controller().register_command::<IncrementCommand>(INCREMENT);
        facade
            .controller()
            .register_command::<FailingCommand>(COUNTER_CHANGED);

        let err = facade.send_notification(INCREMENT, None, None).unwrap_err();
        assert!(err.to_string().contains(COUNTER_CHANGED));
    }

    #[test]
    fn test_command_without_proxy_reports_error() {
        let multiton = Multiton::new();
        let facade = multiton.facade("bare").unwrap();
        facade.controller().register_command::<ResetCommand>(RESET);

        let err = facade.send_notification(RESET, None, None).unwrap_err();
        assert!(err.to_string().contains("counter proxy not registered"));
    }

    #[test]
    fn test_macro_command_runs_sub_commands() {
        let multiton = Multiton::new();
        let (facade, proxy, display) = counter_app(&multiton, "app1");
        facade.register_command("TRIPLE", || {
            Box::new(
                MacroCommand::new()
                    .with_sub_command(|| Box::new(IncrementCommand::default()) as Box<dyn Command>)
                    .with_sub_command(|| Box::new(IncrementCommand::default()) as Box<dyn Command>)
                    .with_sub_command(|| Box::new(IncrementCommand::default()) as Box<dyn Command>),
            ) as Box<dyn Command>
        });

        facade.send_notification("TRIPLE", None, None).unwrap();
        assert_eq!(proxy.value(), 3);
        assert_eq!(display.call_count(), 3);
    }
}

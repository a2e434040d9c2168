//! # Multiton Isolation Scenarios
//!
//! Independent application cores sharing one process and one table.

#[cfg(test)]
mod tests {
    use crate::fixtures::{counting_factory, CounterProxy, IncrementCommand, RecordingMediator, INCREMENT};
    use puremvc_core::{CoreError, Multiton};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_mediators_do_not_cross_keys() {
        let multiton = Multiton::new();
        let a = multiton.facade("A").unwrap();
        let b = multiton.facade("B").unwrap();
        let mediator = RecordingMediator::new("Ping", &["TICK"]);

        a.register_mediator(mediator.clone());
        assert!(a.has_mediator("Ping"));
        assert!(!b.has_mediator("Ping"));

        b.send_notification("TICK", None, None).unwrap();
        assert_eq!(mediator.call_count(), 0);

        a.send_notification("TICK", None, None).unwrap();
        assert_eq!(mediator.call_count(), 1);
    }

    #[test]
    fn test_commands_and_proxies_do_not_cross_keys() {
        let multiton = Multiton::new();
        let a = multiton.facade("A").unwrap();
        let b = multiton.facade("B").unwrap();
        let counter_a = CounterProxy::new();
        let counter_b = CounterProxy::new();
        a.register_proxy(counter_a.clone());
        b.register_proxy(counter_b.clone());

        let built = Arc::new(AtomicUsize::new(0));
        a.register_command(INCREMENT, counting_factory::<IncrementCommand>(&built));
        assert!(a.has_command(INCREMENT));
        assert!(!b.has_command(INCREMENT));

        b.send_notification(INCREMENT, None, None).unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 0);

        a.send_notification(INCREMENT, None, None).unwrap();
        assert_eq!(counter_a.value(), 1);
        assert_eq!(counter_b.value(), 0);
    }

    #[test]
    fn test_duplicate_construction_and_lookup() {
        let multiton = Multiton::new();
        let original = multiton.create_facade("app1").unwrap();

        let err = multiton.create_facade("app1").err().unwrap();
        assert!(matches!(err, CoreError::DuplicateFacade { .. }));
        assert!(multiton.create_view("app1").err().unwrap().is_duplicate());
        assert!(multiton.create_controller("app1").err().unwrap().is_duplicate());
        assert!(multiton.create_model("app1").err().unwrap().is_duplicate());

        let again = multiton.facade("app1").unwrap();
        assert!(Arc::ptr_eq(&original, &again));
    }

    #[test]
    fn test_remove_core_resets_scope() {
        let multiton = Multiton::new();
        let facade = multiton.facade("app1").unwrap();
        let mediator = RecordingMediator::new("Ping", &["TICK"]);
        facade.register_mediator(mediator.clone());
        facade.controller().register_command::<IncrementCommand>(INCREMENT);

        multiton.remove_core("app1");
        assert!(!multiton.has_core("app1"));

        let fresh = multiton.facade("app1").unwrap();
        assert!(!fresh.has_mediator("Ping"));
        assert!(!fresh.has_command(INCREMENT));

        fresh.send_notification("TICK", None, None).unwrap();
        assert_eq!(mediator.call_count(), 0);
    }

    #[test]
    fn test_cores_on_separate_threads() {
        let multiton = Multiton::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let multiton = multiton.clone();
                thread::spawn(move || {
                    let key = format!("core-{}", i);
                    let facade = multiton.facade(&key).unwrap();
                    let proxy = CounterProxy::new();
                    facade.register_proxy(proxy.clone());
                    facade.controller().register_command::<IncrementCommand>(INCREMENT);
                    for _ in 0..=i {
                        facade.send_notification(INCREMENT, None, None).unwrap();
                    }
                    proxy.value()
                })
            })
            .collect();

        let totals: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(totals, vec![1, 2, 3, 4]);
        assert_eq!(multiton.keys().len(), 4);
    }
}

use std::sync::{Arc, Mutex};

#[allow(unused)]
pub fn init_tracing() {
    // a subscriber may already be installed by another test in this binary
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_test_writer().try_init();
}

#[allow(unused)]
pub fn watcher<T: Send + 'static>() -> (Box<dyn Fn(T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let accumulate = {
        let changes = changes.clone();
        Box::new(move |value: T| {
            changes.lock().unwrap().push(value);
        })
    };

    let check = Box::new(move || {
        let changes: Vec<T> = changes.lock().unwrap().drain(..).collect();
        changes
    });

    (accumulate, check)
}

#![allow(dead_code)]

use std::cell::Cell;

use not_null::NonNullRef;

pub struct App {
    name: String,
    log: Cell<Vec<String>>,
}

impl App {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            log: Cell::new(Vec::new()),
        }
    }

    fn record(&self, entry: String) {
        let mut log = self.log.take();
        log.push(entry);
        self.log.set(log);
    }

    pub fn run(&self) {
        self.record(format!("Running {}", self.name));
    }

    pub fn shutdown(&self) {
        self.record(format!("App {} is closing...", self.name));
    }

    pub fn diagnose(&self) {
        self.record("Diagnosing...".to_owned());
    }

    pub fn log(&self) -> Vec<String> {
        let log = self.log.take();
        self.log.set(log.clone());
        log
    }
}

pub struct TestParams;

pub fn run_app(app: NonNullRef<Option<&App>>) {
    app.run();
    app.shutdown();
}

pub fn diagnose_app(app: NonNullRef<*mut App>) {
    unsafe { app.as_ref() }.diagnose();
}

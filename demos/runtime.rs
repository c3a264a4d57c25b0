use std::error::Error;

use not_null::{report, ContractViolation, NonNullRef};

struct App {
    name: String,
}

impl App {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    fn run(&self) {
        println!("Running {}", self.name);
    }

    fn shutdown(&self) {
        println!("App {} is closing...", self.name);
    }
}

struct TestParams;

fn report_error(message: &str) {
    eprintln!("{}", message);
}

fn run_app(app: NonNullRef<Option<&App>>) {
    app.run();
    app.shutdown();
}

// The older way: every function re-checks its inputs.
fn test_app_check(app: Option<&App>, params: Option<&TestParams>) {
    match (app, params) {
        (Some(_), Some(_)) => {}
        _ => report_error("null input params"),
    }
}

fn test_app(_app: NonNullRef<Option<&App>>, _params: NonNullRef<Option<&TestParams>>) {
    // input handles are valid
}

fn launch(app: Option<&App>, params: Option<&TestParams>) -> Result<(), Box<dyn Error>> {
    test_app(NonNullRef::new(app)?, NonNullRef::new(params)?);
    run_app(NonNullRef::new(app)?);
    Ok(())
}

fn trace(violation: &ContractViolation) {
    eprintln!("[not_null] {}", violation);
}

pub fn main() {
    report::set_reporter(trace);

    let mut my_app = Some(Box::new(App::new("Poker")));
    let my_params = Some(Box::new(TestParams));

    test_app_check(my_app.as_deref(), my_params.as_deref());

    // reset the owner
    my_app = None;

    if let Err(e) = launch(my_app.as_deref(), my_params.as_deref()) {
        println!("{}", e);
        report_error("null input params");
    }

    println!("Finished...");
}

use not_null::NonNullRef;

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

    fn diagnose(&self) {
        println!("Diagnosing...");
    }
}

fn run_app(app: NonNullRef<*mut App>) {
    let app = unsafe { app.as_ref() };
    app.run();
    app.shutdown();
}

fn diagnose_app(app: NonNullRef<*mut App>) {
    unsafe { app.as_ref() }.diagnose();
}

pub fn main() {
    {
        let my_app: NonNullRef<*mut App> = NonNullRef::from(Box::leak(Box::new(App::new("Poker"))));

        run_app(my_app);
        diagnose_app(my_app);

        // We can free it, but cannot store null
        drop(unsafe { Box::from_raw(my_app.get()) });
        println!("Freed, still non-null: {:p}", my_app);

        // my_app = NonNullRef::from(core::ptr::null_mut());
        //   error[E0277]: the trait bound `NonNullRef<*mut App>: From<*mut App>` is not satisfied
    }

    {
        // run_app(core::ptr::null_mut());
        //   error[E0308]: mismatched types
    }

    {
        // const MY_APP: NonNullRef<*mut App> = not_null::non_null!(mut core::ptr::null_mut());
        //   error[E0080]: evaluation of constant value failed
    }
}

//! Shared test doubles for engine unit tests.

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::{Arc, Mutex};

    use crate::report::{Report, Reporter};
    use crate::session::{Session, SessionFactory};

    type Behavior = Arc<dyn Fn(&str) -> Result<(), anyhow::Error> + Send + Sync>;
    type ErrorMaker = Arc<dyn Fn() -> anyhow::Error + Send + Sync>;

    /// Factory producing sessions with scripted behavior, no database
    /// required.
    pub struct ScriptedFactory {
        connect_error: Option<ErrorMaker>,
        behavior: Behavior,
    }

    impl ScriptedFactory {
        pub fn new(behavior: impl Fn(&str) -> Result<(), anyhow::Error> + Send + Sync + 'static) -> Self {
            Self {
                connect_error: None,
                behavior: Arc::new(behavior),
            }
        }

        /// Every statement succeeds.
        pub fn succeeding() -> Self {
            Self::new(|_| Ok(()))
        }

        /// Every statement fails with the scripted error.
        pub fn failing_with(make: impl Fn() -> anyhow::Error + Send + Sync + 'static) -> Self {
            Self::new(move |_| Err(make()))
        }

        /// Statements containing `fragment` fail; everything else succeeds.
        pub fn failing_on(
            fragment: &'static str,
            make: impl Fn() -> anyhow::Error + Send + Sync + 'static,
        ) -> Self {
            Self::new(move |sql| {
                if sql.contains(fragment) {
                    Err(make())
                } else {
                    Ok(())
                }
            })
        }

        /// `open_connection` itself fails.
        pub fn refusing_connections() -> Self {
            Self::refusing_connections_with(|| anyhow::anyhow!("connection pool exhausted"))
        }

        /// `open_connection` fails with the scripted error.
        pub fn refusing_connections_with(
            make: impl Fn() -> anyhow::Error + Send + Sync + 'static,
        ) -> Self {
            Self {
                connect_error: Some(Arc::new(make)),
                behavior: Arc::new(|_| Ok(())),
            }
        }
    }

    pub struct ScriptedSession {
        behavior: Behavior,
    }

    impl Session for ScriptedSession {
        fn execute(&mut self, sql: &str) -> Result<(), anyhow::Error> {
            (self.behavior)(sql)
        }
    }

    impl SessionFactory for ScriptedFactory {
        type Session = ScriptedSession;

        fn open_connection(&self) -> Result<Self::Session, anyhow::Error> {
            if let Some(make) = &self.connect_error {
                return Err(make());
            }
            Ok(ScriptedSession {
                behavior: Arc::clone(&self.behavior),
            })
        }
    }

    /// Reporter that collects reports for assertions. Clones share the same
    /// buffer, so tests can keep a handle after moving one into an executor.
    #[derive(Clone, Default)]
    pub struct RecordingReporter {
        reports: Arc<Mutex<Vec<Report>>>,
    }

    impl RecordingReporter {
        pub fn reports(&self) -> Vec<Report> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&self, report: &Report) {
            self.reports.lock().unwrap().push(report.clone());
        }
    }
}

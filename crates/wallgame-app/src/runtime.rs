//! Generic runtime for the room page.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`App`]: room controller state machine
//! - [`Driver`]: platform-specific I/O

use crate::{App, AppAction, Driver};

/// Generic runtime that feeds driver events into the [`App`] and executes the
/// resulting actions.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and controller.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop until the App quits or the driver runs dry.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let actions = self.app.connect();
        let mut should_quit = self.process_actions(actions).await?;

        while !should_quit {
            let Some(event) = self.driver.next_event(&self.app).await? else {
                tracing::debug!("driver has no more events");
                break;
            };
            let actions = self.app.handle(event);
            should_quit = self.process_actions(actions).await?;
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit. Actions after a `Quit` are dropped.
    async fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Connect { url } => self.driver.connect(&url).await?,
                AppAction::Send(message) => {
                    // The selector is already idle; the server re-asks after resync
                    if let Err(e) = self.driver.send(message).await {
                        tracing::debug!(error = %e, "dropping outbound message");
                    }
                },
                AppAction::Disconnect => self.driver.disconnect().await,
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

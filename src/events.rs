pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

pub enum EngineEvent {
    /// Advance the board by one generation
    Step,

    /// Throw the board away and seed a fresh one
    Reseed,
}

pub enum AppEvent {
    /// Stop or resume the step schedule
    TogglePause,

    /// Show or hide the gridline overlay
    ToggleGridlines,

    /// The terminal was resized
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}

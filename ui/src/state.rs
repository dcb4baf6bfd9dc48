use shipview_business::{BusinessConfig, FetchRecordsCommand, RecordsList, register_records_states};
use shipview_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::from_env())
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    /// Registers the records states and queues the first fetch.
    pub fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_records_states(&mut ctx, config);

        // Spinner until the first fetch lands.
        ctx.state_mut::<RecordsList>().is_loading = true;
        ctx.enqueue_command::<FetchRecordsCommand>();

        Self { ctx }
    }
}

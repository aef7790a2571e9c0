use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DataReady(Ok(data)) => {
            state.install_chart(data);
            Vec::new()
        }
        Msg::DataReady(Err(fault)) => {
            state.set_fault(fault);
            Vec::new()
        }
        Msg::RebuildClicked => {
            // Dispose before the reload so a failed pass can never leave a
            // stale chart behind.
            state.dispose_chart();
            vec![Effect::ReloadData]
        }
        Msg::Tick => {
            state.tick_animation();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

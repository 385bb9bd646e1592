//! Flow-Tests: AppIntents durch den AppController gegen einen AppState.

mod controller_flow;

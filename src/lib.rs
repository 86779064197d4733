pub mod config;
pub mod domain {
    pub mod reward;
}
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod rewards;
        pub mod simulations;
    }
}
pub mod repo {
    pub mod simulations_repo;
}
pub mod scoring {
    pub mod engine;
    pub mod types;
}
pub mod service {
    pub mod reward_service;
}
pub mod session {
    pub mod context;
    pub mod trust;
}

#[derive(Clone)]
pub struct AppState {
    pub reward_service: service::reward_service::RewardService,
    pub simulations_repo: repo::simulations_repo::SimulationsRepo,
}

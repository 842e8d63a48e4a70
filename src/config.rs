#[derive(clap::Parser, Clone, Debug)]
pub struct Config {
    #[clap(long, env)]
    pub app_component: String,

    #[clap(long, env, default_value = "http://localhost:8086")]
    pub api_base_url: String,

    /// Bearer token for the ranking service. Injected at runtime, never committed.
    #[clap(long, env, hide_env_values = true)]
    pub api_token: Option<String>,

    #[clap(long, env, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_secs: u64,

    #[clap(long, env)]
    pub request_timeout_secs: Option<u64>,

    #[clap(long, env)]
    pub web_host: Option<String>,

    #[clap(long, env)]
    pub web_port: Option<u16>,

    #[clap(long, env)]
    pub rank_user_id: Option<String>,

    #[clap(long, env, default_value = "http://localhost:8084")]
    pub users_base_url: String,

    #[clap(long, env, default_value = "http://localhost:8085")]
    pub scores_base_url: String,

    #[clap(long, env, default_value_t = 100)]
    pub load_test_actors: usize,

    #[clap(long, env, default_value_t = 30)]
    pub load_test_duration_secs: u64,

    #[clap(long, env, default_value_t = 1000)]
    pub load_test_think_time_ms: u64,

    #[clap(long, env, default_value = "classic")]
    pub load_test_game_mode: String,

    #[clap(long, env, default_value = "1")]
    pub load_test_rank_user_id: String,

    #[clap(long, env, default_value_t = 200)]
    pub load_test_signup_status: u16,

    #[clap(long, env, default_value_t = 200)]
    pub load_test_login_status: u16,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,
}

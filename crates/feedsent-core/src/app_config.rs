use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Half-width of the neutral band shared by the VADER and `TextBlob` backends.
    pub neutral_threshold: f64,
    /// Base URL of the TEI server hosting the SST-2 classifier, if any.
    pub classifier_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub article_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("neutral_threshold", &self.neutral_threshold)
            .field(
                "classifier_url",
                &self.classifier_url.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("article_limit", &self.article_limit)
            .finish()
    }
}

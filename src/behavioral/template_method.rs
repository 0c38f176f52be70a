//! Template method: posting to a social network.
//!
//! [`SocialNetwork::post`] fixes the order of the steps (log in, send,
//! log out); each network only fills in the steps themselves.

use tracing::debug;

pub trait SocialNetwork {
    fn network_name(&self) -> &str;

    /// Returns `true` when the credentials are accepted.
    fn log_in(&mut self, transcript: &mut Vec<String>) -> bool;

    fn send_data(&mut self, message: &str, transcript: &mut Vec<String>);

    fn log_out(&mut self, transcript: &mut Vec<String>);

    /// The template method. Data is only sent after a successful log-in.
    fn post(&mut self, message: &str) -> Vec<String> {
        let mut transcript = Vec::new();
        if self.log_in(&mut transcript) {
            self.send_data(message, &mut transcript);
            self.log_out(&mut transcript);
        } else {
            transcript.push(format!("{}: login failed, nothing posted", self.network_name()));
        }
        debug!(network = self.network_name(), steps = transcript.len(), "post finished");
        transcript
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

pub struct Facebook {
    credentials: Credentials,
    posts: Vec<String>,
}

impl Facebook {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            posts: Vec::new(),
        }
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }
}

impl SocialNetwork for Facebook {
    fn network_name(&self) -> &str {
        "Facebook"
    }

    fn log_in(&mut self, transcript: &mut Vec<String>) -> bool {
        transcript.push(format!("Checking Facebook credentials for {}", self.credentials.username));
        if !self.credentials.is_valid() {
            return false;
        }
        transcript.push(format!("Logged in to Facebook as {}", self.credentials.username));
        true
    }

    fn send_data(&mut self, message: &str, transcript: &mut Vec<String>) {
        self.posts.push(message.to_string());
        transcript.push(format!("Posted to Facebook timeline: '{}'", message));
    }

    fn log_out(&mut self, transcript: &mut Vec<String>) {
        transcript.push(format!("{} logged out of Facebook", self.credentials.username));
    }
}

/// Tweets longer than this are truncated.
pub const TWEET_LIMIT: usize = 280;

pub struct Twitter {
    credentials: Credentials,
    tweets: Vec<String>,
}

impl Twitter {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            tweets: Vec::new(),
        }
    }

    pub fn tweets(&self) -> &[String] {
        &self.tweets
    }
}

impl SocialNetwork for Twitter {
    fn network_name(&self) -> &str {
        "Twitter"
    }

    fn log_in(&mut self, transcript: &mut Vec<String>) -> bool {
        transcript.push(format!("Checking Twitter credentials for @{}", self.credentials.username));
        if !self.credentials.is_valid() {
            return false;
        }
        transcript.push(format!("Logged in to Twitter as @{}", self.credentials.username));
        true
    }

    fn send_data(&mut self, message: &str, transcript: &mut Vec<String>) {
        let tweet: String = message.chars().take(TWEET_LIMIT).collect();
        transcript.push(format!("Tweeted: '{}'", tweet));
        self.tweets.push(tweet);
    }

    fn log_out(&mut self, transcript: &mut Vec<String>) {
        transcript.push(format!("@{} logged out of Twitter", self.credentials.username));
    }
}

//! Mock "fetch more stories" responder.
//!
//! The original page answered `GET /api/stories` from a service worker; here
//! the same static payload is produced entirely from client-side code. Any
//! request the responder does not handle returns `None` (pass through).

use serde::{Deserialize, Serialize};

pub const STORIES_PATH: &str = "/api/stories";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Story {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Serialize)]
struct StoriesPayload {
    stories: &'static [Story],
}

pub const MOCK_STORIES: &[Story] = &[
    Story {
        title: "Chester\u{2019}s Thick Sandwich",
        body: "Chester made a thick sandwich with crunchy chips. When he took a whiff, \
               he shouted, \u{201c}What a chewy, chunky lunch!\u{201d} Then he shared with \
               Theo on the white bench.",
    },
    Story {
        title: "Whitney and the Shiny Shell",
        body: "Whitney found a shiny shell that whispered wishes. She chose to thank her \
               friends with warm hot chocolate, while they chatted by the wharf at twilight.",
    },
];

/// Answers a handled request with its JSON body, or `None` to pass through.
/// Only same-path `GET /api/stories` is handled, as in the original intercept.
pub fn respond(method: &str, path: &str) -> Option<String> {
    if method != "GET" || path != STORIES_PATH {
        return None;
    }
    serde_json::to_string(&StoriesPayload { stories: MOCK_STORIES }).ok()
}

// Consumer-side view of the payload (what the page renders after a "fetch").

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FetchedStory {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FetchedPayload {
    #[serde(default)]
    pub stories: Vec<FetchedStory>,
}

pub fn parse_payload(json: &str) -> Result<FetchedPayload, serde_json::Error> {
    serde_json::from_str(json)
}

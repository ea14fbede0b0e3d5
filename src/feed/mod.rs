use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

const TIP_URL: &str = "https://api.adviceslip.com/advice";
const QUOTE_URL: &str = "https://api.quotable.io/random";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) const FALLBACK_TIPS: &[&str] = &[
    "Write down the thing you almost bought. Future you will thank you.",
    "A shopping list is a contract. Stick to it.",
    "Wait 24 hours before any non-essential purchase.",
    "Unsubscribe from one store newsletter today.",
    "Cook once, eat twice. Leftovers are free money.",
    "Every skipped temptation is budget you get to keep.",
];

pub(crate) const FALLBACK_QUOTES: &[&str] = &[
    "\"Beware of little expenses; a small leak will sink a great ship.\" - Benjamin Franklin",
    "\"The art is not in making money, but in keeping it.\" - Proverb",
    "\"Do not save what is left after spending, but spend what is left after saving.\" - Warren Buffett",
    "\"He who buys what he does not need, steals from himself.\" - Swedish proverb",
    "\"It is not the man who has too little, but the man who craves more, that is poor.\" - Seneca",
];

/// Seedable source for fallback content, so tests can pin the choice.
pub(crate) struct FallbackPool {
    rng: Pcg64,
}

impl FallbackPool {
    pub(crate) fn new() -> Self {
        Self {
            rng: Pcg64::from_entropy(),
        }
    }

    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub(crate) fn tip(&mut self) -> &'static str {
        FALLBACK_TIPS.choose(&mut self.rng).copied().unwrap_or(FALLBACK_TIPS[0])
    }

    pub(crate) fn quote(&mut self) -> &'static str {
        FALLBACK_QUOTES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(FALLBACK_QUOTES[0])
    }
}

/// The two motivational-content sources. Each fetch extracts exactly one
/// string from the response; any failure along the way (network, status,
/// timeout, shape) resolves to a fallback pick instead of an error.
#[derive(Clone)]
pub(crate) struct MotivationFeed {
    tip_url: String,
    quote_url: String,
}

impl MotivationFeed {
    pub(crate) fn new() -> Self {
        Self {
            tip_url: TIP_URL.into(),
            quote_url: QUOTE_URL.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_urls(tip_url: impl Into<String>, quote_url: impl Into<String>) -> Self {
        Self {
            tip_url: tip_url.into(),
            quote_url: quote_url.into(),
        }
    }

    pub(crate) fn tip(&self, fallback: &mut FallbackPool) -> String {
        fetch(&self.tip_url)
            .and_then(|body| parse_tip(&body))
            .unwrap_or_else(|| fallback.tip().to_string())
    }

    pub(crate) fn quote(&self, fallback: &mut FallbackPool) -> String {
        fetch(&self.quote_url)
            .and_then(|body| parse_quote(&body))
            .unwrap_or_else(|| fallback.quote().to_string())
    }
}

fn fetch(url: &str) -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .ok()?;
    let response = client.get(url).send().ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.text().ok()
}

/// Advice-slip shape: `{"slip": {"id": 1, "advice": "..."}}`
fn parse_tip(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let advice = value.get("slip")?.get("advice")?.as_str()?.trim();
    if advice.is_empty() {
        return None;
    }
    Some(advice.to_string())
}

/// Quotable shape: `{"content": "...", "author": "..."}`, composed as
/// `"<quote>" - <author>`.
fn parse_quote(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let content = value.get("content")?.as_str()?.trim();
    let author = value.get("author")?.as_str()?.trim();
    if content.is_empty() || author.is_empty() {
        return None;
    }
    Some(format!("\"{content}\" - {author}"))
}
